use crate::Error;

/// Every Lingvanex response is an envelope with an `err` field beside the
/// payload. A non-null `err` on a 2xx status is reported as [`Error::Api`]
/// before the payload shape is checked.
pub(crate) async fn parse_envelope<T: serde::de::DeserializeOwned>(
    resp: reqwest::Response,
) -> Result<T, Error> {
    let status = resp.status();
    if !status.is_success() {
        return Err(Error::RequestAPIFailed {
            status,
            message: resp.text().await.unwrap_or_default(),
        });
    }

    let text = resp.text().await?;
    let value: serde_json::Value = serde_json::from_str(&text)?;
    if let Some(err) = value.get("err").and_then(serde_json::Value::as_str) {
        return Err(Error::Api(err.to_owned()));
    }

    let data = serde_json::from_value(value)?;
    Ok(data)
}
