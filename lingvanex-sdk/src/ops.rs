use crate::Error;
use crate::types::*;
use crate::utils::parse_envelope;

impl Translate<'_> {
    /// Translates the input text, returning the translated text.
    ///
    /// Issues exactly one POST; nothing is retried.
    pub async fn send(&self) -> Result<TranslateResponse, Error> {
        let client = self.client;
        let resp = client
            .http_client
            .post(format!("{}/translate", client.base_url))
            .json(self)
            .send()
            .await?;

        let res = parse_envelope(resp).await?;
        Ok(res)
    }
}

impl GetLanguages<'_> {
    /// Gets the list of languages supported by the service.
    ///
    /// Returns the `result` array of the response envelope.
    pub async fn send(&self) -> Result<Vec<Language>, Error> {
        let client = self.client;
        let resp = client
            .http_client
            .get(format!("{}/getLanguages", client.base_url))
            .query(self)
            .send()
            .await?;

        let res: LanguagesResponse = parse_envelope(resp).await?;
        Ok(res.result)
    }
}
