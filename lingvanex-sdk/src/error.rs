use reqwest::StatusCode;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// HTTP status outside 2xx. The body is kept as plain text and is not
    /// parsed for structure.
    #[error("request api failed: {status}, message: {message}")]
    RequestAPIFailed { status: StatusCode, message: String },
    /// 2xx response whose envelope carries a non-null `err` string.
    #[error("api error: {0}")]
    Api(String),
    #[error("JSON parse error: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),
}
