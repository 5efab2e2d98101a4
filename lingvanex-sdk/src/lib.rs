#![doc = include_str!("../README.md")]

use bon::bon;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};

mod error;
pub use error::Error;

mod ops;
mod types;
pub use types::*;

mod utils;

const BASE_URL: &str = "https://api-b2b.backenster.com/b1/api/v3";

/// Lingvanex API client.
///
/// Holds the API key and the HTTP transport. The key is attached to every
/// request as `Authorization: Bearer <key>` and cannot change after the
/// client is built, so the client can be shared by reference across tasks.
pub struct Client {
    pub(crate) http_client: reqwest::Client,
    pub(crate) base_url: String,
}

#[bon]
impl Client {
    /// The API key can be created on the user control panel page
    /// <https://lingvanex.com/account>. The key is not validated locally;
    /// an invalid key surfaces as an authentication error on the first call.
    #[builder(on(String, into))]
    pub fn new(api_key: String, base_url: Option<String>) -> Self {
        let mut header_map = HeaderMap::new();
        let mut auth_val = HeaderValue::from_str(&format!("Bearer {}", api_key)).unwrap();
        auth_val.set_sensitive(true);
        header_map.insert(AUTHORIZATION, auth_val);

        let http_client = reqwest::Client::builder()
            .default_headers(header_map)
            .build()
            .unwrap();

        Self {
            http_client,
            base_url: base_url.unwrap_or_else(|| BASE_URL.to_owned()),
        }
    }

    /// Text translation
    pub fn translate(&self) -> TranslateBuilder<'_> {
        Translate::builder(self)
    }

    /// Getting the list of languages
    pub fn get_languages(&self) -> GetLanguagesBuilder<'_> {
        GetLanguages::builder(self)
    }
}
