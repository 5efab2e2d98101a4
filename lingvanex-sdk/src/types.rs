use crate::Client;
use bon::Builder;
use serde::{Deserialize, Serialize};

// region    --- translate
#[derive(Builder, Serialize)]
pub struct Translate<'a> {
    #[builder(start_fn)]
    #[serde(skip_serializing)]
    pub(crate) client: &'a Client,
    /// Source language code in the "language code_country code" format,
    /// lowercase language, uppercase country (en_GB, es_ES, ru_RU etc.).
    /// When absent, the field is omitted from the body and the service
    /// auto-detects the source language.
    #[serde(skip_serializing_if = "Option::is_none")]
    from: Option<&'a str>,
    /// Target language code in the "language code_country code" format.
    to: &'a str,
    /// Data for translation.
    data: &'a str,
    #[builder(default = "api")]
    platform: &'a str,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TranslateResponse {
    /// Error text from the envelope; null when the request succeeded.
    /// A non-null value on a 2xx status is surfaced as [`crate::Error::Api`],
    /// so this is always `None` on values returned to the caller.
    pub err: Option<String>,
    /// Result of the translation.
    pub result: String,
    /// The number of letters translated using the service cache.
    pub cache_use: i64,
    /// Source data for the translation as received by the service.
    pub source: String,
    /// Code of the source language, detected or supplied.
    pub from: String,
    /// Transliteration of the source data.
    pub source_transliteration: String,
    /// Transliteration of the result.
    pub target_transliteration: String,
}
// endregion --- translate

// region    --- languages
#[derive(Builder, Serialize)]
pub struct GetLanguages<'a> {
    #[builder(start_fn)]
    #[serde(skip_serializing)]
    pub(crate) client: &'a Client,
    #[builder(default = "api")]
    platform: &'a str,
    /// Language code used to display the names of the languages, in the
    /// "language code_country code" format. English is used when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<&'a str>,
}

#[derive(Deserialize, Debug)]
pub struct LanguagesResponse {
    pub err: Option<String>,
    pub result: Vec<Language>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Language {
    /// The language code in the "language code_country code" format.
    #[serde(rename = "full_code")]
    pub full_code: String,
    /// The language code in the "language code" format.
    pub name: Option<String>,
    /// English name of the language.
    pub english_name: String,
    /// The language name translated using the language given by the `code`
    /// query parameter.
    pub code_name: String,
    /// Relative address of the country flag image, e.g. static/flags/afrikaans.
    /// The full download address is https://backenster.com/v2/<flag_path>.png;
    /// append @2x or @3x before .png for higher resolutions.
    pub flag_path: String,
    /// A word for testing a speech synthesizer.
    pub test_word_for_syntezis: String,
    /// Functions supported for this language.
    pub modes: Vec<Mode>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Mode {
    /// Name of the function: "Speech synthesis", "Image recognition",
    /// "Translation" or "Speech recognition".
    pub name: String,
    /// Whether the function is on.
    pub value: bool,
    /// Whether speech can be synthesized for both sexes. Present only for
    /// the "Speech synthesis" function.
    pub genders: Option<bool>,
}
// endregion --- languages
