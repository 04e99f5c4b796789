use serde::{Deserialize, Serialize};

use crate::{Lookup, parse_or};

fn default_api_url() -> String {
    "https://translate.googleapis.com/translate_a/single".to_string()
}

fn default_timeout_ms() -> u64 {
    10_000
}

fn default_min_word_length() -> usize {
    1
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslatorConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Upper bound for one provider call
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    #[serde(default = "default_min_word_length")]
    pub min_word_length: usize,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            timeout_ms: default_timeout_ms(),
            min_word_length: default_min_word_length(),
        }
    }
}

impl TranslatorConfig {
    pub(crate) fn from_lookup(lookup: &Lookup) -> Self {
        Self {
            api_url: lookup("TRANSLATOR_API_URL").unwrap_or_else(default_api_url),
            timeout_ms: parse_or(lookup, "TRANSLATOR_TIMEOUT_MS", default_timeout_ms()),
            min_word_length: parse_or(lookup, "MIN_WORD_LENGTH", default_min_word_length()),
        }
    }
}
