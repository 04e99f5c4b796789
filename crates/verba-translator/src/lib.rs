use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub type LanguageCode = String;

/// Source language sentinel asking the provider to detect the language itself
pub const AUTO_DETECT: &str = "auto";

/// Translation provider interface
#[async_trait::async_trait]
pub trait Translator: Send + Sync {
    /// Translate a single word or phrase from source to target language.
    ///
    /// `from` may be [`AUTO_DETECT`]. An `Ok` payload with empty text is a
    /// successful-but-empty translation, not a failure.
    async fn translate(
        &self,
        text: &str,
        from: LanguageCode,
        to: LanguageCode,
    ) -> Result<RawPayload, TranslateError>;

    /// Provider metadata
    fn metadata(&self) -> ProviderMetadata;
}

/// Loosely structured provider response.
///
/// `extra_data` holds the named sections (`definitions`, `synonyms`,
/// `examples`, `all-translations`, `translation`, `confidence`, ...). Any of
/// them may be missing or null.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawPayload {
    /// Text that was sent for translation
    pub origin: String,
    /// Rendered translation
    pub text: String,
    /// Source language as reported by the provider (detected when auto)
    pub src: LanguageCode,
    /// Target language
    pub dest: LanguageCode,
    #[serde(default)]
    pub extra_data: Map<String, Value>,
}

impl RawPayload {
    /// Named section of `extra_data`, `None` when absent or null
    pub fn section(&self, key: &str) -> Option<&Value> {
        self.extra_data.get(key).filter(|v| !v.is_null())
    }
}

#[derive(Debug, Clone)]
pub struct ProviderMetadata {
    pub name: String,
    pub requires_api_key: bool,
    pub free_tier_available: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Provider timed out after {0} ms")]
    Timeout(u64),
}
