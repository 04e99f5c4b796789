use async_trait::async_trait;
use verba_translator::{LanguageCode, ProviderMetadata, RawPayload, TranslateError, Translator};

use crate::response::parse_response;

/// Data sections requested from the web endpoint
const DATA_TYPES: [&str; 10] = ["at", "bd", "ex", "ld", "md", "qca", "rw", "rm", "ss", "t"];

#[derive(Clone)]
pub struct GoogleTranslator {
    client: reqwest::Client,
    api_url: String,
}

impl GoogleTranslator {
    pub fn new(api_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url,
        }
    }
}

#[async_trait]
impl Translator for GoogleTranslator {
    async fn translate(
        &self,
        text: &str,
        from: LanguageCode,
        to: LanguageCode,
    ) -> Result<RawPayload, TranslateError> {
        let mut params = vec![
            ("client", "gtx"),
            ("sl", from.as_str()),
            ("tl", to.as_str()),
            ("hl", to.as_str()),
            ("ie", "UTF-8"),
            ("oe", "UTF-8"),
            ("otf", "1"),
            ("ssel", "0"),
            ("tsel", "0"),
        ];
        params.extend(DATA_TYPES.iter().map(|dt| ("dt", *dt)));
        params.push(("q", text));

        tracing::debug!("Google translate request: {text} {from}->{to}");

        let response = self.client.get(&self.api_url).query(&params).send().await?;

        if response.status() == 429 {
            return Err(TranslateError::RateLimitExceeded);
        }

        if !response.status().is_success() {
            return Err(TranslateError::ApiError(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let json: serde_json::Value = response.json().await.map_err(|e| {
            TranslateError::MalformedResponse(format!("Failed to parse response: {}", e))
        })?;

        parse_response(&json, text, &from, &to)
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "Google Translate".to_string(),
            requires_api_key: false,
            free_tier_available: true,
        }
    }
}
