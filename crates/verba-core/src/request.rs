use unicode_normalization::UnicodeNormalization;
use verba_translator::AUTO_DETECT;

use crate::error::ServiceError;

/// Validated `(word, source, target)` lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    pub word: String,
    /// Lower-cased source code, [`AUTO_DETECT`] when none was given
    pub source_language: String,
    pub target_language: String,
}

impl LookupRequest {
    pub fn new(
        word: &str,
        source_language: &str,
        target_language: &str,
        min_word_length: usize,
    ) -> Result<Self, ServiceError> {
        let word = normalize_word(word);
        if word.chars().count() < min_word_length.max(1) {
            return Err(ServiceError::Validation(format!(
                "Word must be at least {} characters long",
                min_word_length.max(1)
            )));
        }

        let source_language = match language_code(source_language) {
            code if code.is_empty() => AUTO_DETECT.to_string(),
            code => code,
        };

        let target_language = language_code(target_language);
        if target_language.is_empty() || target_language == AUTO_DETECT {
            return Err(ServiceError::Validation(
                "Target language is required".to_string(),
            ));
        }

        if source_language == target_language {
            return Err(ServiceError::Validation(
                "Source and target languages can not be equal".to_string(),
            ));
        }

        Ok(Self {
            word,
            source_language,
            target_language,
        })
    }
}

/// Trimmed, NFKC normalized word text
pub fn normalize_word(word: &str) -> String {
    word.trim().nfkc().collect()
}

fn language_code(code: &str) -> String {
    code.trim().to_lowercase()
}
