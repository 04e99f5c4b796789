//! Test doubles for the store and the provider

use std::collections::BTreeMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use serde_json::json;
use verba_translator::{
    AUTO_DETECT, LanguageCode, ProviderMetadata, RawPayload, TranslateError, Translator,
};

use crate::store::{InMemoryWordStore, ListQuery, StoreError, WordPage, WordStore};
use crate::types::{Language, Word};

/// Provider answering `"{text}-{to}"`, counting calls
#[derive(Default)]
pub struct FakeTranslator {
    pub calls: AtomicUsize,
    pub last_from: Mutex<Option<String>>,
    /// Language reported back when asked to auto-detect
    pub detected: Option<String>,
    pub fail: bool,
    pub delay: Option<Duration>,
}

impl FakeTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_from(&self) -> Option<String> {
        self.last_from.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl Translator for FakeTranslator {
    async fn translate(
        &self,
        text: &str,
        from: LanguageCode,
        to: LanguageCode,
    ) -> Result<RawPayload, TranslateError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_from.lock().unwrap() = Some(from.clone());

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        if self.fail {
            return Err(TranslateError::ApiError("HTTP 500".to_string()));
        }

        let src = match (&self.detected, from.as_str()) {
            (Some(detected), AUTO_DETECT) => detected.clone(),
            _ => from,
        };

        Ok(payload(text, &src, &to))
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "fake".to_string(),
            requires_api_key: false,
            free_tier_available: true,
        }
    }
}

pub fn payload(text: &str, src: &str, dest: &str) -> RawPayload {
    let extra_data = json!({
        "translation": [[format!("{text}-{dest}"), text], [null, null, null, "/fake/"]],
        "definitions": [["noun", [["a definition", "k1", "an example"]], text, 1]],
        "synonyms": [["noun", [[["alike"], "k1"]], text]],
        "examples": [[[format!("{text} in use")]]],
        "all-translations": [["noun", [format!("{text}-{dest}")], [[format!("{text}-{dest}"), [text], null, 0.5]], text, 1]],
        "confidence": 1.0
    });

    RawPayload {
        origin: text.to_string(),
        text: format!("{text}-{dest}"),
        src: src.to_string(),
        dest: dest.to_string(),
        extra_data: extra_data.as_object().cloned().unwrap_or_default(),
    }
}

pub fn language(text: &str) -> Language {
    Language {
        text: text.to_string(),
        confidence: Some(0.9),
        pronunciation: None,
        definitions: None,
        examples: Some(vec![]),
        translations: None,
    }
}

pub fn stored_word(text: &str, source: &str, languages: &[(&str, &str)]) -> Word {
    Word {
        word: text.to_string(),
        language: source.to_string(),
        pronunciation: None,
        languages: languages
            .iter()
            .map(|(code, rendered)| (code.to_string(), language(rendered)))
            .collect::<BTreeMap<_, _>>(),
    }
}

/// Store whose every operation fails
pub struct FailingStore;

#[async_trait::async_trait]
impl WordStore for FailingStore {
    async fn find_word(&self, _word: &str, _source: &str) -> Result<Option<Word>, StoreError> {
        Err(StoreError::new("connection refused"))
    }

    async fn insert_word(&self, _word: &Word) -> Result<(), StoreError> {
        Err(StoreError::new("connection refused"))
    }

    async fn update_languages(
        &self,
        _word: &str,
        _source: &str,
        _languages: &BTreeMap<LanguageCode, Language>,
    ) -> Result<bool, StoreError> {
        Err(StoreError::new("connection refused"))
    }

    async fn delete_word(&self, _word: &str) -> Result<u64, StoreError> {
        Err(StoreError::new("connection refused"))
    }

    async fn list_words(&self, _query: &ListQuery) -> Result<WordPage, StoreError> {
        Err(StoreError::new("connection refused"))
    }
}

/// Store that reads from `inner` but never persists a write.
/// `stale` makes updates report no match instead of failing.
pub struct ReadOnlyStore {
    pub inner: InMemoryWordStore,
    pub stale: bool,
}

#[async_trait::async_trait]
impl WordStore for ReadOnlyStore {
    async fn find_word(&self, word: &str, source: &str) -> Result<Option<Word>, StoreError> {
        self.inner.find_word(word, source).await
    }

    async fn insert_word(&self, _word: &Word) -> Result<(), StoreError> {
        Err(StoreError::new("read-only replica"))
    }

    async fn update_languages(
        &self,
        _word: &str,
        _source: &str,
        _languages: &BTreeMap<LanguageCode, Language>,
    ) -> Result<bool, StoreError> {
        if self.stale {
            return Ok(false);
        }
        Err(StoreError::new("read-only replica"))
    }

    async fn delete_word(&self, _word: &str) -> Result<u64, StoreError> {
        Err(StoreError::new("read-only replica"))
    }

    async fn list_words(&self, query: &ListQuery) -> Result<WordPage, StoreError> {
        self.inner.list_words(query).await
    }
}
