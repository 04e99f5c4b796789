//! Translation lookup with the store acting as cache.
//!
//! Decision order for a lookup:
//! 1. stored word already has the target language: serve it, provider untouched
//! 2. stored word lacks it: fetch, merge into the stored languages, replace them
//! 3. nothing stored: fetch and insert
//!
//! Store failures after a successful fetch are logged and swallowed, the
//! caller still gets the fetched word. Provider failures always abort.

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use verba_translator::{TranslateError, Translator};

use crate::error::ServiceError;
use crate::normalize::normalize;
use crate::request::{LookupRequest, normalize_word};
use crate::store::{ListQuery, SortDirection, WordStore};
use crate::types::{ListMeta, Word, WordList};

#[derive(Debug, Clone)]
pub struct ServiceOptions {
    pub provider_timeout: Duration,
    pub min_word_length: usize,
    pub default_skip: u64,
    pub default_limit: u64,
    pub default_sort: SortDirection,
}

impl Default for ServiceOptions {
    fn default() -> Self {
        Self {
            provider_timeout: Duration::from_secs(10),
            min_word_length: 1,
            default_skip: 0,
            default_limit: 10,
            default_sort: SortDirection::Ascending,
        }
    }
}

/// Raw listing parameters, unset values fall back to [`ServiceOptions`]
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListParams {
    pub skip: Option<u64>,
    pub limit: Option<u64>,
    pub sort: Option<String>,
    pub word: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteOutcome {
    pub status: String,
    pub message: String,
    pub word: String,
}

pub struct TranslationService {
    store: Arc<dyn WordStore>,
    translator: Arc<dyn Translator>,
    options: ServiceOptions,
}

impl TranslationService {
    pub fn new(
        store: Arc<dyn WordStore>,
        translator: Arc<dyn Translator>,
        options: ServiceOptions,
    ) -> Self {
        Self {
            store,
            translator,
            options,
        }
    }

    /// Validate and look up a word
    pub async fn get_word(
        &self,
        word: &str,
        source_language: &str,
        target_language: &str,
    ) -> Result<Word, ServiceError> {
        let request = LookupRequest::new(
            word,
            source_language,
            target_language,
            self.options.min_word_length,
        )?;

        self.lookup(&request).await
    }

    pub async fn lookup(&self, request: &LookupRequest) -> Result<Word, ServiceError> {
        let LookupRequest {
            word,
            source_language: source,
            target_language: target,
        } = request;

        let stored = match self.store.find_word(word, source).await {
            Ok(stored) => stored,
            Err(e) => {
                tracing::warn!("store read failed for {word}/{source}, treating as miss: {e}");
                None
            }
        };

        match stored {
            Some(stored) if stored.languages.contains_key(target) => {
                tracing::debug!("cache hit: {word} {source}->{target}");
                Ok(stored.only_language(target))
            }
            Some(stored) => {
                tracing::debug!("cache hit without {target}: {word}/{source}");
                let fresh = self.fetch(request).await?;
                self.extend_stored(&stored, &fresh, target).await;
                Ok(fresh)
            }
            None => {
                tracing::debug!("cache miss: {word}/{source}");
                let fresh = self.fetch(request).await?;
                self.persist_new(&fresh, source, target).await;
                Ok(fresh)
            }
        }
    }

    pub async fn delete_word(&self, word: &str) -> Result<DeleteOutcome, ServiceError> {
        let word = normalize_word(word);
        let deleted = self.store.delete_word(&word).await?;

        if deleted == 0 {
            return Err(ServiceError::WordNotFound(word));
        }

        tracing::info!("deleted word {word}");
        Ok(DeleteOutcome {
            status: "success".to_string(),
            message: format!("The word {word} was deleted successfully."),
            word,
        })
    }

    pub async fn list_words(&self, params: ListParams) -> Result<WordList, ServiceError> {
        let skip = params.skip.unwrap_or(self.options.default_skip);
        let limit = params.limit.unwrap_or(self.options.default_limit);
        if limit == 0 {
            return Err(ServiceError::Validation(
                "Limit must be greater than zero".to_string(),
            ));
        }

        let query = ListQuery {
            skip,
            limit,
            sort: params
                .sort
                .as_deref()
                .map(SortDirection::from_param)
                .unwrap_or(self.options.default_sort),
            word_filter: params.word,
        };

        let page = self.store.list_words(&query).await?;

        Ok(WordList {
            meta: ListMeta {
                total_pages: page.total.div_ceil(limit),
                total: page.total,
                limit,
                skip,
            },
            data: page.items,
        })
    }

    async fn fetch(&self, request: &LookupRequest) -> Result<Word, ServiceError> {
        let timeout = self.options.provider_timeout;
        let timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);

        let payload = tokio::time::timeout(
            timeout,
            self.translator.translate(
                &request.word,
                request.source_language.clone(),
                request.target_language.clone(),
            ),
        )
        .await
        .map_err(|_| TranslateError::Timeout(timeout_ms))??;

        Ok(normalize(
            &payload,
            &request.word,
            &request.source_language,
            &request.target_language,
        ))
    }

    /// Merge the fetched language into `stored` and write the merged map back
    async fn extend_stored(&self, stored: &Word, fresh: &Word, target: &str) {
        let Some(language) = fresh.languages.get(target) else {
            tracing::error!("fetched word {} carries no {target} entry", fresh.word);
            return;
        };

        let mut languages = stored.languages.clone();
        languages.insert(target.to_string(), language.clone());

        match self
            .store
            .update_languages(&stored.word, &stored.language, &languages)
            .await
        {
            Ok(true) => tracing::debug!("added {target} to {}/{}", stored.word, stored.language),
            Ok(false) => tracing::warn!(
                "no stored record matched {}/{} on update",
                stored.word,
                stored.language
            ),
            Err(e) => tracing::warn!(
                "failed to add {target} to {}/{}: {e}",
                stored.word,
                stored.language
            ),
        }
    }

    async fn persist_new(&self, fresh: &Word, requested_source: &str, target: &str) {
        // Auto-detected words are keyed by the detected language, which may
        // already be stored
        if fresh.language != requested_source {
            match self.store.find_word(&fresh.word, &fresh.language).await {
                Ok(Some(existing)) => {
                    self.extend_stored(&existing, fresh, target).await;
                    return;
                }
                Ok(None) => {}
                Err(e) => {
                    tracing::warn!("store read failed for {}/{}: {e}", fresh.word, fresh.language);
                    return;
                }
            }
        }

        if let Err(e) = self.store.insert_word(fresh).await {
            tracing::warn!("failed to store {}/{}: {e}", fresh.word, fresh.language);
        }
    }
}
