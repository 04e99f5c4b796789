//! Word persistence port.
//!
//! The store is both the system of record and the translation cache. Any
//! backend implementing [`WordStore`] can be plugged into the
//! [`TranslationService`](crate::TranslationService).

use std::collections::BTreeMap;
use std::fmt::Display;

use serde::{Deserialize, Serialize};
use verba_translator::LanguageCode;

use crate::types::{Language, Word, WordSummary};

pub mod memory;

pub use memory::InMemoryWordStore;

/// Filters shorter than this are ignored
pub const MIN_FILTER_LEN: usize = 2;

#[async_trait::async_trait]
pub trait WordStore: Send + Sync {
    /// Exact match on both word and source language
    async fn find_word(
        &self,
        word: &str,
        source_language: &str,
    ) -> Result<Option<Word>, StoreError>;

    async fn insert_word(&self, word: &Word) -> Result<(), StoreError>;

    /// Replace the whole `languages` map of the matched record.
    ///
    /// No merge happens here, callers pass the already merged map. Returns
    /// whether a record matched.
    async fn update_languages(
        &self,
        word: &str,
        source_language: &str,
        languages: &BTreeMap<LanguageCode, Language>,
    ) -> Result<bool, StoreError>;

    /// Remove one record with this word text, returns the number removed (0 or 1)
    async fn delete_word(&self, word: &str) -> Result<u64, StoreError>;

    async fn list_words(&self, query: &ListQuery) -> Result<WordPage, StoreError>;
}

/// Opaque store failure; driver and network problems all surface as this
#[derive(Debug, thiserror::Error)]
#[error("store error: {0}")]
pub struct StoreError(pub String);

impl StoreError {
    pub fn new(message: impl Display) -> Self {
        Self(message.to_string())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    #[serde(alias = "asc")]
    Ascending,
    #[serde(alias = "desc")]
    Descending,
}

impl SortDirection {
    /// `desc` sorts descending, anything else ascending
    pub fn from_param(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("desc") {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        }
    }
}

#[derive(Debug, Clone)]
pub struct ListQuery {
    pub skip: u64,
    pub limit: u64,
    pub sort: SortDirection,
    pub word_filter: Option<String>,
}

impl ListQuery {
    /// Case-insensitive substring filter, if long enough to apply
    pub fn effective_filter(&self) -> Option<&str> {
        self.word_filter
            .as_deref()
            .filter(|filter| filter.chars().count() >= MIN_FILTER_LEN)
    }
}

/// One page of listed words and the count of all matches
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordPage {
    pub items: Vec<WordSummary>,
    pub total: u64,
}
