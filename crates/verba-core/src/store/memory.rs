use std::collections::BTreeMap;

use tokio::sync::RwLock;
use verba_translator::LanguageCode;

use super::{ListQuery, SortDirection, StoreError, WordPage, WordStore};
use crate::types::{Language, Word, WordSummary};

/// Process-local store, records kept in insertion order
#[derive(Default)]
pub struct InMemoryWordStore {
    words: RwLock<Vec<Word>>,
}

impl InMemoryWordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_words(words: impl IntoIterator<Item = Word>) -> Self {
        Self {
            words: RwLock::new(words.into_iter().collect()),
        }
    }

    pub async fn len(&self) -> usize {
        self.words.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.words.read().await.is_empty()
    }
}

fn matches(word: &Word, text: &str, source_language: &str) -> bool {
    word.word == text && word.language == source_language
}

#[async_trait::async_trait]
impl WordStore for InMemoryWordStore {
    async fn find_word(
        &self,
        word: &str,
        source_language: &str,
    ) -> Result<Option<Word>, StoreError> {
        let words = self.words.read().await;
        Ok(words
            .iter()
            .find(|w| matches(w, word, source_language))
            .cloned())
    }

    async fn insert_word(&self, word: &Word) -> Result<(), StoreError> {
        let mut words = self.words.write().await;

        if words.iter().any(|w| matches(w, &word.word, &word.language)) {
            return Err(StoreError(format!(
                "duplicate word {}/{}",
                word.word, word.language
            )));
        }

        words.push(word.clone());
        Ok(())
    }

    async fn update_languages(
        &self,
        word: &str,
        source_language: &str,
        languages: &BTreeMap<LanguageCode, Language>,
    ) -> Result<bool, StoreError> {
        let mut words = self.words.write().await;

        match words.iter_mut().find(|w| matches(w, word, source_language)) {
            Some(stored) => {
                stored.languages = languages.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_word(&self, word: &str) -> Result<u64, StoreError> {
        let mut words = self.words.write().await;

        match words.iter().position(|w| w.word == word) {
            Some(index) => {
                words.remove(index);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn list_words(&self, query: &ListQuery) -> Result<WordPage, StoreError> {
        let words = self.words.read().await;
        let filter = query.effective_filter().map(str::to_lowercase);

        let mut matching: Vec<WordSummary> = words
            .iter()
            .filter(|w| match &filter {
                Some(filter) => w.word.to_lowercase().contains(filter.as_str()),
                None => true,
            })
            .map(|w| WordSummary {
                word: w.word.clone(),
                language: w.language.clone(),
            })
            .collect();

        matching.sort_by(|a, b| a.word.cmp(&b.word));
        if query.sort == SortDirection::Descending {
            matching.reverse();
        }

        let total = matching.len() as u64;
        let items = matching
            .into_iter()
            .skip(usize::try_from(query.skip).unwrap_or(usize::MAX))
            .take(usize::try_from(query.limit).unwrap_or(usize::MAX))
            .collect();

        Ok(WordPage { items, total })
    }
}
