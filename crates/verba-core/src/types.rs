use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use verba_translator::LanguageCode;

/// Part of speech as reported by the provider ("noun", "verb", ...)
pub type PartOfSpeech = String;

/// Source-language entry, unique per `(word, language)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Word {
    pub word: String,
    /// Source language code
    pub language: LanguageCode,
    pub pronunciation: Option<String>,
    /// Target language code -> translation view
    #[serde(default)]
    pub languages: BTreeMap<LanguageCode, Language>,
}

impl Word {
    /// Copy of this word exposing only `target` under `languages`
    pub fn only_language(&self, target: &str) -> Word {
        Word {
            word: self.word.clone(),
            language: self.language.clone(),
            pronunciation: self.pronunciation.clone(),
            languages: self
                .languages
                .iter()
                .filter(|(code, _)| code.as_str() == target)
                .map(|(code, language)| (code.clone(), language.clone()))
                .collect(),
        }
    }
}

/// One target-language view of a [`Word`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Language {
    pub text: String,
    pub confidence: Option<f64>,
    pub pronunciation: Option<String>,
    pub definitions: Option<BTreeMap<PartOfSpeech, Vec<Definition>>>,
    pub examples: Option<Vec<String>>,
    pub translations: Option<BTreeMap<PartOfSpeech, Vec<Translation>>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Definition {
    pub definition: Option<String>,
    pub example: Option<String>,
    pub synonyms: Option<Vec<String>>,
    pub context: Option<Vec<String>>,
}

/// Alternate rendering of the word for one part of speech
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Translation {
    pub text: String,
    pub translations: Vec<String>,
    pub confidence: Option<f64>,
}

/// Listing projection of a stored word
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordSummary {
    pub word: String,
    pub language: LanguageCode,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListMeta {
    #[serde(rename = "totalPages")]
    pub total_pages: u64,
    pub total: u64,
    pub limit: u64,
    pub skip: u64,
}

/// Page of stored words plus pagination metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordList {
    pub meta: ListMeta,
    pub data: Vec<WordSummary>,
}
