//! MongoDB backed [`WordStore`].
//!
//! One document per `(word, language)` in a single collection, shaped like
//! the serialized [`Word`].

use std::collections::BTreeMap;

use futures_util::TryStreamExt;
use mongodb::bson::{self, Bson, Document, doc};
use mongodb::options::IndexOptions;
use mongodb::{Client, Collection, IndexModel};
use verba_core::store::{ListQuery, SortDirection, StoreError, WordPage, WordStore};
use verba_core::types::{Language, Word, WordSummary};
use verba_translator::LanguageCode;

pub struct MongoWordStore {
    collection: Collection<Word>,
}

impl MongoWordStore {
    pub fn new(collection: Collection<Word>) -> Self {
        Self { collection }
    }

    /// Create a store from a connection string. The driver connects lazily,
    /// call [`MongoWordStore::ping`] to check the server is reachable.
    pub async fn connect(url: &str, database: &str, collection: &str) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(url).await.map_err(StoreError::new)?;
        Ok(Self::new(client.database(database).collection(collection)))
    }

    pub async fn ping(&self) -> Result<(), StoreError> {
        self.collection
            .client()
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(StoreError::new)?;
        Ok(())
    }

    /// Unique `(word, language)` index so concurrent inserts cannot duplicate
    /// an entry, plus a plain `word` index for deletes and listing.
    pub async fn ensure_indexes(&self) -> Result<(), StoreError> {
        let indexes = vec![
            IndexModel::builder()
                .keys(doc! { "word": 1, "language": 1 })
                .options(
                    IndexOptions::builder()
                        .unique(true)
                        .name("word_language_unique".to_string())
                        .build(),
                )
                .build(),
            IndexModel::builder().keys(doc! { "word": 1 }).build(),
        ];

        self.collection
            .create_indexes(indexes)
            .await
            .map_err(StoreError::new)?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl WordStore for MongoWordStore {
    async fn find_word(
        &self,
        word: &str,
        source_language: &str,
    ) -> Result<Option<Word>, StoreError> {
        self.collection
            .find_one(doc! { "word": word, "language": source_language })
            .await
            .map_err(StoreError::new)
    }

    async fn insert_word(&self, word: &Word) -> Result<(), StoreError> {
        self.collection
            .insert_one(word)
            .await
            .map_err(StoreError::new)?;
        Ok(())
    }

    async fn update_languages(
        &self,
        word: &str,
        source_language: &str,
        languages: &BTreeMap<LanguageCode, Language>,
    ) -> Result<bool, StoreError> {
        let languages = bson::to_bson(languages).map_err(StoreError::new)?;

        let result = self
            .collection
            .update_one(
                doc! { "word": word, "language": source_language },
                doc! { "$set": { "languages": languages } },
            )
            .await
            .map_err(StoreError::new)?;

        Ok(result.matched_count > 0)
    }

    async fn delete_word(&self, word: &str) -> Result<u64, StoreError> {
        let result = self
            .collection
            .delete_one(doc! { "word": word })
            .await
            .map_err(StoreError::new)?;

        Ok(result.deleted_count)
    }

    async fn list_words(&self, query: &ListQuery) -> Result<WordPage, StoreError> {
        let mut cursor = self
            .collection
            .aggregate(list_pipeline(query))
            .await
            .map_err(StoreError::new)?;

        match cursor.try_next().await.map_err(StoreError::new)? {
            Some(result) => page_from(&result),
            None => Ok(WordPage::default()),
        }
    }
}

/// Count of all matches and one sorted, projected page in a single `$facet`
fn list_pipeline(query: &ListQuery) -> Vec<Document> {
    let mut pipeline = Vec::new();

    if let Some(filter) = query.effective_filter() {
        pipeline.push(doc! {
            "$match": { "word": { "$regex": regex::escape(filter), "$options": "i" } }
        });
    }

    let direction = match query.sort {
        SortDirection::Ascending => 1,
        SortDirection::Descending => -1,
    };

    pipeline.push(doc! {
        "$facet": {
            "total": [ { "$count": "count" } ],
            "items": [
                { "$sort": { "word": direction } },
                { "$skip": to_i64(query.skip) },
                { "$limit": to_i64(query.limit) },
                { "$project": { "_id": 0, "word": 1, "language": 1 } }
            ]
        }
    });

    pipeline
}

fn page_from(result: &Document) -> Result<WordPage, StoreError> {
    let total = result
        .get_array("total")
        .ok()
        .and_then(|total| total.first())
        .and_then(Bson::as_document)
        .and_then(|count| match count.get("count") {
            Some(Bson::Int32(n)) => u64::try_from(*n).ok(),
            Some(Bson::Int64(n)) => u64::try_from(*n).ok(),
            _ => None,
        })
        .unwrap_or(0);

    let items = result
        .get_array("items")
        .map_err(StoreError::new)?
        .iter()
        .filter_map(Bson::as_document)
        .map(|item| bson::from_document::<WordSummary>(item.clone()))
        .collect::<Result<Vec<_>, _>>()
        .map_err(StoreError::new)?;

    Ok(WordPage { items, total })
}

fn to_i64(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(filter: Option<&str>, sort: SortDirection) -> ListQuery {
        ListQuery {
            skip: 20,
            limit: 10,
            sort,
            word_filter: filter.map(str::to_string),
        }
    }

    #[test]
    fn escapes_regex_metacharacters() {
        let pipeline = list_pipeline(&query(Some("a.b*"), SortDirection::Ascending));
        assert_eq!(
            pipeline[0],
            doc! { "$match": { "word": { "$regex": r"a\.b\*", "$options": "i" } } }
        );

        let pipeline = list_pipeline(&query(Some("(c++)"), SortDirection::Ascending));
        assert_eq!(
            pipeline[0],
            doc! { "$match": { "word": { "$regex": r"\(c\+\+\)", "$options": "i" } } }
        );
    }

    #[test]
    fn pipeline_matches_only_with_long_filter() {
        let pipeline = list_pipeline(&query(Some("a"), SortDirection::Ascending));
        assert_eq!(pipeline.len(), 1);
        assert!(pipeline[0].contains_key("$facet"));

        let pipeline = list_pipeline(&query(Some("Av"), SortDirection::Descending));
        assert_eq!(pipeline.len(), 2);
        assert_eq!(
            pipeline[0],
            doc! { "$match": { "word": { "$regex": "Av", "$options": "i" } } }
        );

        let items = pipeline[1]
            .get_document("$facet")
            .unwrap()
            .get_array("items")
            .unwrap();
        assert_eq!(items[0], Bson::Document(doc! { "$sort": { "word": -1 } }));
        assert_eq!(items[1], Bson::Document(doc! { "$skip": 20_i64 }));
        assert_eq!(items[2], Bson::Document(doc! { "$limit": 10_i64 }));
    }

    #[test]
    fn reads_faceted_page() {
        let result = doc! {
            "total": [ { "count": 3 } ],
            "items": [
                { "word": "apple", "language": "en" },
                { "word": "avocado", "language": "en" }
            ]
        };

        let page = page_from(&result).unwrap();

        assert_eq!(page.total, 3);
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[1].word, "avocado");
    }

    #[test]
    fn empty_facet_counts_zero() {
        let result = doc! { "total": [], "items": [] };

        assert_eq!(page_from(&result).unwrap(), WordPage::default());
    }
}
