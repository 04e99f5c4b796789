//! Delete and list pass-throughs

use std::sync::Arc;

use super::support::{FailingStore, FakeTranslator, stored_word};
use crate::error::ServiceError;
use crate::service::{ListParams, ServiceOptions, TranslationService};
use crate::store::{InMemoryWordStore, WordStore};

fn service(store: Arc<dyn WordStore>) -> TranslationService {
    TranslationService::new(store, Arc::new(FakeTranslator::new()), ServiceOptions::default())
}

fn fruit() -> Arc<InMemoryWordStore> {
    Arc::new(InMemoryWordStore::with_words([
        stored_word("banana", "en", &[("es", "plátano")]),
        stored_word("avocado", "en", &[("es", "aguacate")]),
        stored_word("apple", "en", &[("es", "manzana")]),
    ]))
}

fn params(skip: Option<u64>, limit: Option<u64>, sort: &str, word: &str) -> ListParams {
    ListParams {
        skip,
        limit,
        sort: Some(sort.to_string()),
        word: Some(word.to_string()),
    }
}

#[tokio::test]
async fn delete_existing_word() {
    let store = fruit();
    let service = service(store.clone());

    let outcome = service.delete_word("apple").await.unwrap();

    assert_eq!(outcome.status, "success");
    assert_eq!(outcome.word, "apple");
    assert_eq!(outcome.message, "The word apple was deleted successfully.");
    assert!(store.find_word("apple", "en").await.unwrap().is_none());
}

#[tokio::test]
async fn delete_missing_word_is_not_found() {
    let service = service(fruit());

    let result = service.delete_word("cherry").await;

    assert!(matches!(result, Err(ServiceError::WordNotFound(word)) if word == "cherry"));
}

#[tokio::test]
async fn delete_surfaces_store_errors() {
    let service = service(Arc::new(FailingStore));

    let result = service.delete_word("apple").await;

    assert!(matches!(result, Err(ServiceError::Store(_))));
}

#[tokio::test]
async fn list_uses_defaults() {
    let service = service(fruit());

    let list = service.list_words(ListParams::default()).await.unwrap();

    let words: Vec<_> = list.data.iter().map(|w| w.word.as_str()).collect();
    assert_eq!(words, vec!["apple", "avocado", "banana"]);
    assert!(list.data.iter().all(|w| w.language == "en"));
    assert_eq!(list.meta.total, 3);
    assert_eq!(list.meta.total_pages, 1);
    assert_eq!(list.meta.limit, 10);
    assert_eq!(list.meta.skip, 0);
}

#[tokio::test]
async fn list_filters_and_paginates() {
    let service = service(fruit());

    let list = service
        .list_words(params(None, None, "asc", "a"))
        .await
        .unwrap();
    assert_eq!(list.meta.total, 3);

    let list = service
        .list_words(params(None, None, "asc", "av"))
        .await
        .unwrap();
    assert_eq!(list.meta.total, 1);
    assert_eq!(list.data[0].word, "avocado");

    let list = service
        .list_words(params(Some(2), Some(2), "desc", ""))
        .await
        .unwrap();
    assert_eq!(list.data.len(), 1);
    assert_eq!(list.data[0].word, "apple");
    assert_eq!(list.meta.total_pages, 2);
    assert_eq!(list.meta.skip, 2);
    assert_eq!(list.meta.limit, 2);
}

#[tokio::test]
async fn list_rejects_zero_limit() {
    let service = service(fruit());

    let result = service.list_words(params(None, Some(0), "asc", "")).await;

    assert!(matches!(result, Err(ServiceError::Validation(_))));
}
