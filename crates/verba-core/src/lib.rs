pub mod error;
pub mod normalize;
pub mod request;
pub mod service;
pub mod store;
pub mod types;

pub use error::ServiceError;
pub use normalize::normalize;
pub use request::LookupRequest;
pub use service::{DeleteOutcome, ListParams, ServiceOptions, TranslationService};
pub use store::{InMemoryWordStore, ListQuery, SortDirection, StoreError, WordPage, WordStore};
pub use types::{Definition, Language, ListMeta, Translation, Word, WordList, WordSummary};

#[cfg(test)]
mod tests;
