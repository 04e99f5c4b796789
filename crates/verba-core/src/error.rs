use verba_translator::TranslateError;

use crate::store::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Request rejected before any I/O
    #[error("{0}")]
    Validation(String),

    #[error("Something went wrong in the translation provider request: {0}")]
    Provider(#[from] TranslateError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("The word {0} was not found")]
    WordNotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
