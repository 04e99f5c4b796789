use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, Query, State};
use serde::Deserialize;
use serde_json::{Value, json};
use verba_core::{DeleteOutcome, ListParams, Word, WordList};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct LookupQuery {
    /// Source language, empty for auto-detect
    #[serde(default)]
    pub sl: String,
    /// Target language
    #[serde(default)]
    pub tl: String,
}

pub async fn root(State(state): State<Arc<AppState>>) -> Json<Value> {
    let app = &state.config.app;

    Json(json!({
        "title": app.title,
        "version": app.version,
        "description": app.description,
    }))
}

pub async fn healthcheck() -> Json<Value> {
    Json(json!({ "status": "OK" }))
}

pub async fn list_words(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> Result<Json<WordList>, ApiError> {
    Ok(Json(state.translations.list_words(params).await?))
}

/// Translation of `word` from `sl` to `tl`, served from the store when possible
pub async fn get_word(
    State(state): State<Arc<AppState>>,
    Path(word): Path<String>,
    Query(query): Query<LookupQuery>,
) -> Result<Json<Word>, ApiError> {
    let word = state
        .translations
        .get_word(&word, &query.sl, &query.tl)
        .await?;

    Ok(Json(word))
}

pub async fn delete_word(
    State(state): State<Arc<AppState>>,
    Path(word): Path<String>,
) -> Result<Json<DeleteOutcome>, ApiError> {
    Ok(Json(state.translations.delete_word(&word).await?))
}
