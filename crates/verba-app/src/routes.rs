use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

use crate::error::panic_response;
use crate::handlers;
use crate::state::AppState;

pub fn router(state: Arc<AppState>) -> Router {
    let translations = Router::new()
        .route("/", get(handlers::list_words))
        .route(
            "/:word",
            get(handlers::get_word).delete(handlers::delete_word),
        );

    let v1 = Router::new()
        .route("/healthcheck", get(handlers::healthcheck))
        .nest("/translations", translations);

    Router::new()
        .route("/", get(handlers::root))
        .nest("/v1", v1)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
