use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;

use crate::app::docs;
use crate::AppState;

pub fn build_router(state: AppState) -> Router {
    // The browser client is served from a different origin.
    Router::new()
        .merge(crate::core::http::routes())
        .nest("/api/notes", crate::notes::http::routes())
        .route("/docs", get(docs::swagger_ui))
        .route("/api-docs/openapi.json", get(docs::openapi_spec))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
