//! Axum router — maps all URL paths to handlers.

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use crate::handlers::{
    add::{add_page, add_submit},
    export::export,
    health::healthz,
    investigate::{investigate_page, submit_evaluation},
    lookup::api_lookup,
    pairs::{delete_pair, index},
};
use crate::state::{AppState, SharedState};

/// Build and return the full Axum router.
pub fn build_router(state: AppState) -> Router {
    let shared: SharedState = Arc::new(state);

    Router::new()
        // Pages
        .route("/",                  get(index))
        .route("/pair/{id}",         get(investigate_page).post(submit_evaluation))
        .route("/pair/{id}/delete",  post(delete_pair))
        .route("/add",               get(add_page).post(add_submit))
        .route("/export",            get(export))

        // API endpoints
        .route("/api/lookup",        get(api_lookup))
        .route("/healthz",           get(healthz))

        // Middleware
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}
