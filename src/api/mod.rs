//! HTTP API
//!
//! Provides:
//! - Welcome text at `/`
//! - Blog CRUD under `/blogs`
//! - Liveness probe at `/health`

pub mod error;
pub mod routes;

pub use error::ApiError;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::config::DeleteMode;
use crate::store::BlogStore;

/// State shared across handlers
#[derive(Debug)]
pub struct AppState {
    pub store: BlogStore,
    pub delete_mode: DeleteMode,
}

pub type SharedState = Arc<AppState>;

impl AppState {
    pub fn new(store: BlogStore, delete_mode: DeleteMode) -> Self {
        Self { store, delete_mode }
    }
}

/// Create the API router
pub fn create_router(state: SharedState) -> Router {
    Router::new()
        .route("/", get(routes::index))
        .route("/health", get(routes::health))
        .route("/blogs", get(routes::list_blogs).post(routes::create_blog))
        .route(
            "/blogs/:id",
            get(routes::get_blog)
                .put(routes::update_blog)
                .delete(routes::delete_blog),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
