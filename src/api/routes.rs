//! Route handlers

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json},
};
use tracing::{info, warn};

use super::{ApiError, SharedState};
use crate::config::DeleteMode;
use crate::store::{Blog, BlogPayload};

pub const WELCOME: &str = "Welcome to the Blog API! Available endpoints: \
GET /blogs, GET /blogs/{id}, POST /blogs, PUT /blogs/{id}, DELETE /blogs/{id}";

/// GET /
pub async fn index() -> &'static str {
    WELCOME
}

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    "OK"
}

/// GET /blogs
pub async fn list_blogs(State(state): State<SharedState>) -> Json<Vec<Blog>> {
    Json(state.store.list().await)
}

/// GET /blogs/{id}
pub async fn get_blog(
    State(state): State<SharedState>,
    Path(id): Path<i32>,
) -> Result<Json<Blog>, ApiError> {
    let blog = state.store.get(id).await?;
    Ok(Json(blog))
}

/// POST /blogs
pub async fn create_blog(
    State(state): State<SharedState>,
    payload: Result<Json<BlogPayload>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(payload) = payload.inspect_err(|e| warn!(error = %e, "Rejected blog payload"))?;

    let blog = state.store.create(payload).await;
    info!(id = blog.id, "Created blog");

    let location = format!("/blogs/{}", blog.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(blog)))
}

/// PUT /blogs/{id}
pub async fn update_blog(
    State(state): State<SharedState>,
    Path(id): Path<i32>,
    payload: Result<Json<BlogPayload>, JsonRejection>,
) -> Result<Json<Blog>, ApiError> {
    let Json(payload) = payload.inspect_err(|e| warn!(error = %e, "Rejected blog payload"))?;

    let blog = state.store.update(id, payload).await?;
    info!(id, "Updated blog");

    Ok(Json(blog))
}

/// DELETE /blogs/{id}
///
/// In `position` mode the path value is an index into the current ordering,
/// not a blog id.
pub async fn delete_blog(
    State(state): State<SharedState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    let removed = match state.delete_mode {
        DeleteMode::Position => state.store.remove_at(id).await?,
        DeleteMode::Id => state.store.remove_by_id(id).await?,
    };
    info!(path_id = id, removed_id = removed.id, mode = ?state.delete_mode, "Deleted blog");

    Ok(StatusCode::NO_CONTENT)
}
