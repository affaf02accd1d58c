//! Button link routes: `/api/links`
//!
//! CRUD plus the batch reorder call the dashboard's drag handles drive.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;

use hili_content::link::{ButtonLink, LinkPatch, NewLink, PositionUpdate};

use super::{ItemResponse, ListResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Build the `/api/links` router.
///
/// `/reorder` is a static segment, so axum matches it ahead of `/{id}`.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_links).post(create_link))
        .route("/reorder", post(reorder_links))
        .route("/{id}", get(get_link).put(update_link).delete(delete_link))
}

// ── Request types ────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CreateLinkRequest {
    pub label: Option<String>,
    pub url: Option<String>,
    pub icon: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateLinkRequest {
    pub label: Option<String>,
    pub url: Option<String>,
    pub icon: Option<String>,
    pub position: Option<i64>,
}

// ── Handlers ─────────────────────────────────────────────────────────

/// List all links, sorted ascending by position.
async fn list_links(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ListResponse<ButtonLink>>, AppError> {
    let links = state.links.list().await?;
    Ok(Json(ListResponse::new(links)))
}

/// Fetch a single link by id.
async fn get_link(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ItemResponse<ButtonLink>>, AppError> {
    let link = state.links.get(&id).await?;
    Ok(Json(ItemResponse { data: link }))
}

/// Create a new link. Position is server-assigned.
async fn create_link(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateLinkRequest>,
) -> Result<(StatusCode, Json<ItemResponse<ButtonLink>>), AppError> {
    let (Some(label), Some(url)) = (
        body.label.filter(|s| !s.is_empty()),
        body.url.filter(|s| !s.is_empty()),
    ) else {
        return Err(AppError::BadRequest(
            "Missing required fields: label, url".to_owned(),
        ));
    };

    let link = state
        .links
        .create(NewLink {
            label,
            url,
            icon: body.icon,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(ItemResponse { data: link })))
}

/// Partially update a link.
async fn update_link(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(body): Json<UpdateLinkRequest>,
) -> Result<Json<ItemResponse<ButtonLink>>, AppError> {
    let link = state
        .links
        .update(
            &id,
            LinkPatch {
                label: body.label,
                url: body.url,
                icon: body.icon,
                position: body.position,
            },
        )
        .await?;

    Ok(Json(ItemResponse { data: link }))
}

/// Delete a link, returning the removed record.
async fn delete_link(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ItemResponse<ButtonLink>>, AppError> {
    let link = state.links.delete(&id).await?;
    Ok(Json(ItemResponse { data: link }))
}

/// Batch-overwrite positions, returning the full reordered list.
///
/// The body must carry a `links` array. Entries that don't look like
/// `{id, position}` are skipped, matching the tolerance of the original
/// handler, as are unknown ids.
async fn reorder_links(
    State(state): State<Arc<AppState>>,
    Json(body): Json<serde_json::Value>,
) -> Result<Json<ListResponse<ButtonLink>>, AppError> {
    let Some(entries) = body.get("links").and_then(serde_json::Value::as_array) else {
        return Err(AppError::BadRequest(
            "Expected array of links with id and position".to_owned(),
        ));
    };

    let moves: Vec<PositionUpdate> = entries
        .iter()
        .filter_map(|entry| serde_json::from_value(entry.clone()).ok())
        .collect();

    let links = state.links.reorder(moves).await?;
    Ok(Json(ListResponse::new(links)))
}
