//! Social media link routes: `/api/social-media`
//!
//! CRUD constrained to one link per platform.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;

use hili_content::social::{Platform, SocialLink, SocialPatch};

use super::{ItemResponse, ListResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Build the `/api/social-media` router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_links).post(create_link))
        .route("/{id}", get(get_link).put(update_link).delete(delete_link))
}

// ── Request types ────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CreateSocialRequest {
    pub platform: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateSocialRequest {
    pub platform: Option<String>,
    pub url: Option<String>,
}

// ── Handlers ─────────────────────────────────────────────────────────

/// List all social media links in insertion order.
async fn list_links(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ListResponse<SocialLink>>, AppError> {
    let links = state.social.list().await?;
    Ok(Json(ListResponse::new(links)))
}

/// Fetch a single social media link by id.
async fn get_link(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ItemResponse<SocialLink>>, AppError> {
    let link = state.social.get(&id).await?;
    Ok(Json(ItemResponse { data: link }))
}

/// Create a link for a platform that has none yet.
async fn create_link(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateSocialRequest>,
) -> Result<(StatusCode, Json<ItemResponse<SocialLink>>), AppError> {
    let (Some(platform), Some(url)) = (
        body.platform.filter(|s| !s.is_empty()),
        body.url.filter(|s| !s.is_empty()),
    ) else {
        return Err(AppError::BadRequest(
            "Missing required fields: platform, url".to_owned(),
        ));
    };
    let platform = Platform::parse(&platform)?;

    let link = state.social.create(platform, url).await?;
    Ok((StatusCode::CREATED, Json(ItemResponse { data: link })))
}

/// Partially update a link. Changing the platform re-checks the
/// one-per-platform invariant.
async fn update_link(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(body): Json<UpdateSocialRequest>,
) -> Result<Json<ItemResponse<SocialLink>>, AppError> {
    let platform = body.platform.map(|p| Platform::parse(&p)).transpose()?;

    let link = state
        .social
        .update(
            &id,
            SocialPatch {
                platform,
                url: body.url,
            },
        )
        .await?;

    Ok(Json(ItemResponse { data: link }))
}

/// Delete a link, returning the removed record.
async fn delete_link(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ItemResponse<SocialLink>>, AppError> {
    let link = state.social.delete(&id).await?;
    Ok(Json(ItemResponse { data: link }))
}
