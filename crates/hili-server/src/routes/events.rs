//! Event routes: `/api/events`
//!
//! CRUD for creator series and events.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;

use hili_content::event::{CreatorEvent, EventKind, EventPatch, NewEvent};

use super::{ItemResponse, ListResponse, double_option};
use crate::error::AppError;
use crate::state::AppState;

/// Build the `/api/events` router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_events).post(create_event))
        .route(
            "/{id}",
            get(get_event).put(update_event).delete(delete_event),
        )
}

// ── Request types ────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRequest {
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
    pub gradient: Option<String>,
    pub icon: Option<String>,
    pub poster: Option<String>,
    pub ticket_url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEventRequest {
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
    pub gradient: Option<String>,
    pub icon: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub poster: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub ticket_url: Option<Option<String>>,
}

// ── Handlers ─────────────────────────────────────────────────────────

/// List all events in insertion order.
async fn list_events(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ListResponse<CreatorEvent>>, AppError> {
    let events = state.events.list().await?;
    Ok(Json(ListResponse::new(events)))
}

/// Fetch a single event by id.
async fn get_event(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ItemResponse<CreatorEvent>>, AppError> {
    let event = state.events.get(&id).await?;
    Ok(Json(ItemResponse { data: event }))
}

/// Create a new event or series.
async fn create_event(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateEventRequest>,
) -> Result<(StatusCode, Json<ItemResponse<CreatorEvent>>), AppError> {
    let (Some(title), Some(kind), Some(description)) = (
        body.title.filter(|s| !s.is_empty()),
        body.kind.filter(|s| !s.is_empty()),
        body.description.filter(|s| !s.is_empty()),
    ) else {
        return Err(AppError::BadRequest(
            "Missing required fields: title, type, description".to_owned(),
        ));
    };
    let kind = EventKind::parse(&kind)?;

    let event = state
        .events
        .create(NewEvent {
            title,
            kind,
            description,
            tags: body.tags,
            gradient: body.gradient,
            icon: body.icon,
            poster: body.poster,
            ticket_url: body.ticket_url,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(ItemResponse { data: event })))
}

/// Partially update an event. Absent fields are left untouched; `poster`
/// and `ticketUrl` accept `null` to clear.
async fn update_event(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(body): Json<UpdateEventRequest>,
) -> Result<Json<ItemResponse<CreatorEvent>>, AppError> {
    let kind = body.kind.map(|k| EventKind::parse(&k)).transpose()?;

    let event = state
        .events
        .update(
            &id,
            EventPatch {
                title: body.title,
                kind,
                description: body.description,
                tags: body.tags,
                gradient: body.gradient,
                icon: body.icon,
                poster: body.poster,
                ticket_url: body.ticket_url,
            },
        )
        .await?;

    Ok(Json(ItemResponse { data: event }))
}

/// Delete an event, returning the removed record.
async fn delete_event(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ItemResponse<CreatorEvent>>, AppError> {
    let event = state.events.delete(&id).await?;
    Ok(Json(ItemResponse { data: event }))
}
