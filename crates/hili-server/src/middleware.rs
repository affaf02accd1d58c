//! Admin-token middleware.
//!
//! The admin dashboard's mutation endpoints trust any caller in the
//! original deployment. When `HILI_ADMIN_TOKEN` is configured, mutating
//! methods (POST/PUT/DELETE) require `Authorization: Bearer <token>`;
//! reads stay public so the landing page keeps working without credentials.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::Method;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::error::AppError;
use crate::state::AppState;

/// Middleware that guards mutating requests with a bearer token.
///
/// A no-op when no admin token is configured.
pub async fn admin_guard(
    State(state): State<Arc<AppState>>,
    req: Request,
    next: Next,
) -> Response {
    let Some(ref expected) = state.admin_token else {
        return next.run(req).await;
    };

    if matches!(*req.method(), Method::GET | Method::HEAD | Method::OPTIONS) {
        return next.run(req).await;
    }

    let presented = req
        .headers()
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "));

    match presented {
        Some(token) if token == expected => next.run(req).await,
        Some(_) => AppError::Unauthorized("Invalid admin token".to_owned()).into_response(),
        None => AppError::Unauthorized("Missing admin token".to_owned()).into_response(),
    }
}
