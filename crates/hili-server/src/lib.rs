//! Hili content API server.
//!
//! Wires the domain stores and the in-memory repositories into a running
//! Axum server: JSON API at `/api/*`, optional static hosting for the built
//! landing-page bundle at `/`.

use std::path::Path;
use std::sync::Arc;

use axum::Router;
use axum::middleware as axum_mw;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use crate::middleware::admin_guard;
use crate::state::AppState;

/// Build the complete application: API routes, CORS, tracing, the optional
/// admin-token guard, and optional static file hosting.
///
/// The original deployment sits behind blanket `cors()`, so the CORS policy
/// is permissive: any origin, the four CRUD methods, JSON and auth headers.
pub fn build_app(state: Arc<AppState>, static_dir: Option<&Path>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            axum::http::Method::GET,
            axum::http::Method::POST,
            axum::http::Method::PUT,
            axum::http::Method::DELETE,
        ])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::AUTHORIZATION,
        ]);

    let mut app = Router::new().nest(
        "/api",
        routes::router().route_layer(axum_mw::from_fn_with_state(
            Arc::clone(&state),
            admin_guard,
        )),
    );

    if let Some(dir) = static_dir {
        let serve = ServeDir::new(dir).append_index_html_on_directories(true);
        app = app.fallback_service(serve);
    }

    app.layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
