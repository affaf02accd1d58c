//! Server configuration.
//!
//! Loads configuration from environment variables with sensible defaults.
//! All settings can be overridden via `HILI_*` environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind the HTTP listener to.
    pub bind_addr: SocketAddr,
    /// Log level filter (e.g., `info`, `debug`, `warn`).
    pub log_level: String,
    /// Response body for `GET /api/ping`.
    pub ping_message: String,
    /// Bearer token required on mutating requests. `None` leaves the API
    /// fully open, matching the original deployment.
    pub admin_token: Option<String>,
    /// Directory with the built landing-page bundle, served at `/`.
    pub static_dir: Option<PathBuf>,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `PORT` — port to bind on (hosting convention, binds to `0.0.0.0`)
    /// - `HILI_BIND_ADDR` — full bind address (overrides `PORT`, default: `127.0.0.1:8787`)
    /// - `HILI_LOG_LEVEL` — log filter (default: `info`)
    /// - `PING_MESSAGE` — reply for `/api/ping` (default: `ping`)
    /// - `HILI_ADMIN_TOKEN` — bearer token for mutating requests (optional)
    /// - `HILI_STATIC_DIR` — directory to serve at `/` (optional)
    #[must_use]
    pub fn from_env() -> Self {
        // Priority: HILI_BIND_ADDR > PORT > default 127.0.0.1:8787
        let bind_addr = if let Ok(addr) = std::env::var("HILI_BIND_ADDR") {
            addr.parse()
                .unwrap_or_else(|_| SocketAddr::from(([127, 0, 0, 1], 8787)))
        } else if let Ok(port_str) = std::env::var("PORT") {
            let port: u16 = port_str.parse().unwrap_or(8787);
            SocketAddr::from(([0, 0, 0, 0], port))
        } else {
            SocketAddr::from(([127, 0, 0, 1], 8787))
        };

        let log_level = std::env::var("HILI_LOG_LEVEL").unwrap_or_else(|_| "info".to_owned());

        let ping_message = std::env::var("PING_MESSAGE").unwrap_or_else(|_| "ping".to_owned());

        let admin_token = std::env::var("HILI_ADMIN_TOKEN")
            .ok()
            .filter(|t| !t.is_empty());

        let static_dir = std::env::var("HILI_STATIC_DIR").ok().map(PathBuf::from);

        Self {
            bind_addr,
            log_level,
            ping_message,
            admin_token,
            static_dir,
        }
    }
}
