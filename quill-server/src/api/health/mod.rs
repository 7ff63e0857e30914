//! Landing and health check routes
//!
//! # Routes
//!
//! | Path | Method | Description | Auth |
//! |------|--------|-------------|------|
//! | / | GET | Landing banner | none |
//! | /health | GET | Health check | none |
//!
//! # Response example
//!
//! ```json
//! {
//!   "status": "healthy",
//!   "version": "0.1.0",
//!   "database": "ok"
//! }
//! ```

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::core::AppState;

/// Public routes (no auth)
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
}

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall status (healthy | degraded)
    status: &'static str,
    /// Crate version
    version: &'static str,
    /// Database check (ok | error)
    database: &'static str,
}

/// GET / - landing banner
pub async fn root() -> &'static str {
    "Blogger are Writing Blogs"
}

/// GET /health - health check with a database probe
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let database = match state.db.health().await {
        Ok(()) => "ok",
        Err(e) => {
            tracing::warn!("Database health check failed: {}", e);
            "error"
        }
    };

    Json(HealthResponse {
        status: if database == "ok" { "healthy" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        database,
    })
}
