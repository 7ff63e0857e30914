//! API route modules
//!
//! # Structure
//!
//! - [`health`] - landing banner and health probe
//! - [`auth`] - session token issue and logout
//! - [`blogs`] - blog post reads, search and publishing
//! - [`wishlist`] - per-user wishlist (read is session-guarded)
//! - [`comments`] - comments on blog posts

pub mod auth;
pub mod blogs;
pub mod comments;
pub mod health;
pub mod wishlist;

use axum::http::{HeaderValue, Method, header};
use axum::{Router, middleware};
use serde::Serialize;
use tower_http::cors::CorsLayer;

use crate::core::AppState;

/// Acknowledgement returned by insert endpoints
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertAck {
    pub acknowledged: bool,
    pub inserted_id: String,
}

/// Acknowledgement returned by delete endpoints
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteAck {
    pub acknowledged: bool,
    pub deleted_count: u64,
}

/// HTTP request log middleware
async fn log_request(
    request: http::Request<axum::body::Body>,
    next: middleware::Next,
) -> http::Response<axum::body::Body> {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;

    let status = response.status();

    tracing::info!(target: "http_access", "{} {} {}", method, uri, status);

    response
}

/// CORS layer allowing credentialed requests from the configured origins
///
/// Cookies only travel cross-origin when the allowed origins are listed
/// explicitly, so a permissive layer is not an option here.
fn cors_layer(state: &AppState) -> CorsLayer {
    let origins: Vec<HeaderValue> = state
        .config
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .allow_credentials(true)
}

/// Build the Axum router
pub fn build_app(state: AppState) -> Router {
    Router::new()
        .merge(health::router())
        .merge(auth::router())
        .merge(blogs::router())
        .merge(wishlist::router())
        .merge(comments::router())
        .layer(cors_layer(&state))
        .layer(middleware::from_fn(log_request))
        .with_state(state)
}
