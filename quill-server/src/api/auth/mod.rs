//! Authentication Routes

mod handler;

use axum::{Router, routing::post};

use crate::core::AppState;

/// Build authentication router
/// - /jwt: issues a session token for the submitted email
/// - /logout: clears the session cookie
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/jwt", post(handler::issue_token))
        .route("/logout", post(handler::logout))
}
