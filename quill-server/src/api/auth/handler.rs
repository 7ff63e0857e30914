//! Authentication Handlers
//!
//! Issues and clears the `token` session cookie

use axum::http::header;
use axum::response::IntoResponse;
use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::auth::cookie;
use crate::core::AppState;
use crate::utils::validation::{MAX_EMAIL_LEN, validate_required_text};
use crate::utils::{AppError, AppResult};

#[derive(Debug, Deserialize)]
pub struct TokenRequest {
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub success: bool,
}

/// POST /jwt - issue a session token for the submitted email
///
/// The token is returned in an httpOnly cookie, not in the body, so
/// browser scripts never see it.
pub async fn issue_token(
    State(state): State<AppState>,
    Json(req): Json<TokenRequest>,
) -> AppResult<impl IntoResponse> {
    validate_required_text(&req.email, "email", MAX_EMAIL_LEN)?;

    let token = state
        .jwt_service
        .generate_token(&req.email)
        .map_err(|e| AppError::internal(format!("Failed to generate token: {}", e)))?;

    let max_age = state.jwt_service.config.expiration_minutes * 60;
    let cookie = cookie::session_cookie(&token, max_age, state.config.is_production());

    tracing::info!(target: "security", event = "token_issued", email = %req.email);

    Ok((
        [(header::SET_COOKIE, cookie)],
        Json(TokenResponse { success: true }),
    ))
}

/// POST /logout - clear the session cookie
pub async fn logout(State(state): State<AppState>) -> impl IntoResponse {
    let cookie = cookie::clear_cookie(state.config.is_production());

    (
        [(header::SET_COOKIE, cookie)],
        Json(TokenResponse { success: true }),
    )
}
