//! JWT Extractor
//!
//! Custom extractor for automatically validating session tokens

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::auth::{CurrentUser, JwtError, cookie};
use crate::core::AppState;
use crate::utils::AppError;

/// Session auth extractor
///
/// Use this extractor in protected handlers to validate the `token`
/// cookie and extract the CurrentUser it names.
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // Check if already extracted (from middleware)
        if let Some(user) = parts.extensions.get::<CurrentUser>() {
            return Ok(user.clone());
        }

        // Extract the session cookie
        let token = match cookie::extract_token(&parts.headers) {
            Some(token) => token,
            None => {
                tracing::warn!(target: "security", event = "auth_missing", uri = %parts.uri);
                return Err(AppError::Unauthorized);
            }
        };

        // Validate token
        match state.jwt_service.validate_token(token) {
            Ok(claims) => {
                let user = CurrentUser::from(claims);

                // Store in extensions for potential reuse
                parts.extensions.insert(user.clone());

                Ok(user)
            }
            Err(e) => {
                tracing::warn!(
                    target: "security",
                    event = "auth_failed",
                    error = %e,
                    uri = %parts.uri,
                );

                match e {
                    JwtError::ExpiredToken => Err(AppError::TokenExpired),
                    _ => Err(AppError::InvalidToken),
                }
            }
        }
    }
}
