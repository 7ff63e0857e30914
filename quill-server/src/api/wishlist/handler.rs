//! Wishlist API Handlers
//!
//! Reading a wishlist requires a valid session whose email matches the
//! requested one. Inserts and deletes are open, matching the rest of
//! the write surface.

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;

use crate::api::{DeleteAck, InsertAck};
use crate::auth::CurrentUser;
use crate::core::AppState;
use crate::db::models::{WishlistEntry, WishlistKey};
use crate::db::repository::WishlistRepository;
use crate::utils::validation::{
    MAX_EMAIL_LEN, MAX_ID_LEN, validate_optional_text, validate_required_text,
};
use crate::utils::{AppError, AppResult};

#[derive(Debug, Deserialize)]
pub struct WishlistQuery {
    pub email: String,
}

/// GET /wishlist?email= - entries belonging to the session user
pub async fn list(
    State(state): State<AppState>,
    user: CurrentUser,
    Query(query): Query<WishlistQuery>,
) -> AppResult<Json<Vec<WishlistEntry>>> {
    validate_required_text(&query.email, "email", MAX_EMAIL_LEN)?;

    if user.email != query.email {
        tracing::warn!(
            target: "security",
            event = "wishlist_forbidden",
            session_email = %user.email,
            requested_email = %query.email,
        );
        return Err(AppError::forbidden("Identity does not match requested email"));
    }

    let repo = WishlistRepository::new(state.db.clone());
    let entries = repo.find_by_email(&query.email).await?;
    Ok(Json(entries))
}

/// POST /wishlist - add an entry
pub async fn create(
    State(state): State<AppState>,
    Json(entry): Json<WishlistEntry>,
) -> AppResult<Json<InsertAck>> {
    validate_optional_text(&entry.user_email, "userEmail", MAX_EMAIL_LEN)?;
    validate_optional_text(&entry.blog_id, "blogId", MAX_ID_LEN)?;

    let repo = WishlistRepository::new(state.db.clone());
    let inserted_id = repo.create(entry).await?;

    Ok(Json(InsertAck {
        acknowledged: true,
        inserted_id,
    }))
}

/// DELETE /wishlist - remove every entry matching userEmail + blogId
pub async fn remove(
    State(state): State<AppState>,
    Json(key): Json<WishlistKey>,
) -> AppResult<Json<DeleteAck>> {
    validate_required_text(&key.user_email, "userEmail", MAX_EMAIL_LEN)?;
    validate_required_text(&key.blog_id, "blogId", MAX_ID_LEN)?;

    let repo = WishlistRepository::new(state.db.clone());
    let deleted_count = repo.delete_by_key(&key.user_email, &key.blog_id).await?;

    Ok(Json(DeleteAck {
        acknowledged: true,
        deleted_count,
    }))
}
