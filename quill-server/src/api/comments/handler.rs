//! Comment API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::InsertAck;
use crate::core::AppState;
use crate::db::models::Comment;
use crate::db::repository::CommentRepository;
use crate::utils::AppResult;
use crate::utils::validation::{MAX_ID_LEN, validate_optional_text};

/// GET /comments/:blogId - comments on a post, newest first
pub async fn list_by_blog(
    State(state): State<AppState>,
    Path(blog_id): Path<String>,
) -> AppResult<Json<Vec<Comment>>> {
    let repo = CommentRepository::new(state.db.clone());
    let comments = repo.find_by_blog(&blog_id).await?;
    Ok(Json(comments))
}

/// POST /comments - add a comment
pub async fn create(
    State(state): State<AppState>,
    Json(comment): Json<Comment>,
) -> AppResult<Json<InsertAck>> {
    validate_optional_text(&comment.blog_id, "blogId", MAX_ID_LEN)?;

    let repo = CommentRepository::new(state.db.clone());
    let inserted_id = repo.create(comment).await?;

    Ok(Json(InsertAck {
        acknowledged: true,
        inserted_id,
    }))
}
