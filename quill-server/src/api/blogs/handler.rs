//! Blog API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use crate::api::InsertAck;
use crate::core::AppState;
use crate::db::models::BlogPost;
use crate::db::repository::BlogRepository;
use crate::utils::validation::{
    MAX_BODY_LEN, MAX_CATEGORY_LEN, MAX_EMAIL_LEN, MAX_QUERY_LEN, MAX_TITLE_LEN,
    validate_optional_text, validate_required_text,
};
use crate::utils::{AppError, AppResult};

#[derive(Debug, Deserialize)]
pub struct OwnerQuery {
    pub email: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CategoryQuery {
    pub category: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: String,
}

/// GET /blog - all blog posts
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<BlogPost>>> {
    let repo = BlogRepository::new(state.db.clone());
    let posts = repo.find_all().await?;
    Ok(Json(posts))
}

/// GET /blog/:id - a single blog post
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<BlogPost>> {
    let repo = BlogRepository::new(state.db.clone());
    let post = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Blog post {} not found", id)))?;
    Ok(Json(post))
}

/// POST /blog - publish a blog post
pub async fn create(
    State(state): State<AppState>,
    Json(post): Json<BlogPost>,
) -> AppResult<Json<InsertAck>> {
    validate_optional_text(&post.blog_title, "blogTitle", MAX_TITLE_LEN)?;
    validate_optional_text(&post.long_des, "longDes", MAX_BODY_LEN)?;
    validate_optional_text(&post.category, "category", MAX_CATEGORY_LEN)?;
    validate_optional_text(&post.user_email, "userEmail", MAX_EMAIL_LEN)?;

    let repo = BlogRepository::new(state.db.clone());
    let inserted_id = repo.create(post).await?;

    Ok(Json(InsertAck {
        acknowledged: true,
        inserted_id,
    }))
}

/// GET /recentBlog - six newest posts
pub async fn list_recent(State(state): State<AppState>) -> AppResult<Json<Vec<BlogPost>>> {
    let repo = BlogRepository::new(state.db.clone());
    let posts = repo.find_recent().await?;
    Ok(Json(posts))
}

/// GET /blogs - posts filtered by owner email (all posts when absent)
pub async fn list_by_owner(
    State(state): State<AppState>,
    Query(query): Query<OwnerQuery>,
) -> AppResult<Json<Vec<BlogPost>>> {
    let repo = BlogRepository::new(state.db.clone());
    let posts = match query.email {
        Some(email) => {
            validate_required_text(&email, "email", MAX_EMAIL_LEN)?;
            repo.find_by_owner(&email).await?
        }
        None => repo.find_all().await?,
    };
    Ok(Json(posts))
}

/// GET /categories - distinct category names
pub async fn list_categories(State(state): State<AppState>) -> AppResult<Json<Vec<String>>> {
    let repo = BlogRepository::new(state.db.clone());
    let categories = repo.distinct_categories().await?;
    if categories.is_empty() {
        return Err(AppError::not_found("No categories found"));
    }
    Ok(Json(categories))
}

/// GET /blogCategory - posts filtered by category (all posts when absent)
pub async fn list_by_category(
    State(state): State<AppState>,
    Query(query): Query<CategoryQuery>,
) -> AppResult<Json<Vec<BlogPost>>> {
    let repo = BlogRepository::new(state.db.clone());
    let posts = match query.category {
        Some(category) => {
            validate_required_text(&category, "category", MAX_CATEGORY_LEN)?;
            repo.find_by_category(&category).await?
        }
        None => repo.find_all().await?,
    };
    Ok(Json(posts))
}

/// GET /search?q= - case-insensitive substring search over title and body
pub async fn search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> AppResult<Json<Vec<BlogPost>>> {
    validate_required_text(&query.q, "q", MAX_QUERY_LEN)?;

    let repo = BlogRepository::new(state.db.clone());
    let posts = repo.search(&query.q).await?;
    Ok(Json(posts))
}

/// GET /feature-blogs - top ten posts by body word count
pub async fn list_featured(State(state): State<AppState>) -> AppResult<Json<Vec<BlogPost>>> {
    let repo = BlogRepository::new(state.db.clone());
    let posts = repo.find_featured().await?;
    Ok(Json(posts))
}
