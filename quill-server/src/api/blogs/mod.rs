//! Blog API module

mod handler;

use axum::{Router, routing::get};

use crate::core::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/blog", get(handler::list).post(handler::create))
        .route("/blog/{id}", get(handler::get_by_id))
        .route("/recentBlog", get(handler::list_recent))
        .route("/blogs", get(handler::list_by_owner))
        .route("/categories", get(handler::list_categories))
        .route("/blogCategory", get(handler::list_by_category))
        .route("/search", get(handler::search))
        .route("/feature-blogs", get(handler::list_featured))
}
