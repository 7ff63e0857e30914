//! Comment API module

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/comments", post(handler::create))
        .route("/comments/{blog_id}", get(handler::list_by_blog))
}
