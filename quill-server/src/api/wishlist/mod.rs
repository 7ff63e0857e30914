//! Wishlist API module

mod handler;

use axum::{Router, routing::get};

use crate::core::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route(
        "/wishlist",
        get(handler::list).post(handler::create).delete(handler::remove),
    )
}
