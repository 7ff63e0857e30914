//! Comment route integration tests

mod common;

use axum::http::StatusCode;
use common::{body_json, spawn_app};
use serde_json::json;

#[tokio::test]
async fn comments_list_newest_first_per_post() {
    let app = spawn_app().await;

    for (text, created_at, blog_id) in [
        ("first", 1i64, "blog:alpha"),
        ("third", 3, "blog:alpha"),
        ("second", 2, "blog:alpha"),
        ("elsewhere", 9, "blog:beta"),
    ] {
        let response = app
            .post_json(
                "/comments",
                json!({
                    "blogId": blog_id,
                    "comment": text,
                    "userEmail": "reader@example.com",
                    "createdAt": created_at,
                }),
            )
            .await;
        assert_eq!(response.status(), StatusCode::OK);
        let ack = body_json(response).await;
        assert_eq!(ack["acknowledged"], json!(true));
        assert!(ack["insertedId"].as_str().unwrap().starts_with("comment:"));
    }

    let response = app.get("/comments/blog:alpha").await;
    assert_eq!(response.status(), StatusCode::OK);
    let comments = body_json(response).await;
    let comments = comments.as_array().expect("array body");
    assert_eq!(comments.len(), 3);

    // Newest first, and the free-form comment text round-trips
    let texts: Vec<&str> = comments
        .iter()
        .map(|c| c["comment"].as_str().unwrap())
        .collect();
    assert_eq!(texts, vec!["third", "second", "first"]);
}

#[tokio::test]
async fn comments_for_unknown_post_are_empty() {
    let app = spawn_app().await;

    let response = app.get("/comments/blog:nothing").await;
    assert_eq!(response.status(), StatusCode::OK);
    let comments = body_json(response).await;
    assert_eq!(comments.as_array().unwrap().len(), 0);
}
