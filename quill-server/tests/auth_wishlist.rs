//! Session and wishlist integration tests
//!
//! The wishlist read is the one guarded route: it wants a valid session
//! cookie whose email matches the requested one.

mod common;

use axum::http::{StatusCode, header};
use chrono::Utc;
use common::{TEST_SECRET, body_json, spawn_app};
use jsonwebtoken::{EncodingKey, Header, encode};
use serde_json::json;

use quill_server::auth::Claims;

#[tokio::test]
async fn jwt_sets_session_cookie() {
    let app = spawn_app().await;

    let response = app
        .post_json("/jwt", json!({ "email": "ana@example.com" }))
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("Set-Cookie header")
        .to_str()
        .unwrap()
        .to_string();
    assert!(set_cookie.starts_with("token="), "got {set_cookie}");
    assert!(set_cookie.contains("HttpOnly"));
    assert!(set_cookie.contains("SameSite=Lax"));
    assert!(set_cookie.contains("Path=/"));
    assert!(set_cookie.contains("Max-Age=3600"));

    let body = body_json(response).await;
    assert_eq!(body, json!({ "success": true }));
}

#[tokio::test]
async fn jwt_rejects_empty_email() {
    let app = spawn_app().await;

    let response = app.post_json("/jwt", json!({ "email": "" })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn logout_clears_session_cookie() {
    let app = spawn_app().await;

    let response = app.post_json("/logout", json!({})).await;
    assert_eq!(response.status(), StatusCode::OK);

    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("Set-Cookie header")
        .to_str()
        .unwrap()
        .to_string();
    assert!(set_cookie.starts_with("token=;"), "got {set_cookie}");
    assert!(set_cookie.contains("Max-Age=0"));

    let body = body_json(response).await;
    assert_eq!(body, json!({ "success": true }));
}

#[tokio::test]
async fn wishlist_read_requires_session() {
    let app = spawn_app().await;

    let response = app.get("/wishlist?email=ana@example.com").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = app
        .get_with_cookie("/wishlist?email=ana@example.com", "token=not-a-jwt")
        .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn wishlist_read_rejects_expired_session() {
    let app = spawn_app().await;

    // Signed with the right key but expired well past the leeway
    let now = Utc::now().timestamp();
    let claims = Claims {
        sub: "ana@example.com".to_string(),
        email: "ana@example.com".to_string(),
        exp: now - 7200,
        iat: now - 10800,
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .unwrap();

    let response = app
        .get_with_cookie(
            "/wishlist?email=ana@example.com",
            &format!("token={token}"),
        )
        .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(response).await;
    assert_eq!(body["error"], json!("token_expired"));
}

#[tokio::test]
async fn wishlist_read_rejects_other_identity() {
    let app = spawn_app().await;

    let cookie = app.login("ana@example.com").await;
    let response = app
        .get_with_cookie("/wishlist?email=ben@example.com", &cookie)
        .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let body = body_json(response).await;
    assert_eq!(body["error"], json!("forbidden"));
}

#[tokio::test]
async fn wishlist_read_requires_email_param() {
    let app = spawn_app().await;

    let cookie = app.login("ana@example.com").await;
    let response = app.get_with_cookie("/wishlist", &cookie).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn wishlist_returns_own_entries() {
    let app = spawn_app().await;

    for (email, blog_id) in [
        ("ana@example.com", "blog:one"),
        ("ana@example.com", "blog:two"),
        ("ben@example.com", "blog:one"),
    ] {
        let response = app
            .post_json("/wishlist", json!({ "userEmail": email, "blogId": blog_id }))
            .await;
        assert_eq!(response.status(), StatusCode::OK);
        let ack = body_json(response).await;
        assert_eq!(ack["acknowledged"], json!(true));
        assert!(ack["insertedId"].as_str().unwrap().starts_with("wishlist:"));
    }

    let cookie = app.login("ana@example.com").await;
    let response = app
        .get_with_cookie("/wishlist?email=ana@example.com", &cookie)
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let entries = body_json(response).await;
    let entries = entries.as_array().expect("array body");
    assert_eq!(entries.len(), 2);
    for entry in entries {
        assert_eq!(entry["userEmail"], json!("ana@example.com"));
    }
}

#[tokio::test]
async fn wishlist_delete_removes_all_matching_entries() {
    let app = spawn_app().await;

    // Duplicate (ana, blog:one) entries plus two partial matches
    for (email, blog_id) in [
        ("ana@example.com", "blog:one"),
        ("ana@example.com", "blog:one"),
        ("ana@example.com", "blog:two"),
        ("ben@example.com", "blog:one"),
    ] {
        app.post_json("/wishlist", json!({ "userEmail": email, "blogId": blog_id }))
            .await;
    }

    let response = app
        .delete_json(
            "/wishlist",
            json!({ "userEmail": "ana@example.com", "blogId": "blog:one" }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let ack = body_json(response).await;
    assert_eq!(ack, json!({ "acknowledged": true, "deletedCount": 2 }));

    // Partial matches survive
    let cookie = app.login("ana@example.com").await;
    let response = app
        .get_with_cookie("/wishlist?email=ana@example.com", &cookie)
        .await;
    let entries = body_json(response).await;
    let entries = entries.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["blogId"], json!("blog:two"));

    let cookie = app.login("ben@example.com").await;
    let response = app
        .get_with_cookie("/wishlist?email=ben@example.com", &cookie)
        .await;
    let entries = body_json(response).await;
    assert_eq!(entries.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn wishlist_delete_requires_both_fields() {
    let app = spawn_app().await;

    let response = app
        .delete_json("/wishlist", json!({ "userEmail": "ana@example.com" }))
        .await;
    // Missing blogId never deletes anything
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
