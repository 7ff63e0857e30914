//! Shared test harness
//!
//! Builds the full router against a throwaway datastore so tests can
//! exercise routes end to end without binding a socket.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, StatusCode, header};
use http_body_util::BodyExt;
use surrealdb::Surreal;
use surrealdb::engine::local::RocksDb;
use tempfile::TempDir;
use tower::ServiceExt;

use quill_server::auth::JwtConfig;
use quill_server::{AppState, Config, api};

pub const TEST_SECRET: &str = "integration-test-secret-0123456789abcdef";

pub struct TestApp {
    pub app: Router,
    _tmp: TempDir,
}

pub async fn spawn_app() -> TestApp {
    let tmp = tempfile::tempdir().unwrap();
    let db = Surreal::new::<RocksDb>(tmp.path()).await.unwrap();
    db.use_ns("test").use_db("test").await.unwrap();

    // Built directly instead of via from_env so parallel tests never
    // race on process-wide environment variables.
    let config = Config {
        http_port: 0,
        data_dir: String::new(),
        jwt: JwtConfig {
            secret: TEST_SECRET.to_string(),
            expiration_minutes: 60,
        },
        allowed_origins: vec!["http://localhost:5173".to_string()],
        environment: "test".to_string(),
    };

    let state = AppState::with_db(config, db);
    TestApp {
        app: api::build_app(state),
        _tmp: tmp,
    }
}

impl TestApp {
    pub async fn request(&self, req: Request<Body>) -> Response<Body> {
        self.app.clone().oneshot(req).await.unwrap()
    }

    pub async fn get(&self, path: &str) -> Response<Body> {
        self.request(Request::builder().uri(path).body(Body::empty()).unwrap())
            .await
    }

    pub async fn get_with_cookie(&self, path: &str, cookie: &str) -> Response<Body> {
        self.request(
            Request::builder()
                .uri(path)
                .header(header::COOKIE, cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    pub async fn post_json(&self, path: &str, body: serde_json::Value) -> Response<Body> {
        self.request(
            Request::builder()
                .method("POST")
                .uri(path)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    pub async fn delete_json(&self, path: &str, body: serde_json::Value) -> Response<Body> {
        self.request(
            Request::builder()
                .method("DELETE")
                .uri(path)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    /// POST /jwt for the given email, returning the "token=..." pair
    /// from the Set-Cookie header
    pub async fn login(&self, email: &str) -> String {
        let response = self
            .post_json("/jwt", serde_json::json!({ "email": email }))
            .await;
        assert_eq!(response.status(), StatusCode::OK);

        let set_cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .expect("login must set a session cookie")
            .to_str()
            .unwrap();
        set_cookie.split(';').next().unwrap().to_string()
    }
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
