#![allow(dead_code)]

//! Test infrastructure for cb-server API tests

use cb_auth::TokenSigner;
use cb_server::AppState;

use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, StatusCode, header};
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use tower::ServiceExt;

pub const TEST_SECRET: &[u8] = b"test-secret-key-at-least-32-bytes";

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePool::connect(":memory:")
        .await
        .expect("Failed to create test database");

    cb_db::MIGRATOR
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Create AppState for testing
pub async fn create_test_app_state() -> AppState {
    AppState {
        pool: create_test_pool().await,
        tokens: Arc::new(TokenSigner::with_hs256(TEST_SECRET)),
        cookie_name: "loginToken".to_string(),
        allowed_origins: vec!["http://localhost:5173".to_string()],
        public_dir: PathBuf::from("public"),
    }
}

/// Build a JSON request
pub fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Build a bodyless request
pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Collect a response body as JSON
pub async fn read_json(response: Response<Body>) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).expect("Response body is not JSON")
}

/// Collect a response body as text
pub async fn read_text(response: Response<Body>) -> String {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(body.to_vec()).unwrap()
}

/// The `name=value` pair of the login cookie a response sets
pub fn login_cookie_pair(response: &Response<Body>) -> String {
    response
        .headers()
        .get(header::SET_COOKIE)
        .expect("Response sets no cookie")
        .to_str()
        .unwrap()
        .split(';')
        .next()
        .unwrap()
        .to_string()
}

/// Sign up a fresh user; returns the response body and the cookie pair to
/// send on authenticated requests
pub async fn signup_user(app: &Router, username: &str) -> (serde_json::Value, String) {
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/auth/signup",
            serde_json::json!({
                "username": username,
                "password": format!("{}-pass", username),
                "fullname": format!("{} Fullname", username),
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let cookie = login_cookie_pair(&response);
    let body = read_json(response).await;

    (body, cookie)
}

/// Create a car as the given user; returns the created car body
pub async fn create_car(app: &Router, cookie: &str, vendor: &str, price: f64) -> serde_json::Value {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/car")
                .header(header::CONTENT_TYPE, "application/json")
                .header(header::COOKIE, cookie)
                .body(Body::from(
                    serde_json::json!({
                        "vendor": vendor,
                        "speed": 120,
                        "price": price,
                    })
                    .to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    read_json(response).await
}
