//! Shared helpers for HTTP integration tests.
//!
//! Each test gets its own in-memory SQLite database with every migration applied,
//! including the planet and character seed, and drives the production router
//! through `tower::ServiceExt::oneshot`.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Method, Request, Response},
    Router,
};
use holonet::server::{config::Config, router::router, startup, state::AppState};
use serde_json::Value;
use tower::ServiceExt;

/// Seeded planet ids.
pub const ALDERAAN: i32 = 1;
pub const TATOOINE: i32 = 3;

/// Seeded character id for Luke Skywalker.
pub const LUKE: i32 = 1;

/// Builds the full application router over a fresh, migrated in-memory database.
pub async fn build_test_app() -> Router {
    let config = Config {
        database_url: "sqlite::memory:".to_string(),
        host: "127.0.0.1".to_string(),
        port: 0,
    };

    let db = startup::connect_to_database(&config).await.unwrap();

    router().with_state(AppState::new(db))
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);

    let request = match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    app.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn post(app: &Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn post_empty(app: &Router, uri: &str) -> Response<Body> {
    send(app, Method::POST, uri, None).await
}

pub async fn delete(app: &Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

/// Sends a raw (possibly malformed) JSON body.
pub async fn post_raw(app: &Router, uri: &str, raw: &'static str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(raw))
        .unwrap();

    app.clone().oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Registers a user through the API and returns the response body.
pub async fn register(app: &Router, email: &str, name: &str) -> Value {
    let response = post(
        app,
        "/users",
        serde_json::json!({ "email": email, "password": "p", "name": name }),
    )
    .await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await
}
