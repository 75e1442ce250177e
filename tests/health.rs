//! Integration tests for the health check, docs and fallback routes.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, get};

#[tokio::test]
async fn health_check_returns_ok_with_version() {
    let app = build_test_app().await;
    let response = get(&app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn unknown_route_returns_not_found_body() {
    let app = build_test_app().await;
    let response = get(&app, "/this-route-does-not-exist").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["error"], "Not found");
}

#[tokio::test]
async fn openapi_document_lists_every_path() {
    let app = build_test_app().await;
    let response = get(&app, "/api/docs/openapi.json").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let paths = json["paths"].as_object().unwrap();
    for path in [
        "/health",
        "/users",
        "/users/{id}",
        "/planets",
        "/planets/{id}",
        "/characters",
        "/characters/{id}",
        "/users/{user_id}/favorites",
        "/users/{user_id}/favorites/planets/{planet_id}",
        "/users/{user_id}/favorites/characters/{character_id}",
    ] {
        assert!(paths.contains_key(path), "missing {}", path);
    }
}
