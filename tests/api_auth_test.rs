//! Authentication API integration tests
//!
//! Register, login, current user and the bearer-token guard.

#![cfg(feature = "server")]

mod common;

use axum::http::{Method, StatusCode};
use common::auth_helpers::{get, register_user, send, send_raw};
use common::database::{test_app, TEST_SECRET};
use noteboard::backend::auth::TokenService;
use pretty_assertions::assert_eq;
use serde_json::json;

#[tokio::test]
async fn test_register_success() {
    let app = test_app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/auth/register",
        None,
        Some(json!({ "email": "ada@example.com", "password": "hunter22", "name": " Ada " })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["user"]["email"], "ada@example.com");
    assert_eq!(body["user"]["name"], "Ada");
    assert!(body["token"].as_str().is_some_and(|token| !token.is_empty()));
    assert!(body["user"].get("password").is_none());
    assert!(body["user"].get("passwordHash").is_none());
}

#[tokio::test]
async fn test_register_blank_name_is_null() {
    let app = test_app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/auth/register",
        None,
        Some(json!({ "email": "bo@example.com", "password": "pw", "name": "   " })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(body["user"]["name"].is_null());
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let app = test_app().await;
    register_user(&app, "ada@example.com", "hunter22").await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/auth/register",
        None,
        Some(json!({ "email": "ada@example.com", "password": "other" })),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "Email already registered");
    assert_eq!(body["status"], 409);
}

#[tokio::test]
async fn test_register_missing_fields() {
    let app = test_app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/auth/register",
        None,
        Some(json!({ "password": "hunter22" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Email and password are required");

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/auth/register",
        None,
        Some(json!({ "email": "ada@example.com", "password": "" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_register_malformed_json() {
    let app = test_app().await;

    let (status, body) = send_raw(
        &app,
        Method::POST,
        "/api/auth/register",
        None,
        Some("{ not json"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], 400);
}

#[tokio::test]
async fn test_login_success() {
    let app = test_app().await;
    let (id, _) = register_user(&app, "ada@example.com", "hunter22").await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/auth/login",
        None,
        Some(json!({ "email": "ada@example.com", "password": "hunter22" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["id"], id);

    let token = body["token"].as_str().expect("token");
    let (status, me) = get(&app, "/api/auth/me", token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(me["email"], "ada@example.com");
}

#[tokio::test]
async fn test_login_wrong_password() {
    let app = test_app().await;
    register_user(&app, "ada@example.com", "hunter22").await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/auth/login",
        None,
        Some(json!({ "email": "ada@example.com", "password": "wrong" })),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Incorrect password");
}

#[tokio::test]
async fn test_login_unknown_email() {
    let app = test_app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/auth/login",
        None,
        Some(json!({ "email": "nobody@example.com", "password": "pw" })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "User not found");
}

#[tokio::test]
async fn test_me_requires_token() {
    let app = test_app().await;

    let (status, body) = send(&app, Method::GET, "/api/auth/me", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Missing authorization token");
}

#[tokio::test]
async fn test_guard_rejections() {
    let app = test_app().await;
    register_user(&app, "ada@example.com", "hunter22").await;

    let (status, body) = get(&app, "/api/boards", "not-a-token").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Invalid token");

    let foreign = TokenService::new("some-other-secret")
        .issue(1, "ada@example.com")
        .expect("token");
    let (status, _) = get(&app, "/api/boards", &foreign).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let ghost = TokenService::new(TEST_SECRET)
        .issue(999, "ghost@example.com")
        .expect("token");
    let (status, body) = get(&app, "/api/boards", &ghost).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "User not found");
}

#[tokio::test]
async fn test_health_and_fallback() {
    let app = test_app().await;

    let (status, body) = send(&app, Method::GET, "/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "ok");

    let (status, body) = send(&app, Method::GET, "/api/nothing-here", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Route not found");
}
