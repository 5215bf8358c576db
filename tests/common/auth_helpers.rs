//! Request and authentication helpers
//!
//! Requests go straight into the router with `tower::ServiceExt::oneshot`;
//! no socket is involved.

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

/// Send a request with a raw body and return status plus parsed body
///
/// Bodies that are not JSON come back as a JSON string.
pub async fn send_raw(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<&str>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request"),
        None => builder.body(Body::empty()).expect("request"),
    };

    let response = app.clone().oneshot(request).await.expect("router response");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("response body");

    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    (status, value)
}

pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let body = body.map(|value| value.to_string());
    send_raw(app, method, uri, token, body.as_deref()).await
}

pub async fn get(app: &Router, uri: &str, token: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, Some(token), None).await
}

/// Register a user, returning their id and token
pub async fn register_user(app: &Router, email: &str, password: &str) -> (i64, String) {
    let (status, body) = send(
        app,
        Method::POST,
        "/api/auth/register",
        None,
        Some(json!({ "email": email, "password": password })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "register failed: {}", body);

    let id = body["user"]["id"].as_i64().expect("user id");
    let token = body["token"].as_str().expect("token").to_string();
    (id, token)
}

pub async fn create_board(app: &Router, token: &str, name: &str) -> i64 {
    let (status, body) = send(
        app,
        Method::POST,
        "/api/boards",
        Some(token),
        Some(json!({ "name": name })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "create board failed: {}", body);
    body["id"].as_i64().expect("board id")
}

pub async fn create_note(app: &Router, token: &str, board_id: i64, content: &str) -> i64 {
    let (status, body) = send(
        app,
        Method::POST,
        &format!("/api/boards/{}/notes", board_id),
        Some(token),
        Some(json!({ "content": content })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "create note failed: {}", body);
    body["id"].as_i64().expect("note id")
}

/// Ids in a JSON array of boards or notes, in order
pub fn ids(list: &Value) -> Vec<i64> {
    list.as_array()
        .expect("JSON array")
        .iter()
        .filter_map(|item| item["id"].as_i64())
        .collect()
}
