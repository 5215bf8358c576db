//! Note API integration tests

#![cfg(feature = "server")]

mod common;

use axum::http::{Method, StatusCode};
use common::auth_helpers::{create_board, create_note, get, ids, register_user, send};
use common::database::test_app;
use pretty_assertions::assert_eq;
use serde_json::json;

#[tokio::test]
async fn test_create_and_list_notes() {
    let app = test_app().await;
    let (_, token) = register_user(&app, "ada@example.com", "pw").await;
    let board = create_board(&app, &token, "Todo").await;

    let (status, note) = send(
        &app,
        Method::POST,
        &format!("/api/boards/{}/notes", board),
        Some(&token),
        Some(json!({ "content": "buy milk" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(note["content"], "buy milk");
    assert_eq!(note["boardId"], board);

    let second = create_note(&app, &token, board, "call mum").await;

    let (status, notes) = get(&app, &format!("/api/boards/{}/notes", board), &token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&notes), vec![second, note["id"].as_i64().expect("id")]);
}

#[tokio::test]
async fn test_create_note_validation_and_ownership() {
    let app = test_app().await;
    let (_, ada) = register_user(&app, "ada@example.com", "pw").await;
    let (_, bob) = register_user(&app, "bob@example.com", "pw").await;
    let board = create_board(&app, &ada, "Todo").await;
    let uri = format!("/api/boards/{}/notes", board);

    let (status, body) = send(&app, Method::POST, &uri, Some(&ada), Some(json!({ "content": " " }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Note content is required");

    let (status, body) = send(&app, Method::POST, &uri, Some(&bob), Some(json!({ "content": "mine now" }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Board not found or access denied");

    let (status, _) = get(&app, &uri, &bob).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/boards/9999/notes",
        Some(&ada),
        Some(json!({ "content": "lost" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_and_update_note() {
    let app = test_app().await;
    let (_, ada) = register_user(&app, "ada@example.com", "pw").await;
    let (_, bob) = register_user(&app, "bob@example.com", "pw").await;
    let board = create_board(&app, &ada, "Todo").await;
    let note = create_note(&app, &ada, board, "draft").await;
    let uri = format!("/api/notes/{}", note);

    let (status, body) = get(&app, &uri, &ada).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["content"], "draft");

    let (status, body) = send(&app, Method::PUT, &uri, Some(&ada), Some(json!({ "content": "final" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["content"], "final");
    assert_eq!(body["boardId"], board);

    let (status, body) = get(&app, &uri, &bob).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Note not found or access denied");

    let (status, _) = send(&app, Method::PUT, &uri, Some(&bob), Some(json!({ "content": "defaced" }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, Method::PUT, &uri, Some(&ada), Some(json!({ "content": "" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, body) = get(&app, &uri, &ada).await;
    assert_eq!(body["content"], "final");
}

#[tokio::test]
async fn test_move_note_between_boards() {
    let app = test_app().await;
    let (_, token) = register_user(&app, "ada@example.com", "pw").await;
    let todo = create_board(&app, &token, "Todo").await;
    let done = create_board(&app, &token, "Done").await;
    let note = create_note(&app, &token, todo, "ship it").await;

    let (status, body) = send(
        &app,
        Method::PATCH,
        &format!("/api/notes/{}/move", note),
        Some(&token),
        Some(json!({ "boardId": done })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["boardId"], done);
    assert_eq!(body["content"], "ship it");

    let (_, todo_notes) = get(&app, &format!("/api/boards/{}/notes", todo), &token).await;
    let (_, done_notes) = get(&app, &format!("/api/boards/{}/notes", done), &token).await;
    assert!(ids(&todo_notes).is_empty());
    assert_eq!(ids(&done_notes), vec![note]);
}

#[tokio::test]
async fn test_move_note_ownership() {
    let app = test_app().await;
    let (_, ada) = register_user(&app, "ada@example.com", "pw").await;
    let (_, bob) = register_user(&app, "bob@example.com", "pw").await;
    let ada_board = create_board(&app, &ada, "Ada").await;
    let bob_board = create_board(&app, &bob, "Bob").await;
    let note = create_note(&app, &ada, ada_board, "private").await;
    let uri = format!("/api/notes/{}/move", note);

    let (status, body) = send(&app, Method::PATCH, &uri, Some(&ada), Some(json!({ "boardId": bob_board }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Board not found or access denied");

    let (status, body) = send(&app, Method::PATCH, &uri, Some(&bob), Some(json!({ "boardId": bob_board }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Note not found or access denied");

    let (status, _) = send(&app, Method::PATCH, &uri, Some(&ada), Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, body) = get(&app, &format!("/api/notes/{}", note), &ada).await;
    assert_eq!(body["boardId"], ada_board);
}

#[tokio::test]
async fn test_delete_note() {
    let app = test_app().await;
    let (_, ada) = register_user(&app, "ada@example.com", "pw").await;
    let (_, bob) = register_user(&app, "bob@example.com", "pw").await;
    let board = create_board(&app, &ada, "Todo").await;
    let note = create_note(&app, &ada, board, "done soon").await;
    let uri = format!("/api/notes/{}", note);

    let (status, _) = send(&app, Method::DELETE, &uri, Some(&bob), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(&app, Method::DELETE, &uri, Some(&ada), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Note deleted successfully");

    let (status, _) = send(&app, Method::DELETE, &uri, Some(&ada), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, notes) = get(&app, &format!("/api/boards/{}/notes", board), &ada).await;
    assert!(ids(&notes).is_empty());
}

#[tokio::test]
async fn test_invalid_note_id() {
    let app = test_app().await;
    let (_, token) = register_user(&app, "ada@example.com", "pw").await;

    let (status, body) = get(&app, "/api/notes/not-a-number", &token).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid note ID");
}
