//! Database operations for boards
//!
//! Every query that reads or changes a single board filters on both the board
//! id and the owning user id, so a board owned by someone else is
//! indistinguishable from a missing one.

use chrono::Utc;
use sqlx::SqlitePool;

use crate::shared::Board;

/// Create a board owned by `user_id`
pub async fn create_board(
    pool: &SqlitePool,
    name: &str,
    user_id: i64,
) -> Result<Board, sqlx::Error> {
    sqlx::query_as::<_, Board>(
        r#"
        INSERT INTO boards (name, user_id, created_at)
        VALUES (?, ?, ?)
        RETURNING id, name, user_id, created_at
        "#,
    )
    .bind(name)
    .bind(user_id)
    .bind(Utc::now())
    .fetch_one(pool)
    .await
}

/// All boards of a user, newest first
pub async fn list_boards_by_user(pool: &SqlitePool, user_id: i64) -> Result<Vec<Board>, sqlx::Error> {
    sqlx::query_as::<_, Board>(
        r#"
        SELECT id, name, user_id, created_at
        FROM boards
        WHERE user_id = ?
        ORDER BY created_at DESC, id DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

/// Get a board if `user_id` owns it
pub async fn get_board(
    pool: &SqlitePool,
    id: i64,
    user_id: i64,
) -> Result<Option<Board>, sqlx::Error> {
    sqlx::query_as::<_, Board>(
        r#"
        SELECT id, name, user_id, created_at
        FROM boards
        WHERE id = ? AND user_id = ?
        "#,
    )
    .bind(id)
    .bind(user_id)
    .fetch_optional(pool)
    .await
}

/// Rename a board; `None` when it is absent or not owned by `user_id`
pub async fn update_board(
    pool: &SqlitePool,
    id: i64,
    user_id: i64,
    name: &str,
) -> Result<Option<Board>, sqlx::Error> {
    sqlx::query_as::<_, Board>(
        r#"
        UPDATE boards
        SET name = ?
        WHERE id = ? AND user_id = ?
        RETURNING id, name, user_id, created_at
        "#,
    )
    .bind(name)
    .bind(id)
    .bind(user_id)
    .fetch_optional(pool)
    .await
}

/// Delete a board together with its notes
///
/// Runs in one transaction. Notes are removed explicitly as well as through
/// the foreign-key cascade, so the result does not depend on the connection's
/// `foreign_keys` pragma.
pub async fn delete_board(
    pool: &SqlitePool,
    id: i64,
    user_id: i64,
) -> Result<Option<Board>, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let board = sqlx::query_as::<_, Board>(
        r#"
        SELECT id, name, user_id, created_at
        FROM boards
        WHERE id = ? AND user_id = ?
        "#,
    )
    .bind(id)
    .bind(user_id)
    .fetch_optional(&mut *tx)
    .await?;

    let Some(board) = board else {
        tx.rollback().await?;
        return Ok(None);
    };

    sqlx::query("DELETE FROM notes WHERE board_id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    sqlx::query("DELETE FROM boards WHERE id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    Ok(Some(board))
}
