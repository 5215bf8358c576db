//! Database operations for notes
//!
//! Unlike the board queries, these do not filter by user. Handlers must
//! confirm ownership with `is_board_owner` or `is_note_owner` before calling
//! anything that reads or writes a specific note.

use chrono::Utc;
use sqlx::SqlitePool;

use crate::shared::Note;

/// Create a note on a board
pub async fn create_note(pool: &SqlitePool, board_id: i64, content: &str) -> Result<Note, sqlx::Error> {
    sqlx::query_as::<_, Note>(
        r#"
        INSERT INTO notes (content, board_id, created_at)
        VALUES (?, ?, ?)
        RETURNING id, content, board_id, created_at
        "#,
    )
    .bind(content)
    .bind(board_id)
    .bind(Utc::now())
    .fetch_one(pool)
    .await
}

/// Notes of a board, newest first
pub async fn list_notes_by_board(pool: &SqlitePool, board_id: i64) -> Result<Vec<Note>, sqlx::Error> {
    sqlx::query_as::<_, Note>(
        r#"
        SELECT id, content, board_id, created_at
        FROM notes
        WHERE board_id = ?
        ORDER BY created_at DESC, id DESC
        "#,
    )
    .bind(board_id)
    .fetch_all(pool)
    .await
}

pub async fn get_note(pool: &SqlitePool, id: i64) -> Result<Option<Note>, sqlx::Error> {
    sqlx::query_as::<_, Note>(
        r#"
        SELECT id, content, board_id, created_at
        FROM notes
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Whether the note's board belongs to `user_id`; false when the note is absent
pub async fn is_note_owner(pool: &SqlitePool, note_id: i64, user_id: i64) -> Result<bool, sqlx::Error> {
    let owned: Option<i64> = sqlx::query_scalar(
        r#"
        SELECT notes.id
        FROM notes
        JOIN boards ON boards.id = notes.board_id
        WHERE notes.id = ? AND boards.user_id = ?
        "#,
    )
    .bind(note_id)
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    Ok(owned.is_some())
}

/// Whether the board belongs to `user_id`; false when the board is absent
pub async fn is_board_owner(pool: &SqlitePool, board_id: i64, user_id: i64) -> Result<bool, sqlx::Error> {
    let owned: Option<i64> = sqlx::query_scalar("SELECT id FROM boards WHERE id = ? AND user_id = ?")
        .bind(board_id)
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

    Ok(owned.is_some())
}

/// Replace a note's content
pub async fn update_note(pool: &SqlitePool, id: i64, content: &str) -> Result<Note, sqlx::Error> {
    sqlx::query_as::<_, Note>(
        r#"
        UPDATE notes
        SET content = ?
        WHERE id = ?
        RETURNING id, content, board_id, created_at
        "#,
    )
    .bind(content)
    .bind(id)
    .fetch_one(pool)
    .await
}

/// Reassign a note to another board
///
/// Does not check that the destination belongs to the note's owner.
pub async fn move_note(pool: &SqlitePool, id: i64, board_id: i64) -> Result<Note, sqlx::Error> {
    sqlx::query_as::<_, Note>(
        r#"
        UPDATE notes
        SET board_id = ?
        WHERE id = ?
        RETURNING id, content, board_id, created_at
        "#,
    )
    .bind(board_id)
    .bind(id)
    .fetch_one(pool)
    .await
}

/// Delete a note and return it
pub async fn delete_note(pool: &SqlitePool, id: i64) -> Result<Note, sqlx::Error> {
    sqlx::query_as::<_, Note>(
        r#"
        DELETE FROM notes
        WHERE id = ?
        RETURNING id, content, board_id, created_at
        "#,
    )
    .bind(id)
    .fetch_one(pool)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::auth::users::create_user;
    use crate::backend::boards::db::create_board;
    use crate::backend::server::config::memory_pool;

    struct Fixture {
        pool: SqlitePool,
        alice: i64,
        bob: i64,
        alice_board: i64,
        bob_board: i64,
    }

    async fn fixture() -> Fixture {
        let pool = memory_pool().await.unwrap();
        let alice = create_user(&pool, "alice@example.com", "hash", None).await.unwrap().id;
        let bob = create_user(&pool, "bob@example.com", "hash", None).await.unwrap().id;
        let alice_board = create_board(&pool, "Alice", alice).await.unwrap().id;
        let bob_board = create_board(&pool, "Bob", bob).await.unwrap().id;
        Fixture {
            pool,
            alice,
            bob,
            alice_board,
            bob_board,
        }
    }

    #[tokio::test]
    async fn test_create_and_list_newest_first() {
        let f = fixture().await;
        let older = create_note(&f.pool, f.alice_board, "older").await.unwrap();
        let newer = create_note(&f.pool, f.alice_board, "newer").await.unwrap();
        create_note(&f.pool, f.bob_board, "elsewhere").await.unwrap();

        let notes = list_notes_by_board(&f.pool, f.alice_board).await.unwrap();
        let ids: Vec<i64> = notes.iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![newer.id, older.id]);
    }

    #[tokio::test]
    async fn test_ownership_checks() {
        let f = fixture().await;
        let note = create_note(&f.pool, f.alice_board, "mine").await.unwrap();

        assert!(is_note_owner(&f.pool, note.id, f.alice).await.unwrap());
        assert!(!is_note_owner(&f.pool, note.id, f.bob).await.unwrap());
        assert!(!is_note_owner(&f.pool, 9999, f.alice).await.unwrap());

        assert!(is_board_owner(&f.pool, f.alice_board, f.alice).await.unwrap());
        assert!(!is_board_owner(&f.pool, f.alice_board, f.bob).await.unwrap());
        assert!(!is_board_owner(&f.pool, 9999, f.alice).await.unwrap());
    }

    #[tokio::test]
    async fn test_update_move_delete() {
        let f = fixture().await;
        let second_board = create_board(&f.pool, "Second", f.alice).await.unwrap().id;
        let note = create_note(&f.pool, f.alice_board, "draft").await.unwrap();

        let edited = update_note(&f.pool, note.id, "final").await.unwrap();
        assert_eq!(edited.content, "final");
        assert_eq!(edited.board_id, f.alice_board);

        let moved = move_note(&f.pool, note.id, second_board).await.unwrap();
        assert_eq!(moved.board_id, second_board);
        assert_eq!(moved.content, "final");

        let deleted = delete_note(&f.pool, note.id).await.unwrap();
        assert_eq!(deleted.id, note.id);
        assert!(get_note(&f.pool, note.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_missing_note_is_row_not_found() {
        let f = fixture().await;
        assert!(matches!(
            update_note(&f.pool, 404, "x").await,
            Err(sqlx::Error::RowNotFound)
        ));
    }
}
