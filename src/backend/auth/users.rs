/**
 * Credential Store
 *
 * User rows and the queries against them. Users are created by
 * registration and never updated or deleted by any exposed operation.
 */

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::shared::UserResponse;

/// User row
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    /// Unique
    pub email: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    pub name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Public view of the user, without the password hash
    pub fn to_response(&self) -> UserResponse {
        UserResponse {
            id: self.id,
            email: self.email.clone(),
            name: self.name.clone(),
        }
    }
}

/// Create a new user
///
/// # Errors
///
/// A duplicate email surfaces as a unique-constraint database error; the
/// register handler maps it to `EmailTaken`.
pub async fn create_user(
    pool: &SqlitePool,
    email: &str,
    password_hash: &str,
    name: Option<&str>,
) -> Result<User, sqlx::Error> {
    let now = Utc::now();

    sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (email, password_hash, name, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?)
        RETURNING id, email, password_hash, name, created_at, updated_at
        "#,
    )
    .bind(email)
    .bind(password_hash)
    .bind(name)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await
}

/// Get user by email
pub async fn get_user_by_email(pool: &SqlitePool, email: &str) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, email, password_hash, name, created_at, updated_at
        FROM users
        WHERE email = ?
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await
}

/// Get user by ID
pub async fn get_user_by_id(pool: &SqlitePool, id: i64) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, email, password_hash, name, created_at, updated_at
        FROM users
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::server::config::memory_pool;

    #[tokio::test]
    async fn test_create_and_fetch_user() {
        let pool = memory_pool().await.unwrap();

        let user = create_user(&pool, "ada@example.com", "hash", Some("Ada"))
            .await
            .unwrap();
        assert_eq!(user.email, "ada@example.com");
        assert_eq!(user.name.as_deref(), Some("Ada"));

        let by_email = get_user_by_email(&pool, "ada@example.com").await.unwrap();
        assert_eq!(by_email.map(|u| u.id), Some(user.id));

        let by_id = get_user_by_id(&pool, user.id).await.unwrap();
        assert_eq!(by_id.map(|u| u.email), Some("ada@example.com".to_string()));
    }

    #[tokio::test]
    async fn test_duplicate_email_is_unique_violation() {
        let pool = memory_pool().await.unwrap();
        create_user(&pool, "dup@example.com", "hash", None).await.unwrap();

        let err = create_user(&pool, "dup@example.com", "hash", None)
            .await
            .unwrap_err();
        let is_unique = err
            .as_database_error()
            .map(|db| db.is_unique_violation())
            .unwrap_or(false);
        assert!(is_unique);
    }

    #[tokio::test]
    async fn test_missing_user() {
        let pool = memory_pool().await.unwrap();
        assert!(get_user_by_email(&pool, "ghost@example.com").await.unwrap().is_none());
        assert!(get_user_by_id(&pool, 999).await.unwrap().is_none());
    }

    #[test]
    fn test_response_hides_hash() {
        let now = Utc::now();
        let user = User {
            id: 1,
            email: "a@example.com".to_string(),
            password_hash: "secret-hash".to_string(),
            name: None,
            created_at: now,
            updated_at: now,
        };
        let json = serde_json::to_string(&user.to_response()).unwrap();
        assert!(!json.contains("secret-hash"));
    }
}
