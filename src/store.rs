use std::future::Future;
use std::time::Duration;

use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::types::{Chirp, User};

/// Users and chirps in SQLite. Every call is bounded by `timeout`.
#[derive(Clone, Debug)]
pub struct Store {
    pool: SqlitePool,
    timeout: Duration,
}

impl Store {
    pub fn new(pool: SqlitePool, timeout: Duration) -> Self {
        Self { pool, timeout }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    async fn bounded<T, F>(&self, action: &'static str, query: F) -> AppResult<T>
    where
        F: Future<Output = Result<T, sqlx::Error>>,
    {
        match tokio::time::timeout(self.timeout, query).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) => Err(AppError::storage(action, e)),
            Err(_) => {
                tracing::warn!("Storage call '{}' exceeded {:?}", action, self.timeout);
                Err(AppError::StorageTimeout)
            }
        }
    }

    pub async fn create_user(&self, email: &str, hashed_password: Option<&str>) -> AppResult<User> {
        let now = Utc::now();
        let query = sqlx::query_as::<_, User>(
            r#"INSERT INTO users (id, created_at, updated_at, email, hashed_password)
               VALUES (?1, ?2, ?2, ?3, ?4)
               RETURNING id, created_at, updated_at, email"#,
        )
        .bind(Uuid::new_v4())
        .bind(now)
        .bind(email)
        .bind(hashed_password)
        .fetch_one(&self.pool);
        self.bounded("creating user", query).await
    }

    pub async fn create_chirp(&self, body: &str, user_id: Uuid) -> AppResult<Chirp> {
        let now = Utc::now();
        let query = sqlx::query_as::<_, Chirp>(
            r#"INSERT INTO chirps (id, created_at, updated_at, body, user_id)
               VALUES (?1, ?2, ?2, ?3, ?4)
               RETURNING id, created_at, updated_at, body, user_id"#,
        )
        .bind(Uuid::new_v4())
        .bind(now)
        .bind(body)
        .bind(user_id)
        .fetch_one(&self.pool);
        self.bounded("creating chirp", query).await
    }

    /// All chirps, oldest first. Insertion order stands in for creation order.
    pub async fn list_chirps(&self) -> AppResult<Vec<Chirp>> {
        let query = sqlx::query_as::<_, Chirp>(
            "SELECT id, created_at, updated_at, body, user_id FROM chirps ORDER BY rowid ASC",
        )
        .fetch_all(&self.pool);
        self.bounded("retrieving chirps", query).await
    }

    pub async fn get_chirp(&self, id: Uuid) -> AppResult<Chirp> {
        let query = sqlx::query_as::<_, Chirp>(
            "SELECT id, created_at, updated_at, body, user_id FROM chirps WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&self.pool);
        self.bounded("retrieving chirp", query).await?.ok_or(AppError::ChirpNotFound)
    }

    /// Deletes every user; their chirps go with them through the foreign key.
    pub async fn reset_users(&self) -> AppResult<u64> {
        let query = sqlx::query("DELETE FROM users").execute(&self.pool);
        let result = self.bounded("resetting users", query).await?;
        Ok(result.rows_affected())
    }
}
