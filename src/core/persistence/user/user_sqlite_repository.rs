use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::SqlitePool;

use super::user_entity::UserEntity;
use super::user_repository_trait::UserRepository;

pub struct UserSqliteRepository {
    pool: SqlitePool,
}

impl UserSqliteRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for UserSqliteRepository {
    async fn insert_if_code_free(
        &self,
        user_code: &str,
        created_at: &str,
    ) -> Result<Option<UserEntity>> {
        let result = sqlx::query(
            "INSERT INTO users (user_code, created_at) VALUES (?, ?) \
             ON CONFLICT(user_code) DO NOTHING",
        )
        .bind(user_code)
        .bind(created_at)
        .execute(&self.pool)
        .await
        .context("Failed to insert user")?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        Ok(Some(UserEntity {
            id: result.last_insert_rowid(),
            user_code: user_code.to_string(),
            created_at: created_at.to_string(),
        }))
    }

    async fn find_by_code(&self, user_code: &str) -> Result<Option<UserEntity>> {
        sqlx::query_as::<_, UserEntity>(
            "SELECT id, user_code, created_at FROM users WHERE user_code = ?",
        )
        .bind(user_code)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to look up user by code")
    }
}
