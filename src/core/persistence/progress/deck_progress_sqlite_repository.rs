use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::SqlitePool;

use super::deck_progress_entity::DeckProgressEntity;
use super::deck_progress_repository_trait::DeckProgressRepository;

/// Single-statement upsert keyed on UNIQUE(user_id, deck_id). In the DO UPDATE
/// clause bare column names are the stored row and `excluded` is the new one.
const RECORD_ANSWER: &str = r#"
INSERT INTO deck_progress (user_id, deck_id, answered, correct, incorrect)
VALUES (?, ?, 1, ?, ?)
ON CONFLICT(user_id, deck_id) DO UPDATE SET
    answered = answered + 1,
    correct = correct + excluded.correct,
    incorrect = incorrect + excluded.incorrect
"#;

pub struct DeckProgressSqliteRepository {
    pool: SqlitePool,
}

impl DeckProgressSqliteRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DeckProgressRepository for DeckProgressSqliteRepository {
    async fn record_answer(&self, user_id: i64, deck_id: i64, is_correct: bool) -> Result<()> {
        sqlx::query(RECORD_ANSWER)
            .bind(user_id)
            .bind(deck_id)
            .bind(i64::from(is_correct))
            .bind(i64::from(!is_correct))
            .execute(&self.pool)
            .await
            .with_context(|| {
                format!("Failed to record answer for user {user_id} deck {deck_id}")
            })?;

        Ok(())
    }

    async fn find(&self, user_id: i64, deck_id: i64) -> Result<Option<DeckProgressEntity>> {
        sqlx::query_as::<_, DeckProgressEntity>(
            "SELECT answered, correct, incorrect FROM deck_progress \
             WHERE user_id = ? AND deck_id = ?",
        )
        .bind(user_id)
        .bind(deck_id)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to read deck progress")
    }
}
