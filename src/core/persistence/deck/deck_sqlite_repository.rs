use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::SqlitePool;

use super::deck_entity::{DeckEntity, NewDeck};
use super::deck_repository_trait::DeckRepository;

pub struct DeckSqliteRepository {
    pool: SqlitePool,
}

impl DeckSqliteRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DeckRepository for DeckSqliteRepository {
    async fn list(&self) -> Result<Vec<DeckEntity>> {
        sqlx::query_as::<_, DeckEntity>(
            "SELECT id, name, subject, exam_board, year_group FROM decks ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .context("Failed to list decks")
    }

    async fn insert(&self, deck: NewDeck) -> Result<DeckEntity> {
        let result = sqlx::query(
            "INSERT INTO decks (name, subject, exam_board, year_group) VALUES (?, ?, ?, ?)",
        )
        .bind(&deck.name)
        .bind(&deck.subject)
        .bind(&deck.exam_board)
        .bind(&deck.year_group)
        .execute(&self.pool)
        .await
        .context("Failed to insert deck")?;

        Ok(deck.with_id(result.last_insert_rowid()))
    }
}
