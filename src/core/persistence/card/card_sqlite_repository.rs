use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::SqlitePool;

use super::card_entity::CardEntity;
use super::card_repository_trait::CardRepository;

pub struct CardSqliteRepository {
    pool: SqlitePool,
}

impl CardSqliteRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CardRepository for CardSqliteRepository {
    async fn list_by_deck(&self, deck_id: i64) -> Result<Vec<CardEntity>> {
        sqlx::query_as::<_, CardEntity>(
            "SELECT id, deck_id, question, answer FROM cards WHERE deck_id = ? ORDER BY id",
        )
        .bind(deck_id)
        .fetch_all(&self.pool)
        .await
        .with_context(|| format!("Failed to list cards for deck {deck_id}"))
    }

    async fn insert(&self, deck_id: i64, question: &str, answer: &str) -> Result<CardEntity> {
        let result = sqlx::query("INSERT INTO cards (deck_id, question, answer) VALUES (?, ?, ?)")
            .bind(deck_id)
            .bind(question)
            .bind(answer)
            .execute(&self.pool)
            .await
            .context("Failed to insert card")?;

        Ok(CardEntity {
            id: result.last_insert_rowid(),
            deck_id,
            question: question.to_string(),
            answer: answer.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::persistence::{db::connect_in_memory, schema::init_schema};

    #[tokio::test]
    async fn cards_are_scoped_to_their_deck() {
        let pool = connect_in_memory().await.unwrap();
        init_schema(&pool).await.unwrap();
        let repo = CardSqliteRepository::new(pool);

        // no deck rows exist; foreign keys are not enforced
        let a = repo.insert(1, "2 + 2?", "4").await.unwrap();
        repo.insert(2, "Capital of France?", "Paris").await.unwrap();
        let b = repo.insert(1, "3 * 3?", "9").await.unwrap();

        assert_eq!(repo.list_by_deck(1).await.unwrap(), vec![a, b]);
        assert!(repo.list_by_deck(42).await.unwrap().is_empty());
    }
}
