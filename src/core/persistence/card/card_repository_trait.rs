use anyhow::Result;
use async_trait::async_trait;

use super::card_entity::CardEntity;

#[async_trait]
pub trait CardRepository: Send + Sync {
    async fn list_by_deck(&self, deck_id: i64) -> Result<Vec<CardEntity>>;

    async fn insert(&self, deck_id: i64, question: &str, answer: &str) -> Result<CardEntity>;
}
