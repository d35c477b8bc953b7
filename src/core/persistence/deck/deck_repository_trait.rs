use anyhow::Result;
use async_trait::async_trait;

use super::deck_entity::{DeckEntity, NewDeck};

#[async_trait]
pub trait DeckRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<DeckEntity>>;

    async fn insert(&self, deck: NewDeck) -> Result<DeckEntity>;
}
