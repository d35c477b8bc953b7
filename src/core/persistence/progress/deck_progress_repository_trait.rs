use anyhow::Result;
use async_trait::async_trait;

use super::deck_progress_entity::DeckProgressEntity;

#[async_trait]
pub trait DeckProgressRepository: Send + Sync {
    /// Count one answer for the pair, creating its row on first use.
    ///
    /// Must be atomic: concurrent calls for a new pair leave exactly one row.
    async fn record_answer(&self, user_id: i64, deck_id: i64, is_correct: bool) -> Result<()>;

    async fn find(&self, user_id: i64, deck_id: i64) -> Result<Option<DeckProgressEntity>>;
}
