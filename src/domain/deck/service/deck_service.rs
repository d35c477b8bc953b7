use tracing::{debug, info};
use validator::Validate;

use crate::core::persistence::deck::deck_entity::DeckEntity;
use crate::core::persistence::deck::deck_repository_trait::DeckRepository;
use crate::domain::deck::dto::create_deck_request::CreateDeckRequest;
use crate::errors::AppError;

const MISSING_FIELDS: &str = "name, subject, exam_board, and year_group are required";

pub struct DeckService<R: DeckRepository> {
    repo: R,
}

impl<R: DeckRepository> DeckService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub async fn list_decks(&self) -> Result<Vec<DeckEntity>, AppError> {
        let decks = self.repo.list().await?;
        debug!(count = decks.len(), "listed decks");
        Ok(decks)
    }

    pub async fn create_deck(&self, req: CreateDeckRequest) -> Result<DeckEntity, AppError> {
        req.validate()
            .map_err(|_| AppError::InvalidInput(MISSING_FIELDS.into()))?;
        let new_deck = req
            .into_new_deck()
            .ok_or_else(|| AppError::InvalidInput(MISSING_FIELDS.into()))?;

        let deck = self.repo.insert(new_deck).await?;
        info!(deck_id = deck.id, name = %deck.name, "deck created");
        Ok(deck)
    }
}
