use tracing::{debug, info};
use validator::Validate;

use crate::core::persistence::card::card_entity::CardEntity;
use crate::core::persistence::card::card_repository_trait::CardRepository;
use crate::domain::card::dto::create_card_request::CreateCardRequest;
use crate::errors::AppError;

const MISSING_FIELDS: &str = "question and answer are required";

pub struct CardService<R: CardRepository> {
    repo: R,
}

impl<R: CardRepository> CardService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Empty when the deck has no cards or does not exist.
    pub async fn list_cards(&self, deck_id: i64) -> Result<Vec<CardEntity>, AppError> {
        let cards = self.repo.list_by_deck(deck_id).await?;
        debug!(deck_id, count = cards.len(), "listed cards");
        Ok(cards)
    }

    pub async fn create_card(
        &self,
        deck_id: i64,
        req: CreateCardRequest,
    ) -> Result<CardEntity, AppError> {
        req.validate()
            .map_err(|_| AppError::InvalidInput(MISSING_FIELDS.into()))?;
        let (Some(question), Some(answer)) = (req.question, req.answer) else {
            return Err(AppError::InvalidInput(MISSING_FIELDS.into()));
        };

        let card = self.repo.insert(deck_id, &question, &answer).await?;
        info!(card_id = card.id, deck_id, "card created");
        Ok(card)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MockCardRepository {
        cards: Mutex<Vec<CardEntity>>,
    }

    #[async_trait]
    impl CardRepository for MockCardRepository {
        async fn list_by_deck(&self, deck_id: i64) -> Result<Vec<CardEntity>> {
            Ok(self
                .cards
                .lock()
                .unwrap()
                .iter()
                .filter(|c| c.deck_id == deck_id)
                .cloned()
                .collect())
        }

        async fn insert(&self, deck_id: i64, question: &str, answer: &str) -> Result<CardEntity> {
            let mut cards = self.cards.lock().unwrap();
            let card = CardEntity {
                id: cards.len() as i64 + 1,
                deck_id,
                question: question.to_string(),
                answer: answer.to_string(),
            };
            cards.push(card.clone());
            Ok(card)
        }
    }

    fn request(question: Option<&str>, answer: Option<&str>) -> CreateCardRequest {
        CreateCardRequest {
            question: question.map(str::to_string),
            answer: answer.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn card_for_unknown_deck_is_still_created() {
        let service = CardService::new(MockCardRepository::default());

        let card = service
            .create_card(99, request(Some("H2O is?"), Some("Water")))
            .await
            .unwrap();

        assert_eq!(card.deck_id, 99);
        assert_eq!(service.list_cards(99).await.unwrap(), vec![card]);
        assert!(service.list_cards(1).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn missing_or_empty_fields_are_rejected() {
        let service = CardService::new(MockCardRepository::default());

        for req in [
            request(None, Some("a")),
            request(Some("q"), None),
            request(Some(""), Some("a")),
            request(Some("q"), Some("")),
        ] {
            let result = service.create_card(1, req).await;
            assert!(matches!(result, Err(AppError::InvalidInput(_))));
        }
    }
}
