use serde::Deserialize;
use validator::Validate;

use crate::core::persistence::deck::deck_entity::NewDeck;

/// Payload for `POST /api/decks`. Every field must be present and non-empty.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateDeckRequest {
    #[validate(required, length(min = 1))]
    pub name: Option<String>,
    #[validate(required, length(min = 1))]
    pub subject: Option<String>,
    #[validate(required, length(min = 1))]
    pub exam_board: Option<String>,
    #[validate(required, length(min = 1))]
    pub year_group: Option<String>,
}

impl CreateDeckRequest {
    /// `None` unless every field is set; call after `validate`.
    pub fn into_new_deck(self) -> Option<NewDeck> {
        Some(NewDeck {
            name: self.name?,
            subject: self.subject?,
            exam_board: self.exam_board?,
            year_group: self.year_group?,
        })
    }
}
