use serde::Deserialize;
use validator::Validate;

/// Payload for `POST /api/decks/{deck_id}/cards`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateCardRequest {
    #[validate(required, length(min = 1))]
    pub question: Option<String>,
    #[validate(required, length(min = 1))]
    pub answer: Option<String>,
}
