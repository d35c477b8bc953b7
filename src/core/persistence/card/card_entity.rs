use serde::Serialize;
use sqlx::FromRow;

/// Row of the `cards` table. `deck_id` is not checked against `decks`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct CardEntity {
    pub id: i64,
    pub deck_id: i64,
    pub question: String,
    pub answer: String,
}
