use serde::Serialize;
use sqlx::FromRow;

/// Row of the `decks` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct DeckEntity {
    pub id: i64,
    pub name: String,
    pub subject: String,
    pub exam_board: String,
    pub year_group: String,
}

/// Deck fields before an id is assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDeck {
    pub name: String,
    pub subject: String,
    pub exam_board: String,
    pub year_group: String,
}

impl NewDeck {
    pub fn with_id(self, id: i64) -> DeckEntity {
        DeckEntity {
            id,
            name: self.name,
            subject: self.subject,
            exam_board: self.exam_board,
            year_group: self.year_group,
        }
    }
}
