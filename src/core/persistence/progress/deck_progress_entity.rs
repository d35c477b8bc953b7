use serde::Serialize;
use sqlx::FromRow;

/// Running tally for one (user, deck) pair.
///
/// `answered == correct + incorrect` holds for every stored row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, FromRow)]
pub struct DeckProgressEntity {
    pub answered: i64,
    pub correct: i64,
    pub incorrect: i64,
}

#[cfg(test)]
impl DeckProgressEntity {
    /// Tally after one more answer.
    pub(crate) fn record(self, is_correct: bool) -> Self {
        Self {
            answered: self.answered + 1,
            correct: self.correct + i64::from(is_correct),
            incorrect: self.incorrect + i64::from(!is_correct),
        }
    }
}
