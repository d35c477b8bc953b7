use serde::Deserialize;
use serde_json::Value;
use validator::Validate;

/// Payload for `POST /api/progress/deck`.
///
/// `is_correct` is kept as raw JSON so that a present but non-boolean value
/// (`"true"`, `1`) can be told apart from a missing one.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct RecordAnswerRequest {
    #[validate(required)]
    pub user_id: Option<i64>,
    #[validate(required)]
    pub deck_id: Option<i64>,
    #[validate(required)]
    pub is_correct: Option<Value>,
}
