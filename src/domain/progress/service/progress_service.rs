use serde_json::{json, Value};
use tracing::{debug, info};
use validator::Validate;

use crate::api::dto::progress_dto::ProgressQuery;
use crate::core::persistence::progress::deck_progress_entity::DeckProgressEntity;
use crate::core::persistence::progress::deck_progress_repository_trait::DeckProgressRepository;
use crate::domain::progress::dto::record_answer_request::RecordAnswerRequest;
use crate::errors::AppError;

const MISSING_ANSWER_FIELDS: &str = "user_id, deck_id, and is_correct are required";
const NOT_A_BOOLEAN: &str = "is_correct must be true/false";
const MISSING_QUERY_FIELDS: &str = "user_id and deck_id are required";

pub struct ProgressService<R: DeckProgressRepository> {
    repo: R,
}

impl<R: DeckProgressRepository> ProgressService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub async fn record_answer(&self, req: RecordAnswerRequest) -> Result<Value, AppError> {
        req.validate()
            .map_err(|_| AppError::InvalidInput(MISSING_ANSWER_FIELDS.into()))?;
        let (Some(user_id), Some(deck_id), Some(is_correct)) =
            (req.user_id, req.deck_id, req.is_correct)
        else {
            return Err(AppError::InvalidInput(MISSING_ANSWER_FIELDS.into()));
        };

        // only a JSON boolean counts; "true" and 1 are rejected
        let Value::Bool(is_correct) = is_correct else {
            return Err(AppError::InvalidInput(NOT_A_BOOLEAN.into()));
        };

        self.repo.record_answer(user_id, deck_id, is_correct).await?;
        info!(user_id, deck_id, is_correct, "answer recorded");

        Ok(json!({ "message": "Progress updated" }))
    }

    /// Zero tally when the pair has no row yet.
    pub async fn get_progress(&self, q: ProgressQuery) -> Result<DeckProgressEntity, AppError> {
        let (Some(user_id), Some(deck_id)) = (q.user_id, q.deck_id) else {
            return Err(AppError::InvalidInput(MISSING_QUERY_FIELDS.into()));
        };

        let progress = self.repo.find(user_id, deck_id).await?.unwrap_or_default();
        debug!(user_id, deck_id, answered = progress.answered, "read progress");
        Ok(progress)
    }
}
