use axum::extract::State;
use axum::Json;
use serde_json::Value;

use crate::api::dto::progress_dto::ProgressQuery;
use crate::api::util::extract::{JsonBody, QueryParams};
use crate::api::util::json::to_json;
use crate::app_state::AppState;
use crate::core::persistence::progress::deck_progress_entity::DeckProgressEntity;
use crate::domain::progress::dto::record_answer_request::RecordAnswerRequest;
use crate::errors::AppError;

pub struct ProgressController;

impl ProgressController {
    pub async fn record_answer(
        State(state): State<AppState>,
        JsonBody(payload): JsonBody<RecordAnswerRequest>,
    ) -> Result<Json<Value>, AppError> {
        to_json(state.progress_service.record_answer(payload).await)
    }

    pub async fn get_progress(
        State(state): State<AppState>,
        QueryParams(query): QueryParams<ProgressQuery>,
    ) -> Result<Json<DeckProgressEntity>, AppError> {
        to_json(state.progress_service.get_progress(query).await)
    }
}
