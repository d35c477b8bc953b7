use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::api::util::extract::JsonBody;
use crate::api::util::json::{to_created_json, to_json};
use crate::app_state::AppState;
use crate::domain::auth::dto::auth_response::AuthResponse;
use crate::domain::auth::dto::login_request::LoginRequest;
use crate::errors::AppError;

pub struct AuthController;

impl AuthController {
    pub async fn signup(
        State(state): State<AppState>,
    ) -> Result<(StatusCode, Json<AuthResponse>), AppError> {
        to_created_json(state.auth_service.signup().await)
    }

    pub async fn login(
        State(state): State<AppState>,
        JsonBody(payload): JsonBody<LoginRequest>,
    ) -> Result<Json<AuthResponse>, AppError> {
        to_json(state.auth_service.login(payload).await)
    }
}
