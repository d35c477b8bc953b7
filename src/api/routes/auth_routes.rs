//! Auth routes (/api/auth/*)

use axum::{routing::post, Router};

use crate::api::controller::auth::AuthController;
use crate::app_state::AppState;

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/signup", post(AuthController::signup))
        .route("/login", post(AuthController::login))
}
