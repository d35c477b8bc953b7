//! Progress routes (/api/progress/*)

use axum::{routing::get, Router};

use crate::api::controller::progress::ProgressController;
use crate::app_state::AppState;

pub fn progress_routes() -> Router<AppState> {
    Router::new().route(
        "/deck",
        get(ProgressController::get_progress).post(ProgressController::record_answer),
    )
}
