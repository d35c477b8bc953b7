use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::app_state::AppState;
use crate::errors::AppError;

/// Build the main application router
pub fn app_router() -> Router<AppState> {
    let api = Router::new()
        .nest("/auth", crate::api::routes::auth_routes::auth_routes())
        .merge(crate::api::routes::deck_routes::deck_routes())
        .nest("/progress", crate::api::routes::progress_routes::progress_routes());

    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .nest("/api", api)
        .fallback(handler_404)
        .layer(TraceLayer::new_for_http())
        // any origin, method and header
        .layer(CorsLayer::very_permissive())
}

async fn root() -> &'static str {
    "Backend is running"
}

async fn health_check() -> &'static str {
    "OK"
}

async fn handler_404() -> AppError {
    AppError::NotFound("The requested resource was not found".into())
}
