//! Deck and card routes (/api/decks, /api/decks/{deck_id}/cards)

use axum::{routing::get, Router};

use crate::api::controller::deck::DeckController;
use crate::app_state::AppState;

pub fn deck_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/decks",
            get(DeckController::list_decks).post(DeckController::create_deck),
        )
        .route(
            "/decks/{deck_id}/cards",
            get(DeckController::list_cards).post(DeckController::create_card),
        )
}
