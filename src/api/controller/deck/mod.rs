use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::api::util::extract::{JsonBody, PathParam};
use crate::api::util::json::{to_created_json, to_json};
use crate::app_state::AppState;
use crate::core::persistence::card::card_entity::CardEntity;
use crate::core::persistence::deck::deck_entity::DeckEntity;
use crate::domain::card::dto::create_card_request::CreateCardRequest;
use crate::domain::deck::dto::create_deck_request::CreateDeckRequest;
use crate::errors::AppError;

pub struct DeckController;

impl DeckController {
    pub async fn list_decks(
        State(state): State<AppState>,
    ) -> Result<Json<Vec<DeckEntity>>, AppError> {
        to_json(state.deck_service.list_decks().await)
    }

    pub async fn create_deck(
        State(state): State<AppState>,
        JsonBody(payload): JsonBody<CreateDeckRequest>,
    ) -> Result<(StatusCode, Json<DeckEntity>), AppError> {
        to_created_json(state.deck_service.create_deck(payload).await)
    }

    pub async fn list_cards(
        State(state): State<AppState>,
        PathParam(deck_id): PathParam<i64>,
    ) -> Result<Json<Vec<CardEntity>>, AppError> {
        to_json(state.card_service.list_cards(deck_id).await)
    }

    pub async fn create_card(
        State(state): State<AppState>,
        PathParam(deck_id): PathParam<i64>,
        JsonBody(payload): JsonBody<CreateCardRequest>,
    ) -> Result<(StatusCode, Json<CardEntity>), AppError> {
        to_created_json(state.card_service.create_card(deck_id, payload).await)
    }
}
