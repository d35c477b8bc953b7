use std::sync::Arc;

use sqlx::SqlitePool;

use crate::core::persistence::card::card_sqlite_repository::CardSqliteRepository;
use crate::core::persistence::deck::deck_sqlite_repository::DeckSqliteRepository;
use crate::core::persistence::progress::deck_progress_sqlite_repository::DeckProgressSqliteRepository;
use crate::core::persistence::user::user_sqlite_repository::UserSqliteRepository;
use crate::domain::auth::service::auth_service::AuthService;
use crate::domain::card::service::card_service::CardService;
use crate::domain::deck::service::deck_service::DeckService;
use crate::domain::progress::service::progress_service::ProgressService;

#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService<UserSqliteRepository>>,
    pub deck_service: Arc<DeckService<DeckSqliteRepository>>,
    pub card_service: Arc<CardService<CardSqliteRepository>>,
    pub progress_service: Arc<ProgressService<DeckProgressSqliteRepository>>,
}

/// Wire every service to the shared pool. Cloning a pool only clones a handle.
pub fn build_app_state(pool: SqlitePool) -> AppState {
    AppState {
        auth_service: Arc::new(AuthService::new(UserSqliteRepository::new(pool.clone()))),
        deck_service: Arc::new(DeckService::new(DeckSqliteRepository::new(pool.clone()))),
        card_service: Arc::new(CardService::new(CardSqliteRepository::new(pool.clone()))),
        progress_service: Arc::new(ProgressService::new(DeckProgressSqliteRepository::new(
            pool,
        ))),
    }
}
