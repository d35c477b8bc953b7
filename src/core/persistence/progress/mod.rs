pub mod deck_progress_entity;
pub mod deck_progress_repository_trait;
pub mod deck_progress_sqlite_repository;
