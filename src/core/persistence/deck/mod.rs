pub mod deck_entity;
pub mod deck_repository_trait;
pub mod deck_sqlite_repository;
