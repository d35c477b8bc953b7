pub mod card_entity;
pub mod card_repository_trait;
pub mod card_sqlite_repository;
