pub mod user_entity;
pub mod user_repository_trait;
pub mod user_sqlite_repository;
