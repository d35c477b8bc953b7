//! Business rules: request validation and the services behind each route group.

pub mod auth;
pub mod card;
pub mod deck;
pub mod progress;
