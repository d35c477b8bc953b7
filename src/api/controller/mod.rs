//! Thin axum handlers that hand requests to domain services.

pub mod auth;
pub mod deck;
pub mod progress;
