//! Flashcard backend: code-based signup/login, deck and card catalog, and
//! per-user per-deck answer tallies over an embedded SQLite store.

pub mod api;
pub mod app_state;
pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod logging;
pub mod routes;
