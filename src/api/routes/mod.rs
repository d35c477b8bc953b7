//! API route declarations (e.g., /api/*)

pub mod auth_routes;
pub mod deck_routes;
pub mod progress_routes;
