//! SQLite-backed persistence: pool, schema and one repository per table.

pub mod card;
pub mod db;
pub mod deck;
pub mod progress;
pub mod schema;
pub mod user;
