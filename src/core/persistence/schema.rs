//! Idempotent schema bootstrap.

use anyhow::{Context, Result};
use sqlx::SqlitePool;
use tracing::debug;

const CREATE_USERS: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    user_code TEXT UNIQUE NOT NULL,
    created_at TEXT NOT NULL
)"#;

const CREATE_DECKS: &str = r#"
CREATE TABLE IF NOT EXISTS decks (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    subject TEXT NOT NULL,
    exam_board TEXT NOT NULL,
    year_group TEXT NOT NULL
)"#;

const CREATE_CARDS: &str = r#"
CREATE TABLE IF NOT EXISTS cards (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    deck_id INTEGER NOT NULL,
    question TEXT NOT NULL,
    answer TEXT NOT NULL,
    FOREIGN KEY (deck_id) REFERENCES decks(id)
)"#;

const CREATE_DECK_PROGRESS: &str = r#"
CREATE TABLE IF NOT EXISTS deck_progress (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id INTEGER NOT NULL,
    deck_id INTEGER NOT NULL,
    answered INTEGER NOT NULL DEFAULT 0,
    correct INTEGER NOT NULL DEFAULT 0,
    incorrect INTEGER NOT NULL DEFAULT 0,
    UNIQUE(user_id, deck_id),
    FOREIGN KEY (user_id) REFERENCES users(id),
    FOREIGN KEY (deck_id) REFERENCES decks(id)
)"#;

const TABLES: [(&str, &str); 4] = [
    ("users", CREATE_USERS),
    ("decks", CREATE_DECKS),
    ("cards", CREATE_CARDS),
    ("deck_progress", CREATE_DECK_PROGRESS),
];

/// Create any missing table. Safe to run on every startup.
pub async fn init_schema(pool: &SqlitePool) -> Result<()> {
    let mut tx = pool.begin().await?;

    for (table, ddl) in TABLES {
        sqlx::query(ddl)
            .execute(&mut *tx)
            .await
            .with_context(|| format!("Failed to create table {table}"))?;
        debug!(table, "table ensured");
    }

    tx.commit().await?;
    Ok(())
}
