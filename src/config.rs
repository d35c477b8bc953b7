//! Runtime configuration loaded from the environment (and an optional `.env`).

use std::{env, fmt::Display, path::PathBuf, str::FromStr};

use anyhow::{anyhow, bail, Result};

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_DB_PATH: &str = "flashcards.db";
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: DatabaseConfig,
    /// Directory for daily rolling log files. Stdout only when unset.
    pub log_dir: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub path: PathBuf,
    pub max_connections: u32,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let max_connections =
            try_load("FLASHCARDS_DB_MAX_CONNECTIONS", DEFAULT_DB_MAX_CONNECTIONS)?;
        if max_connections == 0 {
            bail!("FLASHCARDS_DB_MAX_CONNECTIONS must be at least 1");
        }

        Ok(Self {
            host: var("FLASHCARDS_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: try_load("FLASHCARDS_PORT", DEFAULT_PORT)?,
            database: DatabaseConfig {
                path: var("FLASHCARDS_DB_PATH")
                    .map(PathBuf::from)
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_PATH)),
                max_connections,
            },
            log_dir: var("FLASHCARDS_LOG_DIR").map(PathBuf::from),
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Blank values count as unset.
fn var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn try_load<T: FromStr>(key: &str, default: T) -> Result<T>
where
    T::Err: Display,
{
    match var(key) {
        Some(raw) => raw
            .parse()
            .map_err(|e| anyhow!("Invalid {key} value {raw:?}: {e}")),
        None => Ok(default),
    }
}
