//! Runtime configuration read from the process environment (and `.env`).

use std::env;
use std::str::FromStr;

use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub database: DatabaseConfig,
    pub log: LogConfig,
    /// Raw `HOTEL_API_TOKENS` entries: `token` or `token:customer_id`.
    pub api_tokens: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Clone)]
pub struct LogConfig {
    pub dir: String,
    pub level: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://hotel.db?mode=rwc".into(),
            max_connections: 5,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            dir: "logs".into(),
            level: "info".into(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup so tests don't have to
    /// touch the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let db_defaults = DatabaseConfig::default();
        let log_defaults = LogConfig::default();

        let api_tokens = lookup("HOTEL_API_TOKENS")
            .map(|raw| {
                raw.split(',')
                    .map(|t| t.trim().to_string())
                    .filter(|t| !t.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            bind_addr: lookup("HOTEL_BIND_ADDR").unwrap_or_else(|| "0.0.0.0:8000".into()),
            database: DatabaseConfig {
                url: lookup("HOTEL_DATABASE_URL").unwrap_or(db_defaults.url),
                max_connections: parse_or(
                    &lookup,
                    "HOTEL_DB_MAX_CONNECTIONS",
                    db_defaults.max_connections,
                )?,
            },
            log: LogConfig {
                dir: lookup("HOTEL_LOG_DIR").unwrap_or(log_defaults.dir),
                level: lookup("HOTEL_LOG_LEVEL").unwrap_or(log_defaults.level),
            },
            api_tokens,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("invalid value for {key}: {raw:?}")),
        None => Ok(default),
    }
}
