use std::env;
use std::net::SocketAddr;
use std::num::NonZeroU32;
use std::path::PathBuf;
use nonzero_ext::nonzero;
use thiserror::Error;

const DEFAULT_DATABASE_URL: &str = "database.db";
const DEFAULT_SERVER_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_FRONTEND_DIST: &str = "../frontend/dist";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} is not a valid socket address: {value}")]
    InvalidAddr { name: &'static str, value: String },
    #[error("{name} must be a positive integer, got {value}")]
    InvalidLimit { name: &'static str, value: String },
}

/// Runtime settings, read once at startup after `.env` has been loaded.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub server_addr: SocketAddr,
    pub frontend_dist: PathBuf,
    pub lead_rate_limit_per_minute: NonZeroU32,
    pub sentry_dsn: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // empty values count as unset, like a blank line in .env
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let database_url = var("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let raw_addr = var("SERVER_ADDR").unwrap_or_else(|| DEFAULT_SERVER_ADDR.to_string());
        let server_addr = raw_addr.parse().map_err(|_| ConfigError::InvalidAddr {
            name: "SERVER_ADDR",
            value: raw_addr.clone(),
        })?;

        let frontend_dist = PathBuf::from(
            var("FRONTEND_DIST").unwrap_or_else(|| DEFAULT_FRONTEND_DIST.to_string()),
        );

        let lead_rate_limit_per_minute = match var("LEAD_RATE_LIMIT_PER_MINUTE") {
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .ok()
                .and_then(NonZeroU32::new)
                .ok_or(ConfigError::InvalidLimit {
                    name: "LEAD_RATE_LIMIT_PER_MINUTE",
                    value: raw,
                })?,
            None => nonzero!(5u32),
        };

        Ok(Self {
            database_url,
            server_addr,
            frontend_dist,
            lead_rate_limit_per_minute,
            sentry_dsn: var("SENTRY_DSN"),
        })
    }
}
