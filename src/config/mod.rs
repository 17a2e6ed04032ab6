//! Database configuration loaded from the environment.
//!
//! Values are read through `dotenv`, so a `.env` file in the working
//! directory is honoured alongside real environment variables.

use std::num::NonZeroU32;
use thiserror::Error;

/// Environment variable holding the `PostgreSQL` connection URL.
pub const DATABASE_URL_VAR: &str = "DATABASE_URL";

/// Environment variable holding the maximum pool size.
pub const POOL_SIZE_VAR: &str = "DATABASE_POOL_SIZE";

/// Pool size used when [`POOL_SIZE_VAR`] is unset.
pub const DEFAULT_POOL_SIZE: NonZeroU32 = match NonZeroU32::new(5) {
    Some(size) => size,
    None => NonZeroU32::MIN,
};

/// Errors returned while loading database configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A required variable is missing or empty.
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    /// A variable holds a value that cannot be parsed.
    #[error("invalid value '{value}' for {variable}: {reason}")]
    Invalid {
        /// Offending variable name.
        variable: &'static str,
        /// Raw value read from the environment.
        value: String,
        /// Why the value was rejected.
        reason: &'static str,
    },
}

/// Connection settings for the `PostgreSQL` person store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    url: String,
    max_connections: NonZeroU32,
}

impl DatabaseConfig {
    /// Loads configuration from the process environment and any `.env` file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] when `DATABASE_URL` is unset or empty,
    /// or [`ConfigError::Invalid`] when `DATABASE_POOL_SIZE` is not a positive
    /// integer.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| dotenv::var(name).ok())
    }

    /// Loads configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// See [`DatabaseConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = lookup(DATABASE_URL_VAR)
            .filter(|value| !value.trim().is_empty())
            .ok_or(ConfigError::Missing(DATABASE_URL_VAR))?;

        let max_connections = lookup(POOL_SIZE_VAR)
            .map(parse_pool_size)
            .transpose()?
            .unwrap_or(DEFAULT_POOL_SIZE);

        Ok(Self {
            url,
            max_connections,
        })
    }

    /// Creates a configuration from explicit values.
    #[must_use]
    pub fn new(url: impl Into<String>, max_connections: NonZeroU32) -> Self {
        Self {
            url: url.into(),
            max_connections,
        }
    }

    /// Returns the connection URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the maximum number of pooled connections.
    #[must_use]
    pub const fn max_connections(&self) -> u32 {
        self.max_connections.get()
    }
}

fn parse_pool_size(raw: String) -> Result<NonZeroU32, ConfigError> {
    raw.trim()
        .parse::<NonZeroU32>()
        .map_err(|_| ConfigError::Invalid {
            variable: POOL_SIZE_VAR,
            value: raw,
            reason: "expected a positive integer",
        })
}
