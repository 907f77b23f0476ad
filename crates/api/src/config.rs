use std::net::IpAddr;
use std::str::FromStr;

use axum::http::HeaderName;
use saved_items_core::identity::DEFAULT_IDENTITY_HEADER;

/// Error raised when the environment does not describe a usable configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} has invalid value '{value}': {reason}")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },
}

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(format!("expected 'text' or 'json', got '{other}'")),
        }
    }
}

/// Server configuration loaded from environment variables.
///
/// Everything except `DATABASE_URL` has a default suitable for local
/// development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: IpAddr,
    /// Bind port (default: `8080`).
    pub port: u16,
    /// PostgreSQL connection string.
    pub database_url: String,
    /// Connection pool size (default: `10`).
    pub db_max_connections: u32,
    /// Trusted header carrying the caller's numeric identity (default: `USER_ID`).
    pub identity_header: HeaderName,
    /// Log output format (default: text).
    pub log_format: LogFormat,
    /// Apply embedded migrations at startup (default: `true`).
    pub run_migrations: bool,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var              | Default   |
    /// |----------------------|-----------|
    /// | `HOST`               | `0.0.0.0` |
    /// | `PORT`               | `8080`    |
    /// | `DATABASE_URL`       | required  |
    /// | `DB_MAX_CONNECTIONS` | `10`      |
    /// | `IDENTITY_HEADER`    | `USER_ID` |
    /// | `LOG_FORMAT`         | `text`    |
    /// | `RUN_MIGRATIONS`     | `true`    |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = parse_or(&lookup, "HOST", "0.0.0.0")?;
        let port = parse_or(&lookup, "PORT", "8080")?;
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;
        let db_max_connections = parse_or(&lookup, "DB_MAX_CONNECTIONS", "10")?;
        let identity_header = parse_or(&lookup, "IDENTITY_HEADER", DEFAULT_IDENTITY_HEADER)?;
        let log_format = parse_or(&lookup, "LOG_FORMAT", "text")?;
        let run_migrations = parse_or(&lookup, "RUN_MIGRATIONS", "true")?;

        Ok(Self {
            host,
            port,
            database_url,
            db_max_connections,
            identity_header,
            log_format,
            run_migrations,
        })
    }
}

/// Read `name` through `lookup`, falling back to `default`, and parse it.
fn parse_or<F, T>(lookup: &F, name: &'static str, default: &str) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let value = lookup(name).unwrap_or_else(|| default.to_string());
    value
        .trim()
        .parse()
        .map_err(|e: T::Err| ConfigError::Invalid {
            name,
            reason: e.to_string(),
            value,
        })
}
