//! Application configuration loaded from environment variables.

use std::env;
use std::str::FromStr;

use formula_infra::DatabaseConfig;

const DEFAULT_CORS_ORIGIN: &str = "http://localhost:5173";

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: DatabaseConfig,
    /// Origins allowed to make cross-origin requests.
    pub cors_origins: Vec<String>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`, falling back to defaults for
    /// missing keys. Numeric values that fail to parse also fall back, with
    /// a warning.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        // DATABASE_URL wins over the individual DB_* parts.
        let url = lookup("DATABASE_URL").unwrap_or_else(|| {
            connection_url(
                &get("DB_USER", "user"),
                &get("DB_PASSWORD", "password"),
                &get("DB_HOST", "localhost"),
                parse_or(&lookup, "DB_PORT", 5432u16),
                &get("DB_NAME", "formula_place"),
            )
        });

        let database = DatabaseConfig {
            url,
            max_connections: parse_or(&lookup, "DB_MAX_CONNECTIONS", 100),
            min_connections: parse_or(&lookup, "DB_MIN_CONNECTIONS", 10),
        };

        let cors_origins = lookup("CORS_ORIGINS")
            .map(|raw| parse_origins(&raw))
            .unwrap_or_else(|| vec![DEFAULT_CORS_ORIGIN.to_string()]);

        Self {
            host: get("HOST", "127.0.0.1"),
            port: parse_or(&lookup, "PORT", 8080),
            database,
            cors_origins,
        }
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + std::fmt::Display,
{
    match lookup(key) {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(
                "Environment variable {} is not a valid value ({:?}), using fallback: {}",
                key,
                raw,
                default
            );
            default
        }),
    }
}

/// Build a `postgres://` URL from its parts. IPv6 hosts are bracketed.
pub fn connection_url(user: &str, password: &str, host: &str, port: u16, name: &str) -> String {
    let host = if host.contains(':') && !host.starts_with('[') {
        format!("[{host}]")
    } else {
        host.to_string()
    };
    format!("postgres://{user}:{password}@{host}:{port}/{name}")
}

/// Parse an origin list given either as a JSON array
/// (`["http://a","http://b"]`) or comma-separated (`http://a,http://b`).
pub fn parse_origins(raw: &str) -> Vec<String> {
    let raw = raw.trim();
    if raw.starts_with('[') {
        if let Ok(list) = serde_json::from_str::<Vec<String>>(raw) {
            return list;
        }
        tracing::warn!("CORS_ORIGINS looks like JSON but does not parse, splitting on commas");
    }

    raw.trim_matches(|c| c == '[' || c == ']')
        .split(',')
        .map(|s| s.trim().trim_matches('"').trim())
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
