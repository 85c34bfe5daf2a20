//! Gateway configuration.

use std::env;

use thiserror::Error;

use common::{DatabaseConfig, JwtConfig, DEFAULT_JWT_EXPIRATION_SECONDS};

/// Minimum JWT secret length in bytes
pub const MIN_JWT_SECRET_LENGTH: usize = 32;

/// Secret used for local debug builds when JWT_SECRET is unset.
const DEV_JWT_SECRET: &str = "dev-only-secret-change-me-0123456789abcdef";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("JWT_SECRET must be set")]
    MissingJwtSecret,

    #[error("JWT_SECRET must be at least {min} bytes, got {0}", min = MIN_JWT_SECRET_LENGTH)]
    WeakJwtSecret(usize),

    #[error("JWT_EXPIRATION_SECONDS must be a positive integer")]
    InvalidExpiration,
}

/// Gateway configuration.
///
/// Bind address and log level are not part of it: the `serve` arguments
/// (`GATEWAY_HOST`, `GATEWAY_PORT`) and `RUST_LOG`/`LOG_LEVEL` own those.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
}

impl GatewayConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from any key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = DatabaseConfig::default();
        let database = DatabaseConfig {
            url: lookup("DATABASE_URL")
                .or_else(|| database_url_from_parts(&lookup))
                .unwrap_or(defaults.url),
            max_connections: lookup("DB_MAX_CONNECTIONS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_connections),
            min_connections: lookup("DB_MIN_CONNECTIONS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.min_connections),
        };

        let secret = match lookup("JWT_SECRET") {
            Some(secret) => secret,
            None if cfg!(debug_assertions) => {
                tracing::warn!("JWT_SECRET not set, using development secret");
                DEV_JWT_SECRET.to_string()
            }
            None => return Err(ConfigError::MissingJwtSecret),
        };
        if secret.len() < MIN_JWT_SECRET_LENGTH {
            return Err(ConfigError::WeakJwtSecret(secret.len()));
        }

        let expiration = lookup("JWT_EXPIRATION_SECONDS").or_else(|| lookup("JWT_EXP_SECONDS"));
        let expiration_seconds = match expiration {
            Some(raw) => raw
                .parse::<i64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or(ConfigError::InvalidExpiration)?,
            None => DEFAULT_JWT_EXPIRATION_SECONDS,
        };

        Ok(Self {
            database,
            jwt: JwtConfig {
                secret,
                expiration_seconds,
            },
        })
    }
}

/// Build a Postgres URL from DB_HOST, DB_PORT, DB_USER, DB_PASSWORD, DB_NAME.
fn database_url_from_parts<F>(lookup: &F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    let host = lookup("DB_HOST")?;
    let port = lookup("DB_PORT").unwrap_or_else(|| "5432".to_string());
    let user = lookup("DB_USER").unwrap_or_else(|| "postgres".to_string());
    let password = lookup("DB_PASSWORD").unwrap_or_default();
    let name = lookup("DB_NAME").unwrap_or_else(|| "identity_db".to_string());
    Some(format!(
        "postgres://{}:{}@{}:{}/{}",
        user, password, host, port, name
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    const SECRET: &str = "0123456789abcdef0123456789abcdef";

    fn load(vars: &[(&str, &str)]) -> Result<GatewayConfig, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        GatewayConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[("JWT_SECRET", SECRET)]).unwrap();

        assert_eq!(config.jwt.expiration_seconds, 86_400);
        assert_eq!(config.jwt.secret, SECRET);
        assert_eq!(config.database.max_connections, 10);
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("JWT_SECRET", SECRET),
            ("JWT_EXPIRATION_SECONDS", "120"),
            ("DATABASE_URL", "postgres://u:p@db:5432/x"),
        ])
        .unwrap();

        assert_eq!(config.jwt.expiration_seconds, 120);
        assert_eq!(config.database.url, "postgres://u:p@db:5432/x");
    }

    #[test]
    fn test_legacy_expiration_name() {
        let config = load(&[("JWT_SECRET", SECRET), ("JWT_EXP_SECONDS", "60")]).unwrap();
        assert_eq!(config.jwt.expiration_seconds, 60);
    }

    #[test]
    fn test_database_url_from_parts() {
        let config = load(&[
            ("JWT_SECRET", SECRET),
            ("DB_HOST", "pg"),
            ("DB_USER", "app"),
            ("DB_PASSWORD", "pw"),
            ("DB_NAME", "ids"),
        ])
        .unwrap();

        assert_eq!(config.database.url, "postgres://app:pw@pg:5432/ids");
    }

    #[test]
    fn test_weak_secret_rejected() {
        assert_eq!(
            load(&[("JWT_SECRET", "short")]).unwrap_err(),
            ConfigError::WeakJwtSecret(5)
        );
    }

    #[test]
    fn test_bad_expiration_rejected() {
        assert_eq!(
            load(&[("JWT_SECRET", SECRET), ("JWT_EXPIRATION_SECONDS", "-5")]).unwrap_err(),
            ConfigError::InvalidExpiration
        );
        assert_eq!(
            load(&[("JWT_SECRET", SECRET), ("JWT_EXPIRATION_SECONDS", "soon")]).unwrap_err(),
            ConfigError::InvalidExpiration
        );
    }

    #[test]
    fn test_debug_redacts() {
        let config = load(&[("JWT_SECRET", SECRET)]).unwrap();
        let debug = format!("{:?}", config);
        assert!(!debug.contains(SECRET));
    }
}
