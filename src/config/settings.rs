//! Application settings loaded from environment variables.

use std::env;
use std::path::Path;

use super::constants::{
    DEFAULT_DATABASE_MAX_CONNECTIONS, DEFAULT_DATABASE_URL, DEFAULT_JWT_EXPIRES_IN_SECONDS,
    DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT, DEV_JWT_SECRET, MIN_JWT_SECRET_LENGTH,
};
use crate::errors::{AppError, AppResult};

/// Application configuration.
///
/// Built once at startup and handed to every component that needs it.
#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub database_max_connections: u32,
    jwt_secret: String,
    /// Token lifetime in seconds
    pub jwt_expires_in: i64,
    pub server_host: String,
    pub server_port: u16,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &"[REDACTED]")
            .field("database_max_connections", &self.database_max_connections)
            .field("jwt_secret", &"[REDACTED]")
            .field("jwt_expires_in", &self.jwt_expires_in)
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .finish()
    }
}

impl Config {
    /// Create a configuration with default settings and the given secrets.
    ///
    /// # Errors
    /// Returns an internal error if the JWT secret is shorter than
    /// [`MIN_JWT_SECRET_LENGTH`].
    pub fn new(database_url: impl Into<String>, jwt_secret: impl Into<String>) -> AppResult<Self> {
        let jwt_secret = jwt_secret.into();
        if jwt_secret.len() < MIN_JWT_SECRET_LENGTH {
            return Err(AppError::internal(format!(
                "JWT_SECRET must be at least {} characters long",
                MIN_JWT_SECRET_LENGTH
            )));
        }

        Ok(Self {
            database_url: database_url.into(),
            database_max_connections: DEFAULT_DATABASE_MAX_CONNECTIONS,
            jwt_secret,
            jwt_expires_in: DEFAULT_JWT_EXPIRES_IN_SECONDS,
            server_host: DEFAULT_SERVER_HOST.to_string(),
            server_port: DEFAULT_SERVER_PORT,
        })
    }

    /// Load configuration from environment variables.
    ///
    /// Variables from `env_file` (or `.env` in the working directory when
    /// `None`) are loaded first; real environment variables take precedence.
    ///
    /// # Errors
    /// Fails if JWT_SECRET is missing in a release build, is too short, or
    /// if an explicitly given env file cannot be read.
    pub fn from_env(env_file: Option<&Path>) -> AppResult<Self> {
        match env_file {
            Some(path) => {
                dotenvy::from_path(path).map_err(|e| {
                    AppError::internal(format!("Failed to load {}: {}", path.display(), e))
                })?;
            }
            None => {
                dotenvy::dotenv().ok();
            }
        }

        let jwt_secret = match env::var("JWT_SECRET") {
            Ok(secret) => secret,
            Err(_) if cfg!(debug_assertions) => {
                tracing::warn!("JWT_SECRET not set, using insecure default for development");
                DEV_JWT_SECRET.to_string()
            }
            Err(_) => {
                return Err(AppError::internal(
                    "JWT_SECRET environment variable must be set in production",
                ))
            }
        };

        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

        let mut config = Self::new(database_url, jwt_secret)?;
        config.database_max_connections = parse_var("DATABASE_MAX_CONNECTIONS")
            .unwrap_or(DEFAULT_DATABASE_MAX_CONNECTIONS);
        config.jwt_expires_in =
            parse_var("JWT_EXPIRES_IN").unwrap_or(DEFAULT_JWT_EXPIRES_IN_SECONDS);
        config.server_host =
            env::var("SERVER_HOST").unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string());
        config.server_port = parse_var("SERVER_PORT").unwrap_or(DEFAULT_SERVER_PORT);

        Ok(config)
    }

    /// Get JWT secret bytes for token signing/verification.
    pub fn jwt_secret_bytes(&self) -> &[u8] {
        self.jwt_secret.as_bytes()
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

fn parse_var<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret-key-for-testing-only-32chars";

    #[test]
    fn test_new_uses_defaults() {
        let config = Config::new("sqlite::memory:", SECRET).unwrap();

        assert_eq!(config.jwt_expires_in, DEFAULT_JWT_EXPIRES_IN_SECONDS);
        assert_eq!(config.server_addr(), "0.0.0.0:8080");
        assert_eq!(config.jwt_secret_bytes(), SECRET.as_bytes());
    }

    #[test]
    fn test_short_secret_rejected() {
        let result = Config::new("sqlite::memory:", "short");
        assert!(matches!(result, Err(AppError::Internal(_))));
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let config = Config::new("postgres://user:pw@localhost/db", SECRET).unwrap();
        let debug = format!("{:?}", config);

        assert!(!debug.contains(SECRET));
        assert!(!debug.contains("pw@localhost"));
        assert!(debug.contains("[REDACTED]"));
    }
}
