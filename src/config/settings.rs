//! Application settings loaded from environment variables.

use std::env;
use std::path::PathBuf;

use super::constants::{
    DEFAULT_CONNECT_TIMEOUT_MS, DEFAULT_DATABASE_NAME, DEFAULT_DATA_DIR,
    DEFAULT_JWT_EXPIRATION_HOURS, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT, MIN_JWT_SECRET_LENGTH,
};

/// Deployment mode, gating the fallback store.
///
/// The fallback store is a development convenience; in production it must
/// never serve reads or accept writes, so a primary-store outage surfaces
/// instead of being papered over with local files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeploymentMode {
    Development,
    Production,
}

impl DeploymentMode {
    /// Read the deployment mode from `APP_ENV` (anything but "production"
    /// counts as development).
    pub fn from_env() -> Self {
        match env::var("APP_ENV").as_deref() {
            Ok("production") => DeploymentMode::Production,
            _ => DeploymentMode::Development,
        }
    }

    pub fn is_production(self) -> bool {
        matches!(self, DeploymentMode::Production)
    }
}

impl std::fmt::Display for DeploymentMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeploymentMode::Development => write!(f, "development"),
            DeploymentMode::Production => write!(f, "production"),
        }
    }
}

/// Application configuration
#[derive(Clone)]
pub struct Config {
    /// Primary store connection string. Absent means the primary store is
    /// treated as permanently unreachable and every operation falls back.
    pub mongodb_uri: Option<String>,
    pub database_name: String,
    /// Directory holding the fallback store's backing files.
    pub data_dir: PathBuf,
    pub mode: DeploymentMode,
    jwt_secret: String,
    pub jwt_expiration_hours: i64,
    pub server_host: String,
    pub server_port: u16,
    /// Bound on the per-operation primary-store connection attempt.
    pub connect_timeout_ms: u64,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("mongodb_uri", &"[REDACTED]")
            .field("database_name", &self.database_name)
            .field("data_dir", &self.data_dir)
            .field("mode", &self.mode)
            .field("jwt_secret", &"[REDACTED]")
            .field("jwt_expiration_hours", &self.jwt_expiration_hours)
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .field("connect_timeout_ms", &self.connect_timeout_ms)
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Panics
    /// Panics if JWT_SECRET is not set or is too short (security requirement).
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let jwt_secret = env::var("JWT_SECRET").unwrap_or_else(|_| {
            if cfg!(debug_assertions) {
                // Development mode: use default but warn
                tracing::warn!("JWT_SECRET not set, using insecure default for development");
                "dev-secret-key-minimum-32-chars!!".to_string()
            } else {
                // Production mode: panic
                panic!("JWT_SECRET environment variable must be set in production");
            }
        });

        // Validate JWT secret length
        if jwt_secret.len() < MIN_JWT_SECRET_LENGTH {
            panic!(
                "JWT_SECRET must be at least {} characters long",
                MIN_JWT_SECRET_LENGTH
            );
        }

        Self {
            mongodb_uri: env::var("MONGODB_URI").ok().filter(|uri| !uri.is_empty()),
            database_name: env::var("MONGODB_DATABASE")
                .unwrap_or_else(|_| DEFAULT_DATABASE_NAME.to_string()),
            data_dir: env::var("DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_DIR)),
            mode: DeploymentMode::from_env(),
            jwt_secret,
            jwt_expiration_hours: env::var("JWT_EXPIRATION_HOURS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_JWT_EXPIRATION_HOURS),
            server_host: env::var("SERVER_HOST")
                .unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_SERVER_PORT),
            connect_timeout_ms: env::var("MONGODB_CONNECT_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_CONNECT_TIMEOUT_MS),
        }
    }

    /// Fixed configuration for unit tests, bypassing the environment.
    #[cfg(test)]
    pub fn for_tests() -> Self {
        Self {
            mongodb_uri: None,
            database_name: DEFAULT_DATABASE_NAME.to_string(),
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            mode: DeploymentMode::Development,
            jwt_secret: "test-secret-key-for-testing-only-32chars".to_string(),
            jwt_expiration_hours: DEFAULT_JWT_EXPIRATION_HOURS,
            server_host: DEFAULT_SERVER_HOST.to_string(),
            server_port: DEFAULT_SERVER_PORT,
            connect_timeout_ms: DEFAULT_CONNECT_TIMEOUT_MS,
        }
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
