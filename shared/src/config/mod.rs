//! Configuration module
//!
//! - `auth` - session token signing
//! - `cache` - revocation store connection
//! - `environment` - environment detection and logging
//! - `server` - HTTP server binding

pub mod auth;
pub mod cache;
pub mod environment;
pub mod server;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use auth::{AuthConfig, JwtConfig};
pub use cache::{CacheConfig, RevocationBackend};
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use server::ServerConfig;

/// Configuration errors detected at startup
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required configuration: {key}")]
    Missing { key: String },

    #[error("Invalid configuration for {key}: {reason}")]
    Invalid { key: String, reason: String },
}

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub auth: AuthConfig,
    pub cache: CacheConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment
    pub fn from_env() -> Self {
        let environment = Environment::from_env();
        Self {
            environment,
            server: ServerConfig::from_env(),
            auth: AuthConfig::from_env(),
            cache: CacheConfig::from_env(),
            logging: LoggingConfig::from_env(environment),
        }
    }

    /// Validate settings that must hold before serving
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.auth.jwt.validate()?;
        if self.cache.backend == RevocationBackend::Redis && self.cache.url.trim().is_empty() {
            return Err(ConfigError::Missing {
                key: "REDIS_DSN".to_string(),
            });
        }
        if self.cache.revocation_key.is_empty() {
            return Err(ConfigError::Invalid {
                key: "REDIS_REVOCATION_KEY".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
