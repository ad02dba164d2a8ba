//! Revocation store configuration module

use serde::{Deserialize, Serialize};

/// Redis set holding revoked token identifiers
pub const DEFAULT_REVOCATION_KEY: &str = "jwt_blacklist";

/// Backend used for the revocation set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RevocationBackend {
    /// Shared Redis set (default)
    Redis,
    /// Process-local set, lost on restart
    Memory,
}

impl std::str::FromStr for RevocationBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "redis" => Ok(RevocationBackend::Redis),
            "memory" | "in-memory" => Ok(RevocationBackend::Memory),
            _ => Err(format!("Invalid revocation backend: {}", s)),
        }
    }
}

/// Redis cache configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Redis connection URL
    pub url: String,

    /// Key of the Redis set holding revoked token IDs
    #[serde(default = "default_revocation_key")]
    pub revocation_key: String,

    /// Revocation backend selection
    #[serde(default = "default_backend")]
    pub backend: RevocationBackend,

    /// Response timeout in milliseconds for a single command
    pub response_timeout_ms: u64,

    /// Connection attempts made at startup
    #[serde(default = "default_connect_retries")]
    pub connect_retries: u32,

    /// Base delay between connection attempts (exponential backoff)
    #[serde(default = "default_connect_retry_delay_ms")]
    pub connect_retry_delay_ms: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            url: String::from("redis://localhost:6379"),
            revocation_key: default_revocation_key(),
            backend: default_backend(),
            response_timeout_ms: 2000,
            connect_retries: default_connect_retries(),
            connect_retry_delay_ms: default_connect_retry_delay_ms(),
        }
    }
}

impl CacheConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let url = std::env::var("REDIS_DSN")
            .map(|dsn| normalize_dsn(&dsn))
            .unwrap_or_else(|_| "redis://localhost:6379".to_string());
        let revocation_key = std::env::var("REDIS_REVOCATION_KEY")
            .unwrap_or_else(|_| default_revocation_key());
        let backend = std::env::var("REVOCATION_BACKEND")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_backend);

        Self {
            url,
            revocation_key,
            backend,
            ..Default::default()
        }
    }

    /// Create a new cache configuration with URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: normalize_dsn(&url.into()),
            ..Default::default()
        }
    }

    /// Set the revocation set key
    pub fn with_revocation_key(mut self, key: impl Into<String>) -> Self {
        self.revocation_key = key.into();
        self
    }

    /// Set the revocation backend
    pub fn with_backend(mut self, backend: RevocationBackend) -> Self {
        self.backend = backend;
        self
    }
}

/// Accept a bare `host:port` DSN as well as a full `redis://` URL
pub fn normalize_dsn(dsn: &str) -> String {
    let dsn = dsn.trim();
    if dsn.contains("://") {
        dsn.to_string()
    } else {
        format!("redis://{}", dsn)
    }
}

fn default_revocation_key() -> String {
    String::from(DEFAULT_REVOCATION_KEY)
}

fn default_backend() -> RevocationBackend {
    RevocationBackend::Redis
}

fn default_connect_retries() -> u32 {
    3
}

fn default_connect_retry_delay_ms() -> u64 {
    100
}
