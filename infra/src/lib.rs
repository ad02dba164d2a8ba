//! # Infrastructure Layer
//!
//! Concrete implementations of the core's outbound collaborators.
//!
//! - **Cache**: Redis client with startup connection retry and bounded
//!   per-command response time
//! - **Revocation**: Redis-backed [`RevocationStore`](sg_core::RevocationStore)

use sg_core::errors::DomainError;

/// Cache module - Redis client and operations
pub mod cache;

/// Revocation module - Redis set of revoked token IDs
pub mod revocation;

pub use cache::RedisClient;
pub use revocation::RedisRevocationStore;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Redis cache error
    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    /// Redis did not answer within the configured response timeout
    #[error("Cache operation '{operation}' timed out after {timeout_ms}ms")]
    Timeout { operation: String, timeout_ms: u64 },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<InfrastructureError> for DomainError {
    fn from(error: InfrastructureError) -> Self {
        match error {
            InfrastructureError::Config(message) => DomainError::Configuration { message },
            other => DomainError::Internal {
                message: other.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infrastructure_error_to_domain_error() {
        let err: DomainError = InfrastructureError::Timeout {
            operation: "SISMEMBER".to_string(),
            timeout_ms: 2000,
        }
        .into();
        assert!(matches!(err, DomainError::Internal { .. }));

        let err: DomainError = InfrastructureError::Config("bad url".to_string()).into();
        assert_eq!(
            err,
            DomainError::Configuration {
                message: "bad url".to_string()
            }
        );
    }
}
