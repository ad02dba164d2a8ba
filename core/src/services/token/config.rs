//! Configuration for the token service

use chrono::Duration;
use sg_shared::config::auth::{MAX_NOT_BEFORE_SKEW_SECONDS, MAX_SESSION_LIFETIME_HOURS};
use sg_shared::config::JwtConfig;

use crate::domain::entities::token::{JWT_ISSUER, NOT_BEFORE_SKEW_SECONDS, SESSION_LIFETIME_HOURS};
use crate::errors::DomainError;

/// Configuration for the token service
#[derive(Clone)]
pub struct TokenServiceConfig {
    /// Symmetric signing secret
    pub secret: String,
    /// Issuer claim, also required on parse
    pub issuer: String,
    /// Window between mint and `exp`
    pub session_lifetime: Duration,
    /// Subtracted from mint time to produce `nbf`
    pub not_before_skew: Duration,
}

impl TokenServiceConfig {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            issuer: JWT_ISSUER.to_string(),
            session_lifetime: Duration::hours(SESSION_LIFETIME_HOURS),
            not_before_skew: Duration::seconds(NOT_BEFORE_SKEW_SECONDS),
        }
    }

    pub fn with_session_lifetime(mut self, lifetime: Duration) -> Self {
        self.session_lifetime = lifetime;
        self
    }

    pub fn with_not_before_skew(mut self, skew: Duration) -> Self {
        self.not_before_skew = skew;
        self
    }

    /// Reject settings that would make every mint or parse fail
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.secret.is_empty() {
            return Err(DomainError::Configuration {
                message: "Signing secret must not be empty".to_string(),
            });
        }
        if self.session_lifetime <= Duration::zero() {
            return Err(DomainError::Configuration {
                message: "Session lifetime must be positive".to_string(),
            });
        }
        if self.session_lifetime > Duration::hours(MAX_SESSION_LIFETIME_HOURS) {
            return Err(DomainError::Configuration {
                message: format!(
                    "Session lifetime must not exceed {} hours",
                    MAX_SESSION_LIFETIME_HOURS
                ),
            });
        }
        if self.not_before_skew < Duration::zero() {
            return Err(DomainError::Configuration {
                message: "Not-before skew must not be negative".to_string(),
            });
        }
        if self.not_before_skew > Duration::seconds(MAX_NOT_BEFORE_SKEW_SECONDS) {
            return Err(DomainError::Configuration {
                message: format!(
                    "Not-before skew must not exceed {} seconds",
                    MAX_NOT_BEFORE_SKEW_SECONDS
                ),
            });
        }
        Ok(())
    }
}

impl std::fmt::Debug for TokenServiceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenServiceConfig")
            .field("secret", &"****")
            .field("issuer", &self.issuer)
            .field("session_lifetime", &self.session_lifetime)
            .field("not_before_skew", &self.not_before_skew)
            .finish()
    }
}

impl TryFrom<&JwtConfig> for TokenServiceConfig {
    type Error = DomainError;

    fn try_from(config: &JwtConfig) -> Result<Self, Self::Error> {
        let session_lifetime = Duration::try_hours(config.session_lifetime_hours).ok_or_else(|| {
            DomainError::Configuration {
                message: "Session lifetime is out of range".to_string(),
            }
        })?;
        let not_before_skew =
            Duration::try_seconds(config.not_before_skew_seconds).ok_or_else(|| {
                DomainError::Configuration {
                    message: "Not-before skew is out of range".to_string(),
                }
            })?;

        let token_config = Self {
            secret: config.secret.clone(),
            issuer: config.issuer.clone(),
            session_lifetime,
            not_before_skew,
        };
        token_config.validate()?;
        Ok(token_config)
    }
}
