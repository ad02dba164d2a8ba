//! Session token signing configuration

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Issuer claim stamped on every session token
pub const DEFAULT_ISSUER: &str = "JWT-revocation-app";

/// Upper bound on the session lifetime (10 years)
pub const MAX_SESSION_LIFETIME_HOURS: i64 = 24 * 365 * 10;

/// Upper bound on the not-before skew (1 day)
pub const MAX_NOT_BEFORE_SKEW_SECONDS: i64 = 86_400;

/// JWT signing configuration
#[derive(Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Symmetric HMAC signing secret, must be non-empty
    pub secret: String,

    /// Session lifetime in hours, counted from mint time
    #[serde(default = "default_session_lifetime_hours")]
    pub session_lifetime_hours: i64,

    /// Seconds subtracted from `nbf` to tolerate clock drift
    #[serde(default = "default_not_before_skew_seconds")]
    pub not_before_skew_seconds: i64,

    /// JWT issuer claim
    #[serde(default = "default_issuer")]
    pub issuer: String,
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"****")
            .field("session_lifetime_hours", &self.session_lifetime_hours)
            .field("not_before_skew_seconds", &self.not_before_skew_seconds)
            .field("issuer", &self.issuer)
            .finish()
    }
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::new(),
            session_lifetime_hours: default_session_lifetime_hours(),
            not_before_skew_seconds: default_not_before_skew_seconds(),
            issuer: default_issuer(),
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Set the session lifetime in hours
    pub fn with_session_lifetime_hours(mut self, hours: i64) -> Self {
        self.session_lifetime_hours = hours;
        self
    }

    /// Set the not-before skew in seconds
    pub fn with_not_before_skew_seconds(mut self, seconds: i64) -> Self {
        self.not_before_skew_seconds = seconds;
        self
    }

    /// Session lifetime in seconds
    pub fn session_lifetime_seconds(&self) -> i64 {
        self.session_lifetime_hours * 3600
    }

    /// Reject configurations that cannot sign tokens
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.secret.is_empty() {
            return Err(ConfigError::Missing {
                key: "JWT_SIGNING_SECRET".to_string(),
            });
        }
        if self.session_lifetime_hours <= 0 {
            return Err(ConfigError::Invalid {
                key: "JWT_SESSION_LIFETIME_HOURS".to_string(),
                reason: "must be positive".to_string(),
            });
        }
        if self.session_lifetime_hours > MAX_SESSION_LIFETIME_HOURS {
            return Err(ConfigError::Invalid {
                key: "JWT_SESSION_LIFETIME_HOURS".to_string(),
                reason: format!("must not exceed {}", MAX_SESSION_LIFETIME_HOURS),
            });
        }
        if !(0..=MAX_NOT_BEFORE_SKEW_SECONDS).contains(&self.not_before_skew_seconds) {
            return Err(ConfigError::Invalid {
                key: "JWT_NOT_BEFORE_SKEW_SECONDS".to_string(),
                reason: format!("must be between 0 and {}", MAX_NOT_BEFORE_SKEW_SECONDS),
            });
        }
        Ok(())
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AuthConfig {
    /// JWT configuration
    pub jwt: JwtConfig,
}

impl AuthConfig {
    /// Create from environment variables
    ///
    /// The secret has no default; an unset `JWT_SIGNING_SECRET` is caught by
    /// [`JwtConfig::validate`] at startup.
    pub fn from_env() -> Self {
        let secret = std::env::var("JWT_SIGNING_SECRET").unwrap_or_default();
        let session_lifetime_hours = std::env::var("JWT_SESSION_LIFETIME_HOURS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_session_lifetime_hours);
        let not_before_skew_seconds = std::env::var("JWT_NOT_BEFORE_SKEW_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_not_before_skew_seconds);

        Self {
            jwt: JwtConfig {
                secret,
                session_lifetime_hours,
                not_before_skew_seconds,
                issuer: default_issuer(),
            },
        }
    }
}

fn default_session_lifetime_hours() -> i64 {
    168 // 7 days
}

fn default_not_before_skew_seconds() -> i64 {
    1
}

fn default_issuer() -> String {
    String::from(DEFAULT_ISSUER)
}
