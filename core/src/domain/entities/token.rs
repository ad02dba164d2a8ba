//! Session token entities for JWT-based authentication.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::TokenError;

/// Session lifetime (7 days)
pub const SESSION_LIFETIME_HOURS: i64 = 168;

/// Clock drift tolerated between issuer and validator
pub const NOT_BEFORE_SKEW_SECONDS: i64 = 1;

/// JWT issuer
pub const JWT_ISSUER: &str = "JWT-revocation-app";

/// The only signing algorithm accepted on the wire
pub const JWT_ALGORITHM: &str = "HS256";

/// Claims structure for JWT payload
///
/// Every field is required; a payload missing one, or carrying one with the
/// wrong JSON type, does not deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// JWT ID, the unit of revocation
    pub jti: String,

    /// Subject identity key
    pub email: String,

    /// Issuer
    pub iss: String,

    /// Not before timestamp
    pub nbf: i64,

    /// Expiration timestamp
    pub exp: i64,
}

impl Claims {
    /// Creates claims for a freshly minted session token
    ///
    /// # Arguments
    ///
    /// * `subject` - Identity key of the user
    /// * `issuer` - Issuer claim
    /// * `now` - Mint time
    /// * `lifetime` - Session window added to `now` for `exp`
    /// * `skew` - Drift allowance subtracted from `now` for `nbf`
    ///
    /// Fails with `TokenGenerationFailed` when the window falls outside the
    /// representable time range.
    pub fn issue(
        subject: impl Into<String>,
        issuer: impl Into<String>,
        now: DateTime<Utc>,
        lifetime: Duration,
        skew: Duration,
    ) -> Result<Self, TokenError> {
        let nbf = now
            .checked_sub_signed(skew)
            .ok_or(TokenError::TokenGenerationFailed)?;
        let exp = now
            .checked_add_signed(lifetime)
            .ok_or(TokenError::TokenGenerationFailed)?;

        Ok(Self {
            jti: new_token_id(),
            email: subject.into(),
            iss: issuer.into(),
            nbf: nbf.timestamp(),
            exp: exp.timestamp(),
        })
    }

    pub fn subject(&self) -> &str {
        &self.email
    }

    pub fn token_id(&self) -> &str {
        &self.jti
    }

    /// `true` once `now` reaches `exp`
    pub fn is_expired_at(&self, now: i64) -> bool {
        now >= self.exp
    }

    /// `true` while `now` is before `nbf`
    pub fn is_premature_at(&self, now: i64) -> bool {
        now < self.nbf
    }

    /// Checks `now` lies within `[nbf, exp)`
    pub fn is_valid(&self) -> bool {
        let now = Utc::now().timestamp();
        !self.is_premature_at(now) && !self.is_expired_at(now)
    }
}

/// 128 random bits from the thread-local CSPRNG, rendered in UUID form
fn new_token_id() -> String {
    Uuid::from_bytes(rand::random::<[u8; 16]>()).to_string()
}

/// A minted token together with the claims it encodes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionToken {
    /// Encoded `header.payload.signature`
    pub token: String,

    /// Decoded claims
    pub claims: Claims,
}

impl SessionToken {
    pub fn new(token: String, claims: Claims) -> Self {
        Self { token, claims }
    }

    pub fn as_str(&self) -> &str {
        &self.token
    }

    pub fn token_id(&self) -> &str {
        self.claims.token_id()
    }

    /// Seconds until expiry, zero once expired
    pub fn expires_in(&self) -> i64 {
        (self.claims.exp - Utc::now().timestamp()).max(0)
    }
}
