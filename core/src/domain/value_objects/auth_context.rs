//! Authenticated request context produced by the guard.

use crate::domain::entities::user::UserProfile;

/// Identity attached to a request that passed every guard step
///
/// Only the guard constructs this outside of tests, so holding one is proof
/// the bearer token was verified, unrevoked, and resolved to a profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthContext {
    /// Profile resolved from the token subject
    pub profile: UserProfile,

    /// JWT ID of the presented token, needed to revoke it on logout
    pub token_id: String,
}

impl AuthContext {
    pub fn new(profile: UserProfile, token_id: impl Into<String>) -> Self {
        Self {
            profile,
            token_id: token_id.into(),
        }
    }

    pub fn email(&self) -> &str {
        self.profile.identity_key()
    }
}
