//! User profile entity backing identity lookups during validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::errors::DomainError;

/// Order in which missing login fields are reported
pub const PROFILE_FIELD_ORDER: &[&str] = &["full_name", "email"];

/// Profile record keyed by email
///
/// Created on first login and never overwritten afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct UserProfile {
    /// Identity key, unique and immutable once created
    #[validate(length(min = 1, message = "Please provide your email"))]
    pub email: String,

    /// Display name
    #[validate(length(min = 1, message = "Please provide your name"))]
    pub full_name: String,
}

impl UserProfile {
    pub fn new(email: impl Into<String>, full_name: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            full_name: full_name.into(),
        }
    }

    /// Identity key used by the registry and the `email` claim
    pub fn identity_key(&self) -> &str {
        &self.email
    }

    /// Check the fields a login must provide, name first
    pub fn ensure_valid(&self) -> Result<(), DomainError> {
        self.validate()
            .map_err(|e| DomainError::from_validation(&e, PROFILE_FIELD_ORDER))
    }
}
