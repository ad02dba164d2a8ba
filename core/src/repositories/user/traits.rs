//! User repository trait defining the interface for profile lookups.

use async_trait::async_trait;

use crate::domain::entities::user::UserProfile;
use crate::errors::DomainError;

/// Repository trait for the user registry
///
/// Implementations must be safe to share across concurrent request handlers.
/// `save` follows a first-write-wins policy: the presence check and the
/// insert happen under one exclusion, so two concurrent first logins for the
/// same identity key cannot both decide the key is absent.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert the profile if its identity key is absent
    ///
    /// # Returns
    /// * `Ok(true)` - Profile inserted
    /// * `Ok(false)` - A profile with the same key already exists, nothing changed
    /// * `Err(DomainError)` - Backend failure
    async fn save(&self, profile: UserProfile) -> Result<bool, DomainError>;

    /// Find a profile by identity key
    ///
    /// Returns an owned copy; callers cannot mutate registry state through it.
    async fn find_by_email(&self, email: &str) -> Result<Option<UserProfile>, DomainError>;

    /// Get a profile, failing with `NotFound` when absent
    async fn get(&self, email: &str) -> Result<UserProfile, DomainError> {
        self.find_by_email(email)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                resource: "User".to_string(),
            })
    }
}
