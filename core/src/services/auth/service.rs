//! Session use cases

use std::sync::Arc;
use tracing::{error, info};

use crate::domain::entities::token::SessionToken;
use crate::domain::entities::user::UserProfile;
use crate::domain::value_objects::AuthContext;
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::{RevocationStore, UserRepository};
use crate::services::token::TokenService;

use super::guard::AuthGuard;

/// Login, logout and profile flows
///
/// Built once at startup from explicitly constructed components and shared
/// by every request handler.
pub struct SessionService<U, R>
where
    U: UserRepository,
    R: RevocationStore,
{
    guard: AuthGuard<U, R>,
}

impl<U, R> Clone for SessionService<U, R>
where
    U: UserRepository,
    R: RevocationStore,
{
    fn clone(&self) -> Self {
        Self {
            guard: self.guard.clone(),
        }
    }
}

impl<U, R> SessionService<U, R>
where
    U: UserRepository,
    R: RevocationStore,
{
    /// Create a new session service
    ///
    /// # Arguments
    ///
    /// * `tokens` - Token codec
    /// * `users` - User registry
    /// * `revocations` - Revocation store
    pub fn new(tokens: Arc<TokenService>, users: Arc<U>, revocations: Arc<R>) -> Self {
        Self {
            guard: AuthGuard::new(tokens, users, revocations),
        }
    }

    pub fn guard(&self) -> &AuthGuard<U, R> {
        &self.guard
    }

    /// Register the profile on first sight and mint a session token
    ///
    /// A profile already registered under the same email is kept as is.
    pub async fn login(&self, profile: UserProfile) -> DomainResult<SessionToken> {
        profile.ensure_valid()?;

        let email = profile.email.clone();
        let inserted = self.guard.users().save(profile).await?;
        let token = self.guard.tokens().mint(&email)?;

        info!(token_id = %token.token_id(), new_user = inserted, "User logged in");
        Ok(token)
    }

    /// Revoke the token the caller authenticated with
    pub async fn logout(&self, context: &AuthContext) -> DomainResult<()> {
        self.guard
            .revocations()
            .revoke(&context.token_id)
            .await
            .map_err(|e| {
                error!(token_id = %context.token_id, error = %e, "Failed to revoke session token");
                DomainError::Auth(AuthError::RevocationStoreUnavailable)
            })?;

        info!(token_id = %context.token_id, "User logged out");
        Ok(())
    }

    pub fn profile(&self, context: &AuthContext) -> UserProfile {
        context.profile.clone()
    }
}
