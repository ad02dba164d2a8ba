//! Authentication guard

use std::future::Future;
use std::sync::Arc;
use tracing::{debug, error, warn};

use crate::domain::value_objects::AuthContext;
use crate::errors::{AuthError, DomainError};
use crate::repositories::{RevocationStore, UserRepository};
use crate::services::token::TokenService;

/// Validates bearer credentials against the token codec, the revocation
/// store and the user registry, in that order
///
/// The guard holds no state of its own. Each step either rejects with a
/// distinct error or hands over to the next; a request that passes all of
/// them gets an [`AuthContext`].
pub struct AuthGuard<U, R>
where
    U: UserRepository,
    R: RevocationStore,
{
    tokens: Arc<TokenService>,
    users: Arc<U>,
    revocations: Arc<R>,
}

impl<U, R> Clone for AuthGuard<U, R>
where
    U: UserRepository,
    R: RevocationStore,
{
    fn clone(&self) -> Self {
        Self {
            tokens: Arc::clone(&self.tokens),
            users: Arc::clone(&self.users),
            revocations: Arc::clone(&self.revocations),
        }
    }
}

impl<U, R> AuthGuard<U, R>
where
    U: UserRepository,
    R: RevocationStore,
{
    pub fn new(tokens: Arc<TokenService>, users: Arc<U>, revocations: Arc<R>) -> Self {
        Self {
            tokens,
            users,
            revocations,
        }
    }

    /// Authenticate a bearer credential
    ///
    /// # Arguments
    ///
    /// * `credential` - Raw token taken from the request, if any
    ///
    /// # Returns
    ///
    /// * `Ok(AuthContext)` - Profile and token ID of the authenticated caller
    /// * `Err(DomainError::Auth(MissingCredential))` - Nothing to check; no store is consulted
    /// * `Err(DomainError::Token(_))` - Token failed to parse or verify
    /// * `Err(DomainError::Auth(TokenRevoked))` - Token ID is in the revocation set
    /// * `Err(DomainError::Auth(RevocationStoreUnavailable))` - Lookup failed, request denied
    /// * `Err(DomainError::Auth(UnknownSubject))` - No profile for the subject
    pub async fn authenticate(&self, credential: Option<&str>) -> Result<AuthContext, DomainError> {
        let token = match credential.map(str::trim) {
            Some(token) if !token.is_empty() => token,
            _ => {
                debug!("Rejected request without bearer credential");
                return Err(AuthError::MissingCredential.into());
            }
        };

        let claims = self.tokens.parse(token).map_err(|e| {
            warn!(reason = e.error_code(), "Rejected invalid session token");
            DomainError::Token(e)
        })?;

        match self.revocations.is_revoked(&claims.jti).await {
            Ok(false) => {}
            Ok(true) => {
                warn!(token_id = %claims.jti, "Rejected revoked session token");
                return Err(AuthError::TokenRevoked.into());
            }
            Err(e) => {
                error!(token_id = %claims.jti, error = %e, "Revocation lookup failed, denying request");
                return Err(AuthError::RevocationStoreUnavailable.into());
            }
        }

        let profile = self
            .users
            .find_by_email(&claims.email)
            .await?
            .ok_or_else(|| {
                warn!(token_id = %claims.jti, "Rejected token for unknown subject");
                DomainError::Auth(AuthError::UnknownSubject)
            })?;

        debug!(token_id = %claims.jti, "Authenticated request");
        Ok(AuthContext::new(profile, claims.jti))
    }

    /// Run `operation` only for an authenticated caller
    ///
    /// The operation is never invoked when authentication fails.
    pub async fn protect<F, Fut, T>(
        &self,
        credential: Option<&str>,
        operation: F,
    ) -> Result<T, DomainError>
    where
        F: FnOnce(AuthContext) -> Fut,
        Fut: Future<Output = Result<T, DomainError>>,
    {
        let context = self.authenticate(credential).await?;
        operation(context).await
    }

    pub fn tokens(&self) -> &Arc<TokenService> {
        &self.tokens
    }

    pub fn users(&self) -> &Arc<U> {
        &self.users
    }

    pub fn revocations(&self) -> &Arc<R> {
        &self.revocations
    }
}
