//! Revocation store trait, the set of token IDs that may never authorize again.

use async_trait::async_trait;

use crate::errors::DomainError;

/// Append-only set of revoked token identifiers
///
/// Backends are usually reached over the network, so both operations can
/// fail. Callers on the validation path must treat a failed lookup as a
/// denial.
///
/// A `revoke` that has returned must be visible to every `is_revoked` call
/// that starts afterwards.
#[async_trait]
pub trait RevocationStore: Send + Sync {
    /// Membership test against the revocation set
    async fn is_revoked(&self, token_id: &str) -> Result<bool, DomainError>;

    /// Add a token ID to the set; revoking twice is not an error
    async fn revoke(&self, token_id: &str) -> Result<(), DomainError>;
}
