//! Redis implementation of the revocation store

use async_trait::async_trait;
use tracing::debug;

use sg_core::errors::DomainError;
use sg_core::repositories::RevocationStore;

use crate::cache::RedisClient;

/// Revoked token IDs kept as members of a single Redis set
///
/// `revoke` is `SADD` and `is_revoked` is `SISMEMBER`, so each call is one
/// round trip and revoking twice leaves the set unchanged. Members are never
/// expired.
#[derive(Clone)]
pub struct RedisRevocationStore {
    client: RedisClient,
    key: String,
}

impl RedisRevocationStore {
    /// Uses the set named by the client's `revocation_key`
    pub fn new(client: RedisClient) -> Self {
        let key = client.config().revocation_key.clone();
        Self { client, key }
    }
}

#[async_trait]
impl RevocationStore for RedisRevocationStore {
    async fn is_revoked(&self, token_id: &str) -> Result<bool, DomainError> {
        Ok(self.client.set_is_member(&self.key, token_id).await?)
    }

    async fn revoke(&self, token_id: &str) -> Result<(), DomainError> {
        let added = self.client.set_add(&self.key, token_id).await?;
        if !added {
            debug!(token_id, "Token ID was already revoked");
        }
        Ok(())
    }
}
