//! In-process revocation set

use async_trait::async_trait;
use std::collections::HashSet;
use tokio::sync::RwLock;

use crate::errors::DomainError;

use super::traits::RevocationStore;

/// Revocation set held in process memory
///
/// Entries are never removed for the lifetime of the process.
#[derive(Debug, Default)]
pub struct InMemoryRevocationStore {
    revoked: RwLock<HashSet<String>>,
}

impl InMemoryRevocationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.revoked.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.revoked.read().await.is_empty()
    }
}

#[async_trait]
impl RevocationStore for InMemoryRevocationStore {
    async fn is_revoked(&self, token_id: &str) -> Result<bool, DomainError> {
        Ok(self.revoked.read().await.contains(token_id))
    }

    async fn revoke(&self, token_id: &str) -> Result<(), DomainError> {
        self.revoked.write().await.insert(token_id.to_string());
        Ok(())
    }
}
