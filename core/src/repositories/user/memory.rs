//! In-process user registry

use async_trait::async_trait;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::entities::user::UserProfile;
use crate::errors::DomainError;

use super::traits::UserRepository;

/// Concurrency-safe mapping from identity key to profile
///
/// Readers share the lock; `save` holds the write lock across the presence
/// check and the insert.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<String, UserProfile>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered profiles
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn save(&self, profile: UserProfile) -> Result<bool, DomainError> {
        let mut users = self.users.write().await;

        match users.entry(profile.email.clone()) {
            Entry::Occupied(_) => {
                debug!(email = %profile.email, "Profile already registered, keeping first write");
                Ok(false)
            }
            Entry::Vacant(slot) => {
                slot.insert(profile);
                Ok(true)
            }
        }
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserProfile>, DomainError> {
        let users = self.users.read().await;
        Ok(users.get(email).cloned())
    }
}
