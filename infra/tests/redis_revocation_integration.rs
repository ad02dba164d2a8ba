//! Integration tests for the Redis revocation store
//!
//! These tests require a running Redis instance to execute.
//! Run with: cargo test -p sg_infra --test redis_revocation_integration -- --ignored

use std::sync::Arc;

use sg_core::domain::entities::user::UserProfile;
use sg_core::errors::{AuthError, DomainError};
use sg_core::repositories::{InMemoryUserRepository, RevocationStore, UserRepository};
use sg_core::services::{AuthGuard, TokenService, TokenServiceConfig};
use sg_infra::cache::{CacheConfig, RedisClient};
use sg_infra::RedisRevocationStore;

fn test_config() -> CacheConfig {
    let url = std::env::var("REDIS_DSN").unwrap_or_else(|_| "localhost:6379".to_string());
    CacheConfig::new(url).with_revocation_key("test:jwt_blacklist")
}

#[tokio::test]
#[ignore] // Requires Redis server
async fn test_revoke_is_visible_to_later_lookups() {
    let client = RedisClient::new(test_config()).await.unwrap();
    let store = RedisRevocationStore::new(client);
    let token_id = format!("it-{}", std::process::id());

    store.revoke(&token_id).await.unwrap();
    store.revoke(&token_id).await.unwrap();

    assert!(store.is_revoked(&token_id).await.unwrap());
    assert!(!store.is_revoked("never-issued").await.unwrap());
}

#[tokio::test]
#[ignore] // Requires Redis server
async fn test_guard_rejects_token_revoked_in_redis() {
    let client = RedisClient::new(test_config()).await.unwrap();
    let revocations = Arc::new(RedisRevocationStore::new(client));
    let users = Arc::new(InMemoryUserRepository::new());
    users
        .save(UserProfile::new("a@example.com", "Ada"))
        .await
        .unwrap();
    let tokens = Arc::new(TokenService::new(TokenServiceConfig::new("integration-secret")).unwrap());
    let guard = AuthGuard::new(tokens.clone(), users, revocations.clone());

    let token = tokens.mint("a@example.com").unwrap();
    assert!(guard.authenticate(Some(token.as_str())).await.is_ok());

    revocations.revoke(token.token_id()).await.unwrap();

    assert_eq!(
        guard.authenticate(Some(token.as_str())).await,
        Err(DomainError::Auth(AuthError::TokenRevoked))
    );
}
