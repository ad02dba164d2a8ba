//! Unit tests for the session service

use std::sync::Arc;

use crate::domain::entities::user::UserProfile;
use crate::errors::{AuthError, DomainError};
use crate::repositories::{InMemoryRevocationStore, InMemoryUserRepository, UserRepository};
use crate::services::auth::SessionService;
use crate::services::token::{TokenService, TokenServiceConfig};

use super::mocks::FailingRevocationStore;

fn create_service() -> SessionService<InMemoryUserRepository, InMemoryRevocationStore> {
    SessionService::new(
        Arc::new(TokenService::new(TokenServiceConfig::new("session-secret")).unwrap()),
        Arc::new(InMemoryUserRepository::new()),
        Arc::new(InMemoryRevocationStore::new()),
    )
}

#[tokio::test]
async fn test_login_registers_and_mints() {
    let service = create_service();

    let token = service
        .login(UserProfile::new("a@example.com", "Ada"))
        .await
        .unwrap();

    assert_eq!(token.claims.subject(), "a@example.com");
    let stored = service.guard().users().get("a@example.com").await.unwrap();
    assert_eq!(stored.full_name, "Ada");
}

#[tokio::test]
async fn test_login_validates_input() {
    let service = create_service();

    let result = service.login(UserProfile::new("a@example.com", "")).await;
    assert_eq!(
        result.unwrap_err(),
        DomainError::Validation {
            message: "Please provide your name".to_string()
        }
    );

    let result = service.login(UserProfile::new("", "Ada")).await;
    assert_eq!(
        result.unwrap_err(),
        DomainError::Validation {
            message: "Please provide your email".to_string()
        }
    );

    assert!(service.guard().users().is_empty().await);
}

#[tokio::test]
async fn test_second_login_keeps_first_profile() {
    let service = create_service();

    service
        .login(UserProfile::new("a@example.com", "Ada"))
        .await
        .unwrap();
    let token = service
        .login(UserProfile::new("a@example.com", "Someone Else"))
        .await
        .unwrap();

    let context = service
        .guard()
        .authenticate(Some(token.as_str()))
        .await
        .unwrap();
    assert_eq!(service.profile(&context).full_name, "Ada");
}

#[tokio::test]
async fn test_logout_revokes_current_token_only() {
    let service = create_service();
    let first = service
        .login(UserProfile::new("a@example.com", "Ada"))
        .await
        .unwrap();
    let second = service
        .login(UserProfile::new("a@example.com", "Ada"))
        .await
        .unwrap();

    let context = service
        .guard()
        .authenticate(Some(first.as_str()))
        .await
        .unwrap();
    service.logout(&context).await.unwrap();

    assert_eq!(
        service.guard().authenticate(Some(first.as_str())).await,
        Err(DomainError::Auth(AuthError::TokenRevoked))
    );
    assert!(service
        .guard()
        .authenticate(Some(second.as_str()))
        .await
        .is_ok());
}

#[tokio::test]
async fn test_logout_twice_is_not_an_error() {
    let service = create_service();
    let token = service
        .login(UserProfile::new("a@example.com", "Ada"))
        .await
        .unwrap();
    let context = service
        .guard()
        .authenticate(Some(token.as_str()))
        .await
        .unwrap();

    service.logout(&context).await.unwrap();
    service.logout(&context).await.unwrap();
}

#[tokio::test]
async fn test_logout_with_store_down() {
    let tokens = Arc::new(TokenService::new(TokenServiceConfig::new("session-secret")).unwrap());
    let users = Arc::new(InMemoryUserRepository::new());
    let service = SessionService::new(tokens, users, Arc::new(FailingRevocationStore));

    let token = service
        .login(UserProfile::new("a@example.com", "Ada"))
        .await
        .unwrap();
    let context = crate::domain::value_objects::AuthContext::new(
        UserProfile::new("a@example.com", "Ada"),
        token.token_id().to_string(),
    );

    assert_eq!(
        service.logout(&context).await,
        Err(DomainError::Auth(AuthError::RevocationStoreUnavailable))
    );
}
