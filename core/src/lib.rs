//! # Session Guard Core
//!
//! Domain layer for signed session tokens with server-side revocation.
//! Holds the entities, the token codec, the user registry and revocation
//! store interfaces, and the authentication guard composing them.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{Claims, SessionToken, UserProfile};
pub use domain::value_objects::AuthContext;
pub use errors::{AuthError, DomainError, DomainResult, TokenError};
pub use repositories::{
    InMemoryRevocationStore, InMemoryUserRepository, RevocationStore, UserRepository,
};
pub use services::{AuthGuard, SessionService, TokenService, TokenServiceConfig};
