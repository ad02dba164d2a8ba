//! Token service module for session tokens
//!
//! Mints and parses HS256 session tokens. Revocation and identity lookups are
//! not done here; see [`crate::services::auth`].

mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::TokenServiceConfig;
pub use service::TokenService;
