//! Shared configuration and wire types for the session guard
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Stable error codes
//! - The generic response envelope

pub mod config;
pub mod errors;
pub mod types;

pub use config::{
    AppConfig, AuthConfig, CacheConfig, ConfigError, Environment, JwtConfig, LogFormat,
    LoggingConfig, RevocationBackend, ServerConfig,
};
pub use errors::error_codes;
pub use types::GenericResponse;
