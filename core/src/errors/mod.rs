//! Domain-specific error types and error handling.

mod types;

pub use types::{AuthError, TokenError};

use sg_shared::error_codes;
use thiserror::Error;
use validator::ValidationErrors;

/// Core domain errors (general purpose)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),
}

impl DomainError {
    /// Collapse validator output into the first failing field's message
    ///
    /// Fields are checked in `field_order`; the first one with an error wins.
    pub fn from_validation(errors: &ValidationErrors, field_order: &[&str]) -> Self {
        let field_errors = errors.field_errors();
        let message = field_order
            .iter()
            .filter_map(|field| field_errors.get(*field))
            .chain(field_errors.values())
            .flat_map(|errors| errors.iter())
            .find_map(|error| error.message.as_ref().map(|m| m.to_string()))
            .unwrap_or_else(|| "Invalid input".to_string());

        DomainError::Validation { message }
    }

    /// Stable machine-readable code
    pub fn error_code(&self) -> &'static str {
        match self {
            DomainError::Validation { .. } => error_codes::VALIDATION_ERROR,
            DomainError::NotFound { .. } => error_codes::NOT_FOUND,
            DomainError::Configuration { .. } | DomainError::Internal { .. } => {
                error_codes::INTERNAL_ERROR
            }
            DomainError::Auth(err) => err.error_code(),
            DomainError::Token(err) => err.error_code(),
        }
    }

    /// Message safe to return to a client
    ///
    /// Internal and configuration details stay in the logs.
    pub fn public_message(&self) -> String {
        match self {
            DomainError::Validation { message } => message.clone(),
            DomainError::Configuration { .. } | DomainError::Internal { .. } => {
                "Could not complete request".to_string()
            }
            other => other.to_string(),
        }
    }

    /// Whether the error rejects credentials rather than failing the service
    pub fn is_authentication_failure(&self) -> bool {
        matches!(
            self,
            DomainError::Token(
                TokenError::MalformedToken
                    | TokenError::UnexpectedSigningAlgorithm
                    | TokenError::BadSignature
                    | TokenError::TokenExpired
                    | TokenError::TokenNotYetValid
            ) | DomainError::Auth(
                    AuthError::MissingCredential | AuthError::TokenRevoked | AuthError::UnknownSubject
                )
        )
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
