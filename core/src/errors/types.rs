//! Token and authentication error types
//!
//! Every variant maps to a stable error code from [`sg_shared::error_codes`]
//! and a fixed message. Messages never carry library error text.

use sg_shared::error_codes;
use thiserror::Error;

/// Token codec errors, produced while minting or parsing a session token
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Session token is malformed")]
    MalformedToken,

    #[error("Session token declares an unexpected signing algorithm")]
    UnexpectedSigningAlgorithm,

    #[error("Session token signature verification failed")]
    BadSignature,

    #[error("Session token has expired")]
    TokenExpired,

    #[error("Session token is not yet valid")]
    TokenNotYetValid,

    #[error("Session token generation failed")]
    TokenGenerationFailed,
}

impl TokenError {
    /// Stable machine-readable code
    pub fn error_code(&self) -> &'static str {
        match self {
            TokenError::MalformedToken => error_codes::MALFORMED_TOKEN,
            TokenError::UnexpectedSigningAlgorithm => error_codes::UNEXPECTED_SIGNING_ALGORITHM,
            TokenError::BadSignature => error_codes::BAD_SIGNATURE,
            TokenError::TokenExpired => error_codes::TOKEN_EXPIRED,
            TokenError::TokenNotYetValid => error_codes::TOKEN_NOT_YET_VALID,
            TokenError::TokenGenerationFailed => error_codes::TOKEN_GENERATION_FAILED,
        }
    }
}

/// Rejections raised by the authentication guard after token parsing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Missing bearer credential")]
    MissingCredential,

    #[error("Session token has been revoked")]
    TokenRevoked,

    #[error("Session token subject is not a known user")]
    UnknownSubject,

    #[error("Revocation store is unavailable")]
    RevocationStoreUnavailable,
}

impl AuthError {
    /// Stable machine-readable code
    pub fn error_code(&self) -> &'static str {
        match self {
            AuthError::MissingCredential => error_codes::MISSING_CREDENTIAL,
            AuthError::TokenRevoked => error_codes::TOKEN_REVOKED,
            AuthError::UnknownSubject => error_codes::UNKNOWN_SUBJECT,
            AuthError::RevocationStoreUnavailable => error_codes::REVOCATION_STORE_UNAVAILABLE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_error_codes_are_distinct() {
        let errors = [
            TokenError::MalformedToken,
            TokenError::UnexpectedSigningAlgorithm,
            TokenError::BadSignature,
            TokenError::TokenExpired,
            TokenError::TokenNotYetValid,
            TokenError::TokenGenerationFailed,
        ];
        let mut codes: Vec<_> = errors.iter().map(|e| e.error_code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn test_auth_error_codes() {
        assert_eq!(AuthError::MissingCredential.error_code(), "MISSING_CREDENTIAL");
        assert_eq!(AuthError::TokenRevoked.error_code(), "TOKEN_REVOKED");
        assert_eq!(AuthError::UnknownSubject.error_code(), "UNKNOWN_SUBJECT");
        assert_eq!(
            AuthError::RevocationStoreUnavailable.error_code(),
            "REVOCATION_STORE_UNAVAILABLE"
        );
    }
}
