//! Stable machine-readable error codes shared by every layer

/// Error codes carried in rejection responses
pub mod error_codes {
    pub const MISSING_CREDENTIAL: &str = "MISSING_CREDENTIAL";
    pub const MALFORMED_TOKEN: &str = "MALFORMED_TOKEN";
    pub const UNEXPECTED_SIGNING_ALGORITHM: &str = "UNEXPECTED_SIGNING_ALGORITHM";
    pub const BAD_SIGNATURE: &str = "BAD_SIGNATURE";
    pub const TOKEN_EXPIRED: &str = "TOKEN_EXPIRED";
    pub const TOKEN_NOT_YET_VALID: &str = "TOKEN_NOT_YET_VALID";
    pub const TOKEN_REVOKED: &str = "TOKEN_REVOKED";
    pub const UNKNOWN_SUBJECT: &str = "UNKNOWN_SUBJECT";
    pub const REVOCATION_STORE_UNAVAILABLE: &str = "REVOCATION_STORE_UNAVAILABLE";
    pub const TOKEN_GENERATION_FAILED: &str = "TOKEN_GENERATION_FAILED";
    pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
    pub const BAD_REQUEST: &str = "BAD_REQUEST";
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
}
