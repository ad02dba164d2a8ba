//! Maps domain errors onto HTTP responses

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use tracing::error;

use sg_core::errors::{AuthError, DomainError};
use sg_shared::{error_codes, GenericResponse};

/// Error returned by every handler and by the authentication middleware
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Invalid request body")]
    InvalidBody,
}

impl From<AuthError> for ApiError {
    fn from(error: AuthError) -> Self {
        ApiError::Domain(error.into())
    }
}

impl ApiError {
    /// Stable machine-readable code for the response body
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::Domain(e) => e.error_code(),
            ApiError::InvalidBody => error_codes::BAD_REQUEST,
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidBody => StatusCode::BAD_REQUEST,
            ApiError::Domain(e) => match e {
                DomainError::Auth(AuthError::RevocationStoreUnavailable) => {
                    StatusCode::SERVICE_UNAVAILABLE
                }
                _ if e.is_authentication_failure() => StatusCode::UNAUTHORIZED,
                DomainError::Validation { .. } => StatusCode::BAD_REQUEST,
                DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            ApiError::Domain(e) => {
                if matches!(e, DomainError::Internal { .. } | DomainError::Configuration { .. }) {
                    error!(error = %e, "Request failed");
                }
                e.public_message()
            }
            ApiError::InvalidBody => self.to_string(),
        };

        HttpResponse::build(self.status_code())
            .json(GenericResponse::failure(self.error_code(), message))
    }
}
