//! Generic API response envelope

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Response body used by every endpoint that does not return a resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenericResponse {
    /// Human-readable message
    pub message: String,

    /// Whether the request succeeded
    pub status: bool,

    /// Unix timestamp (seconds) of the response
    pub timestamp: i64,

    /// Machine-readable error code, present on failure
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl GenericResponse {
    /// Create a successful response
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: true,
            timestamp: Utc::now().timestamp(),
            error: None,
        }
    }

    /// Create a failure response carrying a stable error code
    pub fn failure(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: false,
            timestamp: Utc::now().timestamp(),
            error: Some(code.into()),
        }
    }
}
