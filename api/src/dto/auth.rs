use serde::{Deserialize, Serialize};
use validator::Validate;

use sg_core::domain::entities::user::UserProfile;

/// Body of `POST /login`
///
/// Absent fields deserialize as empty strings and are reported by the
/// login validation instead of failing as a malformed body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Please provide your email"))]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Please provide your name"))]
    pub full_name: String,
}

impl From<LoginRequest> for UserProfile {
    fn from(request: LoginRequest) -> Self {
        UserProfile::new(request.email, request.full_name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub email: String,
    pub full_name: String,
}

impl From<UserProfile> for ProfileResponse {
    fn from(profile: UserProfile) -> Self {
        Self {
            email: profile.email,
            full_name: profile.full_name,
        }
    }
}
