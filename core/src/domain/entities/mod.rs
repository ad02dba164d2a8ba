//! Domain entities representing core business objects.

pub mod token;
pub mod user;

pub use token::{
    Claims, SessionToken, JWT_ALGORITHM, JWT_ISSUER, NOT_BEFORE_SKEW_SECONDS,
    SESSION_LIFETIME_HOURS,
};
pub use user::UserProfile;
