//! Authentication route handlers
//!
//! - `login` - register on first sight and issue a session token
//! - `logout` - revoke the presented session token

pub mod login;
pub mod logout;

/// Response header carrying a freshly minted session token
pub const SESSION_TOKEN_HEADER: &str = "X-JWT-APP";
