//! Authentication module
//!
//! - `guard` - validates a bearer credential and builds an [`AuthContext`]
//! - `service` - login, logout and profile use cases on top of the guard
//!
//! [`AuthContext`]: crate::domain::value_objects::AuthContext

mod guard;
mod service;

#[cfg(test)]
mod tests;

pub use guard::AuthGuard;
pub use service::SessionService;
