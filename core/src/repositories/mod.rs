pub mod revocation;
pub mod user;

pub use revocation::{InMemoryRevocationStore, RevocationStore};
pub use user::{InMemoryUserRepository, UserRepository};
