//! Route handlers

pub mod auth;
pub mod health;
pub mod user;

use sg_core::repositories::{RevocationStore, UserRepository};
use sg_core::services::SessionService;

/// Application state shared by every handler
pub struct AppState<U, R>
where
    U: UserRepository,
    R: RevocationStore,
{
    pub sessions: SessionService<U, R>,
}

impl<U, R> AppState<U, R>
where
    U: UserRepository,
    R: RevocationStore,
{
    pub fn new(sessions: SessionService<U, R>) -> Self {
        Self { sessions }
    }
}
