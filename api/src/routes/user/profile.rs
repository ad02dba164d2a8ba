use actix_web::{web, HttpResponse};

use sg_core::repositories::{RevocationStore, UserRepository};

use crate::dto::ProfileResponse;
use crate::middleware::auth::Authenticated;
use crate::routes::AppState;

/// Handler for GET /user/profile
pub async fn profile<U, R>(state: web::Data<AppState<U, R>>, auth: Authenticated) -> HttpResponse
where
    U: UserRepository + 'static,
    R: RevocationStore + 'static,
{
    let profile = state.sessions.profile(&auth);
    HttpResponse::Ok().json(ProfileResponse::from(profile))
}
