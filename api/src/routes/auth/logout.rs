use actix_web::{web, HttpResponse};

use sg_core::repositories::{RevocationStore, UserRepository};
use sg_shared::GenericResponse;

use crate::handlers::error::ApiError;
use crate::middleware::auth::Authenticated;
use crate::routes::AppState;

/// Handler for POST /user/logout
///
/// Revokes the token the request was authenticated with. Other tokens issued
/// to the same user stay valid.
///
/// # Headers
///
/// ```text
/// Authorization: Bearer {session_token}
/// ```
///
/// ## Errors
/// - 401 Unauthorized: Missing, invalid or already revoked token
/// - 503 Service Unavailable: Revocation store unreachable
pub async fn logout<U, R>(
    state: web::Data<AppState<U, R>>,
    auth: Authenticated,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    R: RevocationStore + 'static,
{
    state.sessions.logout(&auth).await?;

    Ok(HttpResponse::Ok().json(GenericResponse::success(
        "You have been logged out successfully",
    )))
}
