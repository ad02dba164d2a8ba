use actix_web::{web, HttpResponse};
use validator::Validate;

use sg_core::domain::entities::user::PROFILE_FIELD_ORDER;
use sg_core::errors::DomainError;
use sg_core::repositories::{RevocationStore, UserRepository};
use sg_shared::GenericResponse;

use crate::dto::LoginRequest;
use crate::handlers::error::ApiError;
use crate::routes::AppState;

use super::SESSION_TOKEN_HEADER;

/// Handler for POST /login
///
/// Registers the profile if the email is new, then issues a session token.
///
/// # Request Body
///
/// ```json
/// {
///     "email": "a@example.com",
///     "full_name": "Ada Lovelace"
/// }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// Token in the `X-JWT-APP` header, and:
/// ```json
/// {
///     "message": "You have been logged in successfully",
///     "status": true,
///     "timestamp": 1700000000
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Unparseable body, missing name or email
/// - 500 Internal Server Error: Token signing failure
pub async fn login<U, R>(
    state: web::Data<AppState<U, R>>,
    request: web::Json<LoginRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    R: RevocationStore + 'static,
{
    // Name is reported before email
    request
        .validate()
        .map_err(|e| DomainError::from_validation(&e, PROFILE_FIELD_ORDER))?;

    let token = state.sessions.login(request.into_inner().into()).await?;

    Ok(HttpResponse::Ok()
        .insert_header((SESSION_TOKEN_HEADER, token.as_str()))
        .json(GenericResponse::success("You have been logged in successfully")))
}
