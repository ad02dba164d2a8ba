//! Application factory
//!
//! Registers state, the JSON body configuration and every route on a
//! `ServiceConfig`, so the binary and the tests build the same app.

use actix_web::{error::InternalError, web, HttpResponse, ResponseError};

use sg_core::repositories::{RevocationStore, UserRepository};
use sg_shared::{error_codes, GenericResponse};

use crate::handlers::error::ApiError;
use crate::middleware::auth::JwtAuth;
use crate::routes::{
    auth::{login::login, logout::logout},
    health::health_check,
    user::profile::profile,
    AppState,
};

/// Configure the application with all routes
///
/// ```text
/// GET  /health
/// POST /login
/// POST /user/logout    (bearer token required)
/// GET  /user/profile   (bearer token required)
/// ```
pub fn configure<U, R>(cfg: &mut web::ServiceConfig, state: web::Data<AppState<U, R>>)
where
    U: UserRepository + 'static,
    R: RevocationStore + 'static,
{
    let auth = JwtAuth::new(state.sessions.guard().clone());

    cfg.app_data(state)
        .app_data(json_config())
        .route("/health", web::get().to(health_check))
        .route("/login", web::post().to(login::<U, R>))
        .service(
            web::scope("/user")
                .wrap(auth)
                .route("/logout", web::post().to(logout::<U, R>))
                .route("/profile", web::get().to(profile::<U, R>)),
        )
        .default_service(web::route().to(not_found));
}

/// Unparseable JSON bodies are answered with a generic 400
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        InternalError::from_response(err, ApiError::InvalidBody.error_response()).into()
    })
}

async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(GenericResponse::failure(
        error_codes::NOT_FOUND,
        "The requested resource was not found",
    ))
}
