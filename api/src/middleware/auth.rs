//! Bearer authentication middleware for protecting API endpoints.
//!
//! Extracts the token from the `Authorization` header, runs it through the
//! [`AuthGuard`] and attaches the resulting [`Authenticated`] context to the
//! request. Rejections are answered here; the wrapped handler never runs.

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::header::AUTHORIZATION,
    Error, FromRequest, HttpMessage, HttpRequest, ResponseError,
};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    task::{Context, Poll},
};

use sg_core::domain::value_objects::AuthContext;
use sg_core::errors::AuthError;
use sg_core::repositories::{RevocationStore, UserRepository};
use sg_core::services::AuthGuard;

use crate::handlers::error::ApiError;

/// Identity of the caller on a guarded route
#[derive(Debug, Clone)]
pub struct Authenticated(pub AuthContext);

impl std::ops::Deref for Authenticated {
    type Target = AuthContext;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// JWT authentication middleware factory
pub struct JwtAuth<U, R>
where
    U: UserRepository,
    R: RevocationStore,
{
    guard: AuthGuard<U, R>,
}

impl<U, R> JwtAuth<U, R>
where
    U: UserRepository,
    R: RevocationStore,
{
    pub fn new(guard: AuthGuard<U, R>) -> Self {
        Self { guard }
    }
}

impl<S, B, U, R> Transform<S, ServiceRequest> for JwtAuth<U, R>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
    U: UserRepository + 'static,
    R: RevocationStore + 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S, U, R>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
            guard: self.guard.clone(),
        }))
    }
}

/// JWT authentication middleware service
pub struct JwtAuthMiddleware<S, U, R>
where
    U: UserRepository,
    R: RevocationStore,
{
    service: Rc<S>,
    guard: AuthGuard<U, R>,
}

impl<S, B, U, R> Service<ServiceRequest> for JwtAuthMiddleware<S, U, R>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
    U: UserRepository + 'static,
    R: RevocationStore + 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let guard = self.guard.clone();

        Box::pin(async move {
            let token = extract_bearer_token(req.request());

            let context = match guard.authenticate(token.as_deref()).await {
                Ok(context) => context,
                Err(error) => {
                    let response = ApiError::from(error).error_response();
                    return Ok(req.into_response(response).map_into_right_body());
                }
            };

            req.extensions_mut().insert(Authenticated(context));

            service.call(req).await.map(ServiceResponse::map_into_left_body)
        })
    }
}

/// Extracts the token from `Authorization: Bearer <token>`
///
/// Any other scheme counts as no credential.
pub fn extract_bearer_token(req: &HttpRequest) -> Option<String> {
    let value = req.headers().get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.trim().split_once(' ')?;

    if !scheme.eq_ignore_ascii_case("Bearer") {
        return None;
    }
    Some(token.trim().to_string())
}

/// Extractor for required authentication
impl FromRequest for Authenticated {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<Authenticated>()
            .cloned()
            .ok_or_else(|| ApiError::from(AuthError::MissingCredential));

        ready(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn test_extract_bearer_token() {
        let req = TestRequest::default()
            .insert_header((AUTHORIZATION, "Bearer test_token_123"))
            .to_http_request();
        assert_eq!(extract_bearer_token(&req), Some("test_token_123".to_string()));

        let req = TestRequest::default()
            .insert_header((AUTHORIZATION, "bearer   spaced"))
            .to_http_request();
        assert_eq!(extract_bearer_token(&req), Some("spaced".to_string()));
    }

    #[test]
    fn test_non_bearer_schemes_are_ignored() {
        let req = TestRequest::default()
            .insert_header((AUTHORIZATION, "Basic dXNlcjpwYXNz"))
            .to_http_request();
        assert_eq!(extract_bearer_token(&req), None);

        let req = TestRequest::default()
            .insert_header((AUTHORIZATION, "Bearer"))
            .to_http_request();
        assert_eq!(extract_bearer_token(&req), None);

        let req = TestRequest::default().to_http_request();
        assert_eq!(extract_bearer_token(&req), None);
    }
}
