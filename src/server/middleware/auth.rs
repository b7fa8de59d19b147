//! Authentication middleware

use crate::auth::Claims;
use crate::server::middleware::helpers::{
    authenticate, extract_credential, is_public_route, wants_html,
};
use crate::server::state::AppState;
use crate::utils::error::ServiceError;
use actix_web::body::{BoxBody, EitherBody};
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready};
use actix_web::{HttpMessage, HttpRequest, web};
use futures::future::{Ready, ready};
use std::future::Future;
use std::pin::Pin;
use tracing::{debug, error};

/// Auth middleware for Actix-web
///
/// Public routes pass through. Everything else needs a valid bearer token
/// from the `Authorization` header or cookie; the verified [`Claims`] are
/// stored in the request extensions.
pub struct AuthMiddleware;

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B, BoxBody>>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = AuthMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService { service }))
    }
}

/// Service implementation for auth middleware
pub struct AuthMiddlewareService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B, BoxBody>>;
    type Error = actix_web::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        if is_public_route(req.path()) {
            let fut = self.service.call(req);
            return Box::pin(async move { Ok(fut.await?.map_into_left_body()) });
        }

        let Some(state) = req.app_data::<web::Data<AppState>>().cloned() else {
            error!("Application state missing, rejecting {}", req.path());
            let err = ServiceError::internal("Missing application state");
            return Box::pin(async move { Ok(req.error_response(err).map_into_right_body()) });
        };

        let credential = extract_credential(req.request());

        match authenticate(&state.tokens, credential.as_deref()) {
            Ok(claims) => {
                debug!("Authenticated {} for {}", claims.sub, req.path());
                req.extensions_mut().insert(claims);

                let fut = self.service.call(req);
                Box::pin(async move { Ok(fut.await?.map_into_left_body()) })
            }
            Err(err) => {
                debug!("Rejected unauthenticated request to {}", req.path());
                let err = if wants_html(req.request()) {
                    ServiceError::LoginRequired
                } else {
                    err
                };

                Box::pin(async move { Ok(req.error_response(err).map_into_right_body()) })
            }
        }
    }
}

/// Claims stored by [`AuthMiddleware`] for this request
pub fn get_claims(req: &HttpRequest) -> Result<Claims, ServiceError> {
    req.extensions()
        .get::<Claims>()
        .cloned()
        .ok_or(ServiceError::MissingToken)
}
