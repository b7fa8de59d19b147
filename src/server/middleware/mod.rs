//! HTTP middleware implementations
//!
//! Bearer-token authentication and the route classification it relies on.

mod auth;
mod helpers;


pub use auth::{AuthMiddleware, AuthMiddlewareService, get_claims};
pub use helpers::{
    STATIC_RESOURCE_PREFIXES, authenticate, extract_credential, is_public_route,
    is_static_resource, wants_html,
};
