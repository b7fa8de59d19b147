//! Helper functions for middleware

use crate::auth::{AUTHORIZATION_HEADER, BEARER_PREFIX, Claims, TokenService};
use crate::utils::error::{Result, ServiceError};
use actix_web::HttpRequest;
use actix_web::http::header;

/// Static asset locations served without authentication
pub const STATIC_RESOURCE_PREFIXES: &[&str] =
    &["/css", "/js", "/images", "/webjars", "/favicon.ico"];

/// Routes that never require a token
const PUBLIC_ROUTES: &[&str] = &["/login", "/health"];

fn matches_prefix(path: &str, prefix: &str) -> bool {
    path == prefix
        || path
            .strip_prefix(prefix)
            .is_some_and(|rest| rest.starts_with('/'))
}

/// Check if a path points at a static asset
pub fn is_static_resource(path: &str) -> bool {
    STATIC_RESOURCE_PREFIXES
        .iter()
        .any(|prefix| matches_prefix(path, prefix))
}

/// Check if a route is public (doesn't require authentication)
pub fn is_public_route(path: &str) -> bool {
    is_static_resource(path) || PUBLIC_ROUTES.iter().any(|route| matches_prefix(path, route))
}

/// Raw credential from the `Authorization` header, else the URL-decoded
/// `Authorization` cookie
///
/// A header without the bearer prefix does not shadow the cookie.
pub fn extract_credential(req: &HttpRequest) -> Option<String> {
    let header_value = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    if let Some(value) = header_value {
        if value.starts_with(BEARER_PREFIX) {
            return Some(value.to_string());
        }
    }

    // actix percent-decodes cookie values on parse
    req.cookie(AUTHORIZATION_HEADER)
        .map(|cookie| cookie.value().to_string())
        .or_else(|| header_value.map(str::to_string))
}

/// Check whether the client asked for an HTML page
pub fn wants_html(req: &HttpRequest) -> bool {
    req.headers()
        .get(header::ACCEPT)
        .and_then(|h| h.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// Turn a raw credential into verified claims
pub fn authenticate(tokens: &TokenService, raw: Option<&str>) -> Result<Claims> {
    let token = TokenService::strip_prefix(raw.unwrap_or_default())?;

    tokens
        .validated_claims(token)
        .ok_or_else(|| ServiceError::unauthorized("Invalid or expired token"))
}
