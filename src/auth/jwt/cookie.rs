//! Cookie transport for bearer header values

use super::types::AUTHORIZATION_HEADER;
use crate::utils::error::{Result, ServiceError};
use actix_web::HttpResponse;
use actix_web::cookie::Cookie;
use tracing::{debug, error};
use url::form_urlencoded;

/// URL-encode a header value for use as a cookie value
///
/// Spaces come out as `%20` rather than `+`.
pub fn encode_cookie_value(header_value: &str) -> String {
    form_urlencoded::byte_serialize(header_value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

/// Reverse of [`encode_cookie_value`]
pub fn decode_cookie_value(raw: &str) -> Result<String> {
    let cookie = Cookie::parse_encoded(format!("{}={}", AUTHORIZATION_HEADER, raw))
        .map_err(|e| ServiceError::bad_request(format!("Malformed auth cookie: {}", e)))?;
    Ok(cookie.value().to_string())
}

/// Session cookie carrying the encoded header value, scoped to `/`
pub fn auth_cookie(header_value: &str) -> Cookie<'static> {
    Cookie::build(AUTHORIZATION_HEADER, encode_cookie_value(header_value))
        .path("/")
        .finish()
}

/// Attach the auth cookie to `response`
///
/// Failures are logged and swallowed; the response then carries no cookie.
pub fn bind_to_response(header_value: &str, response: &mut HttpResponse) {
    let cookie = auth_cookie(header_value);

    match response.add_cookie(&cookie) {
        Ok(()) => debug!("Auth cookie attached"),
        Err(e) => error!("Failed to attach auth cookie: {}", e),
    }
}
