//! JWT token handling
//!
//! This module provides bearer-token minting, cookie transport, and
//! verification over a single HS256 signing key.

mod cookie;
mod handler;
pub mod types;
mod utils;

pub use cookie::{auth_cookie, bind_to_response, decode_cookie_value, encode_cookie_value};
pub use types::{
    AUTHORIZATION_HEADER, AUTHORIZATION_KEY, BEARER_PREFIX, Claims, MIN_SECRET_BYTES,
    SigningKey, TokenRejection, TokenService,
};
