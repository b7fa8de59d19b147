//! Authentication
//!
//! Bearer-token minting, transport, and verification, plus the role and
//! clock types the tokens depend on.

pub mod clock;
pub mod jwt;
pub mod role;

pub use clock::{Clock, ManualClock, SystemClock};
pub use jwt::{
    AUTHORIZATION_HEADER, AUTHORIZATION_KEY, BEARER_PREFIX, Claims, SigningKey, TokenRejection,
    TokenService, auth_cookie, bind_to_response, decode_cookie_value, encode_cookie_value,
};
pub use role::Role;
