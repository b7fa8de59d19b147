//! JWT types and data structures

use crate::auth::clock::Clock;
use crate::auth::role::Role;
use jsonwebtoken::errors::{Error as JwtError, ErrorKind};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

/// Header (and cookie) name carrying the credential
pub const AUTHORIZATION_HEADER: &str = "Authorization";
/// Claim holding the role name
pub const AUTHORIZATION_KEY: &str = "auth";
/// Literal that precedes every compact token on the wire
pub const BEARER_PREFIX: &str = "Bearer ";
/// HS256 needs at least 256 bits of key material
pub const MIN_SECRET_BYTES: usize = 32;

/// HMAC-SHA256 key material derived from the configured secret
#[derive(Clone)]
pub struct SigningKey {
    pub(super) encoding: EncodingKey,
    pub(super) decoding: DecodingKey,
}

impl std::fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SigningKey([REDACTED])")
    }
}

/// Mints and verifies bearer tokens
///
/// Immutable after construction and safe to share across worker threads.
#[derive(Clone)]
pub struct TokenService {
    /// Signing key, never exposed outside this module
    pub(super) key: SigningKey,
    /// JWT algorithm
    pub(super) algorithm: Algorithm,
    /// Token lifetime in seconds
    pub(super) lifetime: u64,
    /// Source of issuance and expiry instants
    pub(super) clock: Arc<dyn Clock>,
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService")
            .field("algorithm", &self.algorithm)
            .field("lifetime", &self.lifetime)
            .field("key", &"[REDACTED]")
            .finish()
    }
}

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (username)
    pub sub: String,
    /// User role
    pub auth: Role,
    /// Issued at timestamp
    pub iat: u64,
    /// Expiration timestamp
    pub exp: u64,
}

/// Why a presented token was not accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum TokenRejection {
    /// Signature mismatch or malformed structure
    #[error("Invalid JWT signature")]
    InvalidSignature,
    /// Current instant is at or past `exp`
    #[error("Expired JWT token")]
    Expired,
    /// Algorithm or shape this service does not accept
    #[error("Unsupported JWT token")]
    Unsupported,
    /// Empty input
    #[error("JWT claims is empty")]
    Empty,
}

impl From<&JwtError> for TokenRejection {
    fn from(err: &JwtError) -> Self {
        match err.kind() {
            ErrorKind::ExpiredSignature => TokenRejection::Expired,
            ErrorKind::InvalidAlgorithm
            | ErrorKind::InvalidAlgorithmName
            | ErrorKind::MissingAlgorithm
            | ErrorKind::InvalidKeyFormat => TokenRejection::Unsupported,
            _ => TokenRejection::InvalidSignature,
        }
    }
}
