//! Core JWT handler implementation

use super::types::{
    BEARER_PREFIX, Claims, MIN_SECRET_BYTES, SigningKey, TokenRejection, TokenService,
};
use crate::auth::clock::{Clock, SystemClock};
use crate::auth::role::Role;
use crate::config::JwtConfig;
use crate::utils::error::{Result, ServiceError};
use base64::Engine;
use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use std::sync::Arc;
use tracing::{debug, error};

impl SigningKey {
    /// Derive the HMAC key from a standard-base64 secret
    pub fn from_base64(secret: &str) -> Result<Self> {
        let secret = secret.trim();
        if secret.is_empty() {
            return Err(ServiceError::config("jwt.secret.key is missing or empty"));
        }

        let bytes = STANDARD.decode(secret).map_err(|e| {
            ServiceError::config(format!("jwt.secret.key is not valid base64: {}", e))
        })?;

        if bytes.len() < MIN_SECRET_BYTES {
            return Err(ServiceError::config(format!(
                "jwt.secret.key decodes to {} bytes; HS256 requires at least {}",
                bytes.len(),
                MIN_SECRET_BYTES
            )));
        }

        Ok(Self {
            encoding: EncodingKey::from_secret(&bytes),
            decoding: DecodingKey::from_secret(&bytes),
        })
    }
}

impl TokenService {
    /// Create a token service on the wall clock
    pub fn new(config: &JwtConfig) -> Result<Self> {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Create a token service reading time from `clock`
    pub fn with_clock(config: &JwtConfig, clock: Arc<dyn Clock>) -> Result<Self> {
        if config.token_lifetime_secs == 0 {
            return Err(ServiceError::config(
                "jwt.token_lifetime_secs must be greater than 0",
            ));
        }

        let key = SigningKey::from_base64(&config.secret.key)?;
        debug!(
            "Token service ready (HS256, lifetime {}s)",
            config.token_lifetime_secs
        );

        Ok(Self {
            key,
            algorithm: Algorithm::HS256,
            lifetime: config.token_lifetime_secs,
            clock,
        })
    }

    /// Mint a token for `subject` and return it as a bearer header value
    pub fn mint(&self, subject: &str, role: Role) -> Result<String> {
        if subject.is_empty() {
            return Err(ServiceError::validation("Token subject cannot be empty"));
        }

        let now = self.clock.now()?;
        let claims = Claims {
            sub: subject.to_string(),
            auth: role,
            iat: now,
            exp: now.saturating_add(self.lifetime),
        };

        let header = Header::new(self.algorithm);
        let token = encode(&header, &claims, &self.key.encoding)?;

        debug!("Created access token for user: {}", subject);
        Ok(format!("{}{}", BEARER_PREFIX, token))
    }

    /// Verify a compact token and return its claims, without logging
    pub fn verify(&self, token: &str) -> std::result::Result<Claims, TokenRejection> {
        if token.trim().is_empty() {
            return Err(TokenRejection::Empty);
        }

        if let Some(alg) = header_algorithm(token) {
            if alg != "HS256" {
                return Err(TokenRejection::Unsupported);
            }
        }

        let mut validation = Validation::new(self.algorithm);
        // Expiry is judged against our own clock below
        validation.validate_exp = false;
        validation.leeway = 0;

        let token_data = decode::<Claims>(token, &self.key.decoding, &validation)
            .map_err(|e| TokenRejection::from(&e))?;

        // An unreadable clock counts as expired
        let now = self.clock.now().map_err(|_| TokenRejection::Expired)?;
        if now >= token_data.claims.exp {
            return Err(TokenRejection::Expired);
        }

        Ok(token_data.claims)
    }

    /// Verify a token, logging the reason on failure
    pub fn validated_claims(&self, token: &str) -> Option<Claims> {
        match self.verify(token) {
            Ok(claims) => {
                debug!("Token verified for user: {}", claims.sub);
                Some(claims)
            }
            Err(reason) => {
                error!(reason = ?reason, "{}", reason);
                None
            }
        }
    }

    /// True iff the token is correctly signed and not yet expired
    pub fn validate(&self, token: &str) -> bool {
        self.validated_claims(token).is_some()
    }

    /// Decode the claims of a token already accepted by [`TokenService::validate`]
    pub fn claims(&self, token: &str) -> Result<Claims> {
        Ok(self.verify(token)?)
    }
}

/// `alg` from the token header, when the header segment is readable
fn header_algorithm(token: &str) -> Option<String> {
    let segment = token.split('.').next()?;
    let bytes = URL_SAFE_NO_PAD.decode(segment).ok()?;
    let header: serde_json::Value = serde_json::from_slice(&bytes).ok()?;
    header.get("alg")?.as_str().map(str::to_string)
}
