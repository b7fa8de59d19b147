//! JWT utility functions

use super::types::{BEARER_PREFIX, Claims, TokenService};
use crate::utils::error::{Result, ServiceError};
use tracing::error;

impl TokenService {
    /// Strip the bearer prefix from a header or decoded cookie value
    ///
    /// The prefix match is exact and case-sensitive; nothing is decoded or
    /// verified here.
    pub fn strip_prefix(raw: &str) -> Result<&str> {
        if !raw.trim().is_empty() {
            if let Some(token) = raw.strip_prefix(BEARER_PREFIX) {
                return Ok(token);
            }
        }

        error!("Not Found Token");
        Err(ServiceError::MissingToken)
    }

    /// Get token lifetime in seconds
    pub fn lifetime(&self) -> u64 {
        self.lifetime
    }

    /// Seconds left before `claims` expire, `None` once expired
    pub fn time_until_expiry(&self, claims: &Claims) -> Option<u64> {
        let now = self.clock.now().ok()?;

        if claims.exp > now {
            Some(claims.exp - now)
        } else {
            None
        }
    }
}
