//! Custom test assertions

use bearer_gate::{Claims, Role};

/// Assertions for decoded claims
pub trait ClaimsAssertions {
    /// Assert subject and role
    fn assert_identity(&self, subject: &str, role: Role);

    /// Assert the token was issued at `iat` and lives `lifetime` seconds
    fn assert_window(&self, iat: u64, lifetime: u64);
}

impl ClaimsAssertions for Claims {
    fn assert_identity(&self, subject: &str, role: Role) {
        assert_eq!(self.sub, subject, "unexpected subject");
        assert_eq!(self.auth, role, "unexpected role");
    }

    fn assert_window(&self, iat: u64, lifetime: u64) {
        assert_eq!(self.iat, iat, "unexpected issued-at");
        assert_eq!(
            self.exp - self.iat,
            lifetime,
            "expected a {}s lifetime, got {}s",
            lifetime,
            self.exp - self.iat
        );
    }
}
