//! Token service integration tests
//!
//! Mint, read, and reject tokens through the public API, checking both
//! the outcome and the diagnostic each rejection logs.

#[cfg(test)]
mod tests {
    use crate::common::assertions::ClaimsAssertions;
    use crate::common::fixtures::token_service_with;
    use crate::common::{OTHER_SECRET, T0, capture_logs, token_service_at};
    use crate::{assert_err, assert_ok};
    use actix_web::HttpResponse;
    use actix_web::http::header;
    use base64::Engine;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use bearer_gate::auth::{bind_to_response, decode_cookie_value, encode_cookie_value};
    use bearer_gate::{JwtConfig, Role, ServiceError, TokenRejection, TokenService};

    fn replace_char(token: &str, index: usize) -> String {
        let mut chars: Vec<char> = token.chars().collect();
        chars[index] = if chars[index] == 'A' { 'Q' } else { 'A' };
        chars.into_iter().collect()
    }

    // ==================== Happy Path ====================

    #[test]
    fn test_mint_validate_claims() {
        let (tokens, _) = token_service_at(T0);

        let header_value = assert_ok!(tokens.mint("alice", Role::User));
        assert!(header_value.starts_with("Bearer "));

        let token = assert_ok!(TokenService::strip_prefix(&header_value));
        assert!(tokens.validate(token));

        let claims = assert_ok!(tokens.claims(token));
        claims.assert_identity("alice", Role::User);
        claims.assert_window(T0, 3600);
        assert_eq!(claims.auth.as_str(), "USER");
    }

    #[test]
    fn test_payload_uses_role_name() {
        let (tokens, _) = token_service_at(T0);
        let header_value = assert_ok!(tokens.mint("root", Role::Admin));
        let token = assert_ok!(TokenService::strip_prefix(&header_value));

        let payload = token.split('.').nth(1).unwrap();
        let json: serde_json::Value =
            serde_json::from_slice(&URL_SAFE_NO_PAD.decode(payload).unwrap()).unwrap();

        assert_eq!(json["sub"], "root");
        assert_eq!(json["auth"], "ADMIN");
        assert_eq!(json["iat"], T0);
        assert_eq!(json["exp"], T0 + 3600);
    }

    #[test]
    fn test_round_trip_for_many_subjects() {
        let (tokens, _) = token_service_at(T0);
        let long = "x".repeat(512);

        for subject in ["a", "alice@example.com", "ünïcødé", "with space", long.as_str()] {
            for role in [Role::User, Role::Admin] {
                let header_value = assert_ok!(tokens.mint(subject, role));
                let token = assert_ok!(TokenService::strip_prefix(&header_value));
                assert!(tokens.validate(token));
                assert_ok!(tokens.claims(token)).assert_identity(subject, role);
            }
        }
    }

    // ==================== Expiry ====================

    #[test]
    fn test_valid_until_lifetime_elapses() {
        let (tokens, clock) = token_service_at(T0);
        let header_value = assert_ok!(tokens.mint("alice", Role::User));
        let token = assert_ok!(TokenService::strip_prefix(&header_value));

        for delta in [0, 1, 1800, 3599] {
            clock.set(T0 + delta);
            assert!(tokens.validate(token), "expected valid at +{}s", delta);
        }
        for delta in [3600, 3601, 7200] {
            clock.set(T0 + delta);
            assert!(!tokens.validate(token), "expected expired at +{}s", delta);
        }
    }

    #[test]
    fn test_expired_token_logs_reason() {
        let (tokens, clock) = token_service_at(T0);
        let header_value = assert_ok!(tokens.mint("alice", Role::User));
        let token = assert_ok!(TokenService::strip_prefix(&header_value)).to_string();

        clock.set(1_700_003_601);
        let (valid, logs) = capture_logs(|| tokens.validate(&token));

        assert!(!valid);
        assert!(logs.contains("Expired JWT token"), "logs: {}", logs.contents());
        assert_eq!(logs.errors().len(), 1);
    }

    // ==================== Signature Binding ====================

    #[test]
    fn test_tampered_signature_logs_reason() {
        let (tokens, _) = token_service_at(T0);
        let header_value = assert_ok!(tokens.mint("alice", Role::User));
        let token = assert_ok!(TokenService::strip_prefix(&header_value));

        let tampered = replace_char(token, token.len() - 1);
        let (valid, logs) = capture_logs(|| tokens.validate(&tampered));

        assert!(!valid);
        assert!(logs.contains("Invalid JWT signature"), "logs: {}", logs.contents());
        assert!(matches!(tokens.verify(&tampered), Err(TokenRejection::InvalidSignature)));
    }

    #[test]
    fn test_any_payload_or_signature_change_is_rejected() {
        let (tokens, _) = token_service_at(T0);
        let header_value = assert_ok!(tokens.mint("alice", Role::User));
        let token = assert_ok!(TokenService::strip_prefix(&header_value));

        let payload_start = token.find('.').unwrap() + 1;
        for index in payload_start..token.len() {
            if token.as_bytes()[index] == b'.' {
                continue;
            }
            let tampered = replace_char(token, index);
            assert!(!tokens.validate(&tampered), "mutation at {} accepted", index);
        }
    }

    #[test]
    fn test_key_binding() {
        let (k1, _) = token_service_at(T0);
        let (k2, _) = token_service_with(OTHER_SECRET, T0);

        let header_value = assert_ok!(k1.mint("alice", Role::User));
        let token = assert_ok!(TokenService::strip_prefix(&header_value));

        assert!(k1.validate(token));
        assert!(!k2.validate(token));
    }

    // ==================== Malformed Input ====================

    #[test]
    fn test_malformed_and_empty_tokens() {
        let (tokens, _) = token_service_at(T0);

        assert!(!tokens.validate("abc.def.ghi"));
        assert!(!tokens.validate("not-a-token"));

        let (valid, logs) = capture_logs(|| tokens.validate(""));
        assert!(!valid);
        assert!(logs.contains("JWT claims is empty"));
    }

    #[test]
    fn test_claims_reports_rejection() {
        let (tokens, clock) = token_service_at(T0);
        let header_value = assert_ok!(tokens.mint("alice", Role::User));
        let token = assert_ok!(TokenService::strip_prefix(&header_value));

        clock.advance(3600);
        let err = assert_err!(tokens.claims(token));
        assert!(matches!(err, ServiceError::Token(TokenRejection::Expired)));
    }

    // ==================== Prefix Discipline ====================

    #[test]
    fn test_strip_prefix() {
        assert_eq!(assert_ok!(TokenService::strip_prefix("Bearer x")), "x");

        for raw in ["x", "", "bearer x", "   "] {
            let err = assert_err!(TokenService::strip_prefix(raw));
            assert!(matches!(err, ServiceError::MissingToken), "input {:?}", raw);
        }
    }

    #[test]
    fn test_missing_prefix_logs_reason() {
        let (result, logs) =
            capture_logs(|| TokenService::strip_prefix("abc.def.ghi").map(str::to_string));

        assert!(matches!(result, Err(ServiceError::MissingToken)));
        assert!(logs.contains("Not Found Token"));
    }

    // ==================== Cookie Transport ====================

    #[test]
    fn test_bind_to_response_encodes_value() {
        let mut response = HttpResponse::Ok().finish();
        bind_to_response("Bearer a b+c", &mut response);

        let cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|v| v.to_str().ok())
            .unwrap();
        assert_eq!(cookie, "Authorization=Bearer%20a%20b%2Bc; Path=/");
    }

    #[test]
    fn test_cookie_value_round_trip() {
        let (tokens, _) = token_service_at(T0);
        let minted = assert_ok!(tokens.mint("alice", Role::Admin));

        for header_value in [minted.as_str(), "Bearer a b+c", "Bearer -_.~="] {
            let encoded = encode_cookie_value(header_value);
            assert!(!encoded.contains(' '));
            assert_eq!(assert_ok!(decode_cookie_value(&encoded)), header_value);
        }
    }

    #[test]
    fn test_cookie_token_validates() {
        let (tokens, _) = token_service_at(T0);
        let header_value = assert_ok!(tokens.mint("alice", Role::User));

        let decoded = assert_ok!(decode_cookie_value(&encode_cookie_value(&header_value)));
        let token = assert_ok!(TokenService::strip_prefix(&decoded));
        assert!(tokens.validate(token));
    }

    // ==================== Startup ====================

    #[test]
    fn test_empty_secret_fails_construction() {
        let err = assert_err!(TokenService::new(&JwtConfig::with_secret("")));
        assert!(matches!(err, ServiceError::Config(_)));
    }

    #[test]
    fn test_short_secret_fails_construction() {
        // base64("too-short")
        let err = assert_err!(TokenService::new(&JwtConfig::with_secret("dG9vLXNob3J0")));
        assert!(err.to_string().contains("at least 32"));
    }
}
