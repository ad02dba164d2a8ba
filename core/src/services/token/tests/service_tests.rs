//! Unit tests for token service

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde_json::json;
use sg_shared::config::JwtConfig;

use crate::domain::entities::token::{Claims, JWT_ISSUER};
use crate::errors::{DomainError, TokenError};
use crate::services::token::{TokenService, TokenServiceConfig};

const SECRET: &str = "test-signing-secret";

fn create_service(secret: &str) -> TokenService {
    TokenService::new(TokenServiceConfig::new(secret)).unwrap()
}

fn claims_with_window(nbf_offset: i64, exp_offset: i64) -> Claims {
    let now = Utc::now().timestamp();
    Claims {
        jti: "a3f2c7d0-0000-4000-8000-000000000001".to_string(),
        email: "a@example.com".to_string(),
        iss: JWT_ISSUER.to_string(),
        nbf: now + nbf_offset,
        exp: now + exp_offset,
    }
}

fn with_header(token: &str, header: serde_json::Value) -> String {
    let mut parts = token.splitn(2, '.');
    parts.next();
    let rest = parts.next().unwrap();
    format!("{}.{}", URL_SAFE_NO_PAD.encode(header.to_string()), rest)
}

#[test]
fn test_empty_secret_is_rejected_at_construction() {
    let result = TokenService::new(TokenServiceConfig::new(""));
    assert!(matches!(result, Err(DomainError::Configuration { .. })));
}

#[test]
fn test_oversized_lifetime_is_rejected_at_construction() {
    let result = TokenService::new(
        TokenServiceConfig::new(SECRET).with_session_lifetime(Duration::days(365 * 1000)),
    );
    assert!(matches!(result, Err(DomainError::Configuration { .. })));
}

#[test]
fn test_out_of_range_jwt_config_does_not_panic() {
    let config = JwtConfig::new(SECRET).with_session_lifetime_hours(1_000_000_000_000);
    let result = TokenServiceConfig::try_from(&config);
    assert!(matches!(result, Err(DomainError::Configuration { .. })));

    let config = JwtConfig::new(SECRET).with_session_lifetime_hours(i64::MAX);
    let result = TokenServiceConfig::try_from(&config);
    assert!(matches!(result, Err(DomainError::Configuration { .. })));

    let config = JwtConfig::new(SECRET).with_not_before_skew_seconds(i64::MAX);
    let result = TokenServiceConfig::try_from(&config);
    assert!(matches!(result, Err(DomainError::Configuration { .. })));
}

#[test]
fn test_jwt_config_converts_to_token_config() {
    let config = JwtConfig::new(SECRET)
        .with_session_lifetime_hours(24)
        .with_not_before_skew_seconds(5);
    let token_config = TokenServiceConfig::try_from(&config).unwrap();

    assert_eq!(token_config.session_lifetime, Duration::hours(24));
    assert_eq!(token_config.not_before_skew, Duration::seconds(5));
    assert_eq!(token_config.issuer, JWT_ISSUER);
}

#[test]
fn test_mint_then_parse_round_trip() {
    let service = create_service(SECRET);

    let token = service.mint("a@example.com").unwrap();
    let claims = service.parse(token.as_str()).unwrap();

    assert_eq!(claims.subject(), "a@example.com");
    assert_eq!(claims.token_id(), token.token_id());
    assert_eq!(claims.iss, JWT_ISSUER);
    assert_eq!(token.as_str().split('.').count(), 3);
}

#[test]
fn test_minted_window_matches_config() {
    let service = TokenService::new(
        TokenServiceConfig::new(SECRET)
            .with_session_lifetime(Duration::hours(2))
            .with_not_before_skew(Duration::seconds(5)),
    )
    .unwrap();

    let token = service.mint("a@example.com").unwrap();
    let claims = &token.claims;

    assert_eq!(claims.exp - claims.nbf, 2 * 3600 + 5);
}

#[test]
fn test_every_mint_has_a_fresh_token_id() {
    let service = create_service(SECRET);

    let first = service.mint("a@example.com").unwrap();
    let second = service.mint("a@example.com").unwrap();

    assert_ne!(first.token_id(), second.token_id());
    assert_ne!(first.as_str(), second.as_str());
}

#[test]
fn test_wrong_secret_is_bad_signature() {
    let issuer = create_service("secret-one");
    let verifier = create_service("secret-two");

    let token = issuer.mint("a@example.com").unwrap();

    assert_eq!(verifier.parse(token.as_str()), Err(TokenError::BadSignature));
}

#[test]
fn test_tampered_payload_is_bad_signature() {
    let service = create_service(SECRET);
    let token = service.mint("a@example.com").unwrap();

    let parts: Vec<&str> = token.as_str().split('.').collect();
    let mut forged = claims_with_window(-1, 3600);
    forged.email = "mallory@example.com".to_string();
    let payload = URL_SAFE_NO_PAD.encode(serde_json::to_vec(&forged).unwrap());
    let tampered = format!("{}.{}.{}", parts[0], payload, parts[2]);

    assert_eq!(service.parse(&tampered), Err(TokenError::BadSignature));
}

#[test]
fn test_expired_token() {
    let service = create_service(SECRET);
    let token = service.encode_claims(&claims_with_window(-7200, -60)).unwrap();

    assert_eq!(service.parse(&token), Err(TokenError::TokenExpired));
}

#[test]
fn test_token_expiring_now_is_rejected() {
    let service = create_service(SECRET);
    let token = service.encode_claims(&claims_with_window(-60, 0)).unwrap();

    assert_eq!(service.parse(&token), Err(TokenError::TokenExpired));
}

#[test]
fn test_not_yet_valid_token() {
    let service = create_service(SECRET);
    let token = service.encode_claims(&claims_with_window(600, 3600)).unwrap();

    assert_eq!(service.parse(&token), Err(TokenError::TokenNotYetValid));
}

#[test]
fn test_none_algorithm_is_rejected_before_verification() {
    let service = create_service(SECRET);
    let token = service.mint("a@example.com").unwrap();

    let forged = with_header(token.as_str(), json!({"alg": "none", "typ": "JWT"}));
    assert_eq!(service.parse(&forged), Err(TokenError::UnexpectedSigningAlgorithm));

    // Unsigned form with an empty signature segment
    let parts: Vec<&str> = forged.split('.').collect();
    let unsigned = format!("{}.{}.", parts[0], parts[1]);
    assert_eq!(service.parse(&unsigned), Err(TokenError::UnexpectedSigningAlgorithm));
}

#[test]
fn test_other_hmac_algorithm_is_rejected() {
    let service = create_service(SECRET);
    let token = encode(
        &Header::new(Algorithm::HS384),
        &claims_with_window(-1, 3600),
        &EncodingKey::from_secret(SECRET.as_bytes()),
    )
    .unwrap();

    assert_eq!(service.parse(&token), Err(TokenError::UnexpectedSigningAlgorithm));
}

#[test]
fn test_structurally_broken_tokens_are_malformed() {
    let service = create_service(SECRET);

    for token in ["", "garbage", "a.b", "a.b.c.d", "!!!.e30.sig", "e30.e30.sig"] {
        assert_eq!(
            service.parse(token),
            Err(TokenError::MalformedToken),
            "token {:?}",
            token
        );
    }
}

#[test]
fn test_missing_claim_is_malformed() {
    let service = create_service(SECRET);
    let now = Utc::now().timestamp();
    let payload = json!({
        "email": "a@example.com",
        "iss": JWT_ISSUER,
        "nbf": now - 1,
        "exp": now + 3600
    });
    let token = encode(
        &Header::new(Algorithm::HS256),
        &payload,
        &EncodingKey::from_secret(SECRET.as_bytes()),
    )
    .unwrap();

    assert_eq!(service.parse(&token), Err(TokenError::MalformedToken));
}

#[test]
fn test_claim_with_wrong_type_is_malformed() {
    let service = create_service(SECRET);
    let now = Utc::now().timestamp();
    let payload = json!({
        "jti": "id",
        "email": ["a@example.com"],
        "iss": JWT_ISSUER,
        "nbf": now - 1,
        "exp": now + 3600
    });
    let token = encode(
        &Header::new(Algorithm::HS256),
        &payload,
        &EncodingKey::from_secret(SECRET.as_bytes()),
    )
    .unwrap();

    assert_eq!(service.parse(&token), Err(TokenError::MalformedToken));
}

#[test]
fn test_foreign_issuer_is_malformed() {
    let service = create_service(SECRET);
    let mut claims = claims_with_window(-1, 3600);
    claims.iss = "someone-else".to_string();
    let token = service.encode_claims(&claims).unwrap();

    assert_eq!(service.parse(&token), Err(TokenError::MalformedToken));
}

#[test]
fn test_empty_subject_is_malformed() {
    let service = create_service(SECRET);
    let mut claims = claims_with_window(-1, 3600);
    claims.email = String::new();
    let token = service.encode_claims(&claims).unwrap();

    assert_eq!(service.parse(&token), Err(TokenError::MalformedToken));
}

#[test]
fn test_config_debug_hides_secret() {
    let config = TokenServiceConfig::new(SECRET);
    assert!(!format!("{:?}", config).contains(SECRET));
}
