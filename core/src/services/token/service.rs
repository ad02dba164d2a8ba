//! Main token service implementation

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::Utc;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::Deserialize;
use tracing::{debug, error};

use crate::domain::entities::token::{Claims, SessionToken, JWT_ALGORITHM};
use crate::errors::{DomainError, TokenError};

use super::config::TokenServiceConfig;

/// Only the algorithm is read from the header before verification
#[derive(Deserialize)]
struct RawHeader {
    alg: String,
}

/// Service for minting and parsing session tokens
///
/// Holds the signing keys derived once from the configured secret. The
/// service is read-only after construction and is shared behind an `Arc`.
pub struct TokenService {
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service instance
    ///
    /// # Arguments
    ///
    /// * `config` - Token service configuration
    ///
    /// # Returns
    ///
    /// A new `TokenService`, or a configuration error when the secret is empty
    pub fn new(config: TokenServiceConfig) -> Result<Self, DomainError> {
        config.validate()?;

        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.validate_exp = true;
        validation.validate_nbf = true;
        validation.validate_aud = false;
        validation.set_issuer(&[config.issuer.as_str()]);
        validation.set_required_spec_claims(&["exp", "nbf", "iss"]);

        Ok(Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        })
    }

    pub fn config(&self) -> &TokenServiceConfig {
        &self.config
    }

    /// Mints a session token for a subject
    ///
    /// # Arguments
    ///
    /// * `subject` - Identity key placed in the `email` claim
    ///
    /// # Returns
    ///
    /// * `Ok(SessionToken)` - Encoded token and the claims it carries
    /// * `Err(TokenError::TokenGenerationFailed)` - Signing failed or the
    ///   window overflowed
    pub fn mint(&self, subject: &str) -> Result<SessionToken, TokenError> {
        let claims = Claims::issue(
            subject,
            self.config.issuer.as_str(),
            Utc::now(),
            self.config.session_lifetime,
            self.config.not_before_skew,
        )
        .map_err(|e| {
            error!("Session window is outside the representable time range");
            e
        })?;
        let token = self.encode_claims(&claims)?;

        debug!(token_id = %claims.jti, "Minted session token");
        Ok(SessionToken::new(token, claims))
    }

    /// Parses and verifies a session token
    ///
    /// The declared algorithm is checked before the signature, so a token
    /// claiming `none` or any non-HS256 algorithm never reaches verification.
    ///
    /// # Returns
    ///
    /// * `Ok(Claims)` - Signature valid and now lies within `[nbf, exp)`
    /// * `Err(TokenError)` - The specific reason the token was rejected
    pub fn parse(&self, token: &str) -> Result<Claims, TokenError> {
        Self::check_declared_algorithm(token)?;

        let data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                ErrorKind::InvalidSignature => TokenError::BadSignature,
                ErrorKind::ExpiredSignature => TokenError::TokenExpired,
                ErrorKind::ImmatureSignature => TokenError::TokenNotYetValid,
                ErrorKind::InvalidAlgorithm => TokenError::UnexpectedSigningAlgorithm,
                _ => TokenError::MalformedToken,
            })?;
        let claims = data.claims;

        // The library accepts exp == now; the window is half-open
        if claims.is_expired_at(Utc::now().timestamp()) {
            return Err(TokenError::TokenExpired);
        }
        if claims.jti.is_empty() || claims.email.is_empty() {
            return Err(TokenError::MalformedToken);
        }

        Ok(claims)
    }

    /// Encodes claims as an HS256 token
    pub(crate) fn encode_claims(&self, claims: &Claims) -> Result<String, TokenError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key).map_err(|e| {
            error!(error = %e, "Failed to sign session token");
            TokenError::TokenGenerationFailed
        })
    }

    fn check_declared_algorithm(token: &str) -> Result<(), TokenError> {
        let mut segments = token.split('.');
        let header = match (segments.next(), segments.next(), segments.next(), segments.next()) {
            (Some(header), Some(_), Some(_), None) => header,
            _ => return Err(TokenError::MalformedToken),
        };

        let bytes = URL_SAFE_NO_PAD
            .decode(header)
            .map_err(|_| TokenError::MalformedToken)?;
        let header: RawHeader =
            serde_json::from_slice(&bytes).map_err(|_| TokenError::MalformedToken)?;

        if header.alg != JWT_ALGORITHM {
            debug!(alg = %header.alg, "Rejected token with unexpected signing algorithm");
            return Err(TokenError::UnexpectedSigningAlgorithm);
        }
        Ok(())
    }
}
