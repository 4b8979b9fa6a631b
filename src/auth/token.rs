//! Access-token contract: claims, signing, verification.
//!
//! A token is valid iff its signature verifies against the process-wide
//! secret AND the clock reading is strictly before `exp`. Expiry is checked
//! explicitly against an injected clock rather than by the JWT library, so
//! the boundary is exact (no leeway) and testable without sleeping.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, TokenData, Validation,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::{CmsError, CmsResult};

/// The fixed scope claim carried by every issued token.
pub const ADMIN_ROLE: &str = "admin";

/// Claims of an admin access token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (principal email).
    pub sub: String,
    /// Fixed scope claim.
    pub role: String,
    /// Issued-at time (Unix timestamp).
    pub iat: i64,
    /// Expiration time (Unix timestamp).
    pub exp: i64,
    /// Issuer.
    pub iss: String,
}

/// A freshly minted token string plus its decoded claims.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub claims: Claims,
}

/// Internal verification failure taxonomy.
///
/// Callers collapse every variant into the same Deny outcome; the variants
/// exist for logging, never for the response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("no token attached")]
    Missing,
    #[error("token is malformed")]
    Malformed,
    #[error("token signature does not verify")]
    BadSignature,
    #[error("token has expired")]
    Expired,
}

/// Token signing and verification against the shared secret.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    issuer: String,
    /// Token validity duration in hours.
    ttl_hours: i64,
}

impl TokenService {
    /// Create a new token service with the given secret.
    pub fn new(secret: &str, issuer: String, ttl_hours: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            issuer,
            ttl_hours,
        }
    }

    /// Get token validity in hours.
    pub fn ttl_hours(&self) -> i64 {
        self.ttl_hours
    }

    /// Sign a token for a subject, stamped at the current time.
    pub fn issue(&self, subject: &str) -> CmsResult<IssuedToken> {
        self.issue_at(subject, Utc::now())
    }

    /// Sign a token for a subject, stamped at an explicit instant.
    pub fn issue_at(&self, subject: &str, now: DateTime<Utc>) -> CmsResult<IssuedToken> {
        let exp = now + Duration::hours(self.ttl_hours);

        let claims = Claims {
            sub: subject.to_string(),
            role: ADMIN_ROLE.to_string(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
            iss: self.issuer.clone(),
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| CmsError::Infrastructure(format!("Failed to sign token: {}", e)))?;

        Ok(IssuedToken { token, claims })
    }

    /// Verify signature and expiry against an explicit clock reading.
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, TokenError> {
        if token.is_empty() {
            return Err(TokenError::Missing);
        }

        // Expiry is ours to check, strictly and without leeway.
        let mut validation = Validation::default();
        validation.set_issuer(&[&self.issuer]);
        validation.validate_exp = false;

        let token_data: TokenData<Claims> = decode(token, &self.decoding_key, &validation)
            .map_err(|e| match e.kind() {
                ErrorKind::InvalidSignature => TokenError::BadSignature,
                _ => TokenError::Malformed,
            })?;

        if now.timestamp() >= token_data.claims.exp {
            return Err(TokenError::Expired);
        }

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> TokenService {
        TokenService::new(
            "0123456789abcdef0123456789abcdef",
            "academy-cms".to_string(),
            24,
        )
    }

    #[test]
    fn test_token_roundtrip() {
        let tokens = service();

        let issued = tokens.issue("admin@example.com").unwrap();
        let claims = tokens.verify_at(&issued.token, Utc::now()).unwrap();

        assert_eq!(claims.sub, "admin@example.com");
        assert_eq!(claims.role, ADMIN_ROLE);
        assert_eq!(claims.iss, "academy-cms");
    }

    #[test]
    fn test_ttl_spans_exactly_24_hours() {
        let issued = service().issue_at("admin@example.com", Utc::now()).unwrap();
        assert_eq!(issued.claims.exp - issued.claims.iat, 24 * 3600);
    }

    #[test]
    fn test_tampered_secret_rejected() {
        let issued = service().issue("admin@example.com").unwrap();

        let other = TokenService::new(
            "ffffffffffffffffffffffffffffffff",
            "academy-cms".to_string(),
            24,
        );
        assert_eq!(
            other.verify_at(&issued.token, Utc::now()),
            Err(TokenError::BadSignature)
        );
    }

    #[test]
    fn test_expiry_boundary_is_strict() {
        let tokens = service();
        let t0 = Utc::now();
        let issued = tokens.issue_at("admin@example.com", t0).unwrap();
        let exp = t0 + Duration::hours(24);

        // One second before expiry: still valid.
        assert!(tokens
            .verify_at(&issued.token, exp - Duration::seconds(1))
            .is_ok());
        // Exactly at expiry: no longer strictly before exp.
        assert_eq!(
            tokens.verify_at(&issued.token, exp),
            Err(TokenError::Expired)
        );
        // One second after expiry.
        assert_eq!(
            tokens.verify_at(&issued.token, exp + Duration::seconds(1)),
            Err(TokenError::Expired)
        );
    }

    #[test]
    fn test_missing_and_malformed() {
        let tokens = service();
        assert_eq!(tokens.verify_at("", Utc::now()), Err(TokenError::Missing));
        assert_eq!(
            tokens.verify_at("not.a.jwt", Utc::now()),
            Err(TokenError::Malformed)
        );
    }

    #[test]
    fn test_wrong_issuer_rejected() {
        let other_issuer = TokenService::new(
            "0123456789abcdef0123456789abcdef",
            "someone-else".to_string(),
            24,
        );
        let issued = other_issuer.issue("admin@example.com").unwrap();
        assert!(service().verify_at(&issued.token, Utc::now()).is_err());
    }
}
