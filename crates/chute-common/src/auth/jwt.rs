//! JWT utilities for authentication
//!
//! Provides access-token encoding, decoding, and validation using the
//! `jsonwebtoken` crate. Tokens carry the account role so handlers can gate
//! admin-only routes without a database round trip.

use chrono::{Duration, Utc};
use chute_core::Role;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (account ID)
    pub sub: String,
    /// Account role
    pub role: Role,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Get the account ID
    ///
    /// # Errors
    /// Returns an error if the subject is not a valid UUID
    pub fn account_id(&self) -> Result<Uuid, AppError> {
        self.sub.parse::<Uuid>().map_err(|_| AppError::InvalidToken)
    }

    /// Check if the token is expired
    #[must_use]
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// JWT service for encoding and decoding access tokens
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    access_token_expiry: i64,
}

impl JwtService {
    /// Create a new JWT service with the given secret and expiry (seconds)
    #[must_use]
    pub fn new(secret: &str, access_token_expiry: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            access_token_expiry,
        }
    }

    /// Access token lifetime in seconds
    #[must_use]
    pub fn expires_in(&self) -> i64 {
        self.access_token_expiry
    }

    /// Generate an access token for an account
    ///
    /// # Errors
    /// Returns an error if token encoding fails
    pub fn generate_access_token(&self, account_id: Uuid, role: Role) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = Claims {
            sub: account_id.to_string(),
            role,
            iat: now.timestamp(),
            exp: (now + Duration::seconds(self.access_token_expiry)).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Token encoding failed: {e}")))
    }

    /// Validate an access token and return its claims
    ///
    /// # Errors
    /// Returns `AppError::TokenExpired` or `AppError::InvalidToken`
    pub fn validate_access_token(&self, token: &str) -> Result<Claims, AppError> {
        decode::<Claims>(token, &self.decoding_key, &Validation::default())
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AppError::TokenExpired,
                _ => AppError::InvalidToken,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> JwtService {
        JwtService::new("test-secret-key-for-tests-only", 3600)
    }

    #[test]
    fn test_generate_and_validate() {
        let service = service();
        let account_id = Uuid::new_v4();

        let token = service
            .generate_access_token(account_id, Role::Guardian)
            .unwrap();
        let claims = service.validate_access_token(&token).unwrap();

        assert_eq!(claims.account_id().unwrap(), account_id);
        assert_eq!(claims.role, Role::Guardian);
        assert!(!claims.is_admin());
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_admin_role_round_trip() {
        let service = service();
        let token = service
            .generate_access_token(Uuid::new_v4(), Role::Admin)
            .unwrap();
        let claims = service.validate_access_token(&token).unwrap();
        assert!(claims.is_admin());
    }

    #[test]
    fn test_invalid_token_rejected() {
        let service = service();
        assert!(matches!(
            service.validate_access_token("garbage"),
            Err(AppError::InvalidToken)
        ));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = service()
            .generate_access_token(Uuid::new_v4(), Role::Guardian)
            .unwrap();
        let other = JwtService::new("another-secret", 3600);
        assert!(other.validate_access_token(&token).is_err());
    }
}
