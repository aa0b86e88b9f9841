//! Signed-token issuing and verification.
//!
//! Tokens are HS256 JWTs whose subject is the user id. The codec owns the
//! derived keys; the secret itself is not retained after construction.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use kiruna_core::models::UserId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AuthError;

/// Name of the cookie carrying the auth token
pub const AUTH_COOKIE: &str = "kiruna_token";

/// Authentication configuration, loaded once at process start
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// HS256 signing secret
    pub secret: String,
    /// Token lifetime in seconds
    pub token_ttl_secs: i64,
}

impl AuthConfig {
    pub fn new(secret: impl Into<String>, token_ttl_secs: i64) -> Self {
        Self { secret: secret.into(), token_ttl_secs }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: Uuid,
    iat: i64,
    exp: i64,
}

/// Issues and verifies auth tokens
pub struct TokenCodec {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl TokenCodec {
    /// Derive the codec from explicit configuration
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding: DecodingKey::from_secret(config.secret.as_bytes()),
            validation: Validation::default(),
            ttl: Duration::seconds(config.token_ttl_secs),
        }
    }

    /// Issue a token for a user
    pub fn issue(&self, user_id: UserId) -> Result<String, AuthError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id.0,
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };
        encode(&Header::default(), &claims, &self.encoding)
            .map_err(|e| AuthError::InvalidCredential(e.to_string()))
    }

    /// Verify a token and return its subject.
    ///
    /// Signature and expiry failures both surface as `InvalidCredential`;
    /// whether the subject still exists is the caller's lookup.
    pub fn verify(&self, token: &str) -> Result<UserId, AuthError> {
        let data = decode::<Claims>(token, &self.decoding, &self.validation)
            .map_err(|e| AuthError::InvalidCredential(e.to_string()))?;
        Ok(UserId(data.claims.sub))
    }
}
