/**
 * Session Tokens
 *
 * This module issues and verifies the signed identity tokens handed out by
 * register and login.
 *
 * # Token Format
 *
 * HS256 JWT with claims `{id, email, iat}`. Tokens carry no `exp` claim and
 * never expire; the only way to invalidate one is for the user row it names
 * to disappear, which the auth middleware checks on every request.
 *
 * # Secret
 *
 * The signing secret comes from `JWT_SECRET`. When unset, a development
 * secret is used and a warning is logged.
 */

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const DEV_SECRET: &str = "noteboard-development-secret-change-me";

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub id: i64,
    /// Email
    pub email: String,
    /// Issued at time (Unix timestamp)
    pub iat: i64,
}

/// Token issuing and verification failures
#[derive(Debug, Error)]
pub enum TokenError {
    /// Signature mismatch, bad encoding or malformed payload
    #[error("Invalid token: {0}")]
    InvalidToken(jsonwebtoken::errors::Error),

    #[error("Failed to sign token: {0}")]
    Signing(jsonwebtoken::errors::Error),
}

/// Issues and verifies identity tokens
///
/// Holds the encoding and decoding keys derived from one secret. Shared
/// across handlers through `AppState` as an `Arc<TokenService>`.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Build the service from `JWT_SECRET`
    pub fn from_env() -> Self {
        let secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| {
            tracing::warn!("JWT_SECRET not set, using the development secret");
            DEV_SECRET.to_string()
        });
        Self::new(&secret)
    }

    /// Sign a token binding `{id, email}`
    pub fn issue(&self, user_id: i64, email: &str) -> Result<String, TokenError> {
        let claims = Claims {
            id: user_id,
            email: email.to_string(),
            iat: Utc::now().timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(TokenError::Signing)
    }

    /// Verify a token and return its claims
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(TokenError::InvalidToken)
    }
}
