//! HS256 JWT adapter for token validation.
//!
//! Implements the `SessionValidator` port against the token format the
//! Continuum identity provider issues: HS256-signed JWTs whose `userId`
//! claim carries the owner identity, with a standard `exp` claim.
//! Continuum only verifies tokens; it never issues them.

use async_trait::async_trait;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::Deserialize;

use crate::domain::foundation::{AuthError, AuthenticatedUser, UserId};
use crate::ports::SessionValidator;

/// Configuration for the JWT adapter.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// Shared HMAC secret the identity provider signs with.
    pub secret: String,
}

impl JwtConfig {
    /// Create a new configuration.
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }
}

/// Claims carried by a Continuum access token.
#[derive(Debug, Deserialize)]
struct Claims {
    /// The user identifier.
    #[serde(rename = "userId")]
    user_id: String,

    /// Expiry timestamp (Unix epoch seconds). Required; tokens without
    /// an expiry are rejected by validation.
    #[allow(dead_code)]
    exp: i64,

    /// Optional display name claim.
    #[serde(default)]
    name: Option<String>,
}

/// HS256 session validator.
pub struct JwtSessionValidator {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtSessionValidator {
    /// Creates a validator from the shared secret configuration.
    pub fn new(config: JwtConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        // The upstream tokens carry no audience claim.
        validation.validate_aud = false;

        Self {
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            validation,
        }
    }
}

#[async_trait]
impl SessionValidator for JwtSessionValidator {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::InvalidToken,
            })?;

        let claims = token_data.claims;
        let id = UserId::new(claims.user_id).map_err(|_| AuthError::InvalidToken)?;

        Ok(AuthenticatedUser::new(id, claims.name))
    }
}
