//! Authentication configuration

use serde::Deserialize;

use super::error::ValidationError;
use super::server::Environment;

/// Minimum secret length accepted in production.
const MIN_PRODUCTION_SECRET_LEN: usize = 32;

/// Authentication configuration (HS256 JWT sessions)
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Shared secret used to verify session token signatures
    pub jwt_secret: String,
}

impl AuthConfig {
    /// Validate authentication configuration
    ///
    /// In production, requires a secret of at least 32 bytes. In
    /// development, any non-empty secret is accepted.
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        if self.jwt_secret.is_empty() {
            return Err(ValidationError::MissingRequired("JWT_SECRET"));
        }

        if *environment == Environment::Production
            && self.jwt_secret.len() < MIN_PRODUCTION_SECRET_LEN
        {
            return Err(ValidationError::JwtSecretTooShort);
        }

        Ok(())
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: String::new(),
        }
    }
}
