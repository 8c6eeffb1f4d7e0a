//! Authentication types for the domain layer.
//!
//! These types represent a verified caller identity extracted from a token.
//! They have no provider dependencies - any identity provider can populate
//! them via the `SessionValidator` port. The domain never parses tokens
//! itself; it consumes only the resolved user id.

use super::UserId;
use thiserror::Error;

/// Authenticated user extracted from a validated token.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    /// The unique user identifier from the auth provider.
    pub id: UserId,

    /// Display name if the token carries one.
    pub display_name: Option<String>,
}

impl AuthenticatedUser {
    /// Creates a new authenticated user.
    ///
    /// Typically called by a `SessionValidator` adapter after successfully
    /// validating a token.
    pub fn new(id: UserId, display_name: Option<String>) -> Self {
        Self { id, display_name }
    }
}

/// Authentication errors that can occur during token validation.
///
/// These errors are domain-centric - they describe what went wrong from the
/// application's perspective, not the auth provider's.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// The token is missing, malformed, or has an invalid signature.
    #[error("Invalid or expired token")]
    InvalidToken,

    /// The token has expired (separate from InvalidToken for specific handling).
    #[error("Token expired")]
    TokenExpired,

    /// The authentication service is unavailable (network, config, etc.).
    #[error("Auth service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl AuthError {
    /// Creates a service unavailable error with a message.
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::ServiceUnavailable(message.into())
    }
}
