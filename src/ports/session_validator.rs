//! Session validation port for access token validation.
//!
//! This port defines the contract for validating access tokens and
//! extracting user identity. It is provider-agnostic: the shipped adapter
//! verifies HS256 JWTs, and tests use a mock, but nothing in the domain or
//! HTTP layer knows the difference.

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser};

/// Validates access tokens and extracts user identity.
///
/// This is the primary port for authentication. HTTP middleware uses this
/// to validate Bearer tokens and resolve the caller's `UserId`.
///
/// # Contract
///
/// Implementations must:
/// - Validate the token signature and expiry
/// - Return `AuthError::InvalidToken` for malformed/bad signature tokens
/// - Return `AuthError::TokenExpired` for expired tokens
/// - Return `AuthError::ServiceUnavailable` for transient errors
#[async_trait]
pub trait SessionValidator: Send + Sync {
    /// Validate an access token and return the authenticated user.
    ///
    /// `token` is the raw token without the "Bearer " prefix.
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::UserId;
    use std::collections::HashMap;
    use std::sync::RwLock;

    /// Simple mock implementation for testing the trait
    struct TestSessionValidator {
        tokens: RwLock<HashMap<String, AuthenticatedUser>>,
    }

    impl TestSessionValidator {
        fn new() -> Self {
            Self {
                tokens: RwLock::new(HashMap::new()),
            }
        }

        fn add_token(&self, token: &str, user: AuthenticatedUser) {
            self.tokens.write().unwrap().insert(token.to_string(), user);
        }
    }

    #[async_trait]
    impl SessionValidator for TestSessionValidator {
        async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
            self.tokens
                .read()
                .unwrap()
                .get(token)
                .cloned()
                .ok_or(AuthError::InvalidToken)
        }
    }

    #[tokio::test]
    async fn validator_returns_user_for_known_token() {
        let validator = TestSessionValidator::new();
        validator.add_token(
            "valid",
            AuthenticatedUser::new(UserId::new("user-123").unwrap(), None),
        );

        let result = validator.validate("valid").await;
        assert!(result.is_ok());
        assert_eq!(result.unwrap().id.as_str(), "user-123");
    }

    #[tokio::test]
    async fn validator_rejects_unknown_token() {
        let validator = TestSessionValidator::new();
        let result = validator.validate("bogus").await;
        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }

    #[test]
    fn session_validator_is_object_safe_and_send_sync() {
        fn _assert_trait_object(_: &dyn SessionValidator) {}
        fn _assert_arc_send_sync<T: Send + Sync + ?Sized>() {}
        _assert_arc_send_sync::<std::sync::Arc<dyn SessionValidator>>();
    }
}
