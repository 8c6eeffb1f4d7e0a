//! Mock authentication adapter for testing.
//!
//! Implements the `SessionValidator` port without a real identity
//! provider: a map of tokens to users, populated by the test.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser};
use crate::ports::SessionValidator;

/// Mock session validator for testing.
///
/// Stores a map of tokens to users. Tokens not in the map return
/// `InvalidToken`.
#[derive(Debug, Default)]
pub struct MockSessionValidator {
    /// Map of valid tokens to their associated users
    tokens: RwLock<HashMap<String, AuthenticatedUser>>,
}

impl MockSessionValidator {
    /// Creates a new empty mock validator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a valid token that maps to a user.
    pub fn with_user(self, token: impl Into<String>, user: AuthenticatedUser) -> Self {
        self.tokens.write().unwrap().insert(token.into(), user);
        self
    }
}

#[async_trait]
impl SessionValidator for MockSessionValidator {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        self.tokens
            .read()
            .unwrap()
            .get(token)
            .cloned()
            .ok_or(AuthError::InvalidToken)
    }
}
