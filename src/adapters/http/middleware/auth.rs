//! Authentication middleware and extractors for axum.
//!
//! This module provides:
//! - `auth_middleware` - Layer that validates Bearer tokens and injects the user into extensions
//! - `RequireAuth` - Extractor that requires authentication
//!
//! # Architecture
//!
//! The middleware uses the `SessionValidator` port, keeping it
//! provider-agnostic. Whether validating HS256 JWTs or using a mock for
//! testing, the middleware doesn't change.
//!
//! ```text
//! Request → auth_middleware → injects AuthenticatedUser into extensions
//!                                      ↓
//!                              Handler → RequireAuth extractor reads from extensions
//! ```

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use crate::domain::foundation::{AuthError, AuthenticatedUser};
use crate::ports::SessionValidator;

/// Auth middleware state - wraps the session validator.
pub type AuthState = Arc<dyn SessionValidator>;

/// Authentication middleware that validates Bearer tokens.
///
/// This middleware:
/// 1. Extracts the Bearer token from the Authorization header
/// 2. Validates the token using the `SessionValidator` port
/// 3. On success, injects `AuthenticatedUser` into request extensions
/// 4. On missing token, continues without injecting (handlers enforce via `RequireAuth`)
/// 5. On invalid token, returns 401 Unauthorized
pub async fn auth_middleware(
    State(validator): State<AuthState>,
    mut request: Request,
    next: Next,
) -> Response {
    // Extract Bearer token from Authorization header
    let token = request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "));

    match token {
        Some(token) => match validator.validate(token).await {
            Ok(user) => {
                request.extensions_mut().insert(user);
                next.run(request).await
            }
            Err(e) => {
                let (status, message) = match &e {
                    AuthError::TokenExpired => (StatusCode::UNAUTHORIZED, "Token expired"),
                    AuthError::InvalidToken => (StatusCode::UNAUTHORIZED, "Invalid token"),
                    AuthError::ServiceUnavailable(msg) => {
                        tracing::error!("Auth service unavailable: {}", msg);
                        (
                            StatusCode::SERVICE_UNAVAILABLE,
                            "Authentication service unavailable",
                        )
                    }
                };

                (
                    status,
                    Json(serde_json::json!({
                        "error": message,
                        "code": "AUTH_ERROR"
                    })),
                )
                    .into_response()
            }
        },
        None => {
            // No token provided - continue without auth;
            // handlers use RequireAuth to enforce authentication
            next.run(request).await
        }
    }
}

/// Extractor that requires authentication.
///
/// Use this extractor in handlers that require an authenticated user.
/// If no user is in the request extensions (i.e., the auth middleware
/// didn't successfully validate a token), returns 401 Unauthorized.
#[derive(Debug, Clone)]
pub struct RequireAuth(pub AuthenticatedUser);

impl<S> axum::extract::FromRequestParts<S> for RequireAuth
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut axum::http::request::Parts,
        _state: &'life1 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            parts
                .extensions
                .get::<AuthenticatedUser>()
                .cloned()
                .map(RequireAuth)
                .ok_or(AuthRejection::Unauthenticated)
        })
    }
}

/// Rejection type for authentication failures.
#[derive(Debug, Clone)]
pub enum AuthRejection {
    /// No valid authentication token was provided.
    Unauthenticated,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AuthRejection::Unauthenticated => (StatusCode::UNAUTHORIZED, "Authentication required"),
        };

        (
            status,
            Json(serde_json::json!({
                "error": message,
                "code": "UNAUTHENTICATED"
            })),
        )
            .into_response()
    }
}
