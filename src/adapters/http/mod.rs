//! HTTP adapters - REST API implementations.

pub mod decision;
pub mod middleware;

// Re-export key types for convenience
pub use decision::decision_router;
pub use decision::DecisionAppState;
pub use middleware::{auth_middleware, AuthState, RequireAuth};
