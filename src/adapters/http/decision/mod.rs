//! HTTP adapter for decision endpoints.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::DecisionAppState;
pub use routes::decision_router;
