//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `DecisionRepository` - Owner-scoped persistence for decisions
//! - `SessionValidator` - Token validation yielding a verified identity

mod decision_repository;
mod session_validator;

pub use decision_repository::DecisionRepository;
pub use session_validator::SessionValidator;
