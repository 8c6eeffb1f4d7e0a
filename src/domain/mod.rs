//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `decision` - The Decision aggregate and its input/update types
//! - `recall` - Temporal reflection engine (age classification, narrative)

pub mod decision;
pub mod foundation;
pub mod recall;
