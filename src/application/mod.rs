//! Application layer - commands, queries, and handlers.
//!
//! This layer orchestrates domain operations over the ports. Each decision
//! operation gets its own handler; the recall handler is where age-aware
//! narrative generation is wired to the repository.

pub mod handlers;
