//! Decision module - the Decision aggregate and its input types.
//!
//! A Decision records what a user chose, why, and what they weighed up.
//! It is owned by exactly one user and its `id`, `owner_id`, and
//! `created_at` never change after creation.

mod decision;
mod policy;

pub use decision::{Decision, DecisionContent, DecisionDraft};
pub use policy::ValidationPolicy;
