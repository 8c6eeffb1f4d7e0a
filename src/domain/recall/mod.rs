//! Recall module - the temporal reflection engine.
//!
//! Pure, deterministic logic that turns a decision's age in calendar days
//! into an advisory narrative: a relative-time phrase, three age-keyed
//! reflection questions, a suggestion, and a composed report. No clocks
//! are read here; callers pass the current instant explicitly.

mod age;
mod narrative;

pub use age::{calendar_days_between, AgeBand};
pub use narrative::{
    compose_report, reflection_questions, relative_time_phrase, suggestion_for_band,
};
