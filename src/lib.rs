//! Continuum - Personal Decision Journal
//!
//! This crate implements a decision journal with time-aware recall:
//! owners record the decisions they make, and the recall engine replays
//! a past decision with reflection prompts scaled to its age.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
