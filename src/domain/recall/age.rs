//! Calendar-day arithmetic and age band classification.

use crate::domain::foundation::Timestamp;

/// Whole calendar days from `target` up to `reference`.
///
/// Both timestamps are truncated to their calendar date before
/// subtracting, so time-of-day and sub-second drift can never produce an
/// off-by-one. A `target` after `reference` clamps to 0.
pub fn calendar_days_between(reference: &Timestamp, target: &Timestamp) -> i64 {
    (reference.date() - target.date()).num_days().max(0)
}

/// Age band of a decision, derived from days elapsed since creation.
///
/// Note that these thresholds are independent of the day/week/month
/// boundaries used by the relative-time phrase; both partition the same
/// day count, differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeBand {
    /// 0-7 days old.
    Recent,
    /// 8-90 days old.
    Medium,
    /// 91+ days old.
    Old,
}

impl AgeBand {
    /// Classifies a non-negative day count into an age band.
    pub fn classify(days: i64) -> Self {
        if days <= 7 {
            AgeBand::Recent
        } else if days <= 90 {
            AgeBand::Medium
        } else {
            AgeBand::Old
        }
    }
}
