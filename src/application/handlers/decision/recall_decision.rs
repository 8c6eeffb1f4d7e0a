//! RecallDecisionHandler - time-aware recall of a past decision.
//!
//! Orchestrates the recall path: owner-scoped lookup, then the pure
//! narrative generator. "No such decision for you" is a normal,
//! displayable outcome here, not an error; cross-owner ids and
//! nonexistent ids produce the same advisory.

use std::sync::Arc;

use crate::domain::foundation::{DecisionId, DomainError, Timestamp, UserId};
use crate::domain::recall::compose_report;
use crate::ports::DecisionRepository;

/// Advisory returned when the decision does not exist under the caller.
pub const NOT_FOUND_ADVISORY: &str = "Decision not found for this user.";

/// Command to recall a decision.
#[derive(Debug, Clone)]
pub struct RecallDecisionCommand {
    pub owner_id: UserId,
    pub decision_id: DecisionId,
    /// Free-text question from the caller. Accepted and logged, but the
    /// narrative is age-driven only and does not use it. Upstream
    /// contract; do not wire it into the report without product intent.
    pub question: String,
    /// The instant to measure the decision's age against.
    pub now: Timestamp,
}

/// Handler producing the recall advisory.
pub struct RecallDecisionHandler {
    repository: Arc<dyn DecisionRepository>,
}

impl RecallDecisionHandler {
    pub fn new(repository: Arc<dyn DecisionRepository>) -> Self {
        Self { repository }
    }

    /// Returns the advisory text for the caller.
    ///
    /// # Errors
    ///
    /// Only storage failures propagate; a missing or foreign decision
    /// yields the not-found advisory as an `Ok` value.
    pub async fn handle(&self, cmd: RecallDecisionCommand) -> Result<String, DomainError> {
        tracing::debug!(
            decision_id = %cmd.decision_id,
            question = %cmd.question,
            "recall requested"
        );

        let decision = self
            .repository
            .find_by_owner(&cmd.owner_id, &cmd.decision_id)
            .await?;

        match decision {
            Some(decision) => Ok(compose_report(&decision, &cmd.now)),
            None => Ok(NOT_FOUND_ADVISORY.to_string()),
        }
    }
}
