//! DeleteDecisionHandler - permanently removes a caller's decision.

use std::sync::Arc;

use crate::domain::foundation::{DecisionId, DomainError, UserId};
use crate::ports::DecisionRepository;

/// Command to delete a decision. No soft-delete; removal is permanent.
#[derive(Debug, Clone)]
pub struct DeleteDecisionCommand {
    pub owner_id: UserId,
    pub decision_id: DecisionId,
}

/// Handler for deleting decisions.
pub struct DeleteDecisionHandler {
    repository: Arc<dyn DecisionRepository>,
}

impl DeleteDecisionHandler {
    pub fn new(repository: Arc<dyn DecisionRepository>) -> Self {
        Self { repository }
    }

    /// # Errors
    ///
    /// - `DecisionNotFound` when the id does not exist under this owner
    pub async fn handle(&self, cmd: DeleteDecisionCommand) -> Result<(), DomainError> {
        self.repository
            .delete_by_owner(&cmd.owner_id, &cmd.decision_id)
            .await?;

        tracing::info!(decision_id = %cmd.decision_id, "decision deleted");

        Ok(())
    }
}
