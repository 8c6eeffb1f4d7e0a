//! GetDecisionHandler - fetches one of the caller's decisions.

use std::sync::Arc;

use crate::domain::decision::Decision;
use crate::domain::foundation::{DecisionId, DomainError, UserId};
use crate::ports::DecisionRepository;

/// Query for a single decision under the caller's identity.
#[derive(Debug, Clone)]
pub struct GetDecisionQuery {
    pub owner_id: UserId,
    pub decision_id: DecisionId,
}

/// Handler for fetching a single decision.
pub struct GetDecisionHandler {
    repository: Arc<dyn DecisionRepository>,
}

impl GetDecisionHandler {
    pub fn new(repository: Arc<dyn DecisionRepository>) -> Self {
        Self { repository }
    }

    /// Returns the decision, or `DecisionNotFound` when the id does not
    /// exist under this owner (including when it exists under another).
    pub async fn handle(&self, query: GetDecisionQuery) -> Result<Decision, DomainError> {
        self.repository
            .find_by_owner(&query.owner_id, &query.decision_id)
            .await?
            .ok_or_else(|| DomainError::decision_not_found(query.decision_id))
    }
}
