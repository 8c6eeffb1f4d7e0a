//! ListDecisionsHandler - lists the caller's decisions.

use std::sync::Arc;

use crate::domain::decision::Decision;
use crate::domain::foundation::{DomainError, UserId};
use crate::ports::DecisionRepository;

/// Query for all decisions belonging to the caller.
#[derive(Debug, Clone)]
pub struct ListDecisionsQuery {
    pub owner_id: UserId,
}

/// Handler for listing decisions.
pub struct ListDecisionsHandler {
    repository: Arc<dyn DecisionRepository>,
}

impl ListDecisionsHandler {
    pub fn new(repository: Arc<dyn DecisionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: ListDecisionsQuery) -> Result<Vec<Decision>, DomainError> {
        self.repository.list_by_owner(&query.owner_id).await
    }
}
