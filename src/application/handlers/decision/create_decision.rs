//! CreateDecisionHandler - records a new decision for the caller.

use std::sync::Arc;

use crate::domain::decision::{Decision, DecisionDraft, ValidationPolicy};
use crate::domain::foundation::{DomainError, Timestamp, UserId, ValidationError};
use crate::ports::DecisionRepository;

/// Command to record a new decision.
#[derive(Debug, Clone)]
pub struct CreateDecisionCommand {
    /// Verified identity of the caller; becomes the decision's owner.
    pub owner_id: UserId,
    /// The decision content.
    pub draft: DecisionDraft,
}

/// Error type for decision creation.
#[derive(Debug, Clone)]
pub enum CreateDecisionError {
    /// The draft failed the configured field requiredness policy.
    Validation(ValidationError),
    /// Persistence or other domain failure.
    Domain(DomainError),
}

impl std::fmt::Display for CreateDecisionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CreateDecisionError::Validation(err) => write!(f, "{}", err),
            CreateDecisionError::Domain(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for CreateDecisionError {}

impl From<DomainError> for CreateDecisionError {
    fn from(err: DomainError) -> Self {
        CreateDecisionError::Domain(err)
    }
}

/// Handler for recording decisions.
pub struct CreateDecisionHandler {
    repository: Arc<dyn DecisionRepository>,
    policy: ValidationPolicy,
}

impl CreateDecisionHandler {
    pub fn new(repository: Arc<dyn DecisionRepository>, policy: ValidationPolicy) -> Self {
        Self { repository, policy }
    }

    pub async fn handle(
        &self,
        cmd: CreateDecisionCommand,
    ) -> Result<Decision, CreateDecisionError> {
        cmd.draft
            .validate(&self.policy)
            .map_err(CreateDecisionError::Validation)?;

        let decision = Decision::new(cmd.owner_id, cmd.draft, Timestamp::now());
        self.repository.create(&decision).await?;

        tracing::info!(decision_id = %decision.id(), "decision recorded");

        Ok(decision)
    }
}
