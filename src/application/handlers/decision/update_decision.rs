//! UpdateDecisionHandler - edits the content of a caller's decision.

use std::sync::Arc;

use crate::domain::decision::{Decision, DecisionContent};
use crate::domain::foundation::{DecisionId, DomainError, UserId};
use crate::ports::DecisionRepository;

/// Command to update a decision's content fields.
///
/// Identity and creation time are not part of the content payload and
/// cannot change through this path.
#[derive(Debug, Clone)]
pub struct UpdateDecisionCommand {
    pub owner_id: UserId,
    pub decision_id: DecisionId,
    pub content: DecisionContent,
}

/// Handler for content updates.
pub struct UpdateDecisionHandler {
    repository: Arc<dyn DecisionRepository>,
}

impl UpdateDecisionHandler {
    pub fn new(repository: Arc<dyn DecisionRepository>) -> Self {
        Self { repository }
    }

    /// Applies the update and returns the new state.
    ///
    /// # Errors
    ///
    /// - `DecisionNotFound` when the id does not exist under this owner
    pub async fn handle(&self, cmd: UpdateDecisionCommand) -> Result<Decision, DomainError> {
        let updated = self
            .repository
            .update_by_owner(&cmd.owner_id, &cmd.decision_id, cmd.content)
            .await?;

        tracing::info!(decision_id = %updated.id(), "decision updated");

        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryDecisionRepository;
    use crate::domain::decision::DecisionDraft;
    use crate::domain::foundation::{ErrorCode, Timestamp};

    async fn seeded_repo(owner: &UserId) -> (Arc<InMemoryDecisionRepository>, Decision) {
        let repo = Arc::new(InMemoryDecisionRepository::new());
        let decision = Decision::new(
            owner.clone(),
            DecisionDraft {
                title: "original".to_string(),
                ..Default::default()
            },
            Timestamp::now(),
        );
        repo.create(&decision).await.unwrap();
        (repo, decision)
    }

    #[tokio::test]
    async fn update_changes_content_and_keeps_creation_time() {
        let owner = UserId::new("user-a").unwrap();
        let (repo, decision) = seeded_repo(&owner).await;
        let handler = UpdateDecisionHandler::new(repo);

        let updated = handler
            .handle(UpdateDecisionCommand {
                owner_id: owner,
                decision_id: *decision.id(),
                content: DecisionContent {
                    title: Some("revised".to_string()),
                    ..Default::default()
                },
            })
            .await
            .unwrap();

        assert_eq!(updated.title(), "revised");
        assert_eq!(updated.id(), decision.id());
        assert_eq!(updated.created_at(), decision.created_at());
        assert_eq!(updated.owner_id(), decision.owner_id());
    }

    #[tokio::test]
    async fn update_under_wrong_owner_is_not_found() {
        let owner = UserId::new("user-a").unwrap();
        let (repo, decision) = seeded_repo(&owner).await;
        let handler = UpdateDecisionHandler::new(repo);

        let result = handler
            .handle(UpdateDecisionCommand {
                owner_id: UserId::new("user-b").unwrap(),
                decision_id: *decision.id(),
                content: DecisionContent::default(),
            })
            .await;

        assert_eq!(result.unwrap_err().code, ErrorCode::DecisionNotFound);
    }
}
