//! In-memory implementation of DecisionRepository.
//!
//! Backs tests and local development. Enforces the same owner-scoped
//! contract as the Postgres adapter: every lookup filters on the owner,
//! so a foreign id behaves exactly like a missing one.

use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::decision::{Decision, DecisionContent};
use crate::domain::foundation::{DecisionId, DomainError, UserId};
use crate::ports::DecisionRepository;

/// In-memory decision store guarded by a RwLock.
#[derive(Debug, Default)]
pub struct InMemoryDecisionRepository {
    decisions: RwLock<Vec<Decision>>,
}

impl InMemoryDecisionRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of stored decisions, across all owners.
    pub fn len(&self) -> usize {
        self.decisions.read().unwrap().len()
    }

    /// True when no decisions are stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl DecisionRepository for InMemoryDecisionRepository {
    async fn create(&self, decision: &Decision) -> Result<(), DomainError> {
        self.decisions.write().unwrap().push(decision.clone());
        Ok(())
    }

    async fn find_by_owner(
        &self,
        owner_id: &UserId,
        id: &DecisionId,
    ) -> Result<Option<Decision>, DomainError> {
        Ok(self
            .decisions
            .read()
            .unwrap()
            .iter()
            .find(|d| d.id() == id && d.owner_id() == owner_id)
            .cloned())
    }

    async fn list_by_owner(&self, owner_id: &UserId) -> Result<Vec<Decision>, DomainError> {
        let mut decisions: Vec<Decision> = self
            .decisions
            .read()
            .unwrap()
            .iter()
            .filter(|d| d.owner_id() == owner_id)
            .cloned()
            .collect();
        // newest first, stable for equal timestamps
        decisions.sort_by(|a, b| b.created_at().cmp(a.created_at()));
        Ok(decisions)
    }

    async fn update_by_owner(
        &self,
        owner_id: &UserId,
        id: &DecisionId,
        content: DecisionContent,
    ) -> Result<Decision, DomainError> {
        let mut decisions = self.decisions.write().unwrap();
        let decision = decisions
            .iter_mut()
            .find(|d| d.id() == id && d.owner_id() == owner_id)
            .ok_or_else(|| DomainError::decision_not_found(id))?;

        decision.apply_content(content);
        Ok(decision.clone())
    }

    async fn delete_by_owner(
        &self,
        owner_id: &UserId,
        id: &DecisionId,
    ) -> Result<(), DomainError> {
        let mut decisions = self.decisions.write().unwrap();
        let position = decisions
            .iter()
            .position(|d| d.id() == id && d.owner_id() == owner_id)
            .ok_or_else(|| DomainError::decision_not_found(id))?;

        decisions.remove(position);
        Ok(())
    }
}
