//! Decision repository port.
//!
//! Defines the contract for persisting and retrieving Decision aggregates.
//!
//! # Owner scoping
//!
//! Every query-like method takes the verified owner's `UserId`, and the
//! contract is that each query is implicitly conjoined with
//! `owner_id = caller`. Ownership is enforced here, once, rather than
//! ad hoc in each handler: a decision belonging to someone else is
//! indistinguishable from one that does not exist.

use crate::domain::decision::{Decision, DecisionContent};
use crate::domain::foundation::{DecisionId, DomainError, UserId};
use async_trait::async_trait;

/// Repository port for owner-scoped Decision persistence.
///
/// Implementations must not cache entities across calls in a way that
/// could leak reads across owners; each call stands alone.
#[async_trait]
pub trait DecisionRepository: Send + Sync {
    /// Persist a new decision.
    ///
    /// The aggregate already carries its generated id, owner, and
    /// creation timestamp.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn create(&self, decision: &Decision) -> Result<(), DomainError>;

    /// Find one decision by id under the given owner.
    ///
    /// Returns `None` when no decision with that id exists for that owner,
    /// including when the id exists under a different owner.
    async fn find_by_owner(
        &self,
        owner_id: &UserId,
        id: &DecisionId,
    ) -> Result<Option<Decision>, DomainError>;

    /// List all decisions belonging to the owner.
    ///
    /// Ordered by `created_at` descending; stable across repeated calls
    /// with no intervening writes.
    async fn list_by_owner(&self, owner_id: &UserId) -> Result<Vec<Decision>, DomainError>;

    /// Apply a content update to the owner's decision and return the
    /// updated aggregate.
    ///
    /// Never touches `id`, `owner_id`, or `created_at`.
    ///
    /// # Errors
    ///
    /// - `DecisionNotFound` if no decision with that id exists under that owner
    /// - `DatabaseError` on persistence failure
    async fn update_by_owner(
        &self,
        owner_id: &UserId,
        id: &DecisionId,
        content: DecisionContent,
    ) -> Result<Decision, DomainError>;

    /// Permanently remove the owner's decision.
    ///
    /// # Errors
    ///
    /// - `DecisionNotFound` if no decision with that id exists under that owner
    /// - `DatabaseError` on persistence failure
    async fn delete_by_owner(&self, owner_id: &UserId, id: &DecisionId)
        -> Result<(), DomainError>;
}
