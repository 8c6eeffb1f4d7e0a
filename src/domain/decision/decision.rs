//! Decision aggregate entity.
//!
//! # Invariants
//!
//! - `id` is globally unique and immutable
//! - `owner_id` is set once at creation from the verified caller and is
//!   structurally unreachable from updates
//! - `created_at` is fixed at creation; content updates never touch it,
//!   so a decision's age is always measured from the original recording
//! - `constraints` and `alternatives` are native sequences; any
//!   comma-splitting happens at the presentation boundary

use crate::domain::foundation::{DecisionId, Timestamp, UserId, ValidationError};
use serde::{Deserialize, Serialize};

use super::ValidationPolicy;

/// A recorded personal decision: what was chosen, under which constraints,
/// against which alternatives, and why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    /// Unique identifier for this decision.
    id: DecisionId,

    /// User who owns this decision.
    owner_id: UserId,

    /// Short label for the decision.
    title: String,

    /// What the user was trying to achieve.
    intent: String,

    /// Constraints considered, in display order.
    constraints: Vec<String>,

    /// Alternatives explored, in display order.
    alternatives: Vec<String>,

    /// The option the user settled on.
    final_choice: String,

    /// The reasoning behind the final choice, quoted verbatim in recall.
    reasoning: String,

    /// When the decision was recorded.
    created_at: Timestamp,
}

impl Decision {
    /// Create a new decision owned by `owner_id`, recorded at `created_at`.
    ///
    /// The draft is assumed to have passed policy validation already
    /// (see [`DecisionDraft::validate`]).
    pub fn new(owner_id: UserId, draft: DecisionDraft, created_at: Timestamp) -> Self {
        Self {
            id: DecisionId::new(),
            owner_id,
            title: draft.title,
            intent: draft.intent,
            constraints: draft.constraints,
            alternatives: draft.alternatives,
            final_choice: draft.final_choice,
            reasoning: draft.reasoning,
            created_at,
        }
    }

    /// Reconstitute a decision from persistence (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: DecisionId,
        owner_id: UserId,
        title: String,
        intent: String,
        constraints: Vec<String>,
        alternatives: Vec<String>,
        final_choice: String,
        reasoning: String,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            owner_id,
            title,
            intent,
            constraints,
            alternatives,
            final_choice,
            reasoning,
            created_at,
        }
    }

    /// Apply a partial content update.
    ///
    /// Only fields present in `content` change. `id`, `owner_id`, and
    /// `created_at` are not part of [`DecisionContent`] and cannot be
    /// modified through this path.
    pub fn apply_content(&mut self, content: DecisionContent) {
        if let Some(title) = content.title {
            self.title = title;
        }
        if let Some(intent) = content.intent {
            self.intent = intent;
        }
        if let Some(constraints) = content.constraints {
            self.constraints = constraints;
        }
        if let Some(alternatives) = content.alternatives {
            self.alternatives = alternatives;
        }
        if let Some(final_choice) = content.final_choice {
            self.final_choice = final_choice;
        }
        if let Some(reasoning) = content.reasoning {
            self.reasoning = reasoning;
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the decision ID.
    pub fn id(&self) -> &DecisionId {
        &self.id
    }

    /// Returns the owner's user ID.
    pub fn owner_id(&self) -> &UserId {
        &self.owner_id
    }

    /// Returns the decision title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the original intent.
    pub fn intent(&self) -> &str {
        &self.intent
    }

    /// Returns the constraints considered.
    pub fn constraints(&self) -> &[String] {
        &self.constraints
    }

    /// Returns the alternatives explored.
    pub fn alternatives(&self) -> &[String] {
        &self.alternatives
    }

    /// Returns the final choice.
    pub fn final_choice(&self) -> &str {
        &self.final_choice
    }

    /// Returns the recorded reasoning.
    pub fn reasoning(&self) -> &str {
        &self.reasoning
    }

    /// Returns when the decision was recorded.
    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }
}

/// Input for creating a new decision.
///
/// Carries content fields only; identity and timestamps are assigned by
/// the system at creation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecisionDraft {
    pub title: String,
    pub intent: String,
    pub constraints: Vec<String>,
    pub alternatives: Vec<String>,
    pub final_choice: String,
    pub reasoning: String,
}

impl DecisionDraft {
    /// Validates the draft against a field requiredness policy.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyField` for the first required field
    /// that is empty.
    pub fn validate(&self, policy: &ValidationPolicy) -> Result<(), ValidationError> {
        if policy.require_title && self.title.trim().is_empty() {
            return Err(ValidationError::empty_field("title"));
        }
        if policy.require_intent && self.intent.trim().is_empty() {
            return Err(ValidationError::empty_field("intent"));
        }
        if policy.require_final_choice && self.final_choice.trim().is_empty() {
            return Err(ValidationError::empty_field("final_choice"));
        }
        if policy.require_reasoning && self.reasoning.trim().is_empty() {
            return Err(ValidationError::empty_field("reasoning"));
        }
        Ok(())
    }
}

/// Partial content update for an existing decision.
///
/// Deliberately excludes `id`, `owner_id`, and `created_at`: a payload
/// carrying those keys simply cannot express a change to them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecisionContent {
    pub title: Option<String>,
    pub intent: Option<String>,
    pub constraints: Option<Vec<String>>,
    pub alternatives: Option<Vec<String>>,
    pub final_choice: Option<String>,
    pub reasoning: Option<String>,
}
