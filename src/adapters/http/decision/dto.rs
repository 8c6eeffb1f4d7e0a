//! HTTP DTOs (Data Transfer Objects) for decision endpoints.
//!
//! These types define the JSON request/response structure for the
//! decision API and serve as the boundary between HTTP and the
//! application layer. The wire format is camelCase (`finalChoice`,
//! `createdAt`, `ownerId`), matching the persisted decision shape.
//!
//! This is also where the list-field convenience lives: clients may send
//! `constraints`/`alternatives` as a JSON array or as one comma-joined
//! string. The core only ever sees sequences.

use crate::domain::decision::{Decision, DecisionContent, DecisionDraft};
use serde::{Deserialize, Serialize};

// ════════════════════════════════════════════════════════════════════════════════
// List field boundary type
// ════════════════════════════════════════════════════════════════════════════════

/// A sequence field that also accepts a single comma-joined string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ListField {
    Items(Vec<String>),
    Joined(String),
}

impl ListField {
    /// Materializes the field as a sequence of trimmed, non-empty strings.
    pub fn into_items(self) -> Vec<String> {
        match self {
            ListField::Items(items) => items,
            ListField::Joined(joined) => joined
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
        }
    }
}

impl Default for ListField {
    fn default() -> Self {
        ListField::Items(Vec::new())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to record a new decision.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDecisionRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub intent: String,
    #[serde(default)]
    pub constraints: ListField,
    #[serde(default)]
    pub alternatives: ListField,
    #[serde(default)]
    pub final_choice: String,
    #[serde(default)]
    pub reasoning: String,
}

impl CreateDecisionRequest {
    /// Converts the request into a domain draft.
    pub fn into_draft(self) -> DecisionDraft {
        DecisionDraft {
            title: self.title,
            intent: self.intent,
            constraints: self.constraints.into_items(),
            alternatives: self.alternatives.into_items(),
            final_choice: self.final_choice,
            reasoning: self.reasoning,
        }
    }
}

/// Request to update a decision's content.
///
/// Only content fields exist here; `id`, `ownerId`, and `createdAt` keys
/// in the payload are simply ignored during deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDecisionRequest {
    pub title: Option<String>,
    pub intent: Option<String>,
    pub constraints: Option<ListField>,
    pub alternatives: Option<ListField>,
    pub final_choice: Option<String>,
    pub reasoning: Option<String>,
}

impl UpdateDecisionRequest {
    /// Converts the request into a domain content update.
    pub fn into_content(self) -> DecisionContent {
        DecisionContent {
            title: self.title,
            intent: self.intent,
            constraints: self.constraints.map(ListField::into_items),
            alternatives: self.alternatives.map(ListField::into_items),
            final_choice: self.final_choice,
            reasoning: self.reasoning,
        }
    }
}

/// Request for time-aware decision recall.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecallRequest {
    pub decision_id: String,
    /// Free-text question; accepted but not used by the narrative.
    #[serde(default)]
    pub question: String,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// A decision as exposed over the wire.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionResponse {
    pub id: String,
    pub owner_id: String,
    pub title: String,
    pub intent: String,
    pub constraints: Vec<String>,
    pub alternatives: Vec<String>,
    pub final_choice: String,
    pub reasoning: String,
    /// ISO 8601 creation timestamp.
    pub created_at: String,
}

impl From<&Decision> for DecisionResponse {
    fn from(decision: &Decision) -> Self {
        Self {
            id: decision.id().to_string(),
            owner_id: decision.owner_id().to_string(),
            title: decision.title().to_string(),
            intent: decision.intent().to_string(),
            constraints: decision.constraints().to_vec(),
            alternatives: decision.alternatives().to_vec(),
            final_choice: decision.final_choice().to_string(),
            reasoning: decision.reasoning().to_string(),
            created_at: decision.created_at().as_datetime().to_rfc3339(),
        }
    }
}

/// Response for the recall endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecallResponse {
    pub advice: String,
}

/// Simple message envelope (delete confirmation).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

impl ErrorResponse {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            code: "NOT_FOUND".to_string(),
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
        }
    }
}
