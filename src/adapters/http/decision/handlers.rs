//! HTTP handlers for decision endpoints.
//!
//! These handlers connect Axum routes to application layer command/query
//! handlers. The caller's identity always comes from the `RequireAuth`
//! extractor; it is never read from the request body.

use std::sync::Arc;

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::decision::{
    CreateDecisionCommand, CreateDecisionError, CreateDecisionHandler, DeleteDecisionCommand,
    DeleteDecisionHandler, GetDecisionHandler, GetDecisionQuery, ListDecisionsHandler,
    ListDecisionsQuery, RecallDecisionCommand, RecallDecisionHandler, UpdateDecisionCommand,
    UpdateDecisionHandler, NOT_FOUND_ADVISORY,
};
use crate::domain::decision::ValidationPolicy;
use crate::domain::foundation::{DecisionId, DomainError, ErrorCode, Timestamp};
use crate::ports::DecisionRepository;

use super::dto::{
    CreateDecisionRequest, DecisionResponse, ErrorResponse, MessageResponse, RecallRequest,
    RecallResponse, UpdateDecisionRequest,
};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing all dependencies.
#[derive(Clone)]
pub struct DecisionAppState {
    pub repository: Arc<dyn DecisionRepository>,
    pub policy: ValidationPolicy,
}

impl DecisionAppState {
    pub fn new(repository: Arc<dyn DecisionRepository>, policy: ValidationPolicy) -> Self {
        Self { repository, policy }
    }

    pub fn create_decision_handler(&self) -> CreateDecisionHandler {
        CreateDecisionHandler::new(self.repository.clone(), self.policy.clone())
    }

    pub fn list_decisions_handler(&self) -> ListDecisionsHandler {
        ListDecisionsHandler::new(self.repository.clone())
    }

    pub fn get_decision_handler(&self) -> GetDecisionHandler {
        GetDecisionHandler::new(self.repository.clone())
    }

    pub fn update_decision_handler(&self) -> UpdateDecisionHandler {
        UpdateDecisionHandler::new(self.repository.clone())
    }

    pub fn delete_decision_handler(&self) -> DeleteDecisionHandler {
        DeleteDecisionHandler::new(self.repository.clone())
    }

    pub fn recall_decision_handler(&self) -> RecallDecisionHandler {
        RecallDecisionHandler::new(self.repository.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Command Handlers (POST/PUT/DELETE endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/decisions - Record a new decision
pub async fn create_decision(
    State(state): State<DecisionAppState>,
    RequireAuth(user): RequireAuth,
    Json(request): Json<CreateDecisionRequest>,
) -> Result<impl IntoResponse, DecisionApiError> {
    let handler = state.create_decision_handler();
    let cmd = CreateDecisionCommand {
        owner_id: user.id,
        draft: request.into_draft(),
    };

    let decision = handler.handle(cmd).await?;

    Ok((StatusCode::CREATED, Json(DecisionResponse::from(&decision))))
}

/// PUT /api/decisions/:id - Update a decision's content
pub async fn update_decision(
    State(state): State<DecisionAppState>,
    Path(decision_id): Path<String>,
    RequireAuth(user): RequireAuth,
    Json(request): Json<UpdateDecisionRequest>,
) -> Result<impl IntoResponse, DecisionApiError> {
    let decision_id: DecisionId = decision_id
        .parse()
        .map_err(|_| DecisionApiError::BadRequest("Invalid decision ID format".to_string()))?;

    let handler = state.update_decision_handler();
    let cmd = UpdateDecisionCommand {
        owner_id: user.id,
        decision_id,
        content: request.into_content(),
    };

    let decision = handler.handle(cmd).await?;

    Ok((StatusCode::OK, Json(DecisionResponse::from(&decision))))
}

/// DELETE /api/decisions/:id - Delete a decision
pub async fn delete_decision(
    State(state): State<DecisionAppState>,
    Path(decision_id): Path<String>,
    RequireAuth(user): RequireAuth,
) -> Result<impl IntoResponse, DecisionApiError> {
    let decision_id: DecisionId = decision_id
        .parse()
        .map_err(|_| DecisionApiError::BadRequest("Invalid decision ID format".to_string()))?;

    let handler = state.delete_decision_handler();
    let cmd = DeleteDecisionCommand {
        owner_id: user.id,
        decision_id,
    };

    handler.handle(cmd).await?;

    Ok((
        StatusCode::OK,
        Json(MessageResponse {
            message: "Decision deleted".to_string(),
        }),
    ))
}

/// POST /api/decisions/ai-recall - Time-aware decision recall
///
/// Always answers 200 for an authenticated caller. An unknown, foreign,
/// or malformed decision id yields the fixed advisory in the body rather
/// than an HTTP error, since the text is meant for display as-is.
pub async fn recall_decision(
    State(state): State<DecisionAppState>,
    RequireAuth(user): RequireAuth,
    Json(request): Json<RecallRequest>,
) -> Result<impl IntoResponse, DecisionApiError> {
    let decision_id: DecisionId = match request.decision_id.parse() {
        Ok(id) => id,
        Err(_) => {
            return Ok((
                StatusCode::OK,
                Json(RecallResponse {
                    advice: NOT_FOUND_ADVISORY.to_string(),
                }),
            ));
        }
    };

    let handler = state.recall_decision_handler();
    let cmd = RecallDecisionCommand {
        owner_id: user.id,
        decision_id,
        question: request.question,
        now: Timestamp::now(),
    };

    let advice = handler.handle(cmd).await?;

    Ok((StatusCode::OK, Json(RecallResponse { advice })))
}

// ════════════════════════════════════════════════════════════════════════════════
// Query Handlers (GET endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/decisions - List the caller's decisions
pub async fn list_decisions(
    State(state): State<DecisionAppState>,
    RequireAuth(user): RequireAuth,
) -> Result<impl IntoResponse, DecisionApiError> {
    let handler = state.list_decisions_handler();
    let decisions = handler
        .handle(ListDecisionsQuery { owner_id: user.id })
        .await?;

    let response: Vec<DecisionResponse> = decisions.iter().map(DecisionResponse::from).collect();

    Ok((StatusCode::OK, Json(response)))
}

/// GET /api/decisions/:id - Fetch one decision
pub async fn get_decision(
    State(state): State<DecisionAppState>,
    Path(decision_id): Path<String>,
    RequireAuth(user): RequireAuth,
) -> Result<impl IntoResponse, DecisionApiError> {
    let decision_id: DecisionId = decision_id
        .parse()
        .map_err(|_| DecisionApiError::BadRequest("Invalid decision ID format".to_string()))?;

    let handler = state.get_decision_handler();
    let decision = handler
        .handle(GetDecisionQuery {
            owner_id: user.id,
            decision_id,
        })
        .await?;

    Ok((StatusCode::OK, Json(DecisionResponse::from(&decision))))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts domain errors to HTTP responses.
#[derive(Debug)]
pub enum DecisionApiError {
    BadRequest(String),
    NotFound(String),
    Internal(String),
}

impl From<DomainError> for DecisionApiError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::DecisionNotFound => DecisionApiError::NotFound(err.message),
            ErrorCode::EmptyField => DecisionApiError::BadRequest(err.message),
            ErrorCode::DatabaseError => DecisionApiError::Internal(err.message),
        }
    }
}

impl From<CreateDecisionError> for DecisionApiError {
    fn from(err: CreateDecisionError) -> Self {
        match err {
            CreateDecisionError::Validation(e) => DecisionApiError::BadRequest(e.to_string()),
            CreateDecisionError::Domain(e) => e.into(),
        }
    }
}

impl IntoResponse for DecisionApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            DecisionApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ErrorResponse::bad_request(msg))
            }
            DecisionApiError::NotFound(msg) => {
                (StatusCode::NOT_FOUND, ErrorResponse::not_found(msg))
            }
            DecisionApiError::Internal(msg) => {
                tracing::error!("internal error serving decision request: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::internal("Internal server error"),
                )
            }
        };

        (status, Json(error)).into_response()
    }
}
