//! Route configuration for decision endpoints.
//!
//! Configures Axum router with decision-related routes.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{
    create_decision, delete_decision, get_decision, list_decisions, recall_decision,
    update_decision, DecisionAppState,
};

/// Creates the decision router with all endpoints.
///
/// Routes:
/// - `POST /api/decisions` - Record a new decision
/// - `GET /api/decisions` - List the caller's decisions
/// - `GET /api/decisions/:id` - Fetch one decision
/// - `PUT /api/decisions/:id` - Update a decision's content
/// - `DELETE /api/decisions/:id` - Delete a decision
/// - `POST /api/decisions/ai-recall` - Time-aware decision recall
pub fn decision_router() -> Router<DecisionAppState> {
    Router::new()
        .route("/api/decisions", post(create_decision).get(list_decisions))
        .route("/api/decisions/ai-recall", post(recall_decision))
        .route(
            "/api/decisions/:id",
            get(get_decision)
                .put(update_decision)
                .delete(delete_decision),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::auth::MockSessionValidator;
    use crate::adapters::http::middleware::{auth_middleware, AuthState};
    use crate::adapters::memory::InMemoryDecisionRepository;
    use crate::application::handlers::decision::NOT_FOUND_ADVISORY;
    use crate::domain::decision::ValidationPolicy;
    use crate::domain::foundation::{AuthenticatedUser, UserId};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::middleware;
    use std::sync::Arc;
    use tower::ServiceExt;

    // ───────────────────────────────────────────────────────────────
    // Test fixtures
    // ───────────────────────────────────────────────────────────────

    fn user(id: &str) -> AuthenticatedUser {
        AuthenticatedUser::new(UserId::new(id).unwrap(), None)
    }

    /// Builds the full router with auth middleware, two known tokens,
    /// and an empty in-memory store.
    fn test_app() -> axum::Router {
        let state = DecisionAppState::new(
            Arc::new(InMemoryDecisionRepository::new()),
            ValidationPolicy::default(),
        );
        let validator: AuthState = Arc::new(
            MockSessionValidator::new()
                .with_user("token-a", user("user-a"))
                .with_user("token-b", user("user-b")),
        );

        decision_router()
            .with_state(state)
            .layer(middleware::from_fn_with_state(validator, auth_middleware))
    }

    fn authed_json(method: &str, uri: &str, token: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("Authorization", format!("Bearer {}", token))
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    // ───────────────────────────────────────────────────────────────
    // Authentication
    // ───────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn list_without_token_returns_401() {
        let app = test_app();
        let request = Request::builder()
            .uri("/api/decisions")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn create_with_unknown_token_returns_401() {
        let app = test_app();
        let request = authed_json(
            "POST",
            "/api/decisions",
            "bogus",
            serde_json::json!({ "title": "t" }),
        );

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    // ───────────────────────────────────────────────────────────────
    // CRUD round trip
    // ───────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn create_then_get_round_trip() {
        let app = test_app();

        let create = authed_json(
            "POST",
            "/api/decisions",
            "token-a",
            serde_json::json!({
                "title": "Relocate",
                "intent": "Better commute",
                "constraints": ["budget", "school district"],
                "alternatives": "stay, remote work",
                "finalChoice": "Move north",
                "reasoning": "Shorter commute wins"
            }),
        );
        let response = app.clone().oneshot(create).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let created = body_json(response).await;
        assert_eq!(created["title"], "Relocate");
        assert_eq!(created["ownerId"], "user-a");
        assert_eq!(created["alternatives"][1], "remote work");
        let id = created["id"].as_str().unwrap().to_string();

        let get = Request::builder()
            .uri(format!("/api/decisions/{}", id))
            .header("Authorization", "Bearer token-a")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(get).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let fetched = body_json(response).await;
        assert_eq!(fetched["id"], id.as_str());
        assert_eq!(fetched["finalChoice"], "Move north");
    }

    #[tokio::test]
    async fn create_without_title_returns_400() {
        let app = test_app();
        let request = authed_json(
            "POST",
            "/api/decisions",
            "token-a",
            serde_json::json!({ "intent": "no title" }),
        );

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn update_changes_content() {
        let app = test_app();

        let create = authed_json(
            "POST",
            "/api/decisions",
            "token-a",
            serde_json::json!({ "title": "Original" }),
        );
        let created = body_json(app.clone().oneshot(create).await.unwrap()).await;
        let id = created["id"].as_str().unwrap().to_string();

        let update = authed_json(
            "PUT",
            &format!("/api/decisions/{}", id),
            "token-a",
            serde_json::json!({ "title": "Revised", "reasoning": "New evidence" }),
        );
        let response = app.oneshot(update).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let updated = body_json(response).await;
        assert_eq!(updated["title"], "Revised");
        assert_eq!(updated["reasoning"], "New evidence");
        assert_eq!(updated["id"], id.as_str());
        assert_eq!(updated["createdAt"], created["createdAt"]);
    }

    #[tokio::test]
    async fn delete_then_get_returns_404() {
        let app = test_app();

        let create = authed_json(
            "POST",
            "/api/decisions",
            "token-a",
            serde_json::json!({ "title": "Transient" }),
        );
        let created = body_json(app.clone().oneshot(create).await.unwrap()).await;
        let id = created["id"].as_str().unwrap().to_string();

        let delete = Request::builder()
            .method("DELETE")
            .uri(format!("/api/decisions/{}", id))
            .header("Authorization", "Bearer token-a")
            .body(Body::empty())
            .unwrap();
        let response = app.clone().oneshot(delete).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["message"], "Decision deleted");

        let get = Request::builder()
            .uri(format!("/api/decisions/{}", id))
            .header("Authorization", "Bearer token-a")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(get).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn get_with_malformed_id_returns_400() {
        let app = test_app();
        let request = Request::builder()
            .uri("/api/decisions/not-a-uuid")
            .header("Authorization", "Bearer token-a")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    // ───────────────────────────────────────────────────────────────
    // Owner isolation over HTTP
    // ───────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn foreign_decision_is_invisible() {
        let app = test_app();

        let create = authed_json(
            "POST",
            "/api/decisions",
            "token-a",
            serde_json::json!({ "title": "Private" }),
        );
        let created = body_json(app.clone().oneshot(create).await.unwrap()).await;
        let id = created["id"].as_str().unwrap().to_string();

        // user-b cannot read it
        let get = Request::builder()
            .uri(format!("/api/decisions/{}", id))
            .header("Authorization", "Bearer token-b")
            .body(Body::empty())
            .unwrap();
        let response = app.clone().oneshot(get).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        // and their listing stays empty
        let list = Request::builder()
            .uri("/api/decisions")
            .header("Authorization", "Bearer token-b")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(list).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let listing = body_json(response).await;
        assert_eq!(listing.as_array().unwrap().len(), 0);
    }

    // ───────────────────────────────────────────────────────────────
    // Recall
    // ───────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn recall_unknown_id_returns_advisory() {
        let app = test_app();
        let request = authed_json(
            "POST",
            "/api/decisions/ai-recall",
            "token-a",
            serde_json::json!({
                "decisionId": "11111111-1111-1111-1111-111111111111",
                "question": "should I revisit?"
            }),
        );

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["advice"], NOT_FOUND_ADVISORY);
    }

    #[tokio::test]
    async fn recall_malformed_id_returns_advisory() {
        let app = test_app();
        let request = authed_json(
            "POST",
            "/api/decisions/ai-recall",
            "token-a",
            serde_json::json!({ "decisionId": "garbage" }),
        );

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["advice"], NOT_FOUND_ADVISORY);
    }

    #[tokio::test]
    async fn recall_own_decision_yields_narrative() {
        let app = test_app();

        let create = authed_json(
            "POST",
            "/api/decisions",
            "token-a",
            serde_json::json!({
                "title": "Switch teams",
                "reasoning": "growth mattered most"
            }),
        );
        let created = body_json(app.clone().oneshot(create).await.unwrap()).await;
        let id = created["id"].as_str().unwrap().to_string();

        let recall = authed_json(
            "POST",
            "/api/decisions/ai-recall",
            "token-a",
            serde_json::json!({ "decisionId": id }),
        );
        let response = app.oneshot(recall).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        let advice = body["advice"].as_str().unwrap();
        assert!(advice.contains("Recalled Decision Context:"));
        assert!(advice.contains("• Decision: Switch teams"));
        // created just now, so the recent-band phrasing applies
        assert!(advice.contains("You made this decision today"));
    }

    #[tokio::test]
    async fn recall_foreign_decision_returns_advisory() {
        let app = test_app();

        let create = authed_json(
            "POST",
            "/api/decisions",
            "token-a",
            serde_json::json!({ "title": "Mine" }),
        );
        let created = body_json(app.clone().oneshot(create).await.unwrap()).await;
        let id = created["id"].as_str().unwrap().to_string();

        let recall = authed_json(
            "POST",
            "/api/decisions/ai-recall",
            "token-b",
            serde_json::json!({ "decisionId": id }),
        );
        let response = app.oneshot(recall).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["advice"], NOT_FOUND_ADVISORY);
    }
}
