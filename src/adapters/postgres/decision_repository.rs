//! PostgreSQL implementation of DecisionRepository.
//!
//! Persists Decision aggregates to PostgreSQL. `constraints` and
//! `alternatives` are stored as `text[]`, keeping the sequence shape all
//! the way down. Every statement filters on `owner_id`, so cross-owner
//! access cannot happen at the SQL level; the update statement lists
//! content columns only, so `created_at` and `owner_id` cannot change
//! there either.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::decision::{Decision, DecisionContent};
use crate::domain::foundation::{DecisionId, DomainError, ErrorCode, Timestamp, UserId};
use crate::ports::DecisionRepository;

/// PostgreSQL implementation of DecisionRepository.
#[derive(Clone)]
pub struct PostgresDecisionRepository {
    pool: PgPool,
}

impl PostgresDecisionRepository {
    /// Creates a new PostgresDecisionRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DecisionRepository for PostgresDecisionRepository {
    async fn create(&self, decision: &Decision) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO decisions (
                id, owner_id, title, intent, constraints, alternatives,
                final_choice, reasoning, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(decision.id().as_uuid())
        .bind(decision.owner_id().as_str())
        .bind(decision.title())
        .bind(decision.intent())
        .bind(decision.constraints())
        .bind(decision.alternatives())
        .bind(decision.final_choice())
        .bind(decision.reasoning())
        .bind(decision.created_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to insert decision: {}", e),
            )
        })?;

        Ok(())
    }

    async fn find_by_owner(
        &self,
        owner_id: &UserId,
        id: &DecisionId,
    ) -> Result<Option<Decision>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, owner_id, title, intent, constraints, alternatives,
                   final_choice, reasoning, created_at
            FROM decisions
            WHERE id = $1 AND owner_id = $2
            "#,
        )
        .bind(id.as_uuid())
        .bind(owner_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch decision: {}", e),
            )
        })?;

        match row {
            Some(row) => Ok(Some(row_to_decision(row)?)),
            None => Ok(None),
        }
    }

    async fn list_by_owner(&self, owner_id: &UserId) -> Result<Vec<Decision>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, owner_id, title, intent, constraints, alternatives,
                   final_choice, reasoning, created_at
            FROM decisions
            WHERE owner_id = $1
            ORDER BY created_at DESC, id
            "#,
        )
        .bind(owner_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to list decisions: {}", e),
            )
        })?;

        rows.into_iter().map(row_to_decision).collect()
    }

    async fn update_by_owner(
        &self,
        owner_id: &UserId,
        id: &DecisionId,
        content: DecisionContent,
    ) -> Result<Decision, DomainError> {
        // Content columns only; absent fields keep their stored value.
        let row = sqlx::query(
            r#"
            UPDATE decisions SET
                title = COALESCE($3, title),
                intent = COALESCE($4, intent),
                constraints = COALESCE($5, constraints),
                alternatives = COALESCE($6, alternatives),
                final_choice = COALESCE($7, final_choice),
                reasoning = COALESCE($8, reasoning)
            WHERE id = $1 AND owner_id = $2
            RETURNING id, owner_id, title, intent, constraints, alternatives,
                      final_choice, reasoning, created_at
            "#,
        )
        .bind(id.as_uuid())
        .bind(owner_id.as_str())
        .bind(content.title)
        .bind(content.intent)
        .bind(content.constraints)
        .bind(content.alternatives)
        .bind(content.final_choice)
        .bind(content.reasoning)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to update decision: {}", e),
            )
        })?;

        match row {
            Some(row) => row_to_decision(row),
            None => Err(DomainError::decision_not_found(id)),
        }
    }

    async fn delete_by_owner(
        &self,
        owner_id: &UserId,
        id: &DecisionId,
    ) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM decisions WHERE id = $1 AND owner_id = $2")
            .bind(id.as_uuid())
            .bind(owner_id.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to delete decision: {}", e),
                )
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::decision_not_found(id));
        }

        Ok(())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

fn row_to_decision(row: sqlx::postgres::PgRow) -> Result<Decision, DomainError> {
    let id: uuid::Uuid = get_column(&row, "id")?;
    let owner_id: String = get_column(&row, "owner_id")?;
    let title: String = get_column(&row, "title")?;
    let intent: String = get_column(&row, "intent")?;
    let constraints: Vec<String> = get_column(&row, "constraints")?;
    let alternatives: Vec<String> = get_column(&row, "alternatives")?;
    let final_choice: String = get_column(&row, "final_choice")?;
    let reasoning: String = get_column(&row, "reasoning")?;
    let created_at: chrono::DateTime<chrono::Utc> = get_column(&row, "created_at")?;

    Ok(Decision::reconstitute(
        DecisionId::from_uuid(id),
        UserId::new(owner_id).map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Invalid owner_id: {}", e))
        })?,
        title,
        intent,
        constraints,
        alternatives,
        final_choice,
        reasoning,
        Timestamp::from_datetime(created_at),
    ))
}

fn get_column<'r, T>(row: &'r sqlx::postgres::PgRow, name: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, sqlx::Postgres> + sqlx::Type<sqlx::Postgres>,
{
    row.try_get(name).map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get {}: {}", name, e),
        )
    })
}
