//! Collaboration repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use notehub_core::error::{AppError, ErrorKind};
use notehub_core::result::AppResult;
use notehub_core::traits::CollaborationRegistry;
use notehub_core::types::{GrantId, NoteId, UserId};

/// Repository for collaboration grant rows.
#[derive(Debug, Clone)]
pub struct CollaborationRepository {
    pool: PgPool,
}

impl CollaborationRepository {
    /// Create a new collaboration repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CollaborationRegistry for CollaborationRepository {
    async fn add(&self, note_id: NoteId, user_id: UserId) -> AppResult<GrantId> {
        // The unique constraint on (note_id, user_id) makes concurrent
        // duplicate inserts converge on a single row; the loser re-reads
        // the surviving grant.
        let inserted = sqlx::query_scalar::<_, GrantId>(
            "INSERT INTO collaborations (note_id, user_id) VALUES ($1, $2) \
             ON CONFLICT (note_id, user_id) DO NOTHING \
             RETURNING id",
        )
        .bind(note_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to add collaboration", e)
        })?;

        if let Some(grant_id) = inserted {
            return Ok(grant_id);
        }

        sqlx::query_scalar::<_, GrantId>(
            "SELECT id FROM collaborations WHERE note_id = $1 AND user_id = $2",
        )
        .bind(note_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to read collaboration", e)
        })?
        .ok_or_else(|| AppError::invariant("Collaboration could not be recorded"))
    }

    async fn remove(&self, note_id: NoteId, user_id: UserId) -> AppResult<bool> {
        let result =
            sqlx::query("DELETE FROM collaborations WHERE note_id = $1 AND user_id = $2")
                .bind(note_id)
                .bind(user_id)
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to remove collaboration", e)
                })?;
        Ok(result.rows_affected() > 0)
    }

    async fn exists(&self, note_id: NoteId, user_id: UserId) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM collaborations WHERE note_id = $1 AND user_id = $2)",
        )
        .bind(note_id)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to check collaboration", e)
        })
    }
}
