//! Session repository implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use notehub_core::error::{AppError, ErrorKind};
use notehub_core::result::AppResult;
use notehub_core::traits::{SessionRecord, SessionStore};
use notehub_core::types::UserId;
use notehub_entity::session::Session;

/// Repository for refresh token session rows.
#[derive(Debug, Clone)]
pub struct SessionRepository {
    pool: PgPool,
}

impl SessionRepository {
    /// Create a new session repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionStore for SessionRepository {
    async fn insert(
        &self,
        token: &str,
        user_id: UserId,
        issued_at: DateTime<Utc>,
    ) -> AppResult<()> {
        sqlx::query("INSERT INTO sessions (token, user_id, issued_at) VALUES ($1, $2, $3)")
            .bind(token)
            .bind(user_id)
            .bind(issued_at)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to create session", e)
            })?;
        Ok(())
    }

    async fn find_active(&self, token: &str) -> AppResult<Option<SessionRecord>> {
        sqlx::query_as::<_, Session>(
            "SELECT * FROM sessions WHERE token = $1 AND revoked_at IS NULL",
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await
        .map(|row| {
            row.map(|session| SessionRecord {
                user_id: session.user_id,
                issued_at: session.issued_at,
            })
        })
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find session by token", e)
        })
    }

    async fn revoke(&self, token: &str) -> AppResult<bool> {
        let result = sqlx::query(
            "UPDATE sessions SET revoked_at = NOW() WHERE token = $1 AND revoked_at IS NULL",
        )
        .bind(token)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to revoke session", e))?;
        Ok(result.rows_affected() > 0)
    }

    async fn purge_revoked(&self) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM sessions WHERE revoked_at IS NOT NULL")
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to purge revoked sessions", e)
            })?;
        Ok(result.rows_affected())
    }
}
