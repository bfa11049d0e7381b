//! Note repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use notehub_core::error::{AppError, ErrorKind};
use notehub_core::result::AppResult;
use notehub_core::traits::NoteDirectory;
use notehub_core::types::{NoteId, UserId};
use notehub_entity::note::{CreateNote, Note, UpdateNote};
use notehub_service::note::NoteStore;

/// Repository for note rows.
///
/// Backs both the service-level [`NoteStore`] and the access checker's
/// [`NoteDirectory`] owner lookups.
#[derive(Debug, Clone)]
pub struct NoteRepository {
    pool: PgPool,
}

impl NoteRepository {
    /// Create a new note repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NoteStore for NoteRepository {
    async fn insert(&self, data: &CreateNote) -> AppResult<Note> {
        sqlx::query_as::<_, Note>(
            "INSERT INTO notes (title, body, tags, owner) \
             VALUES ($1, $2, $3, $4) \
             RETURNING *",
        )
        .bind(&data.title)
        .bind(&data.body)
        .bind(&data.tags)
        .bind(data.owner)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create note", e))
    }

    async fn find_by_id(&self, note_id: NoteId) -> AppResult<Option<Note>> {
        sqlx::query_as::<_, Note>("SELECT * FROM notes WHERE id = $1")
            .bind(note_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find note by id", e))
    }

    async fn list_accessible(&self, user_id: UserId) -> AppResult<Vec<Note>> {
        sqlx::query_as::<_, Note>(
            "SELECT DISTINCT n.* FROM notes n \
             LEFT JOIN collaborations c ON c.note_id = n.id \
             WHERE n.owner = $1 OR c.user_id = $1 \
             ORDER BY n.created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list accessible notes", e)
        })
    }

    async fn update(&self, note_id: NoteId, changes: &UpdateNote) -> AppResult<Option<Note>> {
        sqlx::query_as::<_, Note>(
            "UPDATE notes SET title = $2, body = $3, tags = $4, updated_at = NOW() \
             WHERE id = $1 \
             RETURNING *",
        )
        .bind(note_id)
        .bind(&changes.title)
        .bind(&changes.body)
        .bind(&changes.tags)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update note", e))
    }

    async fn delete(&self, note_id: NoteId) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM notes WHERE id = $1")
            .bind(note_id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete note", e))?;
        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl NoteDirectory for NoteRepository {
    async fn owner_of(&self, note_id: NoteId) -> AppResult<Option<UserId>> {
        sqlx::query_scalar::<_, UserId>("SELECT owner FROM notes WHERE id = $1")
            .bind(note_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to resolve note owner", e)
            })
    }
}
