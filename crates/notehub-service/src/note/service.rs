//! Note CRUD service.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use notehub_auth::access::AccessChecker;
use notehub_core::error::AppError;
use notehub_core::types::{NoteId, UserId};
use notehub_entity::note::{CreateNote, Note, UpdateNote};

use super::store::NoteStore;

/// Content fields of a note as submitted by a client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteContent {
    /// Note title.
    pub title: String,
    /// Note body text.
    pub body: String,
    /// Free-form tags.
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Manages note creation, listing, reading, updating, and deletion.
///
/// Reads and updates are open to the owner and collaborators; deletion
/// is owner-only.
#[derive(Clone)]
pub struct NoteService {
    /// Note persistence.
    notes: Arc<dyn NoteStore>,
    /// Ownership and collaboration access checks.
    checker: Arc<AccessChecker>,
}

impl std::fmt::Debug for NoteService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NoteService").finish()
    }
}

impl NoteService {
    /// Creates a new note service.
    pub fn new(notes: Arc<dyn NoteStore>, checker: Arc<AccessChecker>) -> Self {
        Self { notes, checker }
    }

    /// Creates a note owned by the acting user.
    pub async fn create(&self, actor: UserId, content: NoteContent) -> Result<Note, AppError> {
        let note = self
            .notes
            .insert(&CreateNote {
                title: content.title,
                body: content.body,
                tags: content.tags,
                owner: actor,
            })
            .await?;

        info!(note_id = %note.id, user_id = %actor, "Note created");

        Ok(note)
    }

    /// Lists every note the acting user owns or collaborates on.
    pub async fn list(&self, actor: UserId) -> Result<Vec<Note>, AppError> {
        self.notes.list_accessible(actor).await
    }

    /// Reads a single note the acting user has access to.
    pub async fn get(&self, actor: UserId, note_id: NoteId) -> Result<Note, AppError> {
        self.checker
            .assert_owner_or_collaborator(note_id, actor)
            .await?;

        self.notes
            .find_by_id(note_id)
            .await?
            .ok_or_else(|| AppError::not_found("Note not found"))
    }

    /// Replaces a note's content. Collaborators may edit as well as the
    /// owner.
    pub async fn update(
        &self,
        actor: UserId,
        note_id: NoteId,
        content: NoteContent,
    ) -> Result<Note, AppError> {
        self.checker
            .assert_owner_or_collaborator(note_id, actor)
            .await?;

        let note = self
            .notes
            .update(
                note_id,
                &UpdateNote {
                    title: content.title,
                    body: content.body,
                    tags: content.tags,
                },
            )
            .await?
            .ok_or_else(|| AppError::not_found("Note not found"))?;

        info!(note_id = %note_id, user_id = %actor, "Note updated");

        Ok(note)
    }

    /// Deletes a note. Only the owner may delete; deleting also removes
    /// the note's collaboration grants.
    pub async fn delete(&self, actor: UserId, note_id: NoteId) -> Result<(), AppError> {
        self.checker.assert_owner(note_id, actor).await?;

        if !self.notes.delete(note_id).await? {
            return Err(AppError::not_found("Note not found"));
        }

        info!(note_id = %note_id, user_id = %actor, "Note deleted");

        Ok(())
    }
}
