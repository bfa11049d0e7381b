//! Persistence trait for note records.

use async_trait::async_trait;

use notehub_core::result::AppResult;
use notehub_core::types::{NoteId, UserId};
use notehub_entity::note::{CreateNote, Note, UpdateNote};

/// Trait for the durable note store.
///
/// Implemented by the note repository in `notehub-database`; tests supply
/// in-memory implementations.
#[async_trait]
pub trait NoteStore: Send + Sync + 'static {
    /// Persist a new note and return the stored row.
    async fn insert(&self, data: &CreateNote) -> AppResult<Note>;

    /// Look up a note by id.
    async fn find_by_id(&self, note_id: NoteId) -> AppResult<Option<Note>>;

    /// List every note the user can access: notes they own plus notes
    /// shared with them through a collaboration grant.
    async fn list_accessible(&self, user_id: UserId) -> AppResult<Vec<Note>>;

    /// Replace a note's content fields. Returns the updated row, or
    /// `None` when no note with the given id exists.
    async fn update(&self, note_id: NoteId, changes: &UpdateNote) -> AppResult<Option<Note>>;

    /// Delete a note. Returns `false` when no note with the given id
    /// exists. Deleting a note also removes its collaboration grants.
    async fn delete(&self, note_id: NoteId) -> AppResult<bool>;
}
