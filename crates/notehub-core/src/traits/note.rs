//! Note directory trait for ownership resolution.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::{NoteId, UserId};

/// Trait for resolving note ownership.
///
/// This is the only view of the notes table the access-control core
/// needs. Defined here in `notehub-core` and implemented by the note
/// repository in `notehub-database`.
#[async_trait]
pub trait NoteDirectory: Send + Sync + 'static {
    /// Resolve the owner of a note.
    ///
    /// Returns `None` when the note does not exist, so callers can report
    /// a missing resource rather than a permission failure.
    async fn owner_of(&self, note_id: NoteId) -> AppResult<Option<UserId>>;
}
