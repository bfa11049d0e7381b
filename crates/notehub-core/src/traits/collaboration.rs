//! Collaboration registry trait for per-note access grants.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::{GrantId, NoteId, UserId};

/// Trait for the registry of collaboration grants.
///
/// A grant is the pair (note, user); at most one live grant exists per
/// pair. Defined here in `notehub-core` and implemented by the
/// collaboration repository in `notehub-database`.
#[async_trait]
pub trait CollaborationRegistry: Send + Sync + 'static {
    /// Record a grant and return its identifier.
    ///
    /// Adding a grant that already exists is an idempotent success: the
    /// identifier of the surviving grant is returned. Concurrent duplicate
    /// adds must converge to a single live grant.
    async fn add(&self, note_id: NoteId, user_id: UserId) -> AppResult<GrantId>;

    /// Remove a grant.
    ///
    /// Returns `false` when no grant matched, so callers can reject a
    /// removal that has nothing to remove.
    async fn remove(&self, note_id: NoteId, user_id: UserId) -> AppResult<bool>;

    /// Whether a live grant exists for (note, user).
    async fn exists(&self, note_id: NoteId, user_id: UserId) -> AppResult<bool>;
}
