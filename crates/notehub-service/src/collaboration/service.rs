//! Collaboration grant service.

use std::sync::Arc;

use tracing::info;

use notehub_auth::access::AccessChecker;
use notehub_core::error::AppError;
use notehub_core::traits::CollaborationRegistry;
use notehub_core::types::{GrantId, NoteId, UserId};

use crate::user::UserStore;

/// Manages collaboration grants on notes.
///
/// Only a note's owner may grant or revoke collaboration. A grant confers
/// access to the note, never the ability to grant further access.
#[derive(Clone)]
pub struct CollaborationService {
    /// Grant persistence.
    registry: Arc<dyn CollaborationRegistry>,
    /// User lookups for grantee existence checks.
    users: Arc<dyn UserStore>,
    /// Ownership checks.
    checker: Arc<AccessChecker>,
}

impl std::fmt::Debug for CollaborationService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CollaborationService").finish()
    }
}

impl CollaborationService {
    /// Creates a new collaboration service.
    pub fn new(
        registry: Arc<dyn CollaborationRegistry>,
        users: Arc<dyn UserStore>,
        checker: Arc<AccessChecker>,
    ) -> Self {
        Self {
            registry,
            users,
            checker,
        }
    }

    /// Grants a user collaborator access to a note.
    ///
    /// The actor must own the note and the grantee must exist. Granting
    /// the same (note, user) pair again is idempotent and returns the
    /// surviving grant.
    pub async fn add(
        &self,
        actor: UserId,
        note_id: NoteId,
        user_id: UserId,
    ) -> Result<GrantId, AppError> {
        self.checker.assert_owner(note_id, actor).await?;

        if self.users.find_by_id(user_id).await?.is_none() {
            return Err(AppError::not_found("User not found"));
        }

        let grant_id = self.registry.add(note_id, user_id).await?;

        info!(
            note_id = %note_id,
            user_id = %user_id,
            grant_id = %grant_id,
            "Collaborator added"
        );

        Ok(grant_id)
    }

    /// Revokes a user's collaborator access to a note.
    ///
    /// The actor must own the note. Revoking a grant that does not exist
    /// fails: there was nothing to remove.
    pub async fn remove(
        &self,
        actor: UserId,
        note_id: NoteId,
        user_id: UserId,
    ) -> Result<(), AppError> {
        self.checker.assert_owner(note_id, actor).await?;

        if !self.registry.remove(note_id, user_id).await? {
            return Err(AppError::invariant("Collaboration not found"));
        }

        info!(note_id = %note_id, user_id = %user_id, "Collaborator removed");

        Ok(())
    }
}
