//! Note access checking against ownership and collaboration grants.

use std::sync::Arc;

use tracing::warn;

use notehub_core::error::AppError;
use notehub_core::traits::{CollaborationRegistry, NoteDirectory};
use notehub_core::types::{NoteId, UserId};

const DENIED_MESSAGE: &str = "You are not entitled to access this resource";
const NOT_FOUND_MESSAGE: &str = "Note not found";

/// The capacity under which access was granted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessRole {
    /// The actor owns the note.
    Owner,
    /// The actor holds a collaboration grant on the note.
    Collaborator,
}

/// Outcome of a note access decision.
///
/// Existence is decided before rights: a missing note is always reported
/// as `NotFound`, never masked as a permission failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDecision {
    /// Access granted, with the role it was granted under.
    Granted(AccessRole),
    /// The note exists but the actor has no rights over it.
    Denied(String),
    /// No note with the given id exists.
    NotFound,
}

/// Decides note access by composing the owner lookup with the
/// collaboration registry.
#[derive(Clone)]
pub struct AccessChecker {
    /// Resolves a note id to its owner.
    directory: Arc<dyn NoteDirectory>,
    /// Collaboration grant lookups.
    registry: Arc<dyn CollaborationRegistry>,
}

impl std::fmt::Debug for AccessChecker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessChecker").finish()
    }
}

impl AccessChecker {
    /// Creates a new access checker.
    pub fn new(directory: Arc<dyn NoteDirectory>, registry: Arc<dyn CollaborationRegistry>) -> Self {
        Self {
            directory,
            registry,
        }
    }

    /// Decides whether an actor may access a note:
    ///
    /// 1. Resolve the owner. A missing note is `NotFound` before any
    ///    rights are considered.
    /// 2. The owner is granted directly.
    /// 3. Anyone else needs a collaboration grant.
    ///
    /// A registry lookup fault is treated as "no grant" and folded into
    /// the same denial a grant-less actor receives; only the owner lookup
    /// propagates its store errors.
    pub async fn decide(&self, note_id: NoteId, actor: UserId) -> Result<AccessDecision, AppError> {
        let owner = match self.directory.owner_of(note_id).await? {
            Some(owner) => owner,
            None => return Ok(AccessDecision::NotFound),
        };

        if owner == actor {
            return Ok(AccessDecision::Granted(AccessRole::Owner));
        }

        match self.registry.exists(note_id, actor).await {
            Ok(true) => Ok(AccessDecision::Granted(AccessRole::Collaborator)),
            Ok(false) => Ok(AccessDecision::Denied(DENIED_MESSAGE.to_string())),
            Err(error) => {
                warn!(
                    note_id = %note_id,
                    user_id = %actor,
                    %error,
                    "Collaboration lookup failed, treating as no grant"
                );
                Ok(AccessDecision::Denied(DENIED_MESSAGE.to_string()))
            }
        }
    }

    /// Requires the actor to be the owner or a collaborator of the note.
    ///
    /// Returns the role access was granted under. Fails with a not-found
    /// error when the note is absent and an authorization error when the
    /// actor holds no rights.
    pub async fn assert_owner_or_collaborator(
        &self,
        note_id: NoteId,
        actor: UserId,
    ) -> Result<AccessRole, AppError> {
        match self.decide(note_id, actor).await? {
            AccessDecision::Granted(role) => Ok(role),
            AccessDecision::Denied(reason) => Err(AppError::authorization(reason)),
            AccessDecision::NotFound => Err(AppError::not_found(NOT_FOUND_MESSAGE)),
        }
    }

    /// Requires the actor to be the owner of the note.
    ///
    /// Collaborators do not pass; this guards owner-only operations such
    /// as managing grants or deleting the note.
    pub async fn assert_owner(&self, note_id: NoteId, actor: UserId) -> Result<(), AppError> {
        let owner = self
            .directory
            .owner_of(note_id)
            .await?
            .ok_or_else(|| AppError::not_found(NOT_FOUND_MESSAGE))?;

        if owner != actor {
            return Err(AppError::authorization(DENIED_MESSAGE));
        }

        Ok(())
    }
}
