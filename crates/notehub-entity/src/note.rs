//! Note entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use notehub_core::types::{NoteId, UserId};

/// A note owned by one user and optionally shared with collaborators.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Note {
    /// Unique note identifier.
    pub id: NoteId,
    /// Note title.
    pub title: String,
    /// Note body text.
    pub body: String,
    /// Free-form tags.
    pub tags: Vec<String>,
    /// The owning user.
    pub owner: UserId,
    /// When the note was created.
    pub created_at: DateTime<Utc>,
    /// When the note was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new note.
#[derive(Debug, Clone)]
pub struct CreateNote {
    /// Note title.
    pub title: String,
    /// Note body text.
    pub body: String,
    /// Free-form tags.
    pub tags: Vec<String>,
    /// The owning user.
    pub owner: UserId,
}

/// Data for updating an existing note's content.
#[derive(Debug, Clone)]
pub struct UpdateNote {
    /// New title.
    pub title: String,
    /// New body text.
    pub body: String,
    /// New tags.
    pub tags: Vec<String>,
}
