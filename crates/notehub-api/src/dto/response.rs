//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::Serialize;

use notehub_auth::jwt::TokenPair;
use notehub_core::types::{GrantId, NoteId, UserId};
use notehub_entity::{Note, User};

/// Standard API response envelope.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request succeeded.
    pub success: bool,
    /// Response payload.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Wraps a payload in a success envelope.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Plain message payload.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    /// Human-readable message.
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Health check payload.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Crate version.
    pub version: String,
}

/// Token pair issued at login.
#[derive(Debug, Serialize)]
pub struct TokenPairResponse {
    /// Short-lived access token.
    pub access_token: String,
    /// Long-lived refresh token.
    pub refresh_token: String,
    /// Access token expiration timestamp.
    pub access_expires_at: DateTime<Utc>,
    /// Refresh token expiration timestamp.
    pub refresh_expires_at: DateTime<Utc>,
}

impl From<TokenPair> for TokenPairResponse {
    fn from(pair: TokenPair) -> Self {
        Self {
            access_token: pair.access_token,
            refresh_token: pair.refresh_token,
            access_expires_at: pair.access_expires_at,
            refresh_expires_at: pair.refresh_expires_at,
        }
    }
}

/// Fresh access token issued against a refresh token.
#[derive(Debug, Serialize)]
pub struct AccessTokenResponse {
    /// Short-lived access token.
    pub access_token: String,
    /// Access token expiration timestamp.
    pub expires_at: DateTime<Utc>,
}

/// User details.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    /// Unique user identifier.
    pub id: UserId,
    /// Unique login name.
    pub username: String,
    /// Human-readable full name.
    pub fullname: String,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            fullname: user.fullname,
            created_at: user.created_at,
        }
    }
}

/// Note details.
#[derive(Debug, Serialize)]
pub struct NoteResponse {
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

impl From<Note> for NoteResponse {
    fn from(note: Note) -> Self {
        Self {
            id: note.id,
            title: note.title,
            body: note.body,
            tags: note.tags,
            owner: note.owner,
            created_at: note.created_at,
            updated_at: note.updated_at,
        }
    }
}

/// Newly recorded collaboration grant.
#[derive(Debug, Serialize)]
pub struct CollaborationResponse {
    /// Identifier of the surviving grant.
    pub collaboration_id: GrantId,
}
