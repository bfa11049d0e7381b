//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

use notehub_core::types::{NoteId, UserId};
use notehub_service::note::NoteContent;

/// Registration request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Username.
    #[validate(length(min = 3, max = 50, message = "Username must be 3 to 50 characters"))]
    pub username: String,
    /// Full display name.
    #[validate(length(min = 1, message = "Full name is required"))]
    pub fullname: String,
    /// Password.
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Username.
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Token refresh and logout request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RefreshTokenRequest {
    /// Refresh token.
    #[validate(length(min = 1, message = "Refresh token is required"))]
    pub refresh_token: String,
}

/// Note create/update request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NoteRequest {
    /// Note title.
    #[validate(length(min = 1, max = 255, message = "Title must be 1 to 255 characters"))]
    pub title: String,
    /// Note body text.
    pub body: String,
    /// Free-form tags.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl From<NoteRequest> for NoteContent {
    fn from(req: NoteRequest) -> Self {
        Self {
            title: req.title,
            body: req.body,
            tags: req.tags,
        }
    }
}

/// Collaboration grant/revoke request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollaborationRequest {
    /// Note being shared.
    pub note_id: NoteId,
    /// User receiving or losing access.
    pub user_id: UserId,
}
