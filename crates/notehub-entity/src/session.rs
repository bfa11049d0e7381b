//! Session entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use notehub_core::types::UserId;

/// A refresh-token session row.
///
/// The raw refresh token value is the primary key. Sessions are created
/// on login and marked revoked on logout; revoked rows are retained for
/// audit until purged.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Session {
    /// The raw refresh token value.
    #[serde(skip_serializing, default)]
    pub token: String,
    /// The user this session belongs to.
    pub user_id: UserId,
    /// When the refresh token was issued (login time).
    pub issued_at: DateTime<Utc>,
    /// When the session was revoked, if it has been.
    pub revoked_at: Option<DateTime<Utc>>,
}

impl Session {
    /// Check whether the session has been revoked.
    pub fn is_revoked(&self) -> bool {
        self.revoked_at.is_some()
    }

    /// Check whether the session is live (never revoked).
    pub fn is_live(&self) -> bool {
        self.revoked_at.is_none()
    }
}
