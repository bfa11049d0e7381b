//! Session store trait for refresh token persistence and revocation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::result::AppResult;
use crate::types::UserId;

/// A live session as seen by the authentication core.
#[derive(Debug, Clone)]
pub struct SessionRecord {
    /// Subject the refresh token was issued to.
    pub user_id: UserId,
    /// When the refresh token was issued.
    pub issued_at: DateTime<Utc>,
}

/// Trait for the server-side registry of issued refresh tokens.
///
/// The raw refresh token string is the store key. A token is *live* while
/// its row exists and has not been revoked; revocation is terminal.
/// Defined here in `notehub-core` and implemented by the session
/// repository in `notehub-database`.
#[async_trait]
pub trait SessionStore: Send + Sync + 'static {
    /// Persist a newly issued refresh token for the given subject.
    async fn insert(
        &self,
        token: &str,
        user_id: UserId,
        issued_at: DateTime<Utc>,
    ) -> AppResult<()>;

    /// Look up a live session by its raw token value.
    ///
    /// Returns `None` for unknown tokens and for revoked ones; the two
    /// cases are indistinguishable to callers.
    async fn find_active(&self, token: &str) -> AppResult<Option<SessionRecord>>;

    /// Mark a live session revoked.
    ///
    /// Returns `false` when no live session matches the token, so callers
    /// can reject an invalidation that has nothing to invalidate.
    async fn revoke(&self, token: &str) -> AppResult<bool>;

    /// Delete revoked session rows retained for audit. Returns the number
    /// of rows purged.
    async fn purge_revoked(&self) -> AppResult<u64>;
}
