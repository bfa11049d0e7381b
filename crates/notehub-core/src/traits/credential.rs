//! Credential store trait for username/password lookup.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::UserId;

/// Stored login credentials for a single user.
///
/// Only the fields the verifier needs; the full user record lives in the
/// entity layer.
#[derive(Debug, Clone)]
pub struct StoredCredentials {
    /// The owning user.
    pub user_id: UserId,
    /// Argon2id hash of the user's password (PHC string format).
    pub password_hash: String,
}

/// Trait for resolving login credentials by username.
///
/// Defined here in `notehub-core` and implemented by the user repository
/// in `notehub-database`.
#[async_trait]
pub trait CredentialStore: Send + Sync + 'static {
    /// Look up stored credentials by username.
    ///
    /// Returns `None` when the username is unknown. Callers must not leak
    /// the distinction between an unknown username and a wrong password.
    async fn find_by_username(&self, username: &str) -> AppResult<Option<StoredCredentials>>;
}
