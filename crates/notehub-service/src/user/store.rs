//! Persistence trait for user records.

use async_trait::async_trait;

use notehub_core::result::AppResult;
use notehub_core::types::UserId;
use notehub_entity::user::{CreateUser, User};

/// Trait for the durable user store.
///
/// Implemented by the user repository in `notehub-database`; tests supply
/// in-memory implementations.
#[async_trait]
pub trait UserStore: Send + Sync + 'static {
    /// Persist a new user and return the stored row.
    ///
    /// The store's uniqueness constraint on `username` is the enforcement
    /// point under concurrency: a duplicate insert must fail with a
    /// conflict error, not a crash.
    async fn insert(&self, data: &CreateUser) -> AppResult<User>;

    /// Look up a user by id.
    async fn find_by_id(&self, user_id: UserId) -> AppResult<Option<User>>;

    /// Look up a user by username.
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;
}
