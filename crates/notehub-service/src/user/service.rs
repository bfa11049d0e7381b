//! User registration and profile lookup.

use std::sync::Arc;

use tracing::info;

use notehub_auth::password::{PasswordHasher, PasswordValidator};
use notehub_core::error::AppError;
use notehub_core::types::UserId;
use notehub_entity::user::{CreateUser, User};

use super::store::UserStore;

/// Handles user registration and profile reads.
#[derive(Clone)]
pub struct UserService {
    /// User persistence.
    users: Arc<dyn UserStore>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Password strength validator.
    validator: Arc<PasswordValidator>,
}

impl std::fmt::Debug for UserService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserService").finish()
    }
}

impl UserService {
    /// Creates a new user service.
    pub fn new(
        users: Arc<dyn UserStore>,
        hasher: Arc<PasswordHasher>,
        validator: Arc<PasswordValidator>,
    ) -> Self {
        Self {
            users,
            hasher,
            validator,
        }
    }

    /// Registers a new user.
    ///
    /// The username must be unused and the password must pass strength
    /// validation. The password is stored only as an Argon2id hash.
    pub async fn register(
        &self,
        username: &str,
        fullname: &str,
        password: &str,
    ) -> Result<User, AppError> {
        self.validator.validate(password, &[username])?;

        if self.users.find_by_username(username).await?.is_some() {
            return Err(AppError::conflict("Username is already taken"));
        }

        let password_hash = self.hasher.hash_password(password)?;

        let user = self
            .users
            .insert(&CreateUser {
                username: username.to_string(),
                fullname: fullname.to_string(),
                password_hash,
            })
            .await?;

        info!(user_id = %user.id, "User registered");

        Ok(user)
    }

    /// Gets a user's profile by id.
    pub async fn get_user(&self, user_id: UserId) -> Result<User, AppError> {
        self.users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }
}
