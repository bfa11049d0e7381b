//! Username/password verification against the credential store.

use std::sync::Arc;

use tracing::warn;

use notehub_core::error::AppError;
use notehub_core::traits::CredentialStore;
use notehub_core::types::UserId;

use crate::password::PasswordHasher;

/// Verifies submitted credentials and resolves the owning user.
///
/// Unknown usernames and wrong passwords produce the identical error so
/// callers cannot probe which usernames exist.
#[derive(Clone)]
pub struct CredentialVerifier {
    /// Credential lookup.
    store: Arc<dyn CredentialStore>,
    /// Password hasher for comparison.
    hasher: Arc<PasswordHasher>,
}

impl std::fmt::Debug for CredentialVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialVerifier").finish()
    }
}

impl CredentialVerifier {
    /// Creates a new verifier over the given credential store.
    pub fn new(store: Arc<dyn CredentialStore>, hasher: Arc<PasswordHasher>) -> Self {
        Self { store, hasher }
    }

    /// Verifies the username/password pair and returns the user's ID.
    pub async fn verify(&self, username: &str, password: &str) -> Result<UserId, AppError> {
        let credentials = match self.store.find_by_username(username).await? {
            Some(c) => c,
            None => {
                warn!(username = %username, "Login attempt with unknown username");
                return Err(Self::mismatch());
            }
        };

        let valid = self
            .hasher
            .verify_password(password, &credentials.password_hash)?;

        if !valid {
            warn!(user_id = %credentials.user_id, "Login attempt with wrong password");
            return Err(Self::mismatch());
        }

        Ok(credentials.user_id)
    }

    fn mismatch() -> AppError {
        AppError::authentication("The credentials you provided are wrong")
    }
}
