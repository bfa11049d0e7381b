//! Password strength policy for new registrations.

use notehub_core::config::auth::AuthConfig;
use notehub_core::error::AppError;

/// Enforces the configured password policy.
///
/// The policy is a minimum length plus an entropy estimate, rather than
/// character-class rules. A long lowercase passphrase passes; a short
/// string with decorations does not.
#[derive(Debug, Clone)]
pub struct PasswordValidator {
    min_length: usize,
}

impl PasswordValidator {
    /// Creates a new validator from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            min_length: config.password_min_length,
        }
    }

    /// Accepts or rejects a candidate password.
    ///
    /// `user_inputs` carries context strings such as the username, which
    /// the entropy estimate counts as guessable. Length is measured in
    /// characters, matching how the request DTO layer counts it.
    pub fn validate(&self, password: &str, user_inputs: &[&str]) -> Result<(), AppError> {
        if password.chars().count() < self.min_length {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters long",
                self.min_length
            )));
        }

        let estimate = zxcvbn::zxcvbn(password, user_inputs);
        if estimate.score() < zxcvbn::Score::Three {
            return Err(AppError::validation(
                "Password is too weak. Please use a longer or less predictable password.",
            ));
        }

        Ok(())
    }
}
