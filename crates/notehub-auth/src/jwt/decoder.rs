//! JWT token verification against the expected token family.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use thiserror::Error;

use notehub_core::config::auth::AuthConfig;
use notehub_core::error::AppError;

use super::claims::{Claims, TokenKind};

/// A failed token verification, split into the two outcomes callers must
/// be able to tell apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenError {
    /// The signature did not verify or the token is structurally broken.
    /// Also raised when a token of one family is presented to the other,
    /// since each family is verified against its own key.
    #[error("Invalid token")]
    Invalid,
    /// The signature verified but the expiry has passed.
    #[error("Token has expired")]
    Expired,
}

impl From<TokenError> for AppError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Invalid => AppError::authentication("Invalid token"),
            TokenError::Expired => AppError::authentication("Token has expired"),
        }
    }
}

/// Verifies JWT tokens, selecting the key by the expected family.
///
/// Verification is pure: signature and expiry only, no store lookup.
/// The session-store presence check for refresh tokens is a separate
/// stage owned by the session manager.
#[derive(Clone)]
pub struct JwtDecoder {
    /// HMAC secret key for access token verification.
    access_key: DecodingKey,
    /// HMAC secret key for refresh token verification.
    refresh_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 5; // 5 seconds leeway for clock skew

        Self {
            access_key: DecodingKey::from_secret(config.access_token_secret.as_bytes()),
            refresh_key: DecodingKey::from_secret(config.refresh_token_secret.as_bytes()),
            validation,
        }
    }

    /// Decodes and validates a token against the expected family's key.
    ///
    /// Checks signature validity and expiration. A token signed for the
    /// other family fails the signature check and reports
    /// [`TokenError::Invalid`].
    pub fn verify(&self, token: &str, expected: TokenKind) -> Result<Claims, TokenError> {
        let key = match expected {
            TokenKind::Access => &self.access_key,
            TokenKind::Refresh => &self.refresh_key,
        };

        let token_data = decode::<Claims>(token, key, &self.validation).map_err(|e| {
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid,
            }
        })?;

        Ok(token_data.claims)
    }
}
