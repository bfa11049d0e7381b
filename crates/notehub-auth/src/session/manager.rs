//! Session lifecycle manager — login, refresh, and logout flows.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use notehub_core::error::AppError;
use notehub_core::traits::SessionStore;

use crate::credentials::CredentialVerifier;
use crate::jwt::encoder::TokenPair;
use crate::jwt::{JwtDecoder, JwtEncoder, TokenKind};

/// Manages the refresh-token session lifecycle.
///
/// A session is created on login by persisting the raw refresh token,
/// stays active across any number of refreshes, and ends when logout
/// marks it revoked. Refresh-token validity is always re-checked against
/// the store; nothing here caches a validity decision.
#[derive(Clone)]
pub struct SessionManager {
    /// Credential verification for login.
    verifier: Arc<CredentialVerifier>,
    /// JWT encoder for token generation.
    encoder: Arc<JwtEncoder>,
    /// JWT decoder for token validation.
    decoder: Arc<JwtDecoder>,
    /// Refresh token persistence.
    sessions: Arc<dyn SessionStore>,
}

impl std::fmt::Debug for SessionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionManager").finish()
    }
}

impl SessionManager {
    /// Creates a new session manager with all required dependencies.
    pub fn new(
        verifier: Arc<CredentialVerifier>,
        encoder: Arc<JwtEncoder>,
        decoder: Arc<JwtDecoder>,
        sessions: Arc<dyn SessionStore>,
    ) -> Self {
        Self {
            verifier,
            encoder,
            decoder,
            sessions,
        }
    }

    /// Performs the complete login flow:
    ///
    /// 1. Verify credentials
    /// 2. Issue an access + refresh token pair
    /// 3. Persist the refresh token, keyed by its own value
    pub async fn login(&self, username: &str, password: &str) -> Result<TokenPair, AppError> {
        let user_id = self.verifier.verify(username, password).await?;

        let tokens = self.encoder.issue_pair(user_id)?;

        self.sessions
            .insert(&tokens.refresh_token, user_id, Utc::now())
            .await?;

        info!(user_id = %user_id, "Login successful");

        Ok(tokens)
    }

    /// Exchanges a valid refresh token for a new access token.
    ///
    /// Verification is two-stage and both stages are mandatory:
    ///
    /// 1. Pure check — signature against the refresh key, then expiry
    /// 2. Store check — the token must be present and not revoked
    ///
    /// The presented refresh token remains valid afterwards; there is no
    /// rotation.
    pub async fn refresh(&self, refresh_token: &str) -> Result<(String, DateTime<Utc>), AppError> {
        self.decoder.verify(refresh_token, TokenKind::Refresh)?;

        let session = self
            .sessions
            .find_active(refresh_token)
            .await?
            .ok_or_else(|| {
                warn!("Refresh attempt with unknown or revoked token");
                AppError::authentication("Refresh token is invalid")
            })?;

        let issued = self.encoder.issue(TokenKind::Access, session.user_id)?;

        info!(user_id = %session.user_id, "Access token refreshed");

        Ok(issued)
    }

    /// Ends a session by revoking its refresh token in the store.
    ///
    /// Consults only the store; the token's signature is irrelevant here.
    /// When no live session matches there is nothing to invalidate, which
    /// is an invariant failure rather than an authentication one.
    pub async fn logout(&self, refresh_token: &str) -> Result<(), AppError> {
        let revoked = self.sessions.revoke(refresh_token).await?;

        if !revoked {
            warn!("Logout attempt with unknown or already revoked token");
            return Err(AppError::invariant("Refresh token not found"));
        }

        info!("Session revoked");

        Ok(())
    }

    /// Deletes revoked session rows retained for audit.
    pub async fn purge_revoked(&self) -> Result<u64, AppError> {
        let purged = self.sessions.purge_revoked().await?;
        if purged > 0 {
            info!(purged, "Purged revoked sessions");
        }
        Ok(purged)
    }
}
