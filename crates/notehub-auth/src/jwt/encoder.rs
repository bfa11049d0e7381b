//! JWT token creation with per-family signing keys and TTLs.

use chrono::{DateTime, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};

use notehub_core::config::auth::AuthConfig;
use notehub_core::error::AppError;
use notehub_core::types::UserId;

use super::claims::{Claims, TokenKind};

/// Creates signed JWT access and refresh tokens.
///
/// Each token family has its own HMAC key and its own TTL.
#[derive(Clone)]
pub struct JwtEncoder {
    /// HMAC secret key for access token signing.
    access_key: EncodingKey,
    /// HMAC secret key for refresh token signing.
    refresh_key: EncodingKey,
    /// Access token TTL in minutes.
    access_ttl_minutes: i64,
    /// Refresh token TTL in days.
    refresh_ttl_days: i64,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder")
            .field("access_ttl_minutes", &self.access_ttl_minutes)
            .field("refresh_ttl_days", &self.refresh_ttl_days)
            .finish()
    }
}

/// Result of a successful token pair generation.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct TokenPair {
    /// Short-lived access token.
    pub access_token: String,
    /// Long-lived refresh token.
    pub refresh_token: String,
    /// Access token expiration timestamp.
    pub access_expires_at: DateTime<Utc>,
    /// Refresh token expiration timestamp.
    pub refresh_expires_at: DateTime<Utc>,
}

impl JwtEncoder {
    /// Creates a new encoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            access_key: EncodingKey::from_secret(config.access_token_secret.as_bytes()),
            refresh_key: EncodingKey::from_secret(config.refresh_token_secret.as_bytes()),
            access_ttl_minutes: config.access_ttl_minutes as i64,
            refresh_ttl_days: config.refresh_ttl_days as i64,
        }
    }

    /// Issues a single token of the given family for the subject.
    ///
    /// Returns the signed token together with its expiration instant.
    pub fn issue(
        &self,
        kind: TokenKind,
        subject: UserId,
    ) -> Result<(String, DateTime<Utc>), AppError> {
        let now = Utc::now();
        let (key, expires_at) = match kind {
            TokenKind::Access => (
                &self.access_key,
                now + chrono::Duration::minutes(self.access_ttl_minutes),
            ),
            TokenKind::Refresh => (
                &self.refresh_key,
                now + chrono::Duration::days(self.refresh_ttl_days),
            ),
        };

        let claims = Claims {
            sub: subject,
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(&Header::default(), &claims, key)
            .map_err(|e| AppError::internal(format!("Failed to encode token: {e}")))?;

        Ok((token, expires_at))
    }

    /// Issues an access + refresh token pair for the subject.
    pub fn issue_pair(&self, subject: UserId) -> Result<TokenPair, AppError> {
        let (access_token, access_expires_at) = self.issue(TokenKind::Access, subject)?;
        let (refresh_token, refresh_expires_at) = self.issue(TokenKind::Refresh, subject)?;

        Ok(TokenPair {
            access_token,
            refresh_token,
            access_expires_at,
            refresh_expires_at,
        })
    }
}
