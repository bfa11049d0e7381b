//! Bearer token extraction and verification.

use axum::extract::FromRequestParts;
use axum::http::header;
use axum::http::request::Parts;

use notehub_auth::TokenKind;
use notehub_core::error::AppError;
use notehub_core::types::UserId;

use crate::error::ApiError;
use crate::state::AppState;

/// The authenticated caller, extracted from the `Authorization` header.
///
/// Verification is purely cryptographic. The access token is checked
/// for a valid signature and expiry; no session lookup happens here,
/// so a revoked session does not invalidate access tokens already in
/// flight.
#[derive(Debug, Clone, Copy)]
pub struct AuthUser(pub UserId);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| AppError::authentication("Missing Authorization header"))?;

        let token = header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::authentication("Invalid Authorization header format"))?;

        let claims = state
            .decoder
            .verify(token, TokenKind::Access)
            .map_err(AppError::from)?;

        Ok(AuthUser(claims.sub))
    }
}
