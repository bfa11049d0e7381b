//! Authentication handlers — login, refresh, logout.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use validator::Validate;

use crate::dto::request::{LoginRequest, RefreshTokenRequest};
use crate::dto::response::{AccessTokenResponse, ApiResponse, MessageResponse, TokenPairResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/authentications
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<(StatusCode, Json<ApiResponse<TokenPairResponse>>), ApiError> {
    req.validate()?;

    let tokens = state
        .session_manager
        .login(&req.username, &req.password)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(TokenPairResponse::from(tokens))),
    ))
}

/// PUT /api/authentications
pub async fn refresh(
    State(state): State<AppState>,
    Json(req): Json<RefreshTokenRequest>,
) -> Result<Json<ApiResponse<AccessTokenResponse>>, ApiError> {
    req.validate()?;

    let (access_token, expires_at) = state.session_manager.refresh(&req.refresh_token).await?;

    Ok(Json(ApiResponse::ok(AccessTokenResponse {
        access_token,
        expires_at,
    })))
}

/// DELETE /api/authentications
pub async fn logout(
    State(state): State<AppState>,
    Json(req): Json<RefreshTokenRequest>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    req.validate()?;

    state.session_manager.logout(&req.refresh_token).await?;

    Ok(Json(ApiResponse::ok(MessageResponse::new(
        "Logged out successfully",
    ))))
}
