//! Collaboration handlers — grant and revoke note access.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use crate::dto::request::CollaborationRequest;
use crate::dto::response::{ApiResponse, CollaborationResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/collaborations
pub async fn add_collaborator(
    State(state): State<AppState>,
    AuthUser(actor): AuthUser,
    Json(req): Json<CollaborationRequest>,
) -> Result<(StatusCode, Json<ApiResponse<CollaborationResponse>>), ApiError> {
    let grant_id = state
        .collaboration_service
        .add(actor, req.note_id, req.user_id)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(CollaborationResponse {
            collaboration_id: grant_id,
        })),
    ))
}

/// DELETE /api/collaborations
pub async fn remove_collaborator(
    State(state): State<AppState>,
    AuthUser(actor): AuthUser,
    Json(req): Json<CollaborationRequest>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state
        .collaboration_service
        .remove(actor, req.note_id, req.user_id)
        .await?;

    Ok(Json(ApiResponse::ok(MessageResponse::new(
        "Collaborator removed",
    ))))
}
