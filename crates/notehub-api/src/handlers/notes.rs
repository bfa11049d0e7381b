//! Note handlers — CRUD guarded by ownership and collaboration.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use validator::Validate;

use notehub_core::types::NoteId;

use crate::dto::request::NoteRequest;
use crate::dto::response::{ApiResponse, MessageResponse, NoteResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/notes
pub async fn create_note(
    State(state): State<AppState>,
    AuthUser(actor): AuthUser,
    Json(req): Json<NoteRequest>,
) -> Result<(StatusCode, Json<ApiResponse<NoteResponse>>), ApiError> {
    req.validate()?;

    let note = state.note_service.create(actor, req.into()).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(NoteResponse::from(note))),
    ))
}

/// GET /api/notes
pub async fn list_notes(
    State(state): State<AppState>,
    AuthUser(actor): AuthUser,
) -> Result<Json<ApiResponse<Vec<NoteResponse>>>, ApiError> {
    let notes = state.note_service.list(actor).await?;

    Ok(Json(ApiResponse::ok(
        notes.into_iter().map(NoteResponse::from).collect(),
    )))
}

/// GET /api/notes/{id}
pub async fn get_note(
    State(state): State<AppState>,
    AuthUser(actor): AuthUser,
    Path(note_id): Path<NoteId>,
) -> Result<Json<ApiResponse<NoteResponse>>, ApiError> {
    let note = state.note_service.get(actor, note_id).await?;

    Ok(Json(ApiResponse::ok(NoteResponse::from(note))))
}

/// PUT /api/notes/{id}
pub async fn update_note(
    State(state): State<AppState>,
    AuthUser(actor): AuthUser,
    Path(note_id): Path<NoteId>,
    Json(req): Json<NoteRequest>,
) -> Result<Json<ApiResponse<NoteResponse>>, ApiError> {
    req.validate()?;

    let note = state
        .note_service
        .update(actor, note_id, req.into())
        .await?;

    Ok(Json(ApiResponse::ok(NoteResponse::from(note))))
}

/// DELETE /api/notes/{id}
pub async fn delete_note(
    State(state): State<AppState>,
    AuthUser(actor): AuthUser,
    Path(note_id): Path<NoteId>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.note_service.delete(actor, note_id).await?;

    Ok(Json(ApiResponse::ok(MessageResponse::new("Note deleted"))))
}
