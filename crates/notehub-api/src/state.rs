//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use notehub_auth::jwt::decoder::JwtDecoder;
use notehub_auth::session::manager::SessionManager;
use notehub_core::config::AppConfig;
use notehub_service::collaboration::CollaborationService;
use notehub_service::note::NoteService;
use notehub_service::user::UserService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Auth ─────────────────────────────────────────────────
    /// JWT decoder for bearer token verification
    pub decoder: Arc<JwtDecoder>,
    /// Session lifecycle manager
    pub session_manager: Arc<SessionManager>,

    // ── Services ─────────────────────────────────────────────
    /// User registration and profiles
    pub user_service: Arc<UserService>,
    /// Note CRUD
    pub note_service: Arc<NoteService>,
    /// Collaboration grants
    pub collaboration_service: Arc<CollaborationService>,
}
