//! NoteHub Server — Collaborative Notes Platform
//!
//! Binary entry point: loads configuration, connects storage, assembles
//! the auth and service layers, and serves the HTTP API until shutdown.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use notehub_api::{AppState, build_router};
use notehub_auth::{
    AccessChecker, CredentialVerifier, JwtDecoder, JwtEncoder, PasswordHasher, PasswordValidator,
    SessionManager,
};
use notehub_core::config::AppConfig;
use notehub_core::error::AppError;
use notehub_database::DatabasePool;
use notehub_database::migration::run_migrations;
use notehub_database::repositories::{
    CollaborationRepository, NoteRepository, SessionRepository, UserRepository,
};
use notehub_service::{CollaborationService, NoteService, UserService};

#[tokio::main]
async fn main() {
    let env = std::env::var("NOTEHUB_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Cannot start without a valid configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Fatal: {e}");
        std::process::exit(1);
    }
}

/// Install the tracing subscriber before anything else logs.
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    if config.logging.is_json() {
        fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .with_thread_ids(true)
            .init();
    } else {
        fmt().pretty().with_env_filter(filter).with_target(true).init();
    }
}

/// Bring the server up stage by stage, then block until shutdown.
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting NoteHub v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Database connection + migrations ─────────────────
    let db = DatabasePool::connect(&config.database).await?;
    db.health_check().await?;
    run_migrations(db.pool()).await?;

    // ── Step 2: Repositories ─────────────────────────────────────
    let user_repo = Arc::new(UserRepository::new(db.pool().clone()));
    let note_repo = Arc::new(NoteRepository::new(db.pool().clone()));
    let collaboration_repo = Arc::new(CollaborationRepository::new(db.pool().clone()));
    let session_repo = Arc::new(SessionRepository::new(db.pool().clone()));

    // ── Step 3: Auth components ──────────────────────────────────
    let password_hasher = Arc::new(PasswordHasher::new());
    let password_validator = Arc::new(PasswordValidator::new(&config.auth));
    let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
    let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));
    let credential_verifier = Arc::new(CredentialVerifier::new(
        Arc::clone(&user_repo),
        Arc::clone(&password_hasher),
    ));
    let session_manager = Arc::new(SessionManager::new(
        Arc::clone(&credential_verifier),
        Arc::clone(&jwt_encoder),
        Arc::clone(&jwt_decoder),
        Arc::clone(&session_repo),
    ));
    let access_checker = Arc::new(AccessChecker::new(
        Arc::clone(&note_repo),
        Arc::clone(&collaboration_repo),
    ));
    tracing::info!("Auth components ready");

    // ── Step 4: Purge revoked sessions ───────────────────────────
    let purged = session_manager.purge_revoked().await?;
    if purged > 0 {
        tracing::info!(purged, "Removed revoked sessions from previous runs");
    }

    // ── Step 5: Services ─────────────────────────────────────────
    let user_service = Arc::new(UserService::new(
        Arc::clone(&user_repo),
        Arc::clone(&password_hasher),
        Arc::clone(&password_validator),
    ));
    let note_service = Arc::new(NoteService::new(
        Arc::clone(&note_repo),
        Arc::clone(&access_checker),
    ));
    let collaboration_service = Arc::new(CollaborationService::new(
        Arc::clone(&collaboration_repo),
        Arc::clone(&user_repo),
        Arc::clone(&access_checker),
    ));
    tracing::info!("Services ready");

    // ── Step 6: HTTP server ──────────────────────────────────────
    let app_state = AppState {
        config: Arc::new(config.clone()),
        decoder: Arc::clone(&jwt_decoder),
        session_manager: Arc::clone(&session_manager),
        user_service: Arc::clone(&user_service),
        note_service: Arc::clone(&note_service),
        collaboration_service: Arc::clone(&collaboration_service),
    };

    let app = build_router(app_state);

    let addr = config.server.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("NoteHub listening on {addr}");

    // ── Step 7: Graceful shutdown ────────────────────────────────
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            shutdown_signal().await;
            tracing::info!("Shutdown signal received, draining connections");
        })
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    db.close().await;
    tracing::info!("NoteHub stopped");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
