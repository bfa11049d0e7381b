//! Route table for the NoteHub HTTP API.
//!
//! Endpoints are grouped per domain, mounted under `/api`, and share
//! one middleware stack: body limit, compression, tracing, CORS, and
//! request logging.

use axum::http::{HeaderName, HeaderValue, Method};
use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{delete, get, post, put},
};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use notehub_core::config::app::CorsConfig;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Assemble the application router around the given state.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(note_routes())
        .merge(collaboration_routes())
        .merge(health_routes());

    let max_body = state.config.server.max_body_bytes;
    let cors = build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api", api_routes)
        .layer(DefaultBodyLimit::max(max_body))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(middleware::request_logging))
        .with_state(state)
}

/// Authentication endpoints: login, refresh, logout
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/authentications", post(handlers::auth::login))
        .route("/authentications", put(handlers::auth::refresh))
        .route("/authentications", delete(handlers::auth::logout))
}

/// User registration and lookup
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(handlers::users::register))
        .route("/users/{id}", get(handlers::users::get_user))
}

/// Note CRUD
fn note_routes() -> Router<AppState> {
    Router::new()
        .route("/notes", post(handlers::notes::create_note))
        .route("/notes", get(handlers::notes::list_notes))
        .route("/notes/{id}", get(handlers::notes::get_note))
        .route("/notes/{id}", put(handlers::notes::update_note))
        .route("/notes/{id}", delete(handlers::notes::delete_note))
}

/// Collaboration grant and revoke
fn collaboration_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/collaborations",
            post(handlers::collaborations::add_collaborator),
        )
        .route(
            "/collaborations",
            delete(handlers::collaborations::remove_collaborator),
        )
}

/// Health check endpoints (no auth required)
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}

/// Translate the CORS section of the configuration into a tower layer.
///
/// A literal `"*"` entry switches origins or headers to allow-any;
/// entries that fail to parse are skipped rather than aborting startup.
fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    let mut cors = CorsLayer::new();

    cors = if config.allowed_origins.iter().any(|o| o == "*") {
        cors.allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors.allow_origin(origins)
    };

    let methods: Vec<Method> = config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();
    cors = cors.allow_methods(methods);

    cors = if config.allowed_headers.iter().any(|h| h == "*") {
        cors.allow_headers(Any)
    } else {
        let headers: Vec<HeaderName> = config
            .allowed_headers
            .iter()
            .filter_map(|h| h.parse().ok())
            .collect();
        cors.allow_headers(headers)
    };

    cors.max_age(std::time::Duration::from_secs(config.max_age_seconds))
}
