//! Shared test helpers for integration tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::{DateTime, Utc};
use serde_json::Value;
use tower::ServiceExt;

use notehub_api::{AppState, build_router};
use notehub_auth::{
    AccessChecker, CredentialVerifier, JwtDecoder, JwtEncoder, PasswordHasher, PasswordValidator,
    SessionManager,
};
use notehub_core::config::{AppConfig, DatabaseConfig};
use notehub_core::config::app::ServerConfig;
use notehub_core::config::auth::AuthConfig;
use notehub_core::config::logging::LoggingConfig;
use notehub_core::result::AppResult;
use notehub_core::traits::{
    CollaborationRegistry, CredentialStore, NoteDirectory, SessionRecord, SessionStore,
    StoredCredentials,
};
use notehub_core::types::{GrantId, NoteId, UserId};
use notehub_entity::{CreateNote, CreateUser, Note, UpdateNote, User};
use notehub_service::{
    CollaborationService, NoteService, NoteStore, UserService, UserStore,
};

/// Password used for every test account. A passphrase, so it clears
/// strength validation.
pub const TEST_PASSWORD: &str = "kerberos has three heads";

/// In-memory backend standing in for the database.
///
/// One struct implements every store trait so a single `Arc` feeds all
/// services, the way the Postgres repositories all sit on one pool.
#[derive(Default)]
pub struct MemoryBackend {
    users: Mutex<Vec<User>>,
    notes: Mutex<Vec<Note>>,
    grants: Mutex<HashMap<(NoteId, UserId), GrantId>>,
    sessions: Mutex<HashMap<String, SessionSlot>>,
}

struct SessionSlot {
    user_id: UserId,
    issued_at: DateTime<Utc>,
    revoked: bool,
}

#[async_trait]
impl UserStore for MemoryBackend {
    async fn insert(&self, data: &CreateUser) -> AppResult<User> {
        let now = Utc::now();
        let user = User {
            id: UserId::new(),
            username: data.username.clone(),
            fullname: data.fullname.clone(),
            password_hash: data.password_hash.clone(),
            created_at: now,
            updated_at: now,
        };
        self.users.lock().unwrap().push(user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, user_id: UserId) -> AppResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == user_id)
            .cloned())
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.username == username)
            .cloned())
    }
}

#[async_trait]
impl CredentialStore for MemoryBackend {
    async fn find_by_username(&self, username: &str) -> AppResult<Option<StoredCredentials>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.username == username)
            .map(|u| StoredCredentials {
                user_id: u.id,
                password_hash: u.password_hash.clone(),
            }))
    }
}

#[async_trait]
impl NoteStore for MemoryBackend {
    async fn insert(&self, data: &CreateNote) -> AppResult<Note> {
        let now = Utc::now();
        let note = Note {
            id: NoteId::new(),
            title: data.title.clone(),
            body: data.body.clone(),
            tags: data.tags.clone(),
            owner: data.owner,
            created_at: now,
            updated_at: now,
        };
        self.notes.lock().unwrap().push(note.clone());
        Ok(note)
    }

    async fn find_by_id(&self, note_id: NoteId) -> AppResult<Option<Note>> {
        Ok(self
            .notes
            .lock()
            .unwrap()
            .iter()
            .find(|n| n.id == note_id)
            .cloned())
    }

    async fn list_accessible(&self, user_id: UserId) -> AppResult<Vec<Note>> {
        let grants = self.grants.lock().unwrap();
        Ok(self
            .notes
            .lock()
            .unwrap()
            .iter()
            .filter(|n| n.owner == user_id || grants.contains_key(&(n.id, user_id)))
            .cloned()
            .collect())
    }

    async fn update(&self, note_id: NoteId, changes: &UpdateNote) -> AppResult<Option<Note>> {
        let mut notes = self.notes.lock().unwrap();
        Ok(notes.iter_mut().find(|n| n.id == note_id).map(|n| {
            n.title = changes.title.clone();
            n.body = changes.body.clone();
            n.tags = changes.tags.clone();
            n.updated_at = Utc::now();
            n.clone()
        }))
    }

    async fn delete(&self, note_id: NoteId) -> AppResult<bool> {
        let mut notes = self.notes.lock().unwrap();
        let before = notes.len();
        notes.retain(|n| n.id != note_id);
        let deleted = notes.len() < before;
        if deleted {
            self.grants.lock().unwrap().retain(|(nid, _), _| *nid != note_id);
        }
        Ok(deleted)
    }
}

#[async_trait]
impl NoteDirectory for MemoryBackend {
    async fn owner_of(&self, note_id: NoteId) -> AppResult<Option<UserId>> {
        Ok(self
            .notes
            .lock()
            .unwrap()
            .iter()
            .find(|n| n.id == note_id)
            .map(|n| n.owner))
    }
}

#[async_trait]
impl CollaborationRegistry for MemoryBackend {
    async fn add(&self, note_id: NoteId, user_id: UserId) -> AppResult<GrantId> {
        let mut grants = self.grants.lock().unwrap();
        Ok(*grants.entry((note_id, user_id)).or_insert_with(GrantId::new))
    }

    async fn remove(&self, note_id: NoteId, user_id: UserId) -> AppResult<bool> {
        Ok(self
            .grants
            .lock()
            .unwrap()
            .remove(&(note_id, user_id))
            .is_some())
    }

    async fn exists(&self, note_id: NoteId, user_id: UserId) -> AppResult<bool> {
        Ok(self.grants.lock().unwrap().contains_key(&(note_id, user_id)))
    }
}

#[async_trait]
impl SessionStore for MemoryBackend {
    async fn insert(
        &self,
        token: &str,
        user_id: UserId,
        issued_at: DateTime<Utc>,
    ) -> AppResult<()> {
        self.sessions.lock().unwrap().insert(
            token.to_string(),
            SessionSlot {
                user_id,
                issued_at,
                revoked: false,
            },
        );
        Ok(())
    }

    async fn find_active(&self, token: &str) -> AppResult<Option<SessionRecord>> {
        Ok(self
            .sessions
            .lock()
            .unwrap()
            .get(token)
            .filter(|s| !s.revoked)
            .map(|s| SessionRecord {
                user_id: s.user_id,
                issued_at: s.issued_at,
            }))
    }

    async fn revoke(&self, token: &str) -> AppResult<bool> {
        let mut sessions = self.sessions.lock().unwrap();
        match sessions.get_mut(token) {
            Some(slot) if !slot.revoked => {
                slot.revoked = true;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn purge_revoked(&self) -> AppResult<u64> {
        let mut sessions = self.sessions.lock().unwrap();
        let before = sessions.len();
        sessions.retain(|_, s| !s.revoked);
        Ok((before - sessions.len()) as u64)
    }
}

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
}

impl TestApp {
    /// Create a new test application over a fresh in-memory backend
    pub fn new() -> Self {
        let config = test_config();
        let backend = Arc::new(MemoryBackend::default());

        let password_hasher = Arc::new(PasswordHasher::new());
        let password_validator = Arc::new(PasswordValidator::new(&config.auth));
        let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
        let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));
        let credential_verifier = Arc::new(CredentialVerifier::new(
            Arc::clone(&backend),
            Arc::clone(&password_hasher),
        ));
        let session_manager = Arc::new(SessionManager::new(
            credential_verifier,
            jwt_encoder,
            Arc::clone(&jwt_decoder),
            Arc::clone(&backend),
        ));
        let access_checker = Arc::new(AccessChecker::new(
            Arc::clone(&backend),
            Arc::clone(&backend),
        ));

        let user_service = Arc::new(UserService::new(
            Arc::clone(&backend),
            password_hasher,
            password_validator,
        ));
        let note_service = Arc::new(NoteService::new(
            Arc::clone(&backend),
            Arc::clone(&access_checker),
        ));
        let collaboration_service = Arc::new(CollaborationService::new(
            Arc::clone(&backend),
            Arc::clone(&backend),
            access_checker,
        ));

        let app_state = AppState {
            config: Arc::new(config),
            decoder: jwt_decoder,
            session_manager,
            user_service,
            note_service,
            collaboration_service,
        };

        Self {
            router: build_router(app_state),
        }
    }

    /// Register a user and return their ID
    pub async fn register(&self, username: &str) -> String {
        let body = serde_json::json!({
            "username": username,
            "fullname": format!("{} Test", username),
            "password": TEST_PASSWORD,
        });

        let response = self.request("POST", "/api/users", Some(body), None).await;
        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Registration failed: {:?}",
            response.body
        );

        response.body["data"]["id"]
            .as_str()
            .expect("No id in registration response")
            .to_string()
    }

    /// Login and return (access token, refresh token)
    pub async fn login(&self, username: &str) -> (String, String) {
        let body = serde_json::json!({
            "username": username,
            "password": TEST_PASSWORD,
        });

        let response = self
            .request("POST", "/api/authentications", Some(body), None)
            .await;
        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Login failed: {:?}",
            response.body
        );

        let access = response.body["data"]["access_token"]
            .as_str()
            .expect("No access_token in login response")
            .to_string();
        let refresh = response.body["data"]["refresh_token"]
            .as_str()
            .expect("No refresh_token in login response")
            .to_string();
        (access, refresh)
    }

    /// Register a user, log them in, and return their access token
    pub async fn register_and_login(&self, username: &str) -> String {
        self.register(username).await;
        let (access, _) = self.login(username).await;
        access
    }

    /// Create a note and return its ID
    pub async fn create_note(&self, token: &str, title: &str) -> String {
        let body = serde_json::json!({
            "title": title,
            "body": "some text",
            "tags": ["test"],
        });

        let response = self
            .request("POST", "/api/notes", Some(body), Some(token))
            .await;
        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Note creation failed: {:?}",
            response.body
        );

        response.body["data"]["id"]
            .as_str()
            .expect("No id in note response")
            .to_string()
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {}", token));
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

fn test_config() -> AppConfig {
    AppConfig {
        server: ServerConfig::default(),
        database: DatabaseConfig {
            url: "postgres://unused".to_string(),
            max_connections: 1,
            min_connections: 1,
            connect_timeout_seconds: 1,
            idle_timeout_seconds: 1,
        },
        auth: AuthConfig::default(),
        logging: LoggingConfig::default(),
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}
