//! # notehub-auth
//!
//! Authentication, token management, session lifecycle, and resource
//! access control for NoteHub.
//!
//! ## Modules
//!
//! - `jwt` — JWT token creation and verification for the access and
//!   refresh token families
//! - `password` — Argon2id password hashing and strength policy
//! - `credentials` — username/password verification against the
//!   credential store
//! - `session` — session lifecycle orchestration (login, refresh, logout)
//! - `access` — owner-or-collaborator access decisions for notes

pub mod access;
pub mod credentials;
pub mod jwt;
pub mod password;
pub mod session;

pub use access::{AccessChecker, AccessDecision, AccessRole};
pub use credentials::CredentialVerifier;
pub use jwt::{Claims, JwtDecoder, JwtEncoder, TokenError, TokenKind, TokenPair};
pub use password::{PasswordHasher, PasswordValidator};
pub use session::SessionManager;
