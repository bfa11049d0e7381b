//! Core traits defined in `notehub-core` and implemented by other crates.

pub mod collaboration;
pub mod credential;
pub mod note;
pub mod session;

pub use collaboration::CollaborationRegistry;
pub use credential::{CredentialStore, StoredCredentials};
pub use note::NoteDirectory;
pub use session::{SessionRecord, SessionStore};
