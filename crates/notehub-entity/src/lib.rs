//! # notehub-entity
//!
//! Domain entity models for NoteHub. Every struct in this crate
//! represents a database table row or a domain value object. All entities
//! derive `Debug`, `Clone`, `Serialize`, `Deserialize`, and database
//! entities additionally derive `sqlx::FromRow`.

pub mod note;
pub mod session;
pub mod user;

pub use note::{CreateNote, Note, UpdateNote};
pub use session::Session;
pub use user::{CreateUser, User};
