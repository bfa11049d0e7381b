//! # notehub-service
//!
//! Business logic service layer for NoteHub. Each service orchestrates
//! durable stores, access checks, and authentication components to
//! implement application-level use cases.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references. Persistence is consumed
//! through the store traits defined here and in `notehub-core`, so the
//! services never name a concrete database.

pub mod collaboration;
pub mod note;
pub mod user;

pub use collaboration::CollaborationService;
pub use note::{NoteContent, NoteService, NoteStore};
pub use user::{UserService, UserStore};
