//! Note CRUD guarded by ownership and collaboration access checks.

pub mod service;
pub mod store;

pub use service::{NoteContent, NoteService};
pub use store::NoteStore;
