//! Concrete PostgreSQL repository implementations.

pub mod collaboration;
pub mod note;
pub mod session;
pub mod user;

pub use collaboration::CollaborationRepository;
pub use note::NoteRepository;
pub use session::SessionRepository;
pub use user::UserRepository;
