//! # notehub-database
//!
//! PostgreSQL connection management and concrete repository
//! implementations for the store traits consumed by the NoteHub
//! services and authentication core.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
