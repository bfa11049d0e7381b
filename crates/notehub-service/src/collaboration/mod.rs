//! Collaboration grant management.

pub mod service;

pub use service::CollaborationService;
