//! HTTP request handlers.

pub mod auth;
pub mod collaborations;
pub mod health;
pub mod notes;
pub mod users;
