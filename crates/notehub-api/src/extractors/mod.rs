//! Custom request extractors.

mod auth;

pub use auth::AuthUser;
