//! Session lifecycle management: login, refresh, and logout flows.

pub mod manager;

pub use manager::SessionManager;
