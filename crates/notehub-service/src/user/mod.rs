//! User registration and profile lookup.

pub mod service;
pub mod store;

pub use service::UserService;
pub use store::UserStore;
