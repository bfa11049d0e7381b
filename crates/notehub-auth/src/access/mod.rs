//! Resource access control composing ownership with collaboration grants.

pub mod checker;

pub use checker::{AccessChecker, AccessDecision, AccessRole};
