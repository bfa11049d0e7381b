//! Application-wide error type for NoteHub.
//!
//! Every fallible operation in the workspace resolves to [`AppError`], so
//! errors cross crate boundaries through the `?` operator without
//! intermediate conversion layers. The HTTP layer decides status codes
//! from [`ErrorKind`] alone; lower layers never reason about statuses.

use std::fmt;
use thiserror::Error;

/// Classifies an [`AppError`] for status mapping and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// The addressed resource does not exist.
    NotFound,
    /// Bad credentials, or an invalid, expired, or revoked token.
    Authentication,
    /// The caller is known but lacks the right to perform this action.
    Authorization,
    /// The request payload failed validation.
    Validation,
    /// The request collides with existing state, such as a taken username.
    Conflict,
    /// The request contradicts server-side bookkeeping, such as revoking
    /// a session that was never recorded.
    Invariant,
    /// Unexpected internal failure.
    Internal,
    /// The database rejected or failed an operation.
    Database,
    /// The application configuration could not be loaded or is unusable.
    Configuration,
    /// A value could not be serialized or deserialized.
    Serialization,
}

impl ErrorKind {
    /// Stable machine-readable code for logs and response bodies.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotFound => "NOT_FOUND",
            Self::Authentication => "AUTHENTICATION",
            Self::Authorization => "AUTHORIZATION",
            Self::Validation => "VALIDATION",
            Self::Conflict => "CONFLICT",
            Self::Invariant => "INVARIANT",
            Self::Internal => "INTERNAL",
            Self::Database => "DATABASE",
            Self::Configuration => "CONFIGURATION",
            Self::Serialization => "SERIALIZATION",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// The error type carried by every `Result` in the workspace.
///
/// Pairs a [`ErrorKind`] with a message safe to show callers. The
/// original cause, when one exists, rides along as `source` for logging
/// but is dropped on [`Clone`] since boxed errors cannot be cloned.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    /// The category of error.
    pub kind: ErrorKind,
    /// A human-readable error message.
    pub message: String,
    /// Optional underlying cause.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

/// Generates one shorthand constructor per error kind.
macro_rules! kind_constructors {
    ($($(#[$doc:meta])* $fn_name:ident => $kind:ident),* $(,)?) => {
        impl AppError {
            $(
                $(#[$doc])*
                pub fn $fn_name(message: impl Into<String>) -> Self {
                    Self::new(ErrorKind::$kind, message)
                }
            )*
        }
    };
}

impl AppError {
    /// Create a new application error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Create a new application error with an underlying cause.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

kind_constructors! {
    /// Create a not-found error.
    not_found => NotFound,
    /// Create an authentication error.
    authentication => Authentication,
    /// Create an authorization error.
    authorization => Authorization,
    /// Create a validation error.
    validation => Validation,
    /// Create a conflict error.
    conflict => Conflict,
    /// Create an invariant-violation error.
    invariant => Invariant,
    /// Create an internal error.
    internal => Internal,
    /// Create a database error.
    database => Database,
    /// Create a configuration error.
    configuration => Configuration,
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            message: self.message.clone(),
            source: None,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(
            ErrorKind::Serialization,
            format!("JSON serialization error: {err}"),
            err,
        )
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::with_source(ErrorKind::Internal, format!("I/O error: {err}"), err)
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::with_source(
            ErrorKind::Configuration,
            format!("Configuration error: {err}"),
            err,
        )
    }
}
