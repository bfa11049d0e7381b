//! End-to-end tests driving the HTTP API over an in-memory backend.

mod helpers;

mod collaboration_test;
mod note_access_test;
