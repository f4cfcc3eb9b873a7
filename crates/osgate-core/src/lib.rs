//! osgate core: policy classification primitives, shared data model, and error types.
//!
//! This crate defines the pure policy classifier and the value types shared by
//! the gateway and its collaborators. It intentionally carries no runtime or
//! transport dependencies so it can be reused in multiple contexts.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `GateError`/`Result` so production
//! processes do not crash on malformed input or bad traffic.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod classify;
pub mod error;
pub mod model;

/// Shared result type.
pub use error::{GateError, Result};
