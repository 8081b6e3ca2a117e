//! actiongate core: rule model and error surface.
//!
//! This crate defines the principal/rule-set model and the unified error type
//! shared by the engine crate and admin tooling. It intentionally carries no
//! runtime or storage dependencies so it can be reused in multiple contexts.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `GateError`/`Result` so a host process
//! does not crash on malformed rule input.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod model;

/// Shared result type.
pub use error::{GateError, Result};
