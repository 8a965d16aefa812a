//! statsbeam core: metric sample types, the datagram encoder, and errors.
//!
//! This crate defines the contracts shared by the emission facade and any
//! transport. It carries no I/O or runtime dependencies.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here. Every fallible path
//! surfaces as `StatsError`/`Result`; a metric that cannot be encoded must never
//! take the host process down.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod protocol;

/// Shared result type.
pub use error::{ErrorCode, Result, StatsError};
