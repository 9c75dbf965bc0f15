//! # kl-core
//!
//! Core types, error definitions, and parsing helpers shared by the
//! korean-lunar crates.
//!
//! This crate provides the foundational building blocks used across the
//! workspace: the error hierarchy, the [`CalendarKind`] tag, and the
//! date-string parsers.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Solar / lunar calendar tag.
pub mod calendar_kind;

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

/// Miscellaneous utilities.
pub mod utilities;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Absolute day ordinal shared by the solar and lunar day countings.
///
/// Ordinal 1 is lunar 1391-01-01, which is solar 1391-02-05.
pub type Ordinal = i32;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use calendar_kind::CalendarKind;
pub use errors::{Error, Result};
