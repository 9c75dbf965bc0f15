//! # kl-anniversary
//!
//! Anniversaries and D-Day reminders on top of `kl-calendar`.
//!
//! The calendar crate reports days that do not exist in a target year; this
//! crate decides what to do about them ([`policy`]), logs those decisions
//! through `tracing`, and owns the mutable reminder state
//! ([`ReminderBoard`]).

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Anniversaries and their yearly occurrences.
pub mod anniversary;

/// Deserializable configuration.
pub mod config;

/// Recovery rules for days missing in a target year.
pub mod policy;

/// D-Day board and to-do list reminders.
pub mod reminders;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use anniversary::{Anniversary, AnniversaryDate, AnniversaryKind, AnniversaryState, DDay};
pub use config::{AnniversaryConfig, Config, ReminderConfig};
pub use reminders::{ListReminder, ReminderBoard};

use kl_calendar::SolarDate;
use kl_core::errors::Result;

/// Today's date on the local clock.
///
/// # Errors
/// [`kl_core::Error::OutOfRange`] once the clock passes 2050.
pub fn local_today() -> Result<SolarDate> {
    SolarDate::try_from(chrono::Local::now().date_naive())
}
