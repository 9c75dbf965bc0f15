//! # kl-calendar
//!
//! Korean lunar calendar for 1391–2050: the year table, day counting in both
//! calendars, solar ↔ lunar conversion, validity checks, sexagenary (GapJa)
//! names, and the lunar public holidays.
//!
//! Everything here is a pure function over a compile-time table, so every
//! item is safe to call from any number of threads.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Solar ↔ lunar conversion.
pub mod conversion;

/// `SolarDate` and `LunarDate`.
pub mod date;

/// Absolute day counting in both calendars.
pub mod day_count;

/// Sexagenary (GapJa) names.
pub mod gapja;

/// Lunar public holidays.
pub mod holidays;

/// Date validity checks.
pub mod validity;

/// Per-year lunar calendar data.
pub mod year_table;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use conversion::{lunar_to_solar, solar_to_lunar};
pub use date::{LunarDate, SolarDate};
pub use gapja::{gapja_name, GapJa, GlyphSet, StemBranch};
pub use holidays::{lunar_holidays, LunarHoliday};
pub use validity::{check_date, is_valid_date};
pub use year_table::LunarYearRecord;
