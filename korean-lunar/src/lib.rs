//! # korean-lunar
//!
//! Korean lunar-solar calendar conversion for 1391–2050, following the
//! tables of the Korea Astronomy and Space Science Institute.
//!
//! This crate is a **façade** that re-exports the workspace crates.
//! Application code should depend on this crate rather than the individual
//! `kl-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! korean-lunar = "0.1"
//! ```
//!
//! ```rust
//! use korean_lunar::calendar::{gapja_name, GlyphSet, SolarDate};
//!
//! let lunar = SolarDate::new(2024, 2, 10).unwrap().to_lunar().unwrap();
//! assert_eq!(lunar.to_string(), "2024-01-01");
//! assert_eq!(gapja_name(&lunar, GlyphSet::Korean).unwrap(), "갑진년 병인월 갑진일");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error definitions, the calendar tag, and date-string parsers.
pub use kl_core as core;

/// Year table, day counting, conversion, validity, GapJa, holidays.
pub use kl_calendar as calendar;

/// Anniversaries, D-Day reminders, and configuration.
pub use kl_anniversary as anniversary;

/// Commonly used items.
pub mod prelude {
    pub use kl_anniversary::{Anniversary, AnniversaryDate, AnniversaryKind, DDay, ReminderBoard};
    pub use kl_calendar::{
        gapja_name, is_valid_date, lunar_holidays, lunar_to_solar, solar_to_lunar, GlyphSet,
        LunarDate, LunarHoliday, SolarDate,
    };
    pub use kl_core::{CalendarKind, Error, Result};
}
