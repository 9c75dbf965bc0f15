//! Date validity checks.
//!
//! [`is_valid_date`] is the boolean predicate; [`check_date`] returns the
//! reason a date is rejected. Conversions call `check_date` before touching
//! the day counters.

use kl_core::errors::Result;
use kl_core::{ensure, CalendarKind};

use crate::day_count::{
    solar_days_in_month, REFORM_FIRST_GREGORIAN_DAY, REFORM_GAP_DAYS, REFORM_LAST_JULIAN_DAY,
    REFORM_MONTH, REFORM_YEAR,
};
use crate::year_table;

/// Earliest supported lunar date, encoded as `yyyymmdd`.
pub const LUNAR_MIN_VALUE: i64 = 1391_01_01;

/// Latest supported lunar date, encoded as `yyyymmdd`.
pub const LUNAR_MAX_VALUE: i64 = 2050_11_18;

/// Earliest supported solar date, encoded as `yyyymmdd`.
pub const SOLAR_MIN_VALUE: i64 = 1391_02_05;

/// Latest supported solar date, encoded as `yyyymmdd`.
pub const SOLAR_MAX_VALUE: i64 = 2050_12_31;

/// Return `true` if the date exists and lies inside the supported range.
///
/// `intercalary` is only meaningful for lunar dates and ignored for solar
/// ones.
///
/// # Example
/// ```
/// use kl_calendar::validity::is_valid_date;
/// use kl_core::CalendarKind;
///
/// assert!(is_valid_date(CalendarKind::Solar, false, 1582, 10, 4));
/// assert!(!is_valid_date(CalendarKind::Solar, false, 1582, 10, 10));
/// assert!(is_valid_date(CalendarKind::Lunar, true, 2023, 2, 29));
/// ```
pub fn is_valid_date(kind: CalendarKind, intercalary: bool, year: i32, month: u32, day: u32) -> bool {
    check_date(kind, intercalary, year, month, day).is_ok()
}

/// Check a date, reporting why it is rejected.
///
/// # Errors
/// * [`kl_core::Error::OutOfRange`]: year outside 1391–2050, or the date falls
///   outside the supported span of its calendar.
/// * [`kl_core::Error::InvalidDate`]: month not in 1–12, day 0 or past the end of the
///   month, a day of the October 1582 gap, or an intercalary flag on a month
///   without an intercalary counterpart.
pub fn check_date(kind: CalendarKind, intercalary: bool, year: i32, month: u32, day: u32) -> Result<()> {
    let rec = year_table::lookup(year)?;
    let (min, max) = match kind {
        CalendarKind::Lunar => (LUNAR_MIN_VALUE, LUNAR_MAX_VALUE),
        CalendarKind::Solar => (SOLAR_MIN_VALUE, SOLAR_MAX_VALUE),
    };
    // The encoded bound is checked before the fields, so 2050-13-01 is out of
    // range rather than invalid.
    let value = i64::from(year) * 10_000 + i64::from(month) * 100 + i64::from(day);
    ensure!(
        (min..=max).contains(&value),
        OutOfRange,
        "{kind} {year:04}-{month:02}-{day:02} outside [{min}, {max}]"
    );
    ensure!(
        (1..=12).contains(&month) && day >= 1,
        InvalidDate,
        "{kind} {year:04}-{month:02}-{day:02}: month must be 1-12 and day at least 1"
    );

    let limit = match kind {
        CalendarKind::Lunar => {
            ensure!(
                !intercalary || rec.is_intercalary_month(month),
                InvalidDate,
                "lunar {year:04} has no intercalary month {month}"
            );
            rec.month_days(month, intercalary)
        }
        CalendarKind::Solar => {
            let mut limit = solar_days_in_month(year, month)?;
            if year == REFORM_YEAR && month == REFORM_MONTH {
                ensure!(
                    !(REFORM_LAST_JULIAN_DAY < day && day < REFORM_FIRST_GREGORIAN_DAY),
                    InvalidDate,
                    "solar {year:04}-{month:02}-{day:02} falls in the October 1582 gap"
                );
                limit += REFORM_GAP_DAYS;
            }
            limit
        }
    };
    ensure!(
        day <= limit,
        InvalidDate,
        "{kind} {year:04}-{month:02}-{day:02}: month has only {limit} days"
    );
    Ok(())
}
