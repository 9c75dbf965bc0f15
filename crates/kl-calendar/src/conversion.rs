//! Conversion between the solar and lunar calendars.
//!
//! Both directions validate their input, compute its absolute ordinal in the
//! source calendar, then locate the year and month of the target calendar
//! whose span contains that ordinal.
//!
//! # Example
//! ```
//! use kl_calendar::{lunar_to_solar, solar_to_lunar, LunarDate, SolarDate};
//!
//! let seollal = LunarDate::new(2024, 1, 1, false).unwrap();
//! let solar = lunar_to_solar(&seollal).unwrap();
//! assert_eq!(solar, SolarDate::new(2024, 2, 10).unwrap());
//! assert_eq!(solar_to_lunar(&solar).unwrap(), seollal);
//! ```

use kl_core::errors::Result;
use kl_core::{ensure, fail, Ordinal};

use crate::date::{LunarDate, SolarDate};
use crate::day_count::{
    lunar_absolute_day, lunar_days_before_year, solar_absolute_day, solar_new_year, MAX_ORDINAL,
    MIN_ORDINAL, REFORM_GAP_DAYS, REFORM_LAST_JULIAN_DAY, REFORM_MONTH, REFORM_YEAR,
};
use crate::year_table::{self, FIRST_YEAR, LAST_YEAR};

/// Convert a lunar date to its solar equivalent.
///
/// The intercalary flag must be set to address a day of the intercalary
/// month; without it the ordinary month of the same number is meant.
///
/// # Errors
/// [`kl_core::Error::OutOfRange`] or [`kl_core::Error::InvalidDate`] if the
/// lunar date fails validation.
pub fn lunar_to_solar(date: &LunarDate) -> Result<SolarDate> {
    let ordinal = date.ordinal()?;
    solar_date_at(ordinal, Some(date.year))
}

/// Convert a solar date to its lunar equivalent.
///
/// The returned date carries `intercalary = true` when the day falls in an
/// intercalary month; pass it back unchanged to round-trip.
///
/// # Errors
/// [`kl_core::Error::OutOfRange`] or [`kl_core::Error::InvalidDate`] if the
/// solar date fails validation, including days of the October 1582 gap.
pub fn solar_to_lunar(date: &SolarDate) -> Result<LunarDate> {
    let ordinal = date.ordinal()?;
    lunar_date_at(ordinal, Some(date.year))
}

/// Locate the solar date with the given ordinal.
///
/// The search starts from `candidate` (the year of the source date when
/// converting) and moves to the neighbouring year while the ordinal lies
/// outside it, then scans months from December down.
pub(crate) fn solar_date_at(ordinal: Ordinal, candidate: Option<i32>) -> Result<SolarDate> {
    check_ordinal(ordinal)?;
    let mut year = start_year(ordinal, candidate);
    while ordinal < solar_new_year(year)? {
        year -= 1;
    }
    while ordinal >= solar_new_year(year + 1)? {
        year += 1;
    }

    for month in (1..=12).rev() {
        let start = solar_absolute_day(year, month, 1)?;
        if ordinal >= start {
            let mut day = (ordinal - start + 1) as u32;
            if year == REFORM_YEAR && month == REFORM_MONTH && day > REFORM_LAST_JULIAN_DAY {
                day += REFORM_GAP_DAYS;
            }
            return Ok(SolarDate { year, month, day });
        }
    }
    fail!(OutOfRange, "ordinal {ordinal} precedes solar {year}-01-01")
}

/// Locate the lunar date with the given ordinal.
///
/// Months are scanned from the 12th down using ordinary-month starts; on the
/// intercalary month the intercalary span is tested to decide the flag.
pub(crate) fn lunar_date_at(ordinal: Ordinal, candidate: Option<i32>) -> Result<LunarDate> {
    check_ordinal(ordinal)?;
    let mut year = start_year(ordinal, candidate);
    while ordinal <= lunar_days_before_year(year)? {
        year -= 1;
    }
    while ordinal > lunar_days_before_year(year + 1)? {
        year += 1;
    }

    let rec = year_table::lookup(year)?;
    for month in (1..=12).rev() {
        let start = lunar_absolute_day(year, month, 1, false)?;
        if ordinal >= start {
            let intercalary = rec.is_intercalary_month(month)
                && ordinal >= lunar_absolute_day(year, month, 1, true)?;
            let month_start = if intercalary {
                lunar_absolute_day(year, month, 1, true)?
            } else {
                start
            };
            return Ok(LunarDate {
                year,
                month,
                day: (ordinal - month_start + 1) as u32,
                intercalary,
            });
        }
    }
    fail!(OutOfRange, "ordinal {ordinal} precedes lunar {year}-01-01")
}

fn check_ordinal(ordinal: Ordinal) -> Result<()> {
    ensure!(
        (MIN_ORDINAL..=MAX_ORDINAL).contains(&ordinal),
        OutOfRange,
        "ordinal {ordinal} outside [{MIN_ORDINAL}, {MAX_ORDINAL}]"
    );
    Ok(())
}

// Without a hint, estimate from the mean year length.
fn start_year(ordinal: Ordinal, candidate: Option<i32>) -> i32 {
    candidate
        .unwrap_or_else(|| FIRST_YEAR + (f64::from(ordinal) / 365.2425) as i32)
        .clamp(FIRST_YEAR, LAST_YEAR)
}
