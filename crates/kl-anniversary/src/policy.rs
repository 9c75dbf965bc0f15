//! Recovery rules for projecting a month and day into another year.
//!
//! The calendar crate reports a day the target year lacks as
//! [`Error::NonExistentDate`]; these helpers decide what to use instead.

use tracing::info;

use kl_calendar::{year_table, LunarDate, SolarDate};
use kl_core::errors::{Error, Result};

/// Call `attempt(day)`; if the day does not exist, retry once with `day - 1`.
///
/// Only [`Error::NonExistentDate`] triggers the retry. The second attempt's
/// result is returned as is.
pub fn step_back_on_missing<T, F>(day: u32, attempt: F) -> Result<T>
where
    F: Fn(u32) -> Result<T>,
{
    match attempt(day) {
        Err(e) if e.is_non_existent() && day > 1 => {
            info!(reason = %e, day, "day missing in target year, using the day before");
            attempt(day - 1)
        }
        other => other,
    }
}

/// `month`/`day` of solar year `year`; 29 February becomes 28 February in a
/// common year.
pub fn solar_in_year(year: i32, month: u32, day: u32) -> Result<SolarDate> {
    step_back_on_missing(day, |day| {
        let date = SolarDate { year, month, day };
        date.check().map_err(into_non_existent)?;
        Ok(date)
    })
}

/// `month`/`day` of lunar year `year`.
///
/// An intercalary date whose month has no intercalary counterpart in `year`
/// falls back to the ordinary month; a 30th in a 29-day month becomes the
/// 29th.
pub fn lunar_in_year(year: i32, month: u32, day: u32, intercalary: bool) -> Result<LunarDate> {
    let rec = year_table::lookup(year)?;
    let keep_flag = intercalary && rec.is_intercalary_month(month);
    if intercalary && !keep_flag {
        info!(year, month, "no intercalary month in target year, using the ordinary month");
    }
    step_back_on_missing(day, |day| {
        let date = LunarDate {
            year,
            month,
            day,
            intercalary: keep_flag,
        };
        date.check().map_err(into_non_existent)?;
        Ok(date)
    })
}

fn into_non_existent(e: Error) -> Error {
    match e {
        Error::InvalidDate(msg) => Error::NonExistentDate(msg),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leap_day_steps_back() {
        assert_eq!(solar_in_year(2023, 2, 29).unwrap(), SolarDate::new(2023, 2, 28).unwrap());
        assert_eq!(solar_in_year(2024, 2, 29).unwrap(), SolarDate::new(2024, 2, 29).unwrap());
    }

    #[test]
    fn thirtieth_steps_back() {
        // Month 2 has 30 days in 2024 and 29 in 2025.
        assert_eq!(lunar_in_year(2024, 2, 30, false).unwrap().day, 30);
        assert_eq!(
            lunar_in_year(2025, 2, 30, false).unwrap(),
            LunarDate::new(2025, 2, 29, false).unwrap()
        );
    }

    #[test]
    fn missing_intercalary_month_uses_ordinary_month() {
        assert_eq!(
            lunar_in_year(2024, 2, 10, true).unwrap(),
            LunarDate::new(2024, 2, 10, false).unwrap()
        );
        assert!(lunar_in_year(2023, 2, 10, true).unwrap().intercalary);
    }

    #[test]
    fn only_one_step_back() {
        // 1582-10-14 and 10-13 both fall in the gap.
        assert!(matches!(solar_in_year(1582, 10, 14), Err(Error::NonExistentDate(_))));
        assert_eq!(solar_in_year(1582, 10, 5).unwrap(), SolarDate::new(1582, 10, 4).unwrap());
    }

    #[test]
    fn other_errors_pass_through() {
        assert!(matches!(solar_in_year(2051, 1, 1), Err(Error::OutOfRange(_))));
        assert!(matches!(lunar_in_year(1390, 1, 1, false), Err(Error::OutOfRange(_))));
        let calls = std::cell::Cell::new(0);
        let r: Result<()> = step_back_on_missing(1, |_| {
            calls.set(calls.get() + 1);
            Err(Error::NonExistentDate("x".into()))
        });
        assert!(r.is_err());
        assert_eq!(calls.get(), 1);
    }
}
