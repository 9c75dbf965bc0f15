//! Day counting in both calendars.
//!
//! Every date maps to an absolute day [`Ordinal`]. The lunar count starts at
//! lunar 1391-01-01 (ordinal 1); the solar count starts at solar 1391-01-01
//! and is shifted back by [`SOLAR_LUNAR_DAY_DIFF`] so both land on the same
//! axis: solar 1391-02-05 is ordinal 1 as well.
//!
//! The solar count skips the ten days removed in October 1582, so
//! 1582-10-04 and 1582-10-15 have consecutive ordinals.
//!
//! Functions here only check that the year is in the table and the month is
//! in `1..=12`. Day numbers are taken as given; use [`crate::validity`] to
//! reject impossible dates.

use kl_core::errors::Result;
use kl_core::{ensure, Ordinal};

use crate::year_table::{self, FIRST_YEAR, LAST_YEAR, RECORDS, YEAR_COUNT};

/// Offset between the solar and lunar epochs, in days.
pub const SOLAR_LUNAR_DAY_DIFF: i32 = 35;

/// Smallest ordinal inside the supported range (lunar 1391-01-01).
pub const MIN_ORDINAL: Ordinal = 1;

/// Largest ordinal inside the supported range (solar 2050-12-31, lunar
/// 2050-11-18).
pub const MAX_ORDINAL: Ordinal = SOLAR_DAYS_BEFORE[YEAR_COUNT] - SOLAR_LUNAR_DAY_DIFF;

/// Year of the Gregorian reform.
pub const REFORM_YEAR: i32 = 1582;

/// Month of the Gregorian reform.
pub const REFORM_MONTH: u32 = 10;

/// Last day before the gap (4 October 1582).
pub const REFORM_LAST_JULIAN_DAY: u32 = 4;

/// First day after the gap (15 October 1582).
pub const REFORM_FIRST_GREGORIAN_DAY: u32 = 15;

/// Number of days dropped by the reform.
pub const REFORM_GAP_DAYS: u32 = 10;

const SOLAR_MONTH_DAYS: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

// ── Lunar ─────────────────────────────────────────────────────────────────────

/// Total days in the lunar year.
pub fn lunar_days_in_year(year: i32) -> Result<u32> {
    Ok(u32::from(year_table::lookup(year)?.total_days))
}

/// Days in a lunar month, 29 or 30.
///
/// Uses the intercalary month's length when `intercalary` is set and
/// `month` is that year's intercalary month, the ordinary length otherwise.
pub fn lunar_days_in_month(year: i32, month: u32, intercalary: bool) -> Result<u32> {
    let rec = year_table::lookup(year)?;
    check_month(month)?;
    Ok(rec.month_days(month, intercalary))
}

/// Lunar days in all years from 1391 up to, but not including, `year`.
///
/// Accepts 1391–2051 so that the end of the table can be addressed.
pub fn lunar_days_before_year(year: i32) -> Result<i32> {
    Ok(LUNAR_DAYS_BEFORE[year_index(year)?])
}

/// Absolute ordinal of a lunar date.
///
/// Whole years before `year`, plus the months of `year` that precede `month`
/// (the intercalary month included when it comes earlier), plus `day`. For
/// the intercalary month itself the ordinary month of the same number is
/// also added, because the intercalary month follows it.
pub fn lunar_absolute_day(year: i32, month: u32, day: u32, intercalary: bool) -> Result<Ordinal> {
    let rec = year_table::lookup(year)?;
    check_month(month)?;

    let mut days = LUNAR_DAYS_BEFORE[(year - FIRST_YEAR) as usize];
    days += (1..month).map(|m| rec.month_days(m, false) as i32).sum::<i32>();
    let leap = u32::from(rec.intercalary_month);
    if rec.has_intercalary() && leap < month {
        days += rec.month_days(leap, true) as i32;
    }
    if intercalary && rec.is_intercalary_month(month) {
        days += rec.month_days(month, false) as i32;
    }
    Ok(days + day as i32)
}

// ── Solar ─────────────────────────────────────────────────────────────────────

/// Days in the solar year: 365 or 366, and 355 for 1582.
pub fn solar_days_in_year(year: i32) -> Result<u32> {
    Ok(year_table::lookup(year)?.solar_days_in_year())
}

/// Days in a solar month. October 1582 counts 21 days.
pub fn solar_days_in_month(year: i32, month: u32) -> Result<u32> {
    let rec = year_table::lookup(year)?;
    check_month(month)?;
    let mut days = SOLAR_MONTH_DAYS[month as usize - 1];
    if month == 2 && rec.solar_is_leap {
        days += 1;
    }
    if year == REFORM_YEAR && month == REFORM_MONTH {
        days -= REFORM_GAP_DAYS;
    }
    Ok(days)
}

/// Solar days in all years from 1391 up to, but not including, `year`.
///
/// Accepts 1391–2051 so that the end of the table can be addressed.
pub fn solar_days_before_year(year: i32) -> Result<i32> {
    Ok(SOLAR_DAYS_BEFORE[year_index(year)?])
}

/// Absolute ordinal of a solar date, aligned with the lunar count.
///
/// Days 15–31 October 1582 are counted ten days earlier so the ordinal
/// continues straight from 4 October.
pub fn solar_absolute_day(year: i32, month: u32, day: u32) -> Result<Ordinal> {
    check_month(month)?;
    let mut days = solar_days_before_year(year)?;
    for m in 1..month {
        days += solar_days_in_month(year, m)? as i32;
    }
    let after_gap = year == REFORM_YEAR
        && month == REFORM_MONTH
        && day > REFORM_LAST_JULIAN_DAY + REFORM_GAP_DAYS;
    let day = if after_gap { day - REFORM_GAP_DAYS } else { day };
    Ok(days + day as i32 - SOLAR_LUNAR_DAY_DIFF)
}

/// Ordinal of solar 1 January of `year`. Accepts 1391–2051.
pub(crate) fn solar_new_year(year: i32) -> Result<Ordinal> {
    Ok(solar_days_before_year(year)? + 1 - SOLAR_LUNAR_DAY_DIFF)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn check_month(month: u32) -> Result<()> {
    ensure!(
        (1..=12).contains(&month),
        InvalidDate,
        "month {month} out of range [1, 12]"
    );
    Ok(())
}

fn year_index(year: i32) -> Result<usize> {
    ensure!(
        (FIRST_YEAR..=LAST_YEAR + 1).contains(&year),
        OutOfRange,
        "year {year} outside [{FIRST_YEAR}, {}]",
        LAST_YEAR + 1
    );
    Ok((year - FIRST_YEAR) as usize)
}

const LUNAR_DAYS_BEFORE: [i32; YEAR_COUNT + 1] = {
    let mut out = [0; YEAR_COUNT + 1];
    let mut i = 0;
    while i < YEAR_COUNT {
        out[i + 1] = out[i] + RECORDS[i].total_days as i32;
        i += 1;
    }
    out
};

const SOLAR_DAYS_BEFORE: [i32; YEAR_COUNT + 1] = {
    let mut out = [0; YEAR_COUNT + 1];
    let mut i = 0;
    while i < YEAR_COUNT {
        out[i + 1] = out[i] + RECORDS[i].solar_days_in_year() as i32;
        i += 1;
    }
    out
};

#[cfg(test)]
mod tests {
    use super::*;
    use kl_core::errors::Error;

    #[test]
    fn epochs_line_up() {
        assert_eq!(lunar_absolute_day(1391, 1, 1, false).unwrap(), 1);
        assert_eq!(solar_absolute_day(1391, 2, 5).unwrap(), 1);
        assert_eq!(solar_absolute_day(1391, 1, 1).unwrap(), -34);
        assert_eq!(solar_new_year(1391).unwrap(), -34);
    }

    #[test]
    fn range_ends_line_up() {
        assert_eq!(MAX_ORDINAL, 241_017);
        assert_eq!(solar_absolute_day(2050, 12, 31).unwrap(), MAX_ORDINAL);
        assert_eq!(lunar_absolute_day(2050, 11, 18, false).unwrap(), MAX_ORDINAL);
    }

    #[test]
    fn prefix_tables_match_iteration() {
        let mut lunar = 0;
        let mut solar = 0;
        for year in FIRST_YEAR..=LAST_YEAR {
            assert_eq!(lunar_days_before_year(year).unwrap(), lunar, "{year}");
            assert_eq!(solar_days_before_year(year).unwrap(), solar, "{year}");
            lunar += lunar_days_in_year(year).unwrap() as i32;
            solar += solar_days_in_year(year).unwrap() as i32;
        }
        assert_eq!(lunar_days_before_year(LAST_YEAR + 1).unwrap(), lunar);
        assert_eq!(solar_days_before_year(LAST_YEAR + 1).unwrap(), solar);
        assert_eq!(lunar, 241_058);
        assert_eq!(solar, 241_052);
    }

    #[test]
    fn solar_months_sum_to_year() {
        for year in FIRST_YEAR..=LAST_YEAR {
            let months: u32 = (1..=12).map(|m| solar_days_in_month(year, m).unwrap()).sum();
            assert_eq!(months, solar_days_in_year(year).unwrap(), "{year}");
        }
    }

    #[test]
    fn reform_year() {
        assert_eq!(solar_days_in_year(1582).unwrap(), 355);
        assert_eq!(solar_days_in_month(1582, 10).unwrap(), 21);
        assert_eq!(solar_days_in_month(1582, 9).unwrap(), 30);
        let before = solar_absolute_day(1582, 10, 4).unwrap();
        let after = solar_absolute_day(1582, 10, 15).unwrap();
        assert_eq!(after - before, 1);
        assert_eq!(
            solar_absolute_day(1582, 11, 1).unwrap() - solar_absolute_day(1582, 10, 31).unwrap(),
            1
        );
    }

    #[test]
    fn intercalary_month_follows_its_ordinary_month() {
        // 2023: 2nd month has 30 days, intercalary 2nd month 29.
        let m2 = lunar_absolute_day(2023, 2, 1, false).unwrap();
        let leap2 = lunar_absolute_day(2023, 2, 1, true).unwrap();
        let m3 = lunar_absolute_day(2023, 3, 1, false).unwrap();
        assert_eq!(leap2 - m2, 30);
        assert_eq!(m3 - leap2, 29);
        // The flag is ignored on ordinary months.
        assert_eq!(
            lunar_absolute_day(2023, 5, 1, true).unwrap(),
            lunar_absolute_day(2023, 5, 1, false).unwrap()
        );
    }

    #[test]
    fn month_lengths() {
        assert_eq!(lunar_days_in_month(2023, 2, false).unwrap(), 30);
        assert_eq!(lunar_days_in_month(2023, 2, true).unwrap(), 29);
        assert_eq!(solar_days_in_month(2024, 2).unwrap(), 29);
        assert_eq!(solar_days_in_month(2023, 2).unwrap(), 28);
        assert_eq!(solar_days_in_month(1500, 2).unwrap(), 29);
    }

    #[test]
    fn rejects_bad_input() {
        assert!(matches!(lunar_days_in_year(1390), Err(Error::OutOfRange(_))));
        assert!(matches!(solar_days_in_year(2051), Err(Error::OutOfRange(_))));
        assert!(matches!(solar_days_in_month(2000, 13), Err(Error::InvalidDate(_))));
        assert!(matches!(
            lunar_absolute_day(2000, 0, 1, false),
            Err(Error::InvalidDate(_))
        ));
        assert!(matches!(solar_days_before_year(2052), Err(Error::OutOfRange(_))));
    }

    #[test]
    fn korean_new_year_2024() {
        assert_eq!(lunar_absolute_day(2024, 1, 1, false).unwrap(), 231_196);
        assert_eq!(solar_absolute_day(2024, 2, 10).unwrap(), 231_196);
    }
}
