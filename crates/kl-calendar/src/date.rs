//! `SolarDate` and `LunarDate` value types.
//!
//! Both are plain `(year, month, day)` records with public fields. Building
//! one with a struct literal performs no checks; [`SolarDate::new`] and
//! [`LunarDate::new`] validate, and every conversion re-validates its input.
//!
//! Dates before 15 October 1582 are Julian calendar dates, which is what the
//! solar side of the year table describes.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use kl_core::errors::{Error, Result};
use kl_core::utilities::data_parsers::{parse_iso_date, parse_lunar_date};
use kl_core::{CalendarKind, Ordinal};

use crate::conversion;
use crate::day_count::{lunar_absolute_day, solar_absolute_day};
use crate::gapja::{self, GapJa};
use crate::validity::check_date;

/// Suffix used when displaying an intercalary lunar date.
pub const INTERCALARY_SUFFIX: &str = " (윤달)";

fn shift(ordinal: Ordinal, n: i32) -> Result<Ordinal> {
    ordinal
        .checked_add(n)
        .ok_or_else(|| Error::OutOfRange(format!("ordinal {ordinal} shifted by {n} days overflows")))
}

// ── SolarDate ─────────────────────────────────────────────────────────────────

/// A Gregorian (solar) calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolarDate {
    /// Year, 1391–2050.
    pub year: i32,
    /// Month, 1–12.
    pub month: u32,
    /// Day of the month.
    pub day: u32,
}

impl SolarDate {
    /// Create a validated solar date.
    ///
    /// # Errors
    /// [`Error::OutOfRange`] outside 1391-02-05 ..= 2050-12-31,
    /// [`Error::InvalidDate`] for impossible dates, 5–14 October 1582
    /// included.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self> {
        let date = SolarDate { year, month, day };
        date.check()?;
        Ok(date)
    }

    /// Validate the fields.
    pub fn check(&self) -> Result<()> {
        check_date(CalendarKind::Solar, false, self.year, self.month, self.day)
    }

    /// Locate the solar date with the given ordinal.
    pub fn from_ordinal(ordinal: Ordinal) -> Result<Self> {
        conversion::solar_date_at(ordinal, None)
    }

    /// Absolute day ordinal of this date.
    pub fn ordinal(&self) -> Result<Ordinal> {
        self.check()?;
        solar_absolute_day(self.year, self.month, self.day)
    }

    /// The date `n` days later (earlier for negative `n`).
    pub fn add_days(&self, n: i32) -> Result<Self> {
        conversion::solar_date_at(shift(self.ordinal()?, n)?, Some(self.year))
    }

    /// Signed number of days from `self` to `other`.
    pub fn days_until(&self, other: &SolarDate) -> Result<i32> {
        Ok(other.ordinal()? - self.ordinal()?)
    }

    /// Convert to the Korean lunar calendar.
    pub fn to_lunar(&self) -> Result<LunarDate> {
        conversion::solar_to_lunar(self)
    }

    /// The same month and day in another year.
    ///
    /// # Errors
    /// [`Error::NonExistentDate`] when `year` has no such day (29 February in
    /// a common year, a day of the October 1582 gap);
    /// [`Error::OutOfRange`] when the result is outside the table.
    pub fn with_year(&self, year: i32) -> Result<Self> {
        self.check()?;
        let moved = SolarDate { year, ..*self };
        match moved.check() {
            Ok(()) => Ok(moved),
            Err(Error::InvalidDate(msg)) => Err(Error::NonExistentDate(msg)),
            Err(e) => Err(e),
        }
    }
}

impl fmt::Display for SolarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for SolarDate {
    type Err = Error;

    /// Parse `YYYY-MM-DD`.
    fn from_str(s: &str) -> Result<Self> {
        let (y, m, d) =
            parse_iso_date(s).ok_or_else(|| Error::Parse(format!("not a YYYY-MM-DD date: {s:?}")))?;
        SolarDate::new(y, m, d)
    }
}

// ── LunarDate ─────────────────────────────────────────────────────────────────

/// A Korean lunar calendar date.
///
/// `intercalary` marks the intercalary (leap) month that follows the ordinary
/// month of the same number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LunarDate {
    /// Year, 1391–2050.
    pub year: i32,
    /// Month number, 1–12.
    pub month: u32,
    /// Day of the month, 1–30.
    pub day: u32,
    /// `true` for a day of the intercalary month.
    #[cfg_attr(feature = "serde", serde(default))]
    pub intercalary: bool,
}

impl LunarDate {
    /// Create a validated lunar date.
    ///
    /// # Errors
    /// [`Error::OutOfRange`] outside 1391-01-01 ..= 2050-11-18,
    /// [`Error::InvalidDate`] for day numbers beyond the month length or an
    /// intercalary flag on a month that has no intercalary counterpart.
    pub fn new(year: i32, month: u32, day: u32, intercalary: bool) -> Result<Self> {
        let date = LunarDate {
            year,
            month,
            day,
            intercalary,
        };
        date.check()?;
        Ok(date)
    }

    /// Validate the fields.
    pub fn check(&self) -> Result<()> {
        check_date(
            CalendarKind::Lunar,
            self.intercalary,
            self.year,
            self.month,
            self.day,
        )
    }

    /// Locate the lunar date with the given ordinal.
    pub fn from_ordinal(ordinal: Ordinal) -> Result<Self> {
        conversion::lunar_date_at(ordinal, None)
    }

    /// Absolute day ordinal of this date.
    pub fn ordinal(&self) -> Result<Ordinal> {
        self.check()?;
        lunar_absolute_day(self.year, self.month, self.day, self.intercalary)
    }

    /// The date `n` days later (earlier for negative `n`).
    pub fn add_days(&self, n: i32) -> Result<Self> {
        conversion::lunar_date_at(shift(self.ordinal()?, n)?, Some(self.year))
    }

    /// Signed number of days from `self` to `other`.
    pub fn days_until(&self, other: &LunarDate) -> Result<i32> {
        Ok(other.ordinal()? - self.ordinal()?)
    }

    /// Convert to the solar calendar.
    pub fn to_solar(&self) -> Result<SolarDate> {
        conversion::lunar_to_solar(self)
    }

    /// Sexagenary names of this date.
    pub fn gapja(&self) -> Result<GapJa> {
        gapja::gapja(self)
    }

    /// The same month and day in another lunar year.
    ///
    /// # Errors
    /// [`Error::NonExistentDate`] when `year` has no such day: the 30th of a
    /// month that is small in `year`, or an intercalary month `year` lacks.
    /// [`Error::OutOfRange`] when the result is outside the table.
    pub fn with_year(&self, year: i32) -> Result<Self> {
        self.check()?;
        let moved = LunarDate { year, ..*self };
        match moved.check() {
            Ok(()) => Ok(moved),
            Err(Error::InvalidDate(msg)) => Err(Error::NonExistentDate(msg)),
            Err(e) => Err(e),
        }
    }
}

// Within one month number the ordinary month precedes the intercalary one.
impl Ord for LunarDate {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.year, self.month, self.intercalary, self.day).cmp(&(
            other.year,
            other.month,
            other.intercalary,
            other.day,
        ))
    }
}

impl PartialOrd for LunarDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for LunarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)?;
        if self.intercalary {
            f.write_str(INTERCALARY_SUFFIX)?;
        }
        Ok(())
    }
}

impl FromStr for LunarDate {
    type Err = Error;

    /// Parse `YYYY-MM-DD`, optionally followed by `Intercalation`, `(윤달)`
    /// or `(윤)`.
    fn from_str(s: &str) -> Result<Self> {
        let (y, m, d, intercalary) = parse_lunar_date(s)
            .ok_or_else(|| Error::Parse(format!("not a lunar YYYY-MM-DD date: {s:?}")))?;
        LunarDate::new(y, m, d, intercalary)
    }
}

// ── chrono interop ────────────────────────────────────────────────────────────

#[cfg(feature = "chrono")]
mod chrono_interop {
    use super::SolarDate;
    use chrono::{Datelike, NaiveDate};
    use kl_core::errors::{Error, Result};

    // chrono is proleptic Gregorian; the table is Julian before the reform.
    const FIRST_GREGORIAN: SolarDate = SolarDate {
        year: 1582,
        month: 10,
        day: 15,
    };

    impl TryFrom<NaiveDate> for SolarDate {
        type Error = Error;

        fn try_from(value: NaiveDate) -> Result<Self> {
            let date = SolarDate {
                year: value.year(),
                month: value.month(),
                day: value.day(),
            };
            if date < FIRST_GREGORIAN {
                return Err(Error::OutOfRange(format!(
                    "{date} predates the Gregorian reform"
                )));
            }
            date.check()?;
            Ok(date)
        }
    }

    impl TryFrom<SolarDate> for NaiveDate {
        type Error = Error;

        fn try_from(value: SolarDate) -> Result<Self> {
            value.check()?;
            if value < FIRST_GREGORIAN {
                return Err(Error::OutOfRange(format!(
                    "{value} predates the Gregorian reform"
                )));
            }
            NaiveDate::from_ymd_opt(value.year, value.month, value.day)
                .ok_or_else(|| Error::InvalidDate(value.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solar(y: i32, m: u32, d: u32) -> SolarDate {
        SolarDate::new(y, m, d).unwrap()
    }

    fn lunar(y: i32, m: u32, d: u32, leap: bool) -> LunarDate {
        LunarDate::new(y, m, d, leap).unwrap()
    }

    #[test]
    fn display() {
        assert_eq!(solar(2024, 2, 10).to_string(), "2024-02-10");
        assert_eq!(lunar(2024, 1, 1, false).to_string(), "2024-01-01");
        assert_eq!(lunar(2023, 2, 10, true).to_string(), "2023-02-10 (윤달)");
    }

    #[test]
    fn parse() {
        assert_eq!("2024-02-10".parse::<SolarDate>().unwrap(), solar(2024, 2, 10));
        assert_eq!(
            "2023-02-10 Intercalation".parse::<LunarDate>().unwrap(),
            lunar(2023, 2, 10, true)
        );
        assert_eq!(
            "2023-02-10 (윤달)".parse::<LunarDate>().unwrap(),
            lunar(2023, 2, 10, true)
        );
        assert!(matches!("2024/02/10".parse::<SolarDate>(), Err(Error::Parse(_))));
        assert!(matches!("2023-02-31".parse::<SolarDate>(), Err(Error::InvalidDate(_))));
        // 2024 has no intercalary month.
        assert!(matches!(
            "2024-02-10(윤)".parse::<LunarDate>(),
            Err(Error::InvalidDate(_))
        ));
    }

    #[test]
    fn lunar_ordering_puts_intercalary_after_ordinary() {
        let last_ordinary = lunar(2023, 2, 30, false);
        let first_leap = lunar(2023, 2, 1, true);
        let next = lunar(2023, 3, 1, false);
        assert!(last_ordinary < first_leap);
        assert!(first_leap < next);
        assert_eq!(last_ordinary.days_until(&first_leap).unwrap(), 1);
    }

    #[test]
    fn add_days_crosses_years_and_the_gap() {
        assert_eq!(solar(2023, 12, 31).add_days(1).unwrap(), solar(2024, 1, 1));
        assert_eq!(solar(2024, 3, 1).add_days(-1).unwrap(), solar(2024, 2, 29));
        assert_eq!(solar(1582, 10, 4).add_days(1).unwrap(), solar(1582, 10, 15));
        assert_eq!(solar(1582, 10, 15).add_days(-1).unwrap(), solar(1582, 10, 4));
        assert_eq!(lunar(2023, 2, 29, true).add_days(1).unwrap(), lunar(2023, 3, 1, false));
        assert_eq!(lunar(2024, 1, 1, false).add_days(-1).unwrap(), lunar(2023, 12, 30, false));
    }

    #[test]
    fn add_days_out_of_range() {
        assert!(matches!(
            solar(2050, 12, 31).add_days(1),
            Err(Error::OutOfRange(_))
        ));
        assert!(matches!(
            lunar(1391, 1, 1, false).add_days(-1),
            Err(Error::OutOfRange(_))
        ));
    }

    #[test]
    fn add_days_extreme_offsets() {
        for n in [i32::MAX, i32::MIN] {
            let solar_shifted = solar(2024, 2, 10).add_days(n);
            assert!(matches!(solar_shifted, Err(Error::OutOfRange(_))), "{n}");
            let lunar_shifted = lunar(2024, 1, 1, false).add_days(n);
            assert!(matches!(lunar_shifted, Err(Error::OutOfRange(_))), "{n}");
        }
    }

    #[test]
    fn ordinal_round_trip() {
        let d = solar(2024, 2, 10);
        let n = d.ordinal().unwrap();
        assert_eq!(SolarDate::from_ordinal(n).unwrap(), d);
        assert_eq!(LunarDate::from_ordinal(n).unwrap(), lunar(2024, 1, 1, false));
    }

    #[test]
    fn solar_with_year() {
        let leap_day = solar(2024, 2, 29);
        assert!(matches!(leap_day.with_year(2023), Err(Error::NonExistentDate(_))));
        assert_eq!(leap_day.with_year(2028).unwrap(), solar(2028, 2, 29));
        assert!(matches!(
            solar(1583, 10, 10).with_year(1582),
            Err(Error::NonExistentDate(_))
        ));
        assert!(matches!(leap_day.with_year(2051), Err(Error::OutOfRange(_))));
    }

    #[test]
    fn lunar_with_year() {
        let leap = lunar(2023, 2, 10, true);
        assert!(matches!(leap.with_year(2024), Err(Error::NonExistentDate(_))));
        let thirtieth = lunar(2023, 2, 30, false);
        // The 2nd month of 2024 has 30 days, the 2nd month of 2025 has 29.
        assert_eq!(thirtieth.with_year(2024).unwrap(), lunar(2024, 2, 30, false));
        assert!(matches!(thirtieth.with_year(2025), Err(Error::NonExistentDate(_))));
        assert!(matches!(
            lunar(2024, 12, 1, false).with_year(2050),
            Err(Error::OutOfRange(_))
        ));
    }

    #[test]
    fn struct_literals_are_checked_on_use() {
        let bogus = SolarDate {
            year: 2023,
            month: 2,
            day: 30,
        };
        assert!(matches!(bogus.ordinal(), Err(Error::InvalidDate(_))));
        assert!(matches!(bogus.to_lunar(), Err(Error::InvalidDate(_))));
    }
}
