//! Korean public holidays fixed on the lunar calendar.
//!
//! The solar-fixed holidays (Independence Movement Day, Liberation Day, …)
//! need no conversion; this module supplies the ones that move every year.

use std::fmt;

use kl_core::errors::Result;

use crate::conversion::solar_date_at;
use crate::date::{LunarDate, SolarDate};

/// A holiday defined by a lunar month and day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LunarHoliday {
    /// Last day of the lunar year.
    SeollalEve,
    /// Korean New Year, 1/1.
    Seollal,
    /// 1/2.
    SeollalNextDay,
    /// 4/8.
    BuddhasBirthday,
    /// 8/14.
    ChuseokEve,
    /// Harvest festival, 8/15.
    Chuseok,
    /// 8/16.
    ChuseokNextDay,
}

impl LunarHoliday {
    /// All holidays in the order they fall within a lunar year.
    pub const ALL: [LunarHoliday; 7] = [
        LunarHoliday::SeollalEve,
        LunarHoliday::Seollal,
        LunarHoliday::SeollalNextDay,
        LunarHoliday::BuddhasBirthday,
        LunarHoliday::ChuseokEve,
        LunarHoliday::Chuseok,
        LunarHoliday::ChuseokNextDay,
    ];

    /// Korean name.
    pub fn name(&self) -> &'static str {
        match self {
            LunarHoliday::SeollalEve => "설날 전날",
            LunarHoliday::Seollal => "설날",
            LunarHoliday::SeollalNextDay => "설날 다음날",
            LunarHoliday::BuddhasBirthday => "부처님오신날",
            LunarHoliday::ChuseokEve => "추석 전날",
            LunarHoliday::Chuseok => "추석",
            LunarHoliday::ChuseokNextDay => "추석 다음날",
        }
    }

    /// Solar date of this holiday in lunar year `year`.
    ///
    /// # Errors
    /// [`kl_core::Error::OutOfRange`] when the day falls outside the table,
    /// which happens for the eve of Seollal 1391.
    pub fn in_year(&self, year: i32) -> Result<SolarDate> {
        let (month, day) = match self {
            LunarHoliday::SeollalEve => {
                let new_year = LunarDate::new(year, 1, 1, false)?.ordinal()?;
                return solar_date_at(new_year - 1, Some(year));
            }
            LunarHoliday::Seollal => (1, 1),
            LunarHoliday::SeollalNextDay => (1, 2),
            LunarHoliday::BuddhasBirthday => (4, 8),
            LunarHoliday::ChuseokEve => (8, 14),
            LunarHoliday::Chuseok => (8, 15),
            LunarHoliday::ChuseokNextDay => (8, 16),
        };
        LunarDate::new(year, month, day, false)?.to_solar()
    }
}

impl fmt::Display for LunarHoliday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Every lunar holiday of lunar year `year` with its solar date, in date
/// order.
pub fn lunar_holidays(year: i32) -> Result<Vec<(LunarHoliday, SolarDate)>> {
    LunarHoliday::ALL
        .iter()
        .map(|h| Ok((*h, h.in_year(year)?)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use kl_core::errors::Error;

    fn solar(y: i32, m: u32, d: u32) -> SolarDate {
        SolarDate::new(y, m, d).unwrap()
    }

    #[test]
    fn holidays_2024() {
        let got = lunar_holidays(2024).unwrap();
        let expected = vec![
            (LunarHoliday::SeollalEve, solar(2024, 2, 9)),
            (LunarHoliday::Seollal, solar(2024, 2, 10)),
            (LunarHoliday::SeollalNextDay, solar(2024, 2, 11)),
            (LunarHoliday::BuddhasBirthday, solar(2024, 5, 15)),
            (LunarHoliday::ChuseokEve, solar(2024, 9, 16)),
            (LunarHoliday::Chuseok, solar(2024, 9, 17)),
            (LunarHoliday::ChuseokNextDay, solar(2024, 9, 18)),
        ];
        assert_eq!(got, expected);
    }

    #[test]
    fn holidays_2025() {
        assert_eq!(LunarHoliday::Seollal.in_year(2025).unwrap(), solar(2025, 1, 29));
        assert_eq!(LunarHoliday::BuddhasBirthday.in_year(2025).unwrap(), solar(2025, 5, 5));
        assert_eq!(LunarHoliday::Chuseok.in_year(2025).unwrap(), solar(2025, 10, 6));
    }

    #[test]
    fn eve_of_a_30_day_twelfth_month() {
        // Lunar 2023 ends on 12/30.
        assert_eq!(LunarHoliday::SeollalEve.in_year(2024).unwrap(), solar(2024, 2, 9));
    }

    #[test]
    fn dates_are_sorted() {
        for year in [1392, 1582, 1900, 2023, 2050] {
            let days = lunar_holidays(year).unwrap();
            assert!(days.windows(2).all(|w| w[0].1 < w[1].1), "{year}");
        }
    }

    #[test]
    fn first_year_has_no_eve() {
        assert!(matches!(lunar_holidays(1391), Err(Error::OutOfRange(_))));
        assert!(LunarHoliday::Seollal.in_year(1391).is_ok());
        assert!(matches!(lunar_holidays(2051), Err(Error::OutOfRange(_))));
    }

    #[test]
    fn names() {
        assert_eq!(LunarHoliday::Chuseok.to_string(), "추석");
    }
}
