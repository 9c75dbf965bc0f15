//! Recurring dates kept on either calendar.
//!
//! An [`Anniversary`] recurs on the same month and day of every year of its
//! calendar. For a lunar anniversary "every year" means every lunar year, so
//! its solar date moves from year to year and may even fall in the next
//! solar year.
//!
//! Every query takes today's date explicitly; see [`crate::local_today`] for
//! the clock.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use kl_calendar::{GlyphSet, LunarDate, SolarDate};
use kl_core::errors::{Error, Result};
use kl_core::CalendarKind;

use crate::policy;

// ── Kind ──────────────────────────────────────────────────────────────────────

/// What an anniversary commemorates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnniversaryKind {
    /// Generic anniversary.
    #[default]
    Anniversary,
    /// Birthday.
    Birth,
    /// Wedding anniversary.
    Wedding,
    /// Memorial day of someone's death.
    Memorial,
}

impl AnniversaryKind {
    /// Lowercase identifier, as used in configuration.
    pub fn as_str(&self) -> &'static str {
        match self {
            AnniversaryKind::Anniversary => "anniversary",
            AnniversaryKind::Birth => "birth",
            AnniversaryKind::Wedding => "wedding",
            AnniversaryKind::Memorial => "memorial",
        }
    }
}

impl fmt::Display for AnniversaryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnniversaryKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "anniversary" => Ok(AnniversaryKind::Anniversary),
            "birth" => Ok(AnniversaryKind::Birth),
            "wedding" => Ok(AnniversaryKind::Wedding),
            "memorial" => Ok(AnniversaryKind::Memorial),
            _ => Err(Error::Parse(format!("unknown anniversary kind {s:?}"))),
        }
    }
}

// ── Date ──────────────────────────────────────────────────────────────────────

/// The original date of an anniversary, on the calendar it recurs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnniversaryDate {
    /// Recurs on the solar month and day.
    Solar(SolarDate),
    /// Recurs on the lunar month and day.
    Lunar(LunarDate),
}

impl AnniversaryDate {
    /// Calendar the date recurs on.
    pub fn calendar(&self) -> CalendarKind {
        match self {
            AnniversaryDate::Solar(_) => CalendarKind::Solar,
            AnniversaryDate::Lunar(_) => CalendarKind::Lunar,
        }
    }

    /// Year as written, on its own calendar.
    pub fn year(&self) -> i32 {
        match self {
            AnniversaryDate::Solar(d) => d.year,
            AnniversaryDate::Lunar(d) => d.year,
        }
    }

    /// The original date on the solar calendar.
    pub fn to_solar(&self) -> Result<SolarDate> {
        match self {
            AnniversaryDate::Solar(d) => {
                d.check()?;
                Ok(*d)
            }
            AnniversaryDate::Lunar(d) => d.to_solar(),
        }
    }

    /// The original date on the lunar calendar.
    pub fn to_lunar(&self) -> Result<LunarDate> {
        match self {
            AnniversaryDate::Solar(d) => d.to_lunar(),
            AnniversaryDate::Lunar(d) => {
                d.check()?;
                Ok(*d)
            }
        }
    }

    /// Solar date of the recurrence in `year` of the anniversary's calendar.
    ///
    /// Days the year lacks are resolved by [`policy::solar_in_year`] and
    /// [`policy::lunar_in_year`].
    pub fn occurrence_in(&self, year: i32) -> Result<SolarDate> {
        match self {
            AnniversaryDate::Solar(d) => policy::solar_in_year(year, d.month, d.day),
            AnniversaryDate::Lunar(d) => {
                policy::lunar_in_year(year, d.month, d.day, d.intercalary)?.to_solar()
            }
        }
    }
}

impl fmt::Display for AnniversaryDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnniversaryDate::Solar(d) => write!(f, "{d}"),
            AnniversaryDate::Lunar(d) => write!(f, "{d} (lunar)"),
        }
    }
}

// ── D-Day ─────────────────────────────────────────────────────────────────────

/// Days until the next occurrence, and its date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DDay {
    /// `0` when the anniversary is today.
    pub days: i32,
    /// Solar date of the next occurrence.
    pub date: SolarDate,
}

impl fmt::Display for DDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.days == 0 {
            write!(f, "D-Day ({})", self.date)
        } else {
            write!(f, "D-{} ({})", self.days, self.date)
        }
    }
}

// ── Anniversary ───────────────────────────────────────────────────────────────

/// A named recurring date.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Anniversary {
    /// Display name.
    pub name: String,
    /// Original date.
    pub date: AnniversaryDate,
    /// What is commemorated.
    #[serde(default)]
    pub kind: AnniversaryKind,
}

/// Everything known about an anniversary on a given day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnniversaryState {
    /// Display name.
    pub name: String,
    /// What is commemorated.
    pub kind: AnniversaryKind,
    /// Recurs on the lunar calendar.
    pub is_lunar: bool,
    /// Original date, solar form.
    pub solar_date: SolarDate,
    /// Original date, lunar form.
    pub lunar_date: LunarDate,
    /// Sexagenary name of the original lunar date, in Hangul.
    pub lunar_date_gapja: String,
    /// Days until the next occurrence.
    pub d_day: i32,
    /// Solar date of the next occurrence.
    pub upcoming_date: SolarDate,
    /// This year's occurrence is already behind.
    pub is_past: bool,
    /// Days since the original date, that date being day 1.
    pub past_days: i32,
    /// Ordinal number of the next occurrence.
    pub upcoming_count: i32,
    /// Age counted the Korean way.
    pub korean_age: i32,
}

impl Anniversary {
    /// Create an anniversary.
    pub fn new(name: impl Into<String>, date: AnniversaryDate, kind: AnniversaryKind) -> Self {
        Anniversary {
            name: name.into(),
            date,
            kind,
        }
    }

    /// `true` if the anniversary recurs on the lunar calendar.
    pub fn is_lunar(&self) -> bool {
        self.date.calendar().is_lunar()
    }

    /// Solar date of the occurrence in `year`.
    pub fn occurrence_in(&self, year: i32) -> Result<SolarDate> {
        self.date.occurrence_in(year)
    }

    /// `true` if this year's occurrence is before `today`.
    pub fn is_past(&self, today: &SolarDate) -> Result<bool> {
        Ok(self.occurrence_in(today.year)? < *today)
    }

    /// Days until the next occurrence on or after `today`.
    pub fn d_day(&self, today: &SolarDate) -> Result<DDay> {
        let (_, date) = self.next_occurrence(today)?;
        Ok(DDay {
            days: today.days_until(&date)?,
            date,
        })
    }

    /// Days elapsed since the original date, counting that date as day 1.
    pub fn past_days(&self, today: &SolarDate) -> Result<i32> {
        Ok(self.date.to_solar()?.days_until(today)? + 1)
    }

    /// `today.year - year + 1`, the year being the one the date was written
    /// with.
    pub fn korean_age(&self, today: &SolarDate) -> i32 {
        today.year - self.date.year() + 1
    }

    /// Which recurrence the next occurrence is: `1` for the first anniversary.
    pub fn upcoming_count(&self, today: &SolarDate) -> Result<i32> {
        let (year, _) = self.next_occurrence(today)?;
        Ok(year - self.date.year())
    }

    /// All attributes at once.
    pub fn snapshot(&self, today: &SolarDate) -> Result<AnniversaryState> {
        let lunar_date = self.date.to_lunar()?;
        let (year, upcoming_date) = self.next_occurrence(today)?;
        Ok(AnniversaryState {
            name: self.name.clone(),
            kind: self.kind,
            is_lunar: self.is_lunar(),
            solar_date: self.date.to_solar()?,
            lunar_date,
            lunar_date_gapja: lunar_date.gapja()?.render(GlyphSet::Korean),
            d_day: today.days_until(&upcoming_date)?,
            upcoming_date,
            is_past: self.is_past(today)?,
            past_days: self.past_days(today)?,
            upcoming_count: year - self.date.year(),
            korean_age: self.korean_age(today),
        })
    }

    fn next_occurrence(&self, today: &SolarDate) -> Result<(i32, SolarDate)> {
        next_on_or_after(today, &self.name, |year| self.occurrence_in(year))
    }
}

/// First occurrence on or after `today`, with the calendar year it belongs to.
///
/// A lunar occurrence can land in the following solar year, so last year's
/// may still be ahead of `today`.
pub(crate) fn next_on_or_after<F>(today: &SolarDate, name: &str, occurrence: F) -> Result<(i32, SolarDate)>
where
    F: Fn(i32) -> Result<SolarDate>,
{
    let mut edge = None;
    for year in today.year - 1..=today.year + 1 {
        match occurrence(year) {
            Ok(date) if date >= *today => return Ok((year, date)),
            Ok(_) => {}
            Err(e @ Error::OutOfRange(_)) => edge = Some(e),
            Err(e) => return Err(e),
        }
    }
    Err(edge.unwrap_or_else(|| {
        Error::OutOfRange(format!("no occurrence of {name:?} on or after {today}"))
    }))
}
