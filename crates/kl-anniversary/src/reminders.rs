//! D-Day reminders.
//!
//! [`ReminderBoard`] keeps the latest D-Day per name and announces the ones
//! coming up soon. [`ListReminder`] reads the compact to-do list form
//! `양MMDD name` (solar) or `음MMDD name` (lunar, `(윤)` anywhere in the name
//! for the intercalary month).

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use kl_calendar::SolarDate;
use kl_core::errors::{Error, Result};
use kl_core::utilities::data_parsers::parse_month_day;
use kl_core::CalendarKind;

use crate::anniversary::{next_on_or_after, Anniversary, DDay};
use crate::policy;

const SOLAR_PREFIX: char = '양';
const LUNAR_PREFIX: char = '음';
const INTERCALARY_TAG: &str = "(윤)";

// ── ReminderBoard ─────────────────────────────────────────────────────────────

/// Latest D-Day of each named reminder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReminderBoard {
    entries: BTreeMap<String, i32>,
}

impl ReminderBoard {
    /// An empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `days` as the D-Day of `name`, replacing any earlier value.
    pub fn record(&mut self, name: impl Into<String>, days: i32) {
        let name = name.into();
        debug!(name = %name, days, "reminder recorded");
        self.entries.insert(name, days);
    }

    /// Compute and record the D-Day of an anniversary.
    pub fn record_anniversary(&mut self, anniversary: &Anniversary, today: &SolarDate) -> Result<DDay> {
        let d_day = anniversary.d_day(today)?;
        self.record(anniversary.name.clone(), d_day.days);
        Ok(d_day)
    }

    /// Current D-Day of `name`.
    pub fn get(&self, name: &str) -> Option<i32> {
        self.entries.get(name).copied()
    }

    /// Forget `name`.
    pub fn remove(&mut self, name: &str) -> Option<i32> {
        self.entries.remove(name)
    }

    /// Number of reminders.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` if nothing is recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Reminders due in `0..=lookahead` days, soonest first, ties by name.
    pub fn due_within(&self, lookahead: u32) -> Vec<(&str, i32)> {
        let limit = i64::from(lookahead);
        let mut due: Vec<(&str, i32)> = self
            .entries
            .iter()
            .filter(|&(_, &days)| days >= 0 && i64::from(days) <= limit)
            .map(|(name, &days)| (name.as_str(), days))
            .collect();
        // BTreeMap order already sorts names; a stable sort keeps it per day.
        due.sort_by_key(|&(_, days)| days);
        due
    }

    /// Spoken summary of [`due_within`](Self::due_within), e.g.
    /// `"오늘은 결혼기념일, 내일은 추석, 3일 후는 생일"`. Empty when nothing is due.
    pub fn announcement(&self, lookahead: u32) -> String {
        self.due_within(lookahead)
            .into_iter()
            .map(|(name, days)| match days {
                0 => format!("오늘은 {name}"),
                1 => format!("내일은 {name}"),
                n => format!("{n}일 후는 {name}"),
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

// ── ListReminder ──────────────────────────────────────────────────────────────

/// A yearly reminder given as month and day only.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ListReminder {
    /// Name, without the intercalary tag.
    pub name: String,
    /// Calendar the month and day are on.
    pub calendar: CalendarKind,
    /// Month, 1–12.
    pub month: u32,
    /// Day of the month.
    pub day: u32,
    /// Lunar intercalary month.
    pub intercalary: bool,
}

impl ListReminder {
    /// Solar date of the reminder in `year` of its calendar.
    pub fn occurrence_in(&self, year: i32) -> Result<SolarDate> {
        match self.calendar {
            CalendarKind::Solar => policy::solar_in_year(year, self.month, self.day),
            CalendarKind::Lunar => {
                policy::lunar_in_year(year, self.month, self.day, self.intercalary)?.to_solar()
            }
        }
    }

    /// Days until the next occurrence on or after `today`.
    pub fn d_day(&self, today: &SolarDate) -> Result<DDay> {
        let (_, date) = next_on_or_after(today, &self.name, |year| self.occurrence_in(year))?;
        Ok(DDay {
            days: today.days_until(&date)?,
            date,
        })
    }
}

impl FromStr for ListReminder {
    type Err = Error;

    /// Parse `양MMDD name` or `음MMDD name`.
    fn from_str(s: &str) -> Result<Self> {
        let bad = || Error::Parse(format!("not a 양MMDD/음MMDD reminder: {s:?}"));
        let mut chars = s.trim().chars();
        let calendar = match chars.next() {
            Some(SOLAR_PREFIX) => CalendarKind::Solar,
            Some(LUNAR_PREFIX) => CalendarKind::Lunar,
            _ => return Err(bad()),
        };
        let rest = chars.as_str();
        let (month, day) = rest.get(..4).and_then(parse_month_day).ok_or_else(bad)?;
        let raw_name = rest.get(4..).ok_or_else(bad)?;

        let intercalary = calendar.is_lunar() && raw_name.contains(INTERCALARY_TAG);
        let name = if intercalary {
            raw_name.replace(INTERCALARY_TAG, "")
        } else {
            raw_name.to_string()
        };
        let name = name.trim();
        if name.is_empty() {
            return Err(bad());
        }
        Ok(ListReminder {
            name: name.to_string(),
            calendar,
            month,
            day,
            intercalary,
        })
    }
}

impl fmt::Display for ListReminder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = match self.calendar {
            CalendarKind::Solar => SOLAR_PREFIX,
            CalendarKind::Lunar => LUNAR_PREFIX,
        };
        write!(f, "{prefix}{:02}{:02} {}", self.month, self.day, self.name)?;
        if self.intercalary {
            f.write_str(INTERCALARY_TAG)?;
        }
        Ok(())
    }
}
