//! Deserializable configuration.
//!
//! ```
//! use kl_anniversary::config::Config;
//!
//! let cfg: Config = serde_json::from_str(r#"{
//!     "anniversaries": {
//!         "mom": { "date": "1960-08-15", "lunar": true, "kind": "birth" },
//!         "wedding": { "date": "2015-05-09", "name": "결혼기념일" }
//!     },
//!     "reminders": { "lookahead_days": 5 }
//! }"#).unwrap();
//! let all = cfg.anniversaries().unwrap();
//! assert_eq!(all[0].name, "mom");
//! assert_eq!(all[1].name, "결혼기념일");
//! assert_eq!(cfg.reminders.lookahead_days, 5);
//! ```

use std::collections::BTreeMap;

use serde::Deserialize;

use kl_calendar::{LunarDate, SolarDate};
use kl_core::errors::{Error, Result};
use kl_core::utilities::data_parsers::parse_iso_date;

use crate::anniversary::{Anniversary, AnniversaryDate, AnniversaryKind};

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Anniversaries by key; the key doubles as the name when none is given.
    #[serde(default)]
    pub anniversaries: BTreeMap<String, AnniversaryConfig>,

    /// Reminder settings.
    #[serde(default)]
    pub reminders: ReminderConfig,
}

impl Config {
    /// Build every configured anniversary, in key order.
    pub fn anniversaries(&self) -> Result<Vec<Anniversary>> {
        self.anniversaries
            .iter()
            .map(|(key, cfg)| Anniversary::from_config(key, cfg))
            .collect()
    }
}

/// One anniversary entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnniversaryConfig {
    /// Original date, `YYYY-MM-DD`.
    pub date: String,
    /// Display name; empty means "use the key".
    #[serde(default)]
    pub name: String,
    /// What is commemorated.
    #[serde(default, alias = "type")]
    pub kind: AnniversaryKind,
    /// `date` is a lunar date.
    #[serde(default)]
    pub lunar: bool,
    /// `date` is in the intercalary month. Only read when `lunar` is set.
    #[serde(default)]
    pub intercalation: bool,
}

/// Reminder settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReminderConfig {
    /// Announce reminders due within this many days.
    #[serde(default = "default_lookahead_days")]
    pub lookahead_days: u32,
}

impl Default for ReminderConfig {
    fn default() -> Self {
        Self {
            lookahead_days: default_lookahead_days(),
        }
    }
}

fn default_lookahead_days() -> u32 {
    3
}

impl Anniversary {
    /// Build an anniversary from its config entry.
    ///
    /// # Errors
    /// [`Error::Parse`] for a malformed `date`; the calendar's validation
    /// errors for a date that does not exist.
    pub fn from_config(key: &str, cfg: &AnniversaryConfig) -> Result<Self> {
        let (year, month, day) = parse_iso_date(&cfg.date)
            .ok_or_else(|| Error::Parse(format!("{key}: not a YYYY-MM-DD date: {:?}", cfg.date)))?;
        let date = if cfg.lunar {
            AnniversaryDate::Lunar(LunarDate::new(year, month, day, cfg.intercalation)?)
        } else {
            AnniversaryDate::Solar(SolarDate::new(year, month, day)?)
        };
        let name = if cfg.name.is_empty() { key } else { cfg.name.as_str() };
        Ok(Anniversary::new(name, date, cfg.kind))
    }
}
