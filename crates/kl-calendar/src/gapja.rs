//! Sexagenary (GapJa, 갑자) names of lunar dates.
//!
//! Each of year, month and day is named by one of ten heavenly stems and one
//! of twelve earthly branches; the pair repeats every 60 units. The indices
//! ([`GapJa`]) are the result; [`GapJa::render`] only picks glyphs for them.
//!
//! # Example
//! ```
//! use kl_calendar::gapja::{gapja_name, GlyphSet};
//! use kl_calendar::LunarDate;
//!
//! let date = LunarDate::new(2024, 1, 1, false).unwrap();
//! assert_eq!(gapja_name(&date, GlyphSet::Korean).unwrap(), "갑진년 병인월 갑진일");
//! assert_eq!(gapja_name(&date, GlyphSet::Chinese).unwrap(), "甲辰年 丙寅月 甲辰日");
//! ```

use std::fmt::Write as _;

use kl_core::ensure;
use kl_core::errors::Result;

use crate::date::LunarDate;
use crate::year_table::FIRST_YEAR;

const STEMS: usize = 10;
const BRANCHES: usize = 12;

const KOREAN_STEMS: [char; STEMS] = ['갑', '을', '병', '정', '무', '기', '경', '신', '임', '계'];
const KOREAN_BRANCHES: [char; BRANCHES] =
    ['자', '축', '인', '묘', '진', '사', '오', '미', '신', '유', '술', '해'];
const KOREAN_UNITS: [char; 3] = ['년', '월', '일'];

const CHINESE_STEMS: [char; STEMS] = ['甲', '乙', '丙', '丁', '戊', '己', '庚', '辛', '壬', '癸'];
const CHINESE_BRANCHES: [char; BRANCHES] =
    ['子', '丑', '寅', '卯', '辰', '巳', '午', '未', '申', '酉', '戌', '亥'];
const CHINESE_UNITS: [char; 3] = ['年', '月', '日'];

/// Glyphs used to render a [`GapJa`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum GlyphSet {
    /// Hangul: 갑자년.
    #[default]
    Korean,
    /// Hanja: 甲子年.
    Chinese,
}

impl GlyphSet {
    fn stems(self) -> &'static [char; STEMS] {
        match self {
            GlyphSet::Korean => &KOREAN_STEMS,
            GlyphSet::Chinese => &CHINESE_STEMS,
        }
    }

    fn branches(self) -> &'static [char; BRANCHES] {
        match self {
            GlyphSet::Korean => &KOREAN_BRANCHES,
            GlyphSet::Chinese => &CHINESE_BRANCHES,
        }
    }

    fn units(self) -> &'static [char; 3] {
        match self {
            GlyphSet::Korean => &KOREAN_UNITS,
            GlyphSet::Chinese => &CHINESE_UNITS,
        }
    }

    fn intercalary(self) -> char {
        match self {
            GlyphSet::Korean => '윤',
            GlyphSet::Chinese => '閏',
        }
    }
}

/// A stem index (0 = 갑/甲) and a branch index (0 = 자/子).
///
/// The fields are private so every value names one of the sixty pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StemBranch {
    stem: u8,
    branch: u8,
}

impl StemBranch {
    /// Build a pair from its indices.
    ///
    /// # Errors
    /// [`kl_core::Error::InvalidArgument`] if `stem` is not in `0..10`,
    /// `branch` is not in `0..12`, or their parities differ (no such pair
    /// occurs in the cycle).
    pub fn new(stem: u8, branch: u8) -> Result<Self> {
        ensure!(
            usize::from(stem) < STEMS && usize::from(branch) < BRANCHES,
            "stem {stem} or branch {branch} out of range"
        );
        ensure!(
            stem % 2 == branch % 2,
            "stem {stem} and branch {branch} never pair up"
        );
        Ok(StemBranch { stem, branch })
    }

    /// Heavenly stem, 0–9.
    pub fn stem(&self) -> u8 {
        self.stem
    }

    /// Earthly branch, 0–11.
    pub fn branch(&self) -> u8 {
        self.branch
    }

    fn from_count(stem_count: i64, branch_count: i64) -> Self {
        StemBranch {
            stem: stem_count.rem_euclid(STEMS as i64) as u8,
            branch: branch_count.rem_euclid(BRANCHES as i64) as u8,
        }
    }

    /// Position in the 60-term cycle, 1 (갑자) to 60 (계해).
    pub fn cycle_number(&self) -> u8 {
        // Stem and branch always share parity, so this is exact.
        (6 * i32::from(self.stem) - 5 * i32::from(self.branch)).rem_euclid(60) as u8 + 1
    }

    /// The two glyphs of this pair.
    pub fn glyphs(&self, glyphs: GlyphSet) -> String {
        let mut out = String::with_capacity(8);
        out.push(glyphs.stems()[self.stem as usize]);
        out.push(glyphs.branches()[self.branch as usize]);
        out
    }
}

/// Sexagenary names of a lunar date's year, month and day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GapJa {
    /// Year pair.
    pub year: StemBranch,
    /// Month pair.
    pub month: StemBranch,
    /// Day pair.
    pub day: StemBranch,
    /// The date lies in an intercalary month.
    pub intercalary: bool,
}

impl GapJa {
    /// Render as `"{year}년 {month}월 {day}일"`, with `" (윤월)"` appended for
    /// intercalary months (Chinese glyphs: `年`, `月`, `日`, `閏`).
    pub fn render(&self, glyphs: GlyphSet) -> String {
        let units = glyphs.units();
        let mut out = String::new();
        for (i, pair) in [self.year, self.month, self.day].iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push_str(&pair.glyphs(glyphs));
            out.push(units[i]);
        }
        if self.intercalary {
            let _ = write!(out, " ({}{})", glyphs.intercalary(), units[1]);
        }
        out
    }
}

/// Compute the sexagenary indices of a lunar date.
///
/// # Errors
/// Whatever [`LunarDate::ordinal`] reports for an invalid date.
pub fn gapja(date: &LunarDate) -> Result<GapJa> {
    let abs_day = i64::from(date.ordinal()?);
    let years = i64::from(date.year - FIRST_YEAR);
    let year_count = years + 7;
    let month_count = i64::from(date.month) + 12 * years;

    Ok(GapJa {
        year: StemBranch::from_count(year_count, year_count),
        month: StemBranch::from_count(month_count + 5, month_count + 1),
        day: StemBranch::from_count(abs_day + 4, abs_day),
        intercalary: date.intercalary,
    })
}

/// Sexagenary name of a lunar date in the chosen glyph set.
pub fn gapja_name(date: &LunarDate, glyphs: GlyphSet) -> Result<String> {
    Ok(gapja(date)?.render(glyphs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use kl_core::errors::Error;

    fn lunar(y: i32, m: u32, d: u32, leap: bool) -> LunarDate {
        LunarDate::new(y, m, d, leap).unwrap()
    }

    fn pair(stem: u8, branch: u8) -> StemBranch {
        StemBranch { stem, branch }
    }

    #[test]
    fn indices_for_korean_new_year_2024() {
        let g = gapja(&lunar(2024, 1, 1, false)).unwrap();
        assert_eq!(g.year, pair(0, 4));
        assert_eq!(g.month, pair(2, 2));
        assert_eq!(g.day, pair(0, 4));
        assert!(!g.intercalary);
    }

    #[test]
    fn first_day_of_table() {
        let g = gapja(&lunar(1391, 1, 1, false)).unwrap();
        assert_eq!(g.render(GlyphSet::Korean), "신미년 경인월 기축일");
    }

    #[test]
    fn intercalary_marker() {
        let date = lunar(2023, 2, 10, true);
        assert_eq!(
            gapja_name(&date, GlyphSet::Korean).unwrap(),
            "계묘년 을묘월 무자일 (윤월)"
        );
        assert_eq!(
            gapja_name(&date, GlyphSet::Chinese).unwrap(),
            "癸卯年 乙卯月 戊子日 (閏月)"
        );
    }

    #[test]
    fn last_day_of_table() {
        let g = gapja(&lunar(2050, 11, 18, false)).unwrap();
        assert_eq!(g.render(GlyphSet::Korean), "경오년 무자월 을유일");
    }

    #[test]
    fn cycle_numbers() {
        assert_eq!(pair(0, 0).cycle_number(), 1);
        assert_eq!(pair(0, 4).cycle_number(), 41);
        assert_eq!(pair(6, 2).cycle_number(), 27);
        assert_eq!(pair(9, 11).cycle_number(), 60);
        assert_eq!(pair(0, 4).glyphs(GlyphSet::Chinese), "甲辰");
    }

    #[test]
    fn checked_construction() {
        assert_eq!(StemBranch::new(0, 4).unwrap(), pair(0, 4));
        assert_eq!(StemBranch::new(9, 11).unwrap().cycle_number(), 60);
        for (stem, branch) in [(10, 0), (0, 12), (255, 255), (0, 1)] {
            assert!(
                matches!(StemBranch::new(stem, branch), Err(Error::InvalidArgument(_))),
                "{stem}/{branch}"
            );
        }
    }

    #[test]
    fn consecutive_days_advance_both_cycles() {
        let a = gapja(&lunar(2024, 3, 10, false)).unwrap().day;
        let b = gapja(&lunar(2024, 3, 11, false)).unwrap().day;
        assert_eq!(b.stem, (a.stem + 1) % 10);
        assert_eq!(b.branch, (a.branch + 1) % 12);
        assert_eq!(b.cycle_number() % 60, (a.cycle_number() + 1) % 60);
    }
}
