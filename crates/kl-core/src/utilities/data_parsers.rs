//! Date-string parsing helpers.
//!
//! Lunar dates carry an optional intercalary marker after the ISO digits.
//! Three spellings are accepted: `" Intercalation"`, `"(윤달)"` and `"(윤)"`,
//! with or without a separating space.

/// Markers that flag a lunar date as falling in the intercalary month.
pub const INTERCALARY_MARKERS: [&str; 3] = ["Intercalation", "(윤달)", "(윤)"];

/// Parse a date string in ISO 8601 format (`YYYY-MM-DD`).
///
/// Returns `(year, month, day)` on success. Range checks are left to the
/// calendar crate.
pub fn parse_iso_date(s: &str) -> Option<(i32, u32, u32)> {
    let s = s.trim();
    let mut parts = s.splitn(3, '-');
    let year: i32 = parse_digits(parts.next()?)?;
    let month: u32 = parse_digits(parts.next()?)?;
    let day: u32 = parse_digits(parts.next()?)?;
    Some((year, month, day))
}

/// Parse a lunar date string: ISO digits optionally followed by an
/// intercalary marker.
///
/// Returns `(year, month, day, intercalary)` on success.
pub fn parse_lunar_date(s: &str) -> Option<(i32, u32, u32, bool)> {
    let s = s.trim();
    let (body, intercalary) = match INTERCALARY_MARKERS
        .iter()
        .find_map(|marker| s.strip_suffix(marker))
    {
        Some(rest) => (rest.trim_end(), true),
        None => (s, false),
    };
    let (y, m, d) = parse_iso_date(body)?;
    Some((y, m, d, intercalary))
}

/// Parse a compact `MMDD` month and day, as used in reminder list entries.
pub fn parse_month_day(s: &str) -> Option<(u32, u32)> {
    if s.len() != 4 {
        return None;
    }
    let month: u32 = parse_digits(s.get(..2)?)?;
    let day: u32 = parse_digits(s.get(2..)?)?;
    Some((month, day))
}

// `str::parse` accepts a leading `+`; dates never carry one.
fn parse_digits<T: std::str::FromStr>(s: &str) -> Option<T> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}
