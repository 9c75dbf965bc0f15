//! Calendar kind tag.

/// Which calendar a (year, month, day) triple belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalendarKind {
    /// Gregorian (solar) calendar, Julian before October 1582.
    Solar,
    /// Korean lunar calendar.
    Lunar,
}

impl CalendarKind {
    /// Return `true` for [`CalendarKind::Lunar`].
    pub fn is_lunar(&self) -> bool {
        matches!(self, CalendarKind::Lunar)
    }
}

impl std::fmt::Display for CalendarKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CalendarKind::Solar => write!(f, "solar"),
            CalendarKind::Lunar => write!(f, "lunar"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(CalendarKind::Solar.to_string(), "solar");
        assert_eq!(CalendarKind::Lunar.to_string(), "lunar");
        assert!(CalendarKind::Lunar.is_lunar());
        assert!(!CalendarKind::Solar.is_lunar());
    }
}
