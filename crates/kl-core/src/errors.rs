//! Error types for korean-lunar.
//!
//! Every fallible operation in the workspace returns the single
//! `thiserror`-derived [`Error`] enum defined here. The `ensure!` and `fail!`
//! macros cover the common "check a precondition, bail out with a message"
//! pattern.

use thiserror::Error;

/// The top-level error type used throughout korean-lunar.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A year, date, or ordinal lies outside the span covered by the lunar
    /// year table.
    #[error("out of range: {0}")]
    OutOfRange(String),

    /// The date is calendar-impossible (bad month or day, a day inside the
    /// October 1582 gap, an intercalary flag on an ordinary month).
    #[error("invalid date: {0}")]
    InvalidDate(String),

    /// A month-day projected onto another year does not exist in that year.
    ///
    /// Callers that want an approximate answer may retry with the previous
    /// calendar day.
    #[error("non-existent date: {0}")]
    NonExistentDate(String),

    /// Malformed date text or configuration value.
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    /// Return `true` for [`Error::NonExistentDate`].
    pub fn is_non_existent(&self) -> bool {
        matches!(self, Error::NonExistentDate(_))
    }
}

/// Shorthand `Result` type used throughout korean-lunar.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return early with an error if a condition is false.
///
/// `ensure!(cond, "message {x}")` yields [`Error::InvalidArgument`];
/// `ensure!(cond, Variant, "message")` yields `Error::Variant`.
///
/// # Example
/// ```
/// use kl_core::{ensure, errors::Error};
/// fn month(m: u32) -> kl_core::errors::Result<u32> {
///     ensure!((1..=12).contains(&m), InvalidDate, "month {m} out of range [1, 12]");
///     Ok(m)
/// }
/// assert!(month(3).is_ok());
/// assert!(matches!(month(13), Err(Error::InvalidDate(_))));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $variant:ident, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::$variant(format!($($msg)*)));
        }
    };
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::InvalidArgument(format!($($msg)*)));
        }
    };
}

/// Return an `Error::Variant` immediately.
///
/// # Example
/// ```
/// use kl_core::{fail, errors::Error};
/// fn always_err() -> kl_core::errors::Result<()> {
///     fail!(Parse, "unexpected token");
/// }
/// assert_eq!(always_err(), Err(Error::Parse("unexpected token".into())));
/// ```
#[macro_export]
macro_rules! fail {
    ($variant:ident, $($msg:tt)*) => {
        return Err($crate::errors::Error::$variant(format!($($msg)*)))
    };
}
