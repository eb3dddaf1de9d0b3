// ============================================================================
// Year
// Calendar year with a current-year fallback
// ============================================================================

use crate::numeric::parse_scaled;
use chrono::{Datelike, Utc};
use std::fmt;

/// A calendar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Year(i64);

impl Year {
    pub const fn new(year: i64) -> Self {
        Self(year)
    }

    /// The current year in UTC.
    pub fn current() -> Self {
        Self(i64::from(Utc::now().year().max(0)))
    }

    /// Parse a year, falling back to the current year when the input is
    /// empty, zero or unparsable.
    pub fn parse(input: &str) -> Self {
        match parse_scaled(input, false, 0) {
            Ok(year) if year != 0 => Self(year),
            _ => {
                tracing::debug!(input, "falling back to current year");
                Self::current()
            },
        }
    }

    #[inline]
    pub const fn value(self) -> i64 {
        self.0
    }

    /// Gregorian leap year rule
    pub const fn is_leap(self) -> bool {
        (self.0 % 4 == 0 && self.0 % 100 != 0) || self.0 % 400 == 0
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
