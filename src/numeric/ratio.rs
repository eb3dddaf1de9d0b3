// ============================================================================
// Ratio
// Percentages scaled to 1/1'000'000 of a percentage point
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::parser::parse_scaled;
use std::fmt;
use std::str::FromStr;

/// A percentage.
///
/// Internally stores `points × 10^6` as an i64, so 100% is 100,000,000 units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Ratio(i64);

impl Ratio {
    /// Decimal digits carried below one percentage point
    pub const DECIMALS: u8 = 6;

    /// 0%
    pub const ZERO: Self = Self(0);

    /// 1%
    pub const POINT: Self = Self(1_000_000);

    /// 100%
    pub const HUNDRED: Self = Self(100 * Self::POINT.0);

    /// Create from raw units (1/1,000,000 of a percentage point).
    #[inline]
    pub const fn from_units(units: i64) -> Self {
        Self(units)
    }

    /// Create from a whole number of percentage points.
    ///
    /// # Errors
    /// Returns `Overflow` if the value is too large to represent.
    #[inline]
    pub fn from_points(points: i64) -> NumericResult<Self> {
        points
            .checked_mul(Self::POINT.0)
            .map(Self)
            .ok_or(NumericError::Overflow)
    }

    /// Parse a percentage with up to 6 decimals.
    ///
    /// Valid inputs include `"10%"`, `"60.5"`, `"%100"`, `"12.34%"` and
    /// `"-43.29"`. Sign is honoured only when `allow_negative` is set.
    ///
    /// # Errors
    /// Returns `InvalidInput` if the digits cannot be read as an i64 at 6
    /// decimals.
    pub fn parse(input: &str, allow_negative: bool) -> NumericResult<Self> {
        parse_scaled(input, allow_negative, Self::DECIMALS).map(Self)
    }

    /// Get the raw internal value (1/1,000,000 of a percentage point).
    #[inline]
    pub const fn units(self) -> i64 {
        self.0
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Convert to an exact `rust_decimal::Decimal` in percentage points.
    pub fn to_decimal(self) -> rust_decimal::Decimal {
        rust_decimal::Decimal::new(self.0, u32::from(Self::DECIMALS))
    }
}

impl fmt::Display for Ratio {
    /// Formats as `"12.3"` / `"12.34"`, or `"-12"` when there is no fraction.
    /// Rounds half-up to hundredths of a point.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let abs = self.0.unsigned_abs();
        let hundredths = if abs % 10_000 >= 5_000 {
            (abs + 10_000) / 10_000
        } else {
            abs / 10_000
        };
        let points = hundredths / 100;
        let decimal = hundredths % 100;

        if self.0 < 0 && hundredths != 0 {
            f.write_str("-")?;
        }
        write!(f, "{}", points)?;
        match decimal {
            0 => Ok(()),
            d if d < 10 => write!(f, ".0{}", d),
            d if d % 10 == 0 => write!(f, ".{}", d / 10),
            d => write!(f, ".{}", d),
        }
    }
}

impl FromStr for Ratio {
    type Err = NumericError;

    /// Parses with negative percentages allowed.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, true)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Ratio {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Ratio {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        Self::parse(&s, true).map_err(serde::de::Error::custom)
    }
}
