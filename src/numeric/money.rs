// ============================================================================
// Money
// Base-currency amounts scaled to 1/100 of a cent
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::parser::parse_scaled;
use super::ratio::Ratio;
use crate::domain::FormatConfig;
use std::fmt;
use std::str::FromStr;

/// An amount of base currency (e.g. Canadian dollars).
///
/// Internally stores `amount × 10^4` as an i64: one dollar is 10,000 units and
/// one cent is 100 units.
///
/// # Value Range
/// Parsing caps amounts at one billion dollars in either direction
/// (`|units| ≤ 10^13`). Values built with [`Money::from_units`] or produced by
/// arithmetic are only bounded by i64.
///
/// # Example
/// ```
/// use salary_types::numeric::Money;
///
/// let salary = Money::parse("CA$ 85'000.50", false)?;
/// assert_eq!(salary.units(), 850_005_000);
/// assert_eq!(salary.to_string(), "85'000.50");
/// # Ok::<(), salary_types::numeric::NumericError>(())
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Money(i64);

impl Money {
    /// Decimal digits carried below one dollar
    pub const DECIMALS: u8 = 4;

    /// Zero value
    pub const ZERO: Self = Self(0);

    /// One cent (100 units)
    pub const CENT: Self = Self(100);

    /// One dollar (10,000 units)
    pub const ONE: Self = Self(100 * Self::CENT.0);

    /// Largest magnitude accepted by [`Money::parse`]: one billion dollars
    pub const MAX_AMOUNT: Self = Self(1_000_000_000 * Self::ONE.0);

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from raw units (1/10,000 of a dollar).
    #[inline]
    pub const fn from_units(units: i64) -> Self {
        Self(units)
    }

    /// Create from a whole number of dollars.
    ///
    /// # Errors
    /// Returns `Overflow` if the value is too large to represent.
    #[inline]
    pub fn from_integer(dollars: i64) -> NumericResult<Self> {
        dollars
            .checked_mul(Self::ONE.0)
            .map(Self)
            .ok_or(NumericError::Overflow)
    }

    /// Parse a dollar amount with up to 4 decimals.
    ///
    /// Valid inputs include `"-12.5$"`, `"50"`, `"1'000CAD"`, `"$1000"` and
    /// `"-12'345.2ca$"`. Sign is honoured only when `allow_negative` is set.
    ///
    /// # Errors
    /// - `InvalidInput` if the digits cannot be read as an i64 at 4 decimals
    /// - `OutOfBounds` if the magnitude exceeds one billion dollars
    pub fn parse(input: &str, allow_negative: bool) -> NumericResult<Self> {
        let units = parse_scaled(input, allow_negative, Self::DECIMALS)?;
        if units.unsigned_abs() > Self::MAX_AMOUNT.0.unsigned_abs() {
            tracing::debug!(input, units, "money amount exceeds supported maximum");
            return Err(NumericError::OutOfBounds);
        }
        Ok(Self(units))
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Get the raw internal value (1/10,000 of a dollar).
    #[inline]
    pub const fn units(self) -> i64 {
        self.0
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Get absolute value.
    ///
    /// # Errors
    /// Returns `Overflow` for `i64::MIN` units.
    #[inline]
    pub fn abs(self) -> NumericResult<Self> {
        self.0.checked_abs().map(Self).ok_or(NumericError::Overflow)
    }

    /// Round to the nearest cent, halves away from zero.
    pub fn round_to_cent(self) -> Self {
        // Magnitude is at most 9_223_372_036_854_775_800, which fits an i64
        let rounded = (rounded_cents(self.0) * 100) as i64;
        if self.0 < 0 {
            Self(-rounded)
        } else {
            Self(rounded)
        }
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Checked addition.
    #[inline]
    pub fn checked_add(self, rhs: Self) -> NumericResult<Self> {
        self.0
            .checked_add(rhs.0)
            .map(Self)
            .ok_or(NumericError::Overflow)
    }

    /// Checked subtraction.
    #[inline]
    pub fn checked_sub(self, rhs: Self) -> NumericResult<Self> {
        self.0
            .checked_sub(rhs.0)
            .map(Self)
            .ok_or(NumericError::Overflow)
    }

    /// Return a given percentage of this amount, truncated toward zero.
    ///
    /// ```
    /// use salary_types::numeric::{Money, Ratio};
    ///
    /// // 1% of $1 is one cent
    /// assert_eq!(Money::ONE.apply_percentage(Ratio::POINT), Ok(Money::CENT));
    /// ```
    ///
    /// # Errors
    /// Returns `Overflow` if `units × ratio units` would not fit an i64.
    pub fn apply_percentage(self, percentage: Ratio) -> NumericResult<Self> {
        let p = percentage.units();
        if self.0 == 0 || p == 0 {
            return Ok(Self::ZERO);
        }
        if (i64::MAX as u64) / p.unsigned_abs() < self.0.unsigned_abs() {
            tracing::debug!(units = self.0, percentage = p, "percentage application overflow");
            return Err(NumericError::Overflow);
        }
        Ok(Self(self.0 * p / Ratio::HUNDRED.units()))
    }

    /// Return the fraction of this amount over `other` as a percentage.
    ///
    /// Returns 0% when `other` is zero.
    ///
    /// # Errors
    /// Returns `Overflow` if `units × 100%` would not fit an i64.
    pub fn fraction_of(self, other: Self) -> NumericResult<Ratio> {
        if other.0 == 0 {
            return Ok(Ratio::ZERO);
        }
        let hundred = Ratio::HUNDRED.units();
        if (i64::MAX / hundred).unsigned_abs() < self.0.unsigned_abs() {
            tracing::debug!(units = self.0, over = other.0, "fraction overflow");
            return Err(NumericError::Overflow);
        }
        Ok(Ratio::from_units(self.0 * hundred / other.0))
    }

    // ========================================================================
    // Formatting
    // ========================================================================

    /// Render using a custom [`FormatConfig`].
    ///
    /// Output is rounded half-up to the cent. Rendering is lossy below one
    /// cent, so parsing the result only reproduces amounts with no sub-cent
    /// component.
    pub fn format_with(self, config: &FormatConfig) -> String {
        let cents_total = rounded_cents(self.0);
        let dollars = (cents_total / 100).to_string();
        let cents = cents_total % 100;

        let mut out = String::with_capacity(dollars.len() + dollars.len() / 3 + 4);
        if self.0 < 0 && cents_total != 0 {
            out.push('-');
        }
        for (i, digit) in dollars.chars().enumerate() {
            out.push(digit);
            let remaining = dollars.len() - i - 1;
            if remaining > 0 && remaining % 3 == 0 {
                if let Some(separator) = config.thousands_separator {
                    out.push(separator);
                }
            }
        }
        if cents != 0 || config.always_show_cents {
            out.push_str(&format!(".{:02}", cents));
        }
        out
    }

    // ========================================================================
    // Conversion to rust_decimal (for API boundaries)
    // ========================================================================

    /// Convert to an exact `rust_decimal::Decimal` with 4 decimal places.
    pub fn to_decimal(self) -> rust_decimal::Decimal {
        rust_decimal::Decimal::new(self.0, u32::from(Self::DECIMALS))
    }
}

/// Magnitude rounded half-up to whole cents.
fn rounded_cents(units: i64) -> u64 {
    let abs = units.unsigned_abs();
    if abs % 100 >= 50 {
        (abs + 100) / 100
    } else {
        abs / 100
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl fmt::Display for Money {
    /// Formats as `"-1'234.56"`, or `"1'234"` when there are no cents.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.format_with(&FormatConfig::standard()))
    }
}

impl FromStr for Money {
    type Err = NumericError;

    /// Parses with negative amounts allowed.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, true)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Money {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Money {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        Self::parse(&s, true).map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Tests
// ============================================================================
