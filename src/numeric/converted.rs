// ============================================================================
// Converted Amount
// Foreign-currency values with a conversion rate to the base currency
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::money::Money;
use super::ratio::Ratio;

/// An amount held in a foreign currency (e.g. stock priced in USD) together
/// with the rate that converts it into the base currency.
///
/// The rate is "base dollars per foreign unit", scaled like [`Money`]. A rate
/// of exactly one dollar means the value is already in the base currency; a
/// rate of zero is accepted as an alias for it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ConvertedAmount {
    value: Money,
    rate: Money,
}

/// Result of [`ConvertedAmount::value`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConvertedValue {
    /// Amount in the base currency
    pub base: Money,

    /// Amount in the original currency
    pub original: Money,

    /// True when no conversion was needed
    pub is_base_currency: bool,
}

impl ConvertedAmount {
    /// Create from an already parsed value and rate.
    ///
    /// # Errors
    /// Returns `InvalidInput` if either the value or the rate is negative.
    pub fn new(value: Money, rate: Money) -> NumericResult<Self> {
        if value.is_negative() || rate.is_negative() {
            tracing::debug!(
                value = value.units(),
                rate = rate.units(),
                "negative conversion operand"
            );
            return Err(NumericError::InvalidInput);
        }
        Ok(Self::normalized(value, rate))
    }

    /// Parse a value and its conversion rate, e.g. `("10USD", "1.23CAD/USD")`.
    ///
    /// Both fields are read as unsigned money; a dash in either is ignored.
    /// Rates `"0"` and `"1"` both mean the value is in the base currency.
    ///
    /// # Errors
    /// Propagates any [`Money::parse`] error from either field.
    pub fn parse(value: &str, rate: &str) -> NumericResult<Self> {
        let value = Money::parse(value, false)?;
        let rate = Money::parse(rate, false)?;
        Ok(Self::normalized(value, rate))
    }

    fn normalized(value: Money, rate: Money) -> Self {
        let rate = if rate.is_zero() { Money::ONE } else { rate };
        Self { value, rate }
    }

    /// Amount in the original currency
    #[inline]
    pub const fn amount(&self) -> Money {
        self.value
    }

    /// Base dollars per foreign unit
    #[inline]
    pub const fn rate(&self) -> Money {
        self.rate
    }

    #[inline]
    pub fn is_base_currency(&self) -> bool {
        self.rate == Money::ONE
    }

    /// Scale the value by a percentage, leaving the rate untouched.
    ///
    /// # Errors
    /// Propagates `Overflow` from [`Money::apply_percentage`].
    pub fn apply_percentage(self, percentage: Ratio) -> NumericResult<Self> {
        Ok(Self {
            value: self.value.apply_percentage(percentage)?,
            rate: self.rate,
        })
    }

    /// Convert to the base currency.
    ///
    /// # Errors
    /// Returns `Overflow` if `value × rate` would not fit an i64.
    pub fn value(&self) -> NumericResult<ConvertedValue> {
        if self.is_base_currency() {
            return Ok(ConvertedValue {
                base: self.value,
                original: self.value,
                is_base_currency: true,
            });
        }

        let value = self.value.units();
        let rate = self.rate.units();
        // The value turns negative after a negative percentage; the rate never does
        if (i64::MAX as u64) / rate.unsigned_abs() < value.unsigned_abs() {
            tracing::debug!(value, rate, "currency conversion overflow");
            return Err(NumericError::Overflow);
        }
        Ok(ConvertedValue {
            base: Money::from_units(value * rate / Money::ONE.units()),
            original: self.value,
            is_base_currency: false,
        })
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ConvertedAmount {
    /// Serializes as the base-currency amount.
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let converted = self.value().map_err(serde::ser::Error::custom)?;
        serializer.collect_str(&converted.base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dollars(n: i64) -> Money {
        Money::from_integer(n).unwrap()
    }

    /// Expected outcome of parsing then converting.
    enum Expect {
        ParseError,
        ValueError,
        Converted { original: Money, base: Money, is_base: bool },
    }

    #[test]
    fn test_parse_and_value_table() {
        use Expect::*;

        let cases = [
            ("", "", Converted { original: Money::ZERO, base: Money::ZERO, is_base: true }),
            ("1", "0", Converted { original: dollars(1), base: dollars(1), is_base: true }),
            ("1", "1", Converted { original: dollars(1), base: dollars(1), is_base: true }),
            ("100$", "1.0", Converted { original: dollars(100), base: dollars(100), is_base: true }),
            ("100$", ".5", Converted { original: dollars(100), base: dollars(50), is_base: false }),
            ("1000000000", "1000000000", ValueError),
            ("10000000000", "1000000000", ParseError),
            ("1000000000", "1000000000000000000", ParseError),
            ("1000000000000000000", "1000000000", ParseError),
            ("-", "-", Converted { original: Money::ZERO, base: Money::ZERO, is_base: true }),
            ("-1", "-0", Converted { original: dollars(1), base: dollars(1), is_base: true }),
            ("-100$", "-.5", Converted { original: dollars(100), base: dollars(50), is_base: false }),
            ("-1000000000", "-1000000000", ValueError),
            ("-10000000000", "-1000000000", ParseError),
            ("100$", "-1.0", Converted { original: dollars(100), base: dollars(100), is_base: true }),
            ("-100$", ".5", Converted { original: dollars(100), base: dollars(50), is_base: false }),
        ];

        for (value, rate, expect) in cases {
            let parsed = ConvertedAmount::parse(value, rate);
            match expect {
                ParseError => assert!(parsed.is_err(), "({:?}, {:?})", value, rate),
                ValueError => {
                    let amount = parsed.unwrap();
                    assert_eq!(
                        amount.value(),
                        Err(NumericError::Overflow),
                        "({:?}, {:?})",
                        value,
                        rate
                    );
                },
                Converted { original, base, is_base } => {
                    let converted = parsed.unwrap().value().unwrap();
                    assert_eq!(converted.original, original, "({:?}, {:?})", value, rate);
                    assert_eq!(converted.base, base, "({:?}, {:?})", value, rate);
                    assert_eq!(converted.is_base_currency, is_base, "({:?}, {:?})", value, rate);
                },
            }
        }
    }

    #[test]
    fn test_out_of_bounds_propagates() {
        assert_eq!(
            ConvertedAmount::parse("10000000000", "1"),
            Err(NumericError::OutOfBounds)
        );
        assert_eq!(
            ConvertedAmount::parse("1", "1000000000000000000"),
            Err(NumericError::InvalidInput)
        );
    }

    #[test]
    fn test_zero_rate_is_identity() {
        let amount = ConvertedAmount::parse("42", "0").unwrap();
        assert_eq!(amount.rate(), Money::ONE);
        assert!(amount.is_base_currency());
        assert_eq!(amount, ConvertedAmount::parse("42", "1").unwrap());
    }

    #[test]
    fn test_new() {
        let amount = ConvertedAmount::new(dollars(10), Money::ZERO).unwrap();
        assert!(amount.is_base_currency());
        assert_eq!(amount.amount(), dollars(10));

        let amount = ConvertedAmount::new(dollars(10), Money::from_units(12_300)).unwrap();
        assert_eq!(amount.value().unwrap().base, Money::from_units(123_000));

        assert_eq!(
            ConvertedAmount::new(dollars(-10), Money::ONE),
            Err(NumericError::InvalidInput)
        );
        assert_eq!(
            ConvertedAmount::new(dollars(10), Money::from_units(-1)),
            Err(NumericError::InvalidInput)
        );
    }

    #[test]
    fn test_apply_percentage() {
        let amount = ConvertedAmount::parse("1000$", "2$").unwrap();
        assert_eq!(amount.value().unwrap().base, dollars(2_000));

        let half = amount.apply_percentage(Ratio::from_points(50).unwrap()).unwrap();
        assert_eq!(half.rate(), amount.rate());
        let converted = half.value().unwrap();
        assert_eq!(converted.original, dollars(500));
        assert_eq!(converted.base, dollars(1_000));
    }

    #[test]
    fn test_apply_percentage_overflow() {
        let amount = ConvertedAmount::parse("1000000000$", "").unwrap();
        assert_eq!(
            amount.apply_percentage(Ratio::from_units(i64::MAX)),
            Err(NumericError::Overflow)
        );
    }

    #[test]
    fn test_negative_value_conversion() {
        let amount = ConvertedAmount::parse("100$", ".5").unwrap();
        let refund = amount.apply_percentage(Ratio::from_points(-50).unwrap()).unwrap();
        let converted = refund.value().unwrap();
        assert_eq!(converted.original, dollars(-50));
        assert_eq!(converted.base, dollars(-25));
        assert!(!converted.is_base_currency);
    }

    #[test]
    fn test_negative_value_overflow() {
        let amount = ConvertedAmount::parse("1000000000", "1000000000").unwrap();
        let negative = amount.apply_percentage(Ratio::parse("-0.9", true).unwrap()).unwrap();
        assert_eq!(negative.amount().units(), -90_000_000_000);
        assert_eq!(negative.value(), Err(NumericError::Overflow));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serialize_as_base_amount() {
        let amount = ConvertedAmount::parse("1000$", "2$").unwrap();
        assert_eq!(serde_json::to_string(&amount).unwrap(), "\"2'000\"");

        let overflowing = ConvertedAmount::parse("1000000000", "1000000000").unwrap();
        assert!(serde_json::to_string(&overflowing).is_err());
    }
}
