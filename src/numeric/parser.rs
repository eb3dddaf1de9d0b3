// ============================================================================
// Fixed-Point Parser
// Lenient string-to-scaled-integer conversion for human-entered numbers
// ============================================================================

use super::errors::{NumericError, NumericResult};

/// Parse a period separated decimal number into an integer scaled by
/// `10^decimals`, ignoring every character that is not an ASCII digit or `.`.
///
/// - If `allow_negative` is set and a `-` appears anywhere in the input, the
///   result is negative. Otherwise the dash is dropped like any other noise.
/// - Only the first `.` is meaningful; a second `.` and everything after it
///   is ignored.
/// - Fraction digits beyond `decimals` are truncated, not rounded.
/// - Empty or all-noise input (`""`, `"-"`, `"."`) parses to `0`.
/// - At zero `decimals` there is no room for a fraction: `"2020.7"` is
///   rejected, while `"2020."` reads as `2020`.
///
/// # Examples
/// ```
/// use salary_types::numeric::parse_scaled;
///
/// assert_eq!(parse_scaled("ab-12.3456%cd.", false, 2), Ok(1234));
/// assert_eq!(parse_scaled("ab-12.3456$cd.", true, 4), Ok(-123456));
/// ```
///
/// # Errors
/// Returns `InvalidInput` if the integer part does not fit an i64 once scaled,
/// if `10^decimals` itself does not fit an i64, or if fraction digits are
/// given at zero `decimals`.
pub fn parse_scaled(input: &str, allow_negative: bool, decimals: u8) -> NumericResult<i64> {
    let is_negative = allow_negative && input.contains('-');

    let scale = 10i64.checked_pow(u32::from(decimals)).ok_or_else(|| {
        tracing::debug!(decimals, "decimal precision does not fit an i64");
        NumericError::InvalidInput
    })?;

    // Cleanup and split
    let clean: String = input
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    let mut parts = clean.splitn(3, '.');
    let int_str = parts.next().unwrap_or_default();
    let frac_str = parts.next().unwrap_or_default();

    // Integer part
    let mut number: i64 = 0;
    if !int_str.is_empty() {
        let int_val: i64 = int_str
            .parse()
            .map_err(|_| reject(input, "integer part does not fit an i64"))?;
        if int_val > i64::MAX / scale {
            return Err(reject(input, "integer part overflows at this precision"));
        }
        number = int_val * scale;
    }

    // Fractional part
    let width = usize::from(decimals);
    if !frac_str.is_empty() && width == 0 {
        return Err(reject(input, "fraction given at zero precision"));
    }
    if !frac_str.is_empty() {
        let frac_val: u64 = if frac_str.len() >= width {
            frac_str[..width].parse::<u64>()
        } else {
            format!("{:0<width$}", frac_str, width = width).parse::<u64>()
        }
        .map_err(|_| reject(input, "malformed fraction"))?;

        // frac_val < scale, so the conversion is lossless
        number = number
            .checked_add(frac_val as i64)
            .ok_or_else(|| reject(input, "value overflows at this precision"))?;
    }

    if is_negative {
        number = -number;
    }
    Ok(number)
}

fn reject(input: &str, reason: &'static str) -> NumericError {
    tracing::debug!(input, reason, "rejected numeric input");
    NumericError::InvalidInput
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::{QuickCheck, TestResult};

    #[test]
    fn test_plain_numbers() {
        assert_eq!(parse_scaled("19", true, 4), Ok(190_000));
        assert_eq!(parse_scaled("19.5", true, 4), Ok(195_000));
        assert_eq!(parse_scaled("0.01", true, 4), Ok(100));
        assert_eq!(parse_scaled("12.345678", true, 6), Ok(12_345_678));
    }

    #[test]
    fn test_noise_is_discarded() {
        assert_eq!(parse_scaled("1'234.56$", true, 4), Ok(12_345_600));
        assert_eq!(parse_scaled("CA$1'234.5628", true, 4), Ok(12_345_628));
        assert_eq!(parse_scaled(" 12 . 5 %", false, 2), Ok(1250));
    }

    #[test]
    fn test_empty_and_noise_only() {
        assert_eq!(parse_scaled("", true, 4), Ok(0));
        assert_eq!(parse_scaled("-", true, 4), Ok(0));
        assert_eq!(parse_scaled(".", true, 4), Ok(0));
        assert_eq!(parse_scaled("abc$", false, 6), Ok(0));
    }

    #[test]
    fn test_dash_anywhere_is_negative() {
        assert_eq!(parse_scaled("19-", true, 0), Ok(-19));
        assert_eq!(parse_scaled("1-9", true, 0), Ok(-19));
        assert_eq!(parse_scaled("CA$-1'234.5628", true, 4), Ok(-12_345_628));
    }

    #[test]
    fn test_dash_ignored_when_negative_not_allowed() {
        assert_eq!(parse_scaled("-19.5$", false, 4), Ok(195_000));
        assert_eq!(parse_scaled("1-9", false, 0), Ok(19));
    }

    #[test]
    fn test_missing_integer_part() {
        assert_eq!(parse_scaled("-.1", true, 4), Ok(-1000));
        assert_eq!(parse_scaled(".5", false, 4), Ok(5000));
    }

    #[test]
    fn test_extra_dots_are_ignored() {
        assert_eq!(parse_scaled("1.2.3", false, 4), Ok(12_000));
        assert_eq!(parse_scaled("1..9", false, 4), Ok(10_000));
    }

    #[test]
    fn test_fraction_is_truncated() {
        assert_eq!(parse_scaled("1'234.562892", true, 4), Ok(12_345_628));
        assert_eq!(parse_scaled("0.9999", true, 2), Ok(99));
        assert_eq!(
            parse_scaled(&format!("0.{}", u64::MAX), false, 4),
            Ok(1844)
        );
    }

    #[test]
    fn test_zero_decimals_reject_fraction() {
        assert_eq!(parse_scaled("2020.7", false, 0), Err(NumericError::InvalidInput));
        assert_eq!(parse_scaled("2020.", false, 0), Ok(2020));
        assert_eq!(parse_scaled("2020.0", false, 0), Err(NumericError::InvalidInput));
        assert_eq!(parse_scaled("2020..7", false, 0), Ok(2020));
    }

    #[test]
    fn test_integer_overflow() {
        assert_eq!(
            parse_scaled(&i64::MAX.to_string(), false, 4),
            Err(NumericError::InvalidInput)
        );
        assert_eq!(
            parse_scaled(&u64::MAX.to_string(), false, 4),
            Err(NumericError::InvalidInput)
        );
        assert_eq!(
            parse_scaled(&format!("{}000", i64::MAX), false, 0),
            Err(NumericError::InvalidInput)
        );
        // Fits exactly at zero decimals
        assert_eq!(parse_scaled(&i64::MAX.to_string(), false, 0), Ok(i64::MAX));
    }

    #[test]
    fn test_fraction_pushes_past_max() {
        assert_eq!(
            parse_scaled("922337203685477.5807", false, 4),
            Ok(i64::MAX)
        );
        assert_eq!(
            parse_scaled("922337203685477.9999", false, 4),
            Err(NumericError::InvalidInput)
        );
    }

    #[test]
    fn test_precision_limits() {
        assert_eq!(parse_scaled("1", false, 18), Ok(1_000_000_000_000_000_000));
        assert_eq!(parse_scaled("1", false, 19), Err(NumericError::InvalidInput));
    }

    fn noise_does_not_change_value(int_part: u32, frac_part: u16, noise: Vec<u8>) -> TestResult {
        const FILLERS: [char; 7] = ['$', '\'', ' ', 'c', 'A', '%', '\t'];

        let clean = format!("{}.{:04}", int_part, frac_part % 10_000);
        let mut noisy = String::with_capacity(clean.len() * 2);
        for (i, ch) in clean.chars().enumerate() {
            if let Some(b) = noise.get(i) {
                noisy.push(FILLERS[usize::from(*b) % FILLERS.len()]);
            }
            noisy.push(ch);
        }

        TestResult::from_bool(parse_scaled(&clean, true, 4) == parse_scaled(&noisy, true, 4))
    }

    #[test]
    fn test_noise_invariance_property() {
        QuickCheck::new()
            .tests(500)
            .quickcheck(noise_does_not_change_value as fn(u32, u16, Vec<u8>) -> TestResult);
    }
}
