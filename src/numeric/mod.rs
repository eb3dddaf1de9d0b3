// ============================================================================
// Numeric Module
// Fixed-point parsing and arithmetic for money and percentages
// ============================================================================
//
// This module provides:
// - parse_scaled: lenient string -> scaled i64 conversion
// - Money: base-currency amounts at 4 implied decimals
// - Ratio: percentages at 6 implied decimals per point
// - ConvertedAmount: foreign-currency amounts with a conversion rate
// - NumericError: Error types for parsing and arithmetic
//
// Design principles:
// - No floating-point operations
// - All fallible operations return Result (no panics)
// - Overflow is detected before multiplying, never left to wrap
// - Distinct nominal types so money and percentage units never mix

mod converted;
mod errors;
mod money;
mod parser;
mod ratio;

pub use converted::{ConvertedAmount, ConvertedValue};
pub use errors::{NumericError, NumericResult};
pub use money::Money;
pub use parser::parse_scaled;
pub use ratio::Ratio;
