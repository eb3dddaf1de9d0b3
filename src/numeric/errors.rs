// ============================================================================
// Numeric Errors
// Error types for parsing and fixed-point arithmetic
// ============================================================================

use thiserror::Error;

/// Errors that can occur while parsing or operating on fixed-point values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum NumericError {
    /// The cleaned digits could not be read as an integer, or the integer
    /// part does not fit an i64 once scaled to the requested precision.
    #[error("invalid input: number out of bounds, cannot parse it")]
    InvalidInput,

    /// A parsed amount exceeds the supported money range.
    #[error("amounts larger than 1 billion are not supported")]
    OutOfBounds,

    /// A multiplication would exceed i64 range.
    #[error("arithmetic overflow: result exceeded maximum value")]
    Overflow,
}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
