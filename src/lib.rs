// ============================================================================
// Salary Types Library
// Exact fixed-point money and percentage values parsed from human input
// ============================================================================

//! # Salary Types
//!
//! Fixed-point arithmetic for monetary and percentage values entered by
//! people: currency symbols, apostrophe thousands separators, stray letters
//! and optional negativity are all accepted.
//!
//! ## Features
//!
//! - **Lenient parsing** into exact scaled `i64` values
//! - **No floating point** at any stage
//! - **Overflow-checked** percentage, fraction and currency conversion
//! - **Canonical formatting** with round half-up to the cent
//!
//! ## Example
//!
//! ```rust
//! use salary_types::prelude::*;
//!
//! let salary = Money::parse("CA$ 85'000", false)?;
//! let raise = Ratio::parse("3.5%", false)?;
//! let bonus = salary.apply_percentage(raise)?;
//! assert_eq!(bonus.to_string(), "2'975");
//!
//! let stock = ConvertedAmount::parse("1'000 USD", "1.35")?;
//! let converted = stock.value()?;
//! assert_eq!(converted.base.to_string(), "1'350");
//! assert!(!converted.is_base_currency);
//! # Ok::<(), NumericError>(())
//! ```

pub mod domain;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{FormatConfig, Region, RegionError, Year};
    pub use crate::numeric::{
        parse_scaled, ConvertedAmount, ConvertedValue, Money, NumericError, NumericResult, Ratio,
    };
}
