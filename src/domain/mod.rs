// ============================================================================
// Domain Module
// Formatting configuration and the value types that sit around the numeric core
// ============================================================================

pub mod config;
pub mod region;
pub mod year;

pub use config::FormatConfig;
pub use region::{Region, RegionError};
pub use year::Year;
