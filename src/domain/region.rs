// ============================================================================
// Region
// Canadian provinces and territories keyed by their postal code
// ============================================================================

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A Canadian province or territory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Region {
    Alberta,
    BritishColumbia,
    Manitoba,
    NewBrunswick,
    NewfoundlandAndLabrador,
    NorthwestTerritories,
    NovaScotia,
    Nunavut,
    Ontario,
    PrinceEdwardIsland,
    Quebec,
    Saskatchewan,
    Yukon,
}

/// Lookup failure for a region code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegionError {
    #[error("unknown region code {0:?}")]
    UnknownCode(String),
}

/// Two-letter codes, in the same order as the enum.
const CODES: [(&str, Region); 13] = [
    ("AB", Region::Alberta),
    ("BC", Region::BritishColumbia),
    ("MB", Region::Manitoba),
    ("NB", Region::NewBrunswick),
    ("NL", Region::NewfoundlandAndLabrador),
    ("NT", Region::NorthwestTerritories),
    ("NS", Region::NovaScotia),
    ("NU", Region::Nunavut),
    ("ON", Region::Ontario),
    ("PE", Region::PrinceEdwardIsland),
    ("QC", Region::Quebec),
    ("SK", Region::Saskatchewan),
    ("YT", Region::Yukon),
];

impl Region {
    /// Every region, in code order
    pub const ALL: [Region; 13] = [
        Region::Alberta,
        Region::BritishColumbia,
        Region::Manitoba,
        Region::NewBrunswick,
        Region::NewfoundlandAndLabrador,
        Region::NorthwestTerritories,
        Region::NovaScotia,
        Region::Nunavut,
        Region::Ontario,
        Region::PrinceEdwardIsland,
        Region::Quebec,
        Region::Saskatchewan,
        Region::Yukon,
    ];

    /// Look up a region by its two-letter code, ignoring case.
    pub fn from_code(code: &str) -> Option<Region> {
        CODES
            .iter()
            .find(|(c, _)| c.eq_ignore_ascii_case(code))
            .map(|(_, region)| *region)
    }

    /// Uppercase two-letter code
    pub const fn code(self) -> &'static str {
        CODES[self as usize].0
    }

    /// English name
    pub const fn name(self) -> &'static str {
        match self {
            Region::Alberta => "Alberta",
            Region::BritishColumbia => "British Columbia",
            Region::Manitoba => "Manitoba",
            Region::NewBrunswick => "New Brunswick",
            Region::NewfoundlandAndLabrador => "Newfoundland and Labrador",
            Region::NorthwestTerritories => "Northwest Territories",
            Region::NovaScotia => "Nova Scotia",
            Region::Nunavut => "Nunavut",
            Region::Ontario => "Ontario",
            Region::PrinceEdwardIsland => "Prince Edward Island",
            Region::Quebec => "Quebec",
            Region::Saskatchewan => "Saskatchewan",
            Region::Yukon => "Yukon",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Region {
    type Err = RegionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Region::from_code(s).ok_or_else(|| {
            tracing::debug!(code = s, "unknown region code");
            RegionError::UnknownCode(s.to_owned())
        })
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Region {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Region {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        s.parse::<Region>().map_err(serde::de::Error::custom)
    }
}
