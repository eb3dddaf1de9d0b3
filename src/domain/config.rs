// ============================================================================
// Format Configuration
// Rendering options for money amounts
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Controls how a [`Money`](crate::numeric::Money) amount is rendered.
///
/// The default matches `Money`'s `Display`: apostrophe thousands separator,
/// cents omitted when they are zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FormatConfig {
    /// Character inserted every three digits of the whole part.
    /// None disables grouping.
    pub thousands_separator: Option<char>,

    /// Render `.00` instead of dropping a zero cents suffix
    pub always_show_cents: bool,
}

impl FormatConfig {
    /// Apostrophe grouping, cents only when present: `1'234.56`, `1'234`
    pub const fn standard() -> Self {
        Self {
            thousands_separator: Some('\''),
            always_show_cents: false,
        }
    }

    /// No grouping, cents always shown: `1234.00`
    pub const fn plain() -> Self {
        Self {
            thousands_separator: None,
            always_show_cents: true,
        }
    }

    /// Builder method: Set the thousands separator
    pub fn with_separator(mut self, separator: char) -> Self {
        self.thousands_separator = Some(separator);
        self
    }

    /// Builder method: Disable thousands grouping
    pub fn without_separator(mut self) -> Self {
        self.thousands_separator = None;
        self
    }

    /// Builder method: Always render the cents suffix
    pub fn with_cents(mut self) -> Self {
        self.always_show_cents = true;
        self
    }

    /// Validate configuration consistency.
    ///
    /// A separator that the parser treats as meaningful would change the value
    /// when the rendered string is parsed back.
    pub fn validate(&self) -> Result<(), String> {
        match self.thousands_separator {
            Some(c) if c.is_ascii_digit() => {
                Err(format!("thousands separator '{}' cannot be a digit", c))
            },
            Some('.') => Err("thousands separator cannot be the decimal point".to_string()),
            Some('-') => Err("thousands separator cannot be the minus sign".to_string()),
            _ => Ok(()),
        }
    }
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self::standard()
    }
}
