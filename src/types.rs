//! Type definitions for currency formatting
//!
//! This module defines the values passed into the formatter and the batch processor:
//! amounts, currency codes, formatting options, and batch items with their results.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The Khmer riel sign (U+17DB), written after the amount for `KHR`
pub const KHMER_RIEL_SIGN: &str = "\u{17DB}";

/// A raw amount to format, either numeric or a textual representation of one
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Amount {
    /// A numeric amount, used as-is
    Number(f64),
    /// Text such as `"1,234.56"` or `"$10"`, reduced to digits, `.` and `-` before parsing
    Text(String),
}

impl From<f64> for Amount {
    fn from(value: f64) -> Self {
        Amount::Number(value)
    }
}

impl From<i64> for Amount {
    fn from(value: i64) -> Self {
        Amount::Number(value as f64)
    }
}

impl From<i32> for Amount {
    fn from(value: i32) -> Self {
        Amount::Number(f64::from(value))
    }
}

impl From<&str> for Amount {
    fn from(value: &str) -> Self {
        Amount::Text(value.to_string())
    }
}

impl From<String> for Amount {
    fn from(value: String) -> Self {
        Amount::Text(value)
    }
}

/// Currency codes with dedicated formatting rules
///
/// Codes without special handling are kept verbatim in `Other` and format with
/// the default rules.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CurrencyCode {
    /// US dollar
    #[default]
    Usd,
    /// Cambodian riel, rounded to the nearest 100 before precision is applied
    Khr,
    /// Any other code, matched exactly as given
    Other(String),
}

/// Where the currency symbol goes relative to the number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolPlacement {
    /// Symbol before the number, including before a minus sign
    Prefix,
    /// Symbol after the number
    Suffix,
}

impl CurrencyCode {
    /// The code as written in options, e.g. `"USD"`
    pub fn as_str(&self) -> &str {
        match self {
            CurrencyCode::Usd => "USD",
            CurrencyCode::Khr => "KHR",
            CurrencyCode::Other(code) => code,
        }
    }

    /// The smallest practical denomination amounts are rounded to before precision rounding
    ///
    /// `None` means the amount passes through unchanged.
    pub fn rounding_increment(&self) -> Option<f64> {
        match self {
            CurrencyCode::Khr => Some(100.0),
            CurrencyCode::Usd | CurrencyCode::Other(_) => None,
        }
    }

    /// Determines the symbol placement for this currency and the given symbol
    ///
    /// Only the exact riel sign paired with `KHR` is suffixed.
    pub fn symbol_placement(&self, symbol: &str) -> SymbolPlacement {
        match self {
            CurrencyCode::Khr if symbol == KHMER_RIEL_SIGN => SymbolPlacement::Suffix,
            _ => SymbolPlacement::Prefix,
        }
    }
}

impl From<&str> for CurrencyCode {
    fn from(code: &str) -> Self {
        match code {
            "USD" => CurrencyCode::Usd,
            "KHR" => CurrencyCode::Khr,
            other => CurrencyCode::Other(other.to_string()),
        }
    }
}

impl From<String> for CurrencyCode {
    fn from(code: String) -> Self {
        match code.as_str() {
            "USD" => CurrencyCode::Usd,
            "KHR" => CurrencyCode::Khr,
            _ => CurrencyCode::Other(code),
        }
    }
}

impl From<CurrencyCode> for String {
    fn from(code: CurrencyCode) -> Self {
        match code {
            CurrencyCode::Other(code) => code,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for CurrencyCode {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(CurrencyCode::from(s))
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options controlling a single `format` call
///
/// Every field falls back to its default independently, see [`crate::defaults`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormatOptions {
    /// Number of digits after the decimal point
    pub precision: u32,
    /// Inserted between groups of three integer digits; empty disables grouping
    pub thousands_separator: String,
    /// Currency symbol, prefixed unless the currency places it after the number
    pub symbol: String,
    /// Currency code selecting the rounding and symbol rules
    #[serde(alias = "format", alias = "currencyFormat")]
    pub currency_code: CurrencyCode,
}

impl Default for FormatOptions {
    fn default() -> Self {
        crate::defaults::default_format_options().clone()
    }
}

impl FormatOptions {
    /// Returns the options with a different precision
    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = precision;
        self
    }

    /// Returns the options with a different thousands separator
    pub fn with_thousands_separator(mut self, separator: impl Into<String>) -> Self {
        self.thousands_separator = separator.into();
        self
    }

    /// Returns the options with a different currency symbol
    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = symbol.into();
        self
    }

    /// Returns the options with a different currency code
    pub fn with_currency_code(mut self, code: impl Into<CurrencyCode>) -> Self {
        self.currency_code = code.into();
        self
    }
}

/// A value paired with the options to format it with
#[derive(Debug, Clone, PartialEq)]
pub struct FormatRequest {
    pub value: Amount,
    pub options: FormatOptions,
}

impl FormatRequest {
    pub fn new(value: impl Into<Amount>, options: FormatOptions) -> Self {
        Self {
            value: value.into(),
            options,
        }
    }
}

/// Per-item options of a batch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CurrencyFormatOptions {
    /// Reserved; carried through to results but never read by the formatter
    pub trim: bool,
    #[serde(rename = "currencyFormat", alias = "currencyCode")]
    pub currency_code: CurrencyCode,
    pub thousands_separator: String,
    pub symbol: String,
}

impl Default for CurrencyFormatOptions {
    fn default() -> Self {
        crate::defaults::default_options().clone()
    }
}

/// An amount to format as part of a batch, with its own options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchItem {
    pub origin: Amount,
    #[serde(default)]
    pub options: CurrencyFormatOptions,
}

/// A batch item together with its formatted string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattedResult {
    pub origin: Amount,
    pub options: CurrencyFormatOptions,
    pub formatted: String,
}
