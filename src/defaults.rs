//! Default formatting options
//!
//! This module loads the library-wide defaults from the embedded TOML document
//! and hands them out as a read-only snapshot.

use std::sync::OnceLock;

use serde::Deserialize;
use tracing::warn;

use crate::error::Result;
use crate::types::{CurrencyCode, CurrencyFormatOptions, FormatOptions};

const BUILTIN_PRECISION: u32 = 2;
const BUILTIN_THOUSANDS_SEPARATOR: &str = ",";
const BUILTIN_SYMBOL: &str = "";

/// Raw `[format]` table; every key is required so a partial file is rejected
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct FormatTable {
    precision: u32,
    thousands_separator: String,
    symbol: String,
    currency_code: CurrencyCode,
}

/// Raw `[currency]` table
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct CurrencyTable {
    trim: bool,
    currency_format: CurrencyCode,
    thousands_separator: String,
    symbol: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct DefaultsDocument {
    format: FormatTable,
    currency: CurrencyTable,
}

/// Holds the default options for single values and batch items
#[derive(Debug, Clone, PartialEq)]
struct Defaults {
    format: FormatOptions,
    currency: CurrencyFormatOptions,
}

// Global snapshot, parsed on first use
static DEFAULTS: OnceLock<Defaults> = OnceLock::new();

impl Defaults {
    fn new() -> Self {
        match Self::load_embedded() {
            Ok(defaults) => defaults,
            Err(e) => {
                warn!(error = %e, "failed to load embedded default options, using built-in values");
                Self::builtin()
            }
        }
    }

    fn load_embedded() -> Result<Self> {
        Self::parse(include_str!("defaults.toml"))
    }

    fn parse(toml_str: &str) -> Result<Self> {
        let document: DefaultsDocument = toml::from_str(toml_str)?;

        let format = FormatOptions {
            precision: document.format.precision,
            thousands_separator: document.format.thousands_separator,
            symbol: document.format.symbol,
            currency_code: document.format.currency_code,
        };
        let currency = CurrencyFormatOptions {
            trim: document.currency.trim,
            currency_code: document.currency.currency_format,
            thousands_separator: document.currency.thousands_separator,
            symbol: document.currency.symbol,
        };

        Ok(Self { format, currency })
    }

    /// Values used when the embedded document cannot be read
    fn builtin() -> Self {
        Self {
            format: FormatOptions {
                precision: BUILTIN_PRECISION,
                thousands_separator: BUILTIN_THOUSANDS_SEPARATOR.to_string(),
                symbol: BUILTIN_SYMBOL.to_string(),
                currency_code: CurrencyCode::Usd,
            },
            currency: CurrencyFormatOptions {
                trim: false,
                currency_code: CurrencyCode::Usd,
                thousands_separator: BUILTIN_THOUSANDS_SEPARATOR.to_string(),
                symbol: BUILTIN_SYMBOL.to_string(),
            },
        }
    }

    fn get() -> &'static Self {
        DEFAULTS.get_or_init(Self::new)
    }
}

/// The default per-item batch options
///
/// `{ trim: false, currencyFormat: "USD", thousandsSeparator: ",", symbol: "" }`
pub fn default_options() -> &'static CurrencyFormatOptions {
    &Defaults::get().currency
}

/// Returns an owned copy of the default per-item batch options
///
/// # Examples
/// ```
/// use currency_format::{get_default_options, CurrencyCode};
///
/// let defaults = get_default_options();
/// assert!(!defaults.trim);
/// assert_eq!(defaults.currency_code, CurrencyCode::Usd);
/// assert_eq!(defaults.thousands_separator, ",");
/// assert_eq!(defaults.symbol, "");
/// ```
pub fn get_default_options() -> CurrencyFormatOptions {
    default_options().clone()
}

/// The defaults behind `FormatOptions::default()`
pub(crate) fn default_format_options() -> &'static FormatOptions {
    &Defaults::get().format
}
