//! Batch formatting
//!
//! `CurrencyFormat` stores a list of amounts with per-item options and formats
//! all of them in one call.

use crate::config;
use crate::defaults;
use crate::error::Result;
use crate::formatter::format;
use crate::types::{
    Amount, BatchItem, CurrencyFormatOptions, FormatOptions, FormatRequest, FormattedResult,
};

/// Decimal places used for every batch item
pub const BATCH_PRECISION: u32 = 2;

impl BatchItem {
    pub fn new(origin: impl Into<Amount>, options: CurrencyFormatOptions) -> Self {
        Self {
            origin: origin.into(),
            options,
        }
    }

    /// Build the request this item is formatted with
    pub fn to_request(&self) -> FormatRequest {
        FormatRequest {
            value: self.origin.clone(),
            options: FormatOptions {
                precision: BATCH_PRECISION,
                thousands_separator: self.options.thousands_separator.clone(),
                symbol: self.options.symbol.clone(),
                currency_code: self.options.currency_code.clone(),
            },
        }
    }
}

/// Formats an ordered list of amounts, each with its own options
///
/// The list is fixed at construction; `currency` only reads it, so a shared
/// `CurrencyFormat` can be formatted from several threads at once.
///
/// # Examples
/// ```
/// use currency_format::{BatchItem, CurrencyFormat, CurrencyFormatOptions};
///
/// let options = CurrencyFormatOptions {
///     symbol: "$".to_string(),
///     ..CurrencyFormatOptions::default()
/// };
/// let formatter = CurrencyFormat::new(vec![BatchItem::new("140", options)]);
/// assert_eq!(formatter.currency()[0].formatted, "$140.00");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CurrencyFormat {
    values: Vec<BatchItem>,
}

impl CurrencyFormat {
    pub fn new(values: Vec<BatchItem>) -> Self {
        Self { values }
    }

    /// Load the items from a TOML document with a `[[values]]` array of tables
    ///
    /// Each entry has an `origin` (number or string) and an optional `options`
    /// table. A document without `values` yields an empty batch.
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        config::parse_batch_items(toml_str).map(Self::new)
    }

    /// The stored items, in input order
    pub fn items(&self) -> &[BatchItem] {
        &self.values
    }

    /// Format every stored item
    ///
    /// # Returns
    /// * `Vec<FormattedResult>` - One result per item, in input order, with the
    ///   item's origin and options copied alongside the formatted string
    pub fn currency(&self) -> Vec<FormattedResult> {
        self.values
            .iter()
            .map(|item| FormattedResult {
                origin: item.origin.clone(),
                options: item.options.clone(),
                formatted: format(&item.to_request()),
            })
            .collect()
    }

    /// The default per-item options, see [`defaults::get_default_options`]
    pub fn get_default_options() -> CurrencyFormatOptions {
        defaults::get_default_options()
    }
}

impl FromIterator<BatchItem> for CurrencyFormat {
    fn from_iter<I: IntoIterator<Item = BatchItem>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
