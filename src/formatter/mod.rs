//! Currency formatting module
//!
//! This module renders normalized amounts as currency strings: currency rounding,
//! precision rounding, thousands grouping and symbol placement.
//! The main entry point is the `format` function.

mod grouping;
mod rounding;

pub(crate) use grouping::group_thousands;
pub use rounding::MAX_PRECISION;
pub(crate) use rounding::{apply_currency_rounding, render_fixed, round_to_precision};

use tracing::debug;

use crate::parser::normalize_amount;
use crate::types::{Amount, CurrencyCode, FormatOptions, FormatRequest, SymbolPlacement};

/// Format an amount as currency
///
/// Never fails: text that does not start with a number formats like `0`.
///
/// # Arguments
/// * `request` - The value to format and the options to format it with
///
/// # Returns
/// * `String` - The formatted currency string
///
/// # Examples
/// ```
/// use currency_format::{format, FormatOptions, FormatRequest};
///
/// let options = FormatOptions::default().with_symbol("$");
/// let result = format(&FormatRequest::new(1234.56, options));
/// assert_eq!(result, "$1,234.56");
/// ```
pub fn format(request: &FormatRequest) -> String {
    let options = &request.options;

    let amount = normalize_amount(&request.value);
    let amount = apply_currency_rounding(amount, &options.currency_code);

    let precision = if options.precision > MAX_PRECISION {
        debug!(
            precision = options.precision,
            max = MAX_PRECISION,
            "precision too large, clamping"
        );
        MAX_PRECISION
    } else {
        options.precision
    };

    let rounded = round_to_precision(amount, precision);
    let number = group_thousands(
        &render_fixed(rounded, precision),
        &options.thousands_separator,
    );

    place_symbol(number, &options.symbol, &options.currency_code)
}

/// Format a value with the given options
///
/// Shorthand for building a [`FormatRequest`] and calling [`format`].
///
/// # Examples
/// ```
/// use currency_format::{format_value, FormatOptions, KHMER_RIEL_SIGN};
///
/// let options = FormatOptions::default()
///     .with_currency_code("KHR")
///     .with_symbol(KHMER_RIEL_SIGN);
/// assert_eq!(format_value(1234, &options), "1,200.00៛");
/// ```
pub fn format_value(value: impl Into<Amount>, options: &FormatOptions) -> String {
    format(&FormatRequest::new(value, options.clone()))
}

fn place_symbol(number: String, symbol: &str, currency_code: &CurrencyCode) -> String {
    match currency_code.symbol_placement(symbol) {
        SymbolPlacement::Prefix => format!("{symbol}{number}"),
        SymbolPlacement::Suffix => format!("{number}{symbol}"),
    }
}
