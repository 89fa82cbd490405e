use tracing::debug;
use winnow::ascii::float;
use winnow::{ModalResult, Parser};

use crate::types::Amount;

/// Checks if a character survives the cleanup of a textual amount
fn is_amount_char(c: char) -> bool {
    c.is_ascii_digit() || c == '.' || c == '-'
}

/// Removes everything except digits, decimal points and minus signs
///
/// This drops grouping separators, currency symbols and whitespace, e.g.
/// `"$ -1,234.50"` becomes `"-1234.50"`.
pub fn strip_non_numeric(input: &str) -> String {
    input.chars().filter(|&c| is_amount_char(c)).collect()
}

/// Parse the longest leading decimal number, leaving the rest of the input
fn parse_leading_float(input: &mut &str) -> ModalResult<f64> {
    float.parse_next(input)
}

/// Parse a textual amount into a finite number
///
/// Only the leading number of the cleaned text counts: `"1.2.3"` parses as `1.2`
/// and `"12-3"` as `12`.
///
/// # Returns
/// * `Option<f64>` - The parsed amount, or `None` if no finite number leads the text
pub fn parse_amount_text(text: &str) -> Option<f64> {
    let cleaned = strip_non_numeric(text);
    let mut input = cleaned.as_str();
    parse_leading_float(&mut input)
        .ok()
        .filter(|value| value.is_finite())
}

/// Normalize an amount to a finite number
///
/// Anything that is not a finite number (unparseable text, NaN, infinities)
/// becomes exactly `0`.
pub fn normalize_amount(amount: &Amount) -> f64 {
    let normalized = match amount {
        Amount::Number(value) => Some(*value).filter(|value| value.is_finite()),
        Amount::Text(text) => parse_amount_text(text),
    };

    normalized.unwrap_or_else(|| {
        debug!(?amount, "amount is not a finite number, formatting as zero");
        0.0
    })
}
