//! Amount parsing module
//!
//! This module turns raw amounts, numeric or textual, into the finite number the formatter works on.
//! The main entry point is the `normalize_amount` function.

mod amount;

pub use amount::{normalize_amount, parse_amount_text, strip_non_numeric};
