//! Format numbers as currency with options for precision, thousands separator and currency symbol.

pub mod batch;
pub mod config;
pub mod defaults;
pub mod error;
pub mod formatter;
pub mod parser;
pub mod types;

// Main API
pub use batch::CurrencyFormat;
pub use defaults::{default_options, get_default_options};
pub use error::ConfigError;
pub use formatter::{format, format_value};
pub use types::*;
