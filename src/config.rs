//! Loading options and batch items from TOML
//!
//! Keys use the same camelCase names as the serialized options, e.g.
//!
//! ```toml
//! [[values]]
//! origin = "140"
//! options = { currencyFormat = "KHR", symbol = "៛" }
//! ```

use serde::Deserialize;

use crate::error::Result;
use crate::types::{BatchItem, FormatOptions};

#[derive(Debug, Deserialize)]
struct BatchDocument {
    #[serde(default)]
    values: Vec<BatchItem>,
}

impl FormatOptions {
    /// Read options from a TOML document; missing keys keep their defaults
    ///
    /// # Examples
    /// ```
    /// use currency_format::{CurrencyCode, FormatOptions};
    ///
    /// let options = FormatOptions::from_toml_str("precision = 3\ncurrencyCode = \"KHR\"").unwrap();
    /// assert_eq!(options.precision, 3);
    /// assert_eq!(options.currency_code, CurrencyCode::Khr);
    /// assert_eq!(options.thousands_separator, ",");
    /// ```
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        Ok(toml::from_str(toml_str)?)
    }
}

pub(crate) fn parse_batch_items(toml_str: &str) -> Result<Vec<BatchItem>> {
    let document: BatchDocument = toml::from_str(toml_str)?;
    Ok(document.values)
}
