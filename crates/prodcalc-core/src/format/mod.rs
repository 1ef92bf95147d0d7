//! Display formatting.
//!
//! Precision, currency convention and layout are caller-supplied
//! [`DisplayOptions`]; nothing here feeds back into the computation.

mod report;

pub use report::{MetricRow, Report, ScenarioRow, NO_RESULT_MESSAGE};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Largest accepted `decimal_places`.
pub const MAX_DECIMAL_PLACES: u8 = 6;

/// Report layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// Aligned tables with headers.
    #[default]
    Detailed,
    /// One line per metric and per scenario.
    Compact,
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Layout::Detailed => f.write_str("detailed"),
            Layout::Compact => f.write_str("compact"),
        }
    }
}

impl FromStr for Layout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "detailed" => Ok(Layout::Detailed),
            "compact" => Ok(Layout::Compact),
            other => Err(format!("unknown layout: {other}")),
        }
    }
}

/// Where the currency symbol goes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolPosition {
    #[default]
    Prefix,
    Suffix,
}

/// Currency convention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyFormat {
    #[serde(default = "default_symbol")]
    pub symbol: String,
    #[serde(default)]
    pub position: SymbolPosition,
    #[serde(default = "default_thousands_separator")]
    pub thousands_separator: String,
    #[serde(default = "default_decimal_separator")]
    pub decimal_separator: String,
}

fn default_symbol() -> String {
    "$".into()
}
fn default_thousands_separator() -> String {
    ",".into()
}
fn default_decimal_separator() -> String {
    ".".into()
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self {
            symbol: default_symbol(),
            position: SymbolPosition::Prefix,
            thousands_separator: default_thousands_separator(),
            decimal_separator: default_decimal_separator(),
        }
    }
}

impl CurrencyFormat {
    /// Reject conventions that would make numbers ambiguous.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.decimal_separator.is_empty() {
            return Err(ValidationError::InvalidValue {
                field: "decimal_separator".into(),
                message: "must not be empty".into(),
            });
        }
        if self.thousands_separator == self.decimal_separator {
            return Err(ValidationError::InvalidValue {
                field: "thousands_separator".into(),
                message: "must differ from the decimal separator".into(),
            });
        }
        Ok(())
    }
}

/// Formatting options supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayOptions {
    pub decimal_places: u8,
    pub show_scenarios: bool,
    pub layout: Layout,
    pub currency: CurrencyFormat,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            decimal_places: 2,
            show_scenarios: true,
            layout: Layout::Detailed,
            currency: CurrencyFormat::default(),
        }
    }
}

/// Per-run overrides of the configured [`DisplayOptions`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisplayOverrides {
    pub decimal_places: Option<u8>,
    pub show_scenarios: Option<bool>,
    pub layout: Option<Layout>,
}

impl DisplayOptions {
    /// Apply `overrides` and validate the result.
    pub fn overridden(mut self, overrides: &DisplayOverrides) -> Result<Self, ValidationError> {
        if let Some(places) = overrides.decimal_places {
            self.decimal_places = places;
        }
        if let Some(show) = overrides.show_scenarios {
            self.show_scenarios = show;
        }
        if let Some(layout) = overrides.layout {
            self.layout = layout;
        }
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.decimal_places > MAX_DECIMAL_PLACES {
            return Err(ValidationError::OutOfRange {
                field: "decimal_places".into(),
                value: i64::from(self.decimal_places),
                min: 0,
                max: i64::from(MAX_DECIMAL_PLACES),
            });
        }
        self.currency.validate()
    }

    /// Plain number with the configured separators.
    pub fn number(&self, value: f64) -> String {
        format_number(
            value,
            self.decimal_places,
            &self.currency.thousands_separator,
            &self.currency.decimal_separator,
        )
    }

    pub fn percent(&self, value: f64) -> String {
        format_percent(value, self.decimal_places, &self.currency)
    }

    pub fn currency(&self, value: f64) -> String {
        format_currency(value, self.decimal_places, &self.currency)
    }
}

/// Round to `decimals` places and group the integer part by thousands.
///
/// Values that round to zero never carry a minus sign. Non-finite values
/// render as `"-"`.
pub fn format_number(
    value: f64,
    decimals: u8,
    thousands_separator: &str,
    decimal_separator: &str,
) -> String {
    if !value.is_finite() {
        return "-".into();
    }

    let (negative, digits) = rounded_digits(value, decimals);
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (digits.as_str(), None),
    };

    let mut out = String::with_capacity(digits.len() + 4);
    if negative {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part, thousands_separator));
    if let Some(frac) = frac_part {
        out.push_str(decimal_separator);
        out.push_str(frac);
    }
    out
}

pub fn format_percent(value: f64, decimals: u8, currency: &CurrencyFormat) -> String {
    let number = format_number(
        value,
        decimals,
        &currency.thousands_separator,
        &currency.decimal_separator,
    );
    format!("{number}%")
}

pub fn format_currency(value: f64, decimals: u8, currency: &CurrencyFormat) -> String {
    let number = format_number(
        value.abs(),
        decimals,
        &currency.thousands_separator,
        &currency.decimal_separator,
    );
    let (negative, _) = rounded_digits(value, decimals);
    let sign = if negative && value.is_finite() { "-" } else { "" };
    match currency.position {
        SymbolPosition::Prefix => format!("{sign}{}{number}", currency.symbol),
        SymbolPosition::Suffix => format!("{sign}{number} {}", currency.symbol),
    }
}

/// Absolute value rendered with `decimals` places, and whether a minus sign
/// is due (false when the rounded value is zero).
fn rounded_digits(value: f64, decimals: u8) -> (bool, String) {
    let digits = format!("{:.*}", usize::from(decimals), value.abs());
    let is_zero = digits.bytes().all(|b| b == b'0' || b == b'.');
    (value.is_sign_negative() && !is_zero, digits)
}

fn group_thousands(int_part: &str, separator: &str) -> String {
    if separator.is_empty() || int_part.len() <= 3 {
        return int_part.to_string();
    }
    let mut out = String::with_capacity(int_part.len() + int_part.len() / 3 * separator.len());
    let lead = int_part.len() % 3;
    if lead > 0 {
        out.push_str(&int_part[..lead]);
    }
    for (i, chunk) in int_part.as_bytes()[lead..].chunks(3).enumerate() {
        if lead > 0 || i > 0 {
            out.push_str(separator);
        }
        // chunks of an ASCII digit string are valid UTF-8
        out.push_str(std::str::from_utf8(chunk).unwrap_or_default());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_with_grouping_and_precision() {
        assert_eq!(format_number(1234567.891, 2, ",", "."), "1,234,567.89");
        assert_eq!(format_number(999.0, 2, ",", "."), "999.00");
        assert_eq!(format_number(1000.0, 0, ",", "."), "1,000");
        assert_eq!(format_number(123456.0, 0, ",", "."), "123,456");
        assert_eq!(format_number(0.8333333, 4, ",", "."), "0.8333");
    }

    #[test]
    fn negative_numbers_keep_sign() {
        assert_eq!(format_number(-5.0, 1, ",", "."), "-5.0");
        assert_eq!(format_number(-1234.5, 2, ",", "."), "-1,234.50");
    }

    #[test]
    fn no_negative_zero() {
        assert_eq!(format_number(-0.0, 2, ",", "."), "0.00");
        assert_eq!(format_number(-0.001, 2, ",", "."), "0.00");
        assert_eq!(format_currency(-0.004, 2, &CurrencyFormat::default()), "$0.00");
    }

    #[test]
    fn european_convention() {
        let eu = CurrencyFormat {
            symbol: "€".into(),
            position: SymbolPosition::Suffix,
            thousands_separator: ".".into(),
            decimal_separator: ",".into(),
        };
        assert_eq!(format_currency(1234.5, 2, &eu), "1.234,50 €");
        assert_eq!(format_percent(87.14, 1, &eu), "87,1%");
    }

    #[test]
    fn currency_prefix_with_negative() {
        let usd = CurrencyFormat::default();
        assert_eq!(format_currency(2500.0, 2, &usd), "$2,500.00");
        assert_eq!(format_currency(-42.5, 2, &usd), "-$42.50");
    }

    #[test]
    fn empty_thousands_separator_disables_grouping() {
        assert_eq!(format_number(1234567.0, 0, "", "."), "1234567");
    }

    #[test]
    fn non_finite_is_a_dash() {
        assert_eq!(format_number(f64::NAN, 2, ",", "."), "-");
    }

    #[test]
    fn display_options_validation() {
        let mut options = DisplayOptions::default();
        assert!(options.validate().is_ok());

        options.decimal_places = 7;
        assert_eq!(
            options.validate(),
            Err(ValidationError::OutOfRange {
                field: "decimal_places".into(),
                value: 7,
                min: 0,
                max: 6,
            })
        );

        options.decimal_places = 2;
        options.currency.thousands_separator = ".".into();
        assert!(options.validate().is_err());
    }

    #[test]
    fn overrides_replace_only_given_options() {
        let options = DisplayOptions::default()
            .overridden(&DisplayOverrides {
                layout: Some(Layout::Compact),
                ..DisplayOverrides::default()
            })
            .unwrap();
        assert_eq!(options.layout, Layout::Compact);
        assert_eq!(options.decimal_places, 2);
        assert!(options.show_scenarios);

        let too_precise = DisplayOverrides {
            decimal_places: Some(12),
            ..DisplayOverrides::default()
        };
        assert!(DisplayOptions::default().overridden(&too_precise).is_err());
    }

    #[test]
    fn layout_from_str() {
        assert_eq!("Compact".parse::<Layout>().unwrap(), Layout::Compact);
        assert_eq!("detailed".parse::<Layout>().unwrap(), Layout::Detailed);
        assert!("wide".parse::<Layout>().is_err());
    }
}
