//! Money formatting.

use crate::currency::{Currency, CurrencyPosition};
use crate::error::{FormatError, FormatResult};
use dlm_options::Options;
use serde::{Deserialize, Serialize};

pub const OPTION_CURRENCY: &str = "dlm_currency";
pub const OPTION_CURRENCY_POSITION: &str = "dlm_currency_pos";
pub const OPTION_DECIMAL_SEPARATOR: &str = "dlm_decimal_separator";
pub const OPTION_THOUSAND_SEPARATOR: &str = "dlm_thousand_separator";

const MAX_DECIMALS: u32 = 8;

/// How amounts are written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MoneyFormat {
    pub currency_position: CurrencyPosition,
    pub decimal_separator: String,
    pub thousand_separator: String,
    pub decimals: u32,
}

impl Default for MoneyFormat {
    fn default() -> Self {
        Self {
            currency_position: CurrencyPosition::Left,
            decimal_separator: ".".to_string(),
            thousand_separator: ",".to_string(),
            decimals: 2,
        }
    }
}

impl MoneyFormat {
    /// Reads position and separators from host options.
    pub fn from_options(options: &dyn Options) -> FormatResult<Self> {
        let defaults = Self::default();
        Ok(Self {
            currency_position: options
                .get_option(OPTION_CURRENCY_POSITION)?
                .map(|v| CurrencyPosition::from_option_value(&v))
                .unwrap_or_default(),
            decimal_separator: options
                .get_option_or(OPTION_DECIMAL_SEPARATOR, &defaults.decimal_separator)?,
            thousand_separator: options
                .get_option_or(OPTION_THOUSAND_SEPARATOR, &defaults.thousand_separator)?,
            decimals: defaults.decimals,
        })
    }
}

/// Formats prices in the shop currency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceFormatter {
    currency: Currency,
    format: MoneyFormat,
}

impl PriceFormatter {
    pub fn new(currency: Currency, format: MoneyFormat) -> FormatResult<Self> {
        if format.decimals > MAX_DECIMALS {
            return Err(FormatError::Decimals(format.decimals));
        }
        Ok(Self { currency, format })
    }

    /// Builds a formatter from the shop's stored settings.
    pub fn from_options(options: &dyn Options) -> FormatResult<Self> {
        let currency = Currency::new(&options.get_option_or(OPTION_CURRENCY, "USD")?);
        Self::new(currency, MoneyFormat::from_options(options)?)
    }

    #[must_use]
    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    #[must_use]
    pub fn format(&self) -> &MoneyFormat {
        &self.format
    }

    /// Formats `price`, e.g. `$1,234.50` or `-1.234,50 €`.
    ///
    /// Negative amounts carry the sign in front of the whole string,
    /// including a leading symbol.
    #[must_use]
    pub fn money(&self, price: f64) -> String {
        let negative = price < 0.0;
        let amount = number_format(
            price.abs(),
            self.format.decimals,
            &self.format.decimal_separator,
            &self.format.thousand_separator,
        );
        let placed = self
            .format
            .currency_position
            .apply(self.currency.symbol(), &amount);
        if negative { format!("-{placed}") } else { placed }
    }
}

/// Formats a non-negative number with grouped thousands, rounding half away
/// from zero. Non-finite input is written as zero.
#[must_use]
pub fn number_format(value: f64, decimals: u32, decimal_separator: &str, thousand_separator: &str) -> String {
    let decimals = decimals.min(MAX_DECIMALS);
    let value = if value.is_finite() { value.abs() } else { 0.0 };
    let factor = 10u128.pow(decimals);
    let scaled = pre_round(value * factor as f64).round() as u128;

    let digits = (scaled / factor).to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + decimals as usize + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push_str(thousand_separator);
        }
        out.push(ch);
    }

    if decimals > 0 {
        out.push_str(decimal_separator);
        out.push_str(&format!("{:0width$}", scaled % factor, width = decimals as usize));
    }
    out
}

/// Rounds to 15 significant digits so that decimal ties such as
/// `1.005 * 100 = 100.49999999999999` are seen as `100.5`.
fn pre_round(value: f64) -> f64 {
    if value == 0.0 {
        return value;
    }
    format!("{value:.14e}").parse().unwrap_or(value)
}
