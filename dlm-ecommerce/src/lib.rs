//! Currencies and price formatting for Download Monitor.

mod currency;
mod error;
mod format;

pub use currency::{Currency, CurrencyPosition};
pub use error::{FormatError, FormatResult};
pub use format::{
    MoneyFormat, OPTION_CURRENCY, OPTION_CURRENCY_POSITION, OPTION_DECIMAL_SEPARATOR,
    OPTION_THOUSAND_SEPARATOR, PriceFormatter, number_format,
};
