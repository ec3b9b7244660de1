//! Currency codes, symbols and symbol placement.

use serde::{Deserialize, Serialize};

/// Where the currency symbol goes relative to the amount.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurrencyPosition {
    #[default]
    Left,
    Right,
    LeftSpace,
    RightSpace,
}

impl CurrencyPosition {
    /// Reads the stored option value. Unknown values mean `left`.
    #[must_use]
    pub fn from_option_value(value: &str) -> Self {
        match value.trim() {
            "right" => Self::Right,
            "left_space" => Self::LeftSpace,
            "right_space" => Self::RightSpace,
            _ => Self::Left,
        }
    }

    /// Places `symbol` around an already formatted `amount`. The space
    /// variants use a non-breaking space.
    #[must_use]
    pub fn apply(&self, symbol: &str, amount: &str) -> String {
        match self {
            Self::Left => format!("{symbol}{amount}"),
            Self::Right => format!("{amount}{symbol}"),
            Self::LeftSpace => format!("{symbol}\u{a0}{amount}"),
            Self::RightSpace => format!("{amount}\u{a0}{symbol}"),
        }
    }
}

const SYMBOLS: &[(&str, &str)] = &[
    ("AUD", "$"),
    ("BRL", "R$"),
    ("CAD", "$"),
    ("CHF", "CHF"),
    ("CNY", "¥"),
    ("CZK", "Kč"),
    ("DKK", "kr."),
    ("EUR", "€"),
    ("GBP", "£"),
    ("HKD", "$"),
    ("HUF", "Ft"),
    ("ILS", "₪"),
    ("INR", "₹"),
    ("JPY", "¥"),
    ("KRW", "₩"),
    ("MXN", "$"),
    ("NOK", "kr"),
    ("NZD", "$"),
    ("PLN", "zł"),
    ("RON", "lei"),
    ("RUB", "₽"),
    ("SEK", "kr"),
    ("SGD", "$"),
    ("TRY", "₺"),
    ("USD", "$"),
    ("ZAR", "R"),
];

/// A shop currency identified by its ISO 4217 code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    code: String,
}

impl Currency {
    /// The code is upper-cased; unknown codes are kept and used as their
    /// own symbol.
    #[must_use]
    pub fn new(code: &str) -> Self {
        Self {
            code: code.trim().to_ascii_uppercase(),
        }
    }

    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    #[must_use]
    pub fn symbol(&self) -> &str {
        match SYMBOLS.binary_search_by(|(code, _)| (*code).cmp(self.code.as_str())) {
            Ok(i) => SYMBOLS[i].1,
            Err(_) => &self.code,
        }
    }

    /// Codes with a known symbol, sorted.
    pub fn known_codes() -> impl Iterator<Item = &'static str> {
        SYMBOLS.iter().map(|(code, _)| *code)
    }
}

impl Default for Currency {
    fn default() -> Self {
        Self::new("USD")
    }
}
