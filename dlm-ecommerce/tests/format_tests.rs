use dlm_ecommerce::{
    Currency, CurrencyPosition, FormatError, MoneyFormat, PriceFormatter, number_format,
};
use dlm_options::MemoryOptions;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn formatter(code: &str, position: CurrencyPosition) -> PriceFormatter {
    PriceFormatter::new(
        Currency::new(code),
        MoneyFormat {
            currency_position: position,
            ..Default::default()
        },
    )
    .unwrap()
}

// ── number_format ────────────────────────────────────────────────

#[test]
fn groups_thousands() {
    assert_eq!(number_format(1234567.891, 2, ".", ","), "1,234,567.89");
    assert_eq!(number_format(999.0, 2, ".", ","), "999.00");
    assert_eq!(number_format(1000.0, 0, ".", ","), "1,000");
    assert_eq!(number_format(0.0, 2, ".", ","), "0.00");
}

#[test]
fn rounds_half_away_from_zero() {
    assert_eq!(number_format(2.5, 0, ".", ","), "3");
    assert_eq!(number_format(0.125, 2, ".", ","), "0.13");
    assert_eq!(number_format(9.999, 2, ".", ","), "10.00");
}

#[test]
fn rounds_inexact_decimal_ties_up() {
    assert_eq!(number_format(1.005, 2, ".", ","), "1.01");
    assert_eq!(number_format(0.285, 2, ".", ","), "0.29");
    assert_eq!(number_format(1.255, 2, ".", ","), "1.26");
    assert_eq!(number_format(10.075, 2, ".", ","), "10.08");
    assert_eq!(number_format(1.004, 2, ".", ","), "1.00");
}

#[test]
fn money_rounds_inexact_ties() {
    assert_eq!(formatter("USD", CurrencyPosition::Left).money(-1.005), "-$1.01");
}

#[test]
fn custom_separators() {
    assert_eq!(number_format(1234.5, 2, ",", "."), "1.234,50");
    assert_eq!(number_format(1234.5, 2, ",", ""), "1234,50");
    assert_eq!(number_format(12345678.0, 2, ".", "\u{a0}"), "12\u{a0}345\u{a0}678.00");
}

#[test]
fn non_finite_is_zero() {
    assert_eq!(number_format(f64::NAN, 2, ".", ","), "0.00");
    assert_eq!(number_format(f64::INFINITY, 2, ".", ","), "0.00");
}

// ── Currency ─────────────────────────────────────────────────────

#[test]
fn currency_symbols() {
    assert_eq!(Currency::new("usd").symbol(), "$");
    assert_eq!(Currency::new("EUR").symbol(), "€");
    assert_eq!(Currency::new("GBP").symbol(), "£");
    assert_eq!(Currency::new("XYZ").symbol(), "XYZ");
    assert_eq!(Currency::default().code(), "USD");
}

#[test]
fn known_codes_are_sorted() {
    let codes: Vec<_> = Currency::known_codes().collect();
    let mut sorted = codes.clone();
    sorted.sort_unstable();
    assert_eq!(codes, sorted);
    assert!(codes.contains(&"JPY"));
}

#[test]
fn position_from_option_value() {
    assert_eq!(CurrencyPosition::from_option_value("right"), CurrencyPosition::Right);
    assert_eq!(CurrencyPosition::from_option_value("left_space"), CurrencyPosition::LeftSpace);
    assert_eq!(CurrencyPosition::from_option_value("right_space"), CurrencyPosition::RightSpace);
    assert_eq!(CurrencyPosition::from_option_value("centre"), CurrencyPosition::Left);
}

#[test]
fn position_serde_names() {
    let json = serde_json::to_string(&CurrencyPosition::RightSpace).unwrap();
    assert_eq!(json, r#""right_space""#);
}

// ── money ────────────────────────────────────────────────────────

#[test]
fn money_in_every_position() {
    assert_eq!(formatter("USD", CurrencyPosition::Left).money(1234.5), "$1,234.50");
    assert_eq!(formatter("USD", CurrencyPosition::Right).money(1234.5), "1,234.50$");
    assert_eq!(
        formatter("EUR", CurrencyPosition::LeftSpace).money(9.99),
        "€\u{a0}9.99"
    );
    assert_eq!(
        formatter("EUR", CurrencyPosition::RightSpace).money(9.99),
        "9.99\u{a0}€"
    );
}

#[test]
fn negative_sign_leads() {
    assert_eq!(formatter("USD", CurrencyPosition::Left).money(-5.0), "-$5.00");
    assert_eq!(formatter("EUR", CurrencyPosition::RightSpace).money(-1500.0), "-1,500.00\u{a0}€");
}

#[test]
fn formatter_from_options() {
    let options = MemoryOptions::with_values([
        ("dlm_currency", "EUR"),
        ("dlm_currency_pos", "right_space"),
        ("dlm_decimal_separator", ","),
        ("dlm_thousand_separator", "."),
    ]);
    let formatter = PriceFormatter::from_options(&options).unwrap();
    assert_eq!(formatter.currency().code(), "EUR");
    assert_eq!(formatter.money(1234.5), "1.234,50\u{a0}€");
}

#[test]
fn formatter_defaults_from_empty_options() {
    let formatter = PriceFormatter::from_options(&MemoryOptions::new()).unwrap();
    assert_eq!(formatter.format(), &MoneyFormat::default());
    assert_eq!(formatter.money(10.0), "$10.00");
}

#[test]
fn rejects_excessive_decimals() {
    let err = PriceFormatter::new(
        Currency::default(),
        MoneyFormat {
            decimals: 30,
            ..Default::default()
        },
    )
    .unwrap_err();
    assert!(matches!(err, FormatError::Decimals(30)));
}

proptest! {
    /// Stripping the separators from an integer amount gives back its digits.
    #[test]
    fn grouping_preserves_digits(n in 0u64..1_000_000_000_000) {
        let formatted = number_format(n as f64, 0, ".", ",");
        prop_assert_eq!(formatted.replace(',', ""), n.to_string());
        for group in formatted.split(',').skip(1) {
            prop_assert_eq!(group.len(), 3);
        }
    }

    /// The sign never depends on the position of the symbol.
    #[test]
    fn negative_is_prefixed(cents in 1u32..10_000_000) {
        let price = -(cents as f64) / 100.0;
        let formatted = formatter("USD", CurrencyPosition::Right).money(price);
        prop_assert!(formatted.starts_with('-'));
        prop_assert!(formatted.ends_with('$'));
    }
}
