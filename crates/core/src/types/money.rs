//! Currency parsing and formatting using decimal arithmetic.
//!
//! All monetary amounts in Feira are [`Decimal`] values in the currency's
//! standard unit (reais, not centavos). User-facing price fields are
//! currency-masked text, so parsing goes through [`parse_cents_string`],
//! which interprets the digits of the raw input with the last two digits as
//! centavos. This is a deliberate, reproducible algorithm: `"5"` is five
//! centavos (0.05), not five reais.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum CurrencyCode {
    #[default]
    Brl,
}

impl CurrencyCode {
    /// The ISO 4217 code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Brl => "BRL",
        }
    }

    /// The display symbol.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Brl => "R$",
        }
    }
}

/// Parse a currency-masked input string into a decimal amount.
///
/// Every non-digit character is discarded and the remaining digits are read
/// as an integer number of centavos:
///
/// - `"1234"` and `"R$ 12,34"` both parse to `12.34`
/// - `"5"` parses to `0.05`
/// - `""` (or input with no digits at all) parses to `0`
#[must_use]
pub fn parse_cents_string(raw: &str) -> Decimal {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return Decimal::ZERO;
    }
    digits
        .parse::<i128>()
        .ok()
        .and_then(|cents| Decimal::try_from_i128_with_scale(cents, 2).ok())
        .unwrap_or_default()
}

/// Format an amount as Brazilian currency, e.g. `R$ 1.234,56`.
#[must_use]
pub fn format_brl(value: Decimal) -> String {
    let rounded = value.round_dp(2);
    let text = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("R$ {sign}{},{frac_part}", group_thousands(int_part))
}

/// Insert `.` thousands separators into a run of digits.
fn group_thousands(digits: &str) -> String {
    let len = digits.chars().count();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}

/// Percentage discount of `paid` relative to `original`.
///
/// Positive means `paid` is cheaper than `original`. A zero `original` yields
/// `0` rather than a division error.
#[must_use]
pub fn discount_percent(original: Decimal, paid: Decimal) -> Decimal {
    if original.is_zero() {
        return Decimal::ZERO;
    }
    (original - paid) / original * Decimal::ONE_HUNDRED
}
