//! Type-safe price representation using decimal arithmetic.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A price with currency information.
///
/// Catalog prices are whole units of the store currency (roubles), so the
/// amount usually has a scale of zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., roubles, not kopecks).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// A whole-rouble price, usable in constant tables.
    #[must_use]
    pub const fn rub(amount: u32) -> Self {
        Self::new(
            Decimal::from_parts(amount, 0, 0, false, 0),
            CurrencyCode::RUB,
        )
    }

    /// Zero in the given currency.
    #[must_use]
    pub const fn zero(currency_code: CurrencyCode) -> Self {
        Self::new(Decimal::ZERO, currency_code)
    }

    /// The price of `quantity` units.
    #[must_use]
    pub fn times(self, quantity: u32) -> Self {
        Self::new(self.amount * Decimal::from(quantity), self.currency_code)
    }

    /// Sum of two prices in the same currency.
    #[must_use]
    pub fn plus(self, other: Self) -> Self {
        debug_assert_eq!(
            self.currency_code, other.currency_code,
            "cannot add prices in different currencies"
        );
        Self::new(self.amount + other.amount, self.currency_code)
    }
}

impl fmt::Display for Price {
    /// Formats the way the storefront shows prices: `4 500 ₽`, `$45.00`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.currency_code {
            CurrencyCode::RUB => {
                let amount = self.amount.round_dp(2).normalize().to_string();
                let (whole, fraction) = amount
                    .split_once('.')
                    .map_or((amount.as_str(), None), |(w, f)| (w, Some(f)));
                write!(f, "{}", group_thousands(whole))?;
                if let Some(fraction) = fraction {
                    write!(f, ",{fraction}")?;
                }
                write!(f, " {}", self.currency_code.symbol())
            }
            CurrencyCode::USD | CurrencyCode::EUR => {
                write!(f, "{}{:.2}", self.currency_code.symbol(), self.amount)
            }
        }
    }
}

/// Insert a space between every group of three digits, keeping any sign.
fn group_thousands(whole: &str) -> String {
    let (sign, digits) = whole
        .strip_prefix('-')
        .map_or(("", whole), |rest| ("-", rest));

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }
    format!("{sign}{grouped}")
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    RUB,
    USD,
    EUR,
}

impl CurrencyCode {
    /// Display symbol for the currency.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::RUB => "₽",
            Self::USD => "$",
            Self::EUR => "€",
        }
    }
}
