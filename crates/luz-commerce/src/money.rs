//! Money type for representing catalog prices.
//!
//! Prices are whole base-currency units (pesos have no minor unit in
//! practice), so amounts are plain unsigned integers and rendering always
//! uses zero decimal places.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    /// Colombian peso, rendered the es-CO way (`$48.000`).
    #[default]
    COP,
    /// US dollar, rendered the en-US way (`$48,000`).
    USD,
}

impl Currency {
    /// Get the currency code (e.g., "COP").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::COP => "COP",
            Currency::USD => "USD",
        }
    }

    /// Get the currency symbol.
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::COP | Currency::USD => "$",
        }
    }

    /// Thousands separator used by the currency's reference locale.
    pub fn group_separator(&self) -> char {
        match self {
            Currency::COP => '.',
            Currency::USD => ',',
        }
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_uppercase().as_str() {
            "COP" => Some(Currency::COP),
            "USD" => Some(Currency::USD),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in whole currency units.
    pub amount: u64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value.
    pub fn new(amount: u64, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Apply a percentage discount, rounding half up.
    ///
    /// ```
    /// use luz_commerce::money::{Currency, Money};
    /// let price = Money::new(48000, Currency::COP);
    /// assert_eq!(price.discounted(10).amount, 43200);
    /// ```
    pub fn discounted(&self, percent: u8) -> Money {
        let percent = u64::from(percent.min(100));
        let scaled = u128::from(self.amount) * u128::from(100 - percent);
        let amount = ((scaled + 50) / 100) as u64;
        Money::new(amount, self.currency)
    }

    /// Format as a display string (e.g., "$48.000").
    pub fn display(&self) -> String {
        format!("{}{}", self.currency.symbol(), self.display_amount())
    }

    /// Format the grouped amount without symbol (e.g., "48.000").
    pub fn display_amount(&self) -> String {
        group_digits(self.amount, self.currency.group_separator())
    }
}

fn group_digits(amount: u64, separator: char) -> String {
    let digits = amount.to_string();
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_display_cop() {
        assert_eq!(Money::new(48000, Currency::COP).display(), "$48.000");
        assert_eq!(Money::new(1250000, Currency::COP).display(), "$1.250.000");
        assert_eq!(Money::new(950, Currency::COP).display(), "$950");
        assert_eq!(Money::new(0, Currency::COP).display(), "$0");
    }

    #[test]
    fn test_money_display_usd() {
        assert_eq!(Money::new(48000, Currency::USD).display(), "$48,000");
        assert_eq!(Money::new(100, Currency::USD).display_amount(), "100");
    }

    #[test]
    fn test_money_discounted() {
        let m = Money::new(48000, Currency::COP);
        assert_eq!(m.discounted(10).amount, 43200);
        assert_eq!(m.discounted(0).amount, 48000);
        assert_eq!(m.discounted(100).amount, 0);

        // 45000 * 0.5 = 22500, 75000 * 0.85 = 63750
        assert_eq!(Money::new(45000, Currency::COP).discounted(50).amount, 22500);
        assert_eq!(Money::new(75000, Currency::COP).discounted(15).amount, 63750);
    }

    #[test]
    fn test_money_discounted_rounds_half_up() {
        // 5 * 0.5 = 2.5 -> 3
        assert_eq!(Money::new(5, Currency::COP).discounted(50).amount, 3);
        // 7 * 0.67 = 4.69 -> 5
        assert_eq!(Money::new(7, Currency::COP).discounted(33).amount, 5);
    }

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("COP"), Some(Currency::COP));
        assert_eq!(Currency::from_code(" usd "), Some(Currency::USD));
        assert_eq!(Currency::from_code("EUR"), None);
    }
}
