//! Money type for representing prices and cart totals.
//!
//! Amounts are integers in the smallest unit of the currency. Dong has no
//! minor unit, so a VND amount is the price as shown on the shelf.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    VND,
    USD,
}

impl Currency {
    /// Get the currency code (e.g., "VND").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::VND => "VND",
            Currency::USD => "USD",
        }
    }

    /// Get the currency symbol.
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::VND => "\u{20ab}",
            Currency::USD => "$",
        }
    }

    /// Get the number of decimal places for this currency.
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::VND => 0,
            Currency::USD => 2,
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
    /// Amount in the smallest currency unit.
    pub amount: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from minor units.
    pub fn new(amount: i64, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Shorthand for a dong amount.
    pub fn vnd(amount: i64) -> Self {
        Self::new(amount, Currency::VND)
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount == 0
    }

    /// Try to add another Money value.
    ///
    /// Returns `None` on currency mismatch or overflow.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        self.amount
            .checked_add(other.amount)
            .map(|amount| Money::new(amount, self.currency))
    }

    /// Try to multiply by a quantity, returning `None` on overflow.
    pub fn try_multiply(&self, factor: i64) -> Option<Money> {
        self.amount
            .checked_mul(factor)
            .map(|amount| Money::new(amount, self.currency))
    }

    /// Format the amount without symbol, grouping thousands
    /// (e.g., "15.000" for dong, "1,234.50" for dollars).
    pub fn display_amount(&self) -> String {
        let places = self.currency.decimal_places();
        let divisor = 10_i64.pow(places);
        let whole = (self.amount / divisor).unsigned_abs();
        let frac = (self.amount % divisor).unsigned_abs();

        let (group_sep, decimal_sep) = match self.currency {
            Currency::VND => ('.', ','),
            Currency::USD => (',', '.'),
        };

        let digits = whole.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(group_sep);
            }
            grouped.push(c);
        }

        let sign = if self.amount < 0 { "-" } else { "" };
        if places == 0 {
            format!("{sign}{grouped}")
        } else {
            format!(
                "{sign}{grouped}{decimal_sep}{frac:0width$}",
                width = places as usize
            )
        }
    }

    /// Format as a display string (e.g., "15.000 ₫", "$49.99").
    pub fn display(&self) -> String {
        match self.currency {
            Currency::VND => format!("{} {}", self.display_amount(), self.currency.symbol()),
            Currency::USD => format!("{}{}", self.currency.symbol(), self.display_amount()),
        }
    }
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
    fn test_money_display_vnd() {
        assert_eq!(Money::vnd(15000).display(), "15.000 \u{20ab}");
        assert_eq!(Money::vnd(500).display(), "500 \u{20ab}");
        assert_eq!(Money::vnd(1_234_567).display(), "1.234.567 \u{20ab}");
    }

    #[test]
    fn test_money_display_usd() {
        assert_eq!(Money::new(4999, Currency::USD).display(), "$49.99");
        assert_eq!(Money::new(123456, Currency::USD).display(), "$1,234.56");
        assert_eq!(Money::new(5, Currency::USD).display(), "$0.05");
    }

    #[test]
    fn test_money_try_add() {
        let a = Money::vnd(1000);
        let b = Money::vnd(500);
        assert_eq!(a.try_add(&b), Some(Money::vnd(1500)));
        assert_eq!(a.try_add(&Money::new(1, Currency::USD)), None);
    }

    #[test]
    fn test_money_overflow() {
        assert_eq!(Money::vnd(i64::MAX).try_multiply(2), None);
        assert_eq!(Money::vnd(i64::MAX).try_add(&Money::vnd(1)), None);
    }
}
