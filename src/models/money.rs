//! Monetary amounts
//!
//! Amounts are whole cents in an `i64`, so summaries stay exact no matter
//! how many rows the ledger accumulates. The ledger file stores plain
//! decimal literals ("125.00"), and serde goes through that textual form
//! rather than the raw cent count.

use std::fmt;
use std::ops::{Add, AddAssign, Sub};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::TallyError;

/// A currency amount, in cents
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Money(i64);

impl Money {
    /// Build an amount from a cent count
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    pub const fn zero() -> Self {
        Self(0)
    }

    /// The raw cent count
    pub const fn cents(&self) -> i64 {
        self.0
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Parse a decimal literal like "125", "49.99" or "10.5"
    ///
    /// A leading sign and a leading "$" are tolerated since people type
    /// them; fractional digits beyond the second are dropped. Anything
    /// else is an [`TallyError::InvalidAmount`].
    pub fn parse(input: &str) -> Result<Self, TallyError> {
        let bad = || TallyError::InvalidAmount(input.to_string());

        let text = input.trim();
        let (sign, text) = match text.strip_prefix('-') {
            Some(rest) => (-1, rest),
            None => (1, text),
        };
        let text = text.strip_prefix('$').unwrap_or(text);
        if text.is_empty() {
            return Err(bad());
        }

        let cents = match text.split_once('.') {
            None => text.parse::<i64>().map_err(|_| bad())? * 100,
            Some((whole, frac)) => {
                let whole = whole.parse::<i64>().map_err(|_| bad())?;
                if !frac.chars().all(|c| c.is_ascii_digit()) {
                    return Err(bad());
                }
                let frac = match frac.len() {
                    0 => 0,
                    1 => frac.parse::<i64>().map_err(|_| bad())? * 10,
                    _ => frac[..2].parse::<i64>().map_err(|_| bad())?,
                };
                whole * 100 + frac
            }
        };

        Ok(Self(sign * cents))
    }

    /// The decimal literal written to the ledger file, always two places
    pub fn to_decimal_string(&self) -> String {
        self.render("")
    }

    /// Terminal rendering with the configured currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        self.render(symbol)
    }

    fn render(&self, symbol: &str) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        let cents = self.0.abs();
        format!("{}{}{}.{:02}", sign, symbol, cents / 100, cents % 100)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render("$"))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_decimal_string())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Money::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_literals() {
        assert_eq!(Money::parse("125").unwrap().cents(), 12500);
        assert_eq!(Money::parse("49.99").unwrap().cents(), 4999);
        assert_eq!(Money::parse("10.5").unwrap().cents(), 1050);
        assert_eq!(Money::parse("0.05").unwrap().cents(), 5);
    }

    #[test]
    fn test_parse_tolerates_sign_and_symbol() {
        assert_eq!(Money::parse("$10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("-10.50").unwrap().cents(), -1050);
        assert_eq!(Money::parse("-$10.50").unwrap().cents(), -1050);
        assert_eq!(Money::parse(" 10 ").unwrap().cents(), 1000);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for input in ["abc", "", "1,000", "10.5x", "10.x", "$"] {
            assert!(
                matches!(Money::parse(input), Err(TallyError::InvalidAmount(_))),
                "{input:?} should not parse"
            );
        }
    }

    #[test]
    fn test_decimal_string_always_two_places() {
        assert_eq!(Money::from_cents(12500).to_decimal_string(), "125.00");
        assert_eq!(Money::from_cents(1005).to_decimal_string(), "10.05");
        assert_eq!(Money::from_cents(5).to_decimal_string(), "0.05");
        assert_eq!(Money::from_cents(-6000).to_decimal_string(), "-60.00");
    }

    #[test]
    fn test_display_uses_dollar_symbol() {
        assert_eq!(Money::from_cents(1050).to_string(), "$10.50");
        assert_eq!(Money::from_cents(-1050).to_string(), "-$10.50");
        assert_eq!(Money::from_cents(0).to_string(), "$0.00");
    }

    #[test]
    fn test_arithmetic_stays_in_cents() {
        let mut total = Money::zero();
        total += Money::from_cents(1000);
        total += Money::from_cents(550);
        assert_eq!(total.cents(), 1550);
        assert_eq!((total - Money::from_cents(2000)).cents(), -450);
    }

    #[test]
    fn test_serde_round_trips_the_decimal_literal() {
        let json = serde_json::to_string(&Money::from_cents(1050)).unwrap();
        assert_eq!(json, "\"10.50\"");
        let back: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(back.cents(), 1050);

        // Hand-written literals without two decimal places load too
        let short: Money = serde_json::from_str("\"125\"").unwrap();
        assert_eq!(short.cents(), 12500);
    }
}
