//! Money type for representing monetary values.
//!
//! Uses cents-based integer representation to avoid floating-point
//! precision issues. The storefront is single-currency (USD), so amounts
//! carry no currency tag and serialize as plain integers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// A monetary value in cents.
///
/// Arithmetic saturates at the `i64` bounds rather than panicking, so
/// state transitions built on `Money` stay total.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Money {
    cents: i64,
}

impl Money {
    /// Create a value from cents.
    pub const fn from_cents(cents: i64) -> Self {
        Self { cents }
    }

    /// Create a value from a decimal dollar amount, rounding to the
    /// nearest cent.
    ///
    /// ```
    /// use decibel_commerce::Money;
    /// assert_eq!(Money::from_dollars(49.99), Money::from_cents(4999));
    /// ```
    pub fn from_dollars(amount: f64) -> Self {
        Self::from_cents((amount * 100.0).round() as i64)
    }

    /// The zero amount.
    pub const fn zero() -> Self {
        Self { cents: 0 }
    }

    /// Amount in cents.
    pub const fn cents(&self) -> i64 {
        self.cents
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.cents == 0
    }

    /// Check if this is positive.
    pub fn is_positive(&self) -> bool {
        self.cents > 0
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.cents < 0
    }

    /// Add another amount, saturating at the numeric bounds.
    pub fn saturating_add(&self, other: Money) -> Money {
        Money::from_cents(self.cents.saturating_add(other.cents))
    }

    /// Multiply by a quantity, saturating at the numeric bounds.
    pub fn saturating_mul(&self, quantity: u32) -> Money {
        Money::from_cents(self.cents.saturating_mul(i64::from(quantity)))
    }

    /// Calculate a percentage of this amount, rounded to the nearest cent.
    ///
    /// ```
    /// use decibel_commerce::Money;
    /// let total = Money::from_cents(10_000);
    /// assert_eq!(total.percentage(20.0), Money::from_cents(2_000));
    /// ```
    pub fn percentage(&self, percent: f64) -> Money {
        Money::from_cents((self.cents as f64 * percent / 100.0).round() as i64)
    }

    /// Convert to a decimal dollar value.
    pub fn to_dollars(&self) -> f64 {
        self.cents as f64 / 100.0
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        self.saturating_add(other)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Money) {
        *self = self.saturating_add(other);
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), |acc, m| acc.saturating_add(m))
    }
}

impl fmt::Display for Money {
    /// Format as `$1,234.56` (negative amounts as `-$1,234.56`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.cents < 0 { "-" } else { "" };
        let abs = self.cents.unsigned_abs();
        let dollars = abs / 100;
        let rem = abs % 100;

        let digits = dollars.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(c);
        }

        write!(f, "{sign}${grouped}.{rem:02}")
    }
}
