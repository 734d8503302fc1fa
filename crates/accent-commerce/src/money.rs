//! Money type for representing monetary values.
//!
//! Uses an integer count of minor units (two decimal places) so subtotals
//! are exact sums. The store trades in a single currency; the symbol is a
//! display concern and lives in [`StoreConfig`](crate::StoreConfig).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul, Sub};

/// Minor units per major unit.
pub const MINOR_PER_MAJOR: i64 = 100;

/// A monetary amount in minor units (e.g., cents or paise).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money value from minor units.
    pub const fn from_minor(amount_minor: i64) -> Self {
        Self(amount_minor)
    }

    /// Create a Money value from whole major units.
    pub const fn from_major(amount: i64) -> Self {
        Self(amount.saturating_mul(MINOR_PER_MAJOR))
    }

    /// Create a Money value from a decimal amount, rounding to the nearest
    /// minor unit.
    ///
    /// ```
    /// use accent_commerce::Money;
    /// let price = Money::from_decimal(49.99);
    /// assert_eq!(price.amount_minor(), 4999);
    /// ```
    pub fn from_decimal(amount: f64) -> Self {
        Self((amount * MINOR_PER_MAJOR as f64).round() as i64)
    }

    /// The zero amount.
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Amount in minor units.
    pub const fn amount_minor(&self) -> i64 {
        self.0
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if this is positive.
    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Format without symbol, always two decimal places (e.g., "49.99").
    pub fn display_amount(&self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let per = MINOR_PER_MAJOR as u64;
        format!("{}{}.{:02}", sign, abs / per, abs % per)
    }

    /// Format with a currency symbol prefix (e.g., "Rs 49.99").
    pub fn display_with(&self, symbol: &str) -> String {
        format!("{}{}", symbol, self.display_amount())
    }

    /// Add, saturating at the numeric bounds.
    pub fn saturating_add(self, other: Money) -> Money {
        Money(self.0.saturating_add(other.0))
    }

    /// Subtract, saturating at the numeric bounds.
    pub fn saturating_sub(self, other: Money) -> Money {
        Money(self.0.saturating_sub(other.0))
    }

    /// Multiply by a quantity, saturating at the numeric bounds.
    pub fn saturating_mul(self, factor: i64) -> Money {
        Money(self.0.saturating_mul(factor))
    }

    /// Calculate a whole-number percentage of this amount, rounded half up
    /// to the nearest minor unit.
    pub fn percentage(&self, percent: u32) -> Money {
        let scaled = self.0 as i128 * percent as i128;
        let rounded = if scaled >= 0 {
            (scaled + 50) / 100
        } else {
            (scaled - 50) / 100
        };
        Money(rounded.clamp(i64::MIN as i128, i64::MAX as i128) as i64)
    }

    /// Clamp negative amounts to zero.
    pub fn non_negative(self) -> Money {
        Money(self.0.max(0))
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        self.saturating_add(other)
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, other: Money) -> Money {
        self.saturating_sub(other)
    }
}

impl Mul<i64> for Money {
    type Output = Money;

    fn mul(self, factor: i64) -> Money {
        self.saturating_mul(factor)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Money {
        iter.copied().sum()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_amount())
    }
}
