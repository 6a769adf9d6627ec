//! Money type for rupee amounts.
//!
//! Uses a paise-based integer representation to avoid floating-point
//! precision issues in pricing math. The marketplace trades in a single
//! currency, so unlike a multi-currency ledger there is no currency tag;
//! the type stays an ordered integer newtype.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Sub};

/// A rupee amount stored as paise.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct Money {
    /// Amount in paise (1/100 rupee).
    pub paise: i64,
}

impl Money {
    /// Create a Money value from paise.
    pub fn from_paise(paise: i64) -> Self {
        Self { paise }
    }

    /// Create a Money value from whole rupees.
    ///
    /// ```
    /// use moto_commerce::money::Money;
    /// let price = Money::from_rupees(275_000);
    /// assert_eq!(price.paise, 27_500_000);
    /// ```
    pub fn from_rupees(rupees: i64) -> Self {
        Self {
            paise: rupees.saturating_mul(100),
        }
    }

    /// The zero amount.
    pub fn zero() -> Self {
        Self { paise: 0 }
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.paise == 0
    }

    /// Check if this is positive.
    pub fn is_positive(&self) -> bool {
        self.paise > 0
    }

    /// Convert to a decimal rupee value.
    pub fn rupees(&self) -> f64 {
        self.paise as f64 / 100.0
    }

    /// Add another amount.
    pub fn add(&self, other: &Money) -> Money {
        Money::from_paise(self.paise.saturating_add(other.paise))
    }

    /// Subtract another amount.
    pub fn subtract(&self, other: &Money) -> Money {
        Money::from_paise(self.paise.saturating_sub(other.paise))
    }

    /// Multiply by a scalar (e.g., a quantity).
    pub fn multiply(&self, factor: i64) -> Money {
        Money::from_paise(self.paise.saturating_mul(factor))
    }

    /// Scale by basis points (1/100 of a percent).
    ///
    /// Integer math, truncating toward zero; exact to the paise for
    /// whole-rupee amounts at whole-percent rates.
    pub fn scale_bp(&self, basis_points: i64) -> Money {
        Money::from_paise(self.paise.saturating_mul(basis_points) / 10_000)
    }

    /// Sum an iterator of amounts.
    pub fn sum<'a>(iter: impl Iterator<Item = &'a Money>) -> Money {
        iter.fold(Money::zero(), |acc, m| Money::add(&acc, m))
    }

    /// Format with the rupee sign and Indian digit grouping
    /// (e.g., "₹2,75,000"). Paise are shown only when non-zero.
    pub fn display(&self) -> String {
        let abs = self.paise.unsigned_abs();
        let rupees = abs / 100;
        let fraction = abs % 100;

        let mut out = String::new();
        if self.paise < 0 {
            out.push('-');
        }
        out.push('\u{20b9}');
        out.push_str(&group_indian(rupees));
        if fraction != 0 {
            out.push_str(&format!(".{:02}", fraction));
        }
        out
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money::add(&self, &other)
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, other: Money) -> Money {
        Money::subtract(&self, &other)
    }
}

impl Mul<i64> for Money {
    type Output = Money;

    fn mul(self, factor: i64) -> Money {
        self.multiply(factor)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// Indian digit grouping: the last three digits form one group, every
/// group before that has two (1,00,00,000 for one crore).
fn group_indian(value: u64) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut i = head.len();
    while i > 2 {
        groups.push(&head[i - 2..i]);
        i -= 2;
    }
    groups.push(&head[..i]);
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}
