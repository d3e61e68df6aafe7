//! # Money
//!
//! Exact cart arithmetic on integer cents.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  float:  0.1 + 0.2            = 0.30000000000000004                     │
//! │  cents:  10  + 20             = 30                                      │
//! │                                                                         │
//! │  Prices enter and are stored as 1999, and only become "$19.99" at       │
//! │  display time.                                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Plain operators saturate at the `i64` bounds and never panic. Stores
//! that must reject an unrepresentable amount use the `checked_*` forms.
//!
//! ```rust
//! use shopfront_core::money::Money;
//!
//! let phone = Money::from_cents(59_900);
//! assert_eq!(phone.multiply_quantity(2).to_string(), "$1198.00");
//! assert_eq!(Money::from_cents(i64::MAX).checked_add(phone), None);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// An amount in cents. Serializes as the bare integer.
///
/// Signed so sums and differences never need a separate type; catalog
/// prices are kept non-negative by validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Line total for `qty` units at this unit price.
    ///
    /// ```rust
    /// use shopfront_core::money::Money;
    ///
    /// let mouse = Money::from_cents(2500);
    /// assert_eq!(mouse.multiply_quantity(2), Money::from_cents(5000));
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0.saturating_mul(qty))
    }

    /// `None` when the line total does not fit in `i64` cents.
    #[inline]
    pub fn checked_multiply_quantity(&self, qty: i64) -> Option<Self> {
        self.0.checked_mul(qty).map(Money)
    }

    /// `None` when the sum does not fit in `i64` cents.
    #[inline]
    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Money)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows money as `$12.34`; localized formatting belongs to the UI.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let abs = self.0.unsigned_abs();
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}${}.{:02}", sign, abs / 100, abs % 100)
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        self.multiply_quantity(qty)
    }
}

/// Lets cart totals be written as `lines.map(|l| l.line_total()).sum()`.
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(99_900).to_string(), "$999.00");
        assert_eq!(Money::from_cents(1_900).to_string(), "$19.00");
        assert_eq!(Money::from_cents(7).to_string(), "$0.07");
        assert_eq!(Money::from_cents(-1_250).to_string(), "-$12.50");
        assert_eq!(Money::zero().to_string(), "$0.00");
    }

    #[test]
    fn test_operators() {
        let laptop = Money::from_cents(99_900);
        let book = Money::from_cents(1_900);

        assert_eq!(laptop + book, Money::from_cents(101_800));
        assert_eq!(book * 3, book.multiply_quantity(3));

        let mut running = Money::default();
        running += laptop;
        running += book;
        assert_eq!(running.cents(), 101_800);
    }

    #[test]
    fn test_serializes_as_bare_cents() {
        assert_eq!(serde_json::to_string(&Money::from_cents(2500)).unwrap(), "2500");
        let parsed: Money = serde_json::from_str("1999").unwrap();
        assert_eq!(parsed.cents(), 1999);
    }

    #[test]
    fn test_sum() {
        let total: Money = [2500, 1999, 1]
            .into_iter()
            .map(Money::from_cents)
            .sum();
        assert_eq!(total.cents(), 4500);

        let empty: Money = std::iter::empty().sum();
        assert!(empty.is_zero());
    }

    #[test]
    fn test_checked_arithmetic() {
        let big = Money::from_cents(i64::MAX / 2 + 1);

        assert_eq!(big.checked_multiply_quantity(2), None);
        assert_eq!(big.checked_add(big), None);
        assert_eq!(
            Money::from_cents(2500).checked_multiply_quantity(2),
            Some(Money::from_cents(5000))
        );
        assert_eq!(
            Money::from_cents(1).checked_add(Money::from_cents(2)),
            Some(Money::from_cents(3))
        );
    }

    #[test]
    fn test_operators_saturate_instead_of_panicking() {
        let big = Money::from_cents(i64::MAX / 2 + 1);

        assert_eq!(big.multiply_quantity(2).cents(), i64::MAX);
        assert_eq!((big + big).cents(), i64::MAX);
        assert_eq!((Money::from_cents(i64::MIN) * 2).cents(), i64::MIN);

        let total: Money = [big, big, big].into_iter().sum();
        assert_eq!(total.cents(), i64::MAX);
    }
}
