//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Rupees                                           │
//! │    Catalog prices carry no minor unit (₹1,200, never ₹1,200.50),       │
//! │    so the whole rupee IS the smallest unit and i64 arithmetic is        │
//! │    exact everywhere: line totals, cart totals, discount math.           │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use lensloft_core::money::Money;
//!
//! let price = Money::from_rupees(1200);
//!
//! // Arithmetic operations
//! let pair = price * 2;                         // ₹2,400
//! let total = price + Money::from_rupees(650);  // ₹1,850
//!
//! assert_eq!(total.to_string(), "₹1,850");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in whole rupees.
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative values for refunds and discounts
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from whole rupees.
    ///
    /// ## Example
    /// ```rust
    /// use lensloft_core::money::Money;
    ///
    /// let price = Money::from_rupees(1200);
    /// assert_eq!(price.rupees(), 1200);
    /// ```
    #[inline]
    pub const fn from_rupees(rupees: i64) -> Self {
        Money(rupees)
    }

    /// Returns the value in rupees.
    #[inline]
    pub const fn rupees(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }
}

// =============================================================================
// Discount Math
// =============================================================================

/// Calculates the "% OFF" badge value for a marked-down product.
///
/// Matches the storefront display exactly:
/// `round((original - sale) / original * 100)`.
///
/// Returns `None` when there is no real markdown (original not positive,
/// or original <= sale) so the badge is simply not rendered.
///
/// ## Example
/// ```rust
/// use lensloft_core::money::{discount_percent, Money};
///
/// let original = Money::from_rupees(1500);
/// let sale = Money::from_rupees(1200);
/// assert_eq!(discount_percent(original, sale), Some(20));
///
/// assert_eq!(discount_percent(sale, sale), None);
/// ```
pub fn discount_percent(original: Money, sale: Money) -> Option<u8> {
    if !original.is_positive() || original <= sale {
        return None;
    }

    let off = (original.rupees() - sale.rupees()) as f64 / original.rupees() as f64;
    Some((off * 100.0).round() as u8)
}

// =============================================================================
// Operator Implementations
// =============================================================================

impl Add for Money {
    type Output = Money;

    #[inline]
    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, rhs: Money) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Money;

    #[inline]
    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, rhs: Money) {
        self.0 -= rhs.0;
    }
}

impl Mul<i64> for Money {
    type Output = Money;

    #[inline]
    fn mul(self, rhs: i64) -> Money {
        Money(self.0 * rhs)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Display
// =============================================================================

impl fmt::Display for Money {
    /// Formats as `₹1,200` with thousands grouping.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}₹{}", sign, group_thousands(self.0.unsigned_abs()))
    }
}

/// Inserts `,` separators every three digits: 1200 -> "1,200".
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    grouped
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arithmetic() {
        let a = Money::from_rupees(1200);
        let b = Money::from_rupees(650);

        assert_eq!((a + b).rupees(), 1850);
        assert_eq!((a - b).rupees(), 550);
        assert_eq!((a * 3).rupees(), 3600);
    }

    #[test]
    fn test_sum() {
        let total: Money = [1200, 1800, 999]
            .into_iter()
            .map(Money::from_rupees)
            .sum();
        assert_eq!(total.rupees(), 3999);
    }

    #[test]
    fn test_display_grouping() {
        assert_eq!(Money::from_rupees(699).to_string(), "₹699");
        assert_eq!(Money::from_rupees(1200).to_string(), "₹1,200");
        assert_eq!(Money::from_rupees(1234567).to_string(), "₹1,234,567");
        assert_eq!(Money::from_rupees(0).to_string(), "₹0");
        assert_eq!(Money::from_rupees(-1500).to_string(), "-₹1,500");
    }

    #[test]
    fn test_discount_percent() {
        // 1500 -> 1200 is a 20% markdown
        assert_eq!(
            discount_percent(Money::from_rupees(1500), Money::from_rupees(1200)),
            Some(20)
        );

        // 2200 -> 1800 rounds 18.18% to 18%
        assert_eq!(
            discount_percent(Money::from_rupees(2200), Money::from_rupees(1800)),
            Some(18)
        );

        // No markdown, no badge
        assert_eq!(
            discount_percent(Money::from_rupees(1200), Money::from_rupees(1200)),
            None
        );
        assert_eq!(
            discount_percent(Money::from_rupees(1000), Money::from_rupees(1200)),
            None
        );
        assert_eq!(discount_percent(Money::zero(), Money::from_rupees(100)), None);
    }
}
