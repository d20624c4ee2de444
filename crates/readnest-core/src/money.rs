//! # Money Module
//!
//! Rupee amounts stored as integer paise.
//!
//! Prices never touch floating point: a `f64` rendition of ₹599.00 is fine
//! until totals start accumulating rounding error across a cart. Storing
//! paise in an `i64` keeps every sum exact, and the display layer decides
//! where the decimal point goes.
//!
//! ## Usage
//! ```rust
//! use readnest_core::money::Money;
//!
//! let price = Money::from_rupees(599, 0);
//! let cart_total: Money = [price, price].into_iter().sum();
//! assert_eq!(cart_total.paise(), 119_800);
//! ```
//!
//! The surface is deliberately small: books are priced, cart lines carry a
//! frozen copy of that price, and totals are sums of lines. Nothing in the
//! store discounts, refunds, or splits an amount.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

// =============================================================================
// Money Type
// =============================================================================

/// An amount of money in paise (the smallest INR unit).
///
/// ## Where Money Flows
/// ```text
/// Book.price_paise ──► CartItem.unit_price_paise ──► Cart.total()
///                                                         │
///                                                         ▼
///                                                  Receipt.total_paise
/// ```
/// Raw `i64` paise only appear at the struct-field and serde boundary;
/// everything that computes with an amount goes through this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Wraps a raw paise count.
    #[inline]
    pub const fn from_paise(paise: i64) -> Self {
        Money(paise)
    }

    /// Builds an amount from whole rupees plus a paise remainder.
    ///
    /// ```rust
    /// use readnest_core::money::Money;
    ///
    /// assert_eq!(Money::from_rupees(599, 0).paise(), 59_900);
    /// assert_eq!(Money::from_rupees(10, 99).paise(), 1_099);
    /// ```
    #[inline]
    pub const fn from_rupees(rupees: i64, paise: i64) -> Self {
        Money(rupees * 100 + paise)
    }

    /// The raw paise count.
    #[inline]
    pub const fn paise(&self) -> i64 {
        self.0
    }

    /// The zero amount, also what an empty cart totals to.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Whether the amount is exactly zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Renders as `₹<rupees>.<paise>`, e.g. `₹599.00`.
///
/// This is the core's plain formatting for logs and errors; the storefront
/// renders amounts through its own configured symbol instead.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let magnitude = self.0.abs();
        write!(f, "{}₹{}.{:02}", sign, magnitude / 100, magnitude % 100)
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Summing an empty iterator yields [`Money::zero`], which is what makes
/// `Cart::total` on an empty cart come out right with no special case.
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
    fn test_rupee_and_paise_constructors_agree() {
        assert_eq!(Money::from_rupees(599, 0), Money::from_paise(59_900));
        assert_eq!(Money::from_rupees(10, 99), Money::from_paise(1_099));
        assert_eq!(Money::from_rupees(0, 0), Money::zero());
    }

    #[test]
    fn test_display_places_the_decimal() {
        assert_eq!(Money::from_rupees(599, 0).to_string(), "₹599.00");
        assert_eq!(Money::from_paise(1_099).to_string(), "₹10.99");
        assert_eq!(Money::from_paise(5).to_string(), "₹0.05");
        assert_eq!(Money::zero().to_string(), "₹0.00");
        assert_eq!(Money::from_paise(-550).to_string(), "-₹5.50");
    }

    #[test]
    fn test_addition_is_exact() {
        // The classic float trap: 0.10 + 0.20. In paise it is just 10 + 20.
        let total = Money::from_paise(10) + Money::from_paise(20);
        assert_eq!(total.paise(), 30);
    }

    #[test]
    fn test_sum_matches_a_cart_of_prices() {
        let shelf = [
            Money::from_rupees(599, 0),
            Money::from_rupees(349, 0),
            Money::from_rupees(49, 50),
        ];
        let total: Money = shelf.into_iter().sum();
        assert_eq!(total, Money::from_paise(99_750));
    }

    #[test]
    fn test_empty_sum_is_zero() {
        let total: Money = std::iter::empty().sum();
        assert!(total.is_zero());
    }
}
