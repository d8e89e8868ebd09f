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
//! │  For ticket pricing this matters twice over:                            │
//! │    raw tickets = unit cost × 300, then compared against tier            │
//! │    boundaries (100, 1000, 1500, ...) — a float that lands a hair        │
//! │    past a boundary picks the wrong rounding interval.                   │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    $5.32 = 532 cents → 532 × 3 = 1596 raw tickets, exactly.            │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use ticketforge_core::money::Money;
//!
//! // Create from cents (preferred)
//! let cost = Money::from_cents(532); // $5.32
//!
//! // DPL rendering: always exactly two decimals, no symbol
//! assert_eq!(cost.to_decimal_string(), "5.32");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents for USD).
///
/// ## Design Decisions
/// - **i64 (signed)**: the pricing formula is a total function and must
///   accept negative amounts without panicking
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for catalog persistence
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use ticketforge_core::money::Money;
    ///
    /// let cost = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(cost.cents(), 1099);
    /// ```
    ///
    /// ## Why Cents?
    /// Using the smallest unit eliminates all floating-point concerns.
    /// Catalog files, calculations, and DPL rendering all use cents.
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units (dollars and cents).
    ///
    /// ## Example
    /// ```rust
    /// use ticketforge_core::money::Money;
    ///
    /// let cost = Money::from_major_minor(10, 99); // $10.99
    /// assert_eq!(cost.cents(), 1099);
    /// ```
    ///
    /// ## Note
    /// For negative amounts, only the major unit should be negative.
    /// `from_major_minor(-5, 50)` = -$5.50, not -$4.50
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        // Handle sign: if major is negative, minor should subtract
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
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

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns the absolute value.
    #[inline]
    pub const fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Renders the amount with exactly two decimal digits and no currency
    /// symbol.
    ///
    /// This is the DPL wire rendering: the redemption counter expects
    /// `5.30`, never `5.3` or `$5.30`.
    ///
    /// ## Example
    /// ```rust
    /// use ticketforge_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(530).to_decimal_string(), "5.30");
    /// assert_eq!(Money::from_cents(5).to_decimal_string(), "0.05");
    /// assert_eq!(Money::from_cents(-50).to_decimal_string(), "-0.50");
    /// ```
    pub fn to_decimal_string(&self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        format!("{}{}.{:02}", sign, self.dollars().abs(), self.cents_part())
    }

    /// Divides the amount by an item count, rounding half-up to the nearest
    /// cent.
    ///
    /// Used to derive a unit cost from a case/total cost:
    /// `unit_cost = total_cost / items_per_unit`.
    ///
    /// ## Implementation
    /// Integer math in i128: `(2a + d) / 2d` is floor division of
    /// `a/d + 1/2`, which is exact round-half-up for non-negative amounts.
    ///
    /// ## Example
    /// ```rust
    /// use ticketforge_core::money::Money;
    ///
    /// let case = Money::from_cents(1000); // $10.00 case of 3
    /// assert_eq!(case.divide_rounded(3).cents(), 333); // $3.33 each
    ///
    /// let case = Money::from_cents(500); // $5.00 case of 3
    /// assert_eq!(case.divide_rounded(3).cents(), 167); // $1.67 each
    /// ```
    pub fn divide_rounded(&self, divisor: i64) -> Money {
        debug_assert!(divisor > 0, "divisor must be positive");
        let cents = (2 * self.0 as i128 + divisor as i128) / (2 * divisor as i128);
        Money::from_cents(cents as i64)
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use ticketforge_core::money::Money;
    ///
    /// let unit_cost = Money::from_cents(299); // $2.99
    /// let total = unit_cost.multiply_quantity(3);
    /// assert_eq!(total.cents(), 897); // $8.97
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for debugging and CLI output. DPL rendering goes through
/// [`Money::to_decimal_string`] instead (no `$` on the wire).
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by integer (for quantity calculations).
impl Mul<i32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i32) -> Self {
        Money(self.0 * qty as i64)
    }
}

/// Multiplication by i64.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.dollars(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_from_major_minor() {
        let money = Money::from_major_minor(10, 99);
        assert_eq!(money.cents(), 1099);

        let negative = Money::from_major_minor(-5, 50);
        assert_eq!(negative.cents(), -550);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "$10.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
    }

    #[test]
    fn test_to_decimal_string_always_two_places() {
        // The compatibility contract: 5.3 must render as 5.30
        assert_eq!(Money::from_cents(530).to_decimal_string(), "5.30");
        assert_eq!(Money::from_cents(500).to_decimal_string(), "5.00");
        assert_eq!(Money::from_cents(532).to_decimal_string(), "5.32");
        assert_eq!(Money::from_cents(5).to_decimal_string(), "0.05");
        assert_eq!(Money::from_cents(0).to_decimal_string(), "0.00");
    }

    #[test]
    fn test_to_decimal_string_negative() {
        assert_eq!(Money::from_cents(-550).to_decimal_string(), "-5.50");
        // Sign must survive even when the dollar part is zero
        assert_eq!(Money::from_cents(-50).to_decimal_string(), "-0.50");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        let result: Money = a * 3;
        assert_eq!(result.cents(), 3000);
    }

    #[test]
    fn test_divide_rounded() {
        // $10.00 / 3 = $3.333... → $3.33
        assert_eq!(Money::from_cents(1000).divide_rounded(3).cents(), 333);
        // $5.00 / 3 = $1.666... → $1.67
        assert_eq!(Money::from_cents(500).divide_rounded(3).cents(), 167);
        // Exact division stays exact
        assert_eq!(Money::from_cents(600).divide_rounded(3).cents(), 200);
        // Half rounds up: $0.01 / 2 = $0.005 → $0.01
        assert_eq!(Money::from_cents(1).divide_rounded(2).cents(), 1);
    }

    #[test]
    fn test_multiply_quantity() {
        let unit_cost = Money::from_cents(299);
        let total = unit_cost.multiply_quantity(3);
        assert_eq!(total.cents(), 897);
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());

        let positive = Money::from_cents(100);
        assert!(positive.is_positive());

        let negative = Money::from_cents(-100);
        assert!(negative.is_negative());
    }
}
