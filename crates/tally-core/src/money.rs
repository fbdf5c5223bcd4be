//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Summing tier prices as floats:                                         │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  Comparing two partitions that cost "the same" can then pick either    │
//! │  one depending on summation order.                                     │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    Every tier price is parsed exactly into cents once, at load time.   │
//! │    Partition costs are exact sums, so the minimum is well defined.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tally_core::money::Money;
//!
//! let single = Money::from_cents(125); // $1.25
//! let bulk = Money::parse_decimal("3").unwrap(); // $3.00
//!
//! assert!(bulk < single * 3);
//! assert_eq!((single + bulk).to_string(), "$4.25");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};

use crate::error::ValidationError;

/// Number of fractional digits carried by a price.
pub const MINOR_DIGITS: u32 = 2;

const MINOR_PER_MAJOR: i64 = 100;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents).
///
/// ## Where Money is Used
/// ```text
/// TierEntry.price ──► TierCatalog ──► partition cost ──► PricedLine.cost
///                                                            │
///                                  Receipt.total ◄── Σ ──────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::money::Money;
    ///
    /// let price = Money::from_cents(425); // $4.25
    /// assert_eq!(price.cents(), 425);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Parses a decimal amount such as `"1.25"`, `"3"` or `"0.5"` into cents.
    ///
    /// The text is parsed digit by digit; no floating point value is ever
    /// involved, so `"0.1"` is exactly 10 cents.
    ///
    /// ## Rules
    /// - optional leading `-`
    /// - at least one digit before or after the decimal point
    /// - at most two fractional digits
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::money::Money;
    ///
    /// assert_eq!(Money::parse_decimal("1.25").unwrap().cents(), 125);
    /// assert_eq!(Money::parse_decimal("4.5").unwrap().cents(), 450);
    /// assert_eq!(Money::parse_decimal("30").unwrap().cents(), 3000);
    /// assert!(Money::parse_decimal("1.005").is_err());
    /// assert!(Money::parse_decimal("abc").is_err());
    /// ```
    pub fn parse_decimal(text: &str) -> Result<Self, ValidationError> {
        let invalid = |reason: &str| ValidationError::InvalidFormat {
            field: "price".to_string(),
            reason: format!("'{}' {}", text, reason),
        };

        let trimmed = text.trim();
        let (negative, unsigned) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };

        let (major_text, minor_text) = match unsigned.split_once('.') {
            Some((major, minor)) => (major, minor),
            None => (unsigned, ""),
        };

        if major_text.is_empty() && minor_text.is_empty() {
            return Err(invalid("is not a number"));
        }
        if !major_text.chars().chain(minor_text.chars()).all(|c| c.is_ascii_digit()) {
            return Err(invalid("is not a number"));
        }
        if minor_text.len() > MINOR_DIGITS as usize {
            return Err(invalid("has more than two decimal places"));
        }

        let major: i64 = if major_text.is_empty() {
            0
        } else {
            major_text
                .parse()
                .map_err(|_| invalid("is out of range"))?
        };

        // "5" after the point is fifty cents, not five
        let mut minor: i64 = 0;
        for position in 0..MINOR_DIGITS as usize {
            let digit = minor_text
                .as_bytes()
                .get(position)
                .map(|b| i64::from(b - b'0'))
                .unwrap_or(0);
            minor = minor * 10 + digit;
        }

        let cents = major
            .checked_mul(MINOR_PER_MAJOR)
            .and_then(|c| c.checked_add(minor))
            .ok_or_else(|| invalid("is out of range"))?;

        Ok(Money(if negative { -cents } else { cents }))
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / MINOR_PER_MAJOR
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % MINOR_PER_MAJOR).abs()
    }

    /// Returns the value as a decimal number, unrounded.
    ///
    /// Only for handing the total to a reporter (JSON output); never feed the
    /// result back into arithmetic.
    pub fn as_decimal(&self) -> f64 {
        self.0 as f64 / MINOR_PER_MAJOR as f64
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::money::Money;
    ///
    /// let single = Money::from_cents(125);
    /// assert_eq!(single.multiply_quantity(3).cents(), 375);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: u64) -> Self {
        Money(self.0 * qty as i64)
    }

    /// Adds two amounts, `None` on overflow.
    #[inline]
    pub const fn checked_add(self, other: Money) -> Option<Money> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Multiplies by a quantity, `None` on overflow.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(800).checked_mul(2), Some(Money::from_cents(1600)));
    /// assert_eq!(Money::from_cents(i64::MAX).checked_mul(2), None);
    /// ```
    pub fn checked_mul(self, qty: u64) -> Option<Money> {
        i64::try_from(qty)
            .ok()
            .and_then(|qty| self.0.checked_mul(qty))
            .map(Money)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows money as `$12.34`.
///
/// ## Note
/// This is a plain developer-facing rendering; currency and locale
/// formatting belong to whoever presents the receipt.
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

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Multiplication by a quantity of items.
impl Mul<u64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: u64) -> Self {
        self.multiply_quantity(qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
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
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1325)), "$13.25");
        assert_eq!(format!("{}", Money::from_cents(600)), "$6.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::zero()), "$0.00");
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!(Money::parse_decimal("1.25").unwrap().cents(), 125);
        assert_eq!(Money::parse_decimal("0.75").unwrap().cents(), 75);
        assert_eq!(Money::parse_decimal("4.5").unwrap().cents(), 450);
        assert_eq!(Money::parse_decimal("3").unwrap().cents(), 300);
        assert_eq!(Money::parse_decimal(".5").unwrap().cents(), 50);
        assert_eq!(Money::parse_decimal("7.").unwrap().cents(), 700);
        assert_eq!(Money::parse_decimal(" 0.1 ").unwrap().cents(), 10);
        assert_eq!(Money::parse_decimal("-2.05").unwrap().cents(), -205);
    }

    #[test]
    fn test_parse_decimal_rejects_garbage() {
        assert!(Money::parse_decimal("").is_err());
        assert!(Money::parse_decimal(".").is_err());
        assert!(Money::parse_decimal("1.2.3").is_err());
        assert!(Money::parse_decimal("1.005").is_err());
        assert!(Money::parse_decimal("$1").is_err());
        assert!(Money::parse_decimal("1e3").is_err());
        assert!(Money::parse_decimal("99999999999999999999").is_err());
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a * 3).cents(), 3000);

        let mut running = Money::zero();
        running += b;
        running += b;
        assert_eq!(running, a);
    }

    #[test]
    fn test_sum() {
        let prices = [Money::from_cents(800), Money::from_cents(800), Money::from_cents(450)];
        let by_ref: Money = prices.iter().sum();
        let by_value: Money = prices.into_iter().sum();
        assert_eq!(by_ref.cents(), 2050);
        assert_eq!(by_value, by_ref);
    }

    #[test]
    fn test_checked_arithmetic() {
        let big = Money::from_cents(4_500_000_000_000_000_000);
        assert_eq!(big.checked_add(Money::from_cents(1)), Some(Money::from_cents(4_500_000_000_000_000_001)));
        assert_eq!(big.checked_add(big), None);
        assert_eq!(big.checked_mul(1), Some(big));
        assert_eq!(big.checked_mul(3), None);
        assert_eq!(Money::from_cents(1).checked_mul(u64::MAX), None);
        assert_eq!(Money::from_cents(450).checked_mul(0), Some(Money::zero()));
    }

    #[test]
    fn test_as_decimal() {
        assert_eq!(Money::from_cents(1325).as_decimal(), 13.25);
        assert_eq!(Money::zero().as_decimal(), 0.0);
    }

    #[test]
    fn test_ordering_picks_cheaper() {
        let bulk = Money::from_cents(500);
        let singles = Money::from_cents(100).multiply_quantity(6);
        assert!(bulk < singles);
        assert_eq!(bulk.min(singles), bulk);
    }
}
