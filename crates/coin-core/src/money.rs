//! # Money Module
//!
//! Amounts are whole cents in a `u64`. Dollars only exist at the edges:
//! [`Money::parse_dollars`] for text and [`Money::from_dollars`] for JSON
//! numbers, both rounding to the nearest cent.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  "100.54"  ──parse_dollars──►  Money(10054)  ──Display──►  "$100.54"    │
//! │  100.54    ──from_dollars───►  Money(10054)                             │
//! │                                     │                                   │
//! │                                     ▼                                   │
//! │                     solver works on i64 cents only                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Comparing `round(sum, 2)` of float dollars stops being exact once a few
//! thousand coins are involved; comparing cents never does.
//!
//! ## Usage
//! ```rust
//! use coin_core::money::Money;
//!
//! let amount = Money::from_cents(10054); // $100.54
//!
//! // Boundary conversion from user text
//! let parsed = Money::parse_dollars("100.54").unwrap();
//! assert_eq!(parsed, amount);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul};

use crate::error::{ValidationError, ValidationResult};

// =============================================================================
// Money Type
// =============================================================================

/// A non-negative monetary value in cents.
///
/// ## Design Decisions
/// - **u64 (unsigned)**: amounts are never negative in this domain
/// - **Single field tuple struct**: zero-cost abstraction over u64
/// - **Serialized as plain cents**: `Money(10054)` ⇄ `10054`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use coin_core::money::Money;
    ///
    /// let amount = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(amount.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: u64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> u64 {
        self.0
    }

    /// Returns the whole-dollar portion.
    #[inline]
    pub const fn dollars(&self) -> u64 {
        self.0 / 100
    }

    /// Returns the cents portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> u64 {
        self.0 % 100
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

    /// Adds two amounts, returning `None` on overflow.
    #[inline]
    pub const fn checked_add(self, other: Money) -> Option<Money> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Parses a decimal currency string into whole cents.
    ///
    /// ## Accepted Forms
    /// ```text
    /// "100.54"  → 10054
    /// "$3"      → 300
    /// ".05"     → 5
    /// "1.005"   → 101   (more than two decimals: rounded half-up)
    /// "1.004"   → 100
    /// ```
    ///
    /// No floating point is involved: the digits are read directly.
    ///
    /// ## Errors
    /// - Empty input → [`ValidationError::Required`]
    /// - Leading `-` → [`ValidationError::Negative`]
    /// - Anything other than digits and one `.` → [`ValidationError::InvalidFormat`]
    /// - More cents than fit in a `u64` → [`ValidationError::OutOfRange`]
    pub fn parse_dollars(input: &str) -> ValidationResult<Money> {
        let text = input.trim();
        let text = text.strip_prefix('$').unwrap_or(text).trim_start();

        if text.is_empty() {
            return Err(ValidationError::Required {
                field: "amount".to_string(),
            });
        }
        if text.starts_with('-') {
            return Err(ValidationError::Negative {
                field: "amount".to_string(),
            });
        }

        let (whole, fraction) = match text.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (text, ""),
        };

        if whole.is_empty() && fraction.is_empty() {
            return Err(invalid_amount("no digits"));
        }
        if !whole.bytes().all(|b| b.is_ascii_digit()) || !fraction.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid_amount("expected digits with an optional decimal point"));
        }

        let out_of_range = || ValidationError::OutOfRange {
            field: "amount".to_string(),
            min: 0,
            max: u64::MAX,
        };

        let mut cents: u64 = 0;
        for digit in whole.bytes() {
            cents = cents
                .checked_mul(10)
                .and_then(|c| c.checked_add(u64::from(digit - b'0')))
                .ok_or_else(out_of_range)?;
        }
        cents = cents.checked_mul(100).ok_or_else(out_of_range)?;

        let mut digits = fraction.bytes().map(|b| u64::from(b - b'0'));
        let tenths = digits.next().unwrap_or(0);
        let hundredths = digits.next().unwrap_or(0);
        let round_up = digits.next().is_some_and(|d| d >= 5);

        cents
            .checked_add(tenths * 10 + hundredths + u64::from(round_up))
            .map(Money)
            .ok_or_else(out_of_range)
    }

    /// Converts a floating point dollar amount (e.g. a JSON number) to cents,
    /// rounding to the nearest cent.
    ///
    /// ## Example
    /// ```rust
    /// use coin_core::money::Money;
    ///
    /// assert_eq!(Money::from_dollars(100.54).unwrap().cents(), 10054);
    /// assert_eq!(Money::from_dollars(0.1 + 0.2).unwrap().cents(), 30);
    /// assert!(Money::from_dollars(-1.0).is_err());
    /// ```
    pub fn from_dollars(dollars: f64) -> ValidationResult<Money> {
        if !dollars.is_finite() {
            return Err(invalid_amount("not a finite number"));
        }
        if dollars < 0.0 {
            return Err(ValidationError::Negative {
                field: "amount".to_string(),
            });
        }

        let cents = (dollars * 100.0).round();
        // u64::MAX is not exactly representable; anything at or past 2^64 is out.
        if cents >= u64::MAX as f64 {
            return Err(ValidationError::OutOfRange {
                field: "amount".to_string(),
                min: 0,
                max: u64::MAX,
            });
        }

        Ok(Money(cents as u64))
    }
}

fn invalid_amount(reason: &str) -> ValidationError {
    ValidationError::InvalidFormat {
        field: "amount".to_string(),
        reason: reason.to_string(),
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Renders as `$D.CC`, the format used by the CLI report and the referee.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}.{:02}", self.dollars(), self.cents_part())
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

/// Multiplication by a coin count.
impl Mul<u64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: u64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
