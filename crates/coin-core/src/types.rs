//! # Domain Types
//!
//! Core domain types used throughout the coin problem workspace.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  Denomination   │   │   CoinCounts    │   │     Target      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  Penny    1¢    │   │  pennies        │   │  count (coins)  │       │
//! │  │  Nickel   5¢    │   │  nickels        │   │  amount (Money) │       │
//! │  │  Dime    10¢    │   │  dimes          │   │                 │       │
//! │  │  Quarter 25¢    │   │  quarters       │   │                 │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The denomination set is closed: `CoinCounts` has exactly four named
//! fields, so no fifth coin can appear and none can go missing.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::money::Money;

// =============================================================================
// Denomination
// =============================================================================

/// One of the four coin types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Denomination {
    Penny,
    Nickel,
    Dime,
    Quarter,
}

impl Denomination {
    /// All denominations, smallest first. This is also the field order of
    /// [`CoinCounts`] and of a fallback candidate tuple.
    pub const ALL: [Denomination; 4] = [
        Denomination::Penny,
        Denomination::Nickel,
        Denomination::Dime,
        Denomination::Quarter,
    ];

    /// Face value in cents.
    #[inline]
    pub const fn cents(self) -> u64 {
        match self {
            Denomination::Penny => 1,
            Denomination::Nickel => 5,
            Denomination::Dime => 10,
            Denomination::Quarter => 25,
        }
    }

    /// Plural field name, as used on the wire and in the CLI report.
    pub const fn plural(self) -> &'static str {
        match self {
            Denomination::Penny => "pennies",
            Denomination::Nickel => "nickels",
            Denomination::Dime => "dimes",
            Denomination::Quarter => "quarters",
        }
    }
}

impl fmt::Display for Denomination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Denomination::Penny => write!(f, "penny"),
            Denomination::Nickel => write!(f, "nickel"),
            Denomination::Dime => write!(f, "dime"),
            Denomination::Quarter => write!(f, "quarter"),
        }
    }
}

// =============================================================================
// Coin Counts
// =============================================================================

/// A count per denomination. All fields are non-negative by construction.
///
/// Serializes to the player wire format, fields in this exact order:
/// `{"pennies":4,"nickels":1366,"dimes":322,"quarters":0}`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CoinCounts {
    pub pennies: u32,
    pub nickels: u32,
    pub dimes: u32,
    pub quarters: u32,
}

impl CoinCounts {
    /// Creates counts in `(pennies, nickels, dimes, quarters)` order.
    #[inline]
    pub const fn new(pennies: u32, nickels: u32, dimes: u32, quarters: u32) -> Self {
        CoinCounts {
            pennies,
            nickels,
            dimes,
            quarters,
        }
    }

    /// Returns the count for one denomination.
    #[inline]
    pub const fn get(&self, denomination: Denomination) -> u32 {
        match denomination {
            Denomination::Penny => self.pennies,
            Denomination::Nickel => self.nickels,
            Denomination::Dime => self.dimes,
            Denomination::Quarter => self.quarters,
        }
    }

    /// Total number of coins.
    ///
    /// Four `u32` values always fit in a `u64`.
    pub fn total_count(&self) -> u64 {
        Denomination::ALL
            .iter()
            .map(|&d| u64::from(self.get(d)))
            .sum()
    }

    /// Total value of all coins.
    ///
    /// ## Example
    /// ```rust
    /// use coin_core::{CoinCounts, Money};
    ///
    /// let counts = CoinCounts::new(4, 3, 2, 1);
    /// assert_eq!(counts.value(), Money::from_cents(64));
    /// ```
    pub fn value(&self) -> Money {
        Money::from_cents(
            Denomination::ALL
                .iter()
                .map(|&d| u64::from(self.get(d)) * d.cents())
                .sum(),
        )
    }

    /// Returns true when these counts hit the target exactly.
    pub fn satisfies(&self, target: Target) -> bool {
        self.total_count() == u64::from(target.count) && self.value() == target.amount
    }
}

// =============================================================================
// Target
// =============================================================================

/// What the caller asked for: exactly `count` coins worth exactly `amount`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Target {
    pub count: u32,
    pub amount: Money,
}

impl Target {
    #[inline]
    pub const fn new(count: u32, amount: Money) -> Self {
        Target { count, amount }
    }

    /// Smallest reachable amount: every coin a penny.
    #[inline]
    pub const fn min_amount(&self) -> Money {
        Money::from_cents(self.count as u64 * Denomination::Penny.cents())
    }

    /// Largest reachable amount: every coin a quarter.
    #[inline]
    pub const fn max_amount(&self) -> Money {
        Money::from_cents(self.count as u64 * Denomination::Quarter.cents())
    }

    /// Necessary condition for a solution: `count <= amount <= 25 * count`.
    ///
    /// Not sufficient. Four coins cannot make 10¢, for instance; only the
    /// exhaustive search settles the gaps inside the range.
    pub fn is_in_range(&self) -> bool {
        self.min_amount() <= self.amount && self.amount <= self.max_amount()
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} coins / {}", self.count, self.amount)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_denomination_values() {
        let cents: Vec<u64> = Denomination::ALL.iter().map(|d| d.cents()).collect();
        assert_eq!(cents, vec![1, 5, 10, 25]);
        assert_eq!(Denomination::Quarter.plural(), "quarters");
        assert_eq!(Denomination::Penny.to_string(), "penny");
    }

    #[test]
    fn test_totals() {
        let counts = CoinCounts::new(4, 3, 2, 1);
        assert_eq!(counts.total_count(), 10);
        assert_eq!(counts.value().cents(), 64);

        let counts = CoinCounts::new(1, 2, 3, 4);
        assert_eq!(counts.value().cents(), 141);

        assert_eq!(CoinCounts::default().total_count(), 0);
        assert!(CoinCounts::default().value().is_zero());
    }

    #[test]
    fn test_totals_do_not_overflow() {
        let max = CoinCounts::new(u32::MAX, u32::MAX, u32::MAX, u32::MAX);
        assert_eq!(max.total_count(), 4 * u64::from(u32::MAX));
        assert_eq!(max.value().cents(), 41 * u64::from(u32::MAX));
    }

    #[test]
    fn test_wire_field_order() {
        let json = serde_json::to_string(&CoinCounts::new(4, 1366, 322, 0)).unwrap();
        assert_eq!(json, r#"{"pennies":4,"nickels":1366,"dimes":322,"quarters":0}"#);
    }

    #[test]
    fn test_target_range() {
        let target = Target::new(5, Money::from_cents(4));
        assert!(!target.is_in_range());
        let target = Target::new(5, Money::from_cents(130));
        assert!(!target.is_in_range());
        let target = Target::new(5, Money::from_cents(125));
        assert!(target.is_in_range());
        assert!(Target::new(0, Money::zero()).is_in_range());
    }

    #[test]
    fn test_satisfies() {
        let counts = CoinCounts::new(3, 0, 0, 0);
        assert!(counts.satisfies(Target::new(3, Money::from_cents(3))));
        assert!(!counts.satisfies(Target::new(3, Money::from_cents(4))));
        assert!(!counts.satisfies(Target::new(2, Money::from_cents(3))));
    }
}
