//! # Solver
//!
//! Two tiers: a cheap heuristic that lands exactly on most inputs, backed by
//! an exhaustive search that is always right.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          solve(count, amount)                           │
//! │                                                                         │
//! │  range check ── amount outside [count, 25·count] ──► NoSolution         │
//! │      │                                                                  │
//! │      ▼                                                                  │
//! │  penny::penny_count        pennies = amount mod 5                       │
//! │      │                                                                  │
//! │      ▼                                                                  │
//! │  allocate::allocate_base   even 3-way split of the rest                 │
//! │      │                                                                  │
//! │      ▼                                                                  │
//! │  converge::converge        quarters → dimes, then dimes → nickels       │
//! │      │                                                                  │
//! │      ▼                                                                  │
//! │  correction::apply_correction   one scaled zero-count swap              │
//! │      │                                                                  │
//! │      ▼                                                                  │
//! │  validate ── ok ──────────────────────────────────────► CoinCounts      │
//! │      │                                                                  │
//! │   invalid (wrong count, wrong value, or a negative count)               │
//! │      │                                                                  │
//! │      ▼                                                                  │
//! │  fallback::witness ── none ───────────────────────────► NoSolution      │
//! │      │                                                                  │
//! │   count ≤ ENUMERATION_LIMIT ── fallback::search ──────► CoinCounts      │
//! │      │                                                                  │
//! │      └── larger ── the constructed split ─────────────► CoinCounts      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every call is independent: no state survives between calls, so `solve`
//! can be called from any number of threads at once.

pub mod allocate;
pub mod converge;
pub mod correction;
pub mod fallback;
pub mod penny;

use tracing::{debug, trace};

use crate::error::{SolveError, SolveResult};
use crate::money::Money;
use crate::types::{CoinCounts, Denomination, Target};

// =============================================================================
// Working Record
// =============================================================================

/// Signed working counts. The heuristic stages are allowed to push these
/// negative; nothing leaves the solver without passing [`Tally::into_counts`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub pennies: i64,
    pub nickels: i64,
    pub dimes: i64,
    pub quarters: i64,
}

impl Tally {
    #[inline]
    pub fn get(&self, denomination: Denomination) -> i64 {
        match denomination {
            Denomination::Penny => self.pennies,
            Denomination::Nickel => self.nickels,
            Denomination::Dime => self.dimes,
            Denomination::Quarter => self.quarters,
        }
    }

    #[inline]
    pub fn get_mut(&mut self, denomination: Denomination) -> &mut i64 {
        match denomination {
            Denomination::Penny => &mut self.pennies,
            Denomination::Nickel => &mut self.nickels,
            Denomination::Dime => &mut self.dimes,
            Denomination::Quarter => &mut self.quarters,
        }
    }

    pub fn total_count(&self) -> i64 {
        Denomination::ALL.iter().map(|&d| self.get(d)).sum()
    }

    /// Value in cents (negative counts contribute negative value).
    pub fn value(&self) -> i64 {
        Denomination::ALL
            .iter()
            .map(|&d| self.get(d) * d.cents() as i64)
            .sum()
    }

    /// Converts to [`CoinCounts`] if every field is a valid `u32`.
    pub fn into_counts(self) -> Option<CoinCounts> {
        Some(CoinCounts::new(
            u32::try_from(self.pennies).ok()?,
            u32::try_from(self.nickels).ok()?,
            u32::try_from(self.dimes).ok()?,
            u32::try_from(self.quarters).ok()?,
        ))
    }
}

// =============================================================================
// Orchestrator
// =============================================================================

/// Finds pennies, nickels, dimes and quarters totalling exactly `count`
/// coins and exactly `amount`.
///
/// ## Cost
/// The heuristic is constant time. When it misses, an O(count) scan
/// decides solvability; only solvable targets of at most
/// [`fallback::ENUMERATION_LIMIT`] coins pay for the exhaustive search,
/// so a single large request cannot exhaust time or memory.
///
/// ## Example
/// ```rust
/// use coin_core::{solve, Money, SolveError};
///
/// let counts = solve(1692, Money::from_cents(10054)).unwrap();
/// assert_eq!(counts.total_count(), 1692);
/// assert_eq!(counts.value().cents(), 10054);
///
/// assert!(matches!(
///     solve(5, Money::from_cents(130)),
///     Err(SolveError::NoSolution { .. })
/// ));
/// ```
pub fn solve(count: u32, amount: Money) -> SolveResult<CoinCounts> {
    solve_target(Target::new(count, amount))
}

/// [`solve`] for an already-assembled [`Target`].
pub fn solve_target(target: Target) -> SolveResult<CoinCounts> {
    let no_solution = SolveError::NoSolution {
        count: target.count,
        amount: target.amount,
    };

    // Outside this range the search would only confirm there is nothing to find.
    if !target.is_in_range() {
        debug!(%target, "amount out of reachable range");
        return Err(no_solution);
    }

    let tally = heuristic(target);
    if let Some(counts) = validate(tally, target) {
        trace!(%target, ?counts, "heuristic landed exactly");
        return Ok(counts);
    }

    let Some(built) = fallback::witness(target.count, target.amount) else {
        debug!(%target, ?tally, "heuristic missed and no split exists");
        return Err(no_solution);
    };

    if target.count > fallback::ENUMERATION_LIMIT {
        debug!(%target, ?tally, "heuristic missed, using constructed split");
        return Ok(built);
    }

    debug!(%target, ?tally, "heuristic missed, running exhaustive search");
    Ok(fallback::search(target.count, target.amount).unwrap_or(built))
}

/// Runs the heuristic stages and returns the raw, unvalidated tally.
///
/// `target` must be in range (its amount then fits an `i64`).
pub fn heuristic(target: Target) -> Tally {
    let target_cents = target.amount.cents() as i64;

    let pennies = penny::penny_count(target.amount);
    let mut tally = allocate::allocate_base(target.count, pennies);

    converge::converge(&mut tally, target_cents, Denomination::Quarter, Denomination::Dime);
    converge::converge(&mut tally, target_cents, Denomination::Dime, Denomination::Nickel);

    if let Some(entry) = correction::apply_correction(&mut tally, target_cents) {
        trace!(amount_cents = entry.amount_cents, "applied correction");
    }

    tally
}

fn validate(tally: Tally, target: Target) -> Option<CoinCounts> {
    let counts = tally.into_counts()?;
    counts.satisfies(target).then_some(counts)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_cli_scenario_takes_fast_path() {
        let target = Target::new(1692, Money::from_cents(10054));
        let tally = heuristic(target);
        assert_eq!(tally, Tally { pennies: 4, nickels: 1366, dimes: 322, quarters: 0 });
        assert_eq!(solve_target(target), Ok(CoinCounts::new(4, 1366, 322, 0)));
    }

    #[test]
    fn test_zero() {
        assert_eq!(solve(0, Money::zero()), Ok(CoinCounts::default()));
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(
            solve(5, Money::from_cents(4)),
            Err(SolveError::NoSolution { count: 5, amount: Money::from_cents(4) })
        );
        assert!(solve(5, Money::from_cents(130)).is_err());
        assert!(solve(0, Money::from_cents(1)).is_err());
        assert!(solve(1, Money::zero()).is_err());
    }

    #[test]
    fn test_gap_inside_range_is_no_solution() {
        assert!(solve(4, Money::from_cents(10)).is_err());
    }

    #[test]
    fn test_fallback_rescues_negative_heuristic() {
        // Five coins worth 5¢: the 20¢ correction drives quarters to -1.
        let target = Target::new(5, Money::from_cents(5));
        assert_eq!(heuristic(target), Tally { pennies: 0, nickels: 6, dimes: 0, quarters: -1 });
        assert_eq!(solve_target(target), Ok(CoinCounts::new(5, 0, 0, 0)));
    }

    #[test]
    fn test_large_miss_uses_constructed_split() {
        let target = Target::new(391, Money::from_cents(1843));
        let tally = heuristic(target);
        assert!(tally.dimes < 0 && tally.quarters < 0);

        let counts = solve_target(target).unwrap();
        assert!(counts.satisfies(target));
    }

    #[test]
    fn test_large_infeasible_is_refuted_without_enumeration() {
        assert_eq!(
            solve(100_000, Money::from_cents(100_001)),
            Err(SolveError::NoSolution { count: 100_000, amount: Money::from_cents(100_001) })
        );
        assert!(solve(u32::MAX, Money::from_cents(u64::from(u32::MAX) + 1)).is_err());
    }

    #[test]
    fn test_extremes() {
        assert_eq!(solve(7, Money::from_cents(7)), Ok(CoinCounts::new(7, 0, 0, 0)));
        assert_eq!(solve(7, Money::from_cents(175)), Ok(CoinCounts::new(0, 0, 0, 7)));
    }

    #[test]
    fn test_tally_into_counts() {
        assert_eq!(
            Tally { pennies: 1, nickels: 2, dimes: 3, quarters: 4 }.into_counts(),
            Some(CoinCounts::new(1, 2, 3, 4))
        );
        assert_eq!(Tally { pennies: -1, ..Tally::default() }.into_counts(), None);
        assert_eq!(Tally { quarters: i64::from(u32::MAX) + 1, ..Tally::default() }.into_counts(), None);
    }
}
