//! # Fallback Search
//!
//! Exhaustive search over every way to split `count` coins four ways. Used
//! only when the heuristic stages fail to land exactly.
//!
//! ## How Candidates Are Generated
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  for every pair (i, j) with i + j = s ≤ count:                          │
//! │      record (i, j) under sum s                                         │
//! │      for every recorded pair (x, y) under sum count - s:               │
//! │          emit every distinct ordering of (i, j, x, y)                  │
//! │                                                                         │
//! │  Any 4-way split (a, b, c, d) is two 2-way splits (a, b) and (c, d)    │
//! │  of complementary sums. Whichever pair is recorded second finds the    │
//! │  other already waiting, so every split is emitted at least once.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Generation is quadratic in `count` for the pairs and up to 24 orderings
//! per quadruple, so this path is a last resort. [`search`] stops at the
//! first match; [`candidates`] materialises the whole set.
//!
//! [`witness`] answers the same question in O(count) without enumerating.
//! The solver consults it first: when it finds nothing, neither would the
//! enumeration, and above [`ENUMERATION_LIMIT`] coins its answer is used
//! directly.

use std::collections::BTreeSet;
use std::ops::ControlFlow;

use crate::money::Money;
use crate::types::{CoinCounts, Denomination};

/// `(pennies, nickels, dimes, quarters)`.
pub type CandidateTuple = [u32; 4];

/// Largest coin count the solver hands to [`search`].
pub const ENUMERATION_LIMIT: u32 = 200;

/// Value of a candidate in cents.
pub fn candidate_value(tuple: &CandidateTuple) -> u64 {
    tuple
        .iter()
        .zip(Denomination::ALL)
        .map(|(&count, denomination)| u64::from(count) * denomination.cents())
        .sum()
}

/// Finds some split of `count` coins worth exactly `amount`.
///
/// ## Example
/// ```rust
/// use coin_core::money::Money;
/// use coin_core::solver::fallback::search;
///
/// let counts = search(3, Money::from_cents(3)).unwrap();
/// assert_eq!(counts.pennies, 3);
///
/// // Four coins can never make 10¢.
/// assert!(search(4, Money::from_cents(10)).is_none());
/// ```
pub fn search(count: u32, amount: Money) -> Option<CoinCounts> {
    let found = for_each_candidate(count, |tuple| {
        if candidate_value(&tuple) == amount.cents() {
            ControlFlow::Break(tuple)
        } else {
            ControlFlow::Continue(())
        }
    });

    match found {
        ControlFlow::Break([pennies, nickels, dimes, quarters]) => {
            Some(CoinCounts::new(pennies, nickels, dimes, quarters))
        }
        ControlFlow::Continue(()) => None,
    }
}

/// Builds a split of `count` coins worth `amount`, or proves there is none.
///
/// Fixing the quarters at `q` leaves `m = count - q` coins worth
/// `r = amount - 25q`. With `n` nickels and `d` dimes the rest are pennies,
/// so `4n + 9d = r - m = t` and `n + d <= m`. That holds exactly when
/// `d ≡ t (mod 4)` and `ceil((t - 4m) / 5) <= d <= t / 9`, which is checked
/// in constant time per `q`. `t` shrinks by 24 per extra quarter, so the
/// scan stops as soon as it goes negative.
///
/// ## Example
/// ```rust
/// use coin_core::money::Money;
/// use coin_core::solver::fallback::witness;
///
/// let counts = witness(391, Money::from_cents(1843)).unwrap();
/// assert_eq!(counts.total_count(), 391);
/// assert_eq!(counts.value().cents(), 1843);
///
/// assert!(witness(1000, Money::from_cents(1001)).is_none());
/// ```
pub fn witness(count: u32, amount: Money) -> Option<CoinCounts> {
    let count = i64::from(count);
    let amount = i64::try_from(amount.cents()).ok()?;

    for quarters in 0..=count {
        let coins = count - quarters;
        let t = amount - 25 * quarters - coins;
        if t < 0 {
            break;
        }

        let low = (-(4 * coins - t).div_euclid(5)).max(0);
        let dimes = low + (t - low).rem_euclid(4);
        if dimes > t / 9 {
            continue;
        }

        let nickels = (t - 9 * dimes) / 4;
        let pennies = coins - nickels - dimes;
        return Some(CoinCounts::new(
            u32::try_from(pennies).ok()?,
            u32::try_from(nickels).ok()?,
            u32::try_from(dimes).ok()?,
            u32::try_from(quarters).ok()?,
        ));
    }

    None
}

/// Every distinct candidate tuple for `count` coins.
pub fn candidates(count: u32) -> BTreeSet<CandidateTuple> {
    let mut set = BTreeSet::new();
    let _ = for_each_candidate::<()>(count, |tuple| {
        set.insert(tuple);
        ControlFlow::Continue(())
    });
    set
}

fn for_each_candidate<B>(
    count: u32,
    mut visit: impl FnMut(CandidateTuple) -> ControlFlow<B>,
) -> ControlFlow<B> {
    let total = count as usize;
    let mut pairs_by_sum: Vec<Vec<(u32, u32)>> = vec![Vec::new(); total + 1];

    for i in 0..=count {
        // Pairs summing past `count` have no complement; skip them outright.
        for j in 0..=(count - i) {
            let sum = (i + j) as usize;
            pairs_by_sum[sum].push((i, j));

            let complement = total - sum;
            for k in 0..pairs_by_sum[complement].len() {
                let (x, y) = pairs_by_sum[complement][k];
                let mut tuple = [i, j, x, y];
                tuple.sort_unstable();
                loop {
                    visit(tuple)?;
                    if !next_permutation(&mut tuple) {
                        break;
                    }
                }
            }
        }
    }

    ControlFlow::Continue(())
}

/// Advances to the next lexicographic ordering. Starting from sorted input,
/// this visits each distinct ordering exactly once.
fn next_permutation(tuple: &mut CandidateTuple) -> bool {
    let Some(head) = (1..tuple.len()).rev().find(|&i| tuple[i - 1] < tuple[i]) else {
        return false;
    };
    let pivot = head - 1;

    let mut swap = tuple.len() - 1;
    while tuple[swap] <= tuple[pivot] {
        swap -= 1;
    }

    tuple.swap(pivot, swap);
    tuple[head..].reverse();
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Number of ways to put `n` identical coins into 4 ordered slots.
    fn stars_and_bars(n: u64) -> usize {
        ((n + 3) * (n + 2) * (n + 1) / 6) as usize
    }

    #[test]
    fn test_next_permutation_distinct() {
        let mut tuple = [1, 1, 2, 2];
        let mut seen = vec![tuple];
        while next_permutation(&mut tuple) {
            seen.push(tuple);
        }
        assert_eq!(seen.len(), 6);

        let mut tuple = [0, 1, 2, 3];
        let mut orderings = 1;
        while next_permutation(&mut tuple) {
            orderings += 1;
        }
        assert_eq!(orderings, 24);

        let mut tuple = [5, 5, 5, 5];
        assert!(!next_permutation(&mut tuple));
    }

    #[test]
    fn test_candidates_are_every_split() {
        for count in 0..=12u32 {
            let set = candidates(count);
            assert_eq!(set.len(), stars_and_bars(u64::from(count)), "count={count}");
            assert!(set
                .iter()
                .all(|t| t.iter().map(|&c| u64::from(c)).sum::<u64>() == u64::from(count)));
        }
    }

    #[test]
    fn test_zero_coins() {
        assert_eq!(candidates(0).into_iter().collect::<Vec<_>>(), vec![[0, 0, 0, 0]]);
        assert_eq!(search(0, Money::zero()), Some(CoinCounts::default()));
        assert_eq!(search(0, Money::from_cents(1)), None);
    }

    #[test]
    fn test_search_agrees_with_candidate_scan() {
        for count in 0..=10u32 {
            let set = candidates(count);
            for cents in 0..=(25 * u64::from(count) + 5) {
                let expected = set.iter().any(|t| candidate_value(t) == cents);
                let found = search(count, Money::from_cents(cents));
                assert_eq!(found.is_some(), expected, "count={count} cents={cents}");
                if let Some(counts) = found {
                    assert_eq!(counts.total_count(), u64::from(count));
                    assert_eq!(counts.value().cents(), cents);
                }
            }
        }
    }

    #[test]
    fn test_witness_agrees_with_search() {
        for count in 0..=16u32 {
            for cents in 0..=(25 * u64::from(count) + 5) {
                let amount = Money::from_cents(cents);
                let built = witness(count, amount);
                assert_eq!(built.is_some(), search(count, amount).is_some(), "count={count} cents={cents}");
                if let Some(counts) = built {
                    assert_eq!(counts.total_count(), u64::from(count));
                    assert_eq!(counts.value(), amount);
                }
            }
        }
    }

    #[test]
    fn test_witness_handles_large_counts() {
        // One cent above all pennies: no coin adds exactly 1¢ over a penny.
        assert_eq!(witness(100_000, Money::from_cents(100_001)), None);
        assert_eq!(
            witness(100_000, Money::from_cents(2_500_000)),
            Some(CoinCounts::new(0, 0, 0, 100_000))
        );
        let counts = witness(1_000_000, Money::from_cents(10_000_004)).unwrap();
        assert_eq!(counts.total_count(), 1_000_000);
        assert_eq!(counts.value().cents(), 10_000_004);
    }

    #[test]
    fn test_known_gaps_inside_range() {
        assert!(search(4, Money::from_cents(10)).is_none());
        assert!(search(1, Money::from_cents(2)).is_none());
        assert!(search(2, Money::from_cents(3)).is_none());
        assert!(search(4, Money::from_cents(8)).is_some());
    }
}
