//! Property-based tests for the solver laws.

use proptest::prelude::*;

use coin_core::solver::fallback;
use coin_core::{solve, CoinCounts, Money, SolveError};

/// Strategy: a real handful of coins, so the target is always reachable.
fn coins_strategy(max_per_type: u32) -> impl Strategy<Value = CoinCounts> {
    prop::array::uniform4(0..=max_per_type)
        .prop_map(|[pennies, nickels, dimes, quarters]| CoinCounts::new(pennies, nickels, dimes, quarters))
}

fn assert_valid(counts: &CoinCounts, count: u32, amount: Money) -> Result<(), TestCaseError> {
    prop_assert_eq!(counts.total_count(), u64::from(count), "counts={:?}", counts);
    prop_assert_eq!(counts.value(), amount, "counts={:?}", counts);
    Ok(())
}

proptest! {
    // 1. Any amount made of real coins is solved exactly
    #[test]
    fn feasible_targets_are_solved(coins in coins_strategy(12)) {
        let count = coins.total_count() as u32;
        let amount = coins.value();
        let counts = solve(count, amount);
        prop_assert!(counts.is_ok(), "no solution for {:?}", coins);
        assert_valid(&counts.unwrap(), count, amount)?;
    }

    // 2. Amounts below all-pennies are unsolvable
    #[test]
    fn below_minimum_is_no_solution(count in 1..2000u32, shortfall in 1..50u64) {
        let amount = Money::from_cents(u64::from(count).saturating_sub(shortfall));
        let is_no_solution = matches!(solve(count, amount), Err(SolveError::NoSolution { .. }));
        prop_assert!(is_no_solution);
    }

    // 3. Amounts above all-quarters are unsolvable
    #[test]
    fn above_maximum_is_no_solution(count in 0..2000u32, excess in 1..500u64) {
        let amount = Money::from_cents(25 * u64::from(count) + excess);
        let is_no_solution = matches!(solve(count, amount), Err(SolveError::NoSolution { .. }));
        prop_assert!(is_no_solution);
    }

    // 4. Solving is deterministic
    #[test]
    fn solve_deterministic(count in 0..40u32, cents in 0..1000u64) {
        let amount = Money::from_cents(cents);
        prop_assert_eq!(solve(count, amount), solve(count, amount));
    }

    // 5. The fallback alone finds every reachable target
    #[test]
    fn fallback_alone_is_complete(coins in coins_strategy(8)) {
        let count = coins.total_count() as u32;
        let amount = coins.value();
        let found = fallback::search(count, amount);
        prop_assert!(found.is_some(), "fallback missed {:?}", coins);
        assert_valid(&found.unwrap(), count, amount)?;
    }

    // 6. Whatever solve() says, it agrees with the fallback on solvability
    #[test]
    fn solvability_matches_fallback(count in 0..30u32, cents in 0..800u64) {
        let amount = Money::from_cents(cents);
        prop_assert_eq!(solve(count, amount).is_ok(), fallback::search(count, amount).is_some());
    }
}

// =============================================================================
// Concrete scenarios
// =============================================================================

#[test]
fn zero_coins_zero_cents() {
    assert_eq!(solve(0, Money::zero()), Ok(CoinCounts::new(0, 0, 0, 0)));
}

#[test]
fn four_coins_cannot_make_ten_cents() {
    // 4 coins and 10¢ would need 4n + 9d + 24q = 6 over non-negative integers.
    assert!(matches!(
        solve(4, Money::from_cents(10)),
        Err(SolveError::NoSolution { count: 4, .. })
    ));
}

#[test]
fn four_coins_eight_cents() {
    let counts = solve(4, Money::from_cents(8)).unwrap();
    assert_eq!(counts, CoinCounts::new(3, 1, 0, 0));
}

#[test]
fn below_minimum_amount() {
    assert!(solve(5, Money::from_cents(4)).is_err());
}

#[test]
fn above_maximum_amount() {
    assert!(solve(5, Money::from_cents(130)).is_err());
}

#[test]
fn default_cli_scenario() {
    let counts = solve(1692, Money::from_cents(10054)).unwrap();
    assert_eq!(counts.total_count(), 1692);
    assert_eq!(counts.value().cents(), 10054);
}

#[test]
fn concurrent_callers_agree() {
    let handles: Vec<_> = (0..8)
        .map(|_| std::thread::spawn(|| solve(1692, Money::from_cents(10054))))
        .collect();
    let expected = solve(1692, Money::from_cents(10054));
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
