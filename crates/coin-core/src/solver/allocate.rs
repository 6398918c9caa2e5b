//! Base allocation.
//!
//! Seeds the convergence stage with a guess that has the right number of
//! coins and an arbitrary value: the non-penny coins are split as evenly as
//! possible across quarters, dimes and nickels, with the remainder going to
//! nickels.

use super::Tally;

/// Builds the starting tally for `count` coins of which `pennies` are fixed.
///
/// When `pennies > count` the remaining share is negative and so are the
/// resulting counts; the orchestrator's validation catches that.
pub fn allocate_base(count: u32, pennies: u32) -> Tally {
    let remaining = i64::from(count) - i64::from(pennies);
    // Floor division, so a negative remainder still splits consistently.
    let base = remaining.div_euclid(3);

    Tally {
        pennies: i64::from(pennies),
        nickels: base + (remaining - 3 * base),
        dimes: base,
        quarters: base,
    }
}
