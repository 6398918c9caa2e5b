//! # Correction Table
//!
//! Convergence usually leaves a small residual between the tally's value and
//! the target. Each entry here is a swap among quarters, dimes and nickels
//! that changes the value by a fixed amount while keeping the coin count
//! the same, so it can be scaled by `residual / amount` and added in one go.
//!
//! ## Entry Invariants
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  25·Δquarters + 10·Δdimes + 5·Δnickels  ==  amount_cents               │
//! │      Δquarters +    Δdimes +   Δnickels  ==  0                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Selection
//! Entries are scanned from the largest amount down and the first one that
//! divides the residual is applied, once, scaled. Larger divisors need fewer
//! swap units and are less likely to drive a count negative. Whatever
//! residual remains is the orchestrator's problem.

use super::Tally;

/// Count change among the three non-penny denominations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delta {
    pub quarters: i64,
    pub dimes: i64,
    pub nickels: i64,
}

impl Delta {
    /// Net value change in cents.
    pub const fn cents(&self) -> i64 {
        self.quarters * 25 + self.dimes * 10 + self.nickels * 5
    }

    /// Net coin count change.
    pub const fn coins(&self) -> i64 {
        self.quarters + self.dimes + self.nickels
    }
}

/// A zero-sum-count swap worth `amount_cents`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CorrectionEntry {
    pub amount_cents: i64,
    pub delta: Delta,
}

const fn entry(amount_cents: i64, quarters: i64, dimes: i64, nickels: i64) -> CorrectionEntry {
    CorrectionEntry {
        amount_cents,
        delta: Delta {
            quarters,
            dimes,
            nickels,
        },
    }
}

/// Known swaps, ascending by amount. Used largest-first.
pub const CORRECTIONS: [CorrectionEntry; 12] = [
    entry(5, 0, 1, -1),
    entry(10, 1, -2, 1),
    entry(15, 1, -1, 0),
    entry(20, 1, 0, -1),
    entry(25, 1, 1, -2),
    entry(35, 2, -1, -1),
    entry(45, 3, -3, 0),
    entry(55, 3, -1, -2),
    entry(65, 4, -3, -1),
    entry(75, 4, -1, -3),
    entry(85, 5, -3, -2),
    entry(95, 5, -1, -4),
];

/// Applies at most one scaled correction so the tally moves toward
/// `target_cents`. Returns the entry used, if any.
pub fn apply_correction(tally: &mut Tally, target_cents: i64) -> Option<&'static CorrectionEntry> {
    let diff = target_cents - tally.value();
    if diff == 0 {
        return None;
    }

    let chosen = CORRECTIONS
        .iter()
        .rev()
        .find(|entry| diff % entry.amount_cents == 0)?;

    let units = diff / chosen.amount_cents;
    tally.quarters += chosen.delta.quarters * units;
    tally.dimes += chosen.delta.dimes * units;
    tally.nickels += chosen.delta.nickels * units;

    Some(chosen)
}
