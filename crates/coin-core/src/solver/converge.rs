//! Convergence by one-for-one exchange.
//!
//! ```text
//!   value ▲
//!         │ ●                      each step: one `from` coin → one `to` coin
//!         │   ●                    value drops by cents(from) - cents(to)
//!         │     ●                  coin count unchanged
//!  target ┼───────●─────────────   stop at or below target,
//!         │                        or when `from` runs out
//!         └──────────────────▶ steps
//! ```
//!
//! The exchange only ever lowers the value. An undershoot is left for the
//! correction table (and ultimately the fallback search) to deal with.

use super::Tally;
use crate::types::Denomination;

/// Exchanges `from` coins for `to` coins while the tally is worth more than
/// `target_cents` and `from` coins remain. Returns the number of exchanges.
///
/// The step count is computed directly as
/// `min(available, ceil(excess / step))`, which is where the coin-by-coin
/// loop stops.
pub fn converge(tally: &mut Tally, target_cents: i64, from: Denomination, to: Denomination) -> i64 {
    debug_assert!(from.cents() > to.cents(), "exchange must lower the value");

    let step = (from.cents() - to.cents()) as i64;
    let excess = tally.value() - target_cents;
    let available = tally.get(from);

    if excess <= 0 || available <= 0 {
        return 0;
    }

    let steps = available.min((excess + step - 1) / step);
    *tally.get_mut(from) -= steps;
    *tally.get_mut(to) += steps;
    steps
}
