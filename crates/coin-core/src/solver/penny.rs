//! Penny derivation.
//!
//! Five pennies are worth one nickel, so only the amount's residue modulo 5
//! has to be paid in pennies. Any further multiple of five pennies can be
//! absorbed by the other denominations.

use crate::money::Money;
use crate::types::Denomination;

/// Returns the penny count in `0..5` congruent to the amount modulo 5.
///
/// ## Example
/// ```rust
/// use coin_core::money::Money;
/// use coin_core::solver::penny::penny_count;
///
/// assert_eq!(penny_count(Money::from_cents(10054)), 4);
/// assert_eq!(penny_count(Money::from_cents(10050)), 0);
/// ```
#[inline]
pub fn penny_count(amount: Money) -> u32 {
    // Residue of a u64 modulo 5 always fits.
    (amount.cents() % Denomination::Nickel.cents()) as u32
}
