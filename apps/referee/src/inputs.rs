//! # Input Sequence
//!
//! Every player must see the same problems in the same order, however many
//! rounds it manages. Inputs are generated lazily from a seeded RNG and
//! cached, so the fastest player extends the sequence and the others replay
//! it after a [`reset`](InputSequence::reset).
//!
//! ```text
//!   cache:  [r0][r1][r2][r3][r4]
//!                        ▲
//!                     cursor ── next_request() returns r3, then r4,
//!                               then generates r5 and appends it
//! ```
//!
//! Each input is built from a random [`CoinCounts`], so every request the
//! referee sends has at least one solution.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::RangeInclusive;

use coin_core::CoinCounts;
use coin_player::Request;

use crate::config::MAX_COUNT_PER_TYPE;

pub struct InputSequence {
    rng: StdRng,
    per_type: RangeInclusive<u32>,
    cache: Vec<Request>,
    cursor: usize,
}

impl InputSequence {
    /// Sequence drawing `per_type` coins of each denomination per input.
    ///
    /// The range is clamped to at most [`MAX_COUNT_PER_TYPE`] so that four
    /// draws always sum into a `u32`; an inverted range collapses to its end.
    pub fn new(per_type: RangeInclusive<u32>, seed: u64) -> Self {
        let end = (*per_type.end()).min(MAX_COUNT_PER_TYPE);
        let start = (*per_type.start()).min(end);
        InputSequence {
            rng: StdRng::seed_from_u64(seed),
            per_type: start..=end,
            cache: Vec::new(),
            cursor: 0,
        }
    }

    /// Starts the sequence with fixed requests before any random ones.
    pub fn with_cached(mut self, requests: impl IntoIterator<Item = Request>) -> Self {
        self.cache.extend(requests);
        self
    }

    pub fn next_request(&mut self) -> Request {
        if self.cursor == self.cache.len() {
            let request = self.generate();
            self.cache.push(request);
        }
        let request = self.cache[self.cursor];
        self.cursor += 1;
        request
    }

    /// Rewinds to the first input; cached inputs are replayed.
    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    /// Number of inputs generated or preloaded so far.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    fn generate(&mut self) -> Request {
        let [pennies, nickels, dimes, quarters] =
            [(); 4].map(|_| self.rng.gen_range(self.per_type.clone()));
        // Each draw is at most MAX_COUNT_PER_TYPE, so the sum fits.
        let count = pennies + nickels + dimes + quarters;
        let counts = CoinCounts::new(pennies, nickels, dimes, quarters);
        Request::new(count, counts.value())
    }
}
