//! # coin-core: Pure Coin Decomposition Logic
//!
//! Given a number of coins and an amount of money, find how many pennies,
//! nickels, dimes and quarters make up exactly that many coins and exactly
//! that amount.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Coin Problem Architecture                          │
//! │                                                                         │
//! │  ┌──────────────────┐   ┌──────────────────┐   ┌──────────────────┐    │
//! │  │  coinproblem     │   │  player          │   │  referee         │    │
//! │  │  (CLI report)    │   │  (stdin/stdout)  │   │  (duel harness)  │    │
//! │  └────────┬─────────┘   └────────┬─────────┘   └────────┬─────────┘    │
//! │           │                      │                      │ spawns       │
//! │           │                      │◄─────────────────────┘ players      │
//! │           ▼                      ▼                                      │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │               ★ coin-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   money   │  │   types   │  │  solver   │  │ validation│  │   │
//! │  │   │   Money   │  │CoinCounts │  │  solve()  │  │ parse_*   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FLOATS IN THE PIPELINE • PURE FUNCTIONS          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type in whole cents (no floating point!)
//! - [`types`] - Denominations, coin counts, solve targets
//! - [`solver`] - The heuristic pipeline and its exhaustive fallback
//! - [`validation`] - Boundary parsing of counts and amounts
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use coin_core::{solve, Money};
//!
//! let counts = solve(1692, Money::from_cents(10054)).unwrap();
//! assert_eq!(counts.total_count(), 1692);
//! assert_eq!(counts.value(), Money::from_cents(10054));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod solver;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{SolveError, SolveResult, ValidationError};
pub use money::Money;
pub use solver::solve;
pub use types::{CoinCounts, Denomination, Target};
