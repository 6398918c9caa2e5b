//! # Error Types
//!
//! Domain-specific error types for coin-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  coin-core errors (this file)                                          │
//! │  ├── SolveError       - No coin combination exists                     │
//! │  └── ValidationError  - Count/amount rejected at the boundary          │
//! │                                                                         │
//! │  coin-player errors (separate crate)                                   │
//! │  └── ProtocolError    - Malformed request line                         │
//! │                                                                         │
//! │  referee errors (app)                                                  │
//! │  └── RefereeError     - Spawn / pipe / deadline failures               │
//! │                                                                         │
//! │  Flow: ValidationError → ProtocolError → "\0{}" sentinel on the wire   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The solver itself has exactly two outcomes: a valid [`CoinCounts`] or
//! [`SolveError::NoSolution`]. Negative or mismatched intermediate counts
//! are never surfaced; they only trigger the fallback search.
//!
//! [`CoinCounts`]: crate::types::CoinCounts

use thiserror::Error;

use crate::money::Money;

// =============================================================================
// Solve Error
// =============================================================================

/// Outcome of a `solve` call that found no coin combination.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    /// No combination of the four denominations has exactly `count` coins
    /// worth exactly `amount`.
    ///
    /// ## When This Occurs
    /// - `amount` is below `count` cents (even all pennies is too much)
    /// - `amount` is above `25 * count` cents (even all quarters is too little)
    /// - The exhaustive search ran dry inside that range, e.g. 4 coins / 10¢
    #[error("No solution for {count} coins totalling {amount}")]
    NoSolution { count: u32, amount: Money },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors raised while converting external input into
/// integer counts and cents.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Invalid format (non-digit characters, stray separators, NaN).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value does not fit the integer type used by the solver.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: u64, max: u64 },

    /// Counts and amounts are never negative.
    #[error("{field} must not be negative")]
    Negative { field: String },
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for solver results.
pub type SolveResult<T> = Result<T, SolveError>;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================
