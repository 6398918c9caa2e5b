//! # coin-referee: Duel Harness
//!
//! Scores player programs on a shared stream of random coin problems.
//!
//! ## Modules
//! - [`config`] - Timeout, input ranges, seed (env + CLI)
//! - [`inputs`] - Seeded, replayable input sequence
//! - [`player`] - Player handles and per-player statistics
//! - [`duel`] - Round exchange, framing, process management
//! - [`error`] - `RefereeError`

pub mod config;
pub mod duel;
pub mod error;
pub mod inputs;
pub mod player;

pub use config::{ConfigError, Overrides, RefereeConfig};
pub use duel::{run_duel, run_rounds, PlayerReport, RunEnd};
pub use error::{RefereeError, RefereeResult};
pub use inputs::InputSequence;
pub use player::{Outcome, Player, PlayerStats};
