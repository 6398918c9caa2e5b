//! # coin-player: Player Protocol
//!
//! A player is a child process that answers coin problems one line at a
//! time. This crate holds both sides of that conversation: request parsing
//! and response framing for the player, and answer decoding for the referee.
//!
//! ## Wire Format
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  referee ──► player   one request per line, either form:               │
//! │                         1692,100.54                                     │
//! │                         {"count": 1692, "amount": 100.54}               │
//! │                                                                         │
//! │  player ──► referee   NUL byte, then a compact JSON object:            │
//! │                         \0{"pennies":4,"nickels":1366,"dimes":322,...}  │
//! │                         \0{}            (no answer / bad request)       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//! - [`protocol`] - `Request`, `Response`, `Answer`
//! - [`session`] - The blocking request/response loop
//! - [`error`] - `ProtocolError`

pub mod error;
pub mod protocol;
pub mod session;

pub use error::{ProtocolError, ProtocolResult};
pub use protocol::{Answer, Request, Response};
