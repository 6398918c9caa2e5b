//! # Protocol Messages
//!
//! ## Message Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  REFEREE                         PLAYER                                 │
//! │  ───────                         ──────                                 │
//! │  Request::to_line() ──────────►  Request::parse()                       │
//! │                                      │                                  │
//! │                                      ▼                                  │
//! │                                  coin_core::solve()                     │
//! │                                      │                                  │
//! │  Answer::decode()   ◄──────────  Response::encode()                     │
//! │      │                                                                  │
//! │      ▼                                                                  │
//! │  Answer::matches(target) → correct / incorrect                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Deserialize;
use std::io::{self, Write};

use coin_core::validation::{parse_count, validate_count};
use coin_core::{CoinCounts, Denomination, Money, Target};

use crate::error::{ProtocolError, ProtocolResult};

/// Marks the start of every response.
pub const RESPONSE_MARKER: u8 = b'\0';

/// Body sent when there is no answer to give.
pub const EMPTY_BODY: &str = "{}";

// =============================================================================
// Request
// =============================================================================

/// One coin problem: `count` coins worth `amount`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Request {
    pub count: u32,
    pub amount: Money,
}

#[derive(Deserialize)]
struct JsonRequest {
    count: i64,
    amount: f64,
}

impl Request {
    pub fn new(count: u32, amount: Money) -> Self {
        Request { count, amount }
    }

    /// Parses a request line in either wire form.
    ///
    /// ## Example
    /// ```rust
    /// use coin_player::Request;
    ///
    /// let csv = Request::parse("1692,100.54").unwrap();
    /// let json = Request::parse(r#"{"count": 1692, "amount": 100.54}"#).unwrap();
    /// assert_eq!(csv, json);
    /// assert_eq!(csv.amount.cents(), 10054);
    /// ```
    pub fn parse(line: &str) -> ProtocolResult<Request> {
        let line = line.trim();

        if line.starts_with('{') {
            let request: JsonRequest = serde_json::from_str(line)?;
            return Ok(Request {
                count: validate_count(request.count)?,
                amount: Money::from_dollars(request.amount)?,
            });
        }

        let (count, amount) = line
            .split_once(',')
            .ok_or_else(|| ProtocolError::Malformed(format!("expected `count,amount`, got {line:?}")))?;

        Ok(Request {
            count: parse_count(count)?,
            amount: Money::parse_dollars(amount)?,
        })
    }

    /// Renders the `count,amount` line form (without the newline).
    pub fn to_line(&self) -> String {
        format!("{},{}.{:02}", self.count, self.amount.dollars(), self.amount.cents_part())
    }

    pub fn target(&self) -> Target {
        Target::new(self.count, self.amount)
    }
}

// =============================================================================
// Response
// =============================================================================

/// What a player sends back for one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Response {
    Solved(CoinCounts),
    /// No solution, or the request could not be understood.
    Empty,
}

impl Response {
    /// Frames the response: NUL, compact JSON, newline.
    pub fn encode(&self) -> String {
        let body = match self {
            Response::Solved(counts) => {
                serde_json::to_string(counts).unwrap_or_else(|_| EMPTY_BODY.to_string())
            }
            Response::Empty => EMPTY_BODY.to_string(),
        };
        format!("{}{}\n", RESPONSE_MARKER as char, body)
    }

    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(self.encode().as_bytes())?;
        writer.flush()
    }
}

// =============================================================================
// Answer (referee side)
// =============================================================================

/// A response body as the referee reads it.
///
/// Fields are signed so that a protocol-valid but nonsensical answer (a
/// negative count) decodes and is scored as incorrect. A body missing any
/// field, such as the `{}` sentinel, fails to decode and is scored as an
/// error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Answer {
    pub pennies: i64,
    pub nickels: i64,
    pub dimes: i64,
    pub quarters: i64,
}

impl Answer {
    pub fn decode(body: &str) -> ProtocolResult<Answer> {
        Ok(serde_json::from_str(body.trim())?)
    }

    fn fields(&self) -> [(i64, Denomination); 4] {
        [
            (self.pennies, Denomination::Penny),
            (self.nickels, Denomination::Nickel),
            (self.dimes, Denomination::Dime),
            (self.quarters, Denomination::Quarter),
        ]
    }

    pub fn total_count(&self) -> i128 {
        self.fields().iter().map(|&(n, _)| i128::from(n)).sum()
    }

    pub fn value_cents(&self) -> i128 {
        self.fields()
            .iter()
            .map(|&(n, d)| i128::from(n) * i128::from(d.cents()))
            .sum()
    }

    /// True when every count is non-negative and both totals hit the target.
    pub fn matches(&self, target: Target) -> bool {
        self.fields().iter().all(|&(n, _)| n >= 0)
            && self.total_count() == i128::from(target.count)
            && self.value_cents() == i128::from(target.amount.cents())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
