//! # Player Session Loop
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  read line ──► Request::parse ──► solve ──► Response::Solved ──► write │
//! │      │               │              │                                   │
//! │      │           malformed      no solution                             │
//! │      │               └──────┬───────┘                                   │
//! │      │                      ▼                                           │
//! │      │               Response::Empty ─────────────────────────► write  │
//! │      │                                                                  │
//! │   EOF / read error ──► Response::Empty ──► stop                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A bad request costs one `\0{}` and nothing more: the loop keeps going so
//! the referee can score it as an error and move on.

use std::io::{self, BufRead, Read, Write};

use tracing::{debug, warn};

use crate::protocol::{Request, Response};

/// Tally of one session, for logging.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub requests: u64,
    pub solved: u64,
    pub empty: u64,
}

/// Longest request line accepted; anything longer is answered with `{}`.
pub const MAX_REQUEST_BYTES: usize = 1024;

enum RequestLine<'a> {
    Text(&'a str),
    TooLong,
    NotUtf8,
}

/// Reads one line into `buf`, never buffering more than
/// [`MAX_REQUEST_BYTES`]. The tail of an overlong line is discarded up to
/// its newline. `None` at end of input.
fn read_request<'a, R: BufRead>(reader: &mut R, buf: &'a mut Vec<u8>) -> io::Result<Option<RequestLine<'a>>> {
    buf.clear();
    let limit = MAX_REQUEST_BYTES as u64 + 1;
    if reader.by_ref().take(limit).read_until(b'\n', buf)? == 0 {
        return Ok(None);
    }

    if buf.len() > MAX_REQUEST_BYTES && buf.last() != Some(&b'\n') {
        discard_line(reader)?;
        return Ok(Some(RequestLine::TooLong));
    }

    Ok(Some(match std::str::from_utf8(buf) {
        Ok(text) => RequestLine::Text(text),
        Err(_) => RequestLine::NotUtf8,
    }))
}

fn discard_line<R: BufRead>(reader: &mut R) -> io::Result<()> {
    loop {
        let available = reader.fill_buf()?;
        if available.is_empty() {
            return Ok(());
        }
        match available.iter().position(|&b| b == b'\n') {
            Some(i) => {
                reader.consume(i + 1);
                return Ok(());
            }
            None => {
                let len = available.len();
                reader.consume(len);
            }
        }
    }
}

/// Answers a single request line.
pub fn respond(line: &str) -> Response {
    let request = match Request::parse(line) {
        Ok(request) => request,
        Err(e) => {
            warn!(error = %e, line, "rejecting request");
            return Response::Empty;
        }
    };

    match coin_core::solve(request.count, request.amount) {
        Ok(counts) => Response::Solved(counts),
        Err(e) => {
            debug!(error = %e, "no answer");
            Response::Empty
        }
    }
}

/// Serves requests from `reader` until it is exhausted or fails, writing one
/// response per request to `writer`, then the closing `\0{}`.
///
/// Only a failure to *write* is returned as an error: with the output
/// channel gone there is nobody left to answer.
pub fn run<R: BufRead, W: Write>(mut reader: R, mut writer: W) -> io::Result<SessionSummary> {
    let mut summary = SessionSummary::default();
    let mut buf = Vec::new();

    loop {
        let line = match read_request(&mut reader, &mut buf) {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                warn!(error = %e, "input failed, closing session");
                break;
            }
        };

        summary.requests += 1;
        let response = match line {
            RequestLine::Text(text) => respond(text),
            RequestLine::TooLong => {
                warn!(limit = MAX_REQUEST_BYTES, "request line too long");
                Response::Empty
            }
            RequestLine::NotUtf8 => {
                warn!("request is not UTF-8");
                Response::Empty
            }
        };

        match response {
            Response::Solved(_) => summary.solved += 1,
            Response::Empty => summary.empty += 1,
        }
        response.write_to(&mut writer)?;
    }

    Response::Empty.write_to(&mut writer)?;
    debug!(?summary, "session closed");
    Ok(summary)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_lines(input: &[u8]) -> (String, SessionSummary) {
        let mut out = Vec::new();
        let summary = run(Cursor::new(input), &mut out).unwrap();
        (String::from_utf8(out).unwrap(), summary)
    }

    #[test]
    fn test_answers_each_line_then_closes() {
        let (out, summary) = run_lines(b"3,0.03\n{\"count\": 1, \"amount\": 0.25}\n");
        assert_eq!(
            out,
            "\0{\"pennies\":3,\"nickels\":0,\"dimes\":0,\"quarters\":0}\n\
             \0{\"pennies\":0,\"nickels\":0,\"dimes\":0,\"quarters\":1}\n\
             \0{}\n"
        );
        assert_eq!(summary, SessionSummary { requests: 2, solved: 2, empty: 0 });
    }

    #[test]
    fn test_bad_requests_do_not_end_the_session() {
        let (out, summary) = run_lines(b"garbage\n5,1.30\n\xff\xfe\n3,0.03");
        let frames: Vec<&str> = out.split('\0').skip(1).collect();
        assert_eq!(frames.len(), 5);
        assert_eq!(frames[0], "{}\n");
        assert_eq!(frames[1], "{}\n");
        assert_eq!(frames[2], "{}\n");
        assert!(frames[3].starts_with("{\"pennies\":3"));
        assert_eq!(frames[4], "{}\n");
        assert_eq!(summary, SessionSummary { requests: 4, solved: 1, empty: 3 });
    }

    #[test]
    fn test_overlong_line_is_answered_empty_and_skipped() {
        let mut input = vec![b'7'; 10 * MAX_REQUEST_BYTES];
        input.extend_from_slice(b",0.01\n3,0.03\n");
        let (out, summary) = run_lines(&input);
        let frames: Vec<&str> = out.split('\0').skip(1).collect();
        assert_eq!(frames.len(), 3);
        assert_eq!(frames[0], "{}\n");
        assert!(frames[1].starts_with("{\"pennies\":3"));
        assert_eq!(summary, SessionSummary { requests: 2, solved: 1, empty: 1 });
    }

    #[test]
    fn test_line_at_the_limit_is_accepted() {
        let mut input = vec![b' '; MAX_REQUEST_BYTES - b"3,0.03\n".len()];
        input.extend_from_slice(b"3,0.03\n");
        let (_, summary) = run_lines(&input);
        assert_eq!(summary.solved, 1);
    }

    #[test]
    fn test_large_unsolvable_request_answers_quickly() {
        let (out, summary) = run_lines(b"100000,1000.01\n");
        assert_eq!(out, "\0{}\n\0{}\n");
        assert_eq!(summary, SessionSummary { requests: 1, solved: 0, empty: 1 });
    }

    #[test]
    fn test_empty_input_still_closes() {
        let (out, summary) = run_lines(b"");
        assert_eq!(out, "\0{}\n");
        assert_eq!(summary, SessionSummary::default());
    }

    #[test]
    fn test_respond() {
        assert_eq!(respond("0,0"), Response::Solved(coin_core::CoinCounts::default()));
        assert_eq!(respond("5,0.04"), Response::Empty);
    }
}
