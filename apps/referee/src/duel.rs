//! # Duel Engine
//!
//! ## Round Exchange
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  referee                              player                            │
//! │  ───────                              ──────                            │
//! │  "1692,100.54\n"  ───────────────►                                      │
//! │                   ◄───────────────  [noise] \0 {"pennies":4,...} \n     │
//! │                                                                         │
//! │  1. skip everything up to the NUL                                       │
//! │  2. read the body up to `}` (or a newline, for garbage bodies)          │
//! │  3. Answer::decode ── Err ──────────────────► Outcome::Error            │
//! │        │                                                                │
//! │        └── matches(target) ? Correct : Incorrect                        │
//! │                                                                         │
//! │  Repeats until the deadline, the round cap, or the player goes away.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! [`run_rounds`] works on any async reader/writer pair so it can be driven
//! by in-memory pipes; [`play`] wires it to a child process and the deadline.

use std::process::Stdio;
use std::time::Duration;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::process::Command;
use tracing::{debug, info, warn};

use coin_player::protocol::RESPONSE_MARKER;
use coin_player::Answer;

use crate::error::{RefereeError, RefereeResult};
use crate::inputs::InputSequence;
use crate::player::{Outcome, Player, PlayerStats};

/// Why a player's run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunEnd {
    /// The time budget ran out.
    Deadline,
    /// The configured number of rounds was played.
    RoundLimit,
    /// The player closed its output or stopped reading.
    PlayerGone,
}

/// Result of one player's run.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerReport {
    pub player: Player,
    pub stats: PlayerStats,
    pub end: RunEnd,
}

// =============================================================================
// Framing
// =============================================================================

/// Reads one response body, or `None` if the stream ended first.
pub async fn read_response<R>(reader: &mut R) -> std::io::Result<Option<String>>
where
    R: AsyncBufRead + Unpin,
{
    let mut skipped = Vec::new();
    let n = reader.read_until(RESPONSE_MARKER, &mut skipped).await?;
    if n == 0 || skipped.last() != Some(&RESPONSE_MARKER) {
        return Ok(None);
    }

    let mut body = Vec::new();
    loop {
        let available = reader.fill_buf().await?;
        if available.is_empty() {
            return Ok(None);
        }
        match available.iter().position(|&b| b == b'}' || b == b'\n') {
            Some(i) => {
                body.extend_from_slice(&available[..=i]);
                reader.consume(i + 1);
                break;
            }
            None => {
                let len = available.len();
                body.extend_from_slice(available);
                reader.consume(len);
            }
        }
    }

    Ok(Some(String::from_utf8_lossy(&body).into_owned()))
}

/// Scores one response body against the request it answers.
pub fn classify(body: &str, request: &coin_player::Request) -> Outcome {
    match Answer::decode(body) {
        Ok(answer) if answer.matches(request.target()) => Outcome::Correct,
        Ok(_) => Outcome::Incorrect,
        Err(_) => Outcome::Error,
    }
}

// =============================================================================
// Rounds
// =============================================================================

/// Plays rounds until the player goes away or `max_rounds` is reached.
///
/// Scores land in `stats` as each round completes, so a caller that cancels
/// this future (on a deadline, say) keeps everything scored so far.
pub async fn run_rounds<W, R>(
    writer: &mut W,
    reader: &mut R,
    inputs: &mut InputSequence,
    stats: &mut PlayerStats,
    max_rounds: Option<u64>,
) -> RunEnd
where
    W: AsyncWrite + Unpin,
    R: AsyncBufRead + Unpin,
{
    let mut rounds = 0u64;

    loop {
        if max_rounds.is_some_and(|max| rounds >= max) {
            return RunEnd::RoundLimit;
        }

        let request = inputs.next_request();
        debug!(count = request.count, amount = %request.amount, "sending input");

        let line = format!("{}\n", request.to_line());
        let sent = async {
            writer.write_all(line.as_bytes()).await?;
            writer.flush().await
        };
        if let Err(e) = sent.await {
            debug!(error = %e, "player stopped reading");
            return RunEnd::PlayerGone;
        }

        let body = match read_response(reader).await {
            Ok(Some(body)) => body,
            Ok(None) => return RunEnd::PlayerGone,
            Err(e) => {
                debug!(error = %e, "player output failed");
                return RunEnd::PlayerGone;
            }
        };

        let outcome = classify(&body, &request);
        if outcome != Outcome::Correct {
            debug!(?outcome, body = body.trim(), input = %request.target(), "answer rejected");
        }
        stats.record(outcome);
        rounds += 1;
    }
}

// =============================================================================
// Processes
// =============================================================================

/// Starts `player` and plays rounds against it until the deadline.
pub async fn play(
    player: &Player,
    inputs: &mut InputSequence,
    timeout: Duration,
    max_rounds: Option<u64>,
) -> RefereeResult<PlayerReport> {
    let (program, args) = player.argv()?;
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .kill_on_drop(true)
        .spawn()
        .map_err(|source| RefereeError::Spawn {
            command: player.command.clone(),
            source,
        })?;

    let mut stdin = child.stdin.take().ok_or(RefereeError::MissingPipe("stdin"))?;
    let stdout = child.stdout.take().ok_or(RefereeError::MissingPipe("stdout"))?;
    let mut reader = BufReader::new(stdout);

    let mut stats = PlayerStats::default();
    let end = match tokio::time::timeout(
        timeout,
        run_rounds(&mut stdin, &mut reader, inputs, &mut stats, max_rounds),
    )
    .await
    {
        Ok(end) => end,
        Err(_) => RunEnd::Deadline,
    };

    drop(stdin);
    if let Err(e) = child.kill().await {
        debug!(error = %e, "player already exited");
    }

    Ok(PlayerReport {
        player: player.clone(),
        stats,
        end,
    })
}

/// Runs every player in turn over the same input sequence.
///
/// A player that cannot be started is reported with a single error.
pub async fn run_duel(
    players: &[Player],
    inputs: &mut InputSequence,
    timeout: Duration,
    max_rounds: Option<u64>,
) -> Vec<PlayerReport> {
    let mut reports = Vec::with_capacity(players.len());

    for player in players {
        inputs.reset();
        info!(player = %player.label(), command = %player.command, "starting player");

        let report = match play(player, inputs, timeout, max_rounds).await {
            Ok(report) => report,
            Err(e) => {
                warn!(player = %player.label(), error = %e, "player did not run");
                let mut stats = PlayerStats::default();
                stats.record(Outcome::Error);
                PlayerReport {
                    player: player.clone(),
                    stats,
                    end: RunEnd::PlayerGone,
                }
            }
        };

        info!(
            player = %player.label(),
            rounds = report.stats.total(),
            end = ?report.end,
            "player finished"
        );
        reports.push(report);
    }

    reports
}

// =============================================================================
// Unit Tests
// =============================================================================
