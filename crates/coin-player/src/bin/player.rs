//! # Player
//!
//! Answers coin problems on stdin/stdout for the referee.
//!
//! ## Usage
//! ```bash
//! echo "1692,100.54" | cargo run -p coin-player --bin player
//! ```
//!
//! Diagnostics go to stderr; set `RUST_LOG=debug` to see why a request got
//! an empty answer.

use std::io;

use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    coin_player::session::run(stdin.lock(), stdout.lock())?;

    Ok(())
}
