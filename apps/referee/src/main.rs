//! # Referee
//!
//! ## Usage
//! ```bash
//! referee ./target/release/player "python3 other_player.py" --timeout 9 --min 1 --max 5
//! ```
//!
//! Every player gets the same inputs in the same order and the same time
//! budget. Settings also come from `COIN_REFEREE_*` environment variables;
//! flags win.

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use coin_referee::{run_duel, InputSequence, Overrides, Player, RefereeConfig, RefereeError};

#[derive(Parser, Debug)]
#[command(name = "referee", version, about = "Pits coin problem players against each other")]
struct Cli {
    /// Player programs to run, one command line each
    #[arg(required = true)]
    players: Vec<String>,

    /// Seconds each player gets
    #[arg(short, long)]
    timeout: Option<u64>,

    /// Minimum coins per coin type in an input
    #[arg(long = "min", value_name = "COUNT")]
    min_count: Option<u32>,

    /// Maximum coins per coin type in an input
    #[arg(long = "max", value_name = "COUNT")]
    max_count: Option<u32>,

    /// Seed for the input sequence
    #[arg(long)]
    seed: Option<u64>,

    /// Stop each player after this many rounds
    #[arg(long)]
    rounds: Option<u64>,

    /// Log every rejected answer
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            timeout_secs: self.timeout,
            min_count: self.min_count,
            max_count: self.max_count,
            seed: self.seed,
            max_rounds: self.rounds,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let config = RefereeConfig::from_env()
        .map_err(RefereeError::from)
        .and_then(|config| config.with_overrides(cli.overrides()))
        .context("loading referee settings")?;

    let players: Vec<Player> = cli
        .players
        .iter()
        .enumerate()
        .map(|(i, command)| Player::new(i, command.as_str()))
        .collect();

    for player in &players {
        println!("{}: {}", player.label(), player.command);
    }
    println!();
    println!("min count per coin type: {}", config.min_count);
    println!("max count per coin type: {}", config.max_count);
    println!("timeout per player: {} s", config.timeout.as_secs());
    println!();

    let seed = config.seed.unwrap_or_else(rand::random);
    info!(seed, "generating inputs");
    let mut inputs = InputSequence::new(config.min_count..=config.max_count, seed);

    let reports = tokio::select! {
        reports = run_duel(&players, &mut inputs, config.timeout, config.max_rounds) => reports,
        _ = tokio::signal::ctrl_c() => {
            println!();
            println!("Interrupted");
            return Ok(());
        }
    };

    for report in &reports {
        println!("{}: {}", report.player.label(), report.stats);
    }
    println!();
    println!("inputs generated: {}", inputs.len());

    Ok(())
}
