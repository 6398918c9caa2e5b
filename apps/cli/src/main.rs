//! # coinproblem
//!
//! Solves a single coin problem and prints the report.
//!
//! ## Usage
//! ```bash
//! coinproblem                       # 1,692 coins worth $100.54
//! coinproblem -c 6 -a 0.56
//! RUST_LOG=debug coinproblem -c 4 -a 0.10
//! ```
//!
//! ## Output
//! ```text
//! Total Coin Count:  1,692
//! Total Coin Amount: $100.54
//!
//! Pennies: 4
//! Nickels: 1,366
//! Dimes:   322
//! Quarters:0
//!
//! Solved Coin Count: 1,692
//! Solved Coin Amount: $100.54
//! ```

use std::fmt::Write as _;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use coin_core::{solve, CoinCounts, Denomination, Money, Target};

#[derive(Parser, Debug)]
#[command(name = "coinproblem", version, about = "Find coins that add up to a count and an amount")]
struct Cli {
    /// Number of coins
    #[arg(short = 'c', long = "total-coin-count", default_value_t = 1692)]
    total_coin_count: u32,

    /// Amount in dollars, e.g. 100.54
    #[arg(short = 'a', long = "total-coin-amount", default_value = "100.54")]
    total_coin_amount: String,

    /// Log solver decisions to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let amount = Money::parse_dollars(&cli.total_coin_amount)
        .with_context(|| format!("invalid amount {:?}", cli.total_coin_amount))?;
    let target = Target::new(cli.total_coin_count, amount);

    let solution = solve(target.count, target.amount).ok();
    print!("{}", render(target, solution.as_ref()));

    Ok(())
}

// =============================================================================
// Report
// =============================================================================

fn render(target: Target, solution: Option<&CoinCounts>) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = writeln!(out, "{:<18} {}", "Total Coin Count:", thousands(u64::from(target.count)));
    let _ = writeln!(out, "{:<18} {}", "Total Coin Amount:", target.amount);
    let _ = writeln!(out);

    let Some(counts) = solution else {
        let _ = writeln!(out, "No solution");
        return out;
    };

    for denomination in Denomination::ALL {
        let label = format!("{}:", capitalize(denomination.plural()));
        let _ = writeln!(out, "{label:<9}{}", thousands(u64::from(counts.get(denomination))));
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{:<18} {}", "Solved Coin Count:", thousands(counts.total_count()));
    let _ = writeln!(out, "{:<18} {}", "Solved Coin Amount:", counts.value());
    out
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `1234567` → `"1,234,567"`.
fn thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thousands() {
        assert_eq!(thousands(0), "0");
        assert_eq!(thousands(999), "999");
        assert_eq!(thousands(1000), "1,000");
        assert_eq!(thousands(1692), "1,692");
        assert_eq!(thousands(1234567), "1,234,567");
    }

    #[test]
    fn test_default_report() {
        let target = Target::new(1692, Money::from_cents(10054));
        let counts = solve(target.count, target.amount).unwrap();
        assert_eq!(
            render(target, Some(&counts)),
            "Total Coin Count:  1,692\n\
             Total Coin Amount: $100.54\n\
             \n\
             Pennies: 4\n\
             Nickels: 1,366\n\
             Dimes:   322\n\
             Quarters:0\n\
             \n\
             Solved Coin Count: 1,692\n\
             Solved Coin Amount: $100.54\n"
        );
    }

    #[test]
    fn test_no_solution_report() {
        let target = Target::new(4, Money::from_cents(10));
        assert!(solve(target.count, target.amount).is_err());
        assert_eq!(
            render(target, None),
            "Total Coin Count:  4\nTotal Coin Amount: $0.10\n\nNo solution\n"
        );
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["coinproblem"]);
        assert_eq!(cli.total_coin_count, 1692);
        assert_eq!(cli.total_coin_amount, "100.54");

        let cli = Cli::parse_from(["coinproblem", "-c", "6", "-a", "0.56"]);
        assert_eq!(cli.total_coin_count, 6);
        assert_eq!(Money::parse_dollars(&cli.total_coin_amount).unwrap().cents(), 56);
    }
}
