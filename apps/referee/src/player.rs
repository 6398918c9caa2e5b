//! Player handles and scoring.

use std::fmt;

use crate::error::{RefereeError, RefereeResult};

/// A player program, as given on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// Position on the command line, shown as `P0`, `P1`, ...
    pub index: usize,
    /// Command line; split on whitespace into program and arguments.
    pub command: String,
}

impl Player {
    pub fn new(index: usize, command: impl Into<String>) -> Self {
        Player {
            index,
            command: command.into(),
        }
    }

    /// Program and arguments.
    pub fn argv(&self) -> RefereeResult<(&str, Vec<&str>)> {
        let mut parts = self.command.split_whitespace();
        let program = parts.next().ok_or(RefereeError::EmptyCommand)?;
        Ok((program, parts.collect()))
    }

    pub fn label(&self) -> String {
        format!("P{}", self.index)
    }
}

/// How one answer was scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A valid decomposition of the requested count and amount.
    Correct,
    /// Well-formed, but the coins do not add up.
    Incorrect,
    /// Unreadable, or the `{}` sentinel.
    Error,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayerStats {
    pub correct: u64,
    pub incorrect: u64,
    pub error: u64,
}

impl PlayerStats {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Correct => self.correct += 1,
            Outcome::Incorrect => self.incorrect += 1,
            Outcome::Error => self.error += 1,
        }
    }

    pub fn total(&self) -> u64 {
        self.correct + self.incorrect + self.error
    }

    /// Share of answers that were correct, in percent.
    pub fn success_rate(&self) -> f64 {
        match self.total() {
            0 => 0.0,
            total => self.correct as f64 * 100.0 / total as f64,
        }
    }
}

impl fmt::Display for PlayerStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "correct: {}, incorrect: {}, errors: {}, success rate: {:.2}%",
            self.correct,
            self.incorrect,
            self.error,
            self.success_rate()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argv() {
        let player = Player::new(0, "python3  my_player.py --fast");
        let (program, args) = player.argv().unwrap();
        assert_eq!(program, "python3");
        assert_eq!(args, vec!["my_player.py", "--fast"]);
        assert_eq!(player.label(), "P0");

        assert!(matches!(Player::new(1, "   ").argv(), Err(RefereeError::EmptyCommand)));
    }

    #[test]
    fn test_stats() {
        let mut stats = PlayerStats::default();
        assert_eq!(stats.success_rate(), 0.0);

        for _ in 0..3 {
            stats.record(Outcome::Correct);
        }
        stats.record(Outcome::Error);
        assert_eq!(stats.total(), 4);
        assert_eq!(stats.success_rate(), 75.0);
        assert_eq!(
            stats.to_string(),
            "correct: 3, incorrect: 0, errors: 1, success rate: 75.00%"
        );
    }
}
