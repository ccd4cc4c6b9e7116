//! Game-over summary and numbered history rows.

use serde::{Deserialize, Serialize};

/// One row of the guess history.
///
/// Rounds are numbered from 1 in play order; the history is listed
/// most-recent-first, so the first entry carries the highest round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub round: usize,
    pub guess: i32,
}

impl std::fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:<4}{}", self.round, self.guess)
    }
}

/// Result of a finished game, handed to the game-over surface.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    /// The number the player picked.
    pub secret: i32,

    /// Rounds needed, including the opening guess.
    pub rounds: usize,

    /// Every guess in play order (oldest first).
    pub guesses: Vec<i32>,
}

impl std::fmt::Display for GameSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let noun = if self.rounds == 1 { "round" } else { "rounds" };
        write!(
            f,
            "The device needed {} {} to guess the number {}.",
            self.rounds, noun, self.secret
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_display() {
        let summary = GameSummary {
            secret: 42,
            rounds: 5,
            guesses: vec![17, 60, 30, 45, 42],
        };
        assert_eq!(summary.to_string(), "The device needed 5 rounds to guess the number 42.");
    }

    #[test]
    fn test_history_entry_display() {
        let entry = HistoryEntry { round: 3, guess: 58 };
        assert_eq!(entry.to_string(), "#3   58");
    }
}
