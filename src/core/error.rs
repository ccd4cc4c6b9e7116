//! Engine error type.

use thiserror::Error;

use super::feedback::Feedback;
use super::secret::{MAX_SECRET, MIN_SECRET};

/// Errors reported by the guessing engine.
///
/// Only `InconsistentFeedback` can happen during normal play; the rest
/// reject malformed input at the edges (parsing, snapshots, setup).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    /// The player's hint contradicts what the engine knows about the secret.
    #[error("feedback contradicts the secret: it is not {feedback} than {guess}")]
    InconsistentFeedback { guess: i32, feedback: Feedback },

    /// Feedback was applied to a session that already found the secret.
    #[error("session is over: the secret was found in {rounds} rounds")]
    SessionOver { rounds: usize },

    #[error("secret {0} is outside {min}..={max}", min = MIN_SECRET, max = MAX_SECRET)]
    SecretOutOfRange(i32),

    /// Opening guess out of range, or equal to the secret.
    #[error("invalid opening guess {0}")]
    InvalidOpeningGuess(i32),

    #[error("unrecognized feedback {0:?}, expected \"lower\" or \"greater\"")]
    InvalidFeedback(String),

    #[error("unknown guess policy {0:?}")]
    InvalidPolicy(String),

    #[error("invalid session snapshot: {0}")]
    InvalidSnapshot(String),
}
