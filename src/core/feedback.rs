//! Player feedback about the current guess.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::GuessError;

/// Direction of the secret relative to the current guess.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Feedback {
    /// The secret is lower than the current guess.
    Lower,
    /// The secret is greater than the current guess.
    Greater,
}

impl Feedback {
    /// Would this hint be truthful for `guess` given `secret`?
    ///
    /// A guess equal to the secret accepts either hint; the engine
    /// refuses feedback on a won session before it gets here.
    #[must_use]
    pub fn is_consistent(self, guess: i32, secret: i32) -> bool {
        match self {
            Feedback::Lower => guess >= secret,
            Feedback::Greater => guess <= secret,
        }
    }

    /// The truthful hint for `guess`, or `None` when it hits the secret.
    #[must_use]
    pub fn truthful(guess: i32, secret: i32) -> Option<Self> {
        match guess.cmp(&secret) {
            std::cmp::Ordering::Greater => Some(Feedback::Lower),
            std::cmp::Ordering::Less => Some(Feedback::Greater),
            std::cmp::Ordering::Equal => None,
        }
    }
}

impl FromStr for Feedback {
    type Err = GuessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lower" | "l" | "-" => Ok(Feedback::Lower),
            "greater" | "g" | "+" => Ok(Feedback::Greater),
            _ => Err(GuessError::InvalidFeedback(s.to_string())),
        }
    }
}

impl std::fmt::Display for Feedback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Feedback::Lower => write!(f, "lower"),
            Feedback::Greater => write!(f, "greater"),
        }
    }
}
