//! Guess policies: how the next guess is picked inside the current bounds.
//!
//! Policies are trait-based so callers can plug in their own:
//! - `UniformGuess`: uniform random pick, excluding the previous guess
//! - `BisectGuess`: midpoint pick, halving the remaining interval
//!
//! Every policy receives the inclusive bounds `[low, high]` and a value to
//! exclude. The caller guarantees at least one other candidate exists.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{GuessError, GuessRng};

/// Policy for choosing the next guess.
pub trait GuessPolicy: Send + Sync {
    /// Pick a value in `[low, high]` that is not `exclude`.
    fn pick(&self, rng: &mut GuessRng, low: i32, high: i32, exclude: i32) -> i32;
}

/// Uniform random policy.
///
/// Samples the whole interval and redraws on the excluded value.
#[derive(Clone, Copy, Debug, Default)]
pub struct UniformGuess;

impl GuessPolicy for UniformGuess {
    fn pick(&self, rng: &mut GuessRng, low: i32, high: i32, exclude: i32) -> i32 {
        rng.random_in_range_excluding(low, high, exclude)
    }
}

/// Binary search policy.
///
/// Picks the midpoint of the interval after trimming `exclude` off either
/// end. Finds any secret in `1..=100` within 7 rounds.
#[derive(Clone, Copy, Debug, Default)]
pub struct BisectGuess;

impl GuessPolicy for BisectGuess {
    fn pick(&self, _rng: &mut GuessRng, low: i32, high: i32, exclude: i32) -> i32 {
        assert!(
            low < high || (low == high && low != exclude),
            "no candidate in {low}..={high} excluding {exclude}"
        );

        let (mut lo, mut hi) = (low, high);
        if exclude == lo && lo < hi {
            lo += 1;
        } else if exclude == hi && lo < hi {
            hi -= 1;
        }

        let mid = lo + (hi - lo) / 2;
        if mid != exclude {
            mid
        } else if mid < hi {
            mid + 1
        } else {
            mid - 1
        }
    }
}

/// Built-in policy selector, for configuration files and the CLI.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyKind {
    #[default]
    Uniform,
    Bisect,
}

impl GuessPolicy for PolicyKind {
    fn pick(&self, rng: &mut GuessRng, low: i32, high: i32, exclude: i32) -> i32 {
        match self {
            PolicyKind::Uniform => UniformGuess.pick(rng, low, high, exclude),
            PolicyKind::Bisect => BisectGuess.pick(rng, low, high, exclude),
        }
    }
}

impl FromStr for PolicyKind {
    type Err = GuessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "uniform" | "random" => Ok(PolicyKind::Uniform),
            "bisect" | "binary" => Ok(PolicyKind::Bisect),
            other => Err(GuessError::InvalidPolicy(other.to_string())),
        }
    }
}

impl std::fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PolicyKind::Uniform => write!(f, "uniform"),
            PolicyKind::Bisect => write!(f, "bisect"),
        }
    }
}
