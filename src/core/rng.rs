//! Deterministic random number generation for guessing sessions.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical guesses
//! - **Forkable**: Derive independent streams for simulated games
//! - **Serializable**: O(1) state capture and restore for snapshots
//! - **Exclusion sampling**: Draw from a closed interval while skipping one value
//!
//! ## Usage
//!
//! ```
//! use guess_engine::core::GuessRng;
//!
//! let mut rng = GuessRng::new(42);
//!
//! // Never returns the excluded value
//! let guess = rng.random_in_range_excluding(1, 100, 42);
//! assert!((1..=100).contains(&guess));
//! assert_ne!(guess, 42);
//!
//! // Forks are deterministic - same fork counter = same sequence
//! let mut a = GuessRng::new(7);
//! let mut b = GuessRng::new(7);
//! assert_eq!(a.fork().gen_inclusive(1, 100), b.fork().gen_inclusive(1, 100));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Deterministic RNG backing a single guessing session.
///
/// Uses ChaCha8 for speed while keeping a reproducible word position,
/// so a session can be captured and resumed mid-game.
#[derive(Clone, Debug)]
pub struct GuessRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GuessRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Create an RNG seeded from the thread-local entropy source.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }

    /// Generate a uniformly distributed integer in `[min, max]`.
    ///
    /// # Panics
    ///
    /// Panics if `min > max`.
    pub fn gen_inclusive(&mut self, min: i32, max: i32) -> i32 {
        assert!(min <= max, "empty range {min}..={max}");
        self.inner.gen_range(min..=max)
    }

    /// Generate a uniformly distributed integer in `[min, max]` that is not `exclude`.
    ///
    /// Samples are drawn until one differs from `exclude`.
    ///
    /// # Panics
    ///
    /// The interval must hold at least one value other than `exclude`:
    /// `min < max`, or `min == max` with `min != exclude`. Anything else
    /// would never terminate and is treated as a contract violation.
    pub fn random_in_range_excluding(&mut self, min: i32, max: i32, exclude: i32) -> i32 {
        assert!(
            min < max || (min == max && min != exclude),
            "no candidate in {min}..={max} excluding {exclude}"
        );

        loop {
            let candidate = self.inner.gen_range(min..=max);
            if candidate != exclude {
                return candidate;
            }
        }
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GuessRngState {
        GuessRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            fork_counter: self.fork_counter,
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GuessRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
            fork_counter: state.fork_counter,
        }
    }
}

/// Serializable RNG state for session snapshots.
///
/// Uses ChaCha8 word position for O(1) serialization regardless of
/// how many guesses have been drawn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
    /// Fork counter for deterministic branching
    pub fork_counter: u64,
}
