//! # guess-engine
//!
//! The engine behind a "guess the number" game: the player picks a secret
//! in `1..=100`, the device guesses, and each "lower"/"greater" hint
//! narrows the search interval until the secret is found.
//!
//! ## Design Principles
//!
//! 1. **Sessions are values**: `GuessEngine::apply_feedback` takes a
//!    session by reference and returns the next one. The engine keeps no
//!    per-game state; `im` makes the history clone O(1).
//!
//! 2. **Deterministic**: every session owns a seeded ChaCha8 stream, so a
//!    seed plus a list of hints replays a game exactly.
//!
//! 3. **Hints are checked**: a hint that contradicts the secret is
//!    rejected with `GuessError::InconsistentFeedback` and nothing changes.
//!
//! ## Modules
//!
//! - `core`: Secret, feedback, session, RNG, summary, errors
//! - `engine`: GuessEngine, configuration, guess policies
//! - `sim`: Automated responders and batch simulation
//!
//! ## Example
//!
//! ```
//! use guess_engine::{EngineConfig, Feedback, GuessEngine, PolicyKind, Secret};
//!
//! let engine = GuessEngine::new(EngineConfig::default().with_seed(7).with_policy(PolicyKind::Bisect));
//! let secret = Secret::new(42).unwrap();
//! let mut session = engine.start_session(secret);
//!
//! while !session.is_won() {
//!     let hint = if session.current_guess() > 42 { Feedback::Lower } else { Feedback::Greater };
//!     session = engine.apply_feedback(&session, hint).unwrap();
//! }
//!
//! assert!(session.round_count() <= 7);
//! ```

pub mod core;
pub mod engine;
pub mod sim;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Feedback, GameSummary, GuessError, GuessRng, GuessRngState, HistoryEntry, Outcome, Secret, Session,
    SessionSnapshot, MAX_SECRET, MIN_SECRET,
};

pub use crate::engine::{BisectGuess, EngineConfig, GuessEngine, GuessPolicy, PolicyKind, UniformGuess};

pub use crate::sim::{Responder, ScriptedResponder, SimulationReport, Simulator, TruthfulResponder};
