//! Core engine types: secret, feedback, session, RNG, errors.
//!
//! Everything here is policy-agnostic. The `engine` module decides how
//! guesses are picked; this module only holds and validates state.

pub mod error;
pub mod feedback;
pub mod rng;
pub mod secret;
pub mod session;
pub mod summary;

pub use error::GuessError;
pub use feedback::Feedback;
pub use rng::{GuessRng, GuessRngState};
pub use secret::{Secret, MAX_SECRET, MIN_SECRET};
pub use session::{Outcome, Session, SessionSnapshot};
pub use summary::{GameSummary, HistoryEntry};
