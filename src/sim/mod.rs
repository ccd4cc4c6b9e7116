//! Automated play for testing and policy comparison.
//!
//! - `Responder`: answers guesses on behalf of a player
//! - `Simulator`: runs complete games and aggregates round counts

pub mod responder;
pub mod simulator;

pub use responder::{Responder, ScriptedResponder, TruthfulResponder};
pub use simulator::{SimulationReport, Simulator};
