//! The guessing engine and its policies.
//!
//! `GuessEngine` owns configuration and a `GuessPolicy`; sessions carry
//! all per-game state. The engine calls into the policy for every guess
//! but never interprets the bounds beyond narrowing them.

pub mod config;
pub mod guess_engine;
pub mod policy;

pub use config::EngineConfig;
pub use guess_engine::GuessEngine;
pub use policy::{BisectGuess, GuessPolicy, PolicyKind, UniformGuess};
