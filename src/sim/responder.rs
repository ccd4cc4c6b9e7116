//! Automated players that answer the engine's guesses.

use crate::core::{Feedback, Session};

/// Answers each guess with a hint.
pub trait Responder {
    /// Hint for the session's current guess. Only called while the
    /// session is still in play.
    fn respond(&mut self, session: &Session) -> Feedback;
}

/// Always tells the truth about `secret`.
#[derive(Clone, Copy, Debug)]
pub struct TruthfulResponder {
    secret: i32,
}

impl TruthfulResponder {
    #[must_use]
    pub fn new(secret: i32) -> Self {
        Self { secret }
    }
}

impl Responder for TruthfulResponder {
    fn respond(&mut self, session: &Session) -> Feedback {
        if session.current_guess() > self.secret {
            Feedback::Lower
        } else {
            Feedback::Greater
        }
    }
}

/// Replays a fixed list of hints, then repeats the last one.
///
/// Useful for scripted games and for exercising the rejection path.
#[derive(Clone, Debug)]
pub struct ScriptedResponder {
    hints: Vec<Feedback>,
    next: usize,
}

impl ScriptedResponder {
    /// # Panics
    ///
    /// Panics if `hints` is empty.
    #[must_use]
    pub fn new(hints: Vec<Feedback>) -> Self {
        assert!(!hints.is_empty(), "script needs at least one hint");
        Self { hints, next: 0 }
    }
}

impl Responder for ScriptedResponder {
    fn respond(&mut self, _session: &Session) -> Feedback {
        let index = self.next.min(self.hints.len() - 1);
        self.next += 1;
        self.hints[index]
    }
}
