//! Session state for one playthrough.
//!
//! A `Session` is a plain value: the engine never mutates one in place.
//! Each feedback call returns a fresh session, and the `im` history makes
//! that clone O(1).
//!
//! ## Invariants
//!
//! - `MIN_SECRET <= low <= high <= MAX_SECRET`
//! - `low <= secret <= high`
//! - `low <= current_guess <= candidate_high() <= high`
//! - `history[0] == current_guess`, and `history.len()` is the round count
//! - no guess appears twice in `history`
//!
//! After a "lower" hint `high` is set to the rejected guess itself, so that
//! value stays in the bounds but is ruled out: guesses are drawn from
//! `low..=candidate_high()`, which excludes it.

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::error::GuessError;
use super::feedback::Feedback;
use super::rng::{GuessRng, GuessRngState};
use super::secret::{Secret, MAX_SECRET, MIN_SECRET};
use super::summary::{GameSummary, HistoryEntry};

/// Where a session stands after its latest guess.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The current guess is not the secret yet.
    Continuing,
    /// The current guess is the secret.
    Won { rounds: usize },
}

impl Outcome {
    #[must_use]
    pub fn is_won(self) -> bool {
        matches!(self, Outcome::Won { .. })
    }
}

/// One game's state: secret, bounds, current guess, history and RNG stream.
#[derive(Clone, Debug)]
pub struct Session {
    secret: Secret,
    low: i32,
    high: i32,
    /// `high` came from a "lower" hint and cannot be the secret.
    high_ruled_out: bool,
    current_guess: i32,
    /// Most recent guess first.
    history: Vector<i32>,
    rng: GuessRng,
}

impl Session {
    /// Open a session over the full range with the given first guess.
    pub(crate) fn open(secret: Secret, opening_guess: i32, rng: GuessRng) -> Self {
        debug_assert!((MIN_SECRET..=MAX_SECRET).contains(&opening_guess));

        Self {
            secret,
            low: MIN_SECRET,
            high: MAX_SECRET,
            high_ruled_out: false,
            current_guess: opening_guess,
            history: Vector::unit(opening_guess),
            rng,
        }
    }

    /// Lower search bound (inclusive).
    #[must_use]
    pub fn low(&self) -> i32 {
        self.low
    }

    /// Upper search bound (inclusive).
    #[must_use]
    pub fn high(&self) -> i32 {
        self.high
    }

    /// Largest value the secret can still be.
    #[must_use]
    pub fn candidate_high(&self) -> i32 {
        if self.high_ruled_out {
            self.high - 1
        } else {
            self.high
        }
    }

    /// How many values the secret can still take, current guess included.
    #[must_use]
    pub fn remaining(&self) -> usize {
        (self.candidate_high() - self.low + 1) as usize
    }

    #[must_use]
    pub fn current_guess(&self) -> i32 {
        self.current_guess
    }

    /// Every guess so far, most recent first.
    #[must_use]
    pub fn history(&self) -> &Vector<i32> {
        &self.history
    }

    /// Number of guesses made, including the opening one.
    #[must_use]
    pub fn round_count(&self) -> usize {
        self.history.len()
    }

    /// Whether the current guess is the secret.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.current_guess == self.secret.value()
    }

    #[must_use]
    pub fn outcome(&self) -> Outcome {
        if self.is_won() {
            Outcome::Won {
                rounds: self.round_count(),
            }
        } else {
            Outcome::Continuing
        }
    }

    /// Numbered history rows, most recent first.
    pub fn history_entries(&self) -> impl Iterator<Item = HistoryEntry> + '_ {
        let len = self.history.len();
        self.history
            .iter()
            .enumerate()
            .map(move |(index, &guess)| HistoryEntry {
                round: len - index,
                guess,
            })
    }

    /// Game-over summary, available once the secret is found.
    #[must_use]
    pub fn summary(&self) -> Option<GameSummary> {
        if !self.is_won() {
            return None;
        }

        Some(GameSummary {
            secret: self.secret.value(),
            rounds: self.round_count(),
            guesses: self.history.iter().rev().copied().collect(),
        })
    }

    /// Check a hint against the secret without touching the session.
    pub fn check_feedback(&self, feedback: Feedback) -> Result<(), GuessError> {
        if feedback.is_consistent(self.current_guess, self.secret.value()) {
            Ok(())
        } else {
            Err(GuessError::InconsistentFeedback {
                guess: self.current_guess,
                feedback,
            })
        }
    }

    // === Engine-side updates ===

    /// Tighten the bounds around the current guess.
    pub(crate) fn narrow(&mut self, feedback: Feedback) {
        match feedback {
            Feedback::Lower => {
                self.high = self.current_guess;
                self.high_ruled_out = true;
            }
            Feedback::Greater => self.low = self.current_guess + 1,
        }
    }

    /// Record a new guess at the front of the history.
    pub(crate) fn record_guess(&mut self, guess: i32) {
        debug_assert!((self.low..=self.candidate_high()).contains(&guess));
        self.current_guess = guess;
        self.history.push_front(guess);
    }

    pub(crate) fn rng_mut(&mut self) -> &mut GuessRng {
        &mut self.rng
    }

    // === Snapshots ===

    /// Capture the full session, RNG position included.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            secret: self.secret.value(),
            low: self.low,
            high: self.high,
            high_ruled_out: self.high_ruled_out,
            current_guess: self.current_guess,
            history: self.history.iter().copied().collect(),
            rng: self.rng.state(),
        }
    }

    /// Rebuild a session from a snapshot, re-checking every invariant.
    pub fn restore(snapshot: &SessionSnapshot) -> Result<Self, GuessError> {
        let invalid = |reason: &str| GuessError::InvalidSnapshot(reason.to_string());

        let secret = Secret::new(snapshot.secret).map_err(|_| invalid("secret out of range"))?;
        let (low, high, guess) = (snapshot.low, snapshot.high, snapshot.current_guess);
        if !(MIN_SECRET <= low && low <= high && high <= MAX_SECRET) {
            return Err(invalid("bounds out of order or out of range"));
        }

        let candidate_high = if snapshot.high_ruled_out { high - 1 } else { high };
        if low > candidate_high {
            return Err(invalid("bounds out of order"));
        }
        if !(low..=candidate_high).contains(&secret.value()) {
            return Err(invalid("secret outside bounds"));
        }
        if !(low..=candidate_high).contains(&guess) {
            return Err(invalid("current guess outside bounds"));
        }
        if snapshot.history.first() != Some(&guess) {
            return Err(invalid("history does not start with the current guess"));
        }
        if snapshot.history.iter().any(|g| !(MIN_SECRET..=MAX_SECRET).contains(g)) {
            return Err(invalid("history entry out of range"));
        }
        // Narrowing excludes every earlier guess, so no value can repeat
        let mut seen = FxHashSet::default();
        if !snapshot.history.iter().all(|g| seen.insert(*g)) {
            return Err(invalid("history repeats a guess"));
        }

        Ok(Self {
            secret,
            low,
            high,
            high_ruled_out: snapshot.high_ruled_out,
            current_guess: guess,
            history: snapshot.history.iter().copied().collect(),
            rng: GuessRng::from_state(&snapshot.rng),
        })
    }
}

/// Serializable session state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub secret: i32,
    pub low: i32,
    pub high: i32,
    pub high_ruled_out: bool,
    pub current_guess: i32,
    /// Most recent guess first.
    pub history: Vec<i32>,
    pub rng: GuessRngState,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(secret: i32, guess: i32) -> Session {
        Session::open(Secret::new(secret).unwrap(), guess, GuessRng::new(42))
    }

    #[test]
    fn test_open() {
        let s = session(70, 50);
        assert_eq!(s.low(), 1);
        assert_eq!(s.high(), 100);
        assert_eq!(s.current_guess(), 50);
        assert_eq!(s.history().iter().copied().collect::<Vec<_>>(), vec![50]);
        assert_eq!(s.round_count(), 1);
        assert_eq!(s.outcome(), Outcome::Continuing);
        assert!(s.summary().is_none());
    }

    #[test]
    fn test_narrow_lower_and_greater() {
        let mut s = session(30, 50);
        assert_eq!(s.remaining(), 100);

        s.narrow(Feedback::Lower);
        assert_eq!((s.low(), s.high()), (1, 50));
        assert_eq!(s.candidate_high(), 49);
        assert_eq!(s.remaining(), 49);

        s.record_guess(20);
        s.narrow(Feedback::Greater);
        assert_eq!((s.low(), s.high()), (21, 50));
        assert_eq!(s.remaining(), 29);
    }

    #[test]
    fn test_record_guess_prepends() {
        let mut s = session(30, 50);
        s.narrow(Feedback::Lower);
        s.record_guess(30);

        assert_eq!(s.current_guess(), 30);
        assert_eq!(s.history()[0], 30);
        assert_eq!(s.round_count(), 2);
        assert_eq!(s.outcome(), Outcome::Won { rounds: 2 });
    }

    #[test]
    fn test_check_feedback() {
        let s = session(70, 50);
        assert_eq!(
            s.check_feedback(Feedback::Lower),
            Err(GuessError::InconsistentFeedback {
                guess: 50,
                feedback: Feedback::Lower
            })
        );
        assert_eq!(s.check_feedback(Feedback::Greater), Ok(()));
    }

    #[test]
    fn test_history_entries_numbering() {
        let mut s = session(30, 50);
        s.narrow(Feedback::Lower);
        s.record_guess(10);
        s.narrow(Feedback::Greater);
        s.record_guess(30);

        let rows: Vec<_> = s.history_entries().collect();
        assert_eq!(
            rows,
            vec![
                HistoryEntry { round: 3, guess: 30 },
                HistoryEntry { round: 2, guess: 10 },
                HistoryEntry { round: 1, guess: 50 },
            ]
        );
    }

    #[test]
    fn test_summary_in_play_order() {
        let mut s = session(30, 50);
        s.narrow(Feedback::Lower);
        s.record_guess(30);

        let summary = s.summary().unwrap();
        assert_eq!(summary.secret, 30);
        assert_eq!(summary.rounds, 2);
        assert_eq!(summary.guesses, vec![50, 30]);
    }

    #[test]
    fn test_snapshot_restore() {
        let mut s = session(30, 50);
        s.narrow(Feedback::Lower);
        s.record_guess(10);

        let snapshot = s.snapshot();
        let json = serde_json::to_string(&snapshot).unwrap();
        let parsed: SessionSnapshot = serde_json::from_str(&json).unwrap();
        let restored = Session::restore(&parsed).unwrap();

        assert_eq!(restored.snapshot(), snapshot);
        assert_eq!(restored.current_guess(), 10);
        assert_eq!((restored.low(), restored.high()), (1, 50));
    }

    #[test]
    fn test_restore_rejects_broken_invariants() {
        let base = session(30, 50).snapshot();

        let mut bad = base.clone();
        bad.low = 60;
        assert!(matches!(Session::restore(&bad), Err(GuessError::InvalidSnapshot(_))));

        let mut bad = base.clone();
        bad.history = vec![12];
        assert!(matches!(Session::restore(&bad), Err(GuessError::InvalidSnapshot(_))));

        let mut bad = base.clone();
        bad.secret = 0;
        assert!(matches!(Session::restore(&bad), Err(GuessError::InvalidSnapshot(_))));

        let mut bad = base.clone();
        bad.low = 40;
        bad.high = 45;
        assert!(matches!(Session::restore(&bad), Err(GuessError::InvalidSnapshot(_))));

        // Ruling out an extreme bound must not overflow
        let mut bad = base.clone();
        bad.high = i32::MIN;
        bad.high_ruled_out = true;
        assert!(matches!(Session::restore(&bad), Err(GuessError::InvalidSnapshot(_))));

        let mut bad = base.clone();
        bad.low = i32::MIN;
        bad.high = i32::MIN;
        bad.high_ruled_out = true;
        assert!(matches!(Session::restore(&bad), Err(GuessError::InvalidSnapshot(_))));

        let mut bad = base;
        bad.history = vec![50, 50, 50];
        assert_eq!(
            Session::restore(&bad).unwrap_err(),
            GuessError::InvalidSnapshot("history repeats a guess".to_string())
        );
    }

    #[test]
    fn test_restore_rejects_repeated_guess_deeper_in_history() {
        let mut s = session(30, 50);
        s.narrow(Feedback::Lower);
        s.record_guess(10);
        s.narrow(Feedback::Greater);
        s.record_guess(30);

        let mut snapshot = s.snapshot();
        assert!(Session::restore(&snapshot).is_ok());

        snapshot.history = vec![30, 10, 10];
        assert!(matches!(Session::restore(&snapshot), Err(GuessError::InvalidSnapshot(_))));
    }
}
