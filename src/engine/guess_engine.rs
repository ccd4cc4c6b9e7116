//! The guessing engine.
//!
//! `GuessEngine` is stateless between calls: it reads a `Session` and
//! returns the next one. Callers own the session and thread it through
//! `apply_feedback` until `Session::outcome` reports a win.
//!
//! ## Implementation Notes
//!
//! - The opening guess never equals the secret.
//! - Each hint removes the current guess and everything on the wrong side
//!   of it, so `Session::remaining` strictly shrinks until the secret is
//!   found. The previous guess is still passed to the policy as the
//!   excluded value.
//! - A rejected hint leaves the caller's session untouched.

use tracing::{debug, warn};

use crate::core::{Feedback, GuessError, GuessRng, Outcome, Secret, Session, MAX_SECRET, MIN_SECRET};

use super::config::EngineConfig;
use super::policy::{GuessPolicy, PolicyKind};

/// Starts sessions and applies player feedback.
#[derive(Clone, Debug)]
pub struct GuessEngine<P: GuessPolicy = PolicyKind> {
    config: EngineConfig,
    policy: P,
}

impl GuessEngine<PolicyKind> {
    /// Create an engine using the policy named in `config`.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        let policy = config.policy;
        Self { config, policy }
    }
}

impl Default for GuessEngine<PolicyKind> {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl<P: GuessPolicy> GuessEngine<P> {
    /// Create an engine with a custom policy.
    ///
    /// `config.policy` is ignored.
    #[must_use]
    pub fn with_policy(config: EngineConfig, policy: P) -> Self {
        Self { config, policy }
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Start a game for `secret`, seeded from the config.
    pub fn start_session(&self, secret: Secret) -> Session {
        let rng = match self.config.seed {
            Some(seed) => GuessRng::new(seed),
            None => GuessRng::from_entropy(),
        };
        self.open(secret, rng)
    }

    /// Start a game for `secret` with an explicit seed.
    pub fn start_session_with_seed(&self, secret: Secret, seed: u64) -> Session {
        self.open(secret, GuessRng::new(seed))
    }

    /// Start a game whose opening guess is chosen by the caller.
    ///
    /// The opening guess must be in range and must not be the secret.
    pub fn start_session_at(&self, secret: Secret, opening_guess: i32) -> Result<Session, GuessError> {
        if !(MIN_SECRET..=MAX_SECRET).contains(&opening_guess) || opening_guess == secret.value() {
            return Err(GuessError::InvalidOpeningGuess(opening_guess));
        }

        let rng = match self.config.seed {
            Some(seed) => GuessRng::new(seed),
            None => GuessRng::from_entropy(),
        };
        debug!(opening_guess, seed = rng.seed(), "session started at fixed guess");
        Ok(Session::open(secret, opening_guess, rng))
    }

    fn open(&self, secret: Secret, mut rng: GuessRng) -> Session {
        let opening_guess = self.policy.pick(&mut rng, MIN_SECRET, MAX_SECRET, secret.value());
        debug!(opening_guess, seed = rng.seed(), "session started");
        Session::open(secret, opening_guess, rng)
    }

    /// Apply one hint and produce the next guess.
    ///
    /// On success the returned session has narrowed bounds and one more
    /// history entry. Check `outcome()` on it to detect the win.
    ///
    /// # Errors
    ///
    /// - `InconsistentFeedback` if the hint contradicts the secret
    /// - `SessionOver` if the session was already won
    pub fn apply_feedback(&self, session: &Session, feedback: Feedback) -> Result<Session, GuessError> {
        if let Outcome::Won { rounds } = session.outcome() {
            return Err(GuessError::SessionOver { rounds });
        }

        if let Err(err) = session.check_feedback(feedback) {
            warn!(guess = session.current_guess(), %feedback, "rejected inconsistent feedback");
            return Err(err);
        }

        let mut next = session.clone();
        let previous = next.current_guess();
        next.narrow(feedback);

        let (low, high) = (next.low(), next.candidate_high());
        let guess = self.policy.pick(next.rng_mut(), low, high, previous);
        next.record_guess(guess);

        debug!(
            previous,
            %feedback,
            low,
            high = next.high(),
            remaining = next.remaining(),
            guess,
            round = next.round_count(),
            "narrowed"
        );

        Ok(next)
    }
}
