//! Batch simulation of complete games.
//!
//! Plays games end to end with an automated responder and collects
//! round statistics, mostly to compare guess policies.

use rustc_hash::FxHashMap;
use serde::Serialize;
use tracing::{debug, info};

use crate::core::{GameSummary, GuessError, GuessRng, Secret};
use crate::engine::{GuessEngine, GuessPolicy, PolicyKind};

use super::responder::{Responder, TruthfulResponder};

/// Aggregate statistics over many simulated games.
#[derive(Clone, Debug, Default, Serialize)]
pub struct SimulationReport {
    /// Games played.
    pub games: u32,

    /// Fewest rounds in any game (0 when no games ran).
    pub min_rounds: usize,

    /// Most rounds in any game.
    pub max_rounds: usize,

    /// Mean rounds per game.
    pub mean_rounds: f64,

    /// Rounds -> number of games that took that many.
    pub histogram: FxHashMap<usize, u32>,
}

impl SimulationReport {
    fn record(&mut self, rounds: usize) {
        if self.games == 0 {
            self.min_rounds = rounds;
            self.max_rounds = rounds;
        } else {
            self.min_rounds = self.min_rounds.min(rounds);
            self.max_rounds = self.max_rounds.max(rounds);
        }

        let total = self.mean_rounds * f64::from(self.games) + rounds as f64;
        self.games += 1;
        self.mean_rounds = total / f64::from(self.games);
        *self.histogram.entry(rounds).or_insert(0) += 1;
    }

    /// Histogram buckets sorted by round count.
    #[must_use]
    pub fn sorted_histogram(&self) -> Vec<(usize, u32)> {
        let mut buckets: Vec<_> = self.histogram.iter().map(|(&r, &n)| (r, n)).collect();
        buckets.sort_unstable();
        buckets
    }
}

impl std::fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "games:  {}", self.games)?;
        writeln!(f, "rounds: min {} / max {} / mean {:.2}", self.min_rounds, self.max_rounds, self.mean_rounds)?;
        for (rounds, count) in self.sorted_histogram() {
            writeln!(f, "  {rounds:>3} rounds: {count}")?;
        }
        Ok(())
    }
}

/// Plays whole games against an automated responder.
#[derive(Clone, Debug)]
pub struct Simulator<P: GuessPolicy = PolicyKind> {
    engine: GuessEngine<P>,
}

impl<P: GuessPolicy> Simulator<P> {
    #[must_use]
    pub fn new(engine: GuessEngine<P>) -> Self {
        Self { engine }
    }

    #[must_use]
    pub fn engine(&self) -> &GuessEngine<P> {
        &self.engine
    }

    /// Play one game with truthful hints.
    pub fn play(&self, secret: Secret, seed: u64) -> GameSummary {
        let mut responder = TruthfulResponder::new(secret.value());
        match self.play_with(secret, seed, &mut responder) {
            Ok(summary) => summary,
            // Truthful hints are never rejected and always converge
            Err(err) => unreachable!("truthful game failed: {err}"),
        }
    }

    /// Play one game with any responder.
    ///
    /// The first rejected hint ends the game with that error; nothing
    /// is retried.
    pub fn play_with<R: Responder>(
        &self,
        secret: Secret,
        seed: u64,
        responder: &mut R,
    ) -> Result<GameSummary, GuessError> {
        let mut session = self.engine.start_session_with_seed(secret, seed);

        loop {
            if let Some(summary) = session.summary() {
                debug!(rounds = summary.rounds, seed, "game finished");
                return Ok(summary);
            }

            let feedback = responder.respond(&session);
            session = self.engine.apply_feedback(&session, feedback)?;
        }
    }

    /// Play `games` truthful games with secrets drawn from `base_seed`.
    pub fn run(&self, games: u32, base_seed: u64) -> SimulationReport {
        let mut rng = GuessRng::new(base_seed);
        let mut report = SimulationReport::default();

        for _ in 0..games {
            let secret = Secret::random(&mut rng);
            let seed = rng.fork().seed();

            let summary = self.play(secret, seed);
            report.record(summary.rounds);
        }

        info!(
            games = report.games,
            min = report.min_rounds,
            max = report.max_rounds,
            mean = report.mean_rounds,
            "simulation finished"
        );
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Feedback;
    use crate::engine::EngineConfig;
    use crate::sim::ScriptedResponder;

    fn simulator(policy: PolicyKind) -> Simulator {
        Simulator::new(GuessEngine::new(EngineConfig::default().with_policy(policy)))
    }

    #[test]
    fn test_play_finds_secret() {
        let sim = simulator(PolicyKind::Uniform);
        let summary = sim.play(Secret::new(42).unwrap(), 7);

        assert_eq!(summary.secret, 42);
        assert_eq!(summary.guesses.last(), Some(&42));
        assert_eq!(summary.guesses.len(), summary.rounds);
        assert!(summary.rounds >= 2);
    }

    #[test]
    fn test_play_is_deterministic() {
        let sim = simulator(PolicyKind::Uniform);
        let secret = Secret::new(13).unwrap();
        assert_eq!(sim.play(secret, 99), sim.play(secret, 99));
    }

    #[test]
    fn test_lying_responder_stops_game() {
        let sim = simulator(PolicyKind::Bisect);
        // Bisect opens at 50; "lower" is a lie for secret 70
        let mut liar = ScriptedResponder::new(vec![Feedback::Lower]);
        let err = sim.play_with(Secret::new(70).unwrap(), 0, &mut liar).unwrap_err();

        assert_eq!(
            err,
            GuessError::InconsistentFeedback {
                guess: 50,
                feedback: Feedback::Lower
            }
        );
    }

    #[test]
    fn test_report_statistics() {
        let mut report = SimulationReport::default();
        report.record(4);
        report.record(6);
        report.record(4);

        assert_eq!(report.games, 3);
        assert_eq!(report.min_rounds, 4);
        assert_eq!(report.max_rounds, 6);
        assert!((report.mean_rounds - 14.0 / 3.0).abs() < 1e-9);
        assert_eq!(report.sorted_histogram(), vec![(4, 2), (6, 1)]);
    }

    #[test]
    fn test_run_bisect_bound() {
        let report = simulator(PolicyKind::Bisect).run(200, 5);
        assert_eq!(report.games, 200);
        assert!(report.max_rounds <= 7);
        assert!(report.min_rounds >= 1);
    }

    #[test]
    fn test_run_plays_every_game() {
        let report = simulator(PolicyKind::Uniform).run(300, 17);
        assert_eq!(report.games, 300);
        assert_eq!(report.histogram.values().sum::<u32>(), 300);
    }

    #[test]
    fn test_run_empty() {
        let report = simulator(PolicyKind::Uniform).run(0, 5);
        assert_eq!(report.games, 0);
        assert_eq!(report.min_rounds, 0);
        assert!(report.histogram.is_empty());
    }
}
