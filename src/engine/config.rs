//! Engine configuration.

use serde::{Deserialize, Serialize};

use super::policy::PolicyKind;

/// Engine configuration parameters.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Seed for every session this engine starts.
    /// `None` draws a fresh seed per session.
    pub seed: Option<u64>,

    /// Built-in policy used by `GuessEngine::new`.
    pub policy: PolicyKind,
}

impl EngineConfig {
    /// Create a new config with a fixed seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Create a new config with a built-in policy.
    #[must_use]
    pub fn with_policy(mut self, policy: PolicyKind) -> Self {
        self.policy = policy;
        self
    }
}
