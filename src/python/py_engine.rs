//! Engine and session bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{Feedback, GuessError, Secret, Session};
use crate::engine::{EngineConfig, GuessEngine, PolicyKind};

fn to_py_err(err: GuessError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Python wrapper for a guessing session.
///
/// Sessions are immutable values: `Engine.feedback` returns a new one.
#[pyclass(name = "Session")]
#[derive(Clone, Debug)]
pub struct PySession(pub Session);

#[pymethods]
impl PySession {
    #[getter]
    fn current_guess(&self) -> i32 {
        self.0.current_guess()
    }

    #[getter]
    fn low(&self) -> i32 {
        self.0.low()
    }

    #[getter]
    fn high(&self) -> i32 {
        self.0.high()
    }

    /// Guesses so far, most recent first.
    #[getter]
    fn history(&self) -> Vec<i32> {
        self.0.history().iter().copied().collect()
    }

    #[getter]
    fn rounds(&self) -> usize {
        self.0.round_count()
    }

    #[getter]
    fn is_won(&self) -> bool {
        self.0.is_won()
    }

    /// Game-over text, or None while the game is running.
    fn summary(&self) -> Option<String> {
        self.0.summary().map(|s| s.to_string())
    }

    fn __repr__(&self) -> String {
        format!(
            "Session(guess={}, low={}, high={}, rounds={})",
            self.0.current_guess(),
            self.0.low(),
            self.0.high(),
            self.0.round_count()
        )
    }
}

/// Python wrapper for GuessEngine.
#[pyclass(name = "Engine")]
pub struct PyEngine {
    engine: GuessEngine,
}

#[pymethods]
impl PyEngine {
    /// Create an engine.
    ///
    /// # Arguments
    /// - seed: RNG seed for deterministic games (None = random)
    /// - policy: "uniform" or "bisect"
    #[new]
    #[pyo3(signature = (seed = None, policy = "uniform"))]
    fn new(seed: Option<u64>, policy: &str) -> PyResult<Self> {
        let policy: PolicyKind = policy.parse().map_err(to_py_err)?;
        let config = EngineConfig { seed, policy };
        Ok(Self {
            engine: GuessEngine::new(config),
        })
    }

    /// Start a game for the given secret (1-100).
    fn start(&self, secret: i32) -> PyResult<PySession> {
        let secret = Secret::new(secret).map_err(to_py_err)?;
        Ok(PySession(self.engine.start_session(secret)))
    }

    /// Apply "lower" or "greater" and return the next session.
    fn feedback(&self, session: &PySession, hint: &str) -> PyResult<PySession> {
        let feedback: Feedback = hint.parse().map_err(to_py_err)?;
        self.engine
            .apply_feedback(&session.0, feedback)
            .map(PySession)
            .map_err(to_py_err)
    }

    fn __repr__(&self) -> String {
        format!("Engine(policy={})", self.engine.config().policy)
    }
}
