//! Python bindings for the guessing engine.
//!
//! # Quick Start
//!
//! ```python
//! import guess_engine as ge
//!
//! engine = ge.Engine(seed=42, policy="bisect")
//! session = engine.start(70)
//!
//! while not session.is_won:
//!     hint = "lower" if session.current_guess > 70 else "greater"
//!     session = engine.feedback(session, hint)
//!
//! print(session.rounds, session.history)
//! ```

use pyo3::prelude::*;

mod py_engine;

pub use py_engine::*;

/// guess_engine: narrow down a secret number from player hints.
#[pymodule]
fn guess_engine(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyEngine>()?;
    m.add_class::<PySession>()?;
    Ok(())
}
