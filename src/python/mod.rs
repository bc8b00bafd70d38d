//! Python bindings for the pattern game engine.
//!
//! Lets a Python presentation layer (or test harness) drive the engine.
//!
//! # Quick Start
//!
//! ```python
//! import pattern_game as pg
//!
//! game = pg.PatternGame(seed=42)
//! game.select_color(game.pattern[0])
//! outcome = game.attempt_placement(0)
//!
//! for event in outcome.events:
//!     speak(event.phrase, *event.speech_params)
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_engine;

pub use py_core::*;
pub use py_engine::*;

/// pattern_game: a pattern-matching game engine with spoken feedback.
#[pymodule]
fn pattern_game(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyPatternGame>()?;
    m.add_class::<PyPlacementOutcome>()?;
    m.add_class::<PyFeedbackEvent>()?;
    m.add_class::<PyRoundStats>()?;
    Ok(())
}
