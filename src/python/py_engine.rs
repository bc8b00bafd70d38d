//! Engine bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{ColorToken, EngineConfig};
use crate::engine::PatternGameEngine;

use super::py_core::{PyPlacementOutcome, PyRoundStats};

/// Python wrapper for PatternGameEngine.
///
/// Colours are exchanged as palette indices (0-based ints).
#[pyclass(name = "PatternGame")]
pub struct PyPatternGame {
    engine: PatternGameEngine,
}

#[pymethods]
impl PyPatternGame {
    /// Create a new game.
    ///
    /// # Arguments
    /// - seed: RNG seed for deterministic patterns and phrases
    /// - config_json: optional JSON `EngineConfig`; its seed is overridden
    #[new]
    #[pyo3(signature = (seed = 42, config_json = None))]
    fn new(seed: u64, config_json: Option<&str>) -> PyResult<Self> {
        let config = match config_json {
            Some(json) => EngineConfig::from_json(json)
                .map_err(|e| PyValueError::new_err(e.to_string()))?,
            None => EngineConfig::default(),
        };
        let engine = PatternGameEngine::new(config.with_seed(seed))
            .map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(Self { engine })
    }

    /// Select a colour by index. Returns False if it is not in the palette.
    fn select_color(&mut self, color: u8) -> bool {
        self.engine.select_color(ColorToken::new(color))
    }

    /// Try to place the selected colour in a slot.
    fn attempt_placement(&mut self, slot: usize) -> PyPlacementOutcome {
        PyPlacementOutcome(self.engine.attempt_placement(slot))
    }

    /// Whether an attempt on `slot` would be accepted.
    fn can_place(&self, slot: usize) -> bool {
        self.engine.can_place(slot)
    }

    /// Start a new round.
    fn reset(&mut self) {
        self.engine.reset();
    }

    /// Whether every slot is filled.
    fn is_complete(&self) -> bool {
        self.engine.is_complete()
    }

    /// Counters for the current round.
    fn current_stats(&self) -> PyRoundStats {
        PyRoundStats(self.engine.current_stats())
    }

    /// Target colour indices in slot order.
    #[getter]
    fn pattern(&self) -> Vec<u8> {
        self.engine.pattern().as_slice().iter().map(|t| t.raw()).collect()
    }

    /// Placed colour per slot (None for empty).
    #[getter]
    fn board(&self) -> Vec<Option<u8>> {
        self.engine.board().as_slice().iter().map(|s| s.map(|t| t.raw())).collect()
    }

    #[getter]
    fn selection(&self) -> Option<u8> {
        self.engine.selection().map(|t| t.raw())
    }

    #[getter]
    fn round_number(&self) -> u32 {
        self.engine.round_number()
    }

    /// Colour names in index order.
    #[getter]
    fn palette(&self) -> Vec<String> {
        self.engine.palette().names().to_vec()
    }

    /// Snapshot of the observable state as JSON.
    fn snapshot_json(&self) -> PyResult<String> {
        serde_json::to_string(&self.engine.snapshot()).map_err(|e| PyValueError::new_err(e.to_string()))
    }

    fn __repr__(&self) -> String {
        format!(
            "PatternGame(round={}, filled={}/{}, complete={})",
            self.engine.round_number(),
            self.engine.board().filled_count(),
            self.engine.board().len(),
            self.engine.is_complete()
        )
    }
}
