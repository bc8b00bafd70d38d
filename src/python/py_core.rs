//! Feedback and stats bindings for Python.

use pyo3::prelude::*;

use crate::engine::{PlacementOutcome, PlacementResult, RoundStats};
use crate::feedback::{FeedbackEvent, FeedbackKind, Tone};

/// Python wrapper for FeedbackEvent.
#[pyclass(name = "FeedbackEvent")]
#[derive(Clone, Debug)]
pub struct PyFeedbackEvent(pub FeedbackEvent);

#[pymethods]
impl PyFeedbackEvent {
    /// "success", "failure" or "round_complete".
    #[getter]
    fn kind(&self) -> &'static str {
        match self.0.kind {
            FeedbackKind::Success => "success",
            FeedbackKind::Failure => "failure",
            FeedbackKind::RoundComplete => "round_complete",
        }
    }

    /// Text to speak.
    #[getter]
    fn phrase(&self) -> String {
        self.0.phrase.clone()
    }

    /// "neutral", "upbeat" or "soothing".
    #[getter]
    fn tone(&self) -> &'static str {
        match self.0.tone {
            Tone::Neutral => "neutral",
            Tone::Upbeat => "upbeat",
            Tone::Soothing => "soothing",
        }
    }

    /// Suggested (pitch, rate) for a speech engine.
    #[getter]
    fn speech_params(&self) -> (f32, f32) {
        let params = self.0.tone.speech_params();
        (params.pitch, params.rate)
    }

    fn __repr__(&self) -> String {
        format!("FeedbackEvent(kind={}, phrase={:?})", self.kind(), self.0.phrase)
    }
}

/// Python wrapper for RoundStats.
#[pyclass(name = "RoundStats")]
#[derive(Clone, Debug)]
pub struct PyRoundStats(pub RoundStats);

#[pymethods]
impl PyRoundStats {
    #[getter]
    fn correct_count(&self) -> u32 {
        self.0.correct_count
    }

    #[getter]
    fn fail_count(&self) -> u32 {
        self.0.fail_count
    }

    #[getter]
    fn streak_count(&self) -> u32 {
        self.0.streak_count
    }

    /// Seconds from round start to the latest success.
    #[getter]
    fn elapsed_seconds(&self) -> f64 {
        self.0.elapsed().as_secs_f64()
    }

    fn __repr__(&self) -> String {
        format!(
            "RoundStats(correct={}, fail={}, streak={})",
            self.0.correct_count, self.0.fail_count, self.0.streak_count
        )
    }
}

/// Python wrapper for PlacementOutcome.
#[pyclass(name = "PlacementOutcome")]
#[derive(Clone, Debug)]
pub struct PyPlacementOutcome(pub PlacementOutcome);

#[pymethods]
impl PyPlacementOutcome {
    /// "placed", "rejected" or "ignored".
    #[getter]
    fn result(&self) -> &'static str {
        match self.0.result {
            PlacementResult::Placed { .. } => "placed",
            PlacementResult::Rejected { .. } => "rejected",
            PlacementResult::Ignored(_) => "ignored",
        }
    }

    /// Reason the attempt was ignored, if it was.
    #[getter]
    fn ignore_reason(&self) -> Option<String> {
        match self.0.result {
            PlacementResult::Ignored(reason) => Some(format!("{:?}", reason)),
            _ => None,
        }
    }

    /// Feedback produced by the attempt.
    #[getter]
    fn events(&self) -> Vec<PyFeedbackEvent> {
        self.0.events.iter().cloned().map(PyFeedbackEvent).collect()
    }

    /// Whether this attempt completed the round.
    #[getter]
    fn completed_round(&self) -> bool {
        self.0.completed_round()
    }

    fn __repr__(&self) -> String {
        format!("PlacementOutcome(result={}, events={})", self.result(), self.0.events.len())
    }
}
