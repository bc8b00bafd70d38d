//! Read-only view of engine state for presentation layers.

use serde::{Deserialize, Serialize};

use super::stats::RoundStats;
use crate::core::ColorToken;

/// Round lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Slots remain to be filled.
    InProgress,
    /// Every slot is filled; only reset leaves this phase.
    Complete,
}

/// Everything a renderer needs, detached from the engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    /// Rounds started since the engine was built (first round is 1).
    pub round_number: u32,

    /// Target colours, for drawing faint guides in each slot.
    pub pattern: Vec<ColorToken>,

    /// Placed colours per slot.
    pub board: Vec<Option<ColorToken>>,

    /// Currently selected colour.
    pub selection: Option<ColorToken>,

    /// Round counters.
    pub stats: RoundStats,

    /// Whether placements are accepted.
    pub round_active: bool,

    pub phase: RoundPhase,
}

impl EngineSnapshot {
    /// Number of empty slots.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.board.iter().filter(|s| s.is_none()).count()
    }

    /// The "can click" predicate for a slot.
    #[must_use]
    pub fn can_place(&self, slot: usize) -> bool {
        self.round_active && self.selection.is_some() && matches!(self.board.get(slot), Some(None))
    }
}
