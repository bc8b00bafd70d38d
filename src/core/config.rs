//! Engine configuration types.
//!
//! Hosts configure the engine at startup by providing:
//! - `Palette`: the selectable colours
//! - `BoardGeometry`: how slots and picker buttons are laid out
//! - `TierThresholds`: when feedback escalates to a different phrase pool
//! - `PhraseBook`: the phrase pools themselves
//!
//! `EngineConfig::default()` is the shipped game: six colours, a 3x2 board,
//! a 2x3 picker and Spanish phrases.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::color::Palette;
use super::error::{ConfigError, ConfigResult};
use crate::feedback::PhraseBook;

/// Row-major grid layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardGeometry {
    /// Number of rows.
    pub rows: usize,
    /// Number of columns.
    pub cols: usize,
}

impl BoardGeometry {
    /// Create a new geometry.
    #[must_use]
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Total cells in the grid.
    #[must_use]
    pub const fn slots(&self) -> usize {
        self.rows * self.cols
    }

    /// Convert a slot index to `(row, col)`.
    #[must_use]
    pub fn position(&self, index: usize) -> Option<(usize, usize)> {
        if self.cols == 0 || index >= self.slots() {
            return None;
        }
        Some((index / self.cols, index % self.cols))
    }

    /// Convert `(row, col)` to a slot index.
    #[must_use]
    pub fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row < self.rows && col < self.cols {
            Some(row * self.cols + col)
        } else {
            None
        }
    }
}

/// Counter thresholds for phrase tiers.
///
/// Success tiers are checked streak, then expert, then doing-well.
/// Failure tiers are checked encouraging, then reassuring.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierThresholds {
    /// Consecutive successes that unlock the streak pool.
    pub streak: u32,
    /// Total successes that unlock the expert pool.
    pub expert: u32,
    /// Total successes that unlock the doing-well pool.
    pub doing_well: u32,
    /// Total failures that unlock the encouraging pool.
    pub encouraging: u32,
    /// Total failures that unlock the reassuring pool.
    pub reassuring: u32,
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            streak: 5,
            expert: 10,
            doing_well: 5,
            encouraging: 10,
            reassuring: 5,
        }
    }
}

impl TierThresholds {
    /// Check ordering and non-zero constraints.
    pub fn validate(&self) -> ConfigResult<()> {
        let all = [
            ("streak", self.streak),
            ("expert", self.expert),
            ("doing_well", self.doing_well),
            ("encouraging", self.encouraging),
            ("reassuring", self.reassuring),
        ];
        if let Some((name, _)) = all.iter().find(|(_, v)| *v == 0) {
            return Err(ConfigError::Thresholds(format!("{} must be at least 1", name)));
        }
        if self.expert < self.doing_well {
            return Err(ConfigError::Thresholds(format!(
                "expert ({}) below doing_well ({})",
                self.expert, self.doing_well
            )));
        }
        if self.encouraging < self.reassuring {
            return Err(ConfigError::Thresholds(format!(
                "encouraging ({}) below reassuring ({})",
                self.encouraging, self.reassuring
            )));
        }
        Ok(())
    }
}

/// Complete engine configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Selectable colours.
    pub palette: Palette,

    /// Slot layout. Must have exactly one slot per colour.
    pub board: BoardGeometry,

    /// Colour-picker layout. Must fit the whole palette.
    pub picker: BoardGeometry,

    /// Phrase tier thresholds.
    pub thresholds: TierThresholds,

    /// Phrase pools per tier.
    pub phrases: PhraseBook,

    /// Seed for the default RNG.
    pub seed: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            palette: Palette::standard(),
            board: BoardGeometry::new(3, 2),
            picker: BoardGeometry::new(2, 3),
            thresholds: TierThresholds::default(),
            phrases: PhraseBook::spanish(),
            seed: 42,
        }
    }
}

impl EngineConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from JSON and validate it.
    ///
    /// Missing fields fall back to the defaults.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the palette.
    #[must_use]
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Set the board geometry.
    #[must_use]
    pub fn with_board(mut self, rows: usize, cols: usize) -> Self {
        self.board = BoardGeometry::new(rows, cols);
        self
    }

    /// Set the picker geometry.
    #[must_use]
    pub fn with_picker(mut self, rows: usize, cols: usize) -> Self {
        self.picker = BoardGeometry::new(rows, cols);
        self
    }

    /// Set the tier thresholds.
    #[must_use]
    pub fn with_thresholds(mut self, thresholds: TierThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Set the phrase book.
    #[must_use]
    pub fn with_phrases(mut self, phrases: PhraseBook) -> Self {
        self.phrases = phrases;
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Number of slots (equal to palette size once validated).
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.board.slots()
    }

    /// Check every structural constraint.
    pub fn validate(&self) -> ConfigResult<()> {
        let colors = self.palette.len();
        if colors == 0 {
            return Err(ConfigError::EmptyPalette);
        }
        if colors > Palette::MAX_COLORS {
            return Err(ConfigError::PaletteTooLarge(colors));
        }

        let mut seen = FxHashSet::default();
        for name in self.palette.names() {
            if !seen.insert(name.to_ascii_uppercase()) {
                return Err(ConfigError::DuplicateColor(name.clone()));
            }
        }

        if self.board.slots() != colors {
            return Err(ConfigError::BoardMismatch {
                rows: self.board.rows,
                cols: self.board.cols,
                slots: self.board.slots(),
                palette: colors,
            });
        }
        if self.picker.slots() < colors {
            return Err(ConfigError::PickerTooSmall {
                rows: self.picker.rows,
                cols: self.picker.cols,
                palette: colors,
            });
        }

        self.thresholds.validate()?;
        self.phrases.validate()?;
        Ok(())
    }
}
