//! Configuration errors.
//!
//! Gameplay operations are total; only building an engine from a
//! configuration can fail.

use thiserror::Error;

use crate::feedback::PhraseTier;

/// Errors raised while loading or validating an `EngineConfig`.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("palette must contain at least one colour")]
    EmptyPalette,

    #[error("palette has {0} colours, at most 256 supported")]
    PaletteTooLarge(usize),

    #[error("duplicate colour name in palette: {0}")]
    DuplicateColor(String),

    #[error("board grid {rows}x{cols} has {slots} slots but palette has {palette} colours")]
    BoardMismatch {
        rows: usize,
        cols: usize,
        slots: usize,
        palette: usize,
    },

    #[error("picker grid {rows}x{cols} cannot hold {palette} colours")]
    PickerTooSmall { rows: usize, cols: usize, palette: usize },

    #[error("phrase pool for {0:?} is empty")]
    EmptyPool(PhraseTier),

    #[error("invalid tier thresholds: {0}")]
    Thresholds(String),

    #[error("JSON configuration error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias for configuration results.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = ConfigError::BoardMismatch {
            rows: 3,
            cols: 2,
            slots: 6,
            palette: 5,
        };
        assert_eq!(
            err.to_string(),
            "board grid 3x2 has 6 slots but palette has 5 colours"
        );

        let err = ConfigError::EmptyPool(PhraseTier::Streak);
        assert_eq!(err.to_string(), "phrase pool for Streak is empty");
    }
}
