//! Core engine types: colours, RNG, clock, configuration, errors.
//!
//! These building blocks know nothing about rounds or feedback. The engine
//! composes them; hosts configure them via `EngineConfig`.

pub mod color;
pub mod rng;
pub mod clock;
pub mod config;
pub mod error;

pub use color::{ColorToken, Palette};
pub use rng::{FixedShuffle, GameRng, ShuffleSource};
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{BoardGeometry, EngineConfig, TierThresholds};
pub use error::{ConfigError, ConfigResult};
