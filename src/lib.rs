//! # pattern-game
//!
//! A toolkit-agnostic engine for a children's clothing-pattern matching game.
//!
//! The player picks a colour and taps a slot on the garment. The colour
//! sticks only if it matches the hidden pattern at that slot. Every attempt
//! produces a spoken-feedback directive whose phrase adapts to how the round
//! is going.
//!
//! ## Design Principles
//!
//! 1. **Rendering-Free**: The engine owns state and rules only. Presentation
//!    layers read `EngineSnapshot`s; audio layers receive `FeedbackEvent`s.
//!
//! 2. **Total Operations**: Gameplay calls never fail. Unmet preconditions
//!    (filled slot, no selection, finished round) are reported as
//!    `IgnoreReason`s and change nothing.
//!
//! 3. **Injected Collaborators**: Randomness (`ShuffleSource`,
//!    `PhraseSelector`) and time (`Clock`) are traits, so tests replay fixed
//!    patterns and fixed clocks.
//!
//! 4. **Phrases as Data**: Feedback tiers map to named pools in a
//!    `PhraseBook`; localising the game means swapping the book.
//!
//! ## Modules
//!
//! - `core`: Colours, RNG, clock, configuration, errors
//! - `board`: Pattern and placement board
//! - `feedback`: Feedback events, phrase pools, tier policy, sinks
//! - `engine`: The round state machine

pub mod core;
pub mod board;
pub mod feedback;
pub mod engine;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    ColorToken, Palette,
    GameRng, ShuffleSource, FixedShuffle,
    Clock, SystemClock, ManualClock,
    BoardGeometry, TierThresholds, EngineConfig,
    ConfigError, ConfigResult,
};

pub use crate::board::{Pattern, PlacementBoard};

pub use crate::feedback::{
    FeedbackEvent, FeedbackKind, Tone, SpeechParams,
    PhraseBook, PhraseTier,
    PhraseSelector, FirstPhrase, CyclingPhrases,
    FeedbackSink, RecordingSink,
};

pub use crate::engine::{
    PatternGameEngine, PatternGameBuilder,
    PlacementOutcome, PlacementResult, IgnoreReason,
    EngineSnapshot, RoundPhase, RoundStats,
};
