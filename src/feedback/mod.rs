//! Adaptive spoken feedback.
//!
//! The engine reports every placement attempt as a `FeedbackEvent`. Which
//! phrase is spoken depends on a tier chosen from the round counters:
//!
//! | Outcome  | Tier (first match)                                  |
//! |----------|-----------------------------------------------------|
//! | Success  | streak >= 5, correct >= 10, correct >= 5, otherwise  |
//! | Failure  | fail >= 10, fail >= 5, otherwise                    |
//! | Complete | always the completion pool, citing elapsed seconds   |
//!
//! Thresholds are configurable via `TierThresholds`; pools via `PhraseBook`.

pub mod event;
pub mod phrases;
pub mod selector;
pub mod sink;

pub use event::{FeedbackEvent, FeedbackKind, SpeechParams, Tone};
pub use phrases::{render_completion, PhraseBook, PhraseTier, SECONDS_PLACEHOLDER};
pub use selector::{draw_phrase, failure_tier, success_tier, CyclingPhrases, FirstPhrase, PhraseSelector};
pub use sink::{FeedbackSink, RecordingSink};
