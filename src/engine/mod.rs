//! The pattern game engine.
//!
//! Two-state machine per round:
//!
//! - **InProgress**: initial state, re-entered by `reset`/`new_round`
//! - **Complete**: entered exactly once, by the placement that fills the
//!   last empty slot; terminal until reset
//!
//! The engine has a single owner. Hosts on multi-threaded platforms must
//! confine it to one context (the type is `Send`, not `Sync`-shared).

pub mod engine;
pub mod outcome;
pub mod snapshot;
pub mod stats;

pub use engine::{PatternGameBuilder, PatternGameEngine};
pub use outcome::{IgnoreReason, PlacementOutcome, PlacementResult};
pub use snapshot::{EngineSnapshot, RoundPhase};
pub use stats::RoundStats;
