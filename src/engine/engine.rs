//! The pattern game state machine.

use std::time::Duration;

use smallvec::smallvec;
use tracing::{debug, info, trace};

use super::outcome::{IgnoreReason, PlacementOutcome, PlacementResult};
use super::snapshot::{EngineSnapshot, RoundPhase};
use super::stats::RoundStats;
use crate::board::{Pattern, PlacementBoard};
use crate::core::{Clock, ColorToken, ConfigResult, EngineConfig, GameRng, Palette, ShuffleSource, SystemClock};
use crate::feedback::{
    draw_phrase, failure_tier, render_completion, success_tier, FeedbackEvent, FeedbackKind,
    PhraseSelector, PhraseTier,
};

/// State that exists for exactly one round.
///
/// A new round replaces it wholesale.
#[derive(Clone, Debug)]
struct Round {
    pattern: Pattern,
    board: PlacementBoard,
    selection: Option<ColorToken>,
    stats: RoundStats,
    active: bool,
}

impl Round {
    fn start(palette: &Palette, shuffle: &mut dyn ShuffleSource, now_ms: u64) -> Self {
        let pattern = Pattern::generate(palette, shuffle);
        let board = PlacementBoard::empty(pattern.len());
        Self {
            pattern,
            board,
            selection: None,
            stats: RoundStats::starting_at(now_ms),
            active: true,
        }
    }
}

/// Pattern-matching game engine.
///
/// Owns the round state and the collaborators it consumes: a shuffle source
/// for patterns, a phrase selector for feedback and a clock for timing.
/// All operations are synchronous and total; unmet preconditions are no-ops.
///
/// ```
/// use pattern_game::PatternGameBuilder;
///
/// let mut engine = PatternGameBuilder::new().seed(7).build().unwrap();
/// let target = engine.pattern().get(0).unwrap();
///
/// engine.select_color(target);
/// let outcome = engine.attempt_placement(0);
///
/// assert!(outcome.is_placed());
/// assert_eq!(engine.current_stats().correct_count, 1);
/// ```
pub struct PatternGameEngine {
    config: EngineConfig,
    shuffle: Box<dyn ShuffleSource>,
    selector: Box<dyn PhraseSelector>,
    clock: Box<dyn Clock>,
    round_number: u32,
    round: Round,
}

/// Builder for creating a `PatternGameEngine`.
///
/// Collaborators left unset default to seeded `GameRng` streams (from
/// `EngineConfig::seed`) and a `SystemClock`.
pub struct PatternGameBuilder {
    config: EngineConfig,
    shuffle: Option<Box<dyn ShuffleSource>>,
    selector: Option<Box<dyn PhraseSelector>>,
    clock: Option<Box<dyn Clock>>,
}

impl Default for PatternGameBuilder {
    fn default() -> Self {
        Self {
            config: EngineConfig::default(),
            shuffle: None,
            selector: None,
            clock: None,
        }
    }
}

impl PatternGameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a full configuration.
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Override the configured seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Inject the pattern shuffle source.
    pub fn shuffle<S: ShuffleSource + 'static>(mut self, shuffle: S) -> Self {
        self.shuffle = Some(Box::new(shuffle));
        self
    }

    /// Inject the phrase selector.
    pub fn phrase_selector<P: PhraseSelector + 'static>(mut self, selector: P) -> Self {
        self.selector = Some(Box::new(selector));
        self
    }

    /// Inject the clock.
    pub fn clock<C: Clock + 'static>(mut self, clock: C) -> Self {
        self.clock = Some(Box::new(clock));
        self
    }

    /// Validate the configuration and start the first round.
    pub fn build(self) -> ConfigResult<PatternGameEngine> {
        self.config.validate()?;

        let rng = GameRng::new(self.config.seed);
        let mut shuffle: Box<dyn ShuffleSource> = match self.shuffle {
            Some(shuffle) => shuffle,
            None => Box::new(rng.for_context("pattern")),
        };
        let selector: Box<dyn PhraseSelector> = match self.selector {
            Some(selector) => selector,
            None => Box::new(rng.for_context("phrases")),
        };
        let clock: Box<dyn Clock> = match self.clock {
            Some(clock) => clock,
            None => Box::new(SystemClock::new()),
        };

        let round = Round::start(&self.config.palette, shuffle.as_mut(), clock.now_ms());
        info!(
            "Round 1 started: {} colours, pattern {:?}",
            self.config.palette.len(),
            round.pattern.as_slice()
        );

        Ok(PatternGameEngine {
            config: self.config,
            shuffle,
            selector,
            clock,
            round_number: 1,
            round,
        })
    }
}

impl PatternGameEngine {
    /// Build an engine with default collaborators.
    pub fn new(config: EngineConfig) -> ConfigResult<Self> {
        PatternGameBuilder::new().config(config).build()
    }

    // === Operations ===

    /// Start a fresh round: new pattern, empty board, no selection, zeroed
    /// counters, clock restarted.
    pub fn new_round(&mut self) {
        let now = self.clock.now_ms();
        self.round = Round::start(&self.config.palette, self.shuffle.as_mut(), now);
        self.round_number += 1;
        info!(
            "Round {} started: pattern {:?}",
            self.round_number,
            self.round.pattern.as_slice()
        );
    }

    /// Abandon the current round and start another. Always available.
    pub fn reset(&mut self) {
        debug!(
            "Reset requested in round {} ({} of {} slots filled)",
            self.round_number,
            self.round.board.filled_count(),
            self.round.board.len()
        );
        self.new_round();
    }

    /// Choose the colour for the next placement.
    ///
    /// Overwrites any previous selection. Returns `false`, changing nothing,
    /// if the token is not in the palette.
    pub fn select_color(&mut self, token: ColorToken) -> bool {
        if !self.config.palette.contains(token) {
            trace!("Ignoring selection of {} outside the palette", token);
            return false;
        }
        debug!("Selected {}", token);
        self.round.selection = Some(token);
        true
    }

    /// Try to place the selected colour in `slot`.
    ///
    /// Succeeds iff the selection equals the pattern colour at `slot`. The
    /// selection is kept either way so it can be reused on the next slot.
    pub fn attempt_placement(&mut self, slot: usize) -> PlacementOutcome {
        let token = match self.precondition(slot) {
            Ok(token) => token,
            Err(reason) => {
                trace!("Ignoring placement on slot {}: {:?}", slot, reason);
                return PlacementOutcome::ignored(reason);
            }
        };

        let round = &mut self.round;
        if round.board.fill_matching(&round.pattern, slot, token) {
            round.stats.record_success(self.clock.now_ms());
            let tier = success_tier(&round.stats, &self.config.thresholds);
            let phrase = draw_phrase(self.selector.as_mut(), &self.config.phrases, tier);
            debug!(
                "Placed {} in slot {} (correct={}, streak={}, tier={:?})",
                token, slot, round.stats.correct_count, round.stats.streak_count, tier
            );

            let mut events = smallvec![FeedbackEvent::new(FeedbackKind::Success, tier, phrase)];

            if round.board.is_full() {
                round.active = false;
                let seconds = round.stats.announced_seconds();
                let template = draw_phrase(self.selector.as_mut(), &self.config.phrases, PhraseTier::Complete);
                events.push(FeedbackEvent::new(
                    FeedbackKind::RoundComplete,
                    PhraseTier::Complete,
                    render_completion(&template, seconds),
                ));
                info!(
                    "Round {} complete in {}s ({} correct, {} failed)",
                    self.round_number, seconds, round.stats.correct_count, round.stats.fail_count
                );
            }

            PlacementOutcome {
                result: PlacementResult::Placed { slot, token },
                events,
            }
        } else {
            round.stats.record_failure();
            let tier = failure_tier(&round.stats, &self.config.thresholds);
            let phrase = draw_phrase(self.selector.as_mut(), &self.config.phrases, tier);
            debug!(
                "Rejected {} in slot {} (fails={}, tier={:?})",
                token, slot, round.stats.fail_count, tier
            );

            PlacementOutcome {
                result: PlacementResult::Rejected { slot, token },
                events: smallvec![FeedbackEvent::new(FeedbackKind::Failure, tier, phrase)],
            }
        }
    }

    fn precondition(&self, slot: usize) -> Result<ColorToken, IgnoreReason> {
        let round = &self.round;
        if !round.active {
            return Err(IgnoreReason::RoundOver);
        }
        if slot >= round.board.len() {
            return Err(IgnoreReason::SlotOutOfRange);
        }
        if !round.board.is_open(slot) {
            return Err(IgnoreReason::SlotFilled);
        }
        round.selection.ok_or(IgnoreReason::NoSelection)
    }

    // === Queries ===

    /// The "can click" predicate: an attempt on `slot` would not be ignored.
    #[must_use]
    pub fn can_place(&self, slot: usize) -> bool {
        self.precondition(slot).is_ok()
    }

    /// Check if every slot is filled.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.round.board.is_full()
    }

    /// Whether placements are currently accepted.
    #[must_use]
    pub fn is_round_active(&self) -> bool {
        self.round.active
    }

    #[must_use]
    pub fn phase(&self) -> RoundPhase {
        if self.round.active {
            RoundPhase::InProgress
        } else {
            RoundPhase::Complete
        }
    }

    /// Counters for the current round.
    #[must_use]
    pub fn current_stats(&self) -> RoundStats {
        self.round.stats
    }

    /// Time from round start to the latest success.
    #[must_use]
    pub fn elapsed_time(&self) -> Duration {
        self.round.stats.elapsed()
    }

    pub fn pattern(&self) -> &Pattern {
        &self.round.pattern
    }

    pub fn board(&self) -> &PlacementBoard {
        &self.round.board
    }

    #[must_use]
    pub fn selection(&self) -> Option<ColorToken> {
        self.round.selection
    }

    /// Rounds started so far, including the current one.
    #[must_use]
    pub fn round_number(&self) -> u32 {
        self.round_number
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn palette(&self) -> &Palette {
        &self.config.palette
    }

    /// Detached copy of the observable state.
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            round_number: self.round_number,
            pattern: self.round.pattern.as_slice().to_vec(),
            board: self.round.board.as_slice().to_vec(),
            selection: self.round.selection,
            stats: self.round.stats,
            round_active: self.round.active,
            phase: self.phase(),
        }
    }
}

impl std::fmt::Debug for PatternGameEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PatternGameEngine")
            .field("round_number", &self.round_number)
            .field("round", &self.round)
            .finish_non_exhaustive()
    }
}
