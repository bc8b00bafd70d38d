//! Tier policy and phrase selection.
//!
//! Tier choice is a pure function of the round counters. Which phrase
//! within the tier's pool is spoken is delegated to a `PhraseSelector`.

use rustc_hash::FxHashMap;

use super::phrases::{PhraseBook, PhraseTier};
use crate::core::{GameRng, TierThresholds};
use crate::engine::RoundStats;

/// Tier for a success, evaluated after the counters were updated.
///
/// First match wins: streak, expert, doing-well, general.
#[must_use]
pub fn success_tier(stats: &RoundStats, thresholds: &TierThresholds) -> PhraseTier {
    if stats.streak_count >= thresholds.streak {
        PhraseTier::Streak
    } else if stats.correct_count >= thresholds.expert {
        PhraseTier::Expert
    } else if stats.correct_count >= thresholds.doing_well {
        PhraseTier::DoingWell
    } else {
        PhraseTier::Success
    }
}

/// Tier for a failure, evaluated after the counters were updated.
///
/// First match wins: encouraging, reassuring, general.
#[must_use]
pub fn failure_tier(stats: &RoundStats, thresholds: &TierThresholds) -> PhraseTier {
    if stats.fail_count >= thresholds.encouraging {
        PhraseTier::Encouraging
    } else if stats.fail_count >= thresholds.reassuring {
        PhraseTier::Reassuring
    } else {
        PhraseTier::Failure
    }
}

/// Chooses which phrase of a pool to speak.
pub trait PhraseSelector: Send {
    /// Return an index in `0..pool_len`. `pool_len` is never zero.
    fn pick(&mut self, tier: PhraseTier, pool_len: usize) -> usize;
}

/// Uniform random choice.
impl PhraseSelector for GameRng {
    fn pick(&mut self, _tier: PhraseTier, pool_len: usize) -> usize {
        self.gen_index(pool_len)
    }
}

/// Always the first phrase of the pool.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstPhrase;

impl PhraseSelector for FirstPhrase {
    fn pick(&mut self, _tier: PhraseTier, _pool_len: usize) -> usize {
        0
    }
}

/// Round-robin through each pool independently.
#[derive(Clone, Debug, Default)]
pub struct CyclingPhrases {
    next: FxHashMap<PhraseTier, usize>,
}

impl CyclingPhrases {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PhraseSelector for CyclingPhrases {
    fn pick(&mut self, tier: PhraseTier, pool_len: usize) -> usize {
        let slot = self.next.entry(tier).or_insert(0);
        let index = *slot % pool_len;
        *slot = slot.wrapping_add(1);
        index
    }
}

/// Draw a phrase for `tier` from `book`.
///
/// Out-of-range picks are wrapped into the pool. Returns an empty string if
/// the pool is empty, which a validated book never has.
pub fn draw_phrase(selector: &mut dyn PhraseSelector, book: &PhraseBook, tier: PhraseTier) -> String {
    let pool = book.pool(tier);
    if pool.is_empty() {
        return String::new();
    }
    let index = selector.pick(tier, pool.len()) % pool.len();
    pool[index].clone()
}
