//! Deterministic random number generation and injectable shuffle sources.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical patterns and phrases
//! - **Context streams**: Independent sequences for different purposes, so
//!   phrase draws never shift the pattern sequence
//! - **Injectable**: The engine shuffles through `ShuffleSource`, so tests
//!   can replay fixed permutations with `FixedShuffle`
//!
//! ```
//! use pattern_game::core::{ColorToken, GameRng, ShuffleSource};
//!
//! let mut rng = GameRng::new(42);
//! let mut tokens: Vec<_> = (0..6).map(ColorToken::new).collect();
//! rng.shuffle_tokens(&mut tokens);
//!
//! let mut again = GameRng::new(42);
//! let mut replay: Vec<_> = (0..6).map(ColorToken::new).collect();
//! again.shuffle_tokens(&mut replay);
//!
//! assert_eq!(tokens, replay);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::hash::{Hash, Hasher};

use super::color::ColorToken;

/// Source of round permutations.
///
/// Implementations must leave `tokens` as a permutation of its input.
pub trait ShuffleSource: Send {
    /// Permute `tokens` in place.
    fn shuffle_tokens(&mut self, tokens: &mut [ColorToken]);
}

/// Deterministic RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an independent stream for a specific context.
    ///
    /// The same context always produces the same stream from the same seed.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;

        let mut hasher = DefaultHasher::new();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Generate a random index in `0..len`.
    ///
    /// Returns 0 for an empty range.
    pub fn gen_index(&mut self, len: usize) -> usize {
        if len == 0 {
            0
        } else {
            self.inner.gen_range(0..len)
        }
    }

    /// Shuffle a slice in place (Fisher-Yates).
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }
}

impl ShuffleSource for GameRng {
    fn shuffle_tokens(&mut self, tokens: &mut [ColorToken]) {
        self.shuffle(tokens);
    }
}

/// Replays scripted permutations, cycling through them round after round.
///
/// A script entry that is not a permutation of the tokens being shuffled is
/// skipped and the input order is kept.
#[derive(Clone, Debug, Default)]
pub struct FixedShuffle {
    permutations: Vec<Vec<ColorToken>>,
    next: usize,
}

impl FixedShuffle {
    /// Replay a single permutation every round.
    pub fn new(permutation: impl Into<Vec<ColorToken>>) -> Self {
        Self::sequence(vec![permutation.into()])
    }

    /// Replay several permutations in order, wrapping around.
    pub fn sequence(permutations: Vec<Vec<ColorToken>>) -> Self {
        Self {
            permutations,
            next: 0,
        }
    }

    /// Number of shuffles served so far.
    #[must_use]
    pub fn served(&self) -> usize {
        self.next
    }
}

impl ShuffleSource for FixedShuffle {
    fn shuffle_tokens(&mut self, tokens: &mut [ColorToken]) {
        if self.permutations.is_empty() {
            return;
        }
        let script = &self.permutations[self.next % self.permutations.len()];
        self.next += 1;

        let mut expected = tokens.to_vec();
        let mut given = script.clone();
        expected.sort_unstable();
        given.sort_unstable();
        if expected == given {
            tokens.copy_from_slice(script);
        } else {
            tracing::warn!(
                "scripted permutation {:?} does not match {} tokens; keeping input order",
                script,
                tokens.len()
            );
        }
    }
}
