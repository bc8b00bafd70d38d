//! The target pattern for a round.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{ColorToken, Palette, ShuffleSource};

/// A permutation of the palette.
///
/// Position `i` is the colour slot `i` must receive. Generated once per
/// round and never mutated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pattern {
    /// SmallVec keeps the standard six-colour pattern inline.
    tokens: SmallVec<[ColorToken; 6]>,
}

impl Pattern {
    /// Shuffle the palette into a new pattern.
    pub fn generate(palette: &Palette, source: &mut dyn ShuffleSource) -> Self {
        let mut tokens: SmallVec<[ColorToken; 6]> = palette.tokens().collect();
        source.shuffle_tokens(&mut tokens);
        Self { tokens }
    }

    /// Build a pattern from explicit tokens.
    ///
    /// Returns `None` unless `tokens` is a permutation of `palette`.
    pub fn from_tokens(palette: &Palette, tokens: &[ColorToken]) -> Option<Self> {
        let pattern = Self {
            tokens: SmallVec::from_slice(tokens),
        };
        pattern.is_permutation_of(palette).then_some(pattern)
    }

    /// Get the target colour for a slot.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<ColorToken> {
        self.tokens.get(index).copied()
    }

    /// Number of positions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check if the pattern has no positions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// All target colours in slot order.
    pub fn as_slice(&self) -> &[ColorToken] {
        &self.tokens
    }

    /// Slot index that expects `token`, if any.
    #[must_use]
    pub fn slot_of(&self, token: ColorToken) -> Option<usize> {
        self.tokens.iter().position(|&t| t == token)
    }

    /// Check that every palette colour appears exactly once.
    #[must_use]
    pub fn is_permutation_of(&self, palette: &Palette) -> bool {
        if self.tokens.len() != palette.len() {
            return false;
        }
        let mut seen = vec![false; palette.len()];
        for token in &self.tokens {
            match seen.get_mut(token.index()) {
                Some(flag) if !*flag => *flag = true,
                _ => return false,
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FixedShuffle, GameRng};

    fn tokens(ids: &[u8]) -> Vec<ColorToken> {
        ids.iter().copied().map(ColorToken::new).collect()
    }

    #[test]
    fn test_generate_is_permutation() {
        let palette = Palette::standard();
        let mut rng = GameRng::new(42);

        for _ in 0..50 {
            let pattern = Pattern::generate(&palette, &mut rng);
            assert_eq!(pattern.len(), 6);
            assert!(pattern.is_permutation_of(&palette));
        }
    }

    #[test]
    fn test_generate_from_fixed_shuffle() {
        let palette = Palette::standard();
        let mut fixed = FixedShuffle::new(tokens(&[2, 0, 5, 1, 4, 3]));

        let pattern = Pattern::generate(&palette, &mut fixed);

        assert_eq!(pattern.as_slice(), tokens(&[2, 0, 5, 1, 4, 3]).as_slice());
        assert_eq!(pattern.get(2), Some(ColorToken::new(5)));
        assert_eq!(pattern.get(6), None);
        assert_eq!(pattern.slot_of(ColorToken::new(4)), Some(4));
    }

    #[test]
    fn test_from_tokens_validates() {
        let palette = Palette::new(["A", "B", "C"]);
        assert!(Pattern::from_tokens(&palette, &tokens(&[2, 0, 1])).is_some());
        assert!(Pattern::from_tokens(&palette, &tokens(&[0, 0, 1])).is_none());
        assert!(Pattern::from_tokens(&palette, &tokens(&[0, 1])).is_none());
        assert!(Pattern::from_tokens(&palette, &tokens(&[0, 1, 3])).is_none());
    }

    #[test]
    fn test_seeded_patterns_vary() {
        let palette = Palette::standard();
        let mut rng = GameRng::new(7);
        let patterns: Vec<_> = (0..10).map(|_| Pattern::generate(&palette, &mut rng)).collect();
        assert!(patterns.windows(2).any(|w| w[0] != w[1]));
    }
}
