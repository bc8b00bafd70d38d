//! The placement board: one slot per pattern position.

use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

use super::pattern::Pattern;
use crate::core::ColorToken;

/// Slots that are either empty or hold the colour the pattern asks for.
///
/// A filled slot is never cleared; a new round replaces the whole board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementBoard {
    slots: SmallVec<[Option<ColorToken>; 6]>,
}

impl PlacementBoard {
    /// Create an all-empty board.
    #[must_use]
    pub fn empty(len: usize) -> Self {
        Self {
            slots: smallvec![None; len],
        }
    }

    /// Number of slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Check if the board has no slots at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Colour placed in a slot, if any.
    #[must_use]
    pub fn placed(&self, index: usize) -> Option<ColorToken> {
        self.slots.get(index).copied().flatten()
    }

    /// Check if a slot exists and is empty.
    #[must_use]
    pub fn is_open(&self, index: usize) -> bool {
        matches!(self.slots.get(index), Some(None))
    }

    /// Fill a slot if it is open and `token` is what `pattern` expects there.
    ///
    /// Returns `true` if the slot was filled.
    pub fn fill_matching(&mut self, pattern: &Pattern, index: usize, token: ColorToken) -> bool {
        if !self.is_open(index) || pattern.get(index) != Some(token) {
            return false;
        }
        self.slots[index] = Some(token);
        true
    }

    /// Number of filled slots.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Number of empty slots.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.len() - self.filled_count()
    }

    /// Check if every slot is filled.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Indices of empty slots.
    pub fn open_slots(&self) -> impl Iterator<Item = usize> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_none())
            .map(|(i, _)| i)
    }

    /// All slots in order.
    pub fn as_slice(&self) -> &[Option<ColorToken>] {
        &self.slots
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Palette;

    fn pattern(ids: &[u8]) -> Pattern {
        let tokens: Vec<_> = ids.iter().copied().map(ColorToken::new).collect();
        Pattern::from_tokens(&Palette::new(["A", "B", "C"]), &tokens).unwrap()
    }

    #[test]
    fn test_empty_board() {
        let board = PlacementBoard::empty(3);
        assert_eq!(board.len(), 3);
        assert_eq!(board.filled_count(), 0);
        assert_eq!(board.remaining(), 3);
        assert!(!board.is_full());
        assert_eq!(board.open_slots().collect::<Vec<_>>(), vec![0, 1, 2]);
    }

    #[test]
    fn test_fill_matching() {
        let pattern = pattern(&[2, 0, 1]);
        let mut board = PlacementBoard::empty(3);

        assert!(board.fill_matching(&pattern, 1, ColorToken::new(0)));
        assert_eq!(board.placed(1), Some(ColorToken::new(0)));
        assert!(!board.is_open(1));
    }

    #[test]
    fn test_fill_rejects_mismatch() {
        let pattern = pattern(&[2, 0, 1]);
        let mut board = PlacementBoard::empty(3);

        assert!(!board.fill_matching(&pattern, 0, ColorToken::new(0)));
        assert_eq!(board, PlacementBoard::empty(3));
    }

    #[test]
    fn test_fill_rejects_filled_and_out_of_range() {
        let pattern = pattern(&[2, 0, 1]);
        let mut board = PlacementBoard::empty(3);

        assert!(board.fill_matching(&pattern, 0, ColorToken::new(2)));
        assert!(!board.fill_matching(&pattern, 0, ColorToken::new(2)));
        assert!(!board.fill_matching(&pattern, 3, ColorToken::new(2)));
        assert!(!board.is_open(3));
    }

    #[test]
    fn test_full_board() {
        let pattern = pattern(&[2, 0, 1]);
        let mut board = PlacementBoard::empty(3);

        for (i, &token) in pattern.as_slice().iter().enumerate() {
            assert!(!board.is_full());
            board.fill_matching(&pattern, i, token);
        }

        assert!(board.is_full());
        assert_eq!(board.remaining(), 0);
        assert_eq!(board.open_slots().count(), 0);
    }
}
