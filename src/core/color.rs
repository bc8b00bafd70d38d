//! Colour tokens and the palette they are drawn from.
//!
//! A `ColorToken` is an opaque index into a `Palette`. The engine only ever
//! compares tokens for equality; names exist for display and for hosts that
//! map tokens to artwork.

use serde::{Deserialize, Serialize};

/// Opaque colour identifier. Palettes define what tokens exist.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ColorToken(pub u8);

impl ColorToken {
    /// Create a new colour token.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw token value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Get the token as a palette index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for ColorToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Color({})", self.0)
    }
}

/// The fixed set of selectable colours.
///
/// Token `i` names `names[i]`. Palettes are immutable once the engine is
/// built; validation (non-empty, unique names) happens in `EngineConfig`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    names: Vec<String>,
}

impl Palette {
    /// Maximum palette size addressable by a `ColorToken`.
    pub const MAX_COLORS: usize = u8::MAX as usize + 1;

    /// Create a palette from colour names.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// The six garment colours of the shipped game.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(["RED", "BLUE", "GREEN", "LILAC", "DARK_BLUE", "ORANGE"])
    }

    /// Number of colours.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check if the palette has no colours.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Check if a token belongs to this palette.
    #[must_use]
    pub fn contains(&self, token: ColorToken) -> bool {
        token.index() < self.names.len()
    }

    /// Get a colour's display name.
    #[must_use]
    pub fn name(&self, token: ColorToken) -> Option<&str> {
        self.names.get(token.index()).map(String::as_str)
    }

    /// Look up a token by name (case-insensitive).
    #[must_use]
    pub fn token_named(&self, name: &str) -> Option<ColorToken> {
        self.names
            .iter()
            .position(|n| n.eq_ignore_ascii_case(name))
            .map(|i| ColorToken::new(i as u8))
    }

    /// All names in token order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Iterate over all tokens in palette order.
    pub fn tokens(&self) -> impl Iterator<Item = ColorToken> + '_ {
        (0..self.names.len()).map(|i| ColorToken::new(i as u8))
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::standard()
    }
}
