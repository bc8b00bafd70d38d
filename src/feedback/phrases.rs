//! Phrase pools as data.
//!
//! Each `PhraseTier` names one pool. Selection is "pick uniformly from the
//! pool for the tier", so a host can localise the game by swapping the book
//! without touching the engine.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::event::FeedbackKind;
use crate::core::error::{ConfigError, ConfigResult};

/// Placeholder replaced by elapsed whole seconds in completion phrases.
pub const SECONDS_PLACEHOLDER: &str = "{seconds}";

/// Named phrase pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PhraseTier {
    /// Success while on a long streak.
    Streak,
    /// Success after many correct placements.
    Expert,
    /// Success after a handful of correct placements.
    DoingWell,
    /// Any other success.
    Success,
    /// Failure after many misses.
    Encouraging,
    /// Failure after a handful of misses.
    Reassuring,
    /// Any other failure.
    Failure,
    /// Round completion; phrases may cite `{seconds}`.
    Complete,
}

impl PhraseTier {
    /// Every tier, in policy order.
    pub const ALL: [PhraseTier; 8] = [
        PhraseTier::Streak,
        PhraseTier::Expert,
        PhraseTier::DoingWell,
        PhraseTier::Success,
        PhraseTier::Encouraging,
        PhraseTier::Reassuring,
        PhraseTier::Failure,
        PhraseTier::Complete,
    ];

    /// The feedback kind this tier belongs to.
    #[must_use]
    pub fn kind(self) -> FeedbackKind {
        match self {
            PhraseTier::Streak | PhraseTier::Expert | PhraseTier::DoingWell | PhraseTier::Success => {
                FeedbackKind::Success
            }
            PhraseTier::Encouraging | PhraseTier::Reassuring | PhraseTier::Failure => {
                FeedbackKind::Failure
            }
            PhraseTier::Complete => FeedbackKind::RoundComplete,
        }
    }
}

/// Phrase pools keyed by tier, with a locale hint for the speech engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhraseBook {
    /// BCP 47 tag the phrases are written in.
    pub locale: String,

    pools: FxHashMap<PhraseTier, Vec<String>>,
}

impl PhraseBook {
    /// Create an empty book for a locale.
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            pools: FxHashMap::default(),
        }
    }

    /// The shipped Spanish phrases.
    #[must_use]
    pub fn spanish() -> Self {
        Self::new("es-ES")
            .with_pool(
                PhraseTier::Streak,
                [
                    "¡Estás en racha!",
                    "¡Imparable!",
                    "¡Otra más, qué racha!",
                    "¡No fallas ni una!",
                ],
            )
            .with_pool(
                PhraseTier::Expert,
                [
                    "¡Eres todo un experto!",
                    "¡Qué maestría!",
                    "¡Lo haces como un profesional!",
                ],
            )
            .with_pool(
                PhraseTier::DoingWell,
                [
                    "¡Lo estás haciendo muy bien!",
                    "¡Vas por buen camino!",
                    "¡Cada vez mejor!",
                ],
            )
            .with_pool(
                PhraseTier::Success,
                [
                    "¡Excelente trabajo!",
                    "¡Muy bien!",
                    "¡Lo estás logrando!",
                    "¡Qué gran acierto!",
                    "¡Sigue así!",
                    "¡Perfecto!",
                    "¡Eres un campeón!",
                    "¡Vas muy bien!",
                    "¡Impresionante!",
                ],
            )
            .with_pool(
                PhraseTier::Encouraging,
                [
                    "¡Tú puedes, no te rindas!",
                    "Sigue intentando, ya casi lo tienes.",
                    "Cada intento te acerca más.",
                ],
            )
            .with_pool(
                PhraseTier::Reassuring,
                [
                    "Tranquilo, mira bien los colores.",
                    "No pasa nada, inténtalo de nuevo.",
                    "Fíjate en la sombra del color.",
                ],
            )
            .with_pool(
                PhraseTier::Failure,
                [
                    "Casi, pero no ahí.",
                    "Intenta otra vez.",
                    "Ups, prueba en otro lugar.",
                    "No te preocupes, sigue intentando.",
                    "Ahí no va.",
                    "Casi lo logras.",
                ],
            )
            .with_pool(
                PhraseTier::Complete,
                [
                    "¡Felicidades, completaste el patrón en {seconds} segundos!",
                    "¡Lo lograste en {seconds} segundos!",
                ],
            )
    }

    /// Replace the pool for a tier.
    #[must_use]
    pub fn with_pool<I, S>(mut self, tier: PhraseTier, phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.pools
            .insert(tier, phrases.into_iter().map(Into::into).collect());
        self
    }

    /// Get the pool for a tier. Empty if the tier has no pool.
    #[must_use]
    pub fn pool(&self, tier: PhraseTier) -> &[String] {
        self.pools.get(&tier).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Check that every tier has at least one phrase.
    pub fn validate(&self) -> ConfigResult<()> {
        match PhraseTier::ALL.iter().find(|t| self.pool(**t).is_empty()) {
            Some(&tier) => Err(ConfigError::EmptyPool(tier)),
            None => Ok(()),
        }
    }
}

impl Default for PhraseBook {
    fn default() -> Self {
        Self::spanish()
    }
}

/// Fill the `{seconds}` placeholder of a completion phrase.
#[must_use]
pub fn render_completion(template: &str, seconds: u64) -> String {
    template.replace(SECONDS_PLACEHOLDER, &seconds.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spanish_book_complete() {
        let book = PhraseBook::spanish();
        assert!(book.validate().is_ok());
        assert_eq!(book.locale, "es-ES");
        assert_eq!(book.pool(PhraseTier::Success).len(), 9);
        assert_eq!(book.pool(PhraseTier::Failure).len(), 6);
    }

    #[test]
    fn test_completion_pool_cites_seconds() {
        let book = PhraseBook::spanish();
        assert!(book
            .pool(PhraseTier::Complete)
            .iter()
            .all(|p| p.contains(SECONDS_PLACEHOLDER)));
    }

    #[test]
    fn test_missing_pool() {
        let book = PhraseBook::new("en-US").with_pool(PhraseTier::Success, ["Great!"]);
        assert!(book.pool(PhraseTier::Streak).is_empty());
        assert!(matches!(book.validate(), Err(ConfigError::EmptyPool(PhraseTier::Streak))));
    }

    #[test]
    fn test_tier_kind() {
        assert_eq!(PhraseTier::Streak.kind(), FeedbackKind::Success);
        assert_eq!(PhraseTier::DoingWell.kind(), FeedbackKind::Success);
        assert_eq!(PhraseTier::Encouraging.kind(), FeedbackKind::Failure);
        assert_eq!(PhraseTier::Failure.kind(), FeedbackKind::Failure);
        assert_eq!(PhraseTier::Complete.kind(), FeedbackKind::RoundComplete);
    }

    #[test]
    fn test_render_completion() {
        assert_eq!(
            render_completion("Done in {seconds}s ({seconds})", 12),
            "Done in 12s (12)"
        );
        assert_eq!(render_completion("No placeholder", 3), "No placeholder");
    }

    #[test]
    fn test_book_serde() {
        let book = PhraseBook::spanish();
        let json = serde_json::to_string(&book).unwrap();
        let deserialized: PhraseBook = serde_json::from_str(&json).unwrap();
        assert_eq!(book, deserialized);
    }
}
