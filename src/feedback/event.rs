//! Feedback events emitted to the audio collaborator.
//!
//! An event is a phrase plus a tone hint. The engine decides *what* to say;
//! the host owns the voice, locale, queueing and playback timing.

use serde::{Deserialize, Serialize};

use super::phrases::PhraseTier;

/// What happened.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeedbackKind {
    /// A colour was placed in its matching slot.
    Success,
    /// A colour was tried on a slot it does not match.
    Failure,
    /// The last empty slot was filled.
    RoundComplete,
}

/// Intended vocal tone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tone {
    Neutral,
    Upbeat,
    Soothing,
}

/// Pitch and rate multipliers for a speech engine.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpeechParams {
    pub pitch: f32,
    pub rate: f32,
}

impl Tone {
    /// Suggested speech parameters. Hosts may ignore them.
    #[must_use]
    pub fn speech_params(self) -> SpeechParams {
        match self {
            Tone::Neutral => SpeechParams { pitch: 1.0, rate: 1.0 },
            Tone::Upbeat => SpeechParams { pitch: 1.3, rate: 1.1 },
            Tone::Soothing => SpeechParams { pitch: 0.9, rate: 0.9 },
        }
    }
}

impl FeedbackKind {
    /// The tone every event of this kind carries.
    #[must_use]
    pub fn tone(self) -> Tone {
        match self {
            FeedbackKind::Success => Tone::Upbeat,
            FeedbackKind::Failure => Tone::Soothing,
            FeedbackKind::RoundComplete => Tone::Neutral,
        }
    }
}

/// A single spoken-feedback directive.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackEvent {
    /// The outcome being reported.
    pub kind: FeedbackKind,

    /// Text to speak.
    pub phrase: String,

    /// Tone hint for the voice.
    pub tone: Tone,

    /// Pool the phrase was drawn from.
    pub tier: PhraseTier,
}

impl FeedbackEvent {
    /// Create an event; the tone follows from the kind.
    pub fn new(kind: FeedbackKind, tier: PhraseTier, phrase: impl Into<String>) -> Self {
        Self {
            kind,
            phrase: phrase.into(),
            tone: kind.tone(),
            tier,
        }
    }

    /// Check if this event reports round completion.
    #[must_use]
    pub fn is_completion(&self) -> bool {
        self.kind == FeedbackKind::RoundComplete
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tone_follows_kind() {
        let ok = FeedbackEvent::new(FeedbackKind::Success, PhraseTier::Success, "¡Muy bien!");
        assert_eq!(ok.tone, Tone::Upbeat);

        let miss = FeedbackEvent::new(FeedbackKind::Failure, PhraseTier::Failure, "Ahí no va.");
        assert_eq!(miss.tone, Tone::Soothing);

        let done = FeedbackEvent::new(FeedbackKind::RoundComplete, PhraseTier::Complete, "¡Listo!");
        assert_eq!(done.tone, Tone::Neutral);
        assert!(done.is_completion());
        assert!(!ok.is_completion());
    }

    #[test]
    fn test_speech_params() {
        assert_eq!(Tone::Upbeat.speech_params(), SpeechParams { pitch: 1.3, rate: 1.1 });
        assert_eq!(Tone::Soothing.speech_params(), SpeechParams { pitch: 0.9, rate: 0.9 });
        assert_eq!(Tone::Neutral.speech_params(), SpeechParams { pitch: 1.0, rate: 1.0 });
    }

    #[test]
    fn test_event_serde() {
        let event = FeedbackEvent::new(FeedbackKind::Failure, PhraseTier::Reassuring, "Casi lo logras.");

        let json = serde_json::to_string(&event).unwrap();
        let deserialized: FeedbackEvent = serde_json::from_str(&json).unwrap();

        assert_eq!(event, deserialized);
    }
}
