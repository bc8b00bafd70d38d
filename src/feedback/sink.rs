//! Delivery of feedback events to the host.

use super::event::FeedbackEvent;

/// Receives feedback directives, typically a text-to-speech adapter.
///
/// The sink owns playback policy (flushing, queueing, cancellation).
pub trait FeedbackSink {
    /// Handle one event.
    fn deliver(&mut self, event: &FeedbackEvent);
}

/// Collects every delivered event.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    pub events: Vec<FeedbackEvent>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Phrases in delivery order.
    pub fn phrases(&self) -> impl Iterator<Item = &str> {
        self.events.iter().map(|e| e.phrase.as_str())
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl FeedbackSink for RecordingSink {
    fn deliver(&mut self, event: &FeedbackEvent) {
        self.events.push(event.clone());
    }
}

/// Closures are sinks.
impl<F: FnMut(&FeedbackEvent)> FeedbackSink for F {
    fn deliver(&mut self, event: &FeedbackEvent) {
        self(event)
    }
}
