//! Result of a placement attempt.

use smallvec::SmallVec;

use crate::core::ColorToken;
use crate::feedback::{FeedbackEvent, FeedbackSink};

/// Why an attempt was ignored. Ignored attempts change nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Slot index past the end of the board.
    SlotOutOfRange,
    /// Slot already holds a colour.
    SlotFilled,
    /// No colour selected yet.
    NoSelection,
    /// Round is complete; reset to play again.
    RoundOver,
}

/// What the attempt did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlacementResult {
    /// The colour matched and now fills the slot.
    Placed { slot: usize, token: ColorToken },
    /// The colour did not match; the board is unchanged.
    Rejected { slot: usize, token: ColorToken },
    /// Preconditions failed; nothing happened.
    Ignored(IgnoreReason),
}

/// An attempt's result plus the feedback it produced.
///
/// Placed carries one Success event, plus a RoundComplete event when it
/// filled the last slot. Rejected carries one Failure event. Ignored
/// carries none.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlacementOutcome {
    pub result: PlacementResult,
    pub events: SmallVec<[FeedbackEvent; 2]>,
}

impl PlacementOutcome {
    pub(crate) fn ignored(reason: IgnoreReason) -> Self {
        Self {
            result: PlacementResult::Ignored(reason),
            events: SmallVec::new(),
        }
    }

    /// Check if the colour was placed.
    #[must_use]
    pub fn is_placed(&self) -> bool {
        matches!(self.result, PlacementResult::Placed { .. })
    }

    /// Check if the colour was rejected.
    #[must_use]
    pub fn is_rejected(&self) -> bool {
        matches!(self.result, PlacementResult::Rejected { .. })
    }

    /// Check if the attempt was a no-op.
    #[must_use]
    pub fn is_ignored(&self) -> bool {
        matches!(self.result, PlacementResult::Ignored(_))
    }

    /// Check if this attempt completed the round.
    #[must_use]
    pub fn completed_round(&self) -> bool {
        self.events.iter().any(FeedbackEvent::is_completion)
    }

    /// Hand every event to `sink`, in order.
    pub fn dispatch(&self, sink: &mut dyn FeedbackSink) {
        for event in &self.events {
            sink.deliver(event);
        }
    }
}
