//! Per-round counters and timing.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Counters for the current round.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundStats {
    /// Successful placements this round.
    pub correct_count: u32,

    /// Failed attempts this round.
    pub fail_count: u32,

    /// Consecutive successes since the last failure.
    pub streak_count: u32,

    /// Clock reading when the round started (ms).
    pub started_at_ms: u64,

    /// Time from round start to the latest success (ms).
    pub elapsed_ms: u64,
}

impl RoundStats {
    /// Zeroed counters for a round starting at `now_ms`.
    #[must_use]
    pub fn starting_at(now_ms: u64) -> Self {
        Self {
            started_at_ms: now_ms,
            ..Self::default()
        }
    }

    /// Count a success and stamp the elapsed time.
    pub fn record_success(&mut self, now_ms: u64) {
        self.correct_count += 1;
        self.streak_count += 1;
        self.elapsed_ms = now_ms.saturating_sub(self.started_at_ms);
    }

    /// Count a failure and break the streak.
    pub fn record_failure(&mut self) {
        self.fail_count += 1;
        self.streak_count = 0;
    }

    /// Total attempts that reached a decision.
    #[must_use]
    pub fn attempts(&self) -> u32 {
        self.correct_count + self.fail_count
    }

    /// Elapsed time at the latest success.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        Duration::from_millis(self.elapsed_ms)
    }

    /// Elapsed whole seconds for announcements: floored, at least 1.
    #[must_use]
    pub fn announced_seconds(&self) -> u64 {
        (self.elapsed_ms / 1000).max(1)
    }

    /// Fraction of attempts that succeeded (0.0 with no attempts).
    #[must_use]
    pub fn accuracy(&self) -> f64 {
        match self.attempts() {
            0 => 0.0,
            n => self.correct_count as f64 / n as f64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_default() {
        let stats = RoundStats::starting_at(500);
        assert_eq!(stats.correct_count, 0);
        assert_eq!(stats.fail_count, 0);
        assert_eq!(stats.streak_count, 0);
        assert_eq!(stats.started_at_ms, 500);
        assert_eq!(stats.elapsed_ms, 0);
    }

    #[test]
    fn test_success_and_failure() {
        let mut stats = RoundStats::starting_at(1_000);

        stats.record_success(3_500);
        stats.record_success(4_000);
        assert_eq!(stats.correct_count, 2);
        assert_eq!(stats.streak_count, 2);
        assert_eq!(stats.elapsed(), Duration::from_millis(3_000));

        stats.record_failure();
        assert_eq!(stats.fail_count, 1);
        assert_eq!(stats.streak_count, 0);
        assert_eq!(stats.correct_count, 2);
        assert_eq!(stats.elapsed_ms, 3_000);
        assert_eq!(stats.attempts(), 3);
    }

    #[test]
    fn test_announced_seconds() {
        let mut stats = RoundStats::starting_at(0);
        stats.record_success(0);
        assert_eq!(stats.announced_seconds(), 1);

        stats.record_success(999);
        assert_eq!(stats.announced_seconds(), 1);

        stats.record_success(12_999);
        assert_eq!(stats.announced_seconds(), 12);
    }

    #[test]
    fn test_accuracy() {
        let mut stats = RoundStats::default();
        assert_eq!(stats.accuracy(), 0.0);

        stats.record_success(0);
        stats.record_failure();
        stats.record_success(0);
        stats.record_success(0);
        assert_eq!(stats.accuracy(), 0.75);
    }

    #[test]
    fn test_stats_serialization() {
        let mut stats = RoundStats::starting_at(10);
        stats.record_success(2_010);

        let json = serde_json::to_string(&stats).unwrap();
        let deserialized: RoundStats = serde_json::from_str(&json).unwrap();

        assert_eq!(stats, deserialized);
    }
}
