//! Run-loop timing
//!
//! Per-round wall-clock accounting for the timed run loop. The remaining
//! time for a batch is projected from the mean duration of the rounds
//! completed so far, recomputed after every round rather than fixed from
//! the first one.

use std::time::Duration;

/// Accumulated timing across the completed rounds of one run.
///
/// Threaded through the run loop as a value and discarded when the loop
/// ends; nothing here is persisted or shared.
#[derive(Debug, Clone, Default)]
pub struct TimingState {
    total: Duration,
    completed: u32,
}

impl TimingState {
    /// Fresh state with no rounds recorded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one completed round.
    pub fn record(&mut self, round_time: Duration) {
        self.total += round_time;
        self.completed += 1;
    }

    /// Total elapsed time across recorded rounds.
    pub fn total(&self) -> Duration {
        self.total
    }

    /// Number of rounds recorded so far.
    pub fn completed(&self) -> u32 {
        self.completed
    }

    /// Projected remaining time for a batch of `total_rounds`:
    /// `(total / completed) * (total_rounds - completed)`.
    ///
    /// `None` until at least one round has been recorded, so a zero-round
    /// run never divides by zero.
    pub fn estimated_remaining(&self, total_rounds: u32) -> Option<Duration> {
        if self.completed == 0 {
            return None;
        }
        let mean = self.total / self.completed;
        Some(mean * total_rounds.saturating_sub(self.completed))
    }
}

/// Format a duration as `DDd HHh MMmin SSs`.
///
/// Each unit comes from successive floor division of the whole seconds:
/// seconds into minutes, minutes into hours, hours into days.
pub fn format_dhms(duration: Duration) -> String {
    let secs = duration.as_secs();
    let (minutes, seconds) = (secs / 60, secs % 60);
    let (hours, minutes) = (minutes / 60, minutes % 60);
    let (days, hours) = (hours / 24, hours % 24);
    format!("{days:02}d {hours:02}h {minutes:02}min {seconds:02}s")
}
