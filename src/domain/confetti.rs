//! src/domain/confetti.rs
use std::time::{Duration, Instant};

/// A one-shot celebration that stops by itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Confetti {
    started_at: Instant,
}

impl Confetti {
    pub const DURATION: Duration = Duration::from_secs(5);

    pub fn start(now: Instant) -> Self {
        Self { started_at: now }
    }

    pub fn is_active(&self, now: Instant) -> bool {
        !self.remaining(now).is_zero()
    }

    /// Time left before the effect stops, zero once it has.
    pub fn remaining(&self, now: Instant) -> Duration {
        let elapsed = now.saturating_duration_since(self.started_at);
        Self::DURATION.saturating_sub(elapsed)
    }
}
