use std::time::{Duration, Instant};

/// Paces a loop to one iteration per `target_delta_time`, whatever the iteration itself cost.
pub struct Sleeper {
    pub target_delta_time: Duration,
    pub last_instant: Option<Instant>,
}

impl Sleeper {
    pub fn new(target_delta_time: Duration) -> Self {
        Self {
            target_delta_time,
            last_instant: None,
        }
    }

    /// Sleeps out whatever is left of the current interval. Returns whether it slept at all.
    pub fn sleep(&mut self) -> bool {
        let slept = if let Some(remaining) = self.remaining() {
            spin_sleep::sleep(remaining);
            true
        } else {
            false
        };

        self.last_instant = Some(Instant::now());
        slept
    }

    /// Time left until the current interval is over, `None` if we're already late.
    pub fn remaining(&self) -> Option<Duration> {
        let remaining = match self.last_instant {
            Some(last_instant) => self
                .target_delta_time
                .checked_sub(last_instant.elapsed())?,
            // Nothing to measure against yet, so the whole interval is left.
            None => self.target_delta_time,
        };

        (!remaining.is_zero()).then_some(remaining)
    }
}
