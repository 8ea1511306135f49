//! Single pending delayed tick, owned by the component it drives.

use std::time::Duration;

/// At most one outstanding tick.
///
/// The owner re-arms only after applying the previous tick's effect, so ticks
/// never overlap. Elapsed time is fed in with [`PendingTimer::consume`];
/// leftover time from one tick carries into the next, keeping long runs
/// drift-free regardless of frame pacing.
#[derive(Debug, Default)]
pub struct PendingTimer {
    remaining: Option<Duration>,
}

impl PendingTimer {
    #[must_use]
    pub fn armed(delay: Duration) -> Self {
        Self {
            remaining: Some(delay),
        }
    }

    pub fn arm(&mut self, delay: Duration) {
        debug_assert!(
            self.remaining.is_none(),
            "a tick is already pending; fire or cancel it first"
        );
        self.remaining = Some(delay);
    }

    /// Drop the pending tick. Returns whether one was pending.
    pub fn cancel(&mut self) -> bool {
        self.remaining.take().is_some()
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.remaining.is_some()
    }

    #[must_use]
    pub fn remaining(&self) -> Option<Duration> {
        self.remaining
    }

    /// Spend elapsed time from `budget` on the pending tick.
    ///
    /// Returns `true` when the tick came due. The timer is then disarmed and
    /// `budget` holds the time left over after the deadline.
    pub fn consume(&mut self, budget: &mut Duration) -> bool {
        match self.remaining {
            None => false,
            Some(remaining) if remaining <= *budget => {
                *budget -= remaining;
                self.remaining = None;
                true
            }
            Some(remaining) => {
                self.remaining = Some(remaining - *budget);
                *budget = Duration::ZERO;
                false
            }
        }
    }
}
