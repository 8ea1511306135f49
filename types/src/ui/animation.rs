use std::time::Duration;

pub(crate) fn normalized_progress(elapsed: Duration, duration: Duration) -> f32 {
    if duration.is_zero() {
        return 1.0;
    }

    let elapsed = elapsed.as_secs_f32();
    let total = duration.as_secs_f32();
    (elapsed / total).clamp(0.0, 1.0)
}

/// Where an effect is in its lifetime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimPhase {
    Running { progress: f32 },
    Completed,
}

#[derive(Debug, Clone)]
pub(crate) struct EffectTimer {
    elapsed: Duration,
    duration: Duration,
}

impl EffectTimer {
    #[must_use]
    pub(crate) fn new(duration: Duration) -> Self {
        Self {
            elapsed: Duration::ZERO,
            duration,
        }
    }

    pub(crate) fn advance(&mut self, delta: Duration) {
        self.elapsed = self.elapsed.saturating_add(delta);
    }

    #[must_use]
    pub(crate) fn progress(&self) -> f32 {
        normalized_progress(self.elapsed, self.duration)
    }

    /// Time elapsed past the end of the effect.
    #[must_use]
    pub(crate) fn overflow(&self) -> Duration {
        self.elapsed.saturating_sub(self.duration)
    }

    #[must_use]
    pub(crate) fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    #[must_use]
    pub(crate) fn phase(&self) -> AnimPhase {
        if self.is_finished() {
            AnimPhase::Completed
        } else {
            AnimPhase::Running {
                progress: self.progress(),
            }
        }
    }
}
