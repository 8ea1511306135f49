use std::time::Duration;

use folio_types::ConfigurationError;

use crate::timer::PendingTimer;

/// Fixed-period cursor visibility toggle.
///
/// Knows nothing about the typewriter it is drawn next to.
#[derive(Debug)]
pub struct CursorBlinker {
    visible: bool,
    period: Duration,
    timer: PendingTimer,
}

impl CursorBlinker {
    pub fn new(period: Duration) -> Result<Self, ConfigurationError> {
        if period.is_zero() {
            return Err(ConfigurationError::NonPositiveTiming {
                name: "blink period",
            });
        }
        Ok(Self {
            visible: true,
            period,
            timer: PendingTimer::armed(period),
        })
    }

    pub fn tick(&mut self) {
        self.visible = !self.visible;
    }

    /// Flip once per elapsed period. Returns the number of flips.
    pub fn advance(&mut self, delta: Duration) -> usize {
        let mut flips = 0;
        let mut budget = delta;
        while self.timer.consume(&mut budget) {
            self.tick();
            self.timer.arm(self.period);
            flips += 1;
        }
        flips
    }

    pub fn cancel(&mut self) -> bool {
        self.timer.cancel()
    }

    #[must_use]
    pub fn visible(&self) -> bool {
        self.visible
    }
}

#[cfg(test)]
mod tests {
    use super::CursorBlinker;
    use folio_types::ConfigurationError;
    use std::time::Duration;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn zero_period_rejected() {
        assert_eq!(
            CursorBlinker::new(Duration::ZERO).unwrap_err(),
            ConfigurationError::NonPositiveTiming {
                name: "blink period"
            }
        );
    }

    #[test]
    fn starts_visible() {
        let blinker = CursorBlinker::new(ms(500)).unwrap();
        assert!(blinker.visible());
    }

    #[test]
    fn tick_flips() {
        let mut blinker = CursorBlinker::new(ms(500)).unwrap();
        blinker.tick();
        assert!(!blinker.visible());
        blinker.tick();
        assert!(blinker.visible());
    }

    #[test]
    fn flips_exactly_on_period_boundaries() {
        let mut blinker = CursorBlinker::new(ms(500)).unwrap();
        assert_eq!(blinker.advance(ms(499)), 0);
        assert!(blinker.visible());
        assert_eq!(blinker.advance(ms(1)), 1);
        assert!(!blinker.visible());
        assert_eq!(blinker.advance(ms(500)), 1);
        assert!(blinker.visible());
    }

    #[test]
    fn large_delta_applies_every_flip() {
        let mut blinker = CursorBlinker::new(ms(500)).unwrap();
        assert_eq!(blinker.advance(ms(2750)), 5);
        assert!(!blinker.visible());
        // 250ms of the next period already elapsed.
        assert_eq!(blinker.advance(ms(250)), 1);
    }

    #[test]
    fn cancelled_blinker_freezes() {
        let mut blinker = CursorBlinker::new(ms(500)).unwrap();
        assert!(blinker.cancel());
        assert_eq!(blinker.advance(Duration::from_secs(10)), 0);
        assert!(blinker.visible());
    }
}
