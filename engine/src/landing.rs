//! The mounted landing view and the timers it owns.

use std::time::Duration;

use folio_types::{ConfigurationError, TypewriterSettings};
use tracing::debug;

use crate::blinker::CursorBlinker;
use crate::typewriter::{RoleTypewriter, TypewriterStep};

/// Typewriter and cursor for one mount of the landing view.
///
/// Dropping the view cancels both pending ticks, so a replaced or unmounted
/// instance can never mutate state again.
#[derive(Debug)]
pub struct LandingView {
    typewriter: RoleTypewriter,
    blinker: CursorBlinker,
}

impl LandingView {
    pub fn mount(settings: &TypewriterSettings) -> Result<Self, ConfigurationError> {
        let blinker = CursorBlinker::new(settings.timings().blink)?;
        let typewriter = RoleTypewriter::new(settings);
        debug!(roles = settings.roles().len(), "landing view mounted");
        Ok(Self {
            typewriter,
            blinker,
        })
    }

    pub fn advance(&mut self, delta: Duration) -> Vec<TypewriterStep> {
        self.blinker.advance(delta);
        self.typewriter.advance(delta)
    }

    #[must_use]
    pub fn typewriter(&self) -> &RoleTypewriter {
        &self.typewriter
    }

    #[must_use]
    pub fn blinker(&self) -> &CursorBlinker {
        &self.blinker
    }
}

impl Drop for LandingView {
    fn drop(&mut self) {
        let typewriter_pending = self.typewriter.cancel();
        let blinker_pending = self.blinker.cancel();
        debug!(
            typewriter_pending,
            blinker_pending, "landing view unmounted, pending ticks cancelled"
        );
    }
}
