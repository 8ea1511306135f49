//! Rotating role typewriter: type, pause, erase, advance, repeat.

use std::time::Duration;

use folio_types::{
    ConfigurationError, RoleColor, Timings, TypewriterSettings, color_of, grapheme_len,
    grapheme_prefix,
};

use crate::timer::PendingTimer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Typing,
    Pausing,
    Erasing,
}

/// Observable effect of one applied tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypewriterStep {
    /// A character was revealed; `revealed` is the new prefix length.
    Typed { revealed: usize },
    /// A character was removed; `revealed` is the new prefix length.
    Erased { revealed: usize },
    PhaseEntered(Phase),
    /// Moved on to the role at `role_index` with an empty prefix.
    Advanced { role_index: usize },
}

#[derive(Debug)]
pub struct RoleTypewriter {
    roles: Vec<String>,
    /// Grapheme count per role, parallel to `roles`.
    role_lens: Vec<usize>,
    timings: Timings,
    role_index: usize,
    revealed: usize,
    phase: Phase,
    timer: PendingTimer,
}

impl RoleTypewriter {
    /// Start a fresh typewriter on the first role.
    ///
    /// Nothing is shown for the grace period; the first character lands one
    /// typing delay after it.
    #[must_use]
    pub fn new(settings: &TypewriterSettings) -> Self {
        let roles = settings.roles().to_vec();
        let role_lens = roles.iter().map(|role| grapheme_len(role)).collect();
        let timings = settings.timings();
        let mut typewriter = Self {
            roles,
            role_lens,
            timings,
            role_index: 0,
            revealed: 0,
            phase: Phase::Typing,
            timer: PendingTimer::default(),
        };
        typewriter.enter_typing(timings.initial, &mut Vec::new());
        typewriter
    }

    pub fn with_roles<I, S>(roles: I, timings: Timings) -> Result<Self, ConfigurationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let settings = TypewriterSettings::new(roles, timings)?;
        Ok(Self::new(&settings))
    }

    /// Apply every tick that falls due within `delta`, in order.
    pub fn advance(&mut self, delta: Duration) -> Vec<TypewriterStep> {
        let mut steps = Vec::new();
        let mut budget = delta;
        while self.timer.consume(&mut budget) {
            self.fire(&mut steps);
        }
        steps
    }

    /// Cancel the pending tick. The typewriter stays frozen afterwards.
    pub fn cancel(&mut self) -> bool {
        self.timer.cancel()
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.timer.is_armed()
    }

    #[must_use]
    pub fn displayed_text(&self) -> &str {
        grapheme_prefix(self.current_role(), self.revealed)
    }

    #[must_use]
    pub fn current_role(&self) -> &str {
        &self.roles[self.role_index]
    }

    #[must_use]
    pub fn role_index(&self) -> usize {
        self.role_index
    }

    #[must_use]
    pub fn roles(&self) -> &[String] {
        &self.roles
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Color of the whole current role, independent of how much is shown.
    #[must_use]
    pub fn color(&self) -> RoleColor {
        color_of(self.current_role())
    }

    #[must_use]
    pub fn next_tick_in(&self) -> Option<Duration> {
        self.timer.remaining()
    }

    fn current_len(&self) -> usize {
        self.role_lens[self.role_index]
    }

    fn fire(&mut self, steps: &mut Vec<TypewriterStep>) {
        match self.phase {
            Phase::Typing => {
                self.revealed += 1;
                steps.push(TypewriterStep::Typed {
                    revealed: self.revealed,
                });
                if self.revealed >= self.current_len() {
                    self.enter_pausing(steps);
                } else {
                    self.timer.arm(self.timings.typing);
                }
            }
            Phase::Pausing => {
                self.phase = Phase::Erasing;
                steps.push(TypewriterStep::PhaseEntered(Phase::Erasing));
                if self.revealed > 0 {
                    self.timer.arm(self.timings.erase);
                } else {
                    self.advance_role(steps);
                }
            }
            Phase::Erasing => {
                self.revealed = self.revealed.saturating_sub(1);
                steps.push(TypewriterStep::Erased {
                    revealed: self.revealed,
                });
                if self.revealed == 0 {
                    self.advance_role(steps);
                } else {
                    self.timer.arm(self.timings.erase);
                }
            }
        }
    }

    /// `lead_in` delays the first character (the mount grace period).
    fn enter_typing(&mut self, lead_in: Duration, steps: &mut Vec<TypewriterStep>) {
        self.phase = Phase::Typing;
        steps.push(TypewriterStep::PhaseEntered(Phase::Typing));
        if self.current_len() == 0 {
            // Nothing to type: hold the empty label for the grace period
            // (if any) plus the normal pause.
            self.phase = Phase::Pausing;
            steps.push(TypewriterStep::PhaseEntered(Phase::Pausing));
            self.timer.arm(lead_in + self.timings.pause);
        } else {
            self.timer.arm(lead_in + self.timings.typing);
        }
    }

    fn enter_pausing(&mut self, steps: &mut Vec<TypewriterStep>) {
        self.phase = Phase::Pausing;
        steps.push(TypewriterStep::PhaseEntered(Phase::Pausing));
        self.timer.arm(self.timings.pause);
    }

    fn advance_role(&mut self, steps: &mut Vec<TypewriterStep>) {
        self.role_index = (self.role_index + 1) % self.roles.len();
        self.revealed = 0;
        steps.push(TypewriterStep::Advanced {
            role_index: self.role_index,
        });
        self.enter_typing(Duration::ZERO, steps);
    }
}
