//! Exit and entry animations for content sections.
//!
//! A section change plays the outgoing section's exit, then the incoming
//! section's entry.

use std::time::Duration;

use super::animation::{AnimPhase, EffectTimer};
use crate::SectionId;

/// Entry motion used when a section becomes active.
pub const SECTION_ENTER_DURATION: Duration = Duration::from_millis(800);
/// Exit motion played by the section being left.
pub const SECTION_EXIT_DURATION: Duration = Duration::from_millis(800);

/// Which half of a section change an effect animates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectStage {
    /// The previous section leaves.
    Exit,
    /// The active section arrives.
    Enter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionEffectKind {
    /// Rises from below.
    FadeUp,
    /// Slides in from the right.
    SlideLeft,
    /// Rises further from below.
    SlideUp,
    /// Grows from a slightly smaller frame.
    Scale,
    /// Unfolds from a single row.
    Fold,
}

impl SectionEffectKind {
    #[must_use]
    pub const fn for_section(section: SectionId) -> Self {
        match section {
            SectionId::Home => SectionEffectKind::FadeUp,
            SectionId::About => SectionEffectKind::SlideLeft,
            SectionId::Skills => SectionEffectKind::SlideUp,
            SectionId::Projects => SectionEffectKind::Scale,
            SectionId::Contact => SectionEffectKind::Fold,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SectionEffect {
    section: SectionId,
    kind: SectionEffectKind,
    stage: EffectStage,
    timer: EffectTimer,
}

impl SectionEffect {
    #[must_use]
    pub fn enter(section: SectionId, duration: Duration) -> Self {
        Self::new(section, EffectStage::Enter, duration)
    }

    #[must_use]
    pub fn exit(section: SectionId, duration: Duration) -> Self {
        Self::new(section, EffectStage::Exit, duration)
    }

    fn new(section: SectionId, stage: EffectStage, duration: Duration) -> Self {
        Self {
            section,
            kind: SectionEffectKind::for_section(section),
            stage,
            timer: EffectTimer::new(duration),
        }
    }

    pub fn advance(&mut self, delta: Duration) {
        self.timer.advance(delta);
    }

    #[must_use]
    pub fn phase(&self) -> AnimPhase {
        self.timer.phase()
    }

    /// Normalized progress in `0.0..=1.0`.
    #[must_use]
    pub fn progress(&self) -> f32 {
        self.timer.progress()
    }

    /// Time advanced past completion, owed to whatever follows this effect.
    #[must_use]
    pub fn overflow(&self) -> Duration {
        self.timer.overflow()
    }

    #[must_use]
    pub fn kind(&self) -> SectionEffectKind {
        self.kind
    }

    #[must_use]
    pub fn stage(&self) -> EffectStage {
        self.stage
    }

    #[must_use]
    pub fn section(&self) -> SectionId {
        self.section
    }
}
