//! UI state types for the TUI layer.
//!
//! Pure data types with no IO, no async, no ratatui dependency.
//! Used by both the engine (state ownership) and tui (rendering/input).

mod animation;
mod section_effect;

pub use animation::AnimPhase;
pub use section_effect::{
    EffectStage, SECTION_ENTER_DURATION, SECTION_EXIT_DURATION, SectionEffect, SectionEffectKind,
};

/// UI configuration options derived from config/environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiOptions {
    pub ascii_only: bool,
    pub high_contrast: bool,
    /// Skip section entry animations.
    pub reduced_motion: bool,
    /// Always use the compact (menu button) navigation bar.
    pub compact: bool,
}
