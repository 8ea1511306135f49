//! Core engine for Folio - timed state machines and app state.
//!
//! This crate contains the App state without TUI dependencies. Time enters
//! only through [`App::advance`] / [`App::tick`], so every component can be
//! driven deterministically in tests.

mod app;
mod blinker;
mod landing;
mod navigator;
mod timer;
mod typewriter;

pub use app::{App, MAX_FRAME_DELTA};
pub use blinker::CursorBlinker;
pub use landing::LandingView;
pub use navigator::{SectionChange, SectionNavigator, Selection};
pub use timer::PendingTimer;
pub use typewriter::{Phase, RoleTypewriter, TypewriterStep};

pub use folio_types::{
    ConfigurationError, InvalidSectionError, PresentationSnapshot, Profile, RoleColor, SectionId,
    Timings, TypewriterSettings,
};
pub use folio_types::ui::{AnimPhase, EffectStage, SectionEffect, SectionEffectKind, UiOptions};
