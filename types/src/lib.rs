//! Core domain types for Folio.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies.
//! Everything here can be used from any layer of the application.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory
#![allow(clippy::missing_panics_doc)] // Panics are documented in assertions

mod content;
mod role;
mod section;
mod settings;
mod snapshot;
mod text;
pub mod ui;

pub use content::{
    AboutContent, ContactContent, Education, HomeContent, Link, NO_LIVE_LINK, Profile, Project,
    SectionContent, SkillCategory,
};
pub use role::{RoleColor, RoleKind, color_of};
pub use section::{InvalidSectionError, SectionId};
pub use settings::{ConfigurationError, DEFAULT_ROLES, Timings, TypewriterSettings};
pub use snapshot::PresentationSnapshot;
pub use text::{grapheme_len, grapheme_prefix};
