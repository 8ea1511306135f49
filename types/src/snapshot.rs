//! Per-frame state handed to the renderer.

use crate::{RoleColor, SectionId};

/// Read-only view of the core state, sampled once per frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentationSnapshot {
    pub active_section: SectionId,
    pub menu_open: bool,
    pub current_role_text: String,
    pub current_role_color: RoleColor,
    pub cursor_visible: bool,
}
