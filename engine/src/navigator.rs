//! Active section and compact-menu state.
//!
//! Driven only by explicit selection events; there are no timers here.

use folio_types::{InvalidSectionError, SectionId};

/// A real change of the active section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionChange {
    pub from: SectionId,
    pub to: SectionId,
}

/// Outcome of one selection, applied atomically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    /// `None` when the section was already active.
    pub change: Option<SectionChange>,
    /// The compact menu was open and has been closed.
    pub menu_closed: bool,
}

#[derive(Debug, Default)]
pub struct SectionNavigator {
    active: SectionId,
    menu_open: bool,
}

impl SectionNavigator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Select by identifier. Unknown identifiers leave the state untouched.
    pub fn select_section(&mut self, id: &str) -> Result<Selection, InvalidSectionError> {
        let section = id.parse::<SectionId>()?;
        Ok(self.select(section))
    }

    pub fn select(&mut self, section: SectionId) -> Selection {
        let change = (section != self.active).then_some(SectionChange {
            from: self.active,
            to: section,
        });
        self.active = section;
        let menu_closed = std::mem::take(&mut self.menu_open);
        Selection {
            change,
            menu_closed,
        }
    }

    /// Flip the compact menu. Returns the new state.
    pub fn toggle_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        self.menu_open
    }

    /// Returns whether the menu was open.
    pub fn close_menu(&mut self) -> bool {
        std::mem::take(&mut self.menu_open)
    }

    #[must_use]
    pub fn active_section(&self) -> SectionId {
        self.active
    }

    #[must_use]
    pub fn menu_open(&self) -> bool {
        self.menu_open
    }
}
