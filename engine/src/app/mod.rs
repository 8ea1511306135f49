//! Application state: navigator, mounted landing view, and UI effects.

use std::time::{Duration, Instant};

use folio_types::ui::{
    AnimPhase, EffectStage, SECTION_ENTER_DURATION, SECTION_EXIT_DURATION, SectionEffect,
    UiOptions,
};
use folio_types::{
    ConfigurationError, InvalidSectionError, PresentationSnapshot, Profile, RoleColor, SectionId,
    TypewriterSettings, color_of,
};
use tracing::{debug, info, warn};

use crate::landing::LandingView;
use crate::navigator::{SectionNavigator, Selection};
use crate::typewriter::RoleTypewriter;

/// Longest span of wall-clock time replayed in one frame.
///
/// Caps the catch-up after the process was stopped (Ctrl-Z) or the host
/// stalled; timing stays exact for any gap below it.
pub const MAX_FRAME_DELTA: Duration = Duration::from_secs(5);

#[derive(Debug)]
pub struct App {
    settings: TypewriterSettings,
    profile: Profile,
    ui_options: UiOptions,
    navigator: SectionNavigator,
    landing: Option<LandingView>,
    section_effect: Option<SectionEffect>,
    /// Highlighted entry while the compact menu is open.
    menu_cursor: SectionId,
    last_frame: Instant,
    toggle_screen_mode: bool,
}

impl App {
    pub fn new(
        settings: TypewriterSettings,
        profile: Profile,
        ui_options: UiOptions,
    ) -> Result<Self, ConfigurationError> {
        let landing = LandingView::mount(&settings)?;
        let navigator = SectionNavigator::new();
        let menu_cursor = navigator.active_section();
        Ok(Self {
            settings,
            profile,
            ui_options,
            navigator,
            landing: Some(landing),
            section_effect: None,
            menu_cursor,
            last_frame: Instant::now(),
            toggle_screen_mode: false,
        })
    }

    /// Feed the wall-clock time since the previous frame into the timers.
    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    /// Advance by the time between the previous frame and `now`, capped at
    /// [`MAX_FRAME_DELTA`]. Returns the span actually replayed.
    pub fn tick_at(&mut self, now: Instant) -> Duration {
        let gap = now.saturating_duration_since(self.last_frame);
        self.last_frame = now;
        if gap > MAX_FRAME_DELTA {
            debug!(?gap, "frame gap exceeds replay cap, clamping");
        }
        let delta = gap.min(MAX_FRAME_DELTA);
        self.advance(delta);
        delta
    }

    /// Advance every running timer by exactly `delta`.
    pub fn advance(&mut self, delta: Duration) {
        if let Some(landing) = self.landing.as_mut() {
            for step in landing.advance(delta) {
                tracing::trace!(?step, "typewriter");
            }
        }

        let finished = self.section_effect.as_mut().and_then(|effect| {
            effect.advance(delta);
            matches!(effect.phase(), AnimPhase::Completed)
                .then(|| (effect.stage(), effect.overflow()))
        });
        if let Some((stage, overflow)) = finished {
            self.section_effect = match stage {
                EffectStage::Exit => {
                    let target = self.navigator.active_section();
                    let mut enter = SectionEffect::enter(target, SECTION_ENTER_DURATION);
                    enter.advance(overflow);
                    (!matches!(enter.phase(), AnimPhase::Completed)).then_some(enter)
                }
                EffectStage::Enter => None,
            };
        }
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    /// Select by identifier, as delivered by an external input layer.
    pub fn select_section(&mut self, id: &str) -> Result<Selection, InvalidSectionError> {
        match self.navigator.select_section(id) {
            Ok(selection) => {
                self.apply_selection(selection);
                Ok(selection)
            }
            Err(err) => {
                warn!(%err, "rejected section selection");
                Err(err)
            }
        }
    }

    pub fn select(&mut self, section: SectionId) -> Selection {
        let selection = self.navigator.select(section);
        self.apply_selection(selection);
        selection
    }

    pub fn next_section(&mut self) -> Selection {
        self.select(self.navigator.active_section().next())
    }

    pub fn prev_section(&mut self) -> Selection {
        self.select(self.navigator.active_section().prev())
    }

    fn apply_selection(&mut self, selection: Selection) {
        self.menu_cursor = self.navigator.active_section();
        let Some(change) = selection.change else {
            return;
        };
        info!(from = %change.from, to = %change.to, "section changed");
        if self.ui_options.reduced_motion {
            self.section_effect = None;
            return;
        }
        self.section_effect = match self.section_effect.take() {
            // Still leaving: the entry that follows picks up the newest target.
            Some(effect) if effect.stage() == EffectStage::Exit => Some(effect),
            _ => Some(SectionEffect::exit(change.from, SECTION_EXIT_DURATION)),
        };
    }

    pub fn toggle_menu(&mut self) -> bool {
        let open = self.navigator.toggle_menu();
        if open {
            self.menu_cursor = self.navigator.active_section();
        }
        debug!(open, "menu toggled");
        open
    }

    pub fn close_menu(&mut self) -> bool {
        self.navigator.close_menu()
    }

    /// Move the compact-menu highlight, wrapping at either end.
    pub fn move_menu_cursor(&mut self, forward: bool) {
        self.menu_cursor = if forward {
            self.menu_cursor.next()
        } else {
            self.menu_cursor.prev()
        };
    }

    /// Select the highlighted compact-menu entry.
    pub fn select_menu_cursor(&mut self) -> Selection {
        self.select(self.menu_cursor)
    }

    // ------------------------------------------------------------------
    // Landing view lifecycle
    // ------------------------------------------------------------------

    /// Replace the landing view with a fresh mount.
    ///
    /// The old instance is dropped, cancelling its pending ticks, before the
    /// new one is created.
    pub fn remount(&mut self) -> Result<(), ConfigurationError> {
        drop(self.landing.take());
        self.landing = Some(LandingView::mount(&self.settings)?);
        Ok(())
    }

    pub fn unmount(&mut self) {
        drop(self.landing.take());
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.landing.is_some()
    }

    // ------------------------------------------------------------------
    // Read access for the renderer
    // ------------------------------------------------------------------

    #[must_use]
    pub fn snapshot(&self) -> PresentationSnapshot {
        let (current_role_text, current_role_color, cursor_visible) = match &self.landing {
            Some(landing) => (
                landing.typewriter().displayed_text().to_string(),
                landing.typewriter().color(),
                landing.blinker().visible(),
            ),
            None => (String::new(), self.first_role_color(), false),
        };
        PresentationSnapshot {
            active_section: self.navigator.active_section(),
            menu_open: self.navigator.menu_open(),
            current_role_text,
            current_role_color,
            cursor_visible,
        }
    }

    fn first_role_color(&self) -> RoleColor {
        self.settings
            .roles()
            .first()
            .map_or(RoleColor::Yellow, |role| color_of(role))
    }

    #[must_use]
    pub fn active_section(&self) -> SectionId {
        self.navigator.active_section()
    }

    #[must_use]
    pub fn menu_open(&self) -> bool {
        self.navigator.menu_open()
    }

    #[must_use]
    pub fn menu_cursor(&self) -> SectionId {
        self.menu_cursor
    }

    #[must_use]
    pub fn typewriter(&self) -> Option<&RoleTypewriter> {
        self.landing.as_ref().map(LandingView::typewriter)
    }

    /// Section whose content is on screen: the leaving one while its exit
    /// plays, the active one otherwise.
    #[must_use]
    pub fn displayed_section(&self) -> SectionId {
        match &self.section_effect {
            Some(effect) if effect.stage() == EffectStage::Exit => effect.section(),
            _ => self.navigator.active_section(),
        }
    }

    #[must_use]
    pub fn section_effect(&self) -> Option<&SectionEffect> {
        self.section_effect.as_ref()
    }

    #[must_use]
    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.ui_options
    }

    // ------------------------------------------------------------------
    // Host requests
    // ------------------------------------------------------------------

    pub fn request_toggle_screen_mode(&mut self) {
        self.toggle_screen_mode = true;
    }

    pub fn take_toggle_screen_mode(&mut self) -> bool {
        std::mem::take(&mut self.toggle_screen_mode)
    }
}
