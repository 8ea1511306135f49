//! Navigation bar geometry shared by drawing and mouse hit-testing.

use ratatui::layout::Rect;
use unicode_width::UnicodeWidthStr;

use folio_engine::{SectionId, UiOptions};

/// Rows taken by the navigation bar (labels plus underline rule).
pub const NAV_HEIGHT: u16 = 2;
/// Narrowest terminal that still gets the horizontal tab list.
pub const WIDE_NAV_MIN_WIDTH: u16 = 80;

const TAB_GAP: u16 = 1;
const MENU_BUTTON_WIDTH: u16 = 3;
const DROPDOWN_WIDTH: u16 = 18;
const RIGHT_MARGIN: u16 = 1;

/// What a click on the navigation bar landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavHit {
    Tab(SectionId),
    MenuButton,
    MenuItem(SectionId),
}

#[must_use]
pub fn is_compact(width: u16, options: UiOptions) -> bool {
    options.compact || width < WIDE_NAV_MIN_WIDTH
}

/// Rendered width of a tab, including one column of padding per side.
#[must_use]
pub fn tab_width(section: SectionId) -> u16 {
    section.label().width() as u16 + 2
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLayout {
    pub bar: Rect,
    pub tabs: Vec<(SectionId, Rect)>,
    pub menu_button: Option<Rect>,
    pub dropdown: Option<Rect>,
}

impl NavLayout {
    /// Lay out the bar at the top of `area`.
    #[must_use]
    pub fn compute(area: Rect, options: UiOptions, menu_open: bool) -> Self {
        let bar = Rect {
            height: NAV_HEIGHT.min(area.height),
            ..area
        };
        let right = area.x.saturating_add(area.width).saturating_sub(RIGHT_MARGIN);

        let mut tabs = Vec::new();
        let mut menu_button = None;
        if is_compact(area.width, options) {
            menu_button = Some(Rect {
                x: right.saturating_sub(MENU_BUTTON_WIDTH).max(area.x),
                y: bar.y,
                width: MENU_BUTTON_WIDTH.min(area.width),
                height: 1.min(bar.height),
            });
        } else {
            let total: u16 = SectionId::ALL
                .iter()
                .map(|section| tab_width(*section))
                .sum::<u16>()
                + TAB_GAP * (SectionId::ALL.len() as u16 - 1);
            let mut x = right.saturating_sub(total).max(area.x);
            for section in SectionId::ALL {
                let width = tab_width(section);
                tabs.push((
                    section,
                    Rect {
                        x,
                        y: bar.y,
                        width,
                        height: 1.min(bar.height),
                    },
                ));
                x = x.saturating_add(width + TAB_GAP);
            }
        }

        let dropdown = menu_open.then(|| {
            let height = (SectionId::ALL.len() as u16 + 2)
                .min(area.height.saturating_sub(bar.height));
            let width = DROPDOWN_WIDTH.min(area.width);
            Rect {
                x: right.saturating_sub(width).max(area.x),
                y: bar.y.saturating_add(bar.height),
                width,
                height,
            }
        });

        Self {
            bar,
            tabs,
            menu_button,
            dropdown,
        }
    }

    /// Row of a dropdown entry, inside the dropdown border.
    #[must_use]
    pub fn dropdown_item(&self, section: SectionId) -> Option<Rect> {
        let dropdown = self.dropdown?;
        let inner_top = dropdown.y.saturating_add(1);
        let inner_bottom = dropdown.y.saturating_add(dropdown.height).saturating_sub(1);
        let y = inner_top.saturating_add(section.index() as u16);
        (y < inner_bottom).then(|| Rect {
            x: dropdown.x.saturating_add(1),
            y,
            width: dropdown.width.saturating_sub(2),
            height: 1,
        })
    }

    #[must_use]
    pub fn hit(&self, column: u16, row: u16) -> Option<NavHit> {
        for section in SectionId::ALL {
            if let Some(item) = self.dropdown_item(section)
                && contains(item, column, row)
            {
                return Some(NavHit::MenuItem(section));
            }
        }
        if let Some(button) = self.menu_button
            && contains(button, column, row)
        {
            return Some(NavHit::MenuButton);
        }
        self.tabs
            .iter()
            .find(|(_, rect)| contains(*rect, column, row))
            .map(|(section, _)| NavHit::Tab(*section))
    }
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}
