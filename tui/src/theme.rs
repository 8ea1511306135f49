//! Color theme and glyphs for Folio TUI.
//!
//! Uses Kanagawa Wave palette by default with an optional high-contrast override.

use ratatui::style::{Color, Modifier, Style};

use folio_engine::{RoleColor, UiOptions};

/// Kanagawa Wave color palette constants.
mod colors {
    use super::Color;

    // === Backgrounds (Sumi Ink) ===
    pub const BG_DARK: Color = Color::Rgb(22, 22, 29); // sumiInk0
    pub const BG_PANEL: Color = Color::Rgb(31, 31, 40); // sumiInk3
    pub const BG_HIGHLIGHT: Color = Color::Rgb(42, 42, 55); // sumiInk4
    pub const BG_BORDER: Color = Color::Rgb(84, 84, 109); // sumiInk6

    // === Foregrounds (Fuji) ===
    pub const TEXT_PRIMARY: Color = Color::Rgb(220, 215, 186); // fujiWhite
    pub const TEXT_SECONDARY: Color = Color::Rgb(200, 192, 147); // oldWhite
    pub const TEXT_MUTED: Color = Color::Rgb(114, 113, 105); // fujiGray

    // === Primary/Brand ===
    pub const PRIMARY: Color = Color::Rgb(149, 127, 184); // oniViolet

    // === Accent Colors ===
    pub const BLUE: Color = Color::Rgb(126, 156, 216); // crystalBlue
    pub const CYAN: Color = Color::Rgb(127, 180, 202); // springBlue
    pub const GREEN: Color = Color::Rgb(152, 187, 108); // springGreen
    pub const YELLOW: Color = Color::Rgb(230, 195, 132); // carpYellow
    pub const RED: Color = Color::Rgb(255, 93, 98); // peachRed
}

/// Resolved theme palette used by the UI.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg_dark: Color,
    pub bg_panel: Color,
    pub bg_highlight: Color,
    pub bg_border: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub primary: Color,
    pub accent: Color,
    pub blue: Color,
    pub green: Color,
    pub yellow: Color,
    pub red: Color,
}

impl Palette {
    #[must_use]
    pub fn standard() -> Self {
        Self {
            bg_dark: colors::BG_DARK,
            bg_panel: colors::BG_PANEL,
            bg_highlight: colors::BG_HIGHLIGHT,
            bg_border: colors::BG_BORDER,
            text_primary: colors::TEXT_PRIMARY,
            text_secondary: colors::TEXT_SECONDARY,
            text_muted: colors::TEXT_MUTED,
            primary: colors::PRIMARY,
            accent: colors::CYAN,
            blue: colors::BLUE,
            green: colors::GREEN,
            yellow: colors::YELLOW,
            red: colors::RED,
        }
    }

    #[must_use]
    pub fn high_contrast() -> Self {
        Self {
            bg_dark: Color::Black,
            bg_panel: Color::Black,
            bg_highlight: Color::DarkGray,
            bg_border: Color::Gray,
            text_primary: Color::White,
            text_secondary: Color::Gray,
            text_muted: Color::DarkGray,
            primary: Color::White,
            accent: Color::Cyan,
            blue: Color::LightBlue,
            green: Color::Green,
            yellow: Color::Yellow,
            red: Color::LightRed,
        }
    }

    /// Foreground for a role color tag.
    #[must_use]
    pub fn role(&self, color: RoleColor) -> Color {
        match color {
            RoleColor::Blue => self.blue,
            RoleColor::Red => self.red,
            RoleColor::Yellow => self.yellow,
        }
    }
}

#[must_use]
pub fn palette(options: UiOptions) -> Palette {
    if options.high_contrast {
        Palette::high_contrast()
    } else {
        Palette::standard()
    }
}

/// ASCII/Unicode glyphs.
#[derive(Debug, Clone, Copy)]
pub struct Glyphs {
    pub cursor: &'static str,
    pub bullet: &'static str,
    pub selected: &'static str,
    pub menu_closed: &'static str,
    pub menu_open: &'static str,
    pub link: &'static str,
    pub separator: &'static str,
}

#[must_use]
pub fn glyphs(options: UiOptions) -> Glyphs {
    if options.ascii_only {
        Glyphs {
            cursor: "|",
            bullet: "*",
            selected: ">",
            menu_closed: "=",
            menu_open: "x",
            link: "->",
            separator: "|",
        }
    } else {
        Glyphs {
            cursor: "▌",
            bullet: "•",
            selected: "▸",
            menu_closed: "≡",
            menu_open: "×",
            link: "↗",
            separator: "│",
        }
    }
}

/// Pre-defined styles for common UI elements.
pub mod styles {
    use super::{Modifier, Palette, Style};

    #[must_use]
    pub fn brand(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn heading(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.text_primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn heading_accent(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn tab_active(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.blue)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    #[must_use]
    pub fn tab_inactive(palette: &Palette) -> Style {
        Style::default().fg(palette.text_secondary)
    }

    #[must_use]
    pub fn badge(palette: &Palette) -> Style {
        Style::default().fg(palette.accent).bg(palette.bg_highlight)
    }

    #[must_use]
    pub fn link(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.blue)
            .add_modifier(Modifier::UNDERLINED)
    }

    #[must_use]
    pub fn muted(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }

    #[must_use]
    pub fn body(palette: &Palette) -> Style {
        Style::default().fg(palette.text_secondary)
    }
}
