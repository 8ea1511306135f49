//! TUI rendering for Folio using ratatui.

mod effects;
mod input;
mod nav;
mod sections;
mod theme;
mod ui_inline;

pub use effects::{apply_section_effect, is_faded};
pub use input::{Command, InputPump, apply_command, apply_mouse, handle_events, map_key};
pub use nav::{NAV_HEIGHT, NavHit, NavLayout, WIDE_NAV_MIN_WIDTH, is_compact};
pub use sections::{role_line, section_lines};
pub use theme::{Glyphs, Palette, glyphs, palette, styles};
pub use ui_inline::{INLINE_VIEWPORT_HEIGHT, clear_inline_viewport, draw as draw_inline};

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use folio_engine::{App, PresentationSnapshot, SectionId};

/// Widest the section text grows before it is centered.
const MAX_CONTENT_WIDTH: u16 = 96;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let options = app.ui_options();
    let palette = palette(options);
    let glyphs = glyphs(options);
    let snapshot = app.snapshot();

    // Clear with background color
    let area = frame.area();
    let bg_block = Block::default().style(Style::default().bg(palette.bg_dark));
    frame.render_widget(bg_block, area);

    let [_, body, hints] = Layout::vertical([
        Constraint::Length(NAV_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    let nav = NavLayout::compute(area, options, snapshot.menu_open);
    draw_nav(frame, app, &nav, &snapshot, &palette, &glyphs);
    draw_section(frame, app, &snapshot, body, &palette, &glyphs);
    draw_hints(frame, hints, &palette);

    if nav.dropdown.is_some() {
        draw_menu(frame, app, &nav, &snapshot, &palette, &glyphs);
    }
}

fn draw_nav(
    frame: &mut Frame,
    app: &App,
    nav: &NavLayout,
    snapshot: &PresentationSnapshot,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let rule = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(palette.bg_border));
    frame.render_widget(rule, nav.bar);

    let brand_area = Rect {
        x: nav.bar.x.saturating_add(1),
        width: nav.bar.width.saturating_sub(1),
        height: 1.min(nav.bar.height),
        ..nav.bar
    };
    frame.render_widget(
        Paragraph::new(Span::styled(app.profile().name.clone(), styles::brand(palette))),
        brand_area,
    );

    for (section, rect) in &nav.tabs {
        let style = if *section == snapshot.active_section {
            styles::tab_active(palette)
        } else {
            styles::tab_inactive(palette)
        };
        frame.render_widget(Clear, *rect);
        frame.render_widget(
            Paragraph::new(Span::styled(format!(" {} ", section.label()), style)),
            *rect,
        );
    }

    if let Some(button) = nav.menu_button {
        let glyph = if snapshot.menu_open {
            glyphs.menu_open
        } else {
            glyphs.menu_closed
        };
        frame.render_widget(Clear, button);
        frame.render_widget(
            Paragraph::new(Span::styled(format!(" {glyph} "), styles::heading(palette))),
            button,
        );
    }
}

fn draw_section(
    frame: &mut Frame,
    app: &App,
    snapshot: &PresentationSnapshot,
    body: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    // While an exit plays, the leaving section stays on screen.
    let shown = PresentationSnapshot {
        active_section: app.displayed_section(),
        ..snapshot.clone()
    };
    let content = content_rect(body);
    let (content, faded) = match app.section_effect() {
        Some(effect) if effect.section() == shown.active_section => (
            apply_section_effect(effect, content, body),
            is_faded(effect),
        ),
        _ => (content, false),
    };
    if content.is_empty() {
        return;
    }

    let alignment = if shown.active_section == SectionId::Home {
        Alignment::Center
    } else {
        Alignment::Left
    };
    let mut paragraph = Paragraph::new(section_lines(app.profile(), &shown, palette, glyphs))
        .alignment(alignment)
        .wrap(Wrap { trim: false });
    if faded {
        paragraph = paragraph.style(Style::default().add_modifier(Modifier::DIM));
    }
    frame.render_widget(paragraph, content);
}

/// Body area minus margins, capped at [`MAX_CONTENT_WIDTH`] and centered.
fn content_rect(body: Rect) -> Rect {
    let inner = Rect {
        x: body.x.saturating_add(2),
        y: body.y.saturating_add(1),
        width: body.width.saturating_sub(4),
        height: body.height.saturating_sub(1),
    };
    let width = inner.width.min(MAX_CONTENT_WIDTH);
    Rect {
        x: inner.x + (inner.width - width) / 2,
        width,
        ..inner
    }
}

fn draw_hints(frame: &mut Frame, area: Rect, palette: &Palette) {
    let key = Style::default().fg(palette.text_secondary);
    let hint = styles::muted(palette);
    let pairs = [
        ("1-5", "sections"),
        ("tab", "next"),
        ("m", "menu"),
        ("r", "restart"),
        ("F2", "screen"),
        ("q", "quit"),
    ];
    let mut spans = vec![Span::raw(" ")];
    for (i, (k, label)) in pairs.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  ", hint));
        }
        spans.push(Span::styled(k, key));
        spans.push(Span::styled(format!(" {label}"), hint));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_menu(
    frame: &mut Frame,
    app: &App,
    nav: &NavLayout,
    snapshot: &PresentationSnapshot,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let Some(dropdown) = nav.dropdown else {
        return;
    };
    frame.render_widget(Clear, dropdown);

    let lines: Vec<Line> = SectionId::ALL
        .iter()
        .map(|section| {
            let highlighted = *section == app.menu_cursor();
            let marker = if highlighted { glyphs.selected } else { " " };
            let mut style = if *section == snapshot.active_section {
                styles::tab_active(palette)
            } else {
                styles::tab_inactive(palette)
            };
            if highlighted {
                style = style.bg(palette.bg_highlight);
            }
            Line::from(vec![
                Span::styled(format!("{marker} "), Style::default().fg(palette.accent)),
                Span::styled(format!("{} {}", section.index() + 1, section.label()), style),
            ])
        })
        .collect();

    let menu = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(palette.primary))
            .style(Style::default().bg(palette.bg_panel)),
    );
    frame.render_widget(menu, dropdown);
}

#[cfg(test)]
mod tests {
    use super::content_rect;
    use ratatui::layout::Rect;

    #[test]
    fn content_is_capped_and_centered() {
        let rect = content_rect(Rect::new(0, 2, 200, 30));
        assert_eq!(rect.width, 96);
        assert_eq!(rect.x, 2 + (196 - 96) / 2);
        assert_eq!(rect.y, 3);
    }

    #[test]
    fn tiny_body_does_not_underflow() {
        let rect = content_rect(Rect::new(0, 0, 3, 0));
        assert_eq!(rect.width, 0);
        assert_eq!(rect.height, 0);
    }
}
