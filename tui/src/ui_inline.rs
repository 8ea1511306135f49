//! Inline TUI mode - a short viewport at the bottom of the shell.

use ratatui::prelude::{Backend, Terminal};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Clear, Paragraph, Wrap},
};

use folio_engine::{App, SectionId};

use crate::sections::section_lines;
use crate::theme::{glyphs, palette, styles};

pub const INLINE_VIEWPORT_HEIGHT: u16 = 10;

pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Clear, area);

    let options = app.ui_options();
    let palette = palette(options);
    let glyphs = glyphs(options);
    let snapshot = app.snapshot();

    let [header, body, footer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    let mut spans = vec![
        Span::styled(app.profile().name.clone(), styles::brand(&palette)),
        Span::raw("  "),
    ];
    for section in SectionId::ALL {
        let style = if section == snapshot.active_section {
            styles::tab_active(&palette)
        } else {
            styles::tab_inactive(&palette)
        };
        spans.push(Span::styled(
            format!("{} {}", section.index() + 1, section.label()),
            style,
        ));
        spans.push(Span::raw(" "));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), header);

    let body = Rect {
        x: body.x.saturating_add(2),
        width: body.width.saturating_sub(2),
        ..body
    };
    let lines: Vec<Line> = section_lines(app.profile(), &snapshot, &palette, &glyphs)
        .into_iter()
        .skip_while(|line| line.width() == 0)
        .collect();
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), body);

    frame.render_widget(
        Paragraph::new(Span::styled(
            " F2 full screen  q quit",
            Style::default().fg(palette.text_muted),
        )),
        footer,
    );
}

/// Blank the inline viewport so the shell prompt resumes below clean rows.
pub fn clear_inline_viewport<B>(terminal: &mut Terminal<B>) -> Result<(), B::Error>
where
    B: Backend,
{
    terminal.draw(|frame| frame.render_widget(Clear, frame.area()))?;
    Ok(())
}
