//! Frames rendered through the vt100 virtual terminal.

use folio_engine::{SectionId, UiOptions};
use folio_tui::{draw, draw_inline};

use crate::common::{ms, portfolio_app, render};

#[test]
fn home_shows_greeting_and_typed_role() {
    let mut app = portfolio_app(UiOptions::default());
    app.advance(ms(1300));

    let terminal = render(100, 30, |frame| draw(frame, &app));
    let screen = terminal.backend().contents();
    assert!(screen.contains("Hi, I'm Ayush"), "{screen}");
    assert!(screen.contains("A passionate dev▌"), "{screen}");
    assert!(screen.contains("View My Work"));
    assert!(screen.contains("Get In Touch"));
}

#[test]
fn hidden_cursor_is_not_drawn() {
    let mut app = portfolio_app(UiOptions::default());
    // Third flip at 1500ms hides the cursor.
    app.advance(ms(1600));

    let terminal = render(100, 30, |frame| draw(frame, &app));
    let screen = terminal.backend().contents();
    assert!(screen.contains("A passionate develo"), "{screen}");
    assert!(!screen.contains('▌'));
}

#[test]
fn role_is_drawn_in_its_color() {
    let palette = folio_tui::Palette::standard();
    let rgb = |color: ratatui::style::Color| match color {
        ratatui::style::Color::Rgb(r, g, b) => vt100::Color::Rgb(r, g, b),
        other => panic!("unexpected palette color {other:?}"),
    };

    let mut app = portfolio_app(UiOptions::default());
    app.advance(ms(1300));
    let first = render(100, 30, |frame| draw(frame, &app));
    assert_eq!(first.backend().fg_of("dev▌"), Some(rgb(palette.blue)));

    // The second role types its first character 100ms after the first cycle ends.
    app.advance(ms(4450 - 1300));
    assert_eq!(app.snapshot().current_role_text, "d");
    let second = render(100, 30, |frame| draw(frame, &app));
    assert_eq!(second.backend().fg_of("d▌"), Some(rgb(palette.red)));
}

#[test]
fn wide_terminal_lists_every_tab() {
    let app = portfolio_app(UiOptions::default());
    let terminal = render(100, 30, |frame| draw(frame, &app));
    let header = terminal.backend().row(0);
    assert!(header.starts_with(" Ayush Kumar Das"), "{header}");
    for section in SectionId::ALL {
        assert!(header.contains(section.label()), "{header}");
    }
    assert!(!header.contains('≡'));
}

#[test]
fn narrow_terminal_uses_menu_button_and_dropdown() {
    let mut app = portfolio_app(UiOptions::default());
    let closed = render(60, 24, |frame| draw(frame, &app));
    let header = closed.backend().row(0);
    assert!(header.ends_with('≡'), "{header}");
    assert!(!header.contains("Projects"));

    app.toggle_menu();
    let open = render(60, 24, |frame| draw(frame, &app));
    let screen = open.backend().contents();
    assert!(open.backend().row(0).ends_with('×'));
    assert!(screen.contains("4 Projects"), "{screen}");
    assert!(screen.contains("▸ 1 Home"), "{screen}");
}

#[test]
fn forced_compact_nav_on_wide_terminal() {
    let options = UiOptions {
        compact: true,
        ..UiOptions::default()
    };
    let app = portfolio_app(options);
    let terminal = render(120, 30, |frame| draw(frame, &app));
    let header = terminal.backend().row(0);
    assert!(header.ends_with('≡'), "{header}");
}

#[test]
fn projects_section_hides_placeholder_live_links() {
    let mut app = portfolio_app(UiOptions::default());
    app.select(SectionId::Projects);
    // Home's exit, then the projects entry.
    app.advance(ms(1600));
    assert!(app.section_effect().is_none());

    let terminal = render(120, 50, |frame| draw(frame, &app));
    let screen = terminal.backend().contents();
    assert!(screen.contains("Featured Projects"), "{screen}");
    assert!(screen.contains("EdgeTable"));
    assert!(screen.contains("github.com/Ayushk249/EdgeTable"));
    assert!(!screen.contains("Live "));
    assert!(!screen.contains("A passionate"));
}

#[test]
fn leaving_section_stays_on_screen_until_its_exit_ends() {
    let mut app = portfolio_app(UiOptions::default());
    app.select(SectionId::About);
    app.advance(ms(400));

    let leaving = render(100, 30, |frame| draw(frame, &app));
    let screen = leaving.backend().contents();
    assert!(screen.contains("Hi, I'm Ayush"), "{screen}");
    assert!(!screen.contains("About Me"));

    app.advance(ms(500));
    let entering = render(100, 30, |frame| draw(frame, &app));
    let screen = entering.backend().contents();
    assert!(screen.contains("About Me"), "{screen}");
    assert!(!screen.contains("Hi, I'm Ayush"));
}

#[test]
fn contact_section_shows_link_handles() {
    let options = UiOptions {
        reduced_motion: true,
        ..UiOptions::default()
    };
    let mut app = portfolio_app(options);
    app.select_section("contact").unwrap();

    let terminal = render(100, 30, |frame| draw(frame, &app));
    let screen = terminal.backend().contents();
    assert!(screen.contains("Let's Connect"));
    assert!(screen.contains("@Ayushk249"));
    assert!(screen.contains("daskumarayush.au@gmail.com"));
}

#[test]
fn ascii_only_swaps_glyphs() {
    let options = UiOptions {
        ascii_only: true,
        ..UiOptions::default()
    };
    let mut app = portfolio_app(options);
    app.advance(ms(1300));
    let terminal = render(60, 24, |frame| draw(frame, &app));
    let screen = terminal.backend().contents();
    assert!(screen.contains("A passionate dev|"), "{screen}");
    assert!(terminal.backend().row(0).ends_with('='));
}

#[test]
fn entry_effect_renders_at_any_progress_in_small_terminals() {
    for section in SectionId::ALL {
        let mut app = portfolio_app(UiOptions::default());
        app.select(section.next());
        app.select(section);
        for step in [0, 100, 300, 700] {
            app.advance(ms(step));
            let _ = render(30, 6, |frame| draw(frame, &app));
        }
    }
}

#[test]
fn inline_view_shows_tabs_and_role() {
    let mut app = portfolio_app(UiOptions::default());
    app.advance(ms(1300));
    let terminal = render(90, folio_tui::INLINE_VIEWPORT_HEIGHT, |frame| {
        draw_inline(frame, &app);
    });
    let screen = terminal.backend().contents();
    assert!(screen.contains("1 Home"), "{screen}");
    assert!(screen.contains("5 Contact"));
    assert!(screen.contains("A passionate dev▌"), "{screen}");
}
