//! End-to-end behavior of the landing view and navigation through the public API.

use folio_engine::{
    App, Phase, RoleColor, SectionChange, SectionId, Timings, TypewriterSettings, UiOptions,
};

use crate::common::{ms, portfolio_app};

#[test]
fn roles_cycle_with_their_colors_and_wrap_around() {
    let mut app = portfolio_app(UiOptions::default());
    let mut seen = Vec::new();
    let mut now = 0;
    // developer: 1000 + 900 + 2000 + 450 = 4350ms
    // designer:          800 + 2000 + 400 = 3200ms
    // CS student:       1000 + 2000 + 500 = 3500ms
    for boundary in [4350, 4350 + 3200, 4350 + 3200 + 3500] {
        app.advance(ms(boundary - now));
        now = boundary;
        let typewriter = app.typewriter().unwrap();
        seen.push((boundary, typewriter.role_index(), typewriter.color()));
        assert_eq!(typewriter.displayed_text(), "");
        assert_eq!(typewriter.phase(), Phase::Typing);
    }
    assert_eq!(
        seen,
        [
            (4350, 1, RoleColor::Red),
            (7550, 2, RoleColor::Yellow),
            (11050, 0, RoleColor::Blue),
        ]
    );
}

#[test]
fn full_role_is_held_through_the_pause() {
    let mut app = portfolio_app(UiOptions::default());
    app.advance(ms(1900));
    assert_eq!(app.snapshot().current_role_text, "developer");
    // The pause ends at 3900ms and the first erase follows 50ms later.
    app.advance(ms(2049));
    assert_eq!(app.snapshot().current_role_text, "developer");
    app.advance(ms(1));
    assert_eq!(app.snapshot().current_role_text, "develope");
}

#[test]
fn custom_roles_and_timings_drive_the_landing_view() {
    let timings = Timings {
        typing: ms(10),
        erase: ms(5),
        pause: ms(20),
        initial: ms(30),
        blink: ms(7),
    };
    let settings = TypewriterSettings::new(["ok"], timings).unwrap();
    let mut app = App::new(settings, Default::default(), UiOptions::default()).unwrap();
    // 30 + 10 for the first character.
    app.advance(ms(40));
    assert_eq!(app.snapshot().current_role_text, "o");
    // A single role keeps cycling back to itself: 40 + 10 + 20 + 10 = 80.
    app.advance(ms(40));
    let typewriter = app.typewriter().unwrap();
    assert_eq!(typewriter.role_index(), 0);
    assert_eq!(typewriter.displayed_text(), "");
}

#[test]
fn navigation_sequence_is_atomic() {
    let mut app = portfolio_app(UiOptions::default());
    app.toggle_menu();
    let selection = app.select_section("projects").unwrap();
    assert_eq!(
        selection.change,
        Some(SectionChange {
            from: SectionId::Home,
            to: SectionId::Projects,
        })
    );
    assert!(selection.menu_closed);

    let snap = app.snapshot();
    assert_eq!(snap.active_section, SectionId::Projects);
    assert!(!snap.menu_open);

    let again = app.select_section("projects").unwrap();
    assert_eq!(again.change, None);
    assert!(!again.menu_closed);
}

#[test]
fn unknown_section_is_rejected_without_side_effects() {
    let mut app = portfolio_app(UiOptions::default());
    app.select(SectionId::About);
    app.toggle_menu();
    let before = app.snapshot();

    for bogus in ["Home", "blog", "", " about"] {
        let err = app.select_section(bogus).unwrap_err();
        assert_eq!(err.id(), bogus);
    }
    assert_eq!(app.snapshot(), before);
}

#[test]
fn navigation_does_not_disturb_the_typewriter() {
    let mut plain = portfolio_app(UiOptions::default());
    let mut busy = portfolio_app(UiOptions::default());
    for (i, section) in SectionId::ALL.iter().cycle().take(40).enumerate() {
        plain.advance(ms(137));
        busy.advance(ms(137));
        busy.select(*section);
        if i % 3 == 0 {
            busy.toggle_menu();
        }
        assert_eq!(
            plain.snapshot().current_role_text,
            busy.snapshot().current_role_text
        );
        assert_eq!(
            plain.snapshot().cursor_visible,
            busy.snapshot().cursor_visible
        );
    }
}
