//! Line builders for the five content sections.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

use folio_engine::PresentationSnapshot;
use folio_types::{
    AboutContent, ContactContent, HomeContent, Link, Profile, Project, SectionContent,
    SkillCategory,
};

use crate::theme::{Glyphs, Palette, styles};

/// Lines for the active section, ready for a wrapping paragraph.
#[must_use]
pub fn section_lines(
    profile: &Profile,
    snapshot: &PresentationSnapshot,
    palette: &Palette,
    glyphs: &Glyphs,
) -> Vec<Line<'static>> {
    match profile.section(snapshot.active_section) {
        SectionContent::Home(home) => home_lines(home, snapshot, palette, glyphs),
        SectionContent::About(about) => about_lines(about, palette, glyphs),
        SectionContent::Skills(skills) => skills_lines(skills, palette, glyphs),
        SectionContent::Projects(projects) => projects_lines(projects, palette, glyphs),
        SectionContent::Contact(contact) => contact_lines(contact, palette, glyphs),
    }
}

fn title(plain: &str, accent: &str, palette: &Palette) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{plain} "), styles::heading(palette)),
        Span::styled(accent.to_string(), styles::heading_accent(palette)),
    ])
}

/// The typed role followed by the cursor cell.
///
/// A hidden cursor keeps its width so the line does not shift while blinking.
#[must_use]
pub fn role_line(
    snapshot: &PresentationSnapshot,
    palette: &Palette,
    glyphs: &Glyphs,
) -> Line<'static> {
    let role_color = palette.role(snapshot.current_role_color);
    let role_style = Style::default().fg(role_color).add_modifier(Modifier::BOLD);
    let cursor = if snapshot.cursor_visible {
        glyphs.cursor.to_string()
    } else {
        " ".repeat(glyphs.cursor.width())
    };
    Line::from(vec![
        Span::styled("A passionate ", styles::body(palette)),
        Span::styled(snapshot.current_role_text.clone(), role_style),
        Span::styled(cursor, Style::default().fg(role_color)),
    ])
}

fn home_lines(
    home: &HomeContent,
    snapshot: &PresentationSnapshot,
    palette: &Palette,
    glyphs: &Glyphs,
) -> Vec<Line<'static>> {
    let key = Style::default()
        .fg(palette.green)
        .add_modifier(Modifier::BOLD);
    let mut lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("Hi, I'm ", styles::heading(palette)),
            Span::styled(home.greeting_name.clone(), styles::brand(palette)),
        ]),
        Line::from(""),
        role_line(snapshot, palette, glyphs),
        Line::from(Span::styled(home.tagline.clone(), styles::body(palette))),
        Line::from(""),
        Line::from(vec![
            Span::styled("[w]", key),
            Span::styled(" View My Work", styles::body(palette)),
            Span::raw("    "),
            Span::styled("[g]", key),
            Span::styled(" Get In Touch", styles::body(palette)),
        ]),
    ];
    if !home.links.is_empty() {
        lines.push(Line::from(""));
        lines.push(link_row(&home.links, palette, glyphs));
    }
    lines
}

fn link_row(links: &[Link], palette: &Palette, glyphs: &Glyphs) -> Line<'static> {
    let mut spans = Vec::with_capacity(links.len() * 2);
    for (i, link) in links.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("   "));
        }
        spans.push(Span::styled(
            format!("{} {}", link.label, glyphs.link),
            styles::link(palette),
        ));
    }
    Line::from(spans)
}

fn badges(items: &[String], palette: &Palette) -> Line<'static> {
    let mut spans = Vec::with_capacity(items.len() * 2);
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(format!(" {item} "), styles::badge(palette)));
    }
    Line::from(spans)
}

fn about_lines(about: &AboutContent, palette: &Palette, glyphs: &Glyphs) -> Vec<Line<'static>> {
    let mut lines = vec![title("About", "Me", palette), Line::from("")];
    for paragraph in &about.paragraphs {
        lines.push(Line::from(Span::styled(
            paragraph.clone(),
            styles::body(palette),
        )));
        lines.push(Line::from(""));
    }

    if !about.education.is_empty() {
        lines.push(Line::from(Span::styled(
            "Education",
            styles::heading(palette),
        )));
        for education in &about.education {
            lines.push(Line::from(vec![
                Span::styled(format!("{} ", glyphs.bullet), styles::muted(palette)),
                Span::styled(
                    education.institution.clone(),
                    Style::default()
                        .fg(palette.blue)
                        .add_modifier(Modifier::BOLD),
                ),
            ]));
            for detail in &education.details {
                lines.push(Line::from(Span::styled(
                    format!("  {detail}"),
                    styles::muted(palette),
                )));
            }
        }
        lines.push(Line::from(""));
    }

    if !about.interests.is_empty() {
        lines.push(Line::from(Span::styled(
            "Interests",
            styles::heading(palette),
        )));
        lines.push(badges(&about.interests, palette));
    }
    lines
}

fn skills_lines(
    skills: &[SkillCategory],
    palette: &Palette,
    glyphs: &Glyphs,
) -> Vec<Line<'static>> {
    let mut lines = vec![title("My", "Skills", palette), Line::from("")];
    for category in skills {
        lines.push(Line::from(vec![
            Span::styled(format!("{} ", glyphs.selected), styles::muted(palette)),
            Span::styled(category.name.clone(), styles::heading(palette)),
        ]));
        lines.push(badges(&category.tools, palette));
        lines.push(Line::from(""));
    }
    lines
}

fn projects_lines(
    projects: &[Project],
    palette: &Palette,
    glyphs: &Glyphs,
) -> Vec<Line<'static>> {
    let mut lines = vec![title("Featured", "Projects", palette), Line::from("")];
    for project in projects {
        lines.push(Line::from(Span::styled(
            project.title.clone(),
            Style::default()
                .fg(palette.text_primary)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            project.description.clone(),
            styles::body(palette),
        )));
        if !project.tags.is_empty() {
            lines.push(badges(&project.tags, palette));
        }

        let mut links = vec![
            Span::styled("Code ", styles::muted(palette)),
            Span::styled(project.github.clone(), styles::link(palette)),
        ];
        if let Some(live) = project.live_link() {
            links.push(Span::raw(format!("  {}  ", glyphs.separator)));
            links.push(Span::styled("Live ", styles::muted(palette)));
            links.push(Span::styled(live.to_string(), styles::link(palette)));
        }
        lines.push(Line::from(links));
        lines.push(Line::from(""));
    }
    lines
}

fn contact_lines(
    contact: &ContactContent,
    palette: &Palette,
    glyphs: &Glyphs,
) -> Vec<Line<'static>> {
    let mut lines = vec![
        title("Let's", "Connect", palette),
        Line::from(""),
        Line::from(Span::styled(contact.blurb.clone(), styles::body(palette))),
        Line::from(""),
    ];
    for link in &contact.links {
        lines.push(Line::from(vec![
            Span::styled(format!("{} ", glyphs.bullet), styles::muted(palette)),
            Span::styled(format!("{:<10}", link.label), styles::heading(palette)),
            Span::styled(link.display_text().to_string(), styles::link(palette)),
        ]));
    }
    lines
}
