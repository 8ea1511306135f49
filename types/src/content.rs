//! Read-only content table for the five sections.
//!
//! The navigator never looks at this data. The renderer picks the entry for
//! the active section with [`Profile::section`].

use serde::Deserialize;

use crate::SectionId;

/// Placeholder used for projects without a live deployment.
pub const NO_LIVE_LINK: &str = "#";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Link {
    pub label: String,
    /// Short human-readable form (handle, address).
    #[serde(default)]
    pub display: Option<String>,
    pub url: String,
}

impl Link {
    #[must_use]
    pub fn display_text(&self) -> &str {
        self.display.as_deref().unwrap_or(&self.url)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct HomeContent {
    /// Short name used in the greeting ("Hi, I'm ...").
    pub greeting_name: String,
    /// Line that follows the typed role.
    pub tagline: String,
    #[serde(default)]
    pub links: Vec<Link>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Education {
    pub institution: String,
    #[serde(default)]
    pub details: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AboutContent {
    #[serde(default)]
    pub paragraphs: Vec<String>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub interests: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SkillCategory {
    pub name: String,
    #[serde(default)]
    pub tools: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub github: String,
    #[serde(default)]
    pub live: Option<String>,
}

impl Project {
    /// Live deployment URL, hiding the `"#"` placeholder.
    #[must_use]
    pub fn live_link(&self) -> Option<&str> {
        self.live
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty() && *url != NO_LIVE_LINK)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ContactContent {
    pub blurb: String,
    #[serde(default)]
    pub links: Vec<Link>,
}

/// Everything the sections display, supplied by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Profile {
    /// Full name shown in the navigation bar.
    pub name: String,
    pub home: HomeContent,
    #[serde(default)]
    pub about: AboutContent,
    #[serde(default)]
    pub skills: Vec<SkillCategory>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub contact: ContactContent,
}

/// Borrowed view of one section's content.
#[derive(Debug, Clone, Copy)]
pub enum SectionContent<'a> {
    Home(&'a HomeContent),
    About(&'a AboutContent),
    Skills(&'a [SkillCategory]),
    Projects(&'a [Project]),
    Contact(&'a ContactContent),
}

impl Profile {
    #[must_use]
    pub fn section(&self, id: SectionId) -> SectionContent<'_> {
        match id {
            SectionId::Home => SectionContent::Home(&self.home),
            SectionId::About => SectionContent::About(&self.about),
            SectionId::Skills => SectionContent::Skills(&self.skills),
            SectionId::Projects => SectionContent::Projects(&self.projects),
            SectionId::Contact => SectionContent::Contact(&self.contact),
        }
    }
}
