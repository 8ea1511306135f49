//! Section identifiers for the five content panels.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// One of the five mutually exclusive content panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SectionId {
    #[default]
    Home,
    About,
    Skills,
    Projects,
    Contact,
}

/// Selection of an identifier outside the fixed section set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown section `{id}` (expected one of home, about, skills, projects, contact)")]
pub struct InvalidSectionError {
    id: String,
}

impl InvalidSectionError {
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl SectionId {
    /// Navigation order.
    pub const ALL: [SectionId; 5] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Skills,
        SectionId::Projects,
        SectionId::Contact,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Skills => "skills",
            SectionId::Projects => "projects",
            SectionId::Contact => "contact",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::Skills => "Skills",
            SectionId::Projects => "Projects",
            SectionId::Contact => "Contact",
        }
    }

    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            SectionId::Home => 0,
            SectionId::About => 1,
            SectionId::Skills => 2,
            SectionId::Projects => 3,
            SectionId::Contact => 4,
        }
    }

    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Next section in navigation order, wrapping after `Contact`.
    #[must_use]
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous section in navigation order, wrapping before `Home`.
    #[must_use]
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl FromStr for SectionId {
    type Err = InvalidSectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|section| section.as_str() == s)
            .ok_or_else(|| InvalidSectionError { id: s.to_string() })
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
