//! Role labels and their color tags.

/// Color tag attached to the role currently being typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoleColor {
    Blue,
    Red,
    Yellow,
}

/// Closed classification of role labels.
///
/// `Other` is a real variant: any label that is not one of the known roles
/// is tagged the same as `CsStudent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleKind {
    Developer,
    Designer,
    CsStudent,
    Other,
}

impl RoleKind {
    #[must_use]
    pub fn classify(role: &str) -> Self {
        match role {
            "developer" => RoleKind::Developer,
            "designer" => RoleKind::Designer,
            "CS student" => RoleKind::CsStudent,
            _ => RoleKind::Other,
        }
    }

    #[must_use]
    pub const fn color(self) -> RoleColor {
        match self {
            RoleKind::Developer => RoleColor::Blue,
            RoleKind::Designer => RoleColor::Red,
            RoleKind::CsStudent | RoleKind::Other => RoleColor::Yellow,
        }
    }
}

/// Color tag for a full role label.
#[must_use]
pub fn color_of(role: &str) -> RoleColor {
    RoleKind::classify(role).color()
}
