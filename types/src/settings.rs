//! Validated construction-time settings for the timed components.

use std::time::Duration;

use thiserror::Error;

/// Roles shown when no configuration overrides them.
pub const DEFAULT_ROLES: [&str; 3] = ["developer", "designer", "CS student"];

/// Fatal construction error for the timed components.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("role list must not be empty")]
    EmptyRoles,
    #[error("{name} must be a positive duration")]
    NonPositiveTiming { name: &'static str },
}

/// Delays driving the typewriter and the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    /// Delay between typed characters.
    pub typing: Duration,
    /// Delay between erased characters.
    pub erase: Duration,
    /// Hold time once a role is fully typed.
    pub pause: Duration,
    /// Grace period before the very first character after mount.
    pub initial: Duration,
    /// Cursor visibility flip period.
    pub blink: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            typing: Duration::from_millis(100),
            erase: Duration::from_millis(50),
            pause: Duration::from_millis(2000),
            initial: Duration::from_millis(1000),
            blink: Duration::from_millis(500),
        }
    }
}

impl Timings {
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let fields = [
            ("typing delay", self.typing),
            ("erase delay", self.erase),
            ("pause delay", self.pause),
            ("initial delay", self.initial),
            ("blink period", self.blink),
        ];
        match fields.into_iter().find(|(_, value)| value.is_zero()) {
            Some((name, _)) => Err(ConfigurationError::NonPositiveTiming { name }),
            None => Ok(()),
        }
    }
}

/// Role list and timings that have passed validation.
///
/// Holding one proves the roles are non-empty and every delay is positive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypewriterSettings {
    roles: Vec<String>,
    timings: Timings,
}

impl TypewriterSettings {
    pub fn new<I, S>(roles: I, timings: Timings) -> Result<Self, ConfigurationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let roles: Vec<String> = roles.into_iter().map(Into::into).collect();
        if roles.is_empty() {
            return Err(ConfigurationError::EmptyRoles);
        }
        timings.validate()?;
        Ok(Self { roles, timings })
    }

    #[must_use]
    pub fn roles(&self) -> &[String] {
        &self.roles
    }

    #[must_use]
    pub fn timings(&self) -> Timings {
        self.timings
    }
}

impl Default for TypewriterSettings {
    fn default() -> Self {
        Self {
            roles: DEFAULT_ROLES.iter().map(ToString::to_string).collect(),
            timings: Timings::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigurationError, DEFAULT_ROLES, Timings, TypewriterSettings};
    use std::time::Duration;

    #[test]
    fn default_timings_match_documented_constants() {
        let t = Timings::default();
        assert_eq!(t.typing, Duration::from_millis(100));
        assert_eq!(t.erase, Duration::from_millis(50));
        assert_eq!(t.pause, Duration::from_millis(2000));
        assert_eq!(t.initial, Duration::from_millis(1000));
        assert_eq!(t.blink, Duration::from_millis(500));
        assert!(t.validate().is_ok());
    }

    #[test]
    fn empty_roles_rejected() {
        let err = TypewriterSettings::new(Vec::<String>::new(), Timings::default()).unwrap_err();
        assert_eq!(err, ConfigurationError::EmptyRoles);
    }

    #[test]
    fn zero_timing_rejected_with_field_name() {
        let timings = Timings {
            erase: Duration::ZERO,
            ..Timings::default()
        };
        let err = TypewriterSettings::new(["developer"], timings).unwrap_err();
        assert_eq!(
            err,
            ConfigurationError::NonPositiveTiming {
                name: "erase delay"
            }
        );
        assert_eq!(err.to_string(), "erase delay must be a positive duration");
    }

    #[test]
    fn empty_role_string_is_permitted() {
        let settings = TypewriterSettings::new([""], Timings::default()).unwrap();
        assert_eq!(settings.roles(), [String::new()]);
    }

    #[test]
    fn default_settings_use_default_roles() {
        let settings = TypewriterSettings::default();
        assert_eq!(settings.roles(), DEFAULT_ROLES);
    }
}
