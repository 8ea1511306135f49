//! Configuration loading for Folio.
//!
//! Everything is optional. A missing file, section, or key falls back to the
//! built-in defaults:
//!
//! ```toml
//! [app]
//! tui = "full"            # or "inline"
//! ascii_only = false
//! high_contrast = false
//! reduced_motion = false
//! compact = false
//!
//! [typewriter]
//! roles = ["developer", "designer", "CS student"]
//! typing_ms = 100
//! erase_ms = 50
//! pause_ms = 2000
//! initial_ms = 1000
//! blink_ms = 500
//!
//! [profile]
//! name = "..."            # replaces the whole built-in content table
//! ```

use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use folio_types::ui::UiOptions;
use folio_types::{ConfigurationError, Profile, Timings, TypewriterSettings};

const DEFAULT_PROFILE_RAW: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/profile.toml"));

static DEFAULT_PROFILE: OnceLock<Profile> = OnceLock::new();

/// Built-in portfolio content.
pub fn default_profile() -> &'static Profile {
    DEFAULT_PROFILE.get_or_init(|| {
        toml::from_str(DEFAULT_PROFILE_RAW).expect("bundled profile.toml is valid")
    })
}

#[derive(Debug, Default, Deserialize)]
pub struct FolioConfig {
    pub app: Option<AppConfig>,
    pub typewriter: Option<TypewriterConfig>,
    pub profile: Option<Profile>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ConfigError {
    pub fn path(&self) -> &PathBuf {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// Viewport mode: "full" (default) or "inline".
    pub tui: Option<String>,
    /// Use ASCII-only glyphs for the cursor, bullets and menu button.
    #[serde(default)]
    pub ascii_only: bool,
    /// Enable a high-contrast color palette.
    #[serde(default)]
    pub high_contrast: bool,
    /// Disable section entry animations.
    #[serde(default)]
    pub reduced_motion: bool,
    /// Always use the compact navigation bar with a menu button.
    #[serde(default)]
    pub compact: bool,
}

impl AppConfig {
    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        UiOptions {
            ascii_only: self.ascii_only,
            high_contrast: self.high_contrast,
            reduced_motion: self.reduced_motion,
            compact: self.compact,
        }
    }
}

/// Role list and timing overrides, in milliseconds.
#[derive(Debug, Default, Deserialize)]
pub struct TypewriterConfig {
    pub roles: Option<Vec<String>>,
    pub typing_ms: Option<u64>,
    pub erase_ms: Option<u64>,
    pub pause_ms: Option<u64>,
    pub initial_ms: Option<u64>,
    pub blink_ms: Option<u64>,
}

impl TypewriterConfig {
    pub fn settings(&self) -> Result<TypewriterSettings, ConfigurationError> {
        let defaults = Timings::default();
        let ms = |value: Option<u64>, fallback: Duration| {
            value.map_or(fallback, Duration::from_millis)
        };
        let timings = Timings {
            typing: ms(self.typing_ms, defaults.typing),
            erase: ms(self.erase_ms, defaults.erase),
            pause: ms(self.pause_ms, defaults.pause),
            initial: ms(self.initial_ms, defaults.initial),
            blink: ms(self.blink_ms, defaults.blink),
        };
        match &self.roles {
            Some(roles) => TypewriterSettings::new(roles.iter().cloned(), timings),
            None => TypewriterSettings::new(folio_types::DEFAULT_ROLES, timings),
        }
    }
}

impl FolioConfig {
    pub fn load() -> Result<Option<Self>, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(None),
        }
    }

    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Ok(Some(config)),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    pub fn typewriter_settings(&self) -> Result<TypewriterSettings, ConfigurationError> {
        match &self.typewriter {
            Some(typewriter) => typewriter.settings(),
            None => Ok(TypewriterSettings::default()),
        }
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.app
            .as_ref()
            .map(AppConfig::ui_options)
            .unwrap_or_default()
    }

    /// Configured content, or the built-in profile.
    #[must_use]
    pub fn profile(&self) -> Profile {
        self.profile
            .clone()
            .unwrap_or_else(|| default_profile().clone())
    }
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".folio").join("config.toml"))
}
