use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::shared::constants::{
    DEFAULT_BAR_WIDTH, LOCAL_ENDPOINT, PRODUCTION_ENDPOINT, SIMULATED_DELAY_MS,
};

/// Deployment profile that decides which detector endpoint is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    Local,
    Production,
}

impl Profile {
    pub const ALL: &[Profile] = &[Profile::Local, Profile::Production];

    pub fn base_url(self) -> &'static str {
        match self {
            Profile::Local => LOCAL_ENDPOINT,
            Profile::Production => PRODUCTION_ENDPOINT,
        }
    }
}

impl Default for Profile {
    /// Debug builds talk to a local detector, release builds to production.
    fn default() -> Self {
        if cfg!(debug_assertions) {
            Profile::Local
        } else {
            Profile::Production
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Profile::Local => write!(f, "local"),
            Profile::Production => write!(f, "production"),
        }
    }
}

impl FromStr for Profile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Profile::ALL
            .iter()
            .copied()
            .find(|profile| profile.to_string() == s)
            .ok_or_else(|| {
                let names: Vec<String> = Profile::ALL.iter().map(Profile::to_string).collect();
                format!("Profile must be one of {}, got '{s}'", names.join(", "))
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetectorBackend {
    Http,
    Simulated,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub profile: Profile,
    /// Explicit base URL; takes precedence over the profile.
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default = "default_backend")]
    pub backend: DetectorBackend,
    #[serde(default = "default_simulated_delay_ms")]
    pub simulated_delay_ms: u64,
    #[serde(default)]
    pub font_path: Option<PathBuf>,
    #[serde(default = "default_bar_width")]
    pub bar_width: usize,
}

fn default_backend() -> DetectorBackend {
    DetectorBackend::Http
}

fn default_simulated_delay_ms() -> u64 {
    SIMULATED_DELAY_MS
}

fn default_bar_width() -> usize {
    DEFAULT_BAR_WIDTH
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            profile: Profile::default(),
            endpoint: None,
            backend: default_backend(),
            simulated_delay_ms: default_simulated_delay_ms(),
            font_path: None,
            bar_width: default_bar_width(),
        }
    }
}

impl Settings {
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("Moodframe").join("settings.json"))
    }

    /// Loads user settings, falling back to defaults on any failure.
    pub fn load() -> Self {
        Self::config_path()
            .map(|path| Self::load_from(&path))
            .unwrap_or_default()
    }

    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => serde_json::from_str(&json).unwrap_or_else(|e| {
                log::warn!("Ignoring malformed settings at {}: {e}", path.display());
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Persists these settings as the user's defaults and returns where they went.
    pub fn save(&self) -> io::Result<PathBuf> {
        let path = Self::config_path()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no user config directory"))?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(io::Error::other)?;
        fs::write(path, json)
    }

    /// Detector base URL without a trailing slash.
    pub fn base_url(&self) -> String {
        let url = self
            .endpoint
            .as_deref()
            .unwrap_or_else(|| self.profile.base_url());
        url.trim_end_matches('/').to_string()
    }
}
