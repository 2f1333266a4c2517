use crate::store::StoreConfig;
use crate::{Error, Result};
use goplanify_types::{Preferences, UserId};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Resolve the data directory path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. GOPLANIFY_PATH environment variable (with tilde expansion)
/// 3. XDG data directory
/// 4. ~/.goplanify (fallback for systems without XDG)
pub fn resolve_data_dir(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("GOPLANIFY_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("goplanify"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".goplanify"));
    }

    Err(Error::Config(
        "Could not determine data directory: no HOME directory or XDG data directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct StoreSettings {
    #[serde(default)]
    pub source: SourceKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fetch_timeout_ms: Option<u64>,
}

/// Collaborator that answers trip fetches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Built-in demo catalog
    #[default]
    Demo,
    /// Remote trip service. Not available yet, so every fetch fails.
    Remote,
}

impl SourceKind {
    pub fn as_str(self) -> &'static str {
        match self {
            SourceKind::Demo => "demo",
            SourceKind::Remote => "remote",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreferenceDefaults {
    pub theme: String,
    pub language: String,
    pub notifications_enabled: bool,
}

impl Default for PreferenceDefaults {
    fn default() -> Self {
        Self {
            theme: "system".to_string(),
            language: "en".to_string(),
            notifications_enabled: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplaySettings {
    pub screen_width_dp: u32,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            screen_width_dp: 411,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub store: StoreSettings,
    #[serde(default)]
    pub preferences: PreferenceDefaults,
    #[serde(default)]
    pub display: DisplaySettings,
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn path_in(data_dir: &Path) -> PathBuf {
        data_dir.join(CONFIG_FILE_NAME)
    }

    /// Preferences record seeded from the configured defaults
    pub fn default_preferences(&self, user_id: impl Into<UserId>) -> Result<Preferences> {
        let defaults = &self.preferences;
        Ok(Preferences::new(
            user_id,
            defaults.theme.as_str(),
            defaults.language.as_str(),
            defaults.notifications_enabled,
        )?)
    }
}

impl From<&Config> for StoreConfig {
    fn from(config: &Config) -> Self {
        Self {
            fetch_timeout: config.store.fetch_timeout_ms.map(Duration::from_millis),
        }
    }
}
