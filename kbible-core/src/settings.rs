//! Persisted user configuration.
//!
//! Stored as JSON under the kbible home directory. A missing or unreadable
//! file loads defaults; settings failures never block the pipeline.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Line prefix that arms the inline suggester. Empty means the built-in
    /// fallback trigger applies.
    pub prefix_trigger: String,
    /// Prefix the book name with '#' in the callout header, turning it into
    /// a tag.
    pub enable_tagging: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            prefix_trigger: String::new(),
            enable_tagging: false,
        }
    }
}

pub fn kbible_home() -> PathBuf {
    if let Ok(p) = std::env::var("KBIBLE_DIR") {
        return PathBuf::from(p);
    }
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".kbible")
}

pub fn settings_path() -> PathBuf {
    kbible_home().join("settings.json")
}

pub fn load_settings() -> Settings {
    load_settings_from(&settings_path())
}

pub fn load_settings_from(path: &Path) -> Settings {
    std::fs::read_to_string(path)
        .ok()
        .and_then(|s| serde_json::from_str(&s).ok())
        .unwrap_or_default()
}

pub fn save_settings(settings: &Settings) -> std::io::Result<()> {
    save_settings_to(&settings_path(), settings)
}

pub fn save_settings_to(path: &Path, settings: &Settings) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let body = serde_json::to_string_pretty(settings).map_err(std::io::Error::other)?;
    std::fs::write(path, body)
}
