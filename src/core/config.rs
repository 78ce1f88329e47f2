use std::path::PathBuf;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;

use super::audio::gain::{MAX_VOLUME, MIN_VOLUME};

/// Describes a user-facing setting so a host can render it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigItem {
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub min: i32,
    pub max: i32,
    pub unit: &'static str,
    pub position: u32,
}

pub const VOLUME_ITEM: ConfigItem = ConfigItem {
    key: "volume",
    name: "Volume",
    description: "Volume of Yama sound effects",
    min: MIN_VOLUME,
    max: MAX_VOLUME,
    unit: "%",
    position: 1,
};

/// Plugin settings.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Settings {
    /// Sound effect volume, 0-100 percent
    #[serde(default = "default_volume")]
    pub volume: i32,
    /// Directory holding the yama_*.wav resources
    #[serde(default = "default_sound_dir")]
    pub sound_dir: PathBuf,
}

fn default_volume() -> i32 {
    100
}

fn default_sound_dir() -> PathBuf {
    PathBuf::from("sounds")
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            volume: default_volume(),
            sound_dir: default_sound_dir(),
        }
    }
}

pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    pub fn new(app_config_dir: PathBuf) -> Self {
        Self {
            config_path: app_config_dir.join("settings.json"),
        }
    }

    pub fn load(&self) -> Settings {
        if self.config_path.exists() {
            match fs::read_to_string(&self.config_path) {
                Ok(content) => match serde_json::from_str(&content) {
                    Ok(settings) => return settings,
                    Err(e) => log::warn!("Ignoring malformed {:?}: {}", self.config_path, e),
                },
                Err(e) => log::warn!("Could not read {:?}: {}", self.config_path, e),
            }
        }
        Settings::default()
    }

    pub fn save(&self, settings: &Settings) -> io::Result<()> {
        // Ensure directory exists
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(settings)?;
        fs::write(&self.config_path, content)
    }
}
