//! Settings struct with TOML-based sections.
//!
//! These are the editor's own settings, not the emulator preferences. Each
//! section maps to a TOML table and can be updated independently.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::logging::LogLevel;
use crate::volumes::{DropPlacement, VolumeOptions};

/// Root settings structure containing all configuration sections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// File locations.
    #[serde(default)]
    pub paths: PathSettings,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingSettings,

    /// Volume list behaviour.
    #[serde(default)]
    pub volumes: VolumeSettings,
}

impl Settings {
    /// Options handed to the volume manager.
    pub fn volume_options(&self) -> VolumeOptions {
        VolumeOptions {
            drop_placement: self.volumes.drop_placement,
            bincue: self.volumes.bincue,
        }
    }
}

/// Path configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathSettings {
    /// Emulator preferences file to edit.
    #[serde(default = "default_prefs_file")]
    pub prefs_file: String,

    /// Parameter RAM file deleted by "Zap PRAM".
    #[serde(default = "default_xpram_file")]
    pub xpram_file: String,

    /// Folder for log files.
    #[serde(default = "default_logs_folder")]
    pub logs_folder: String,
}

impl Default for PathSettings {
    fn default() -> Self {
        Self {
            prefs_file: default_prefs_file(),
            xpram_file: default_xpram_file(),
            logs_folder: default_logs_folder(),
        }
    }
}

fn default_prefs_file() -> String {
    dirs::home_dir()
        .map(|home| home.join(".basilisk_ii_prefs"))
        .unwrap_or_else(|| PathBuf::from(".basilisk_ii_prefs"))
        .to_string_lossy()
        .to_string()
}

fn default_xpram_file() -> String {
    dirs::home_dir()
        .map(|home| home.join(".basilisk_ii_xpram"))
        .unwrap_or_else(|| PathBuf::from(".basilisk_ii_xpram"))
        .to_string_lossy()
        .to_string()
}

fn default_logs_folder() -> String {
    dirs::data_local_dir()
        .map(|dir| dir.join("b2prefs").join("logs"))
        .unwrap_or_else(|| PathBuf::from(".logs"))
        .to_string_lossy()
        .to_string()
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Default level when `RUST_LOG` is not set.
    #[serde(default)]
    pub level: LogLevel,

    /// Also write a daily log file to the logs folder.
    #[serde(default)]
    pub file_logging: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            file_logging: false,
        }
    }
}

/// Volume list configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VolumeSettings {
    /// Which files of a multi-file drop move to the drop position.
    #[serde(default)]
    pub drop_placement: DropPlacement,

    /// Treat `.cue` files as CD-ROM images.
    #[serde(default)]
    pub bincue: bool,

    /// Size offered for new hardfiles, in MiB.
    #[serde(default = "default_hardfile_mib")]
    pub default_hardfile_mib: u32,
}

impl Default for VolumeSettings {
    fn default() -> Self {
        Self {
            drop_placement: DropPlacement::LastOnly,
            bincue: false,
            default_hardfile_mib: default_hardfile_mib(),
        }
    }
}

fn default_hardfile_mib() -> u32 {
    40
}

/// Configuration sections for targeted updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSection {
    Paths,
    Logging,
    Volumes,
}

impl ConfigSection {
    /// Get the TOML table name for this section.
    pub fn table_name(&self) -> &'static str {
        match self {
            ConfigSection::Paths => "paths",
            ConfigSection::Logging => "logging",
            ConfigSection::Volumes => "volumes",
        }
    }

    /// All sections, in file order.
    pub fn all() -> [ConfigSection; 3] {
        [ConfigSection::Paths, ConfigSection::Logging, ConfigSection::Volumes]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_serializes() {
        let settings = Settings::default();
        let toml = toml::to_string_pretty(&settings).unwrap();
        assert!(toml.contains("[paths]"));
        assert!(toml.contains("[volumes]"));
        assert!(toml.contains("drop_placement = \"last_only\""));
        assert!(toml.contains("level = \"info\""));
    }

    #[test]
    fn missing_fields_use_defaults() {
        let parsed: Settings = toml::from_str("[volumes]\ndrop_placement = \"all\"\n").unwrap();
        assert_eq!(parsed.volumes.drop_placement, DropPlacement::All);
        assert_eq!(parsed.volumes.default_hardfile_mib, 40);
        assert!(parsed.paths.prefs_file.ends_with(".basilisk_ii_prefs"));
        assert_eq!(parsed.logging.level, LogLevel::Info);
    }

    #[test]
    fn volume_options_follow_settings() {
        let mut settings = Settings::default();
        settings.volumes.bincue = true;
        let options = settings.volume_options();
        assert!(options.bincue);
        assert_eq!(options.drop_placement, DropPlacement::LastOnly);
    }
}
