//! Config manager for loading, saving, and atomic updates.
//!
//! Key features:
//! - Atomic writes (write to temp file, then rename)
//! - Section-level updates (only modified section is changed)
//! - Unknown sections are dropped on load
//! - Preserves comments and formatting with toml_edit

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use toml_edit::{DocumentMut, Item};

use super::settings::{ConfigSection, Settings};

/// Errors that can occur during config operations.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),

    #[error("Failed to parse config for editing: {0}")]
    EditParseError(#[from] toml_edit::TomlError),

    #[error("Config file not found: {0}")]
    NotFound(PathBuf),
}

/// Result type for config operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Manages the editor configuration.
pub struct ConfigManager {
    /// Path to the config file.
    config_path: PathBuf,
    /// Current settings loaded in memory.
    settings: Settings,
}

impl ConfigManager {
    /// Create a new config manager with the given config file path.
    ///
    /// Does not load the config - call `load()` or `load_or_create()` after.
    pub fn new(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
            settings: Settings::default(),
        }
    }

    /// Default config location: `<config dir>/b2prefs/settings.toml`.
    pub fn default_path() -> PathBuf {
        match dirs::config_dir() {
            Some(config_dir) => config_dir.join("b2prefs").join("settings.toml"),
            None => PathBuf::from("settings.toml"),
        }
    }

    /// Get the config file path.
    pub fn path(&self) -> &Path {
        &self.config_path
    }

    /// Get a reference to the current settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Get a mutable reference to the current settings.
    ///
    /// Note: Changes made here are only in memory until `save()` or
    /// `update_section()` is called.
    pub fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    /// Load config from file.
    ///
    /// Returns error if file doesn't exist.
    pub fn load(&mut self) -> ConfigResult<()> {
        if !self.config_path.exists() {
            return Err(ConfigError::NotFound(self.config_path.clone()));
        }

        let content = fs::read_to_string(&self.config_path)?;
        self.settings = toml::from_str(&content)?;
        Ok(())
    }

    /// Load config from file, creating with defaults if it doesn't exist.
    ///
    /// Missing keys are filled in and unknown sections dropped; the file is
    /// rewritten when that changed anything.
    pub fn load_or_create(&mut self) -> ConfigResult<()> {
        if self.config_path.exists() {
            let content = fs::read_to_string(&self.config_path)?;
            let (settings, was_modified) = self.parse_and_clean(&content)?;
            self.settings = settings;

            if was_modified {
                tracing::debug!("Rewriting config {}", self.config_path.display());
                self.save()?;
            }
        } else {
            tracing::info!("Creating default config at {}", self.config_path.display());
            self.settings = Settings::default();
            self.save()?;
        }
        Ok(())
    }

    /// Create the logs folder if file logging is on.
    pub fn ensure_dirs_exist(&self) -> ConfigResult<()> {
        if self.settings.logging.file_logging {
            fs::create_dir_all(self.logs_folder())?;
        }
        Ok(())
    }

    /// Get the logs folder path.
    pub fn logs_folder(&self) -> PathBuf {
        PathBuf::from(&self.settings.paths.logs_folder)
    }

    /// Get the emulator preferences file path.
    pub fn prefs_file(&self) -> PathBuf {
        PathBuf::from(&self.settings.paths.prefs_file)
    }

    /// Parameter RAM file path.
    pub fn xpram_file(&self) -> PathBuf {
        PathBuf::from(&self.settings.paths.xpram_file)
    }

    /// Parse config content and decide whether it needs rewriting.
    fn parse_and_clean(&self, content: &str) -> ConfigResult<(Settings, bool)> {
        let doc: DocumentMut = content.parse()?;
        let settings: Settings = toml::from_str(content)?;

        let valid_sections = ConfigSection::all().map(|s| s.table_name());
        let has_unknown = doc.iter().any(|(key, _)| !valid_sections.contains(&key));

        let mut has_missing = false;
        for section in ConfigSection::all() {
            let expected = self.section_table(&settings, section)?;
            match doc.get(section.table_name()).and_then(Item::as_table) {
                Some(table) => {
                    if expected.iter().any(|(key, _)| !table.contains_key(key)) {
                        has_missing = true;
                    }
                }
                None => has_missing = true,
            }
        }

        Ok((settings, has_unknown || has_missing))
    }

    /// Serialize one section as a standalone table.
    fn section_table(&self, settings: &Settings, section: ConfigSection) -> ConfigResult<toml_edit::Table> {
        let section_toml = match section {
            ConfigSection::Paths => toml::to_string_pretty(&settings.paths)?,
            ConfigSection::Logging => toml::to_string_pretty(&settings.logging)?,
            ConfigSection::Volumes => toml::to_string_pretty(&settings.volumes)?,
        };
        let section_doc: DocumentMut = section_toml.parse()?;
        Ok(section_doc.as_table().clone())
    }

    /// Save the entire config atomically.
    pub fn save(&self) -> ConfigResult<()> {
        let content = self.generate_config_with_comments()?;
        self.atomic_write(&content)?;
        Ok(())
    }

    /// Update a specific section atomically.
    ///
    /// This re-reads the file from disk, updates only the specified section,
    /// and writes back atomically. Comments in other sections survive.
    pub fn update_section(&mut self, section: ConfigSection) -> ConfigResult<()> {
        let current_content = if self.config_path.exists() {
            fs::read_to_string(&self.config_path)?
        } else {
            String::new()
        };

        let mut doc: DocumentMut = if current_content.is_empty() {
            DocumentMut::new()
        } else {
            current_content.parse()?
        };

        let section_table = self.section_table(&self.settings, section)?;
        doc[section.table_name()] = Item::Table(section_table);

        self.atomic_write(&doc.to_string())?;
        Ok(())
    }

    /// Generate config content with helpful comments.
    fn generate_config_with_comments(&self) -> ConfigResult<String> {
        let mut output = String::new();

        output.push_str("# Basilisk II preferences editor configuration\n");
        output.push_str(
            "# This file is auto-generated. Comments may be preserved on section updates.\n",
        );

        for section in ConfigSection::all() {
            let (comment, content) = match section {
                ConfigSection::Paths => (
                    "# Preferences, XPRAM and log locations",
                    toml::to_string_pretty(&self.settings.paths)?,
                ),
                ConfigSection::Logging => (
                    "# Logging configuration",
                    toml::to_string_pretty(&self.settings.logging)?,
                ),
                ConfigSection::Volumes => (
                    "# Volume list behaviour (drop_placement: last_only | all)",
                    toml::to_string_pretty(&self.settings.volumes)?,
                ),
            };

            output.push('\n');
            output.push_str(comment);
            output.push('\n');
            output.push_str(&format!("[{}]\n", section.table_name()));
            for line in content.lines() {
                output.push_str(line);
                output.push('\n');
            }
        }

        Ok(output)
    }

    /// Write content to config file atomically.
    ///
    /// Writes to a temp file first, then renames.
    fn atomic_write(&self, content: &str) -> io::Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let temp_path = self.config_path.with_extension("toml.tmp");

        {
            let mut file = fs::File::create(&temp_path)?;
            file.write_all(content.as_bytes())?;
            file.sync_all()?;
        }

        fs::rename(&temp_path, &self.config_path)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::volumes::DropPlacement;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn load_or_create_creates_default() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("b2prefs").join("settings.toml");

        let mut manager = ConfigManager::new(&config_path);
        manager.load_or_create().unwrap();

        assert!(config_path.exists());
        let content = fs::read_to_string(&config_path).unwrap();
        assert!(content.contains("[paths]"));
        assert!(content.contains("[logging]"));
        assert!(content.contains("[volumes]"));
        assert!(content.contains("default_hardfile_mib = 40"));
        assert!(content.contains("xpram_file = "));
        assert!(manager.xpram_file().ends_with(".basilisk_ii_xpram"));
    }

    #[test]
    fn load_or_create_preserves_existing() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("settings.toml");

        fs::write(&config_path, "[paths]\nprefs_file = \"/srv/mac/prefs\"\n").unwrap();

        let mut manager = ConfigManager::new(&config_path);
        manager.load_or_create().unwrap();

        assert_eq!(manager.settings().paths.prefs_file, "/srv/mac/prefs");
        assert_eq!(manager.prefs_file(), PathBuf::from("/srv/mac/prefs"));

        // Missing sections were filled in on disk
        let content = fs::read_to_string(&config_path).unwrap();
        assert!(content.contains("[volumes]"));
        assert!(content.contains("/srv/mac/prefs"));
    }

    #[test]
    fn load_or_create_drops_unknown_sections() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("settings.toml");

        fs::write(&config_path, "[analysis]\nchunk_count = 10\n").unwrap();

        let mut manager = ConfigManager::new(&config_path);
        manager.load_or_create().unwrap();

        let content = fs::read_to_string(&config_path).unwrap();
        assert!(!content.contains("[analysis]"));
    }

    #[test]
    fn load_missing_file_is_not_found() {
        let dir = tempdir().unwrap();
        let mut manager = ConfigManager::new(dir.path().join("nope.toml"));
        assert!(matches!(manager.load(), Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn update_section_only_changes_target() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("settings.toml");

        let mut manager = ConfigManager::new(&config_path);
        manager.load_or_create().unwrap();

        manager.settings_mut().volumes.drop_placement = DropPlacement::All;
        manager.settings_mut().logging.file_logging = true;
        manager.update_section(ConfigSection::Volumes).unwrap();

        let content = fs::read_to_string(&config_path).unwrap();
        assert!(content.contains("drop_placement = \"all\""));
        assert!(content.contains("file_logging = false"));
        assert!(content.contains("# Logging configuration"));

        let mut reloaded = ConfigManager::new(&config_path);
        reloaded.load().unwrap();
        assert_eq!(reloaded.settings().volumes.drop_placement, DropPlacement::All);
    }

    #[test]
    fn atomic_write_creates_no_temp_on_success() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("settings.toml");

        let mut manager = ConfigManager::new(&config_path);
        manager.load_or_create().unwrap();

        let temp_path = config_path.with_extension("toml.tmp");
        assert!(!temp_path.exists());
    }
}
