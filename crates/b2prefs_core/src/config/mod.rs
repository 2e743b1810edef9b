//! Configuration management for the preferences editor.
//!
//! This module provides:
//! - TOML-based configuration with logical sections
//! - Atomic file writes (write to temp, then rename)
//! - Section-level updates (only changed section is modified)
//!
//! # Example
//!
//! ```no_run
//! use b2prefs_core::config::{ConfigManager, ConfigSection};
//! use b2prefs_core::volumes::DropPlacement;
//!
//! let mut config = ConfigManager::new(ConfigManager::default_path());
//! config.load_or_create().unwrap();
//!
//! println!("Editing {}", config.settings().paths.prefs_file);
//!
//! config.settings_mut().volumes.drop_placement = DropPlacement::All;
//! config.update_section(ConfigSection::Volumes).unwrap();
//! ```

mod manager;
mod settings;

pub use manager::{ConfigError, ConfigManager, ConfigResult};
pub use settings::{ConfigSection, LoggingSettings, PathSettings, Settings, VolumeSettings};
