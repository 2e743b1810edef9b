//! Preferences file loading and saving.
//!
//! The file is plain text with one `keyword value` pair per line. Blank
//! lines and lines starting with `#` are ignored. The item table decides how
//! each value is parsed and whether a repeated keyword appends or replaces.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use thiserror::Error;

use super::items::{find_item, PrefType};
use super::store::{PrefValue, PrefsStore};

/// Errors that can occur while reading or writing the preferences file.
#[derive(Error, Debug)]
pub enum PrefsError {
    #[error("Failed to access preferences file: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid number for '{key}' on line {line}: {value}")]
    InvalidInt {
        line: usize,
        key: String,
        value: String,
    },

    #[error("Invalid boolean for '{key}' on line {line}: {value}")]
    InvalidBool {
        line: usize,
        key: String,
        value: String,
    },
}

/// Result type for preferences file operations.
pub type PrefsResult<T> = Result<T, PrefsError>;

impl PrefsStore {
    /// Parse preferences text into an empty store.
    pub fn parse(content: &str) -> PrefsResult<Self> {
        let mut prefs = Self::new();
        prefs.merge_str(content)?;
        Ok(prefs)
    }

    /// Overlay preferences text onto this store.
    ///
    /// Repeatable items are appended, single-valued items replace any
    /// existing value. Unknown keywords are skipped.
    pub fn merge_str(&mut self, content: &str) -> PrefsResult<()> {
        for (idx, raw) in content.lines().enumerate() {
            let line_no = idx + 1;
            let line = raw.trim_end_matches('\r').trim_start();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (key, value) = line.split_once(' ').unwrap_or((line, ""));

            let Some(desc) = find_item(key) else {
                tracing::warn!("Unknown preferences keyword '{}' on line {}", key, line_no);
                continue;
            };

            let parsed = match desc.kind {
                PrefType::String => PrefValue::Str(value.to_string()),
                PrefType::Int32 => {
                    let v = value.trim().parse::<i32>().map_err(|_| PrefsError::InvalidInt {
                        line: line_no,
                        key: key.to_string(),
                        value: value.to_string(),
                    })?;
                    PrefValue::Int32(v)
                }
                PrefType::Bool => match value.trim() {
                    "true" => PrefValue::Bool(true),
                    "false" => PrefValue::Bool(false),
                    _ => {
                        return Err(PrefsError::InvalidBool {
                            line: line_no,
                            key: key.to_string(),
                            value: value.to_string(),
                        })
                    }
                },
            };

            if desc.multiple {
                self.add(key, parsed);
            } else {
                self.replace(key, parsed);
            }
        }
        Ok(())
    }

    /// Load the preferences file on top of the stock defaults.
    ///
    /// A missing file is not an error; the defaults are returned.
    pub fn load_file(path: impl AsRef<Path>) -> PrefsResult<Self> {
        let path = path.as_ref();
        let mut prefs = Self::with_defaults();

        if !path.exists() {
            tracing::info!("No preferences file at {}, using defaults", path.display());
            return Ok(prefs);
        }

        let content = fs::read_to_string(path)?;
        prefs.merge_str(&content)?;
        tracing::debug!("Loaded {} preference items from {}", prefs.len(), path.display());
        Ok(prefs)
    }

    /// Render the store in preferences file format, in store order.
    pub fn to_prefs_string(&self) -> String {
        let mut output = String::new();
        for entry in self.items() {
            output.push_str(&entry.key);
            output.push(' ');
            output.push_str(&entry.value.to_string());
            output.push('\n');
        }
        output
    }

    /// Save the store to the preferences file atomically.
    ///
    /// Writes to a temp file first, then renames.
    pub fn save_file(&self, path: impl AsRef<Path>) -> PrefsResult<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut temp_name = path.as_os_str().to_owned();
        temp_name.push(".tmp");
        let temp_path = Path::new(&temp_name);

        {
            let mut file = fs::File::create(temp_path)?;
            file.write_all(self.to_prefs_string().as_bytes())?;
            file.sync_all()?;
        }

        fs::rename(temp_path, path)?;

        tracing::debug!("Saved {} preference items to {}", self.len(), path.display());
        Ok(())
    }
}
