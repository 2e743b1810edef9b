//! Parameter RAM file handling.
//!
//! The emulator keeps the Mac's parameter RAM in a file next to the
//! preferences. Deleting it makes the next boot start from factory PRAM.

use std::fs;
use std::io;
use std::path::Path;

/// Delete the XPRAM file.
///
/// Returns `Ok(false)` if there was nothing to delete.
pub fn zap_pram(path: &Path) -> io::Result<bool> {
    match fs::remove_file(path) {
        Ok(()) => {
            tracing::info!("Deleted XPRAM file {}", path.display());
            Ok(true)
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::debug!("No XPRAM file at {}", path.display());
            Ok(false)
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn zap_deletes_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".basilisk_ii_xpram");
        fs::write(&path, [0u8; 256]).unwrap();

        assert!(zap_pram(&path).unwrap());
        assert!(!path.exists());
        assert!(!zap_pram(&path).unwrap());
    }

    #[test]
    fn zap_reports_other_errors() {
        let dir = tempdir().unwrap();
        assert!(zap_pram(dir.path()).is_err());
    }
}
