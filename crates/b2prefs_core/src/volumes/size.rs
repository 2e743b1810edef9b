//! Size labels for volume rows.

use std::fs;

/// Label shown for volumes that cannot be opened.
pub const NOT_FOUND_LABEL: &str = "Not Found";

const IEC_UNITS: [&str; 6] = ["KiB", "MiB", "GiB", "TiB", "PiB", "EiB"];

/// Check for a raw Windows volume root such as `D:\`.
pub fn is_drive_root(path: &str) -> bool {
    let bytes = path.as_bytes();
    bytes.len() == 3 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':' && bytes[2] == b'\\'
}

/// Format a byte count with IEC units, e.g. `1.4 MiB`.
pub fn format_size_iec(bytes: u64) -> String {
    if bytes < 1024 {
        return if bytes == 1 {
            "1 byte".to_string()
        } else {
            format!("{} bytes", bytes)
        };
    }

    let mut value = bytes as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit + 1 < IEC_UNITS.len() {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.1} {}", value, IEC_UNITS[unit])
}

/// Compute the size label for a volume path.
///
/// Drive roots get an empty label, readable files their size, anything else
/// [`NOT_FOUND_LABEL`].
pub fn size_label(path: &str) -> String {
    if is_drive_root(path) {
        return String::new();
    }

    match fs::File::open(path).and_then(|file| file.metadata()) {
        Ok(meta) if !meta.is_dir() => format_size_iec(meta.len()),
        Ok(_) => {
            tracing::debug!("Volume {} is a directory", path);
            NOT_FOUND_LABEL.to_string()
        }
        Err(e) => {
            tracing::debug!("Cannot open volume {}: {}", path, e);
            NOT_FOUND_LABEL.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn formats_iec_units() {
        assert_eq!(format_size_iec(0), "0 bytes");
        assert_eq!(format_size_iec(1), "1 byte");
        assert_eq!(format_size_iec(1023), "1023 bytes");
        assert_eq!(format_size_iec(1024), "1.0 KiB");
        assert_eq!(format_size_iec(1_474_560), "1.4 MiB");
        assert_eq!(format_size_iec(40 << 20), "40.0 MiB");
        assert_eq!(format_size_iec(3 << 30), "3.0 GiB");
    }

    #[test]
    fn drive_roots_have_empty_label() {
        assert!(is_drive_root("D:\\"));
        assert!(!is_drive_root("D:"));
        assert!(!is_drive_root("D:/"));
        assert!(!is_drive_root("1:\\"));
        assert_eq!(size_label("E:\\"), "");
    }

    #[test]
    fn missing_file_is_not_found() {
        assert_eq!(size_label("/no/such/file"), NOT_FOUND_LABEL);
    }

    #[test]
    fn existing_file_reports_size() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("floppy.img");
        fs::write(&path, vec![0u8; 2048]).unwrap();

        assert_eq!(size_label(path.to_str().unwrap()), "2.0 KiB");
        assert_eq!(size_label(dir.path().to_str().unwrap()), NOT_FOUND_LABEL);
    }
}
