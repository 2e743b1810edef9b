//! Drag-and-drop of files onto the volume list.

use percent_encoding::percent_decode_str;
use serde::{Deserialize, Serialize};

/// Where a drop landed relative to the row under the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropPosition {
    Before,
    After,
}

/// Row and side a drop landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropTarget {
    pub row: usize,
    pub position: DropPosition,
}

/// Which newly added volumes of a multi-file drop are placed at the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DropPlacement {
    /// Only the last volume added by the drop moves to the target; the rest
    /// stay appended at the end. Matches the classic editor.
    #[default]
    LastOnly,
    /// Every volume added by the drop moves to the target, in drop order.
    All,
}

/// Extract filesystem paths from a `text/uri-list` drop payload.
///
/// Entries are separated by CRLF. Anything that is not a `file://` URI, or
/// does not decode to a valid path, is skipped.
pub fn parse_uri_list(payload: &str) -> Vec<String> {
    payload
        .split("\r\n")
        .filter_map(|uri| {
            let path = file_uri_to_path(uri);
            if path.is_none() && !uri.is_empty() {
                tracing::debug!("Skipping dropped item {:?}", uri);
            }
            path
        })
        .collect()
}

/// Convert one `file://` URI to a path.
fn file_uri_to_path(uri: &str) -> Option<String> {
    if uri.len() < 7 {
        return None;
    }
    let rest = uri.strip_prefix("file://")?;

    // Drop the authority ("localhost" or a host name) if present
    let encoded = if rest.starts_with('/') {
        rest
    } else {
        &rest[rest.find('/')?..]
    };

    let decoded = percent_decode_str(encoded).decode_utf8().ok()?;
    if decoded.is_empty() {
        return None;
    }

    // file:///C:/dir/disk.img -> C:/dir/disk.img
    let bytes = decoded.as_bytes();
    if bytes.len() >= 3 && bytes[0] == b'/' && bytes[1].is_ascii_alphabetic() && bytes[2] == b':' {
        return Some(decoded[1..].to_string());
    }

    Some(decoded.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_file_uris() {
        let paths = parse_uri_list("file:///home/me/Mac%20OS%208.iso\r\nfile:///tmp/b.img\r\n");
        assert_eq!(paths, vec!["/home/me/Mac OS 8.iso", "/tmp/b.img"]);
    }

    #[test]
    fn skips_non_file_entries() {
        let paths = parse_uri_list("http://example.com/a.iso\r\nfile:\r\n\r\nfile:///ok.dsk");
        assert_eq!(paths, vec!["/ok.dsk"]);
    }

    #[test]
    fn strips_host_and_drive_slash() {
        assert_eq!(parse_uri_list("file://localhost/srv/x.img"), vec!["/srv/x.img"]);
        assert_eq!(parse_uri_list("file:///C:/Mac/hd.dsk"), vec!["C:/Mac/hd.dsk"]);
        assert!(parse_uri_list("file://hostonly").is_empty());
    }

    #[test]
    fn invalid_utf8_is_skipped() {
        assert!(parse_uri_list("file:///bad%FF.img").is_empty());
    }
}
