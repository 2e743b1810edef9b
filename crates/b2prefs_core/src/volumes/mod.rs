//! Volume list management.
//!
//! This module provides:
//! - `VolumeList`: ordered, path-deduplicated list of disk and CD-ROM volumes
//! - `VolumeManager`: the volumes pane state, synchronized with the
//!   `disk` / `cdrom` preference keys and driven through `VolumeEvent`
//! - Extension-based CD-ROM guessing and size labels
//! - Drag-and-drop URI list handling
//!
//! Nothing here reports errors to the caller. Unreadable files get a
//! "Not Found" label, duplicate paths and missing selections are ignored.

mod drop;
mod list;
mod manager;
mod size;
mod types;

pub use drop::{parse_uri_list, DropPlacement, DropPosition, DropTarget};
pub use list::VolumeList;
pub use manager::{VolumeEvent, VolumeManager, VolumeOptions};
pub use size::{format_size_iec, is_drive_root, size_label, NOT_FOUND_LABEL};
pub use types::{guess_kind, BootPreference, VolumeEntry, VolumeId, VolumeKind, CDROM_REF_NUM};
