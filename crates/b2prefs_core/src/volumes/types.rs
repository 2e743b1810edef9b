//! Volume types.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Driver reference number of the CD-ROM driver, used by `bootdriver`.
pub const CDROM_REF_NUM: i32 = -62;

/// How the emulator mounts a volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VolumeKind {
    Disk,
    Cdrom,
}

impl VolumeKind {
    /// Preference key the volume is stored under.
    pub fn pref_key(&self) -> &'static str {
        match self {
            Self::Disk => "disk",
            Self::Cdrom => "cdrom",
        }
    }

    /// The other kind.
    pub fn toggled(self) -> Self {
        match self {
            Self::Disk => Self::Cdrom,
            Self::Cdrom => Self::Disk,
        }
    }
}

impl std::fmt::Display for VolumeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VolumeKind::Disk => write!(f, "disk"),
            VolumeKind::Cdrom => write!(f, "cdrom"),
        }
    }
}

/// Stable identity of a list entry, independent of its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VolumeId(Uuid);

impl VolumeId {
    pub(crate) fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

/// One row of the volume list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VolumeEntry {
    /// Identity handle for views; never persisted.
    pub id: VolumeId,
    /// File path or device identifier, unique within the list.
    pub path: String,
    /// Disk or CD-ROM.
    pub kind: VolumeKind,
    /// Size or status text computed when the entry was added.
    pub size_label: String,
}

/// Which driver the emulator boots from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BootPreference {
    /// Any bootable volume.
    #[default]
    Any,
    /// Try the CD-ROM driver first.
    CdromFirst,
}

impl BootPreference {
    /// Decode the `bootdriver` value. Any nonzero driver number means
    /// CD-ROM first.
    pub fn from_pref(value: i32) -> Self {
        match value {
            0 => Self::Any,
            _ => Self::CdromFirst,
        }
    }

    /// Encode as a `bootdriver` value.
    pub fn to_pref(self) -> i32 {
        match self {
            Self::Any => 0,
            Self::CdromFirst => CDROM_REF_NUM,
        }
    }
}

/// Guess whether a volume file is a CD-ROM image from its extension.
///
/// The suffix after the last `.` must be exactly `.iso` or `.toast`
/// (or `.cue` with `bincue`). Matching is case-sensitive.
pub fn guess_kind(path: &str, bincue: bool) -> VolumeKind {
    let Some(dot) = path.rfind('.') else {
        return VolumeKind::Disk;
    };

    match &path[dot..] {
        ".iso" | ".toast" => VolumeKind::Cdrom,
        ".cue" if bincue => VolumeKind::Cdrom,
        _ => VolumeKind::Disk,
    }
}
