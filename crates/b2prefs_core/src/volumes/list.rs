//! Ordered volume list with path deduplication.

use super::size::size_label;
use super::types::{VolumeEntry, VolumeId, VolumeKind};

/// Ordered list of volumes.
///
/// List order is the order volumes are written back to the preferences and
/// the order the emulator searches them when booting. No two entries share
/// a path.
#[derive(Debug, Clone, Default)]
pub struct VolumeList {
    entries: Vec<VolumeEntry>,
}

impl VolumeList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// All entries in list order.
    pub fn entries(&self) -> &[VolumeEntry] {
        &self.entries
    }

    /// Iterate entries in list order.
    pub fn iter(&self) -> impl Iterator<Item = &VolumeEntry> {
        self.entries.iter()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get an entry by position.
    pub fn get(&self, index: usize) -> Option<&VolumeEntry> {
        self.entries.get(index)
    }

    /// Get an entry by identity.
    pub fn get_by_id(&self, id: VolumeId) -> Option<&VolumeEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Current position of an entry.
    pub fn index_of(&self, id: VolumeId) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }

    /// Exact, case-sensitive path lookup.
    pub fn contains(&self, path: &str) -> bool {
        self.entries.iter().any(|e| e.path == path)
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Append a volume unless its path is already listed.
    ///
    /// Returns the new entry's id, or `None` if the path was a duplicate.
    pub fn add_with_type(&mut self, path: &str, kind: VolumeKind) -> Option<VolumeId> {
        if self.contains(path) {
            tracing::debug!("Volume {} already listed", path);
            return None;
        }

        let entry = VolumeEntry {
            id: VolumeId::new(),
            path: path.to_string(),
            kind,
            size_label: size_label(path),
        };
        let id = entry.id;
        self.entries.push(entry);
        Some(id)
    }

    /// Remove an entry by position.
    pub fn remove(&mut self, index: usize) -> Option<VolumeEntry> {
        if index < self.entries.len() {
            Some(self.entries.remove(index))
        } else {
            None
        }
    }

    /// Flip disk/CD-ROM for an entry. The size label is left as is.
    pub fn toggle_kind(&mut self, index: usize) -> bool {
        match self.entries.get_mut(index) {
            Some(entry) => {
                entry.kind = entry.kind.toggled();
                true
            }
            None => false,
        }
    }

    /// Move an entry from one position to another.
    pub fn move_entry(&mut self, from: usize, to: usize) -> bool {
        if from < self.entries.len() && to < self.entries.len() && from != to {
            let entry = self.entries.remove(from);
            self.entries.insert(to, entry);
            true
        } else {
            false
        }
    }

    /// Move a group of entries so they sit next to `anchor`, in the given
    /// order, either directly before it or directly after it.
    ///
    /// Ids that are not listed, or equal to the anchor, are ignored.
    pub(crate) fn move_block(&mut self, ids: &[VolumeId], anchor: VolumeId, after: bool) {
        let mut block = Vec::with_capacity(ids.len());
        for id in ids {
            if *id == anchor {
                continue;
            }
            if let Some(pos) = self.index_of(*id) {
                block.push(self.entries.remove(pos));
            }
        }

        let Some(anchor_pos) = self.index_of(anchor) else {
            // Anchor vanished; put everything back at the end.
            self.entries.extend(block);
            return;
        };

        let insert_at = if after { anchor_pos + 1 } else { anchor_pos };
        for (offset, entry) in block.into_iter().enumerate() {
            self.entries.insert(insert_at + offset, entry);
        }
    }
}
