//! Volumes pane state and its synchronization with the preferences.

use std::fs::OpenOptions;
use std::io;

use crate::prefs::PrefsStore;

use super::drop::{parse_uri_list, DropPlacement, DropPosition, DropTarget};
use super::list::VolumeList;
use super::types::{guess_kind, BootPreference, VolumeId, VolumeKind};

/// Behaviour switches for the volume list, taken from the editor config.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VolumeOptions {
    /// Which dropped files are moved to the drop position.
    pub drop_placement: DropPlacement,
    /// Treat `.cue` files as CD-ROM images.
    pub bincue: bool,
}

/// Everything the volumes pane can ask of the manager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VolumeEvent {
    /// Add a file, guessing disk or CD-ROM from its extension.
    Add(String),
    /// Add a file with an explicit kind.
    AddWithType(String, VolumeKind),
    /// Remove the selected row.
    Remove,
    /// The view's selection changed.
    Select(Option<usize>),
    /// Flip disk/CD-ROM on a row.
    ToggleCdrom(usize),
    /// Move a row within the list.
    Reorder { from: usize, to: usize },
    /// Files dropped from outside the list.
    DropFiles {
        paths: Vec<String>,
        target: Option<DropTarget>,
    },
    /// Raw `text/uri-list` payload dropped from outside the list.
    DropUriList {
        payload: String,
        target: Option<DropTarget>,
    },
    /// Text of the CD-ROM device combobox changed.
    SetCdromHint(String),
    /// "Add" next to the CD-ROM device combobox.
    AddCdromFromHint,
    /// Create a blank disk image and add it.
    CreateHardfile { path: String, size_mib: u32 },
    SetBoot(BootPreference),
    SetNoCdrom(bool),
    SetPollMedia(bool),
    SetExternalFs(bool),
    SetExternalFsRoot(String),
}

/// State of the volumes pane.
///
/// Holds no view objects; a view reads the list and flags and feeds back
/// [`VolumeEvent`]s.
#[derive(Debug, Clone, Default)]
pub struct VolumeManager {
    list: VolumeList,
    selection: Option<VolumeId>,
    options: VolumeOptions,
    loaded_bootdriver: i32,

    pub external_fs_enabled: bool,
    pub external_fs_drive_root: String,
    pub no_cdrom_driver: bool,
    pub poll_removable_media: bool,
    pub cdrom_device_hint: String,
    pub boot_preference: BootPreference,
}

impl VolumeManager {
    /// Create an empty manager.
    pub fn new(options: VolumeOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Create a manager and load it from the preferences.
    pub fn from_prefs(prefs: &PrefsStore, options: VolumeOptions) -> Self {
        let mut manager = Self::new(options);
        manager.load(prefs);
        manager
    }

    /// The volume list.
    pub fn list(&self) -> &VolumeList {
        &self.list
    }

    /// Currently selected row, if any.
    ///
    /// The selection follows its volume when other rows are added, moved or
    /// removed.
    pub fn selection(&self) -> Option<usize> {
        self.selection.and_then(|id| self.list.index_of(id))
    }

    /// Point the selection at a row. Out-of-range rows clear it.
    pub fn select(&mut self, row: Option<usize>) {
        self.selection = row.and_then(|i| self.list.get(i)).map(|entry| entry.id);
    }

    /// Check whether a path is already listed.
    pub fn contains(&self, path: &str) -> bool {
        self.list.contains(path)
    }

    /// Replace the list and flags with what the preferences hold.
    ///
    /// Disks come first, then CD-ROMs, each in store order.
    pub fn load(&mut self, prefs: &PrefsStore) {
        self.list.clear();
        self.selection = None;

        for kind in [VolumeKind::Disk, VolumeKind::Cdrom] {
            for path in prefs.strings(kind.pref_key()) {
                self.list.add_with_type(path, kind);
            }
        }

        self.external_fs_enabled = prefs.find_bool("enableextfs");
        self.external_fs_drive_root = prefs.find_string("extdrives", 0).unwrap_or_default().to_string();
        self.no_cdrom_driver = prefs.find_bool("nocdrom");
        self.poll_removable_media = prefs.find_bool("pollmedia");
        self.loaded_bootdriver = prefs.find_int32("bootdriver");
        self.boot_preference = BootPreference::from_pref(self.loaded_bootdriver);
        self.cdrom_device_hint.clear();

        tracing::debug!("Loaded {} volumes from preferences", self.list.len());
    }

    /// Write the list and flags back, replacing every `disk` and `cdrom`.
    pub fn save(&self, prefs: &mut PrefsStore) {
        prefs.remove_all("disk");
        prefs.remove_all("cdrom");

        for entry in self.list.iter() {
            prefs.add_string(entry.kind.pref_key(), &entry.path);
        }

        prefs.replace_string("extdrives", &self.external_fs_drive_root);

        // A device typed into the combobox but never added still counts
        let hint = self.cdrom_device_hint.as_str();
        if !hint.is_empty() && !self.list.contains(hint) {
            prefs.add_string("cdrom", hint);
        }

        prefs.replace_bool("enableextfs", self.external_fs_enabled);
        prefs.replace_bool("nocdrom", self.no_cdrom_driver);
        prefs.replace_bool("pollmedia", self.poll_removable_media);
        // Keep the stored driver number unless the choice was changed
        let bootdriver = if BootPreference::from_pref(self.loaded_bootdriver) == self.boot_preference {
            self.loaded_bootdriver
        } else {
            self.boot_preference.to_pref()
        };
        prefs.replace_int32("bootdriver", bootdriver);

        tracing::debug!("Saved {} volumes to preferences", self.list.len());
    }

    /// Append a volume with an explicit kind unless already listed.
    pub fn add_with_type(&mut self, path: &str, kind: VolumeKind) -> Option<VolumeId> {
        self.list.add_with_type(path, kind)
    }

    /// Append a volume, guessing its kind from the extension.
    pub fn add_guessed(&mut self, path: &str) -> Option<VolumeId> {
        let kind = guess_kind(path, self.options.bincue);
        self.list.add_with_type(path, kind)
    }

    /// Remove the row at `selection`. No selection, or a stale one, is a no-op.
    ///
    /// Removing the selected volume clears the selection.
    pub fn remove(&mut self, selection: Option<usize>) {
        let Some(index) = selection else {
            return;
        };
        if let Some(entry) = self.list.remove(index) {
            tracing::debug!("Removed volume {}", entry.path);
            if self.selection == Some(entry.id) {
                self.selection = None;
            }
        }
    }

    /// Flip disk/CD-ROM on a row.
    pub fn toggle_kind(&mut self, index: usize) {
        self.list.toggle_kind(index);
    }

    /// Move a row, keeping everything else in relative order.
    pub fn reorder(&mut self, from: usize, to: usize) {
        self.list.move_entry(from, to);
    }

    /// Add dropped files and place them at the drop target.
    ///
    /// Every file is appended first. With a target row, the placement policy
    /// decides which of the newly appended volumes move there. Files that
    /// were already listed are neither added nor moved.
    pub fn drop_files(&mut self, paths: &[String], target: Option<DropTarget>) {
        let anchor = target.and_then(|t| self.list.get(t.row).map(|e| (e.id, t.position)));

        let appended: Vec<VolumeId> = paths.iter().filter_map(|path| self.add_guessed(path)).collect();

        let Some((anchor_id, position)) = anchor else {
            return;
        };

        let to_move: &[VolumeId] = match self.options.drop_placement {
            DropPlacement::LastOnly => match appended.last() {
                Some(last) => std::slice::from_ref(last),
                None => &[],
            },
            DropPlacement::All => &appended,
        };

        if !to_move.is_empty() {
            self.list
                .move_block(to_move, anchor_id, position == DropPosition::After);
        }
    }

    /// Add the device typed into the CD-ROM combobox, then clear it.
    pub fn add_cdrom_from_hint(&mut self) {
        if self.cdrom_device_hint.is_empty() || self.list.contains(&self.cdrom_device_hint) {
            return;
        }
        let hint = std::mem::take(&mut self.cdrom_device_hint);
        self.list.add_with_type(&hint, VolumeKind::Cdrom);
    }

    /// Create a zero-filled disk image of `size_mib` MiB and add it as a disk.
    ///
    /// Nothing is added if the file cannot be created.
    pub fn create_hardfile(&mut self, path: &str, size_mib: u32) -> io::Result<Option<VolumeId>> {
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)?;
        file.set_len(u64::from(size_mib) << 20)?;
        drop(file);

        tracing::info!("Created {} MiB hardfile {}", size_mib, path);
        Ok(self.list.add_with_type(path, VolumeKind::Disk))
    }

    /// Drive root entry is only meaningful with the external file system on.
    pub fn drive_root_editable(&self) -> bool {
        self.external_fs_enabled
    }

    /// CD-ROM device entry is only meaningful with the CD-ROM driver on.
    pub fn cdrom_hint_editable(&self) -> bool {
        !self.no_cdrom_driver
    }

    /// Remove button state.
    pub fn can_remove(&self) -> bool {
        self.selection.and_then(|id| self.list.get_by_id(id)).is_some()
    }

    /// Apply one pane event.
    pub fn dispatch(&mut self, event: VolumeEvent) {
        match event {
            VolumeEvent::Add(path) => {
                self.add_guessed(&path);
            }
            VolumeEvent::AddWithType(path, kind) => {
                self.add_with_type(&path, kind);
            }
            VolumeEvent::Remove => self.remove(self.selection()),
            VolumeEvent::Select(selection) => self.select(selection),
            VolumeEvent::ToggleCdrom(index) => self.toggle_kind(index),
            VolumeEvent::Reorder { from, to } => self.reorder(from, to),
            VolumeEvent::DropFiles { paths, target } => self.drop_files(&paths, target),
            VolumeEvent::DropUriList { payload, target } => {
                let paths = parse_uri_list(&payload);
                self.drop_files(&paths, target);
            }
            VolumeEvent::SetCdromHint(hint) => self.cdrom_device_hint = hint,
            VolumeEvent::AddCdromFromHint => self.add_cdrom_from_hint(),
            VolumeEvent::CreateHardfile { path, size_mib } => {
                if let Err(e) = self.create_hardfile(&path, size_mib) {
                    tracing::warn!("Failed to create hardfile {}: {}", path, e);
                }
            }
            VolumeEvent::SetBoot(pref) => self.boot_preference = pref,
            VolumeEvent::SetNoCdrom(v) => self.no_cdrom_driver = v,
            VolumeEvent::SetPollMedia(v) => self.poll_removable_media = v,
            VolumeEvent::SetExternalFs(v) => self.external_fs_enabled = v,
            VolumeEvent::SetExternalFsRoot(root) => self.external_fs_drive_root = root,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn entries(manager: &VolumeManager) -> Vec<(&str, VolumeKind)> {
        manager
            .list()
            .iter()
            .map(|e| (e.path.as_str(), e.kind))
            .collect()
    }

    fn manager_with(paths: &[&str], placement: DropPlacement) -> VolumeManager {
        let mut manager = VolumeManager::new(VolumeOptions {
            drop_placement: placement,
            bincue: false,
        });
        for path in paths {
            manager.add_guessed(path);
        }
        manager
    }

    #[test]
    fn explicit_type_beats_guess() {
        let mut manager = VolumeManager::default();
        manager.add_guessed("/vol/A.iso");
        manager.add_guessed("/vol/B.img");
        manager.add_with_type("/vol/C.iso", VolumeKind::Disk);

        assert_eq!(
            entries(&manager),
            vec![
                ("/vol/A.iso", VolumeKind::Cdrom),
                ("/vol/B.img", VolumeKind::Disk),
                ("/vol/C.iso", VolumeKind::Disk),
            ]
        );
    }

    #[test]
    fn repeated_adds_never_duplicate() {
        let mut manager = VolumeManager::default();
        for _ in 0..3 {
            manager.add_guessed("/vol/a.iso");
            manager.add_with_type("/vol/a.iso", VolumeKind::Disk);
            manager.add_with_type("/vol/b.dsk", VolumeKind::Cdrom);
            manager.add_guessed("/vol/b.dsk");
        }
        assert_eq!(
            entries(&manager),
            vec![("/vol/a.iso", VolumeKind::Cdrom), ("/vol/b.dsk", VolumeKind::Cdrom)]
        );
    }

    #[test]
    fn remove_without_selection_is_noop() {
        let mut manager = VolumeManager::default();
        manager.dispatch(VolumeEvent::Remove);
        assert!(manager.list().is_empty());

        manager.add_guessed("/vol/a.dsk");
        manager.dispatch(VolumeEvent::Remove);
        manager.remove(None);
        manager.remove(Some(4));
        assert_eq!(manager.list().len(), 1);
        assert!(!manager.can_remove());
    }

    #[test]
    fn remove_selected_row() {
        let mut manager = manager_with(&["/a.dsk", "/b.dsk"], DropPlacement::LastOnly);
        manager.dispatch(VolumeEvent::Select(Some(0)));
        assert!(manager.can_remove());

        manager.dispatch(VolumeEvent::Remove);
        assert_eq!(entries(&manager), vec![("/b.dsk", VolumeKind::Disk)]);
        assert_eq!(manager.selection(), None);
    }

    #[test]
    fn select_out_of_range_clears() {
        let mut manager = manager_with(&["/a.dsk"], DropPlacement::LastOnly);
        manager.dispatch(VolumeEvent::Select(Some(3)));
        assert_eq!(manager.selection(), None);
    }

    #[test]
    fn save_load_groups_by_key() {
        let mut manager = VolumeManager::default();
        manager.add_with_type("/c1.iso", VolumeKind::Cdrom);
        manager.add_with_type("/d1.dsk", VolumeKind::Disk);
        manager.add_with_type("/c2.iso", VolumeKind::Cdrom);
        manager.add_with_type("/d2.dsk", VolumeKind::Disk);

        let mut prefs = PrefsStore::new();
        prefs.add_string("disk", "/stale.dsk");
        manager.save(&mut prefs);
        assert_eq!(prefs.strings("disk").collect::<Vec<_>>(), vec!["/d1.dsk", "/d2.dsk"]);

        let reloaded = VolumeManager::from_prefs(&prefs, VolumeOptions::default());
        assert_eq!(
            entries(&reloaded),
            vec![
                ("/d1.dsk", VolumeKind::Disk),
                ("/d2.dsk", VolumeKind::Disk),
                ("/c1.iso", VolumeKind::Cdrom),
                ("/c2.iso", VolumeKind::Cdrom),
            ]
        );
    }

    #[test]
    fn load_reads_flags_and_collapses_duplicates() {
        let mut prefs = PrefsStore::new();
        prefs.add_string("disk", "/a.dsk");
        prefs.add_string("cdrom", "/a.dsk");
        prefs.add_string("cdrom", "D:\\");
        prefs.add_bool("enableextfs", true);
        prefs.add_string("extdrives", "CDE");
        prefs.add_bool("nocdrom", true);
        prefs.add_int32("bootdriver", -62);

        let manager = VolumeManager::from_prefs(&prefs, VolumeOptions::default());
        assert_eq!(
            entries(&manager),
            vec![("/a.dsk", VolumeKind::Disk), ("D:\\", VolumeKind::Cdrom)]
        );
        assert_eq!(manager.list().get(1).unwrap().size_label, "");
        assert!(manager.drive_root_editable());
        assert_eq!(manager.external_fs_drive_root, "CDE");
        assert!(!manager.cdrom_hint_editable());
        assert_eq!(manager.boot_preference, BootPreference::CdromFirst);
    }

    #[test]
    fn save_appends_unadded_cdrom_hint() {
        let mut manager = manager_with(&["/a.iso"], DropPlacement::LastOnly);
        manager.dispatch(VolumeEvent::SetCdromHint("/dev/cdrom".to_string()));

        let mut prefs = PrefsStore::new();
        manager.save(&mut prefs);
        assert_eq!(prefs.strings("cdrom").collect::<Vec<_>>(), vec!["/a.iso", "/dev/cdrom"]);

        manager.dispatch(VolumeEvent::SetCdromHint("/a.iso".to_string()));
        manager.save(&mut prefs);
        assert_eq!(prefs.strings("cdrom").collect::<Vec<_>>(), vec!["/a.iso"]);
    }

    #[test]
    fn cdrom_hint_add_clears_hint() {
        let mut manager = VolumeManager::default();
        manager.dispatch(VolumeEvent::SetCdromHint("E:\\".to_string()));
        manager.dispatch(VolumeEvent::AddCdromFromHint);

        assert_eq!(entries(&manager), vec![("E:\\", VolumeKind::Cdrom)]);
        assert!(manager.cdrom_device_hint.is_empty());

        manager.dispatch(VolumeEvent::AddCdromFromHint);
        assert_eq!(manager.list().len(), 1);
    }

    #[test]
    fn drop_last_only_moves_last_new_file() {
        let mut manager = manager_with(&["/a.dsk", "/b.dsk"], DropPlacement::LastOnly);
        manager.dispatch(VolumeEvent::DropFiles {
            paths: vec!["/x.iso".to_string(), "/y.img".to_string()],
            target: Some(DropTarget {
                row: 0,
                position: DropPosition::After,
            }),
        });

        let paths: Vec<_> = entries(&manager).into_iter().map(|(p, _)| p).collect();
        assert_eq!(paths, vec!["/a.dsk", "/y.img", "/b.dsk", "/x.iso"]);
        assert_eq!(manager.list().get(3).unwrap().kind, VolumeKind::Cdrom);
    }

    #[test]
    fn drop_all_moves_batch_in_order() {
        let mut manager = manager_with(&["/a.dsk", "/b.dsk"], DropPlacement::All);
        manager.dispatch(VolumeEvent::DropFiles {
            paths: vec!["/x.iso".to_string(), "/y.img".to_string()],
            target: Some(DropTarget {
                row: 1,
                position: DropPosition::Before,
            }),
        });

        let paths: Vec<_> = entries(&manager).into_iter().map(|(p, _)| p).collect();
        assert_eq!(paths, vec!["/a.dsk", "/x.iso", "/y.img", "/b.dsk"]);
    }

    #[test]
    fn drop_without_target_appends() {
        let mut manager = manager_with(&["/a.dsk"], DropPlacement::LastOnly);
        manager.dispatch(VolumeEvent::DropUriList {
            payload: "file:///x.iso\r\nhttp://nope/y.iso\r\nfile:///z%20z.img\r\n".to_string(),
            target: None,
        });

        assert_eq!(
            entries(&manager),
            vec![
                ("/a.dsk", VolumeKind::Disk),
                ("/x.iso", VolumeKind::Cdrom),
                ("/z z.img", VolumeKind::Disk),
            ]
        );
    }

    #[test]
    fn drop_of_listed_file_moves_nothing() {
        let mut manager = manager_with(&["/a.dsk", "/b.dsk"], DropPlacement::LastOnly);
        manager.drop_files(
            &["/b.dsk".to_string()],
            Some(DropTarget {
                row: 0,
                position: DropPosition::Before,
            }),
        );

        let paths: Vec<_> = entries(&manager).into_iter().map(|(p, _)| p).collect();
        assert_eq!(paths, vec!["/a.dsk", "/b.dsk"]);
    }

    #[test]
    fn reorder_keeps_selection_on_moved_row() {
        let mut manager = manager_with(&["/a.dsk", "/b.dsk", "/c.dsk"], DropPlacement::LastOnly);
        manager.dispatch(VolumeEvent::Select(Some(0)));
        manager.dispatch(VolumeEvent::Reorder { from: 0, to: 2 });

        let paths: Vec<_> = entries(&manager).into_iter().map(|(p, _)| p).collect();
        assert_eq!(paths, vec!["/b.dsk", "/c.dsk", "/a.dsk"]);
        assert_eq!(manager.selection(), Some(2));
    }

    #[test]
    fn remove_after_reorder_deletes_selected_volume() {
        let mut manager = manager_with(&["/a.dsk", "/b.dsk", "/c.dsk"], DropPlacement::LastOnly);
        manager.dispatch(VolumeEvent::Select(Some(1)));
        manager.dispatch(VolumeEvent::Reorder { from: 0, to: 2 });
        assert_eq!(manager.selection(), Some(0));

        manager.dispatch(VolumeEvent::Remove);
        let paths: Vec<_> = entries(&manager).into_iter().map(|(p, _)| p).collect();
        assert_eq!(paths, vec!["/c.dsk", "/a.dsk"]);
        assert_eq!(manager.selection(), None);
    }

    #[test]
    fn remove_after_drop_deletes_selected_volume() {
        let mut manager = manager_with(&["/a.dsk", "/b.dsk"], DropPlacement::LastOnly);
        manager.dispatch(VolumeEvent::Select(Some(1)));
        manager.dispatch(VolumeEvent::DropFiles {
            paths: vec!["/x.img".to_string()],
            target: Some(DropTarget {
                row: 0,
                position: DropPosition::Before,
            }),
        });
        assert_eq!(manager.selection(), Some(2));

        manager.dispatch(VolumeEvent::Remove);
        let paths: Vec<_> = entries(&manager).into_iter().map(|(p, _)| p).collect();
        assert_eq!(paths, vec!["/x.img", "/a.dsk"]);
    }

    #[test]
    fn removing_other_row_keeps_selection() {
        let mut manager = manager_with(&["/a.dsk", "/b.dsk", "/c.dsk"], DropPlacement::LastOnly);
        manager.dispatch(VolumeEvent::Select(Some(2)));
        manager.remove(Some(0));

        assert_eq!(manager.selection(), Some(1));
        assert!(manager.can_remove());
        manager.dispatch(VolumeEvent::Remove);
        let paths: Vec<_> = entries(&manager).into_iter().map(|(p, _)| p).collect();
        assert_eq!(paths, vec!["/b.dsk"]);
    }

    #[test]
    fn reload_clears_selection() {
        let mut manager = manager_with(&["/a.dsk"], DropPlacement::LastOnly);
        manager.dispatch(VolumeEvent::Select(Some(0)));
        manager.load(&PrefsStore::new());
        assert_eq!(manager.selection(), None);
        assert!(!manager.can_remove());
    }

    #[test]
    fn unchanged_boot_driver_number_survives_save() {
        crate::logging::init_test_tracing();
        let mut prefs = PrefsStore::new();
        prefs.add_int32("bootdriver", 1);

        let manager = VolumeManager::from_prefs(&prefs, VolumeOptions::default());
        assert_eq!(manager.boot_preference, BootPreference::CdromFirst);

        manager.save(&mut prefs);
        assert_eq!(prefs.find_int32("bootdriver"), 1);
    }

    #[test]
    fn changed_boot_choice_writes_driver_number() {
        let mut prefs = PrefsStore::new();
        prefs.add_int32("bootdriver", 1);

        let mut manager = VolumeManager::from_prefs(&prefs, VolumeOptions::default());
        manager.dispatch(VolumeEvent::SetBoot(BootPreference::Any));
        manager.save(&mut prefs);
        assert_eq!(prefs.find_int32("bootdriver"), 0);

        manager.dispatch(VolumeEvent::SetBoot(BootPreference::CdromFirst));
        manager.save(&mut prefs);
        assert_eq!(prefs.find_int32("bootdriver"), 1);

        let mut fresh = VolumeManager::default();
        fresh.dispatch(VolumeEvent::SetBoot(BootPreference::CdromFirst));
        fresh.save(&mut prefs);
        assert_eq!(prefs.find_int32("bootdriver"), -62);
    }

    #[test]
    fn create_hardfile_adds_disk() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("new.iso");
        let path = path.to_str().unwrap();

        let mut manager = VolumeManager::default();
        let id = manager.create_hardfile(path, 2).unwrap();
        assert!(id.is_some());

        let entry = manager.list().get(0).unwrap();
        assert_eq!(entry.kind, VolumeKind::Disk);
        assert_eq!(entry.size_label, "2.0 MiB");
        assert_eq!(std::fs::metadata(path).unwrap().len(), 2 << 20);
    }

    #[test]
    fn create_hardfile_failure_adds_nothing() {
        let mut manager = VolumeManager::default();
        manager.dispatch(VolumeEvent::CreateHardfile {
            path: "/no/such/dir/new.dsk".to_string(),
            size_mib: 1,
        });
        assert!(manager.list().is_empty());
    }
}
