//! Volume list commands.

use anyhow::{bail, Result};

use b2prefs_core::prefs::PrefsStore;
use b2prefs_core::session::EditorMsg;
use b2prefs_core::volumes::{
    BootPreference, DropPosition, DropTarget, VolumeEvent, VolumeKind, VolumeManager,
};

use super::{check_index, print_volumes, Context};

/// Send volume events through a session, save, and print the new list.
fn apply(ctx: &Context, events: Vec<VolumeEvent>) -> Result<()> {
    let prefs = ctx.edit(|session| {
        for event in events {
            session.dispatch(EditorMsg::Volumes(event));
        }
        Ok(())
    })?;
    print_saved_volumes(ctx, &prefs);
    Ok(())
}

/// `b2prefs add`
pub fn add(ctx: &Context, paths: Vec<String>, cdrom: bool, disk: bool) -> Result<()> {
    let events = paths
        .into_iter()
        .map(|path| {
            if cdrom {
                VolumeEvent::AddWithType(path, VolumeKind::Cdrom)
            } else if disk {
                VolumeEvent::AddWithType(path, VolumeKind::Disk)
            } else {
                VolumeEvent::Add(path)
            }
        })
        .collect();
    apply(ctx, events)
}

/// `b2prefs remove`
pub fn remove(ctx: &Context, index: usize) -> Result<()> {
    let prefs = ctx.edit(|session| {
        check_index(session, index)?;
        session.dispatch(EditorMsg::Volumes(VolumeEvent::Select(Some(index))));
        session.dispatch(EditorMsg::Volumes(VolumeEvent::Remove));
        Ok(())
    })?;
    println!("Removed volume {} ({} items saved)", index, prefs.len());
    Ok(())
}

/// `b2prefs toggle`
pub fn toggle(ctx: &Context, index: usize) -> Result<()> {
    let prefs = ctx.edit(|session| {
        check_index(session, index)?;
        session.dispatch(EditorMsg::Volumes(VolumeEvent::ToggleCdrom(index)));
        Ok(())
    })?;
    print_saved_volumes(ctx, &prefs);
    Ok(())
}

/// `b2prefs move`
pub fn move_volume(ctx: &Context, from: usize, to: usize) -> Result<()> {
    let prefs = ctx.edit(|session| {
        check_index(session, from)?;
        check_index(session, to)?;
        session.dispatch(EditorMsg::Volumes(VolumeEvent::Reorder { from, to }));
        Ok(())
    })?;
    print_saved_volumes(ctx, &prefs);
    Ok(())
}

/// `b2prefs drop`
pub fn drop_uris(ctx: &Context, uris: Vec<String>, row: Option<usize>, after: bool) -> Result<()> {
    let target = row.map(|row| DropTarget {
        row,
        position: if after { DropPosition::After } else { DropPosition::Before },
    });
    apply(
        ctx,
        vec![VolumeEvent::DropUriList {
            payload: uris.join("\r\n"),
            target,
        }],
    )
}

/// `b2prefs create`
pub fn create(ctx: &Context, path: String, size_mib: Option<u32>) -> Result<()> {
    let size_mib = size_mib.unwrap_or(ctx.settings.volumes.default_hardfile_mib);

    ctx.edit(|session| {
        if session.volumes().contains(&path) {
            bail!("{} is already in the volume list", path);
        }
        session.dispatch(EditorMsg::Volumes(VolumeEvent::CreateHardfile {
            path: path.clone(),
            size_mib,
        }));
        if !session.volumes().contains(&path) {
            bail!("Failed to create {}", path);
        }
        Ok(())
    })?;

    println!("Created {} ({} MiB)", path, size_mib);
    Ok(())
}

/// `b2prefs cdrom`
pub fn cdrom(ctx: &Context, device: String) -> Result<()> {
    apply(
        ctx,
        vec![
            VolumeEvent::SetCdromHint(device),
            VolumeEvent::AddCdromFromHint,
        ],
    )
}

/// `b2prefs boot`
pub fn boot(ctx: &Context, preference: BootPreference) -> Result<()> {
    ctx.edit(|session| {
        session.dispatch(EditorMsg::Volumes(VolumeEvent::SetBoot(preference)));
        Ok(())
    })?;
    println!("Boot driver set to {}", preference.to_pref());
    Ok(())
}

/// Print the list as it will be read back from the saved file.
fn print_saved_volumes(ctx: &Context, prefs: &PrefsStore) {
    let manager = VolumeManager::from_prefs(prefs, ctx.settings.volume_options());
    print_volumes(manager.list());
}

#[cfg(test)]
mod tests {
    use super::super::tests::context;
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn add_respects_forced_kind() {
        let dir = tempdir().unwrap();
        let ctx = context(&dir, "");

        add(&ctx, vec!["/vol/a.iso".to_string()], false, true).unwrap();
        add(&ctx, vec!["/vol/b.img".to_string(), "/vol/c.iso".to_string()], false, false).unwrap();

        let content = fs::read_to_string(&ctx.prefs_path).unwrap();
        assert!(content.contains("disk /vol/a.iso\n"));
        assert!(content.contains("disk /vol/b.img\n"));
        assert!(content.contains("cdrom /vol/c.iso\n"));
    }

    #[test]
    fn remove_rejects_bad_index() {
        let dir = tempdir().unwrap();
        let ctx = context(&dir, "disk /vol/a.dsk\n");

        assert!(remove(&ctx, 1).is_err());
        remove(&ctx, 0).unwrap();

        let prefs = ctx.load_prefs().unwrap();
        assert_eq!(prefs.count("disk"), 0);
    }

    #[test]
    fn drop_places_file_before_row() {
        let dir = tempdir().unwrap();
        let ctx = context(&dir, "disk /vol/a.dsk\ndisk /vol/b.dsk\n");

        drop_uris(&ctx, vec!["file:///vol/new%20disk.img".to_string()], Some(0), false).unwrap();

        let prefs = ctx.load_prefs().unwrap();
        let disks: Vec<_> = prefs.strings("disk").collect();
        assert_eq!(disks, vec!["/vol/new disk.img", "/vol/a.dsk", "/vol/b.dsk"]);
    }

    #[test]
    fn create_writes_image() {
        let dir = tempdir().unwrap();
        let ctx = context(&dir, "");
        let image = dir.path().join("hd.dsk").to_string_lossy().to_string();

        create(&ctx, image.clone(), Some(1)).unwrap();
        assert_eq!(fs::metadata(&image).unwrap().len(), 1 << 20);
        assert!(create(&ctx, image, Some(1)).is_err());
    }

    #[test]
    fn boot_from_cdrom() {
        let dir = tempdir().unwrap();
        let ctx = context(&dir, "");

        boot(&ctx, BootPreference::CdromFirst).unwrap();
        assert_eq!(ctx.load_prefs().unwrap().find_int32("bootdriver"), -62);
    }
}
