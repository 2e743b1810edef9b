//! Command implementations.
//!
//! Every mutating command opens an editor session on the preferences file,
//! sends its messages, presses Start and saves the result.

mod list;
mod migrate;
mod pram;
mod volumes;

pub use list::{list, show};
pub use migrate::migrate;
pub use pram::zap_pram;
pub use volumes::{add, boot, cdrom, create, drop_uris, move_volume, remove, toggle};

use std::path::PathBuf;

use anyhow::{bail, Context as _, Result};

use b2prefs_core::config::Settings;
use b2prefs_core::prefs::PrefsStore;
use b2prefs_core::session::{EditorMsg, EditorSession, SessionOutcome};
use b2prefs_core::volumes::VolumeList;

/// What every command needs.
pub struct Context {
    pub prefs_path: PathBuf,
    pub xpram_path: PathBuf,
    pub settings: Settings,
}

impl Context {
    /// Read the preferences file and bring legacy keys up to date.
    pub fn load_prefs(&self) -> Result<PrefsStore> {
        let mut prefs = PrefsStore::load_file(&self.prefs_path)
            .with_context(|| format!("Failed to read {}", self.prefs_path.display()))?;
        if b2prefs_core::migrate::migrate(&mut prefs) {
            tracing::info!("Converted legacy ethernet settings");
        }
        Ok(prefs)
    }

    pub fn open_session(&self) -> Result<EditorSession> {
        Ok(EditorSession::new(self.load_prefs()?, self.settings.volume_options()).with_xpram_file(&self.xpram_path))
    }

    /// Run `edit` on a fresh session, then press Start and save.
    pub fn edit<F>(&self, edit: F) -> Result<PrefsStore>
    where
        F: FnOnce(&mut EditorSession) -> Result<()>,
    {
        let mut session = self.open_session()?;
        edit(&mut session)?;

        if session.dispatch(EditorMsg::Start) != Some(SessionOutcome::StartRequested) {
            bail!("Editor session did not accept Start");
        }

        let prefs = session.commit();
        prefs
            .save_file(&self.prefs_path)
            .with_context(|| format!("Failed to write {}", self.prefs_path.display()))?;
        tracing::info!("Saved {}", self.prefs_path.display());
        Ok(prefs)
    }
}

/// Print the volume list as a table.
fn print_volumes(list: &VolumeList) {
    if list.is_empty() {
        println!("No volumes");
        return;
    }

    println!("{:>3}  {:<5}  {:>10}  PATH", "#", "TYPE", "SIZE");
    for (index, entry) in list.iter().enumerate() {
        println!(
            "{:>3}  {:<5}  {:>10}  {}",
            index,
            entry.kind.to_string(),
            entry.size_label,
            entry.path
        );
    }
}

/// Fail with a readable message when `index` is not a row.
fn check_index(session: &EditorSession, index: usize) -> Result<()> {
    let len = session.volumes().list().len();
    if index >= len {
        bail!("No volume at index {} ({} listed)", index, len);
    }
    Ok(())
}
