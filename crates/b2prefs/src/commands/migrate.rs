//! `b2prefs migrate`

use anyhow::{Context as _, Result};

use b2prefs_core::prefs::PrefsStore;

use super::Context;

/// Convert legacy ethernet keys in place and save if anything changed.
pub fn migrate(ctx: &Context) -> Result<()> {
    let path = &ctx.prefs_path;
    let mut prefs =
        PrefsStore::load_file(path).with_context(|| format!("Failed to read {}", path.display()))?;

    if !b2prefs_core::migrate::migrate(&mut prefs) {
        println!("Nothing to migrate");
        return Ok(());
    }

    prefs
        .save_file(path)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    println!(
        "Migrated {}: ether = {}",
        path.display(),
        prefs.find_string("ether", 0).unwrap_or("-")
    );
    Ok(())
}
