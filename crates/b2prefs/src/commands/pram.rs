//! `b2prefs zap-pram`

use anyhow::{Context as _, Result};

use b2prefs_core::xpram;

use super::Context;

/// Delete the parameter RAM file.
pub fn zap_pram(ctx: &Context) -> Result<()> {
    let path = &ctx.xpram_path;
    let deleted =
        xpram::zap_pram(path).with_context(|| format!("Failed to delete {}", path.display()))?;

    if deleted {
        println!("Deleted {}", path.display());
    } else {
        println!("No XPRAM file at {}", path.display());
    }
    Ok(())
}
