//! Read-only commands.

use anyhow::Result;

use super::{print_volumes, Context};

/// `b2prefs list`
pub fn list(ctx: &Context, json: bool) -> Result<()> {
    let session = ctx.open_session()?;
    let list = session.volumes().list();

    if json {
        println!("{}", serde_json::to_string_pretty(list.entries())?);
    } else {
        print_volumes(list);
    }
    Ok(())
}

/// `b2prefs show`
pub fn show(ctx: &Context, json: bool) -> Result<()> {
    let prefs = ctx.load_prefs()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&prefs)?);
    } else {
        print!("{}", prefs.to_prefs_string());
    }
    Ok(())
}
