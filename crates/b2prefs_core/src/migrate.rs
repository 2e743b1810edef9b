//! One-shot upgrade of legacy preference entries.
//!
//! Older front-ends stored the packet driver adapter GUID directly in
//! `ether` and used a separate `routerenabled` switch. Both are folded into
//! the current `ether` / `etherguid` pair. Running the upgrade again is a
//! no-op.

use crate::prefs::PrefsStore;

/// Upgrade legacy ethernet entries in place.
///
/// Returns true if the store was modified.
pub fn migrate(prefs: &mut PrefsStore) -> bool {
    let mut changed = false;

    let legacy_guid = prefs
        .find_string("ether", 0)
        .filter(|ether| ether.starts_with('{'))
        .map(str::to_owned);
    if let Some(guid) = legacy_guid {
        tracing::info!("Migrating legacy ethernet GUID {} to etherguid", guid);
        prefs.replace_string("etherguid", &guid);
        prefs.replace_string("ether", "b2ether");
        changed = true;
    }

    if prefs.find_bool("routerenabled") {
        if prefs.remove_item("etherguid") {
            changed = true;
        }
        if prefs.find_string("ether", 0) != Some("router") {
            tracing::info!("Migrating routerenabled to ether=router");
            prefs.replace_string("ether", "router");
            changed = true;
        }
    }

    changed
}
