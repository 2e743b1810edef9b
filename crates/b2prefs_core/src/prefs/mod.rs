//! Preferences store for the emulator.
//!
//! This module provides:
//! - `PrefsStore`: ordered multimap of string keys to typed values
//! - The table of known preference items (type and repeatability)
//! - Loading and saving the plain-text preferences file
//!
//! # Example
//!
//! ```no_run
//! use b2prefs_core::prefs::PrefsStore;
//!
//! let mut prefs = PrefsStore::load_file("/home/me/.basilisk_ii_prefs").unwrap();
//! prefs.add_string("disk", "/images/system7.dsk");
//! prefs.replace_int32("ramsize", 32 << 20);
//! prefs.save_file("/home/me/.basilisk_ii_prefs").unwrap();
//! ```

mod file;
mod items;
mod store;

pub use file::{PrefsError, PrefsResult};
pub use items::{find_item, PrefType, PrefsItemDesc, PREFS_ITEMS};
pub use store::{PrefItem, PrefValue, PrefsStore};
