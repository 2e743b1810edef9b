//! b2prefs core - backend logic for the Basilisk II preferences editor
//!
//! This crate contains the preferences store, the volume list and the
//! per-pane settings with zero UI dependencies. A view layer (or the bundled
//! CLI) drives an [`session::EditorSession`] through explicit messages.

pub mod config;
pub mod logging;
pub mod migrate;
pub mod panes;
pub mod prefs;
pub mod session;
pub mod volumes;
pub mod xpram;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_returns_value() {
        assert!(!version().is_empty());
    }
}
