//! Settings panes other than volumes.
//!
//! Every pane is a plain struct holding the values its controls show. The
//! editor session loads each pane from the preferences when the dialog
//! opens and writes them back, in a fixed order, when the user starts the
//! emulator.

mod ethernet;
mod graphics;
mod input;
mod jit;
mod memory;
mod scsi;
mod serial;

pub use ethernet::{EthernetMode, EthernetMsg, EthernetPane};
pub use graphics::{DisplayType, GraphicsMsg, GraphicsPane, RenderDriver, FRAMESKIP_OPTIONS};
pub use input::{InputMsg, InputPane, WheelMode, WHEEL_LINES_RANGE};
pub use jit::{JitMsg, JitPane, JIT_CACHE_SIZES_KIB};
pub use memory::{CpuChoice, MemoryMsg, MemoryPane, ModelId, RAM_SIZES_MIB};
pub use scsi::{ScsiMsg, ScsiPane, SCSI_TARGETS};
pub use serial::{SerialMsg, SerialPane, SerialPort, SERIAL_PORT_NAMES};

use crate::prefs::PrefsStore;

/// Trait for preference panes.
///
/// The session drives every pane through the same three calls:
///
/// 1. `load` - copy the relevant keys out of the store when the dialog opens
/// 2. `update` - apply one message from the view
/// 3. `save` - write the pane's values back when the emulator is started
///
/// `load` never fails: missing or mistyped keys leave the pane on its
/// built-in defaults.
pub trait PrefsPane {
    /// Messages the view sends to this pane.
    type Msg;

    /// Pane name (for logging).
    fn name(&self) -> &'static str;

    /// Load values from the preferences.
    fn load(&mut self, prefs: &PrefsStore);

    /// Write values back to the preferences.
    fn save(&self, prefs: &mut PrefsStore);

    /// Apply a message from the view.
    fn update(&mut self, msg: Self::Msg);

    /// Create the pane already loaded from the preferences.
    fn from_prefs(prefs: &PrefsStore) -> Self
    where
        Self: Default,
    {
        let mut pane = Self::default();
        pane.load(prefs);
        pane
    }
}

/// Write a string, removing the key when the value is empty.
pub(crate) fn replace_or_remove(prefs: &mut PrefsStore, key: &str, value: &str) {
    if value.is_empty() {
        prefs.remove_item(key);
    } else {
        prefs.replace_string(key, value);
    }
}
