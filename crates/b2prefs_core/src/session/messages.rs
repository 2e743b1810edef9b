//! Messages accepted by the editor session.

use crate::panes::{EthernetMsg, GraphicsMsg, InputMsg, JitMsg, MemoryMsg, ScsiMsg, SerialMsg};
use crate::volumes::VolumeEvent;

/// Everything a view can send to the editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorMsg {
    Volumes(VolumeEvent),
    Scsi(ScsiMsg),
    Graphics(GraphicsMsg),
    Input(InputMsg),
    Serial(SerialMsg),
    Ethernet(EthernetMsg),
    Memory(MemoryMsg),
    Jit(JitMsg),
    /// "Zap PRAM" button: delete the parameter RAM file right away.
    ZapPram,
    /// "Start" button: write every pane back and close.
    Start,
    /// "Quit" button or window close: discard changes.
    Quit,
}

impl From<VolumeEvent> for EditorMsg {
    fn from(event: VolumeEvent) -> Self {
        Self::Volumes(event)
    }
}

/// How the editor was closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The user asked to start the emulator; preferences were written back.
    StartRequested,
    /// The user quit; preferences are untouched.
    Cancelled,
}

impl SessionOutcome {
    pub fn start_requested(self) -> bool {
        self == Self::StartRequested
    }
}

impl From<SessionOutcome> for bool {
    fn from(outcome: SessionOutcome) -> Self {
        outcome.start_requested()
    }
}
