//! Editor session.
//!
//! One session lives from the moment the preferences dialog opens until the
//! user presses Start or Quit. It owns the preferences store and the state of
//! every pane; a view only talks to it through [`EditorMsg`].

mod messages;

pub use messages::{EditorMsg, SessionOutcome};

use std::path::PathBuf;

use crate::panes::{
    EthernetPane, GraphicsPane, InputPane, JitPane, MemoryPane, PrefsPane, ScsiPane, SerialPane,
};
use crate::prefs::PrefsStore;
use crate::volumes::{VolumeManager, VolumeOptions};

/// State of an open preferences editor.
#[derive(Debug)]
pub struct EditorSession {
    prefs: PrefsStore,
    volumes: VolumeManager,
    scsi: ScsiPane,
    graphics: GraphicsPane,
    input: InputPane,
    serial: SerialPane,
    ethernet: EthernetPane,
    memory: MemoryPane,
    jit: JitPane,
    xpram_file: Option<PathBuf>,
    outcome: Option<SessionOutcome>,
}

impl EditorSession {
    /// Open a session on an already migrated store.
    pub fn new(prefs: PrefsStore, options: VolumeOptions) -> Self {
        let session = Self {
            volumes: VolumeManager::from_prefs(&prefs, options),
            scsi: ScsiPane::from_prefs(&prefs),
            graphics: GraphicsPane::from_prefs(&prefs),
            input: InputPane::from_prefs(&prefs),
            serial: SerialPane::from_prefs(&prefs),
            ethernet: EthernetPane::from_prefs(&prefs),
            memory: MemoryPane::from_prefs(&prefs),
            jit: JitPane::from_prefs(&prefs),
            prefs,
            xpram_file: None,
            outcome: None,
        };
        tracing::debug!("Editor session opened with {} volumes", session.volumes.list().len());
        session
    }

    /// Set the parameter RAM file that `ZapPram` deletes.
    pub fn with_xpram_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.xpram_file = Some(path.into());
        self
    }

    /// The store as last written back.
    pub fn prefs(&self) -> &PrefsStore {
        &self.prefs
    }

    pub fn volumes(&self) -> &VolumeManager {
        &self.volumes
    }

    pub fn scsi(&self) -> &ScsiPane {
        &self.scsi
    }

    pub fn graphics(&self) -> &GraphicsPane {
        &self.graphics
    }

    pub fn input(&self) -> &InputPane {
        &self.input
    }

    pub fn serial(&self) -> &SerialPane {
        &self.serial
    }

    pub fn ethernet(&self) -> &EthernetPane {
        &self.ethernet
    }

    pub fn memory(&self) -> &MemoryPane {
        &self.memory
    }

    pub fn jit(&self) -> &JitPane {
        &self.jit
    }

    /// How the session ended, if it has.
    pub fn outcome(&self) -> Option<SessionOutcome> {
        self.outcome
    }

    pub fn is_finished(&self) -> bool {
        self.outcome.is_some()
    }

    /// Apply one message.
    ///
    /// Returns the outcome once `Start` or `Quit` has been handled. Messages
    /// arriving after that are ignored.
    pub fn dispatch(&mut self, msg: EditorMsg) -> Option<SessionOutcome> {
        if let Some(outcome) = self.outcome {
            tracing::debug!("Session already closed, ignoring {:?}", msg);
            return Some(outcome);
        }

        match msg {
            EditorMsg::Volumes(event) => self.volumes.dispatch(event),
            EditorMsg::Scsi(m) => self.scsi.update(m),
            EditorMsg::Graphics(m) => self.graphics.update(m),
            EditorMsg::Input(m) => self.input.update(m),
            EditorMsg::Serial(m) => self.serial.update(m),
            EditorMsg::Ethernet(m) => self.ethernet.update(m),
            EditorMsg::Memory(m) => self.memory.update(m),
            EditorMsg::Jit(m) => self.jit.update(m),
            EditorMsg::ZapPram => self.zap_pram(),
            EditorMsg::Start => {
                self.write_back();
                self.outcome = Some(SessionOutcome::StartRequested);
            }
            EditorMsg::Quit => {
                tracing::info!("Editor closed without saving");
                self.outcome = Some(SessionOutcome::Cancelled);
            }
        }

        self.outcome
    }

    /// Close the session and hand back the store.
    ///
    /// The store only contains edits if the session ended with `Start`.
    pub fn commit(self) -> PrefsStore {
        self.prefs
    }

    fn zap_pram(&self) {
        let Some(path) = &self.xpram_file else {
            tracing::warn!("No XPRAM file configured, nothing to zap");
            return;
        };
        if let Err(e) = crate::xpram::zap_pram(path) {
            tracing::warn!("Failed to delete {}: {}", path.display(), e);
        }
    }

    fn write_back(&mut self) {
        let prefs = &mut self.prefs;
        self.volumes.save(prefs);
        save_pane(&self.scsi, prefs);
        save_pane(&self.graphics, prefs);
        save_pane(&self.input, prefs);
        save_pane(&self.serial, prefs);
        save_pane(&self.ethernet, prefs);
        save_pane(&self.memory, prefs);
        save_pane(&self.jit, prefs);
        tracing::info!("Preferences written back ({} items)", prefs.len());
    }
}

fn save_pane<P: PrefsPane>(pane: &P, prefs: &mut PrefsStore) {
    tracing::debug!("Saving {} pane", pane.name());
    pane.save(prefs);
}
