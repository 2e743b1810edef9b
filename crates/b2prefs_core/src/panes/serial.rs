//! Serial/Network pane, serial half.

use crate::prefs::PrefsStore;

use super::PrefsPane;

/// Port names offered in the combobox. Any other text is accepted too.
pub const SERIAL_PORT_NAMES: [&str; 13] = [
    "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "FILE",
];

/// Port name that redirects output to a file.
const FILE_PORT: &str = "FILE";

/// One Mac serial port and its output file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SerialPort {
    pub device: String,
    pub port_file: String,
}

impl SerialPort {
    /// Port file entry state.
    pub fn port_file_editable(&self) -> bool {
        self.device == FILE_PORT
    }
}

/// Mac serial ports A (modem) and B (printer).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SerialPane {
    pub port_a: SerialPort,
    pub port_b: SerialPort,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SerialMsg {
    SetPortA(String),
    SetPortB(String),
    SetPortFileA(String),
    SetPortFileB(String),
}

impl PrefsPane for SerialPane {
    type Msg = SerialMsg;

    fn name(&self) -> &'static str {
        "Serial"
    }

    fn load(&mut self, prefs: &PrefsStore) {
        let text = |key| prefs.find_string(key, 0).unwrap_or_default().to_string();
        self.port_a = SerialPort {
            device: text("seriala"),
            port_file: text("portfile0"),
        };
        self.port_b = SerialPort {
            device: text("serialb"),
            port_file: text("portfile1"),
        };
    }

    // All four keys are always written, empty or not
    fn save(&self, prefs: &mut PrefsStore) {
        prefs.replace_string("seriala", &self.port_a.device);
        prefs.replace_string("serialb", &self.port_b.device);
        prefs.replace_string("portfile0", &self.port_a.port_file);
        prefs.replace_string("portfile1", &self.port_b.port_file);
    }

    fn update(&mut self, msg: SerialMsg) {
        match msg {
            SerialMsg::SetPortA(device) => self.port_a.device = device,
            SerialMsg::SetPortB(device) => self.port_b.device = device,
            SerialMsg::SetPortFileA(path) => self.port_a.port_file = path,
            SerialMsg::SetPortFileB(path) => self.port_b.port_file = path,
        }
    }
}
