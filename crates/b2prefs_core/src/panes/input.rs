//! Input pane.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::prefs::PrefsStore;

use super::{replace_or_remove, PrefsPane};

/// Accepted values for `mousewheellines`.
pub const WHEEL_LINES_RANGE: RangeInclusive<i32> = 1..=1000;

/// What the mouse wheel sends to the Mac.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WheelMode {
    /// Page up/down.
    Page,
    /// Cursor up/down, `mousewheellines` times per notch.
    #[default]
    Cursor,
}

impl WheelMode {
    pub fn from_pref(value: i32) -> Self {
        match value {
            0 => Self::Page,
            _ => Self::Cursor,
        }
    }

    pub fn to_pref(self) -> i32 {
        match self {
            Self::Page => 0,
            Self::Cursor => 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputPane {
    pub keycodes: bool,
    pub keycode_file: String,
    pub reserve_windows_key: bool,
    pub wheel_mode: WheelMode,
    pub wheel_lines: i32,
}

impl Default for InputPane {
    fn default() -> Self {
        Self {
            keycodes: false,
            keycode_file: String::new(),
            reserve_windows_key: false,
            wheel_mode: WheelMode::Cursor,
            wheel_lines: 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMsg {
    SetKeycodes(bool),
    SetKeycodeFile(String),
    SetReserveWindowsKey(bool),
    SetWheelMode(WheelMode),
    SetWheelLines(i32),
}

fn clamp_lines(lines: i32) -> i32 {
    lines.clamp(*WHEEL_LINES_RANGE.start(), *WHEEL_LINES_RANGE.end())
}

impl InputPane {
    /// Keycode file entry state.
    pub fn keycode_file_editable(&self) -> bool {
        self.keycodes
    }

    /// Wheel lines spinner state.
    pub fn wheel_lines_editable(&self) -> bool {
        self.wheel_mode == WheelMode::Cursor
    }
}

impl PrefsPane for InputPane {
    type Msg = InputMsg;

    fn name(&self) -> &'static str {
        "Input"
    }

    fn load(&mut self, prefs: &PrefsStore) {
        self.keycodes = prefs.find_bool("keycodes");
        self.keycode_file = prefs.find_string("keycodefile", 0).unwrap_or_default().to_string();
        self.reserve_windows_key = prefs.find_bool("reservewindowskey");
        self.wheel_mode = WheelMode::from_pref(prefs.find_int32("mousewheelmode"));
        self.wheel_lines = clamp_lines(prefs.find_int32("mousewheellines"));
    }

    fn save(&self, prefs: &mut PrefsStore) {
        prefs.replace_bool("keycodes", self.keycodes);
        replace_or_remove(prefs, "keycodefile", &self.keycode_file);
        prefs.replace_bool("reservewindowskey", self.reserve_windows_key);
        prefs.replace_int32("mousewheelmode", self.wheel_mode.to_pref());
        prefs.replace_int32("mousewheellines", self.wheel_lines);
    }

    fn update(&mut self, msg: InputMsg) {
        match msg {
            InputMsg::SetKeycodes(v) => self.keycodes = v,
            InputMsg::SetKeycodeFile(path) => self.keycode_file = path,
            InputMsg::SetReserveWindowsKey(v) => self.reserve_windows_key = v,
            InputMsg::SetWheelMode(mode) => self.wheel_mode = mode,
            InputMsg::SetWheelLines(lines) => self.wheel_lines = clamp_lines(lines),
        }
    }
}
