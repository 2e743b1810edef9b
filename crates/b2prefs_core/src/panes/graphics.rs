//! Graphics/Sound pane.

use serde::{Deserialize, Serialize};

use crate::prefs::PrefsStore;

use super::PrefsPane;

/// Refresh rate choices and their `frameskip` values.
pub const FRAMESKIP_OPTIONS: [(&str, i32); 7] = [
    ("5 Hz", 12),
    ("7.5 Hz", 8),
    ("10 Hz", 6),
    ("15 Hz", 4),
    ("30 Hz", 2),
    ("60 Hz", 1),
    ("Dynamic", 0),
];

const DEFAULT_WIDTH: i32 = 512;
const DEFAULT_HEIGHT: i32 = 384;

/// Window or fullscreen video.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayType {
    #[default]
    Window,
    Fullscreen,
}

impl DisplayType {
    /// Prefix used in the `screen` value.
    fn prefix(self) -> &'static str {
        match self {
            Self::Window => "win",
            Self::Fullscreen => "dga",
        }
    }
}

/// SDL render driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderDriver {
    #[default]
    Software,
    OpenGl,
    Direct3d,
}

impl RenderDriver {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Software => "software",
            Self::OpenGl => "opengl",
            Self::Direct3d => "direct3d",
        }
    }

    /// Parse a `sdlrender` value; anything unknown is software.
    pub fn from_pref(value: &str) -> Self {
        match value {
            "opengl" => Self::OpenGl,
            "direct3d" => Self::Direct3d,
            _ => Self::Software,
        }
    }
}

/// Graphics and sound settings.
///
/// A width or height of 0 means the largest the host allows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphicsPane {
    pub display_type: DisplayType,
    pub width: i32,
    pub height: i32,
    pub frameskip: i32,
    pub nosound: bool,
    pub render_driver: RenderDriver,
    pub vsync: bool,
}

impl Default for GraphicsPane {
    fn default() -> Self {
        Self {
            display_type: DisplayType::Window,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            frameskip: 6,
            nosound: false,
            render_driver: RenderDriver::Software,
            vsync: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphicsMsg {
    SetDisplayType(DisplayType),
    SetWidth(i32),
    SetHeight(i32),
    SetFrameskip(i32),
    SetNoSound(bool),
    SetRenderDriver(RenderDriver),
    SetVsync(bool),
}

/// Parse `win/W/H` or `dga/W/H`.
fn parse_screen(value: &str) -> Option<(DisplayType, i32, i32)> {
    let mut parts = value.splitn(3, '/');
    let display_type = match parts.next()? {
        "win" => DisplayType::Window,
        "dga" => DisplayType::Fullscreen,
        _ => return None,
    };
    let width = parts.next()?.trim().parse().ok()?;
    let height = parts.next()?.trim().parse().ok()?;
    Some((display_type, width, height))
}

impl GraphicsPane {
    /// Label of the current refresh rate, if it is one of the menu choices.
    pub fn refresh_label(&self) -> Option<&'static str> {
        FRAMESKIP_OPTIONS
            .iter()
            .find(|(_, value)| *value == self.frameskip)
            .map(|(label, _)| *label)
    }

    /// The `screen` value this pane writes.
    pub fn screen_pref(&self) -> String {
        format!("{}/{}/{}", self.display_type.prefix(), self.width, self.height)
    }
}

impl PrefsPane for GraphicsPane {
    type Msg = GraphicsMsg;

    fn name(&self) -> &'static str {
        "Graphics/Sound"
    }

    fn load(&mut self, prefs: &PrefsStore) {
        *self = Self::default();

        if let Some(screen) = prefs.find_string("screen", 0) {
            match parse_screen(screen) {
                Some((display_type, width, height)) => {
                    self.display_type = display_type;
                    self.width = width;
                    self.height = height;
                }
                None => tracing::warn!("Unrecognized screen mode {:?}", screen),
            }
        }

        // Values outside the menu are kept as they are
        self.frameskip = prefs.find_int32("frameskip");
        self.nosound = prefs.find_bool("nosound");
        if let Some(driver) = prefs.find_string("sdlrender", 0) {
            self.render_driver = RenderDriver::from_pref(driver);
        }
        self.vsync = prefs.find_bool("sdl_vsync");
    }

    fn save(&self, prefs: &mut PrefsStore) {
        prefs.replace_string("screen", &self.screen_pref());
        prefs.replace_int32("frameskip", self.frameskip);
        prefs.replace_bool("nosound", self.nosound);
        prefs.replace_string("sdlrender", self.render_driver.as_str());
        prefs.replace_bool("sdl_vsync", self.vsync);
    }

    fn update(&mut self, msg: GraphicsMsg) {
        match msg {
            GraphicsMsg::SetDisplayType(t) => self.display_type = t,
            GraphicsMsg::SetWidth(w) => self.width = w,
            GraphicsMsg::SetHeight(h) => self.height = h,
            GraphicsMsg::SetFrameskip(f) => self.frameskip = f,
            GraphicsMsg::SetNoSound(v) => self.nosound = v,
            GraphicsMsg::SetRenderDriver(d) => self.render_driver = d,
            GraphicsMsg::SetVsync(v) => self.vsync = v,
        }
    }
}
