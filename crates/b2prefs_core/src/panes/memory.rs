//! Memory/Misc pane.

use serde::{Deserialize, Serialize};

use crate::prefs::PrefsStore;

use super::{replace_or_remove, PrefsPane};

/// RAM sizes offered in the combobox, in MiB. Other sizes may be typed.
pub const RAM_SIZES_MIB: [i32; 10] = [2, 4, 8, 16, 32, 64, 128, 256, 512, 1024];

/// Largest RAM size that still fits the `ramsize` byte count.
const MAX_RAM_MIB: i32 = i32::MAX >> 20;

/// Mac model reported to the ROM.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModelId {
    /// Mac IIci (MacOS 7.x).
    MacIIci,
    /// Quadra 900 (MacOS 8.x).
    Quadra900,
}

impl ModelId {
    pub fn from_pref(value: i32) -> Option<Self> {
        match value {
            5 => Some(Self::MacIIci),
            14 => Some(Self::Quadra900),
            _ => None,
        }
    }

    pub fn to_pref(self) -> i32 {
        match self {
            Self::MacIIci => 5,
            Self::Quadra900 => 14,
        }
    }
}

/// CPU and FPU combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CpuChoice {
    M68020,
    M68020Fpu,
    M68030,
    M68030Fpu,
    M68040,
}

impl CpuChoice {
    pub fn from_pref(cpu: i32, fpu: bool) -> Option<Self> {
        match (cpu, fpu) {
            (2, false) => Some(Self::M68020),
            (2, true) => Some(Self::M68020Fpu),
            (3, false) => Some(Self::M68030),
            (3, true) => Some(Self::M68030Fpu),
            (4, _) => Some(Self::M68040),
            _ => None,
        }
    }

    /// `cpu` and `fpu` values.
    pub fn to_pref(self) -> (i32, bool) {
        match self {
            Self::M68020 => (2, false),
            Self::M68020Fpu => (2, true),
            Self::M68030 => (3, false),
            Self::M68030Fpu => (3, true),
            Self::M68040 => (4, true),
        }
    }
}

/// Memory and miscellaneous settings.
///
/// `model` and `cpu` are `None` when the stored values match no menu entry;
/// those keys are then left alone on save.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryPane {
    pub ram_mib: i32,
    pub model: Option<ModelId>,
    pub cpu: Option<CpuChoice>,
    pub rom_file: String,
    pub idle_wait: bool,
    pub ignore_segv: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemoryMsg {
    SetRamMib(i32),
    SetModel(ModelId),
    SetCpu(CpuChoice),
    SetRomFile(String),
    SetIdleWait(bool),
    SetIgnoreSegv(bool),
}

impl PrefsPane for MemoryPane {
    type Msg = MemoryMsg;

    fn name(&self) -> &'static str {
        "Memory/Misc"
    }

    fn load(&mut self, prefs: &PrefsStore) {
        self.ram_mib = prefs.find_int32("ramsize") >> 20;
        self.model = ModelId::from_pref(prefs.find_int32("modelid"));
        self.cpu = CpuChoice::from_pref(prefs.find_int32("cpu"), prefs.find_bool("fpu"));
        self.rom_file = prefs.find_string("rom", 0).unwrap_or_default().to_string();
        self.idle_wait = prefs.find_bool("idlewait");
        self.ignore_segv = prefs.find_bool("ignoresegv");
    }

    fn save(&self, prefs: &mut PrefsStore) {
        prefs.replace_int32("ramsize", self.ram_mib.clamp(0, MAX_RAM_MIB) << 20);
        if let Some(model) = self.model {
            prefs.replace_int32("modelid", model.to_pref());
        }
        if let Some(cpu) = self.cpu {
            let (cpu, fpu) = cpu.to_pref();
            prefs.replace_int32("cpu", cpu);
            prefs.replace_bool("fpu", fpu);
        }
        replace_or_remove(prefs, "rom", &self.rom_file);
        prefs.replace_bool("idlewait", self.idle_wait);
        prefs.replace_bool("ignoresegv", self.ignore_segv);
    }

    fn update(&mut self, msg: MemoryMsg) {
        match msg {
            MemoryMsg::SetRamMib(mib) => self.ram_mib = mib,
            MemoryMsg::SetModel(model) => self.model = Some(model),
            MemoryMsg::SetCpu(cpu) => self.cpu = Some(cpu),
            MemoryMsg::SetRomFile(path) => self.rom_file = path,
            MemoryMsg::SetIdleWait(v) => self.idle_wait = v,
            MemoryMsg::SetIgnoreSegv(v) => self.ignore_segv = v,
        }
    }
}
