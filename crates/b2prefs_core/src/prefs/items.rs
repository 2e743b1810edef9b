//! Known preference items and stock defaults.

use super::store::PrefsStore;

/// Value type of a preference item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefType {
    String,
    Int32,
    Bool,
}

/// Description of a known preference item.
#[derive(Debug, Clone, Copy)]
pub struct PrefsItemDesc {
    /// Keyword used in the preferences file.
    pub name: &'static str,
    /// Value type.
    pub kind: PrefType,
    /// Whether the key may appear more than once.
    pub multiple: bool,
    /// Short description.
    pub help: &'static str,
}

const fn item(name: &'static str, kind: PrefType, multiple: bool, help: &'static str) -> PrefsItemDesc {
    PrefsItemDesc {
        name,
        kind,
        multiple,
        help,
    }
}

/// Every preference item the editor reads or writes.
pub const PREFS_ITEMS: &[PrefsItemDesc] = &[
    // Volumes
    item("disk", PrefType::String, true, "device/file name of Mac volume"),
    item("cdrom", PrefType::String, true, "device/file name of Mac CD-ROM drive"),
    item("extdrives", PrefType::String, false, "list of allowed drive letters for the external file system"),
    item("enableextfs", PrefType::Bool, false, "enable the external file system"),
    item("nocdrom", PrefType::Bool, false, "don't install CD-ROM driver"),
    item("pollmedia", PrefType::Bool, false, "poll for removable media"),
    item("bootdrive", PrefType::Int32, false, "boot drive number"),
    item("bootdriver", PrefType::Int32, false, "boot driver number"),
    // SCSI
    item("scsi0", PrefType::String, false, "SCSI target for ID 0"),
    item("scsi1", PrefType::String, false, "SCSI target for ID 1"),
    item("scsi2", PrefType::String, false, "SCSI target for ID 2"),
    item("scsi3", PrefType::String, false, "SCSI target for ID 3"),
    item("scsi4", PrefType::String, false, "SCSI target for ID 4"),
    item("scsi5", PrefType::String, false, "SCSI target for ID 5"),
    item("scsi6", PrefType::String, false, "SCSI target for ID 6"),
    // Graphics/sound
    item("screen", PrefType::String, false, "video mode"),
    item("windowmodes", PrefType::Int32, true, "windowed video modes"),
    item("screenmodes", PrefType::Int32, true, "fullscreen video modes"),
    item("frameskip", PrefType::Int32, false, "frames to skip in refreshed video modes"),
    item("sdlrender", PrefType::String, false, "SDL render driver"),
    item("sdl_vsync", PrefType::Bool, false, "synchronize SDL rendering to vertical blank"),
    item("nosound", PrefType::Bool, false, "don't enable sound output"),
    // Input
    item("keycodes", PrefType::Bool, false, "use raw keycode translation"),
    item("keycodefile", PrefType::String, false, "path of keycode translation file"),
    item("reservewindowskey", PrefType::Bool, false, "block the Windows key"),
    item("mousewheelmode", PrefType::Int32, false, "mouse wheel support mode (0=page up/down, 1=cursor up/down)"),
    item("mousewheellines", PrefType::Int32, false, "number of lines to scroll in mouse wheel mode 1"),
    // Serial
    item("seriala", PrefType::String, false, "device name of Mac serial port A"),
    item("serialb", PrefType::String, false, "device name of Mac serial port B"),
    item("portfile0", PrefType::String, false, "file for port A output"),
    item("portfile1", PrefType::String, false, "file for port B output"),
    // Ethernet
    item("ether", PrefType::String, false, "device name of host Ethernet interface"),
    item("etherguid", PrefType::String, false, "GUID of host Ethernet adapter"),
    item("routerenabled", PrefType::Bool, false, "legacy router switch"),
    item("ftp_port_list", PrefType::String, false, "FTP ports forwarded by the router"),
    item("tcp_port", PrefType::String, false, "TCP ports forwarded by the router"),
    item("udptunnel", PrefType::Bool, false, "tunnel all network traffic on UDP port"),
    item("udpport", PrefType::Int32, false, "IP port number for tunneling"),
    // Memory/misc
    item("ramsize", PrefType::Int32, false, "size of Mac RAM in bytes"),
    item("modelid", PrefType::Int32, false, "Mac Model ID (Gestalt Model ID minus 6)"),
    item("cpu", PrefType::Int32, false, "CPU type (0 = 68000, 1 = 68010 etc.)"),
    item("fpu", PrefType::Bool, false, "enable FPU emulation"),
    item("rom", PrefType::String, false, "path of ROM file"),
    item("idlewait", PrefType::Bool, false, "sleep when idle"),
    item("ignoresegv", PrefType::Bool, false, "ignore illegal memory accesses"),
    item("nogui", PrefType::Bool, false, "disable GUI"),
    // JIT
    item("jit", PrefType::Bool, false, "enable JIT compiler"),
    item("jitfpu", PrefType::Bool, false, "enable JIT compilation of FPU instructions"),
    item("jitdebug", PrefType::Bool, false, "enable JIT debugger"),
    item("jitcachesize", PrefType::Int32, false, "translation cache size in KB"),
    item("jitlazyflush", PrefType::Bool, false, "enable lazy invalidation of translation cache"),
    item("jitinline", PrefType::Bool, false, "enable translation through constant jumps"),
];

/// Look up a known item by keyword.
pub fn find_item(name: &str) -> Option<&'static PrefsItemDesc> {
    PREFS_ITEMS.iter().find(|desc| desc.name == name)
}

impl PrefsStore {
    /// Create a store seeded with the stock defaults.
    pub fn with_defaults() -> Self {
        let mut prefs = Self::new();

        prefs.add_bool("udptunnel", false);
        prefs.add_int32("udpport", 6066);
        prefs.add_int32("frameskip", 6);
        prefs.add_int32("modelid", 5);
        prefs.add_int32("cpu", 3);
        prefs.add_bool("fpu", false);
        prefs.add_bool("nocdrom", false);
        prefs.add_bool("nosound", false);
        prefs.add_bool("nogui", false);
        prefs.add_int32("ramsize", 8 << 20);
        prefs.add_int32("bootdrive", 0);
        prefs.add_int32("bootdriver", 0);

        prefs.add_bool("jit", true);
        prefs.add_bool("jitfpu", true);
        prefs.add_bool("jitdebug", false);
        prefs.add_int32("jitcachesize", 8192);
        prefs.add_bool("jitlazyflush", true);
        prefs.add_bool("jitinline", true);

        prefs.add_bool("keycodes", false);
        prefs.add_string("extdrives", "CDEFGHIJKLMNOPQRSTUVWXYZ");
        prefs.add_int32("mousewheelmode", 1);
        prefs.add_int32("mousewheellines", 3);
        prefs.add_bool("idlewait", true);
        prefs.add_bool("enableextfs", false);
        prefs.add_bool("pollmedia", true);
        prefs.add_bool("reservewindowskey", false);

        // Serial ports must always be present, even when no port exists
        prefs.add_string("seriala", "COM1");
        prefs.add_string("serialb", "COM2");

        prefs
    }
}
