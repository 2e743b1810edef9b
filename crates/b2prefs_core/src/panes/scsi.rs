//! SCSI pane.

use crate::prefs::PrefsStore;

use super::{replace_or_remove, PrefsPane};

/// Number of SCSI IDs the emulator maps.
pub const SCSI_TARGETS: usize = 7;

const SCSI_KEYS: [&str; SCSI_TARGETS] = ["scsi0", "scsi1", "scsi2", "scsi3", "scsi4", "scsi5", "scsi6"];

/// Host device for each SCSI ID. Empty means unmapped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScsiPane {
    pub targets: [String; SCSI_TARGETS],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScsiMsg {
    SetTarget(usize, String),
}

impl PrefsPane for ScsiPane {
    type Msg = ScsiMsg;

    fn name(&self) -> &'static str {
        "SCSI"
    }

    fn load(&mut self, prefs: &PrefsStore) {
        for (target, key) in self.targets.iter_mut().zip(SCSI_KEYS) {
            *target = prefs.find_string(key, 0).unwrap_or_default().to_string();
        }
    }

    fn save(&self, prefs: &mut PrefsStore) {
        for (target, key) in self.targets.iter().zip(SCSI_KEYS) {
            replace_or_remove(prefs, key, target);
        }
    }

    fn update(&mut self, msg: ScsiMsg) {
        match msg {
            ScsiMsg::SetTarget(id, device) => match self.targets.get_mut(id) {
                Some(target) => *target = device,
                None => tracing::debug!("Ignoring SCSI ID {}", id),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_targets_are_removed() {
        let mut prefs = PrefsStore::new();
        prefs.add_string("scsi0", "/dev/sg0");
        prefs.add_string("scsi3", "/dev/sg3");

        let mut pane = ScsiPane::from_prefs(&prefs);
        assert_eq!(pane.targets[3], "/dev/sg3");
        assert!(pane.targets[1].is_empty());

        pane.update(ScsiMsg::SetTarget(0, String::new()));
        pane.update(ScsiMsg::SetTarget(6, "/dev/sg6".to_string()));
        pane.update(ScsiMsg::SetTarget(7, "/dev/bogus".to_string()));
        pane.save(&mut prefs);

        assert!(!prefs.contains("scsi0"));
        assert_eq!(prefs.find_string("scsi3", 0), Some("/dev/sg3"));
        assert_eq!(prefs.find_string("scsi6", 0), Some("/dev/sg6"));
        assert!(!prefs.contains("scsi7"));
    }
}
