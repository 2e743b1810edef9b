//! Serial/Network pane, network half.

use crate::prefs::PrefsStore;

use super::PrefsPane;

/// How the Mac reaches the network.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EthernetMode {
    /// No `ether` key.
    #[default]
    None,
    /// Built-in NAT router.
    Router,
    /// Built-in slirp stack.
    Slirp,
    /// Basilisk II packet driver on the adapter with this GUID.
    B2Ether(String),
    /// TAP-Win32 adapter with this GUID.
    Tap(String),
    /// Any other `ether` value, kept verbatim.
    Other(String),
}

impl EthernetMode {
    fn from_prefs(prefs: &PrefsStore) -> Self {
        let guid = || prefs.find_string("etherguid", 0).unwrap_or_default().to_string();
        match prefs.find_string("ether", 0) {
            None => Self::None,
            Some("router") => Self::Router,
            Some("slirp") => Self::Slirp,
            Some("b2ether") => Self::B2Ether(guid()),
            Some("tap") => Self::Tap(guid()),
            Some(other) => Self::Other(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EthernetPane {
    pub mode: EthernetMode,
    /// Router only.
    pub ftp_port_list: String,
    /// Router only.
    pub tcp_port_list: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EthernetMsg {
    SetMode(EthernetMode),
    SetFtpPortList(String),
    SetTcpPortList(String),
}

impl EthernetPane {
    /// Port list entries state.
    pub fn port_lists_editable(&self) -> bool {
        self.mode == EthernetMode::Router
    }
}

impl PrefsPane for EthernetPane {
    type Msg = EthernetMsg;

    fn name(&self) -> &'static str {
        "Ethernet"
    }

    fn load(&mut self, prefs: &PrefsStore) {
        self.mode = EthernetMode::from_prefs(prefs);
        self.ftp_port_list = prefs.find_string("ftp_port_list", 0).unwrap_or_default().to_string();
        self.tcp_port_list = prefs.find_string("tcp_port", 0).unwrap_or_default().to_string();
    }

    fn save(&self, prefs: &mut PrefsStore) {
        match &self.mode {
            EthernetMode::None => {
                prefs.remove_item("ether");
                prefs.remove_item("etherguid");
            }
            EthernetMode::Router => {
                prefs.replace_string("ether", "router");
                prefs.remove_item("etherguid");
            }
            EthernetMode::Slirp => {
                prefs.replace_string("ether", "slirp");
                prefs.remove_item("etherguid");
            }
            EthernetMode::B2Ether(guid) => {
                prefs.replace_string("ether", "b2ether");
                prefs.replace_string("etherguid", guid);
            }
            EthernetMode::Tap(guid) => {
                prefs.replace_string("ether", "tap");
                prefs.replace_string("etherguid", guid);
            }
            EthernetMode::Other(device) => prefs.replace_string("ether", device),
        }

        if self.mode == EthernetMode::Router {
            prefs.replace_string("ftp_port_list", &self.ftp_port_list);
            prefs.replace_string("tcp_port", &self.tcp_port_list);
        }
    }

    fn update(&mut self, msg: EthernetMsg) {
        match msg {
            EthernetMsg::SetMode(mode) => self.mode = mode,
            EthernetMsg::SetFtpPortList(list) => self.ftp_port_list = list,
            EthernetMsg::SetTcpPortList(list) => self.tcp_port_list = list,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_modes() {
        let mut prefs = PrefsStore::new();
        assert_eq!(EthernetPane::from_prefs(&prefs).mode, EthernetMode::None);

        prefs.add_string("ether", "tap");
        prefs.add_string("etherguid", "{1234}");
        assert_eq!(EthernetPane::from_prefs(&prefs).mode, EthernetMode::Tap("{1234}".to_string()));

        prefs.replace_string("ether", "eth0");
        assert_eq!(EthernetPane::from_prefs(&prefs).mode, EthernetMode::Other("eth0".to_string()));
    }

    #[test]
    fn none_removes_both_keys() {
        let mut prefs = PrefsStore::new();
        prefs.add_string("ether", "b2ether");
        prefs.add_string("etherguid", "{abcd}");

        let mut pane = EthernetPane::from_prefs(&prefs);
        pane.update(EthernetMsg::SetMode(EthernetMode::None));
        pane.save(&mut prefs);
        assert!(!prefs.contains("ether"));
        assert!(!prefs.contains("etherguid"));
    }

    #[test]
    fn router_writes_port_lists() {
        let mut prefs = PrefsStore::new();
        prefs.add_string("ether", "b2ether");
        prefs.add_string("etherguid", "{abcd}");

        let mut pane = EthernetPane::from_prefs(&prefs);
        assert!(!pane.port_lists_editable());
        pane.update(EthernetMsg::SetFtpPortList("21".to_string()));
        pane.save(&mut prefs);
        assert!(!prefs.contains("ftp_port_list"));

        pane.update(EthernetMsg::SetMode(EthernetMode::Router));
        pane.update(EthernetMsg::SetTcpPortList("80,443".to_string()));
        assert!(pane.port_lists_editable());
        pane.save(&mut prefs);

        assert_eq!(prefs.find_string("ether", 0), Some("router"));
        assert!(!prefs.contains("etherguid"));
        assert_eq!(prefs.find_string("ftp_port_list", 0), Some("21"));
        assert_eq!(prefs.find_string("tcp_port", 0), Some("80,443"));
    }
}
