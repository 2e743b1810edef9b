//! JIT Compiler pane.

use crate::prefs::PrefsStore;

use super::PrefsPane;

/// Translation cache sizes offered in the combobox, in KiB.
pub const JIT_CACHE_SIZES_KIB: [i32; 4] = [2048, 4096, 8192, 16384];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JitPane {
    pub enabled: bool,
    pub fpu: bool,
    pub cache_size_kib: i32,
    pub lazy_flush: bool,
    pub inline: bool,
}

impl Default for JitPane {
    fn default() -> Self {
        Self {
            enabled: true,
            fpu: true,
            cache_size_kib: 8192,
            lazy_flush: true,
            inline: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JitMsg {
    SetEnabled(bool),
    SetFpu(bool),
    SetCacheSize(i32),
    SetLazyFlush(bool),
    SetInline(bool),
}

impl JitPane {
    /// Sub-option controls state.
    pub fn options_editable(&self) -> bool {
        self.enabled
    }
}

impl PrefsPane for JitPane {
    type Msg = JitMsg;

    fn name(&self) -> &'static str {
        "JIT Compiler"
    }

    fn load(&mut self, prefs: &PrefsStore) {
        self.enabled = prefs.find_bool("jit");
        self.fpu = prefs.find_bool("jitfpu");
        self.cache_size_kib = prefs.find_int32("jitcachesize");
        self.lazy_flush = prefs.find_bool("jitlazyflush");
        self.inline = prefs.find_bool("jitinline");
    }

    fn save(&self, prefs: &mut PrefsStore) {
        prefs.replace_bool("jit", self.enabled);
        prefs.replace_bool("jitfpu", self.fpu);
        prefs.replace_bool("jitlazyflush", self.lazy_flush);
        prefs.replace_bool("jitinline", self.inline);
        if self.enabled {
            prefs.replace_int32("jitcachesize", self.cache_size_kib);
        }
    }

    fn update(&mut self, msg: JitMsg) {
        match msg {
            JitMsg::SetEnabled(v) => self.enabled = v,
            JitMsg::SetFpu(v) => self.fpu = v,
            JitMsg::SetCacheSize(kib) => self.cache_size_kib = kib,
            JitMsg::SetLazyFlush(v) => self.lazy_flush = v,
            JitMsg::SetInline(v) => self.inline = v,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cache_size_written_only_with_jit() {
        let mut prefs = PrefsStore::with_defaults();
        let mut pane = JitPane::from_prefs(&prefs);
        assert!(pane.options_editable());

        pane.update(JitMsg::SetCacheSize(16384));
        pane.update(JitMsg::SetEnabled(false));
        pane.save(&mut prefs);
        assert!(!prefs.find_bool("jit"));
        assert_eq!(prefs.find_int32("jitcachesize"), 8192);

        pane.update(JitMsg::SetEnabled(true));
        pane.save(&mut prefs);
        assert_eq!(prefs.find_int32("jitcachesize"), 16384);
    }
}
