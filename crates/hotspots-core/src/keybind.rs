use std::collections::HashMap;

use crate::host::Host;

/// How the toggle key gates showing the bar on hover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleMode {
    /// No keybind: hovering alone shows the bar.
    Hover,
    /// The bar may show only while the key is held down.
    Hold,
    /// Each key release flips a persistent permission flag.
    Press,
}

impl ToggleMode {
    /// Parses the `toggle_mode` option. Only `hold` and `press` are valid.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hold" => Some(Self::Hold),
            "press" => Some(Self::Press),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hover => "hover",
            Self::Hold => "hold",
            Self::Press => "press",
        }
    }
}

/// Decides whether hovering is currently allowed to show the bar.
#[derive(Debug, Clone)]
pub struct KeybindGate {
    mode: ToggleMode,
    keycode: Option<u32>,
    allow_show: bool,
}

impl Default for KeybindGate {
    fn default() -> Self {
        Self {
            mode: ToggleMode::Hover,
            keycode: None,
            allow_show: true,
        }
    }
}

impl KeybindGate {
    /// Reconfigures the gate after a reload.
    ///
    /// Without a keycode the gate falls back to [`ToggleMode::Hover`] and
    /// always allows showing. With one, showing starts out forbidden
    /// until the key is used.
    pub fn configure(&mut self, keycode: Option<u32>, mode: ToggleMode) {
        match keycode {
            Some(code) if mode != ToggleMode::Hover => {
                self.keycode = Some(code);
                self.mode = mode;
                self.allow_show = false;
            }
            _ => *self = Self::default(),
        }
    }

    /// Feeds a key event through the gate.
    ///
    /// Returns `true` if the key is the configured toggle key, in which
    /// case the caller should re-evaluate the hovered region.
    pub fn handle_key(&mut self, keycode: u32, pressed: bool) -> bool {
        if self.keycode != Some(keycode) {
            return false;
        }
        match self.mode {
            ToggleMode::Hold => self.allow_show = pressed,
            ToggleMode::Press => {
                if !pressed {
                    self.allow_show = !self.allow_show;
                }
            }
            ToggleMode::Hover => {}
        }
        true
    }

    pub fn allows_show(&self) -> bool {
        self.allow_show
    }

    pub fn mode(&self) -> ToggleMode {
        self.mode
    }

    pub fn keycode(&self) -> Option<u32> {
        self.keycode
    }
}

/// Memoizes key-name lookups so each name is resolved against the
/// keymap only once.
#[derive(Debug, Default)]
pub struct KeycodeCache {
    cache: HashMap<String, u32>,
}

impl KeycodeCache {
    /// Resolves a key name, consulting the host only on a cache miss.
    ///
    /// Empty names and failed lookups return `None` and are not cached.
    pub fn resolve(&mut self, host: &dyn Host, name: &str) -> Option<u32> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        if let Some(&code) = self.cache.get(name) {
            return Some(code);
        }
        let code = host.resolve_keycode(name)?;
        self.cache.insert(name.to_owned(), code);
        Some(code)
    }

    #[cfg(test)]
    fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}
