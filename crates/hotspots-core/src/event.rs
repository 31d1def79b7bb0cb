use crate::config::Config;

/// A platform-agnostic input to the hotspot logic.
///
/// Platform crates translate compositor events, cursor samples and
/// keybind notifications into these variants and deliver them in order
/// on a single thread.
#[derive(Debug, Clone)]
pub enum HostEvent {
    /// The cursor moved. Coordinates are global logical pixels.
    MouseMove { x: i32, y: i32 },

    /// A key changed state. `keycode` uses the host's keycode space.
    Key { keycode: u32, pressed: bool },

    /// The active workspace changed on some monitor.
    WorkspaceChanged,

    /// The configuration is about to be replaced; drop all regions.
    PreConfigReload,

    /// A new configuration is available; rebuild from it.
    ConfigReloaded(Box<Config>),
}

