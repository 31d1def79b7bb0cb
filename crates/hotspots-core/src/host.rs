use crate::rect::{Point, Rect};

/// A monitor as seen by the hover logic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitorInfo {
    /// Small stable index used to address per-monitor region lists.
    pub id: usize,
    /// Connector name (e.g. "DP-1"), as used in region directives.
    pub name: String,
    /// Position and size in global logical pixels.
    pub bounds: Rect,
    /// Whether the monitor's active workspace shows a fullscreen window.
    pub has_fullscreen: bool,
}

/// Everything the core needs from the compositor and the OS.
///
/// Each platform crate (e.g. `hotspots-hyprland`) provides its own
/// implementation. Methods are called from both the event thread and the
/// timer thread, so implementations must be thread-safe and must never
/// call back into the core.
pub trait Host: Send + Sync {
    /// Returns the monitor under the cursor.
    fn monitor_at_cursor(&self, cursor: Point) -> Option<MonitorInfo>;

    /// Looks a monitor up by connector name.
    fn monitor_by_name(&self, name: &str) -> Option<MonitorInfo>;

    /// Returns the PID of a running process with this name.
    fn find_pid(&self, process_name: &str) -> Option<u32>;

    /// Asks the bar process to toggle its visibility. Fire-and-forget.
    fn signal_toggle(&self, pid: u32);

    /// Returns whether a layer surface with this namespace is on screen.
    fn is_layer_surface_visible(&self, namespace: &str) -> bool;

    /// Resolves a key name to the keycode carried by key events.
    fn resolve_keycode(&self, name: &str) -> Option<u32>;

    /// Runs a shell command in the background without waiting for it.
    fn run_command(&self, command: &str);

    /// Shows a message to the user (compositor notification).
    fn notify(&self, message: &str);
}
