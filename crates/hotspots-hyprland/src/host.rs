use std::sync::Mutex;
use std::time::{Duration, Instant};

use hotspots_core::{Host, MonitorInfo, Point};

use crate::{hyprctl, keys, layers, monitor, process, shell};

/// Monitor snapshots older than this are refreshed on the next lookup.
const MONITOR_TTL: Duration = Duration::from_millis(250);

struct MonitorCache {
    fetched: Instant,
    monitors: Vec<MonitorInfo>,
}

/// [`Host`] backed by Hyprland's IPC sockets and `/proc`.
///
/// Monitor geometry and fullscreen state are cached briefly because the
/// cursor poller asks for them on every sample.
#[derive(Default)]
pub struct HyprlandHost {
    cache: Mutex<Option<MonitorCache>>,
}

impl HyprlandHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops the cached monitor list (workspace, fullscreen or monitor
    /// layout changed).
    pub fn invalidate_monitors(&self) {
        if let Ok(mut cache) = self.cache.lock() {
            *cache = None;
        }
    }

    fn monitors(&self) -> Vec<MonitorInfo> {
        let Ok(mut cache) = self.cache.lock() else {
            return Vec::new();
        };
        if let Some(c) = cache.as_ref()
            && c.fetched.elapsed() < MONITOR_TTL
        {
            return c.monitors.clone();
        }
        match monitor::enumerate_monitors() {
            Ok(monitors) => {
                *cache = Some(MonitorCache {
                    fetched: Instant::now(),
                    monitors: monitors.clone(),
                });
                monitors
            }
            Err(e) => {
                hotspots_core::log_warn!("Failed to query monitors: {e}");
                Vec::new()
            }
        }
    }
}

impl Host for HyprlandHost {
    fn monitor_at_cursor(&self, cursor: Point) -> Option<MonitorInfo> {
        self.monitors()
            .into_iter()
            .find(|m| m.bounds.contains(cursor))
    }

    fn monitor_by_name(&self, name: &str) -> Option<MonitorInfo> {
        self.monitors().into_iter().find(|m| m.name == name)
    }

    fn find_pid(&self, process_name: &str) -> Option<u32> {
        process::find_pid(process_name)
    }

    fn signal_toggle(&self, pid: u32) {
        if let Err(e) = process::send_toggle(pid) {
            hotspots_core::log_warn!("Failed to signal PID {pid}: {e}");
        }
    }

    fn is_layer_surface_visible(&self, namespace: &str) -> bool {
        layers::is_visible(namespace).unwrap_or_else(|e| {
            hotspots_core::log_warn!("Failed to query layers: {e}");
            false
        })
    }

    fn resolve_keycode(&self, name: &str) -> Option<u32> {
        keys::keycode_from_name(name)
    }

    fn run_command(&self, command: &str) {
        if let Err(e) = shell::run_detached(command) {
            hotspots_core::log_error!("Failed to run `{command}`: {e}");
        }
    }

    fn notify(&self, message: &str) {
        if let Err(e) = hyprctl::notify(message) {
            hotspots_core::log_warn!("Failed to send notification: {e}");
        }
    }
}
