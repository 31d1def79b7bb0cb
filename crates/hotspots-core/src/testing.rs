//! A recording [`Host`] for unit tests.
//!
//! Bars are modelled by process name: signalling a PID flips the
//! visibility of the process that owns it, the way a real bar reacts to
//! its toggle signal.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use crate::host::{Host, MonitorInfo};
use crate::rect::{Point, Rect};

#[derive(Default)]
pub(crate) struct MockHost {
    monitors: Vec<MonitorInfo>,
    processes: HashMap<String, u32>,
    keys: HashMap<String, u32>,
    state: Mutex<MockState>,
}

#[derive(Default)]
struct MockState {
    visible: HashSet<String>,
    fullscreen: HashSet<String>,
    signals: Vec<u32>,
    key_lookups: Vec<String>,
    commands: Vec<String>,
    notifications: Vec<String>,
}

impl MockHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_process(mut self, name: &str, pid: u32) -> Self {
        self.processes.insert(name.to_owned(), pid);
        self
    }

    pub fn with_key(mut self, name: &str, code: u32) -> Self {
        self.keys.insert(name.to_owned(), code);
        self
    }

    /// Adds a monitor; ids are assigned in insertion order.
    pub fn with_monitor(mut self, name: &str, bounds: Rect) -> Self {
        self.monitors.push(MonitorInfo {
            id: self.monitors.len(),
            name: name.to_owned(),
            bounds,
            has_fullscreen: false,
        });
        self
    }

    pub fn set_visible(&self, name: &str, visible: bool) {
        let mut state = self.state();
        if visible {
            state.visible.insert(name.to_owned());
        } else {
            state.visible.remove(name);
        }
    }

    pub fn set_fullscreen(&self, monitor: &str, fullscreen: bool) {
        let mut state = self.state();
        if fullscreen {
            state.fullscreen.insert(monitor.to_owned());
        } else {
            state.fullscreen.remove(monitor);
        }
    }

    pub fn is_visible(&self, name: &str) -> bool {
        self.state().visible.contains(name)
    }

    pub fn signals(&self) -> Vec<u32> {
        self.state().signals.clone()
    }

    pub fn key_lookups(&self) -> Vec<String> {
        self.state().key_lookups.clone()
    }

    pub fn commands(&self) -> Vec<String> {
        self.state().commands.clone()
    }

    pub fn notifications(&self) -> Vec<String> {
        self.state().notifications.clone()
    }

    fn state(&self) -> std::sync::MutexGuard<'_, MockState> {
        self.state.lock().unwrap()
    }

    fn monitor(&self, info: &MonitorInfo) -> MonitorInfo {
        let mut info = info.clone();
        info.has_fullscreen = self.state().fullscreen.contains(&info.name);
        info
    }
}

impl Host for MockHost {
    fn monitor_at_cursor(&self, cursor: Point) -> Option<MonitorInfo> {
        self.monitors
            .iter()
            .find(|m| m.bounds.contains(cursor))
            .map(|m| self.monitor(m))
    }

    fn monitor_by_name(&self, name: &str) -> Option<MonitorInfo> {
        self.monitors
            .iter()
            .find(|m| m.name == name)
            .map(|m| self.monitor(m))
    }

    fn find_pid(&self, process_name: &str) -> Option<u32> {
        self.processes.get(process_name).copied()
    }

    fn signal_toggle(&self, pid: u32) {
        let owner = self
            .processes
            .iter()
            .find(|&(_, &p)| p == pid)
            .map(|(name, _)| name.clone());
        let mut state = self.state();
        state.signals.push(pid);
        if let Some(name) = owner
            && !state.visible.remove(&name)
        {
            state.visible.insert(name);
        }
    }

    fn is_layer_surface_visible(&self, namespace: &str) -> bool {
        self.is_visible(namespace)
    }

    fn resolve_keycode(&self, name: &str) -> Option<u32> {
        self.state().key_lookups.push(name.to_owned());
        self.keys.get(name).copied()
    }

    fn run_command(&self, command: &str) {
        self.state().commands.push(command.to_owned());
    }

    fn notify(&self, message: &str) {
        self.state().notifications.push(message.to_owned());
    }
}
