//! Toggle debouncing for bar processes.
//!
//! A bar needs a moment to react to a toggle signal; a second signal
//! inside that window would flip it back. Each process name gets its own
//! in-flight slot that expires a fixed cooldown after it was taken, so
//! two bars never serialize each other's toggles.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use crate::host::Host;

/// Cooldown between two toggle signals to the same process.
pub const TOGGLE_COOLDOWN: Duration = Duration::from_millis(100);

/// What happened to a toggle request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The signal was sent.
    Sent,
    /// Another toggle for the same process is still cooling down.
    Debounced,
    /// The process is not running; nothing was sent.
    NotRunning,
}

/// Per-process in-flight flags with timed release.
#[derive(Debug)]
pub struct ToggleDebouncer {
    cooldown: Duration,
    in_flight: Mutex<HashMap<String, Instant>>,
}

impl Default for ToggleDebouncer {
    fn default() -> Self {
        Self::new(TOGGLE_COOLDOWN)
    }
}

impl ToggleDebouncer {
    pub fn new(cooldown: Duration) -> Self {
        Self {
            cooldown,
            in_flight: Mutex::new(HashMap::new()),
        }
    }

    /// Test-and-set of the process's slot.
    ///
    /// Returns `true` if the caller now owns the slot. The slot releases
    /// itself once `now + cooldown` has passed.
    pub fn try_acquire(&self, process_name: &str, now: Instant) -> bool {
        let Ok(mut in_flight) = self.in_flight.lock() else {
            return false;
        };
        if let Some(&until) = in_flight.get(process_name)
            && now < until
        {
            return false;
        }
        in_flight.insert(process_name.to_owned(), now + self.cooldown);
        true
    }

    /// Releases the slot early (used when the toggle was aborted).
    pub fn release(&self, process_name: &str) {
        if let Ok(mut in_flight) = self.in_flight.lock() {
            in_flight.remove(process_name);
        }
    }

    /// Returns whether a toggle for this process is still cooling down.
    pub fn is_in_flight(&self, process_name: &str, now: Instant) -> bool {
        self.in_flight
            .lock()
            .map(|m| m.get(process_name).is_some_and(|&until| now < until))
            .unwrap_or(false)
    }

    /// Sends a toggle signal to the bar process unless one is in flight.
    ///
    /// A missing process is not an error: the slot is released at once
    /// and [`ToggleOutcome::NotRunning`] is returned.
    pub fn try_toggle(&self, host: &dyn Host, process_name: &str) -> ToggleOutcome {
        if !self.try_acquire(process_name, Instant::now()) {
            return ToggleOutcome::Debounced;
        }

        let Some(pid) = host.find_pid(process_name) else {
            self.release(process_name);
            crate::log_debug!("Toggle skipped: {process_name} is not running");
            return ToggleOutcome::NotRunning;
        };

        crate::log_debug!("Toggling {process_name} (PID {pid})");
        host.signal_toggle(pid);
        ToggleOutcome::Sent
    }
}
