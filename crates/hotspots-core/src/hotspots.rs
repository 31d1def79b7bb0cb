//! The hotspot context: regions, hover tracking, keybind gate and timers
//! wired together behind one event entry point.

use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::config::{self, Config};
use crate::debounce::{ToggleDebouncer, ToggleOutcome};
use crate::error::ConfigError;
use crate::event::HostEvent;
use crate::host::Host;
use crate::hover::{HoverTracker, MouseThrottle};
use crate::keybind::{KeybindGate, KeycodeCache, ToggleMode};
use crate::rect::{Margins, Point};
use crate::registry::{RegionRegistry, SharedRegistry};
use crate::timer::{TimerEngine, WORKSPACE_GRACE};

const NOTIFY_PREFIX: &str = "[hypr-hotspots]:";

#[derive(Debug, Clone, Copy)]
struct Settings {
    hide_delay: Duration,
    show_on_workspace_change: bool,
    margins: Margins,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            hide_delay: Duration::ZERO,
            show_on_workspace_change: true,
            margins: Margins::default(),
        }
    }
}

/// A snapshot of the context for `status` replies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HotspotsStatus {
    pub hover_regions: usize,
    pub command_regions: usize,
    pub toggle_mode: ToggleMode,
    pub allow_show: bool,
    pub hide_delay: Duration,
}

impl fmt::Display for HotspotsStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} bar region(s), {} command region(s), toggle mode {}, showing {}, hide delay {}ms",
            self.hover_regions,
            self.command_regions,
            self.toggle_mode.as_str(),
            if self.allow_show { "allowed" } else { "blocked" },
            self.hide_delay.as_millis(),
        )
    }
}

/// Owns all hotspot state for one compositor session.
///
/// Events are fed in order through [`Hotspots::handle_event`] from a
/// single thread. The only other thread is the timer scheduler, which
/// touches the registry through a non-blocking lock.
pub struct Hotspots {
    host: Arc<dyn Host>,
    registry: SharedRegistry,
    debouncer: Arc<ToggleDebouncer>,
    tracker: HoverTracker,
    gate: KeybindGate,
    keycodes: KeycodeCache,
    timers: TimerEngine,
    throttle: MouseThrottle,
    settings: Settings,
}

impl Hotspots {
    /// Creates an empty context and starts its timer thread.
    ///
    /// No regions exist until the first [`Hotspots::reload`].
    pub fn new(host: Arc<dyn Host>) -> Self {
        let registry = RegionRegistry::shared();
        let debouncer = Arc::new(ToggleDebouncer::default());

        let timers = {
            let host = host.clone();
            let registry = registry.clone();
            let debouncer = debouncer.clone();
            TimerEngine::start(move || hide_visible_bars(host.as_ref(), &registry, &debouncer))
        };

        Self {
            host,
            registry,
            debouncer,
            tracker: HoverTracker::default(),
            gate: KeybindGate::default(),
            keycodes: KeycodeCache::default(),
            timers,
            throttle: MouseThrottle::new(Config::default().mouse_sample_interval()),
            settings: Settings::default(),
        }
    }

    /// Dispatches one event.
    pub fn handle_event(&mut self, event: HostEvent) {
        match event {
            HostEvent::MouseMove { x, y } => self.on_mouse_move(Point::new(x, y), Instant::now()),
            HostEvent::Key { keycode, pressed } => self.on_key(keycode, pressed),
            HostEvent::WorkspaceChanged => self.on_workspace_changed(),
            HostEvent::PreConfigReload => self.pre_config_reload(),
            HostEvent::ConfigReloaded(config) => {
                self.config_reloaded(&config);
            }
        }
    }

    /// Processes a cursor sample taken at `now`.
    pub fn on_mouse_move(&mut self, cursor: Point, now: Instant) {
        if !self.throttle.accept(now) {
            return;
        }
        let Some(monitor) = self.host.monitor_at_cursor(cursor) else {
            return;
        };
        if monitor.has_fullscreen {
            return;
        }
        let local = cursor.relative_to(&monitor.bounds);

        let (hover, show_name, leave_cmd, enter_cmd) = {
            let Ok(registry) = self.registry.lock() else {
                return;
            };
            let hover = self
                .tracker
                .update_hover(monitor.id, registry.hover_regions(monitor.id), local);
            let command = self.tracker.update_commands(
                monitor.id,
                registry.command_regions(monitor.id),
                local,
            );
            let show_name = hover
                .region
                .filter(|_| hover.show)
                .and_then(|r| registry.hover_region(r))
                .map(|r| r.process_name.clone());
            let leave_cmd = command
                .leave
                .and_then(|r| registry.command_region(r))
                .and_then(|r| r.leave_command.clone());
            let enter_cmd = command
                .enter
                .and_then(|r| registry.command_region(r))
                .map(|r| r.enter_command.clone());
            (hover, show_name, leave_cmd, enter_cmd)
        };

        if hover.cancel_hide {
            self.timers.cancel();
        }
        if let Some(name) = show_name
            && self.gate.allows_show()
        {
            self.show_bar(&name);
        }
        if hover.start_hide {
            self.start_hide_timer();
        }

        if let Some(cmd) = leave_cmd {
            crate::log_debug!("Leaving command region: {cmd}");
            self.host.run_command(&cmd);
        }
        if let Some(cmd) = enter_cmd {
            crate::log_debug!("Entering command region: {cmd}");
            self.host.run_command(&cmd);
        }
    }

    /// Feeds a key event through the gate and re-evaluates the hovered bar.
    pub fn on_key(&mut self, keycode: u32, pressed: bool) {
        if !self.gate.handle_key(keycode, pressed) {
            return;
        }
        crate::log_debug!(
            "Toggle key {} (show {})",
            if pressed { "pressed" } else { "released" },
            if self.gate.allows_show() { "allowed" } else { "blocked" }
        );
        self.refresh_hovered();
    }

    /// Shows the hovered region's bar if the gate now allows it.
    ///
    /// Skipped while a toggle for that bar is still cooling down.
    pub fn refresh_hovered(&mut self) {
        let Some(name) = self.hovered_process_name() else {
            return;
        };
        if self.debouncer.is_in_flight(&name, Instant::now()) {
            return;
        }
        let visible = self.host.is_layer_surface_visible(&name);
        self.mirror_visible(&name, visible);
        if self.gate.allows_show() && !visible {
            self.toggle(&name, true);
        }
    }

    /// Briefly reveals every bar after a workspace switch.
    ///
    /// Only active with `show_on_workspace_change` and a non-zero hide
    /// delay, otherwise the bars would vanish again at once.
    pub fn on_workspace_changed(&mut self) {
        if !self.settings.show_on_workspace_change || self.settings.hide_delay.is_zero() {
            return;
        }
        let names = match self.registry.lock() {
            Ok(registry) => registry.process_names(),
            Err(_) => return,
        };
        if names.is_empty() {
            return;
        }

        self.timers.cancel();
        for name in &names {
            if !self.host.is_layer_surface_visible(name) {
                self.toggle(name, true);
            }
        }

        if self.tracker.is_in_leave_area() {
            return;
        }
        self.timers
            .schedule_workspace_grace(WORKSPACE_GRACE, self.settings.hide_delay);
    }

    /// Drops every region and all tracking state.
    pub fn pre_config_reload(&mut self) {
        self.timers.cancel();
        if let Ok(mut registry) = self.registry.lock() {
            registry.clear_all();
        }
        self.tracker.reset();
    }

    /// Rebuilds settings, keybind and regions from `config`.
    ///
    /// Invalid directives are skipped. Each problem is logged, shown to
    /// the user as a notification, and returned.
    pub fn config_reloaded(&mut self, config: &Config) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        self.settings = Settings {
            hide_delay: config.hide_delay(),
            show_on_workspace_change: config.show_on_workspace_change,
            margins: config.leave_margins(),
        };
        self.throttle.set_interval(config.mouse_sample_interval());
        self.configure_keybind(config, &mut errors);
        self.register_regions(config, &mut errors);
        self.tracker.reset();

        for error in &errors {
            crate::log_warn!("{error}");
            self.host.notify(&format!("{NOTIFY_PREFIX} {error}"));
        }
        crate::log_info!("Configuration applied: {}", self.status());
        errors
    }

    /// Replaces the configuration in one step.
    pub fn reload(&mut self, config: &Config) -> Vec<ConfigError> {
        self.pre_config_reload();
        self.config_reloaded(config)
    }

    pub fn status(&self) -> HotspotsStatus {
        let (hover_regions, command_regions) = self
            .registry
            .lock()
            .map(|r| (r.hover_count(), r.command_count()))
            .unwrap_or_default();
        HotspotsStatus {
            hover_regions,
            command_regions,
            toggle_mode: self.gate.mode(),
            allow_show: self.gate.allows_show(),
            hide_delay: self.settings.hide_delay,
        }
    }

    /// Invalidates pending timers and joins the scheduler thread.
    pub fn shutdown(&mut self) {
        self.timers.shutdown();
        crate::log_info!("Hotspots shut down");
    }

    fn configure_keybind(&mut self, config: &Config, errors: &mut Vec<ConfigError>) {
        let bind = config.toggle_bind.trim();
        if bind.is_empty() {
            self.gate.configure(None, ToggleMode::Hover);
            return;
        }

        let mode = ToggleMode::parse(&config.toggle_mode).unwrap_or_else(|| {
            errors.push(ConfigError::InvalidToggleMode {
                value: config.toggle_mode.clone(),
            });
            ToggleMode::Hold
        });
        let keycode = self.keycodes.resolve(self.host.as_ref(), bind);
        if keycode.is_none() {
            errors.push(ConfigError::UnknownKey {
                name: bind.to_owned(),
            });
        }
        self.gate.configure(keycode, mode);
    }

    fn register_regions(&mut self, config: &Config, errors: &mut Vec<ConfigError>) {
        // Resolve monitors before locking so no host call runs under the lock.
        let mut hover = Vec::new();
        for value in &config.waybar_regions {
            match config::parse_hover(value) {
                Ok(d) => match self.host.monitor_by_name(&d.monitor) {
                    Some(m) => hover.push((m.id, d)),
                    None => errors.push(ConfigError::UnknownMonitor {
                        directive: config::directive::WAYBAR_REGION,
                        name: d.monitor,
                    }),
                },
                Err(e) => errors.push(e),
            }
        }

        let mut command = Vec::new();
        for value in &config.command_regions {
            match config::parse_command(value) {
                Ok(d) => match self.host.monitor_by_name(&d.monitor) {
                    Some(m) => command.push((m.id, d)),
                    None => errors.push(ConfigError::UnknownMonitor {
                        directive: config::directive::COMMAND_REGION,
                        name: d.monitor,
                    }),
                },
                Err(e) => errors.push(e),
            }
        }

        let Ok(mut registry) = self.registry.lock() else {
            return;
        };
        for (monitor, d) in hover {
            registry.register_hover_region(monitor, d.rect, &d.process_name, self.settings.margins);
        }
        for (monitor, d) in command {
            registry.register_command_region(
                monitor,
                d.rect,
                &d.enter_command,
                d.leave_command.as_deref(),
            );
        }
        registry.update_leave_margins(self.settings.margins);
    }

    fn hovered_process_name(&self) -> Option<String> {
        let region = self.tracker.hovered_region()?;
        let registry = self.registry.lock().ok()?;
        registry.hover_region(region).map(|r| r.process_name.clone())
    }

    /// Toggles a bar on if the compositor reports it hidden.
    fn show_bar(&self, name: &str) {
        let visible = self.host.is_layer_surface_visible(name);
        self.mirror_visible(name, visible);
        if !visible {
            self.toggle(name, true);
        }
    }

    fn start_hide_timer(&self) {
        if self.settings.hide_delay.is_zero() {
            hide_visible_bars(self.host.as_ref(), &self.registry, &self.debouncer);
        } else {
            self.timers.schedule_hide(self.settings.hide_delay);
        }
    }

    fn toggle(&self, name: &str, to_visible: bool) {
        if self.debouncer.try_toggle(self.host.as_ref(), name) == ToggleOutcome::Sent {
            self.mirror_visible(name, to_visible);
        }
    }

    fn mirror_visible(&self, name: &str, visible: bool) {
        if let Ok(mut registry) = self.registry.lock() {
            registry.set_visible(name, visible);
        }
    }
}

/// Hides every bar the compositor reports visible.
///
/// Runs on the timer thread as well as inline, so the registry is only
/// ever try-locked here; a busy registry skips this round.
fn hide_visible_bars(host: &dyn Host, registry: &SharedRegistry, debouncer: &ToggleDebouncer) {
    let names = match registry.try_lock() {
        Ok(registry) => registry.process_names(),
        Err(_) => {
            crate::log_debug!("Region registry busy; skipping hide");
            return;
        }
    };

    for name in names {
        if !host.is_layer_surface_visible(&name) {
            continue;
        }
        if debouncer.try_toggle(host, &name) == ToggleOutcome::Sent
            && let Ok(mut registry) = registry.try_lock()
        {
            registry.set_visible(&name, false);
        }
    }
}

#[cfg(test)]
#[path = "hotspots_tests.rs"]
mod tests;
