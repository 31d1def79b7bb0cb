use std::sync::atomic::{AtomicU64, Ordering};

use hotspots_core::ipc::{Command, Response};
use hotspots_core::{Config, Host, HostEvent, Hotspots, Point, config};

use crate::events::HyprEvent;
use crate::host::HyprlandHost;

/// Everything the handlers mutate, owned by the main daemon thread.
pub(super) struct DaemonState<'a> {
    pub hotspots: &'a mut Hotspots,
    pub host: &'a HyprlandHost,
    /// The config most recently applied, reapplied on monitor changes.
    pub config: Config,
    pub sample_ms: &'a AtomicU64,
}

pub(super) fn handle_cursor(point: Point, state: &mut DaemonState<'_>) {
    state.hotspots.handle_event(HostEvent::MouseMove {
        x: point.x,
        y: point.y,
    });
}

pub(super) fn handle_hypr(event: HyprEvent, state: &mut DaemonState<'_>) {
    state.host.invalidate_monitors();
    match event {
        HyprEvent::WorkspaceChanged => {
            state.hotspots.handle_event(HostEvent::WorkspaceChanged);
        }
        HyprEvent::FullscreenChanged | HyprEvent::MonitorFocusChanged => {}
        HyprEvent::MonitorsChanged => {
            // Region rectangles are monitor-relative and resolved on load.
            hotspots_core::log_info!("Monitor layout changed, re-registering regions");
            let config = state.config.clone();
            apply(config, state);
        }
    }
}

pub(super) fn handle_command(command: &Command, state: &mut DaemonState<'_>) -> Response {
    match command {
        Command::Stop => {
            hotspots_core::log_info!("Stop command received, shutting down");
            Response::ok_with_message("Daemon stopping")
        }
        Command::Status => Response::ok_with_message(format!(
            "Daemon is running (PID {}): {}",
            std::process::id(),
            state.hotspots.status()
        )),
        Command::Reload => match config::try_load() {
            Ok(config) => {
                let errors = apply(config, state);
                if errors == 0 {
                    Response::ok_with_message("Configuration reloaded")
                } else {
                    Response::ok_with_message(format!(
                        "Configuration reloaded with {errors} error(s), see notifications"
                    ))
                }
            }
            Err(e) => {
                hotspots_core::log_warn!("Reload rejected: {e}");
                Response::error(e)
            }
        },
        Command::Key { name, pressed } => match state.host.resolve_keycode(name) {
            Some(keycode) => {
                state.hotspots.handle_event(HostEvent::Key {
                    keycode,
                    pressed: *pressed,
                });
                Response::ok()
            }
            None => Response::error(format!("unknown key: {name}")),
        },
    }
}

pub(super) fn handle_reload(config: Config, state: &mut DaemonState<'_>) {
    hotspots_core::log_info!("Config file changed, reloading");
    apply(config, state);
}

/// Replaces the active configuration and returns the number of
/// directives that failed to apply.
fn apply(config: Config, state: &mut DaemonState<'_>) -> usize {
    state.hotspots.handle_event(HostEvent::PreConfigReload);
    let errors = state.hotspots.config_reloaded(&config);
    state
        .sample_ms
        .store(config.mouse_sample_ms, Ordering::Relaxed);
    state.config = config;
    errors.len()
}
