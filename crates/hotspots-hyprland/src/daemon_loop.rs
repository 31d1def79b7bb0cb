use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::mpsc;

use hotspots_core::config;
use hotspots_core::ipc::Command;
use hotspots_core::{Host, Hotspots, HotspotsResult};

use crate::host::HyprlandHost;
use crate::ipc::SocketServer;
use crate::monitor;

use super::daemon_ipc;
use super::daemon_loop_handlers::{self, DaemonState};
use super::daemon_threads;
use super::daemon_types::DaemonMsg;

/// The inner daemon loop, separated so cleanup always runs in `run()`.
pub(super) fn daemon_loop() -> HotspotsResult<()> {
    let (config, load_warning) = config::load_with_warning();
    hotspots_core::log::init(&config.logging);
    if let Some(e) = &load_warning {
        eprintln!("Warning: {e}");
        hotspots_core::log_warn!("Using default config: {e}");
    }

    hotspots_core::log_info!("Daemon started (PID: {})", std::process::id());
    hotspots_core::log_info!(
        "Config: hide_delay={}ms, toggle_bind='{}', toggle_mode={}, sample={}ms, log_level={}",
        config.hide_delay,
        config.toggle_bind,
        config.toggle_mode,
        config.mouse_sample_ms,
        config.logging.level
    );

    // Fails early when Hyprland is not reachable.
    let monitors = monitor::enumerate_monitors()?;
    hotspots_core::log_info!("Found {} monitor(s)", monitors.len());

    let server = SocketServer::bind()?;

    let host = Arc::new(HyprlandHost::new());
    let mut hotspots = Hotspots::new(host.clone());
    if let Some(e) = load_warning {
        host.notify(&format!("[hypr-hotspots]: config.toml not loaded, using defaults: {e}"));
    }
    hotspots.reload(&config);

    let sample_ms = Arc::new(AtomicU64::new(config.mouse_sample_ms));
    let stop = Arc::new(AtomicBool::new(false));
    let (tx, rx) = mpsc::channel::<DaemonMsg>();

    daemon_threads::spawn_signal_waiter(tx.clone());
    let (event_listener, event_bridge) =
        daemon_threads::spawn_event_listener(tx.clone(), stop.clone());
    let cursor_thread =
        daemon_threads::spawn_cursor_poller(tx.clone(), sample_ms.clone(), stop.clone());
    let ipc_thread = daemon_threads::spawn_ipc_listener(server, tx.clone(), stop.clone());
    let (watcher_thread, reload_bridge) =
        daemon_threads::spawn_config_watcher(tx.clone(), stop.clone());
    drop(tx);

    let mut state = DaemonState {
        hotspots: &mut hotspots,
        host: host.as_ref(),
        config,
        sample_ms: &sample_ms,
    };

    // Main processing loop; blocks until a message arrives.
    while let Ok(msg) = rx.recv() {
        match msg {
            DaemonMsg::Cursor(point) => daemon_loop_handlers::handle_cursor(point, &mut state),
            DaemonMsg::Hypr(event) => daemon_loop_handlers::handle_hypr(event, &mut state),
            DaemonMsg::Command(command, reply_tx) => {
                let response = daemon_loop_handlers::handle_command(&command, &mut state);
                let _ = reply_tx.send(response);
                if matches!(command, Command::Stop) {
                    break;
                }
            }
            DaemonMsg::Reload(reload) => daemon_loop_handlers::handle_reload(*reload, &mut state),
            DaemonMsg::Terminate => break,
        }
    }

    hotspots.shutdown();
    stop.store(true, Ordering::Relaxed);
    daemon_ipc::wake_listener();
    drop(rx);

    let _ = cursor_thread.join();
    let _ = event_listener.join();
    let _ = event_bridge.join();
    let _ = watcher_thread.join();
    let _ = reload_bridge.join();
    let _ = ipc_thread.join();

    hotspots_core::log_info!("Daemon stopped");
    Ok(())
}
