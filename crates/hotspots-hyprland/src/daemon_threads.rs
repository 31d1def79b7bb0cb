use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use hotspots_core::Config;

use crate::cursor;
use crate::events::{self, HyprEvent};
use crate::ipc::SocketServer;
use crate::signals;

use super::daemon_ipc;
use super::daemon_types::DaemonMsg;

/// Polls the cursor position and forwards it whenever it changes.
///
/// The interval is read on every iteration so reloads take effect
/// without restarting the thread.
pub(super) fn spawn_cursor_poller(
    tx: mpsc::Sender<DaemonMsg>,
    interval_ms: Arc<AtomicU64>,
    stop: Arc<AtomicBool>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let mut last = None;
        let mut failing = false;
        while !stop.load(Ordering::Relaxed) {
            thread::sleep(Duration::from_millis(interval_ms.load(Ordering::Relaxed)));
            match cursor::cursor_position() {
                Ok(point) => {
                    failing = false;
                    if last == Some(point) {
                        continue;
                    }
                    last = Some(point);
                    if tx.send(DaemonMsg::Cursor(point)).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    if !failing {
                        hotspots_core::log_warn!("Cursor query failed: {e}");
                    }
                    failing = true;
                }
            }
        }
    })
}

/// Spawns the compositor event listener and a bridge into the daemon channel.
pub(super) fn spawn_event_listener(
    tx: mpsc::Sender<DaemonMsg>,
    stop: Arc<AtomicBool>,
) -> (thread::JoinHandle<()>, thread::JoinHandle<()>) {
    let (event_tx, event_rx) = mpsc::channel::<HyprEvent>();
    let listener = thread::spawn(move || {
        if let Err(e) = events::listen(event_tx, stop) {
            hotspots_core::log_error!("Event listener stopped: {e}");
        }
    });

    let bridge = thread::spawn(move || {
        for event in event_rx {
            if tx.send(DaemonMsg::Hypr(event)).is_err() {
                break;
            }
        }
    });

    (listener, bridge)
}

/// Spawns the IPC listener thread.
pub(super) fn spawn_ipc_listener(
    server: SocketServer,
    tx: mpsc::Sender<DaemonMsg>,
    stop: Arc<AtomicBool>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || daemon_ipc::ipc_loop(server, tx, stop))
}

/// Spawns the config watcher thread and a bridge into the daemon channel.
pub(super) fn spawn_config_watcher(
    tx: mpsc::Sender<DaemonMsg>,
    stop: Arc<AtomicBool>,
) -> (thread::JoinHandle<()>, thread::JoinHandle<()>) {
    let (reload_tx, reload_rx) = mpsc::channel::<Config>();
    let watcher_thread = thread::spawn(move || crate::config_watcher::watch(reload_tx, stop));

    let reload_bridge = thread::spawn(move || {
        for reload in reload_rx {
            if tx.send(DaemonMsg::Reload(Box::new(reload))).is_err() {
                break;
            }
        }
    });

    (watcher_thread, reload_bridge)
}

/// Waits for a termination signal and asks the main loop to exit.
///
/// This thread is never joined: it stays parked in `sigwait` until the
/// process exits.
pub(super) fn spawn_signal_waiter(tx: mpsc::Sender<DaemonMsg>) {
    thread::spawn(move || match signals::wait_for_termination() {
        Ok(sig) => {
            hotspots_core::log_info!("Received {sig:?}, shutting down");
            let _ = tx.send(DaemonMsg::Terminate);
        }
        Err(e) => hotspots_core::log_error!("Signal wait failed: {e}"),
    });
}
