use hotspots_core::HotspotsResult;
use hotspots_core::pid;

use crate::signals;

#[path = "daemon_ipc.rs"]
mod daemon_ipc;
#[path = "daemon_loop.rs"]
mod daemon_loop;
#[path = "daemon_loop_handlers.rs"]
mod daemon_loop_handlers;
#[path = "daemon_threads.rs"]
mod daemon_threads;
#[path = "daemon_types.rs"]
mod daemon_types;

/// Runs the hypr-hotspots daemon.
///
/// Starts background threads for the cursor poller, the compositor
/// event listener, the IPC socket and the config watcher. The main
/// thread owns the hotspot state and processes their messages in order.
pub fn run() -> HotspotsResult<()> {
    // Must happen before any thread is spawned so all threads inherit it.
    signals::block_termination()?;
    pid::write_pid_file()?;
    eprintln!("hypr-hotspots daemon started.");

    let result = daemon_loop::daemon_loop();

    let _ = pid::remove_pid_file();

    result
}
