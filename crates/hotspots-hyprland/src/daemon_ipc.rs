use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc;

use hotspots_core::ipc::{Command, Response};

use crate::ipc::SocketServer;

use super::daemon_types::{DaemonMsg, ResponseSender};

/// Accepts IPC connections in a loop and forwards commands to the
/// main daemon thread. Runs on a dedicated thread.
///
/// Returns after a `Stop` command, or on the first connection accepted
/// once `stop` is set.
pub(super) fn ipc_loop(server: SocketServer, tx: mpsc::Sender<DaemonMsg>, stop: Arc<AtomicBool>) {
    loop {
        let conn = match server.accept() {
            Ok(c) => c,
            Err(e) => {
                hotspots_core::log_error!("Failed to accept IPC connection: {e}");
                return;
            }
        };
        if stop.load(Ordering::Relaxed) {
            return;
        }

        let command = match conn.read_command() {
            Ok(Some(cmd)) => cmd,
            Ok(None) => continue,
            Err(e) => {
                hotspots_core::log_warn!("Error reading command: {e}");
                let _ = conn.send_response(&Response::error(format!("bad request: {e}")));
                continue;
            }
        };

        let (reply_tx, reply_rx): (ResponseSender, _) = mpsc::channel();
        let is_stop = matches!(command, Command::Stop);

        if tx.send(DaemonMsg::Command(command, reply_tx)).is_err() {
            return;
        }

        if let Ok(response) = reply_rx.recv()
            && let Err(e) = conn.send_response(&response)
        {
            hotspots_core::log_warn!("Failed to send IPC response: {e}");
        }

        if is_stop {
            return;
        }
    }
}

/// Unblocks a listener waiting in `accept` so it can observe `stop`.
pub(super) fn wake_listener() {
    let _ = std::os::unix::net::UnixStream::connect(crate::ipc::socket_path());
}
