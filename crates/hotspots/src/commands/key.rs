use hotspots_core::Command;
use hotspots_hyprland::ipc;

/// Forwards a key press or release to the running daemon.
///
/// Meant to be bound in `hyprland.conf`, e.g.
/// `bind = , Super_L, exec, hypr-hotspots key press Super_L` together
/// with a matching `bindr` for the release.
pub fn execute(name: String, pressed: bool) {
    send(&Command::Key { name, pressed });
}

/// Sends a command and exits non-zero if the daemon rejects it.
pub(super) fn send(command: &Command) {
    if !ipc::is_daemon_running() {
        eprintln!("hypr-hotspots is not running.");
        std::process::exit(1);
    }

    match ipc::send_command(command) {
        Ok(response) if response.is_ok() => {
            if let Some(msg) = response.message {
                println!("{msg}");
            }
        }
        Ok(response) => {
            eprintln!(
                "Error: {}",
                response.message.unwrap_or("unknown error".into()),
            );
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Failed to send command: {e}");
            std::process::exit(1);
        }
    }
}
