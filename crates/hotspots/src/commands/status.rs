use hotspots_core::pid;
use hotspots_core::Command;
use hotspots_hyprland::{ipc, process};

pub fn execute() {
    if ipc::is_daemon_running() {
        match ipc::send_command(&Command::Status) {
            Ok(response) => println!(
                "{}",
                response
                    .message
                    .unwrap_or_else(|| "hypr-hotspots is running.".into())
            ),
            Err(_) => println!("hypr-hotspots is running."),
        }
        return;
    }

    // Socket isn't responding; check if a stale PID file was left behind
    // by a daemon that was killed without a clean shutdown.
    if let Ok(Some(pid)) = pid::read_pid_file() {
        if process::is_process_alive(pid) {
            println!("hypr-hotspots process exists (PID: {pid}) but is not responding.");
        } else {
            let _ = pid::remove_pid_file();
            println!("hypr-hotspots is not running (cleaned up stale PID file).");
        }
    } else {
        println!("hypr-hotspots is not running.");
    }
}
