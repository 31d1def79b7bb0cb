use hotspots_core::pid;
use hotspots_core::{Command, Response};
use hotspots_hyprland::{ipc, process};

pub fn execute() {
    // Try graceful shutdown via IPC first.
    if ipc::is_daemon_running() {
        match ipc::send_command(&Command::Stop) {
            Ok(response) if response.is_ok() => {
                println!("hypr-hotspots stopped. {}", message(response));
                let _ = pid::remove_pid_file();
                return;
            }
            Ok(response) => {
                eprintln!("Error: {}", message(response));
                return;
            }
            Err(e) => eprintln!("IPC failed: {e}"),
        }
    }

    // The socket is gone but the process may still be alive. The daemon
    // shuts down cleanly on SIGTERM too.
    match pid::read_pid_file() {
        Ok(Some(pid)) if process::is_process_alive(pid) => match process::terminate(pid) {
            Ok(()) => {
                let _ = pid::remove_pid_file();
                println!("hypr-hotspots stopped (sent SIGTERM to PID {pid}).");
            }
            Err(e) => {
                eprintln!("Failed to signal process {pid}: {e}");
                std::process::exit(1);
            }
        },
        _ => println!("hypr-hotspots is not running."),
    }
}

fn message(response: Response) -> String {
    response.message.unwrap_or_default()
}
