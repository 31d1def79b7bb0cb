use std::process::{Command, Stdio};

use hotspots_core::pid;
use hotspots_hyprland::{ipc, process};

pub fn execute() {
    if ipc::is_daemon_running() {
        println!("hypr-hotspots is already running.");
        return;
    }

    // Clean up stale PID file from a previous unclean shutdown
    if let Ok(Some(pid)) = pid::read_pid_file() {
        if process::is_process_alive(pid) {
            println!("hypr-hotspots process exists (PID: {pid}) but is not responding.");
            return;
        }
        let _ = pid::remove_pid_file();
    }

    let exe = match std::env::current_exe() {
        Ok(exe) => exe,
        Err(e) => {
            eprintln!("Error: could not locate the current executable: {e}");
            std::process::exit(1);
        }
    };

    // Re-run ourselves with the hidden `daemon` subcommand. Null stdio
    // lets the CLI exit without waiting on inherited handles.
    let child = Command::new(exe)
        .arg("daemon")
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn();

    match child {
        Ok(mut child) => {
            let pid = child.id();
            let _ = child.try_wait();
            println!("hypr-hotspots started (PID: {pid}).");
            if let Some(dir) = hotspots_core::config::config_dir() {
                println!("Config: {}", dir.join("config.toml").display());
            }
        }
        Err(e) => {
            eprintln!("Error: failed to start daemon: {e}");
            std::process::exit(1);
        }
    }
}
