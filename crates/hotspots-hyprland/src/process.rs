//! Process lookup and signalling.

use std::fs;
use std::path::Path;

use nix::sys::signal::{self, Signal};
use nix::unistd::Pid;

use hotspots_core::HotspotsResult;

/// The kernel truncates `comm` to 15 bytes.
const COMM_LEN: usize = 15;

/// Returns the lowest PID whose command name equals `name`.
///
/// Scans `/proc/*/comm`, so it sees the same names as `pidof`.
pub fn find_pid(name: &str) -> Option<u32> {
    find_pid_in(Path::new("/proc"), name)
}

fn find_pid_in(proc_root: &Path, name: &str) -> Option<u32> {
    let wanted = truncate_comm(name);
    let mut pids: Vec<u32> = fs::read_dir(proc_root)
        .ok()?
        .filter_map(Result::ok)
        .filter_map(|entry| entry.file_name().to_str()?.parse().ok())
        .collect();
    pids.sort_unstable();

    pids.into_iter().find(|pid| {
        fs::read_to_string(proc_root.join(pid.to_string()).join("comm"))
            .is_ok_and(|comm| comm.trim_end() == wanted)
    })
}

fn truncate_comm(name: &str) -> &str {
    let mut end = name.len().min(COMM_LEN);
    while !name.is_char_boundary(end) {
        end -= 1;
    }
    &name[..end]
}

/// Sends `SIGUSR1`, which bars such as waybar treat as "toggle visibility".
pub fn send_toggle(pid: u32) -> HotspotsResult<()> {
    send(pid, Signal::SIGUSR1)
}

/// Asks a process to exit with `SIGTERM`.
pub fn terminate(pid: u32) -> HotspotsResult<()> {
    send(pid, Signal::SIGTERM)
}

/// Checks whether a process with the given PID is still alive.
///
/// Sends the null signal, which performs the existence and permission
/// checks without delivering anything. Used to detect stale PID files.
pub fn is_process_alive(pid: u32) -> bool {
    let Ok(raw) = i32::try_from(pid) else {
        return false;
    };
    signal::kill(Pid::from_raw(raw), None).is_ok()
}

fn send(pid: u32, sig: Signal) -> HotspotsResult<()> {
    let raw = i32::try_from(pid).map_err(|_| format!("PID {pid} out of range"))?;
    if raw <= 0 {
        return Err(format!("refusing to signal PID {pid}").into());
    }
    signal::kill(Pid::from_raw(raw), sig)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comm_names_are_truncated() {
        assert_eq!(truncate_comm("waybar"), "waybar");
        assert_eq!(truncate_comm("a-very-long-bar-name"), "a-very-long-bar");
    }

    #[test]
    fn finds_lowest_matching_pid() {
        // Arrange
        let root = std::env::temp_dir().join(format!("hotspots-proc-{}", std::process::id()));
        for (pid, comm) in [("300", "waybar\n"), ("42", "waybar\n"), ("7", "kitty\n")] {
            fs::create_dir_all(root.join(pid)).unwrap();
            fs::write(root.join(pid).join("comm"), comm).unwrap();
        }
        fs::create_dir_all(root.join("self")).unwrap();

        // Act
        let waybar = find_pid_in(&root, "waybar");
        let missing = find_pid_in(&root, "eww");

        // Assert
        assert_eq!(waybar, Some(42));
        assert_eq!(missing, None);
        let _ = fs::remove_dir_all(&root);
    }

    #[test]
    fn current_process_is_alive() {
        assert!(is_process_alive(std::process::id()));
    }

    #[test]
    fn pid_zero_is_never_signalled() {
        assert!(send_toggle(0).is_err());
    }
}
