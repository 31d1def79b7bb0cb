use std::process::{Command, Stdio};
use std::thread;

use hotspots_core::HotspotsResult;

/// Runs `command` through `sh -c` without waiting for it.
///
/// A short-lived reaper thread waits on the child so no zombie is left
/// behind; its exit status is only logged.
pub fn run_detached(command: &str) -> HotspotsResult<()> {
    let mut child = Command::new("sh")
        .arg("-c")
        .arg(command)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;

    let label = command.to_owned();
    thread::Builder::new()
        .name("hotspots-reaper".into())
        .spawn(move || match child.wait() {
            Ok(status) if !status.success() => {
                hotspots_core::log_debug!("`{label}` exited with {status}");
            }
            Ok(_) => {}
            Err(e) => hotspots_core::log_warn!("Failed to wait for `{label}`: {e}"),
        })?;
    Ok(())
}
