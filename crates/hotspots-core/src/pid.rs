use std::fs;
use std::path::PathBuf;

use crate::HotspotsResult;

/// Returns the per-user runtime directory used for the socket and PID file.
///
/// Uses `$XDG_RUNTIME_DIR`, falling back to the system temp directory when
/// the session does not provide one.
pub fn runtime_dir() -> PathBuf {
    dirs::runtime_dir().unwrap_or_else(std::env::temp_dir)
}

/// Returns the path to the PID file.
pub fn pid_path() -> PathBuf {
    runtime_dir().join("hypr-hotspots.pid")
}

/// Writes the current process's PID to the PID file.
///
/// Called when the daemon starts. The PID file lets the CLI find a
/// daemon whose socket no longer answers and terminate it.
pub fn write_pid_file() -> HotspotsResult<()> {
    let path = pid_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, std::process::id().to_string())?;
    Ok(())
}

/// Reads the PID from the PID file, if it exists.
pub fn read_pid_file() -> HotspotsResult<Option<u32>> {
    let path = pid_path();

    if !path.exists() {
        return Ok(None);
    }

    let contents = fs::read_to_string(&path)?;
    let pid: u32 = contents
        .trim()
        .parse()
        .map_err(|e| format!("invalid PID file contents: {e}"))?;

    Ok(Some(pid))
}

/// Removes the PID file.
///
/// Called when the daemon shuts down cleanly.
pub fn remove_pid_file() -> HotspotsResult<()> {
    let path = pid_path();

    if path.exists() {
        fs::remove_file(&path)?;
    }

    Ok(())
}
