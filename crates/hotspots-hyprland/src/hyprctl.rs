//! Requests over Hyprland's command socket.
//!
//! Each request opens a fresh connection to `.socket.sock`, writes the
//! command, and reads until the compositor closes the stream. Prefixing
//! a command with `j/` asks for JSON output.

use std::io::{Read, Write};
use std::os::unix::net::UnixStream;
use std::path::PathBuf;
use std::time::Duration;

use serde::de::DeserializeOwned;

use hotspots_core::HotspotsResult;

const REQUEST_SOCKET: &str = ".socket.sock";
const EVENT_SOCKET: &str = ".socket2.sock";
const IO_TIMEOUT: Duration = Duration::from_secs(2);

/// Notification duration in milliseconds.
const NOTIFY_MS: u32 = 5000;
/// Red, matching compositor error notifications.
const NOTIFY_COLOR: &str = "rgb(ff3333)";

/// Returns the socket directory of the running Hyprland instance.
pub fn instance_dir() -> HotspotsResult<PathBuf> {
    let signature = std::env::var("HYPRLAND_INSTANCE_SIGNATURE")
        .map_err(|_| "HYPRLAND_INSTANCE_SIGNATURE is not set; is Hyprland running?")?;
    let runtime = std::env::var("XDG_RUNTIME_DIR").map_err(|_| "XDG_RUNTIME_DIR is not set")?;
    Ok(PathBuf::from(runtime).join("hypr").join(signature))
}

/// Path of the request socket.
pub fn request_socket() -> HotspotsResult<PathBuf> {
    Ok(instance_dir()?.join(REQUEST_SOCKET))
}

/// Path of the event socket.
pub fn event_socket() -> HotspotsResult<PathBuf> {
    Ok(instance_dir()?.join(EVENT_SOCKET))
}

/// Sends one request and returns the raw reply.
pub fn request(command: &str) -> HotspotsResult<String> {
    let mut stream = UnixStream::connect(request_socket()?)?;
    stream.set_read_timeout(Some(IO_TIMEOUT))?;
    stream.set_write_timeout(Some(IO_TIMEOUT))?;
    stream.write_all(command.as_bytes())?;

    let mut reply = String::new();
    stream.read_to_string(&mut reply)?;
    Ok(reply)
}

/// Sends a `j/` request and decodes the JSON reply.
pub fn request_json<T: DeserializeOwned>(command: &str) -> HotspotsResult<T> {
    let reply = request(&format!("j/{command}"))?;
    serde_json::from_str(&reply).map_err(|e| format!("bad reply to {command}: {e}").into())
}

/// Shows an on-screen notification.
pub fn notify(message: &str) -> HotspotsResult<()> {
    let reply = request(&notify_command(message))?;
    if reply.trim() != "ok" {
        return Err(format!("notify failed: {}", reply.trim()).into());
    }
    Ok(())
}

fn notify_command(message: &str) -> String {
    // Newlines would end the request early.
    let message = message.replace('\n', " ");
    format!("notify -1 {NOTIFY_MS} {NOTIFY_COLOR} {message}")
}
