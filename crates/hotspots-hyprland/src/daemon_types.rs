use std::sync::mpsc;

use hotspots_core::ipc::{Command, Response};
use hotspots_core::{Config, Point};

use crate::events::HyprEvent;

/// Internal message type for the main daemon thread.
pub(super) enum DaemonMsg {
    /// A new cursor position from the poller.
    Cursor(Point),
    /// A compositor event from the event socket.
    Hypr(HyprEvent),
    /// A CLI command with a callback to send the response.
    Command(Command, ResponseSender),
    /// A validated config reload from the file watcher.
    Reload(Box<Config>),
    /// A termination signal was received.
    Terminate,
}

/// Sends a response back to the IPC thread for the connected client.
pub(super) type ResponseSender = mpsc::Sender<Response>;
