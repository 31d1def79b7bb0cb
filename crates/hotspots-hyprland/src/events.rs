//! Listener for Hyprland's event socket.
//!
//! `.socket2.sock` streams one `EVENT>>DATA` line per compositor event.
//! Only the events that matter for hotspots are translated.

use std::io::{BufRead, BufReader};
use std::os::unix::net::UnixStream;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::time::Duration;

use hotspots_core::HotspotsResult;

use crate::hyprctl;

/// How often a blocked read wakes up to check the stop flag.
const READ_TIMEOUT: Duration = Duration::from_secs(1);

/// A compositor event the daemon reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HyprEvent {
    /// The active workspace changed.
    WorkspaceChanged,
    /// Keyboard focus moved to another monitor. The workspace itself did
    /// not change, so bars are not revealed.
    MonitorFocusChanged,
    /// A window entered or left fullscreen.
    FullscreenChanged,
    /// A monitor was connected or disconnected.
    MonitorsChanged,
}

/// Translates one event line.
pub fn parse_event(line: &str) -> Option<HyprEvent> {
    let (name, _data) = line.split_once(">>")?;
    match name {
        // Hyprland sends a v1 and a v2 line per change; only v2 is used.
        "workspacev2" => Some(HyprEvent::WorkspaceChanged),
        "focusedmonv2" => Some(HyprEvent::MonitorFocusChanged),
        "fullscreen" => Some(HyprEvent::FullscreenChanged),
        "monitoradded" | "monitoraddedv2" | "monitorremoved" | "monitorremovedv2" => {
            Some(HyprEvent::MonitorsChanged)
        }
        _ => None,
    }
}

/// Reads events until the stop flag is set or the receiver goes away.
pub fn listen(tx: Sender<HyprEvent>, stop: Arc<AtomicBool>) -> HotspotsResult<()> {
    let stream = UnixStream::connect(hyprctl::event_socket()?)?;
    stream.set_read_timeout(Some(READ_TIMEOUT))?;
    let mut reader = BufReader::new(stream);
    let mut line = String::new();

    while !stop.load(Ordering::Relaxed) {
        match reader.read_line(&mut line) {
            Ok(0) => return Err("Hyprland closed the event socket".into()),
            Ok(_) => {}
            Err(e)
                if matches!(
                    e.kind(),
                    std::io::ErrorKind::WouldBlock | std::io::ErrorKind::TimedOut
                ) =>
            {
                continue;
            }
            Err(e) => return Err(e.into()),
        }

        // A timed-out read keeps its partial line; clear only once complete.
        let event = parse_event(line.trim_end());
        line.clear();
        if let Some(event) = event
            && tx.send(event).is_err()
        {
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn workspace_events_are_recognised() {
        assert_eq!(
            parse_event("workspacev2>>3,code"),
            Some(HyprEvent::WorkspaceChanged)
        );
    }

    #[test]
    fn monitor_focus_is_not_a_workspace_change() {
        assert_eq!(
            parse_event("focusedmonv2>>DP-1,2"),
            Some(HyprEvent::MonitorFocusChanged)
        );
    }

    #[test]
    fn fullscreen_and_monitor_events() {
        assert_eq!(parse_event("fullscreen>>1"), Some(HyprEvent::FullscreenChanged));
        assert_eq!(
            parse_event("monitorremovedv2>>1,HDMI-A-1,desc"),
            Some(HyprEvent::MonitorsChanged)
        );
    }

    #[test]
    fn unrelated_and_malformed_lines_are_ignored() {
        assert_eq!(parse_event("openwindow>>abc,1,kitty,kitty"), None);
        assert_eq!(parse_event("garbage"), None);
    }

    #[test]
    fn v1_duplicates_are_dropped() {
        assert_eq!(parse_event("workspace>>3"), None);
        assert_eq!(parse_event("focusedmon>>DP-1,3"), None);
    }
}
