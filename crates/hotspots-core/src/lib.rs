pub mod config;
pub mod debounce;
pub mod error;
pub mod event;
pub mod host;
pub mod hotspots;
pub mod hover;
pub mod ipc;
pub mod keybind;
pub mod log;
pub mod pid;
pub mod rect;
pub mod region;
pub mod registry;
pub mod timer;

#[cfg(test)]
pub(crate) mod testing;

pub use config::Config;
pub use error::{ConfigError, HotspotsResult};
pub use event::HostEvent;
pub use host::{Host, MonitorInfo};
pub use hotspots::{Hotspots, HotspotsStatus};
pub use ipc::{Command, Response, SOCKET_NAME};
pub use keybind::ToggleMode;
pub use rect::{Margins, Point, Rect};
