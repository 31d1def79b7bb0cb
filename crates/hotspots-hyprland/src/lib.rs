/// File watcher for hot-reloading the config.
pub mod config_watcher;

/// Cursor position queries.
pub mod cursor;

/// Daemon main loop.
pub mod daemon;

/// Event socket listener.
pub mod events;

/// [`hotspots_core::Host`] implementation for Hyprland.
pub mod host;

/// Request socket client.
pub mod hyprctl;

/// IPC via a Unix domain socket.
pub mod ipc;

/// Key name to keycode mapping.
pub mod keys;

/// Layer surface visibility.
pub mod layers;

/// Monitor enumeration.
pub mod monitor;

/// Process lookup and signalling.
pub mod process;

/// Detached shell commands.
pub mod shell;

/// Termination signal handling.
pub mod signals;

pub use host::HyprlandHost;
