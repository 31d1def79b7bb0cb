use hotspots_core::Command;

/// Asks the running daemon to re-read its config file.
pub fn execute() {
    super::key::send(&Command::Reload);
}
