pub fn execute() {
    if let Err(e) = hotspots_hyprland::daemon::run() {
        eprintln!("Daemon error: {e}");
        std::process::exit(1);
    }
}
