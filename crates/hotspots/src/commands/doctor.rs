use hotspots_core::config::{self, CommandDirective, HoverDirective};
use hotspots_core::{Config, MonitorInfo, pid};
use hotspots_hyprland::{hyprctl, ipc, keys, monitor, process};

/// ANSI escape helpers for doctor output.
const OK: &str = "\x1b[32m[ok]\x1b[0m";
const WARN: &str = "\x1b[33m[warn]\x1b[0m";
const FAIL: &str = "\x1b[31m[fail]\x1b[0m";
const FIXED: &str = "\x1b[36m[fixed]\x1b[0m";

pub fn execute() {
    println!();
    check_config_dir();
    let config = check_config_file();
    let monitors = check_hyprland();
    if let Some(monitors) = &monitors {
        check_regions(&config, monitors);
    }
    check_bars(&config);
    check_toggle_key(&config);
    check_daemon();
    println!();
}

fn check_config_dir() {
    match config::config_dir() {
        Some(dir) if dir.is_dir() => {
            println!("  {OK} Config directory exists ({})", dir.display());
        }
        Some(dir) => match std::fs::create_dir_all(&dir) {
            Ok(()) => {
                println!("  {FIXED} Created config directory ({})", dir.display());
            }
            Err(e) => {
                println!("  {FAIL} Config directory missing and could not create it: {e}");
            }
        },
        None => {
            println!("  {FAIL} Could not determine home directory");
        }
    }
}

fn check_config_file() -> Config {
    let Some(path) = config::config_path() else {
        println!("  {FAIL} Could not determine config path");
        return Config::default();
    };
    if !path.exists() {
        println!("  {WARN} config.toml not found (run 'hypr-hotspots init')");
        return Config::default();
    }
    match config::try_load() {
        Ok(config) => {
            println!("  {OK} config.toml is valid");
            config
        }
        Err(e) => {
            println!("  {FAIL} config.toml: {e}");
            Config::default()
        }
    }
}

fn check_hyprland() -> Option<Vec<MonitorInfo>> {
    if let Err(e) = hyprctl::instance_dir() {
        println!("  {FAIL} Hyprland instance not found: {e}");
        return None;
    }
    match monitor::enumerate_monitors() {
        Ok(monitors) => {
            let names: Vec<_> = monitors.iter().map(|m| m.name.as_str()).collect();
            println!(
                "  {OK} Hyprland is reachable, {} monitor(s): {}",
                monitors.len(),
                names.join(", ")
            );
            Some(monitors)
        }
        Err(e) => {
            println!("  {FAIL} Could not query Hyprland monitors: {e}");
            None
        }
    }
}

fn check_regions(config: &Config, monitors: &[MonitorInfo]) {
    let mut problems = Vec::new();
    let mut monitor_names = Vec::new();

    for value in &config.waybar_regions {
        match config::parse_hover(value) {
            Ok(HoverDirective { monitor, .. }) => monitor_names.push(monitor),
            Err(e) => problems.push(e.to_string()),
        }
    }
    for value in &config.command_regions {
        match config::parse_command(value) {
            Ok(CommandDirective { monitor, .. }) => monitor_names.push(monitor),
            Err(e) => problems.push(e.to_string()),
        }
    }
    for name in monitor_names {
        if !monitors.iter().any(|m| m.name == name) {
            problems.push(format!("no monitor with name {name} was found"));
        }
    }

    let total = config.waybar_regions.len() + config.command_regions.len();
    if total == 0 {
        println!("  {WARN} No regions configured");
    } else if problems.is_empty() {
        println!("  {OK} All {total} region(s) are valid");
    } else {
        for problem in problems {
            println!("  {FAIL} {problem}");
        }
    }
}

fn check_bars(config: &Config) {
    for value in &config.waybar_regions {
        let Ok(directive) = config::parse_hover(value) else {
            continue;
        };
        match process::find_pid(&directive.process_name) {
            Some(pid) => println!("  {OK} {} is running (PID: {pid})", directive.process_name),
            None => println!("  {WARN} {} is not running", directive.process_name),
        }
    }
}

fn check_toggle_key(config: &Config) {
    let bind = config.toggle_bind.trim();
    if bind.is_empty() {
        println!("  {OK} No toggle key configured (bars show on hover)");
        return;
    }
    if keys::keycode_from_name(bind).is_some() {
        println!("  {OK} Toggle key '{bind}' ({})", config.toggle_mode);
    } else {
        println!("  {FAIL} Toggle key '{bind}' is not a known key name");
    }
    if hotspots_core::ToggleMode::parse(&config.toggle_mode).is_none() {
        println!(
            "  {FAIL} toggle_mode '{}' must be 'hold' or 'press'",
            config.toggle_mode
        );
    }
}

fn check_daemon() {
    if ipc::is_daemon_running() {
        if let Ok(Some(pid)) = pid::read_pid_file() {
            println!("  {OK} Daemon is running (PID: {pid})");
        } else {
            println!("  {OK} Daemon is running");
        }
        return;
    }
    if let Ok(Some(pid)) = pid::read_pid_file() {
        if process::is_process_alive(pid) {
            println!("  {WARN} Process exists (PID: {pid}) but not responding");
        } else {
            let _ = pid::remove_pid_file();
            println!("  {FIXED} Removed stale PID file (PID: {pid})");
        }
    } else {
        println!("  {WARN} Daemon is not running");
    }
}
