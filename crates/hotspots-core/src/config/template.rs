/// Generates the default `config.toml` contents with explanatory comments.
///
/// This is used by `hypr-hotspots init` to create a starter config file
/// that users can immediately edit.
pub fn generate_config() -> String {
    r##"# hypr-hotspots configuration
# Location: ~/.config/hypr-hotspots/config.toml
# Changes are picked up automatically while the daemon runs.

# Key that gates showing the bar on hover (e.g. "Super_L", "Alt_R").
# Leave empty to show the bar whenever a region is hovered.
toggle_bind = ""
# "hold": the bar may show only while the key is held.
# "press": each key release toggles whether the bar may show.
toggle_mode = "hold"
# Milliseconds to wait after the cursor leaves before hiding. 0 hides at once.
hide_delay = 0
# Reveal the bars for a moment after switching workspaces (needs hide_delay > 0).
show_on_workspace_change = true
# Minimum interval between processed cursor samples (16 ms is about 60 Hz).
mouse_sample_ms = 16

# Bar regions: "monitor,x,y,width,height[,process_name]".
# Coordinates are monitor-local logical pixels; process_name defaults to waybar.
# The bar process must toggle its visibility on SIGUSR1.
hypr-waybar-region = [
    # "DP-1,0,0,1920,5",
]

# Command hotspots: "monitor,x,y,width,height,enter_command[,leave_command]".
# Everything after the fifth comma is command text; the next comma
# separates the enter command from the leave command.
hypr-command-region = [
    # "DP-1,0,1075,5,5,notify-send 'bottom-left corner'",
]

# Extra pixels around each bar region that keep the bar shown
# once it has been revealed. "up" grows toward the top of the screen.
[leave_expand]
left = 0
right = 0
up = 0
down = 0

[logging]
# Enable file logging to ~/.config/hypr-hotspots/logs/hypr-hotspots.log.
enabled = false
# Minimum log level: "debug", "info", "warn", or "error".
level = "info"
# Maximum log file size in MB before rotation.
max_file_mb = 10
"##
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_config_parses_to_defaults() {
        // Act
        let config = crate::config::loader::parse(&generate_config()).unwrap();

        // Assert
        assert_eq!(config.toggle_mode, "hold");
        assert_eq!(config.hide_delay, 0);
        assert!(config.show_on_workspace_change);
        assert!(config.waybar_regions.is_empty());
        assert!(config.command_regions.is_empty());
        assert!(!config.logging.enabled);
    }
}
