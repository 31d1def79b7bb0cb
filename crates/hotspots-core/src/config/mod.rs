pub mod directive;
mod loader;
pub mod template;

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::log::LogConfig;
use crate::rect::Margins;

pub use directive::{CommandDirective, HoverDirective, parse_command, parse_hover};
pub use loader::{config_dir, config_path, load_with_warning, try_load};

/// Largest accepted leave margin, in pixels.
const MAX_MARGIN: i64 = 10_000;

/// Top-level configuration for hypr-hotspots.
///
/// Loaded from `~/.config/hypr-hotspots/config.toml`. Missing keys
/// fall back to defaults thanks to `#[serde(default)]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Key name gating the bar (e.g. "Super_L"). Empty disables it.
    pub toggle_bind: String,
    /// "hold" or "press". Ignored when `toggle_bind` is empty.
    pub toggle_mode: String,
    /// Milliseconds to wait before hiding after the cursor leaves.
    pub hide_delay: i64,
    /// Briefly reveal the bars after switching workspaces.
    pub show_on_workspace_change: bool,
    /// Minimum interval between processed mouse samples, in ms.
    pub mouse_sample_ms: u64,
    /// Bar regions: `monitor,x,y,width,height[,process_name]`.
    #[serde(rename = "hypr-waybar-region")]
    pub waybar_regions: Vec<String>,
    /// Command hotspots: `monitor,x,y,width,height,enter[,leave]`.
    #[serde(rename = "hypr-command-region")]
    pub command_regions: Vec<String>,
    /// How far the leave area extends beyond each bar region.
    pub leave_expand: LeaveExpandConfig,
    /// File logging.
    pub logging: LogConfig,
}

/// Leave-area margins in pixels.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LeaveExpandConfig {
    pub left: i64,
    pub right: i64,
    pub up: i64,
    pub down: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            toggle_bind: String::new(),
            toggle_mode: "hold".into(),
            hide_delay: 0,
            show_on_workspace_change: true,
            mouse_sample_ms: 16,
            waybar_regions: Vec::new(),
            command_regions: Vec::new(),
            leave_expand: LeaveExpandConfig::default(),
            logging: LogConfig::default(),
        }
    }
}

impl Config {
    /// Clamps values to safe ranges.
    ///
    /// Negative delays and margins become zero so the leave area can
    /// never be smaller than the enter area.
    pub fn validate(&mut self) {
        self.hide_delay = self.hide_delay.max(0);
        self.mouse_sample_ms = self.mouse_sample_ms.clamp(1, 1000);
        for margin in [
            &mut self.leave_expand.left,
            &mut self.leave_expand.right,
            &mut self.leave_expand.up,
            &mut self.leave_expand.down,
        ] {
            *margin = (*margin).clamp(0, MAX_MARGIN);
        }
    }

    pub fn hide_delay(&self) -> Duration {
        Duration::from_millis(u64::try_from(self.hide_delay).unwrap_or(0))
    }

    pub fn mouse_sample_interval(&self) -> Duration {
        Duration::from_millis(self.mouse_sample_ms)
    }

    /// Leave margins, clamped into range.
    pub fn leave_margins(&self) -> Margins {
        let m = |v: i64| u32::try_from(v.clamp(0, MAX_MARGIN)).unwrap_or(0);
        Margins::new(
            m(self.leave_expand.left),
            m(self.leave_expand.right),
            m(self.leave_expand.up),
            m(self.leave_expand.down),
        )
    }
}

#[cfg(test)]
mod tests;
