use serde::Deserialize;

use hotspots_core::{HotspotsResult, MonitorInfo, Rect};

use crate::hyprctl;

/// A monitor as reported by `j/monitors`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HyprMonitor {
    pub id: i64,
    pub name: String,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    #[serde(default = "default_scale")]
    pub scale: f64,
    #[serde(default)]
    pub transform: u32,
    pub active_workspace: WorkspaceRef,
    #[serde(default)]
    pub focused: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WorkspaceRef {
    pub id: i64,
}

/// A workspace as reported by `j/workspaces`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "lowercase")]
pub struct HyprWorkspace {
    pub id: i64,
    #[serde(default)]
    pub hasfullscreen: bool,
}

fn default_scale() -> f64 {
    1.0
}

impl HyprMonitor {
    /// Position and size in logical (scaled) pixels.
    ///
    /// Hyprland reports the mode in physical pixels; transforms 1, 3, 5
    /// and 7 rotate by 90 or 270 degrees and swap the axes.
    pub fn logical_bounds(&self) -> Rect {
        let scale = if self.scale > 0.0 { self.scale } else { 1.0 };
        let (w, h) = if self.transform % 2 == 1 {
            (self.height, self.width)
        } else {
            (self.width, self.height)
        };
        Rect::new(
            self.x,
            self.y,
            (f64::from(w) / scale).round() as i32,
            (f64::from(h) / scale).round() as i32,
        )
    }

    fn to_info(&self, workspaces: &[HyprWorkspace]) -> Option<MonitorInfo> {
        let id = usize::try_from(self.id).ok()?;
        let has_fullscreen = workspaces
            .iter()
            .any(|ws| ws.id == self.active_workspace.id && ws.hasfullscreen);
        Some(MonitorInfo {
            id,
            name: self.name.clone(),
            bounds: self.logical_bounds(),
            has_fullscreen,
        })
    }
}

/// Combines raw monitor and workspace lists into [`MonitorInfo`]s.
pub fn monitor_infos(monitors: &[HyprMonitor], workspaces: &[HyprWorkspace]) -> Vec<MonitorInfo> {
    monitors
        .iter()
        .filter_map(|m| m.to_info(workspaces))
        .collect()
}

/// Queries the compositor for every connected monitor.
pub fn enumerate_monitors() -> HotspotsResult<Vec<MonitorInfo>> {
    let monitors: Vec<HyprMonitor> = hyprctl::request_json("monitors")?;
    let workspaces: Vec<HyprWorkspace> = hyprctl::request_json("workspaces")?;
    Ok(monitor_infos(&monitors, &workspaces))
}

#[cfg(test)]
mod tests {
    use super::*;

    const MONITORS: &str = r#"[
        {"id": 0, "name": "eDP-1", "x": 0, "y": 0, "width": 2880, "height": 1800,
         "scale": 2.0, "transform": 0, "focused": true,
         "activeWorkspace": {"id": 1, "name": "1"}},
        {"id": 1, "name": "DP-2", "x": 1440, "y": 0, "width": 2560, "height": 1440,
         "scale": 1.0, "transform": 1, "focused": false,
         "activeWorkspace": {"id": 4, "name": "4"}}
    ]"#;

    const WORKSPACES: &str = r#"[
        {"id": 1, "name": "1", "monitor": "eDP-1", "hasfullscreen": false},
        {"id": 4, "name": "4", "monitor": "DP-2", "hasfullscreen": true}
    ]"#;

    fn parsed() -> Vec<MonitorInfo> {
        let monitors: Vec<HyprMonitor> = serde_json::from_str(MONITORS).unwrap();
        let workspaces: Vec<HyprWorkspace> = serde_json::from_str(WORKSPACES).unwrap();
        monitor_infos(&monitors, &workspaces)
    }

    #[test]
    fn scaled_monitor_uses_logical_size() {
        // Act
        let infos = parsed();

        // Assert
        assert_eq!(infos[0].bounds, Rect::new(0, 0, 1440, 900));
        assert_eq!(infos[0].name, "eDP-1");
    }

    #[test]
    fn rotated_monitor_swaps_axes() {
        // Act
        let infos = parsed();

        // Assert
        assert_eq!(infos[1].bounds, Rect::new(1440, 0, 1440, 2560));
    }

    #[test]
    fn fullscreen_follows_active_workspace() {
        // Act
        let infos = parsed();

        // Assert
        assert!(!infos[0].has_fullscreen);
        assert!(infos[1].has_fullscreen);
    }

    #[test]
    fn negative_ids_are_skipped() {
        // Arrange
        let json = r#"[{"id": -1, "name": "FALLBACK", "x": 0, "y": 0, "width": 1, "height": 1,
                        "activeWorkspace": {"id": 1}}]"#;
        let monitors: Vec<HyprMonitor> = serde_json::from_str(json).unwrap();

        // Act
        let infos = monitor_infos(&monitors, &[]);

        // Assert
        assert!(infos.is_empty());
    }
}
