use crate::rect::{Margins, Point, Rect};

/// Process name used when a bar directive omits one.
pub const DEFAULT_PROCESS_NAME: &str = "waybar";

/// A stable reference to a region: monitor index plus position in that
/// monitor's list.
///
/// References are invalidated in bulk by a registry reload, so holders
/// must drop them whenever the registry is cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegionRef {
    pub monitor: usize,
    pub index: usize,
}

impl RegionRef {
    pub fn new(monitor: usize, index: usize) -> Self {
        Self { monitor, index }
    }
}

/// A screen area that reveals an auto-hidden bar when hovered.
#[derive(Debug, Clone, PartialEq)]
pub struct HoverRegion {
    /// Name of the bar process (also its layer-surface namespace).
    pub process_name: String,
    /// Enter area in monitor-local logical pixels.
    pub rect: Rect,
    /// Last-known bar visibility, refreshed whenever it is queried.
    pub visible: bool,
    margins: Margins,
    leave_rect: Rect,
}

impl HoverRegion {
    pub fn new(process_name: impl Into<String>, rect: Rect, margins: Margins) -> Self {
        Self {
            process_name: process_name.into(),
            rect,
            visible: false,
            margins,
            leave_rect: rect.expand(&margins),
        }
    }

    /// Returns whether the point is inside the exact configured rectangle.
    pub fn is_in_enter_area(&self, point: Point) -> bool {
        self.rect.contains(point)
    }

    /// Returns whether the point is inside the margin-expanded rectangle.
    ///
    /// Uses the cached leave rectangle; nothing is recomputed per call.
    pub fn is_in_leave_area(&self, point: Point) -> bool {
        self.leave_rect.contains(point)
    }

    /// Refreshes the cached leave rectangle after a config reload.
    pub fn update_leave_area_cache(&mut self, margins: Margins) {
        self.margins = margins;
        self.leave_rect = self.rect.expand(&margins);
    }

    pub fn margins(&self) -> Margins {
        self.margins
    }

    pub fn leave_rect(&self) -> Rect {
        self.leave_rect
    }
}

/// A hotspot that runs shell commands when the cursor enters or leaves it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandRegion {
    pub rect: Rect,
    pub enter_command: String,
    /// `None` means leaving does nothing.
    pub leave_command: Option<String>,
}

impl CommandRegion {
    pub fn new(rect: Rect, enter_command: impl Into<String>, leave_command: Option<String>) -> Self {
        Self {
            rect,
            enter_command: enter_command.into(),
            leave_command: leave_command.filter(|c| !c.is_empty()),
        }
    }

    pub fn is_in_area(&self, point: Point) -> bool {
        self.rect.contains(point)
    }
}
