//! Per-monitor tables of hover and command regions.
//!
//! The registry itself is a plain value; callers share it as
//! [`SharedRegistry`] and hold the lock only while iterating. Region
//! lists keep config declaration order, which is also the match order.

use std::sync::{Arc, Mutex};

use crate::rect::{Margins, Rect};
use crate::region::{CommandRegion, HoverRegion, RegionRef};

/// The registry shared between the event thread and timer actions.
pub type SharedRegistry = Arc<Mutex<RegionRegistry>>;

/// Regions registered for a single monitor.
#[derive(Debug, Clone, Default)]
pub struct MonitorRegions {
    pub hover: Vec<HoverRegion>,
    pub command: Vec<CommandRegion>,
}

/// Hover and command regions indexed by monitor id.
#[derive(Debug, Default)]
pub struct RegionRegistry {
    monitors: Vec<MonitorRegions>,
}

impl RegionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps a new empty registry for sharing across threads.
    pub fn shared() -> SharedRegistry {
        Arc::new(Mutex::new(Self::new()))
    }

    /// Appends a hover region to a monitor's list and returns its reference.
    pub fn register_hover_region(
        &mut self,
        monitor: usize,
        rect: Rect,
        process_name: &str,
        margins: Margins,
    ) -> RegionRef {
        let list = &mut self.monitor_mut(monitor).hover;
        list.push(HoverRegion::new(process_name, rect, margins));
        RegionRef::new(monitor, list.len() - 1)
    }

    /// Appends a command region to a monitor's list and returns its reference.
    pub fn register_command_region(
        &mut self,
        monitor: usize,
        rect: Rect,
        enter_command: &str,
        leave_command: Option<&str>,
    ) -> RegionRef {
        let list = &mut self.monitor_mut(monitor).command;
        list.push(CommandRegion::new(
            rect,
            enter_command,
            leave_command.map(str::to_owned),
        ));
        RegionRef::new(monitor, list.len() - 1)
    }

    /// Empties every monitor's lists.
    ///
    /// The per-monitor slots are kept so monitor ids stay addressable.
    pub fn clear_all(&mut self) {
        for monitor in &mut self.monitors {
            monitor.hover.clear();
            monitor.command.clear();
        }
    }

    /// Re-caches the leave margins on every hover region.
    pub fn update_leave_margins(&mut self, margins: Margins) {
        for region in self.monitors.iter_mut().flat_map(|m| m.hover.iter_mut()) {
            region.update_leave_area_cache(margins);
        }
    }

    /// Hover regions for a monitor, empty if none were registered.
    pub fn hover_regions(&self, monitor: usize) -> &[HoverRegion] {
        self.monitors.get(monitor).map_or(&[], |m| m.hover.as_slice())
    }

    /// Command regions for a monitor, empty if none were registered.
    pub fn command_regions(&self, monitor: usize) -> &[CommandRegion] {
        self.monitors
            .get(monitor)
            .map_or(&[], |m| m.command.as_slice())
    }

    pub fn hover_region(&self, r: RegionRef) -> Option<&HoverRegion> {
        self.monitors.get(r.monitor)?.hover.get(r.index)
    }

    pub fn command_region(&self, r: RegionRef) -> Option<&CommandRegion> {
        self.monitors.get(r.monitor)?.command.get(r.index)
    }

    /// Iterates over every hover region on every monitor.
    pub fn all_hover_regions(&self) -> impl Iterator<Item = &HoverRegion> {
        self.monitors.iter().flat_map(|m| m.hover.iter())
    }

    /// Distinct bar process names across all monitors, in first-seen order.
    pub fn process_names(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for region in self.all_hover_regions() {
            if !names.contains(&region.process_name) {
                names.push(region.process_name.clone());
            }
        }
        names
    }

    /// Updates the visibility mirror of every region owned by a process.
    pub fn set_visible(&mut self, process_name: &str, visible: bool) {
        for region in self.monitors.iter_mut().flat_map(|m| m.hover.iter_mut()) {
            if region.process_name == process_name {
                region.visible = visible;
            }
        }
    }

    pub fn hover_count(&self) -> usize {
        self.monitors.iter().map(|m| m.hover.len()).sum()
    }

    pub fn command_count(&self) -> usize {
        self.monitors.iter().map(|m| m.command.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.hover_count() == 0 && self.command_count() == 0
    }

    fn monitor_mut(&mut self, monitor: usize) -> &mut MonitorRegions {
        if self.monitors.len() <= monitor {
            self.monitors.resize_with(monitor + 1, MonitorRegions::default);
        }
        &mut self.monitors[monitor]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_grows_monitor_slots_on_demand() {
        // Arrange
        let mut registry = RegionRegistry::new();

        // Act
        let r = registry.register_hover_region(
            2,
            Rect::new(0, 0, 10, 10),
            "waybar",
            Margins::default(),
        );

        // Assert
        assert_eq!(r, RegionRef::new(2, 0));
        assert_eq!(registry.hover_regions(2).len(), 1);
        assert!(registry.hover_regions(0).is_empty());
        assert!(registry.hover_regions(9).is_empty());
    }

    #[test]
    fn regions_keep_declaration_order() {
        // Arrange
        let mut registry = RegionRegistry::new();

        // Act
        registry.register_hover_region(0, Rect::new(0, 0, 1, 1), "a", Margins::default());
        registry.register_hover_region(0, Rect::new(0, 0, 1, 1), "b", Margins::default());

        // Assert
        let names: Vec<_> = registry
            .hover_regions(0)
            .iter()
            .map(|r| r.process_name.as_str())
            .collect();
        assert_eq!(names, ["a", "b"]);
    }

    #[test]
    fn clear_all_empties_both_lists_on_every_monitor() {
        // Arrange
        let mut registry = RegionRegistry::new();
        registry.register_hover_region(0, Rect::new(0, 0, 1, 1), "a", Margins::default());
        registry.register_command_region(1, Rect::new(0, 0, 1, 1), "echo", None);

        // Act
        registry.clear_all();

        // Assert
        assert!(registry.is_empty());
        assert!(registry.hover_region(RegionRef::new(0, 0)).is_none());
        assert!(registry.command_region(RegionRef::new(1, 0)).is_none());
    }

    #[test]
    fn update_leave_margins_reaches_every_region() {
        // Arrange
        let mut registry = RegionRegistry::new();
        registry.register_hover_region(0, Rect::new(0, 0, 10, 10), "a", Margins::default());
        registry.register_hover_region(3, Rect::new(0, 0, 10, 10), "b", Margins::default());
        let margins = Margins::new(1, 2, 3, 4);

        // Act
        registry.update_leave_margins(margins);

        // Assert
        assert!(registry.all_hover_regions().all(|r| r.margins() == margins));
    }

    #[test]
    fn process_names_are_deduplicated() {
        // Arrange
        let mut registry = RegionRegistry::new();
        registry.register_hover_region(0, Rect::new(0, 0, 1, 1), "waybar", Margins::default());
        registry.register_hover_region(1, Rect::new(0, 0, 1, 1), "waybar", Margins::default());
        registry.register_hover_region(1, Rect::new(0, 0, 1, 1), "eww", Margins::default());

        // Act / Assert
        assert_eq!(registry.process_names(), ["waybar", "eww"]);
    }

    #[test]
    fn set_visible_only_touches_matching_process() {
        // Arrange
        let mut registry = RegionRegistry::new();
        registry.register_hover_region(0, Rect::new(0, 0, 1, 1), "waybar", Margins::default());
        registry.register_hover_region(1, Rect::new(0, 0, 1, 1), "waybar", Margins::default());
        registry.register_hover_region(1, Rect::new(0, 0, 1, 1), "eww", Margins::default());

        // Act
        registry.set_visible("waybar", true);

        // Assert
        let visible: Vec<_> = registry.all_hover_regions().map(|r| r.visible).collect();
        assert_eq!(visible, [true, true, false]);
    }

    #[test]
    fn command_region_with_empty_leave_has_no_leave_action() {
        // Arrange
        let mut registry = RegionRegistry::new();

        // Act
        let r = registry.register_command_region(0, Rect::new(0, 0, 1, 1), "echo in", Some(""));

        // Assert
        let region = registry.command_region(r).unwrap();
        assert_eq!(region.enter_command, "echo in");
        assert!(region.leave_command.is_none());
    }
}
