//! Enter/leave edge detection for hover and command regions.
//!
//! The tracker is pure bookkeeping: it reads region lists, compares the
//! new sample against the previous one and reports what should happen.
//! Acting on the result (toggling bars, arming timers, running commands)
//! is left to [`crate::Hotspots`] so the region lock is never held across
//! an external call.

use std::time::{Duration, Instant};

use crate::rect::Point;
use crate::region::{CommandRegion, HoverRegion, RegionRef};

/// Where the cursor sits relative to the hover regions of its monitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverZone {
    Outside,
    InLeaveOnly,
    InEnter,
}

/// What the hover regions want done after a sample.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HoverStep {
    /// The region under the cursor, if any.
    pub region: Option<RegionRef>,
    /// Cancel any pending hide timer.
    pub cancel_hide: bool,
    /// Show `region`'s bar if permitted and not already visible.
    pub show: bool,
    /// The cursor left every leave area: start the hide timer.
    pub start_hide: bool,
}

/// Command-region transitions, in the order they must run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommandStep {
    pub leave: Option<RegionRef>,
    pub enter: Option<RegionRef>,
}

/// Per-cycle tracking state carried between samples.
#[derive(Debug, Clone, Default)]
pub struct HoverTracker {
    hovered_region: Option<RegionRef>,
    hovered_command_region: Option<RegionRef>,
    was_in_leave_area: bool,
    was_in_enter_area: bool,
}

impl HoverTracker {
    /// Classifies a point against a monitor's hover regions.
    ///
    /// First match wins in list order, and a region's enter area is
    /// checked before its leave area.
    pub fn locate(regions: &[HoverRegion], point: Point) -> (HoverZone, Option<usize>) {
        for (index, region) in regions.iter().enumerate() {
            if region.is_in_enter_area(point) {
                return (HoverZone::InEnter, Some(index));
            }
            if region.is_in_leave_area(point) {
                return (HoverZone::InLeaveOnly, Some(index));
            }
        }
        (HoverZone::Outside, None)
    }

    /// Advances the hover state for one sample and reports the actions.
    pub fn update_hover(
        &mut self,
        monitor: usize,
        regions: &[HoverRegion],
        point: Point,
    ) -> HoverStep {
        let (zone, index) = Self::locate(regions, point);
        let region = index.map(|i| RegionRef::new(monitor, i));
        let is_in_enter = zone == HoverZone::InEnter;
        let is_in_leave = zone != HoverZone::Outside;

        let previous = self.hovered_region;
        let was_in_leave = self.was_in_leave_area;
        let was_in_enter = self.was_in_enter_area;

        let mut step = HoverStep {
            region,
            ..HoverStep::default()
        };

        if is_in_leave {
            step.cancel_hide = true;
            // Show on the enter edge, or when sliding straight from one
            // region's enter area into another's.
            step.show = is_in_enter && (!was_in_enter || previous != region);
        } else if was_in_leave {
            step.start_hide = true;
        }

        self.hovered_region = region;
        self.was_in_leave_area = is_in_leave;
        self.was_in_enter_area = is_in_enter;
        step
    }

    /// Advances the command-region state for one sample.
    pub fn update_commands(
        &mut self,
        monitor: usize,
        regions: &[CommandRegion],
        point: Point,
    ) -> CommandStep {
        let current = regions
            .iter()
            .position(|r| r.is_in_area(point))
            .map(|i| RegionRef::new(monitor, i));
        let previous = self.hovered_command_region;
        self.hovered_command_region = current;

        if current == previous {
            return CommandStep::default();
        }
        CommandStep {
            leave: previous,
            enter: current,
        }
    }

    /// Forgets everything. Called whenever the registry is rebuilt.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn hovered_region(&self) -> Option<RegionRef> {
        self.hovered_region
    }

    pub fn is_in_leave_area(&self) -> bool {
        self.was_in_leave_area
    }
}

/// Drops mouse samples that arrive faster than the configured interval.
#[derive(Debug, Clone)]
pub struct MouseThrottle {
    interval: Duration,
    last: Option<Instant>,
}

impl MouseThrottle {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last: None,
        }
    }

    /// Returns `true` if a sample taken at `now` should be processed.
    pub fn accept(&mut self, now: Instant) -> bool {
        if let Some(last) = self.last
            && now.saturating_duration_since(last) < self.interval
        {
            return false;
        }
        self.last = Some(now);
        true
    }

    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
    }
}

#[cfg(test)]
#[path = "hover_tests.rs"]
mod tests;
