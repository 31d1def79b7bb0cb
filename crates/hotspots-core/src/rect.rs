/// A point in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Translates the point into the coordinate space of `origin`.
    pub fn relative_to(&self, origin: &Rect) -> Self {
        Self {
            x: self.x.saturating_sub(origin.x),
            y: self.y.saturating_sub(origin.y),
        }
    }
}

/// An axis-aligned rectangle representing a region's position and size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Returns whether the point lies inside the rectangle.
    ///
    /// Both edges are inclusive: a point exactly on `x + width` or
    /// `y + height` counts as inside.
    pub fn contains(&self, point: Point) -> bool {
        // Far edges are computed in i64 so directives near i32::MAX cannot overflow.
        let right = i64::from(self.x) + i64::from(self.width);
        let bottom = i64::from(self.y) + i64::from(self.height);
        point.x >= self.x
            && i64::from(point.x) <= right
            && point.y >= self.y
            && i64::from(point.y) <= bottom
    }

    /// Grows the rectangle outward by the given margins.
    ///
    /// `up` extends toward smaller y, `down` toward larger y.
    pub fn expand(&self, margins: &Margins) -> Self {
        let (left, right, up, down) = margins.as_i32();
        Self {
            x: self.x.saturating_sub(left),
            y: self.y.saturating_sub(up),
            width: self.width.saturating_add(left).saturating_add(right),
            height: self.height.saturating_add(up).saturating_add(down),
        }
    }
}

/// Per-direction expansion applied to a hover region's leave area.
///
/// Margins are unsigned so the leave area can never shrink below the
/// enter area.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Margins {
    pub left: u32,
    pub right: u32,
    pub up: u32,
    pub down: u32,
}

impl Margins {
    pub fn new(left: u32, right: u32, up: u32, down: u32) -> Self {
        Self {
            left,
            right,
            up,
            down,
        }
    }

    /// Margins saturated into the signed pixel space used by [`Rect`].
    fn as_i32(&self) -> (i32, i32, i32, i32) {
        let clamp = |v: u32| i32::try_from(v).unwrap_or(i32::MAX / 4);
        (
            clamp(self.left),
            clamp(self.right),
            clamp(self.up),
            clamp(self.down),
        )
    }
}
