use serde::Deserialize;

use hotspots_core::{HotspotsResult, Point};

use crate::hyprctl;

#[derive(Debug, Deserialize)]
struct CursorPos {
    x: f64,
    y: f64,
}

/// Returns the cursor position in global logical pixels.
pub fn cursor_position() -> HotspotsResult<Point> {
    let pos: CursorPos = hyprctl::request_json("cursorpos")?;
    Ok(to_point(&pos))
}

fn to_point(pos: &CursorPos) -> Point {
    Point::new(pos.x.floor() as i32, pos.y.floor() as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fractional_positions_round_down() {
        // Arrange
        let pos: CursorPos = serde_json::from_str(r#"{"x": 12.9, "y": -0.5}"#).unwrap();

        // Act
        let point = to_point(&pos);

        // Assert
        assert_eq!(point, Point::new(12, -1));
    }
}
