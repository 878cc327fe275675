//! Grid snapping.

use crate::model::Point;
use spacekit_core::constants::DEFAULT_GRID_SIZE;

/// Square placement grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grid {
    size: f64,
}

impl Grid {
    /// Creates a grid with the given spacing; non-positive or non-finite
    /// spacing falls back to the default.
    pub fn new(size: f64) -> Self {
        let size = if size.is_finite() && size > 0.0 {
            size
        } else {
            tracing::warn!("Invalid grid size {}, using {}", size, DEFAULT_GRID_SIZE);
            DEFAULT_GRID_SIZE
        };
        Self { size }
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    /// Rounds a coordinate to the nearest grid multiple, halves rounding up.
    ///
    /// Non-finite input snaps to 0.
    pub fn snap_value(&self, value: f64) -> f64 {
        if !value.is_finite() {
            return 0.0;
        }
        // + 0.0 turns -0.0 into 0.0
        ((value / self.size) + 0.5).floor() * self.size + 0.0
    }

    pub fn snap(&self, point: Point) -> Point {
        Point::new(self.snap_value(point.x), self.snap_value(point.y))
    }

    /// True when `value` is an exact grid multiple.
    pub fn is_aligned(&self, value: f64) -> bool {
        self.snap_value(value) == value
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            size: DEFAULT_GRID_SIZE,
        }
    }
}
