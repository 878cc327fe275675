//! Camera and coordinate transformation for the editing canvas.
//!
//! The camera scrolls over an unbounded world and zooms about the centre of
//! the viewport. Screen coordinates have (0,0) at the top-left of the canvas
//! and +Y pointing down, as do world coordinates.
//!
//! ```text
//! world = (screen - size / 2) / zoom + size / 2 + scroll
//! ```

use std::fmt;

use crate::model::Point;
use spacekit_core::constants::{
    DEFAULT_VIEWPORT_HEIGHT, DEFAULT_VIEWPORT_WIDTH, MAX_ZOOM, MIN_ZOOM, ZOOM_STEP,
};
use spacekit_settings::ViewSettings;

/// Camera state. Not part of the scene and never undone.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    zoom: f64,
    scroll_x: f64,
    scroll_y: f64,
    width: f64,
    height: f64,
    min_zoom: f64,
    max_zoom: f64,
    zoom_step: f64,
}

impl Camera {
    /// Creates a camera for a viewport of the given pixel size, zoom 1, no scroll.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            zoom: 1.0,
            scroll_x: 0.0,
            scroll_y: 0.0,
            width,
            height,
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
            zoom_step: ZOOM_STEP,
        }
    }

    /// Creates a camera with limits and viewport size from settings.
    pub fn from_settings(view: &ViewSettings) -> Self {
        Self {
            min_zoom: view.min_zoom,
            max_zoom: view.max_zoom,
            zoom_step: view.zoom_step,
            ..Self::new(view.viewport_width, view.viewport_height)
        }
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn scroll(&self) -> Point {
        Point::new(self.scroll_x, self.scroll_y)
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Sets the viewport size (typically called when the window resizes).
    pub fn set_viewport_size(&mut self, width: f64, height: f64) {
        if width > 0.0 && height > 0.0 {
            self.width = width;
            self.height = height;
        }
    }

    /// Sets the zoom, clamped to the configured limits.
    pub fn set_zoom(&mut self, zoom: f64) {
        if zoom.is_finite() {
            self.zoom = zoom.clamp(self.min_zoom, self.max_zoom);
        }
    }

    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom + self.zoom_step);
    }

    pub fn zoom_out(&mut self) {
        self.set_zoom(self.zoom - self.zoom_step);
    }

    /// Applies a wheel notch: positive `delta_y` zooms out, anything else in.
    pub fn wheel(&mut self, delta_y: f64) {
        if delta_y > 0.0 {
            self.zoom_out();
        } else {
            self.zoom_in();
        }
    }

    /// Scrolls so the content follows a pointer moved by a screen delta.
    pub fn pan_by_screen(&mut self, dx: f64, dy: f64) {
        self.scroll_x -= dx / self.zoom;
        self.scroll_y -= dy / self.zoom;
    }

    pub fn set_scroll(&mut self, x: f64, y: f64) {
        self.scroll_x = x;
        self.scroll_y = y;
    }

    /// Zoom 1, world origin in the middle of the viewport.
    pub fn reset(&mut self) {
        self.zoom = 1.0;
        self.center_on(Point::default());
    }

    /// Scrolls so `world` is at the middle of the viewport.
    pub fn center_on(&mut self, world: Point) {
        self.scroll_x = world.x - self.width / 2.0;
        self.scroll_y = world.y - self.height / 2.0;
    }

    /// World point at the middle of the viewport.
    pub fn view_center(&self) -> Point {
        Point::new(
            self.scroll_x + self.width / 2.0,
            self.scroll_y + self.height / 2.0,
        )
    }

    pub fn screen_to_world(&self, screen: Point) -> Point {
        let half_w = self.width / 2.0;
        let half_h = self.height / 2.0;
        Point::new(
            (screen.x - half_w) / self.zoom + half_w + self.scroll_x,
            (screen.y - half_h) / self.zoom + half_h + self.scroll_y,
        )
    }

    pub fn world_to_screen(&self, world: Point) -> Point {
        let half_w = self.width / 2.0;
        let half_h = self.height / 2.0;
        Point::new(
            (world.x - self.scroll_x - half_w) * self.zoom + half_w,
            (world.y - self.scroll_y - half_h) * self.zoom + half_h,
        )
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(DEFAULT_VIEWPORT_WIDTH, DEFAULT_VIEWPORT_HEIGHT)
    }
}

impl fmt::Display for Camera {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Camera(zoom: {:.2}, scroll: ({:.1}, {:.1}))",
            self.zoom, self.scroll_x, self.scroll_y
        )
    }
}
