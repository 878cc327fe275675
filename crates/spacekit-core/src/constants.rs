//! Editor-wide constants.
//!
//! Defaults used when no settings file overrides them.

/// Grid spacing in world units.
pub const DEFAULT_GRID_SIZE: f64 = 32.0;

/// Maximum number of snapshots kept in the history log.
pub const DEFAULT_HISTORY_LIMIT: usize = 50;

/// Smallest scale an entity may have.
pub const MIN_ENTITY_SCALE: f64 = 0.1;

/// Largest scale an entity may have.
pub const MAX_ENTITY_SCALE: f64 = 3.0;

/// Smallest camera zoom.
pub const MIN_ZOOM: f64 = 0.1;

/// Largest camera zoom.
pub const MAX_ZOOM: f64 = 2.0;

/// Zoom change per wheel notch or toolbar click.
pub const ZOOM_STEP: f64 = 0.1;

/// Default viewport size in pixels.
pub const DEFAULT_VIEWPORT_WIDTH: f64 = 1200.0;
pub const DEFAULT_VIEWPORT_HEIGHT: f64 = 800.0;
