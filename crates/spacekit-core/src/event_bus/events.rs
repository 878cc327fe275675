//! Event type definitions for the event bus.
//!
//! This module defines all editor events organized by category.
//! Events are cloneable and serializable for logging/replay.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root event enum for all editor events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AppEvent {
    /// Committed scene changes, undo and redo
    Scene(SceneEvent),
    /// Selection changes
    Selection(SelectionEvent),
    /// Layout file operations
    File(FileEvent),
    /// Camera movements
    View(ViewEvent),
}

impl AppEvent {
    /// Get the category of this event
    pub fn category(&self) -> EventCategory {
        match self {
            AppEvent::Scene(_) => EventCategory::Scene,
            AppEvent::Selection(_) => EventCategory::Selection,
            AppEvent::File(_) => EventCategory::File,
            AppEvent::View(_) => EventCategory::View,
        }
    }

    /// Get a short description of this event for logging
    pub fn description(&self) -> String {
        match self {
            AppEvent::Scene(e) => e.description(),
            AppEvent::Selection(e) => e.description(),
            AppEvent::File(e) => e.description(),
            AppEvent::View(e) => e.description(),
        }
    }
}

/// Event category for filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventCategory {
    /// Scene state events.
    Scene,
    /// Selection events.
    Selection,
    /// File operation events.
    File,
    /// Camera events.
    View,
}

impl std::fmt::Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventCategory::Scene => write!(f, "Scene"),
            EventCategory::Selection => write!(f, "Selection"),
            EventCategory::File => write!(f, "File"),
            EventCategory::View => write!(f, "View"),
        }
    }
}

/// What caused a scene change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChangeKind {
    /// A new snapshot was committed.
    Commit,
    /// History moved back one step.
    Undo,
    /// History moved forward one step.
    Redo,
    /// A layout was loaded, replacing history.
    Load,
    /// The scene was cleared, replacing history.
    Clear,
}

/// Scene state events
///
/// Fired after every commit and after undo, redo, load, and clear, so views
/// can re-read the undo/redo availability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SceneEvent {
    /// The committed scene changed.
    Changed {
        /// What triggered the change.
        kind: ChangeKind,
        /// Whether an undo step is available afterwards.
        can_undo: bool,
        /// Whether a redo step is available afterwards.
        can_redo: bool,
        /// Number of entities in the live scene.
        entity_count: usize,
    },
}

impl SceneEvent {
    /// Get a short description of this event
    pub fn description(&self) -> String {
        match self {
            SceneEvent::Changed {
                kind, entity_count, ..
            } => format!("Scene changed ({:?}), {} entities", kind, entity_count),
        }
    }
}

/// Field values of the selected entity, as shown by a property panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedEntity {
    /// Entity id.
    pub id: String,
    /// Furnishing type name (e.g. "chair").
    pub kind: String,
    /// World X position.
    pub x: f64,
    /// World Y position.
    pub y: f64,
    /// Rotation in radians.
    pub rotation: f64,
    /// Scale factor.
    pub scale: f64,
}

/// Selection events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SelectionEvent {
    /// The selection changed; `None` means nothing is selected.
    Changed(Option<SelectedEntity>),
}

impl SelectionEvent {
    /// Get a short description of this event
    pub fn description(&self) -> String {
        match self {
            SelectionEvent::Changed(Some(sel)) => format!("Selected {}", sel.id),
            SelectionEvent::Changed(None) => "Selection cleared".to_string(),
        }
    }
}

/// Layout file events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FileEvent {
    /// A layout was written.
    Saved {
        /// Destination file, if the layout went to disk.
        path: Option<PathBuf>,
        /// Number of entities written.
        entity_count: usize,
    },
    /// A layout was loaded.
    Loaded {
        /// Source file, if the layout came from disk.
        path: Option<PathBuf>,
        /// Number of entities loaded.
        entity_count: usize,
    },
    /// A layout could not be loaded; the scene is unchanged.
    LoadFailed {
        /// Human-readable failure reason.
        reason: String,
    },
    /// The workspace was cleared.
    Cleared,
}

impl FileEvent {
    /// Get a short description of this event
    pub fn description(&self) -> String {
        match self {
            FileEvent::Saved { entity_count, .. } => {
                format!("Saved layout with {} entities", entity_count)
            }
            FileEvent::Loaded { entity_count, .. } => {
                format!("Loaded layout with {} entities", entity_count)
            }
            FileEvent::LoadFailed { reason } => format!("Load failed: {}", reason),
            FileEvent::Cleared => "Workspace cleared".to_string(),
        }
    }
}

/// Camera events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ViewEvent {
    /// Zoom or scroll offset changed.
    CameraChanged {
        /// Current zoom factor.
        zoom: f64,
        /// Horizontal scroll offset in world units.
        scroll_x: f64,
        /// Vertical scroll offset in world units.
        scroll_y: f64,
    },
}

impl ViewEvent {
    /// Get a short description of this event
    pub fn description(&self) -> String {
        match self {
            ViewEvent::CameraChanged { zoom, .. } => format!("Camera zoom {:.2}", zoom),
        }
    }
}
