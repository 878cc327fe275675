//! # SpaceKit Core
//!
//! Core types and utilities shared by the SpaceKit crates.
//! Provides the error types, editor-wide defaults, and the event bus
//! that carries scene, selection, and file notifications to views.

pub mod constants;
pub mod error;
pub mod event_bus;

pub use error::{Error, LayoutError, Result};

// Re-export event bus for convenience
pub use event_bus::{
    AppEvent, ChangeKind, EventBus, EventBusError, EventCategory, EventFilter,
    FileEvent, SceneEvent, SelectedEntity, SelectionEvent, SubscriptionId, ViewEvent,
};
