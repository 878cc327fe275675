//! # SpaceKit Designer
//!
//! The scene state engine of the SpaceKit room-layout editor. Users place,
//! move, rotate, scale, and delete furnishing objects on a snapped grid, with
//! full undo/redo and save/load of the resulting layout.
//!
//! ## Core Components
//!
//! - **Model**: [`Entity`] values and the closed set of [`ComponentType`]s
//! - **Catalog**: names, categories, footprints, and colours per type
//! - **Scene Store**: the live entities and the selection
//! - **History**: bounded log of immutable snapshots driving undo/redo
//! - **Interaction**: pointer/wheel state machine and the [`Camera`]
//! - **Serialization**: JSON layout format with strict validation
//! - **Renderer**: [`SceneRenderer`] trait plus proxy reconciliation
//!
//! ## Architecture
//!
//! ```text
//! pointer / wheel ──> InteractionController ──> SceneStore ──> HistoryManager
//!                                                   │
//!                                                   └──> EventBus ──> views
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use spacekit_designer::{ComponentType, DesignerState};
//! use std::f64::consts::FRAC_PI_2;
//!
//! let mut state = DesignerState::new();
//! let chair = state.scene.add_entity(ComponentType::Chair, 10.0, 10.0);
//! assert_eq!((chair.x(), chair.y()), (0.0, 0.0));
//!
//! state.scene.rotate_selected(FRAC_PI_2);
//! state.scene.undo();
//! assert_eq!(state.scene.entities()[0].rotation(), 0.0);
//! ```

pub mod catalog;
pub mod commands;
pub mod designer_state;
pub mod grid;
pub mod history;
pub mod interaction;
pub mod model;
pub mod renderer;
pub mod scene_store;
pub mod serialization;
pub mod viewport;

pub use catalog::{catalog, component_info, ComponentCategory, ComponentInfo};
pub use commands::{CommandParseError, DesignerCommand};
pub use designer_state::DesignerState;
pub use grid::Grid;
pub use history::{HistoryManager, Snapshot};
pub use interaction::{
    InteractionController, InteractionState, Modifiers, PointerButton, PointerEvent,
};
pub use model::{ComponentType, Entity, Point, UnknownComponentType};
pub use renderer::{ProxySync, SceneRenderer, TracingRenderer};
pub use scene_store::SceneStore;
pub use serialization::{layout_from_json, layout_to_json, EntityRecord};
pub use viewport::Camera;
