//! Pointer and wheel handling for the editing canvas.
//!
//! The renderer forwards raw input, usually already hit-tested, and the
//! controller turns it into camera moves and scene store calls. At most one gesture is
//! active at a time:
//!
//! - **Dragging**: press on an entity. The entity is selected, follows the
//!   pointer snapped to the grid, and the release commits one snapshot if it
//!   moved.
//! - **Panning**: middle press, or primary press with the pan modifier, on
//!   empty canvas. Scrolls the camera.
//!
//! Presses that arrive while a gesture is active are ignored.

use crate::model::{ComponentType, Entity, Point};
use crate::scene_store::SceneStore;
use crate::viewport::Camera;
use spacekit_core::{AppEvent, ViewEvent};
use spacekit_settings::{PanModifier, ViewSettings};

/// Mouse button that triggered a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Middle,
    Secondary,
}

/// Modifier keys held during a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        shift: false,
        ctrl: false,
        alt: false,
    };

    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Self::NONE
        }
    }

    pub fn has(&self, modifier: PanModifier) -> bool {
        match modifier {
            PanModifier::Shift => self.shift,
            PanModifier::Ctrl => self.ctrl,
            PanModifier::Alt => self.alt,
        }
    }
}

/// Pointer press, move, or release in screen coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct PointerEvent {
    pub screen: Point,
    pub button: PointerButton,
    pub modifiers: Modifiers,
    /// Entity under the pointer, as resolved by the renderer. When `None`
    /// the controller hit-tests the catalog footprints itself.
    pub hit: Option<String>,
}

impl PointerEvent {
    /// Primary-button event with no modifiers and nothing hit.
    pub fn at(x: f64, y: f64) -> Self {
        Self {
            screen: Point::new(x, y),
            button: PointerButton::Primary,
            modifiers: Modifiers::NONE,
            hit: None,
        }
    }

    pub fn with_button(mut self, button: PointerButton) -> Self {
        self.button = button;
        self
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn on_entity(mut self, id: impl Into<String>) -> Self {
        self.hit = Some(id.into());
        self
    }
}

/// Gesture currently in progress.
#[derive(Debug, Clone, PartialEq)]
pub enum InteractionState {
    Idle,
    Panning {
        last_screen: Point,
    },
    Dragging {
        id: String,
        start_position: Point,
        start_pointer: Point,
    },
}

impl InteractionState {
    pub fn is_idle(&self) -> bool {
        matches!(self, InteractionState::Idle)
    }
}

/// Input state machine and camera owner.
#[derive(Debug, Clone)]
pub struct InteractionController {
    camera: Camera,
    state: InteractionState,
    pan_modifier: PanModifier,
}

impl InteractionController {
    pub fn new(camera: Camera) -> Self {
        Self {
            camera,
            state: InteractionState::Idle,
            pan_modifier: PanModifier::default(),
        }
    }

    pub fn from_settings(view: &ViewSettings) -> Self {
        Self {
            pan_modifier: view.pan_modifier,
            ..Self::new(Camera::from_settings(view))
        }
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    /// Starts a drag or a pan. Ignored while a gesture is active.
    pub fn pointer_down(&mut self, store: &mut SceneStore, event: &PointerEvent) {
        if !self.state.is_idle() {
            tracing::debug!("Ignoring press during {:?}", self.state);
            return;
        }

        let world = self.camera.screen_to_world(event.screen);
        let hit = match event.hit.as_deref() {
            Some(id) => store.entity(id),
            None => store.entity_at(world),
        };
        if let Some(entity) = hit {
            if event.button == PointerButton::Secondary {
                return;
            }
            let id = entity.id().to_string();
            let start_position = entity.position();
            store.select(Some(&id));
            self.state = InteractionState::Dragging {
                id,
                start_position,
                start_pointer: world,
            };
            return;
        }

        let pan = match event.button {
            PointerButton::Middle => true,
            PointerButton::Primary => event.modifiers.has(self.pan_modifier),
            PointerButton::Secondary => false,
        };
        if pan {
            self.state = InteractionState::Panning {
                last_screen: event.screen,
            };
        }
    }

    /// Continues the active gesture.
    pub fn pointer_move(&mut self, store: &mut SceneStore, event: &PointerEvent) {
        match &mut self.state {
            InteractionState::Idle => {}
            InteractionState::Panning { last_screen } => {
                let delta = event.screen - *last_screen;
                *last_screen = event.screen;
                self.camera.pan_by_screen(delta.x, delta.y);
                self.notify_camera(store);
            }
            InteractionState::Dragging {
                id,
                start_position,
                start_pointer,
            } => {
                let delta = self.camera.screen_to_world(event.screen) - *start_pointer;
                let target = *start_position + delta;
                store.move_entity(id, target.x, target.y);
            }
        }
    }

    /// Ends the active gesture. A drag that moved its entity commits once.
    pub fn pointer_up(&mut self, store: &mut SceneStore, event: &PointerEvent) {
        if let InteractionState::Dragging { .. } = self.state {
            self.pointer_move(store, event);
        }
        let state = std::mem::replace(&mut self.state, InteractionState::Idle);
        if let InteractionState::Dragging {
            id, start_position, ..
        } = state
        {
            let moved = store
                .entity(&id)
                .is_some_and(|e| e.position() != start_position);
            if moved {
                tracing::debug!("Drag of {} finished", id);
                store.commit();
                store.notify_selection();
            }
        }
    }

    /// Aborts the active gesture. A dragged entity returns to where it started.
    pub fn cancel(&mut self, store: &mut SceneStore) {
        let state = std::mem::replace(&mut self.state, InteractionState::Idle);
        if let InteractionState::Dragging {
            id, start_position, ..
        } = state
        {
            tracing::debug!("Drag of {} cancelled", id);
            store.move_entity(&id, start_position.x, start_position.y);
        }
    }

    /// Zooms by one step; positive `delta_y` zooms out.
    pub fn wheel(&mut self, store: &SceneStore, delta_y: f64) {
        self.camera.wheel(delta_y);
        self.notify_camera(store);
    }

    pub fn zoom_in(&mut self, store: &SceneStore) {
        self.camera.zoom_in();
        self.notify_camera(store);
    }

    pub fn zoom_out(&mut self, store: &SceneStore) {
        self.camera.zoom_out();
        self.notify_camera(store);
    }

    /// Zoom 1, centred on the world origin.
    pub fn reset_view(&mut self, store: &SceneStore) {
        self.camera.reset();
        self.notify_camera(store);
    }

    /// Adds an entity at the middle of the current view (palette click).
    pub fn place_at_view_center(&self, store: &mut SceneStore, kind: ComponentType) -> Entity {
        let center = self.camera.view_center();
        store.add_entity(kind, center.x, center.y)
    }

    /// Adds an entity where a palette item was dropped.
    pub fn drop_at(&self, store: &mut SceneStore, kind: ComponentType, screen: Point) -> Entity {
        let world = self.camera.screen_to_world(screen);
        store.add_entity(kind, world.x, world.y)
    }

    fn notify_camera(&self, store: &SceneStore) {
        let scroll = self.camera.scroll();
        store.events().notify(AppEvent::View(ViewEvent::CameraChanged {
            zoom: self.camera.zoom(),
            scroll_x: scroll.x,
            scroll_y: scroll.y,
        }));
    }
}

impl Default for InteractionController {
    fn default() -> Self {
        Self::new(Camera::default())
    }
}
