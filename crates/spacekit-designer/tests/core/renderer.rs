use spacekit_designer::{
    ComponentType, DesignerState, Entity, PointerEvent, ProxySync, SceneRenderer,
};
use std::sync::{Arc, Mutex};

/// Renderer that records every call it receives.
#[derive(Clone, Default)]
struct RecordingRenderer {
    calls: Arc<Mutex<Vec<String>>>,
}

impl RecordingRenderer {
    fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.calls.lock().unwrap())
    }

    fn push(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

impl SceneRenderer for RecordingRenderer {
    fn create_proxy(&mut self, entity: &Entity) {
        self.push(format!("create {}", entity.kind()));
    }

    fn destroy_proxy(&mut self, _id: &str) {
        self.push("destroy".to_string());
    }

    fn update_proxy(&mut self, entity: &Entity) {
        self.push(format!("update {} {}", entity.x(), entity.y()));
    }

    fn set_highlight(&mut self, _id: &str, highlighted: bool) {
        self.push(format!("highlight {}", highlighted));
    }
}

#[test]
fn test_sync_creates_and_highlights() {
    let mut renderer = RecordingRenderer::default();
    let mut sync = ProxySync::new();
    let chair = Entity::new("chair_1", ComponentType::Chair, 0.0, 0.0);

    sync.sync(&mut renderer, std::slice::from_ref(&chair), Some("chair_1"));
    assert_eq!(renderer.take(), vec!["create chair", "highlight true"]);
    assert_eq!(sync.len(), 1);

    // Nothing changed, nothing issued
    sync.sync(&mut renderer, std::slice::from_ref(&chair), Some("chair_1"));
    assert!(renderer.take().is_empty());
}

#[test]
fn test_sync_destroys_removed() {
    let mut renderer = RecordingRenderer::default();
    let mut sync = ProxySync::new();
    let lamp = Entity::new("lamp_1", ComponentType::Lamp, 0.0, 0.0);

    sync.sync(&mut renderer, std::slice::from_ref(&lamp), Some("lamp_1"));
    renderer.take();

    sync.sync(&mut renderer, &[], None);
    assert_eq!(renderer.take(), vec!["destroy"]);
    assert!(sync.is_empty());
}

#[test]
fn test_state_pushes_drag_updates() {
    let renderer = RecordingRenderer::default();
    let mut state = DesignerState::new();
    state.attach_renderer(Box::new(renderer.clone()));

    let table = state.scene.add_entity(ComponentType::Table, 0.0, 0.0);
    state.cancel_gesture();
    assert_eq!(renderer.take(), vec!["create table", "highlight true"]);

    state.pointer_down(&PointerEvent::at(0.0, 0.0).on_entity(table.id()));
    state.pointer_move(&PointerEvent::at(64.0, 0.0));
    state.pointer_up(&PointerEvent::at(64.0, 0.0));
    assert_eq!(renderer.take(), vec!["update 64 0"]);

    state.scene.undo();
    state.cancel_gesture();
    assert_eq!(renderer.take(), vec!["update 0 0", "highlight false"]);
}

#[test]
fn test_detach_stops_updates() {
    let renderer = RecordingRenderer::default();
    let mut state = DesignerState::new();
    state.attach_renderer(Box::new(renderer.clone()));
    assert!(state.detach_renderer().is_some());

    state.add_component(ComponentType::Door);
    assert!(renderer.take().is_empty());
}
