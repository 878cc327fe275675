use spacekit_core::{AppEvent, EventBus, EventCategory, EventFilter, FileEvent, LayoutError};
use spacekit_designer::{ComponentType, Entity, SceneStore};
use std::f64::consts::PI;
use std::sync::{Arc, Mutex};

const LAYOUT: &str = r#"[
  {"id": "chair_a", "type": "chair", "x": 0, "y": 0, "rotation": 3.141592653589793, "scale": 1.0},
  {"id": "table_b", "type": "table", "x": 64, "y": 33, "rotation": 0, "scale": 2.5}
]"#;

#[test]
fn test_serialize_deserialize_round_trip() {
    let mut store = SceneStore::default();
    store.add_entity(ComponentType::Sofa, 100.0, 100.0);
    store.rotate_selected(PI);
    store.add_entity(ComponentType::Lamp, -50.0, 20.0);
    store.scale_selected(0.5);
    let saved = store.serialize().unwrap();

    let mut other = SceneStore::default();
    other.deserialize(&saved).unwrap();
    assert_eq!(other.entities(), store.entities());
    assert_eq!(other.serialize().unwrap(), saved);
}

#[test]
fn test_deserialize_resets_history_and_selection() {
    let mut store = SceneStore::default();
    store.add_entity(ComponentType::Bed, 0.0, 0.0);
    store.deserialize(LAYOUT).unwrap();

    assert_eq!(store.len(), 2);
    assert!(store.selected_id().is_none());
    assert!(!store.can_undo());
    assert!(!store.can_redo());
    assert_eq!(store.history().len(), 1);

    let table = store.entity("table_b").unwrap();
    assert_eq!((table.x(), table.y()), (64.0, 32.0));
    assert_eq!(table.scale(), 2.5);
    assert_eq!(store.entity("chair_a").map(Entity::rotation), Some(PI));
}

#[test]
fn test_failed_load_leaves_state_untouched() {
    let bus = Arc::new(EventBus::new());
    let failures = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&failures);
    bus.subscribe(EventFilter::Categories(vec![EventCategory::File]), move |event| {
        if let AppEvent::File(FileEvent::LoadFailed { reason }) = event {
            sink.lock().unwrap().push(reason);
        }
    });

    let mut store = SceneStore::new(32.0, 50, bus);
    store.add_entity(ComponentType::Chair, 0.0, 0.0);
    store.add_entity(ComponentType::Door, 64.0, 0.0);
    store.undo();
    let before = store.entities().to_vec();
    let revision = store.revision();

    let err = store.deserialize("not json").unwrap_err();
    assert!(matches!(
        err,
        spacekit_core::Error::Layout(LayoutError::Malformed { .. })
    ));
    assert_eq!(store.entities(), before.as_slice());
    assert!(store.can_undo());
    assert!(store.can_redo());
    assert_eq!(store.revision(), revision);
    assert_eq!(failures.lock().unwrap().len(), 1);
}

#[test]
fn test_serialize_ignores_uncommitted_moves() {
    let mut store = SceneStore::default();
    let chair = store.add_entity(ComponentType::Chair, 0.0, 0.0);
    let committed = store.serialize().unwrap();

    store.move_entity(chair.id(), 320.0, 320.0);
    assert_eq!(store.serialize().unwrap(), committed);
}

#[test]
fn test_clear_starts_fresh_history() {
    let mut store = SceneStore::default();
    store.add_entity(ComponentType::Wall, 0.0, 0.0);
    store.add_entity(ComponentType::Wall, 32.0, 0.0);
    store.clear();

    assert!(store.is_empty());
    assert!(!store.can_undo());
    assert_eq!(store.serialize().unwrap(), "[]");
}
