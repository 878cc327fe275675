use spacekit_core::{AppEvent, EventCategory, EventFilter, FileEvent};
use spacekit_designer::{ComponentType, DesignerCommand, DesignerState};
use std::sync::{Arc, Mutex};
use tempfile::tempdir;

#[test]
fn test_save_and_load_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("living_room.json");

    let mut state = DesignerState::new();
    state.scene.add_entity(ComponentType::Sofa, 64.0, 64.0);
    state.scene.add_entity(ComponentType::Plant, 128.0, 0.0);
    state.save_to_file(&path).unwrap();

    assert!(!state.is_modified());
    assert_eq!(state.display_name(), "living_room.json");

    let mut loaded = DesignerState::new();
    loaded.load_from_file(&path).unwrap();
    assert_eq!(loaded.scene.entities(), state.scene.entities());
    assert_eq!(loaded.current_file_path.as_deref(), Some(path.as_path()));
    assert!(!loaded.is_modified());
    assert!(!loaded.scene.can_undo());
}

#[test]
fn test_modified_after_edit_and_undo() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("office.json");

    let mut state = DesignerState::new();
    state.save_to_file(&path).unwrap();
    state.add_component(ComponentType::Table);
    assert_eq!(state.display_name(), "office.json*");

    state.save_to_file(&path).unwrap();
    assert!(!state.is_modified());
    state.scene.undo();
    assert!(state.is_modified());
}

#[test]
fn test_load_missing_file_fails() {
    let dir = tempdir().unwrap();
    let mut state = DesignerState::new();
    state.add_component(ComponentType::Chair);

    let failed = Arc::new(Mutex::new(0));
    let counter = Arc::clone(&failed);
    state.events().subscribe(
        EventFilter::Categories(vec![EventCategory::File]),
        move |event| {
            if let AppEvent::File(FileEvent::LoadFailed { .. }) = event {
                *counter.lock().unwrap() += 1;
            }
        },
    );

    assert!(state.load_from_file(dir.path().join("missing.json")).is_err());
    assert_eq!(state.scene.len(), 1);
    assert!(state.current_file_path.is_none());
    assert_eq!(*failed.lock().unwrap(), 1);
}

#[test]
fn test_load_invalid_file_keeps_scene() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, r#"[{"id": "x", "type": "throne"}]"#).unwrap();

    let mut state = DesignerState::new();
    state.add_component(ComponentType::Lamp);
    let err = state.load_from_file(&path).unwrap_err();

    assert!(format!("{:#}", err).contains("broken.json"));
    assert_eq!(state.scene.len(), 1);
    assert!(state.scene.can_undo());
}

#[test]
fn test_save_and_load_commands() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bedroom.json");

    let mut state = DesignerState::new();
    let save = format!("save {}", path.display())
        .parse::<DesignerCommand>()
        .unwrap();
    state.execute(&"add bed 0 0".parse::<DesignerCommand>().unwrap()).unwrap();
    state.execute(&save).unwrap();

    // Saving again without a path reuses the current file
    state.execute(&"add lamp 64 0".parse::<DesignerCommand>().unwrap()).unwrap();
    state.execute(&"save".parse::<DesignerCommand>().unwrap()).unwrap();

    state.execute(&"clear".parse::<DesignerCommand>().unwrap()).unwrap();
    assert!(state.scene.is_empty());
    assert_eq!(state.current_file_path.as_deref(), Some(path.as_path()));

    let load = format!("load {}", path.display())
        .parse::<DesignerCommand>()
        .unwrap();
    state.execute(&load).unwrap();
    assert_eq!(state.scene.len(), 2);
}

#[test]
fn test_saved_event_published() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("hall.json");
    let mut state = DesignerState::new();
    state.add_component(ComponentType::Door);

    let saved = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&saved);
    state.events().subscribe(
        EventFilter::Categories(vec![EventCategory::File]),
        move |event| sink.lock().unwrap().push(event),
    );
    state.save_to_file(&path).unwrap();

    assert_eq!(
        *saved.lock().unwrap(),
        vec![AppEvent::File(FileEvent::Saved {
            path: Some(path.clone()),
            entity_count: 1,
        })]
    );
}
