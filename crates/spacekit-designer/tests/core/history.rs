use spacekit_core::EventBus;
use spacekit_designer::{ComponentType, Entity, HistoryManager, SceneStore};
use std::f64::consts::FRAC_PI_2;
use std::sync::Arc;

fn store_with_limit(limit: usize) -> SceneStore {
    SceneStore::new(32.0, limit, Arc::new(EventBus::new()))
}

#[test]
fn test_history_manager_creation() {
    let history = HistoryManager::new(50);
    assert_eq!(history.len(), 1);
    assert_eq!(history.index(), 0);
    assert!(!history.can_undo());
    assert!(!history.can_redo());
}

#[test]
fn test_undo_restores_previous_state() {
    let mut store = SceneStore::default();
    store.add_entity(ComponentType::Sofa, 64.0, 64.0);
    let before: Vec<Entity> = store.entities().to_vec();

    assert!(store.rotate_selected(FRAC_PI_2));
    assert_ne!(store.entities(), before.as_slice());

    assert!(store.undo());
    assert_eq!(store.entities(), before.as_slice());
}

#[test]
fn test_redo_restores_undone_state() {
    let mut store = SceneStore::default();
    store.add_entity(ComponentType::Bed, 0.0, 0.0);
    store.scale_selected(1.5);
    let after: Vec<Entity> = store.entities().to_vec();

    store.undo();
    assert!(store.redo());
    assert_eq!(store.entities(), after.as_slice());
    assert!(!store.can_redo());
}

#[test]
fn test_commit_after_undo_discards_redo() {
    let mut store = SceneStore::default();
    store.add_entity(ComponentType::Chair, 0.0, 0.0);
    store.add_entity(ComponentType::Chair, 64.0, 0.0);
    store.undo();
    assert!(store.can_redo());

    store.add_entity(ComponentType::Lamp, 128.0, 0.0);
    assert!(!store.can_redo());
    assert!(!store.redo());
    assert_eq!(store.len(), 2);
}

#[test]
fn test_undo_at_start_is_noop() {
    let mut store = SceneStore::default();
    assert!(!store.undo());
    assert!(!store.redo());
    assert!(store.is_empty());
    assert_eq!(store.history().len(), 1);
}

#[test]
fn test_restored_entities_are_fresh_copies() {
    let mut store = SceneStore::default();
    let chair = store.add_entity(ComponentType::Chair, 0.0, 0.0);
    store.rotate_selected(1.0);
    store.undo();

    // Mutating the restored scene must not alter the stored snapshot
    store.select(Some(chair.id()));
    store.rotate_selected(2.0);
    store.undo();
    assert_eq!(store.entities()[0].rotation(), 0.0);
}

#[test]
fn test_history_cap_drops_oldest() {
    let mut store = store_with_limit(5);
    for i in 0..8 {
        store.add_entity(ComponentType::Plant, f64::from(i) * 64.0, 0.0);
    }
    assert_eq!(store.history().len(), 5);

    let mut undos = 0;
    while store.undo() {
        undos += 1;
    }
    assert_eq!(undos, 4);
    assert_eq!(store.len(), 4);
}

#[test]
fn test_transform_noops_do_not_commit() {
    let mut store = SceneStore::default();
    store.add_entity(ComponentType::Window, 0.0, 0.0);
    store.select(None);
    let len = store.history().len();

    store.rotate_selected(FRAC_PI_2);
    store.scale_selected(2.0);
    store.delete_selected();

    assert_eq!(store.history().len(), len);
}
