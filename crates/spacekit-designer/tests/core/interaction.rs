use spacekit_designer::{
    ComponentType, Entity, InteractionController, InteractionState, Modifiers, Point,
    PointerButton, PointerEvent, SceneStore,
};

fn setup() -> (InteractionController, SceneStore, Entity) {
    let mut store = SceneStore::default();
    let chair = store.add_entity(ComponentType::Chair, 0.0, 0.0);
    store.select(None);
    (InteractionController::default(), store, chair)
}

#[test]
fn test_drag_commits_once() {
    let (mut ctl, mut store, chair) = setup();
    let len = store.history().len();

    ctl.pointer_down(&mut store, &PointerEvent::at(0.0, 0.0).on_entity(chair.id()));
    assert_eq!(store.selected_id(), Some(chair.id()));
    assert!(matches!(ctl.state(), InteractionState::Dragging { .. }));

    for step in 1..=7 {
        let x = f64::from(step) * 10.0;
        ctl.pointer_move(&mut store, &PointerEvent::at(x, 20.0));
    }
    assert_eq!(
        store.entity(chair.id()).map(Entity::position),
        Some(Point::new(64.0, 32.0))
    );
    // Live moves are not committed
    assert_eq!(store.history().len(), len);

    ctl.pointer_up(&mut store, &PointerEvent::at(70.0, 20.0));
    assert!(ctl.state().is_idle());
    assert_eq!(store.history().len(), len + 1);
    assert_eq!(store.committed()[0].position(), Point::new(64.0, 32.0));

    assert!(store.undo());
    assert_eq!(store.entities()[0].position(), Point::new(0.0, 0.0));
}

#[test]
fn test_drag_without_motion_does_not_commit() {
    let (mut ctl, mut store, chair) = setup();
    let len = store.history().len();

    ctl.pointer_down(&mut store, &PointerEvent::at(0.0, 0.0).on_entity(chair.id()));
    ctl.pointer_move(&mut store, &PointerEvent::at(5.0, 5.0));
    ctl.pointer_up(&mut store, &PointerEvent::at(5.0, 5.0));

    assert_eq!(store.history().len(), len);
    assert_eq!(store.entities()[0].position(), Point::new(0.0, 0.0));
}

#[test]
fn test_drag_at_zoom_follows_world_delta() {
    let (mut ctl, mut store, chair) = setup();
    ctl.camera_mut().set_zoom(2.0);

    ctl.pointer_down(&mut store, &PointerEvent::at(600.0, 400.0).on_entity(chair.id()));
    ctl.pointer_up(&mut store, &PointerEvent::at(728.0, 400.0));

    // 128 screen pixels at zoom 2 is 64 world units
    assert_eq!(store.entities()[0].position(), Point::new(64.0, 0.0));
}

#[test]
fn test_middle_button_pans() {
    let (mut ctl, mut store, _) = setup();
    let len = store.history().len();

    ctl.pointer_down(
        &mut store,
        &PointerEvent::at(100.0, 100.0).with_button(PointerButton::Middle),
    );
    assert!(matches!(ctl.state(), InteractionState::Panning { .. }));
    ctl.pointer_move(&mut store, &PointerEvent::at(150.0, 80.0));
    ctl.pointer_move(&mut store, &PointerEvent::at(200.0, 60.0));
    ctl.pointer_up(&mut store, &PointerEvent::at(200.0, 60.0));

    assert_eq!(ctl.camera().scroll(), Point::new(-100.0, 40.0));
    assert_eq!(store.history().len(), len);
}

#[test]
fn test_pan_scales_with_zoom() {
    let (mut ctl, mut store, _) = setup();
    ctl.camera_mut().set_zoom(2.0);

    ctl.pointer_down(
        &mut store,
        &PointerEvent::at(100.0, 100.0).with_button(PointerButton::Middle),
    );
    ctl.pointer_move(&mut store, &PointerEvent::at(200.0, 100.0));
    ctl.pointer_up(&mut store, &PointerEvent::at(200.0, 100.0));

    assert_eq!(ctl.camera().scroll(), Point::new(-50.0, 0.0));
}

#[test]
fn test_shift_primary_pans_on_empty_canvas() {
    let (mut ctl, mut store, _) = setup();
    ctl.pointer_down(
        &mut store,
        &PointerEvent::at(300.0, 300.0).with_modifiers(Modifiers::shift()),
    );
    ctl.pointer_move(&mut store, &PointerEvent::at(310.0, 300.0));
    assert_eq!(ctl.camera().scroll(), Point::new(-10.0, 0.0));
}

#[test]
fn test_plain_primary_on_empty_canvas_does_nothing() {
    let (mut ctl, mut store, chair) = setup();
    store.select(Some(chair.id()));

    ctl.pointer_down(&mut store, &PointerEvent::at(300.0, 300.0));
    assert!(ctl.state().is_idle());
    // Empty-canvas clicks keep the selection
    assert_eq!(store.selected_id(), Some(chair.id()));
}

#[test]
fn test_drag_wins_over_pan_modifier() {
    let (mut ctl, mut store, chair) = setup();
    ctl.pointer_down(
        &mut store,
        &PointerEvent::at(0.0, 0.0)
            .with_modifiers(Modifiers::shift())
            .on_entity(chair.id()),
    );
    assert!(matches!(ctl.state(), InteractionState::Dragging { .. }));
}

#[test]
fn test_secondary_press_on_entity_is_ignored() {
    let (mut ctl, mut store, chair) = setup();
    ctl.pointer_down(
        &mut store,
        &PointerEvent::at(0.0, 0.0)
            .with_button(PointerButton::Secondary)
            .on_entity(chair.id()),
    );
    assert!(ctl.state().is_idle());
    assert!(store.selected_id().is_none());
}

#[test]
fn test_press_during_gesture_is_ignored() {
    let (mut ctl, mut store, chair) = setup();
    let other = store.add_entity(ComponentType::Lamp, 320.0, 320.0);

    ctl.pointer_down(&mut store, &PointerEvent::at(0.0, 0.0).on_entity(chair.id()));
    ctl.pointer_down(&mut store, &PointerEvent::at(320.0, 320.0).on_entity(other.id()));

    match ctl.state() {
        InteractionState::Dragging { id, .. } => assert_eq!(id, chair.id()),
        state => panic!("unexpected state {:?}", state),
    }
}

#[test]
fn test_cancel_restores_start_position() {
    let (mut ctl, mut store, chair) = setup();
    let len = store.history().len();

    ctl.pointer_down(&mut store, &PointerEvent::at(0.0, 0.0).on_entity(chair.id()));
    ctl.pointer_move(&mut store, &PointerEvent::at(200.0, 200.0));
    ctl.cancel(&mut store);

    assert!(ctl.state().is_idle());
    assert_eq!(store.entities()[0].position(), Point::new(0.0, 0.0));
    assert_eq!(store.history().len(), len);
}

#[test]
fn test_wheel_zoom_is_clamped() {
    let (mut ctl, store, _) = setup();
    for _ in 0..30 {
        ctl.wheel(&store, -1.0);
    }
    assert_eq!(ctl.camera().zoom(), 2.0);
    for _ in 0..30 {
        ctl.wheel(&store, 1.0);
    }
    assert_eq!(ctl.camera().zoom(), 0.1);
}

#[test]
fn test_place_at_view_center() {
    let mut ctl = InteractionController::default();
    let mut store = SceneStore::default();

    let sofa = ctl.place_at_view_center(&mut store, ComponentType::Sofa);
    assert_eq!(sofa.position(), Point::new(608.0, 416.0));

    ctl.reset_view(&store);
    let lamp = ctl.place_at_view_center(&mut store, ComponentType::Lamp);
    assert_eq!(lamp.position(), Point::new(0.0, 0.0));
}

#[test]
fn test_drop_after_reset_view() {
    let mut ctl = InteractionController::default();
    let mut store = SceneStore::default();
    ctl.reset_view(&store);

    let plant = ctl.drop_at(&mut store, ComponentType::Plant, Point::new(0.0, 0.0));
    assert_eq!(plant.position(), Point::new(-608.0, -384.0));
}

#[test]
fn test_press_without_hit_uses_footprints() {
    let (mut ctl, mut store, chair) = setup();

    ctl.pointer_down(&mut store, &PointerEvent::at(300.0, 300.0));
    assert!(ctl.state().is_idle());
    assert_eq!(store.selected_id(), None);

    ctl.pointer_down(&mut store, &PointerEvent::at(10.0, -10.0));
    assert_eq!(store.selected_id(), Some(chair.id()));
    assert!(matches!(
        ctl.state(),
        InteractionState::Dragging { id, .. } if id == chair.id()
    ));
}
