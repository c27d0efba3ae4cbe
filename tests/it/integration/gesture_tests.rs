//! Integration tests for the pointer gesture machine.
//!
//! Each test drives the engine through the public event handlers only
//! (pointer down/move/up, scroll), the way a host would, and asserts on the
//! externally visible outcome: selection, z-order, object geometry, camera.

use artboard::input::{Modifiers, ScrollDelta};

use crate::helpers::*;

// ============================================================================
// Click Selection & Z-Promotion
// ============================================================================

#[test]
fn test_click_selects_and_promotes_on_press() {
    let mut artboard = artboard_with_objects(3);
    let ids = ids_by_z(&artboard);
    let bottom = ids[0];

    press(&mut artboard, (50.0, 50.0));

    // Promotion is synchronous on press, before any release.
    assert_selected(&artboard, &[bottom]);
    assert_eq!(*ids_by_z(&artboard).last().unwrap(), bottom);

    release(&mut artboard, (50.0, 50.0));
    assert!(artboard.input_state.is_idle());
}

#[test]
fn test_click_empty_clears_selection() {
    let mut artboard = artboard_with_objects(2);
    click(&mut artboard, (50.0, 50.0));
    assert_eq!(artboard.selection.len(), 1);

    click(&mut artboard, (700.0, 600.0));
    assert_selected(&artboard, &[]);
}

#[test]
fn test_shift_click_builds_ordered_selection() {
    let mut artboard = artboard_with_objects(3);
    let ids = ids_by_z(&artboard);
    let (a, b, c) = (ids[0], ids[1], ids[2]);

    shift_click(&mut artboard, (50.0, 50.0)); // a
    shift_click(&mut artboard, (350.0, 50.0)); // c
    shift_click(&mut artboard, (200.0, 50.0)); // b

    // Insertion order is preserved and the last added is primary.
    assert_selected(&artboard, &[a, c, b]);
    assert_eq!(artboard.selection.primary(), Some(b));

    // The whole group floated to the top in selection order.
    assert_eq!(ids_by_z(&artboard), vec![a, c, b]);
}

#[test]
fn test_shift_click_toggles_membership_off() {
    let mut artboard = artboard_with_objects(3);
    let ids = ids_by_z(&artboard);
    let (a, c) = (ids[0], ids[2]);

    shift_click(&mut artboard, (50.0, 50.0));
    shift_click(&mut artboard, (350.0, 50.0));
    shift_click(&mut artboard, (50.0, 50.0)); // a leaves

    assert_selected(&artboard, &[c]);
}

#[test]
fn test_plain_click_on_member_keeps_group() {
    let mut artboard = artboard_with_objects(3);
    let ids = ids_by_z(&artboard);
    let (a, c) = (ids[0], ids[2]);

    shift_click(&mut artboard, (50.0, 50.0));
    shift_click(&mut artboard, (350.0, 50.0));

    // Plain click on a member must not collapse the selection to one.
    click(&mut artboard, (50.0, 50.0));
    assert_selected(&artboard, &[a, c]);
}

// ============================================================================
// Moving Selections
// ============================================================================

#[test]
fn test_drag_moves_whole_selection() {
    let mut artboard = artboard_with_objects(3);
    let ids = ids_by_z(&artboard);
    let (a, b, c) = (ids[0], ids[1], ids[2]);

    shift_click(&mut artboard, (50.0, 50.0));
    shift_click(&mut artboard, (350.0, 50.0));

    // Grab a member and drag; every member follows, non-members stay.
    drag(&mut artboard, (50.0, 50.0), (90.0, 80.0));

    assert_object_position(&artboard, a, (40.0, 30.0));
    assert_object_position(&artboard, c, (340.0, 30.0));
    assert_object_position(&artboard, b, (150.0, 0.0));
}

#[test]
fn test_move_delta_converts_through_zoom() {
    let mut artboard = TestSceneBuilder::new()
        .with_object((0.0, 0.0), (100.0, 100.0))
        .with_zoom(2.0)
        .build();
    let id = artboard.scene.objects[0].id;

    // Screen (100, 100) is world (50, 50); a 100px screen drag is 50 world
    // units at zoom 2.
    drag(&mut artboard, (100.0, 100.0), (200.0, 150.0));
    assert_object_position(&artboard, id, (50.0, 25.0));
}

#[test]
fn test_move_applies_incrementally() {
    let mut artboard = artboard_with_objects(1);
    let id = ids_by_z(&artboard)[0];

    press(&mut artboard, (50.0, 50.0));
    drag_to(&mut artboard, (60.0, 50.0));
    assert_object_position(&artboard, id, (10.0, 0.0));
    drag_to(&mut artboard, (80.0, 70.0));
    assert_object_position(&artboard, id, (30.0, 20.0));
    release(&mut artboard, (80.0, 70.0));
    assert_object_position(&artboard, id, (30.0, 20.0));
}

#[test]
fn test_moved_object_is_hittable_at_new_position() {
    let mut artboard = artboard_with_objects(1);
    let id = ids_by_z(&artboard)[0];

    drag(&mut artboard, (50.0, 50.0), (450.0, 350.0));
    assert_object_position(&artboard, id, (400.0, 300.0));

    // The spatial index followed the move.
    click(&mut artboard, (450.0, 350.0));
    assert_selected(&artboard, &[id]);
    click(&mut artboard, (50.0, 50.0));
    assert_selected(&artboard, &[]);
}

// ============================================================================
// Panning
// ============================================================================

#[test]
fn test_empty_drag_pans_canvas() {
    let mut artboard = artboard_with_objects(2);
    let ids = ids_by_z(&artboard);
    click(&mut artboard, (50.0, 50.0));

    press(&mut artboard, (700.0, 600.0));
    // Selection drops on the press itself.
    assert_selected(&artboard, &[]);

    drag_to(&mut artboard, (720.0, 630.0));
    release(&mut artboard, (720.0, 630.0));

    assert_eq!(artboard.viewport.pan_x, 20.0);
    assert_eq!(artboard.viewport.pan_y, 30.0);
    // Panning moves the camera, not the world.
    assert_object_position(&artboard, ids[0], (0.0, 0.0));
}

#[test]
fn test_additive_empty_drag_keeps_selection() {
    let mut artboard = artboard_with_objects(1);
    let id = ids_by_z(&artboard)[0];
    click(&mut artboard, (50.0, 50.0));

    artboard.on_pointer_down((700.0, 600.0), Modifiers::shift_held());
    artboard.on_pointer_move((710.0, 610.0), Modifiers::shift_held());
    artboard.on_pointer_up((710.0, 610.0), Modifiers::shift_held());

    assert_selected(&artboard, &[id]);
    assert_eq!(artboard.viewport.pan_x, 10.0);
}

#[test]
fn test_pan_is_zoom_independent() {
    let mut artboard = TestSceneBuilder::new().with_zoom(4.0).build();

    drag(&mut artboard, (500.0, 400.0), (530.0, 390.0));

    // Raw screen delta, not divided by zoom.
    assert_eq!(artboard.viewport.pan_x, 30.0);
    assert_eq!(artboard.viewport.pan_y, -10.0);
}

#[test]
fn test_select_and_move_after_panning() {
    let mut artboard = TestSceneBuilder::new()
        .with_object((10.0, 10.0), (50.0, 50.0))
        .build();
    let id = ids_by_z(&artboard)[0];

    drag(&mut artboard, (500.0, 400.0), (600.0, 450.0));
    assert_eq!(artboard.viewport.pan_x, 100.0);
    assert_eq!(artboard.viewport.pan_y, 50.0);

    // The object now paints at screen (110, 60)..(160, 110); hit testing
    // must see through the shifted camera.
    press(&mut artboard, (120.0, 70.0));
    assert_selected(&artboard, &[id]);

    // A 20px screen drag is 20 world units at zoom 1, pan notwithstanding.
    drag_to(&mut artboard, (140.0, 70.0));
    release(&mut artboard, (140.0, 70.0));
    assert_object_position(&artboard, id, (30.0, 10.0));
}

// ============================================================================
// Corner Resizing
// ============================================================================

#[test]
fn test_corner_drag_resizes_with_locked_aspect() {
    let mut artboard = TestSceneBuilder::new()
        .with_object((0.0, 0.0), (200.0, 100.0))
        .build();
    let id = artboard.scene.objects[0].id;
    click(&mut artboard, (100.0, 50.0));

    drag(&mut artboard, (200.0, 100.0), (300.0, 150.0));

    let object = artboard.scene.get(id).unwrap();
    assert_eq!(object.size, (300.0, 150.0));
    // Opposite corner anchored.
    assert_eq!(object.position, (0.0, 0.0));
}

#[test]
fn test_resize_width_floor_keeps_aspect() {
    let mut artboard = TestSceneBuilder::new()
        .with_object((0.0, 0.0), (200.0, 100.0))
        .build();
    let id = artboard.scene.objects[0].id;
    click(&mut artboard, (100.0, 50.0));

    // Dragging far past the opposite corner pins the size at the floor
    // instead of inverting the rectangle.
    drag(&mut artboard, (200.0, 100.0), (-400.0, -200.0));

    let object = artboard.scene.get(id).unwrap();
    assert_eq!(object.size, (50.0, 25.0));
    assert_eq!(object.position, (0.0, 0.0));
}

#[test]
fn test_resize_converts_pointer_travel_through_zoom() {
    let mut artboard = TestSceneBuilder::new()
        .with_object((0.0, 0.0), (200.0, 100.0))
        .with_zoom(2.0)
        .build();
    let id = artboard.scene.objects[0].id;
    click(&mut artboard, (200.0, 100.0)); // world (100, 50)

    // Bottom-right corner renders at screen (400, 200).
    drag(&mut artboard, (400.0, 200.0), (500.0, 250.0));

    let object = artboard.scene.get(id).unwrap();
    assert_eq!(object.size, (250.0, 125.0));
}

#[test]
fn test_top_left_resize_anchors_bottom_right() {
    let mut artboard = TestSceneBuilder::new()
        .with_object((100.0, 100.0), (200.0, 100.0))
        .build();
    let id = artboard.scene.objects[0].id;
    click(&mut artboard, (200.0, 150.0));

    drag(&mut artboard, (100.0, 100.0), (0.0, 60.0));

    let object = artboard.scene.get(id).unwrap();
    assert_eq!(object.size, (300.0, 150.0));
    assert_eq!(object.max_corner(), (300.0, 200.0));
}

#[test]
fn test_resize_replays_from_gesture_start() {
    // A wild intermediate move must not corrupt the result: each move
    // recomputes from the gesture-start geometry.
    let mut artboard = TestSceneBuilder::new()
        .with_object((0.0, 0.0), (200.0, 100.0))
        .build();
    let id = artboard.scene.objects[0].id;
    click(&mut artboard, (100.0, 50.0));

    press(&mut artboard, (200.0, 100.0));
    assert!(artboard.input_state.is_resizing());
    assert_eq!(artboard.input_state.resizing_object_id(), Some(id));
    drag_to(&mut artboard, (800.0, 400.0));
    drag_to(&mut artboard, (300.0, 150.0));
    release(&mut artboard, (300.0, 150.0));

    let object = artboard.scene.get(id).unwrap();
    assert_eq!(object.size, (300.0, 150.0));
}

// ============================================================================
// Export Drag Staging
// ============================================================================

#[test]
fn test_alternate_press_stages_export() {
    let mut artboard = artboard_with_objects(2);
    let id = ids_by_z(&artboard)[0];

    artboard.on_pointer_down((50.0, 50.0), Modifiers::alt_held());
    assert!(artboard.input_state.is_export_staged());
    assert_eq!(artboard.staged_export(), Some(id));
    // Staging leaves the selection alone.
    assert_selected(&artboard, &[]);

    let payload = artboard.take_staged_export().unwrap();
    assert_eq!(payload.id, id);
    assert_eq!(payload.label, "image-0");
    assert!(artboard.input_state.is_idle());
}

#[test]
fn test_unclaimed_export_stage_is_abandoned_on_release() {
    let mut artboard = artboard_with_objects(1);

    artboard.on_pointer_down((50.0, 50.0), Modifiers::alt_held());
    artboard.on_pointer_up((50.0, 50.0), Modifiers::alt_held());

    assert_eq!(artboard.staged_export(), None);
    assert!(artboard.take_staged_export().is_none());
    assert!(artboard.input_state.is_idle());
}

// ============================================================================
// Scroll: Pan & Gated Zoom
// ============================================================================

#[test]
fn test_scroll_pans_by_pixel_delta() {
    let mut artboard = empty_artboard();

    artboard.on_scroll((500.0, 400.0), ScrollDelta::Pixels(10.0, -30.0), Modifiers::default());

    assert_eq!(artboard.viewport.pan_x, 10.0);
    assert_eq!(artboard.viewport.pan_y, -30.0);
    assert_eq!(artboard.viewport.zoom, 1.0);
}

#[test]
fn test_line_scroll_pans_by_line_height() {
    let mut artboard = empty_artboard();

    artboard.on_scroll((500.0, 400.0), ScrollDelta::Lines(1.0, 2.0), Modifiers::default());

    assert_eq!(artboard.viewport.pan_x, 20.0);
    assert_eq!(artboard.viewport.pan_y, 40.0);
}

#[test]
fn test_gated_scroll_zooms_around_cursor() {
    let mut artboard = TestSceneBuilder::new().with_pan(80.0, -40.0).build();
    let cursor = (500.0, 400.0);
    let anchor = artboard.viewport.screen_to_world(cursor);

    let gate = Modifiers {
        ctrl: true,
        ..Modifiers::default()
    };
    artboard.on_scroll(cursor, ScrollDelta::Pixels(0.0, -100.0), gate);

    assert!((artboard.viewport.zoom - 1.2).abs() < 1e-9);
    let after = artboard.viewport.screen_to_world(cursor);
    assert!((after.0 - anchor.0).abs() < 1e-6);
    assert!((after.1 - anchor.1).abs() < 1e-6);
}

#[test]
fn test_meta_gates_zoom_like_ctrl() {
    let mut artboard = empty_artboard();
    let gate = Modifiers {
        meta: true,
        ..Modifiers::default()
    };

    artboard.on_scroll((0.0, 0.0), ScrollDelta::Lines(0.0, -5.0), gate);
    assert!((artboard.viewport.zoom - 1.1).abs() < 1e-9);
}

#[test]
fn test_negligible_gated_scroll_is_dropped() {
    let mut artboard = empty_artboard();
    let gate = Modifiers {
        ctrl: true,
        ..Modifiers::default()
    };

    artboard.on_scroll((500.0, 400.0), ScrollDelta::Pixels(0.0, 0.4), gate);

    assert_eq!(artboard.viewport.zoom, 1.0);
    assert_eq!(artboard.viewport.pan_x, 0.0);
}

// ============================================================================
// Zoom Steps
// ============================================================================

#[test]
fn test_zoom_steps_clamp_at_bounds() {
    let mut artboard = empty_artboard();
    let cursor = (500.0, 400.0);

    for _ in 0..60 {
        artboard.zoom_in(cursor);
    }
    assert_eq!(artboard.viewport.zoom, 5.0);
    assert!(!artboard.zoom_in(cursor));

    for _ in 0..60 {
        artboard.zoom_out(cursor);
    }
    assert_eq!(artboard.viewport.zoom, 0.1);
    assert!(!artboard.zoom_out(cursor));
}

#[test]
fn test_zoom_reset_restores_scale_around_cursor() {
    let mut artboard = TestSceneBuilder::new()
        .with_zoom(2.5)
        .with_pan(100.0, 50.0)
        .build();
    let cursor = (300.0, 200.0);
    let anchor = artboard.viewport.screen_to_world(cursor);

    assert!(artboard.zoom_reset(cursor));
    assert_eq!(artboard.viewport.zoom, 1.0);
    let after = artboard.viewport.screen_to_world(cursor);
    assert!((after.0 - anchor.0).abs() < 1e-6);
    assert!((after.1 - anchor.1).abs() < 1e-6);

    // Already at 100%: nothing to do.
    assert!(!artboard.zoom_reset(cursor));
}

// ============================================================================
// Gesture Lifecycle
// ============================================================================

#[test]
fn test_release_always_returns_to_idle() {
    let mut artboard = artboard_with_objects(1);
    let id = ids_by_z(&artboard)[0];

    press(&mut artboard, (50.0, 50.0));
    assert!(artboard.input_state.is_moving_selection());
    assert_eq!(artboard.input_state.moving_primary_id(), Some(id));
    release(&mut artboard, (50.0, 50.0));
    assert!(artboard.input_state.is_idle());

    press(&mut artboard, (700.0, 600.0));
    assert!(artboard.input_state.is_panning());
    release(&mut artboard, (700.0, 600.0));
    assert!(artboard.input_state.is_idle());
}

#[test]
fn test_release_without_press_is_harmless() {
    let mut artboard = empty_artboard();
    release(&mut artboard, (100.0, 100.0));
    assert!(artboard.input_state.is_idle());
}

#[test]
fn test_cancel_interactions_mid_move() {
    let mut artboard = artboard_with_objects(1);
    let id = ids_by_z(&artboard)[0];

    press(&mut artboard, (50.0, 50.0));
    drag_to(&mut artboard, (70.0, 50.0));
    artboard.cancel_interactions();

    assert!(artboard.input_state.is_idle());
    // The partial move sticks; cancel is not an undo.
    assert_object_position(&artboard, id, (20.0, 0.0));

    // A stray move after cancel does nothing.
    drag_to(&mut artboard, (200.0, 200.0));
    assert_object_position(&artboard, id, (20.0, 0.0));
}
