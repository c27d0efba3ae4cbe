//! Integration tests for scene-level workflows: import, duplicate, delete,
//! and the save/load round trip as a host would drive them.

use artboard::boundary::persist::JsonSnapshotStore;
use artboard::types::ImageRef;

use crate::helpers::*;

// ============================================================================
// Import
// ============================================================================

#[test]
fn test_import_fits_large_images_to_the_view() {
    let mut artboard = empty_artboard();

    let id = artboard.import_image(ImageRef::mint(), (4000, 3000), "mural.png", None);

    let object = artboard.scene.get(id).unwrap();
    // 4000x3000 shrinks to 80% of the 1000x800 view, aspect kept, centered.
    assert_eq!(object.size, (800.0, 600.0));
    assert_eq!(object.position, (100.0, 100.0));
    assert_eq!(object.native_size, (4000, 3000));
    assert_eq!(object.label, "mural.png");
    assert_selected(&artboard, &[id]);
}

#[test]
fn test_import_never_upscales_small_images() {
    let mut artboard = empty_artboard();

    let id = artboard.import_image(ImageRef::mint(), (200, 150), "icon.png", None);

    let object = artboard.scene.get(id).unwrap();
    assert_eq!(object.size, (200.0, 150.0));
    assert_eq!(object.position, (400.0, 325.0));
}

#[test]
fn test_import_with_unknown_dimensions_uses_default_size() {
    let mut artboard = empty_artboard();

    let id = artboard.import_image(ImageRef::mint(), (0, 0), "stream.bin", None);

    let object = artboard.scene.get(id).unwrap();
    assert_eq!(object.size, (800.0, 600.0));
}

#[test]
fn test_reimport_staggers_off_occupied_spots() {
    let mut artboard = empty_artboard();

    let first = artboard.import_image(ImageRef::mint(), (800, 600), "a.png", None);
    let second = artboard.import_image(ImageRef::mint(), (800, 600), "b.png", None);
    let third = artboard.import_image(ImageRef::mint(), (800, 600), "c.png", None);

    assert_object_position(&artboard, first, (100.0, 100.0));
    assert_object_position(&artboard, second, (124.0, 124.0));
    assert_object_position(&artboard, third, (148.0, 148.0));
}

#[test]
fn test_import_centers_on_drop_point() {
    let mut artboard = empty_artboard();

    let id = artboard.import_image(
        ImageRef::mint(),
        (200, 200),
        "drop.png",
        Some((600.0, 300.0)),
    );

    assert_object_position(&artboard, id, (500.0, 200.0));
}

#[test]
fn test_import_tracks_the_camera() {
    let mut artboard = TestSceneBuilder::new()
        .with_zoom(2.0)
        .with_pan(100.0, 0.0)
        .build();

    let id = artboard.import_image(ImageRef::mint(), (800, 600), "far.png", None);

    let object = artboard.scene.get(id).unwrap();
    // The visible world extent at zoom 2 is 500x400, so the image fits to
    // 400x300 and centers on the world point under the view center.
    assert_eq!(object.size, (400.0, 300.0));
    assert_eq!(object.position, (0.0, 50.0));
    assert_eq!(id, artboard.visible_objects()[0].id);
}

// ============================================================================
// Duplicate & Delete
// ============================================================================

#[test]
fn test_duplicate_selects_the_staggered_clone() {
    let mut artboard = TestSceneBuilder::new()
        .with_image((100.0, 100.0), (300.0, 200.0), (600, 400))
        .build();
    let source = artboard.scene.objects[0].id;

    let clone = artboard.duplicate_object(source).unwrap();

    assert_ne!(clone, source);
    assert_object_position(&artboard, clone, (124.0, 124.0));
    let cloned = artboard.scene.get(clone).unwrap();
    assert_eq!(cloned.size, (300.0, 200.0));
    assert_eq!(cloned.native_size, (600, 400));
    assert_selected(&artboard, &[clone]);
    // The clone paints above its source.
    assert_eq!(*ids_by_z(&artboard).last().unwrap(), clone);

    assert!(artboard.duplicate_object(999).is_none());
}

#[test]
fn test_delete_selected_removes_the_whole_group() {
    let mut artboard = artboard_with_objects(3);
    let survivor = ids_by_z(&artboard)[1];

    shift_click(&mut artboard, (50.0, 50.0));
    shift_click(&mut artboard, (350.0, 50.0));

    assert_eq!(artboard.delete_selected(), 2);
    assert_object_count(&artboard, 1);
    assert_selected(&artboard, &[]);
    assert!(artboard.scene.contains(survivor));
}

#[test]
fn test_deleted_objects_stop_responding_to_clicks() {
    let mut artboard = artboard_with_objects(1);
    let id = ids_by_z(&artboard)[0];

    assert!(artboard.delete_object(id));
    assert!(!artboard.delete_object(id));

    click(&mut artboard, (50.0, 50.0));
    assert_selected(&artboard, &[]);
    assert!(artboard.export_payload(id).is_none());
}

// ============================================================================
// Paint Order
// ============================================================================

#[test]
fn test_visible_objects_follow_promotions() {
    let mut artboard = TestSceneBuilder::new()
        .with_object((0.0, 0.0), (200.0, 200.0))
        .with_object((100.0, 100.0), (200.0, 200.0))
        .build();
    let lower = artboard.scene.objects[0].id;

    // Bottom-first paint order, so the later object draws last.
    let before: Vec<u64> = artboard.visible_objects().iter().map(|o| o.id).collect();
    assert_eq!(before.last(), Some(&artboard.scene.objects[1].id));

    // Clicking the lower object promotes it to the top of the paint order.
    click(&mut artboard, (50.0, 50.0));
    let after: Vec<u64> = artboard.visible_objects().iter().map(|o| o.id).collect();
    assert_eq!(after.last(), Some(&lower));
}

// ============================================================================
// Save / Load Workflow
// ============================================================================

#[test]
fn test_edit_save_load_resumes_the_composition() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonSnapshotStore::new(dir.path().join("scene.json"));

    // Compose: import, move, zoom.
    let mut artboard = empty_artboard();
    let id = artboard.import_image(ImageRef::mint(), (800, 600), "harbor.png", None);
    drag(&mut artboard, (500.0, 400.0), (550.0, 450.0));
    artboard.zoom_in((500.0, 400.0));
    artboard.save_to(&store).unwrap();

    // Resume in a fresh engine.
    let mut resumed = empty_artboard();
    resumed.load_from(&store).unwrap();

    assert_object_count(&resumed, 1);
    assert_object_position(&resumed, id, (150.0, 150.0));
    assert!((resumed.viewport.zoom - 1.1).abs() < 1e-9);

    // The restored object answers clicks at its moved position.
    let center = resumed.viewport.world_to_screen((550.0, 450.0));
    click(&mut resumed, center);
    assert_selected(&resumed, &[id]);
}
