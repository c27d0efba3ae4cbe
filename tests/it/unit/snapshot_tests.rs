//! Snapshot tests using the insta crate.
//!
//! Snapshot testing captures complex output and stores it in `.snap` files,
//! making it easy to verify and update expected values. This approach is
//! particularly useful for:
//!
//! - Serialization formats (JSON, YAML, etc.)
//! - Complex data structures with many fields
//! - Output that changes frequently during development
//!
//! To update snapshots after intentional changes:
//! ```sh
//! cargo insta test --accept
//! ```
//!
//! Or review changes interactively:
//! ```sh
//! cargo insta review
//! ```
//!
//! Image handles here are fixed strings, never minted, so the output stays
//! deterministic.

use artboard::boundary::persist::SceneSnapshot;
use artboard::notifications::NoticeLevel;
use artboard::types::{Corner, Edge, ImageRef, PixelOffsets, PlacedImage};
use artboard::viewport::Viewport;

fn test_ref(name: &str) -> ImageRef {
    ImageRef::from(format!("test-{name}"))
}

// ============================================================================
// PlacedImage Serialization Tests
// ============================================================================

#[test]
fn snapshot_placed_image() {
    let object = PlacedImage {
        id: 1,
        src: test_ref("sunset"),
        position: (100.0, 200.0),
        size: (800.0, 600.0),
        native_size: (1600, 1200),
        z_index: 3,
        label: "sunset.png".to_string(),
    };
    insta::assert_json_snapshot!("placed_image", object);
}

#[test]
fn snapshot_placed_image_downscaled() {
    // World size smaller than native: a 4k image fitted into the view.
    let object = PlacedImage {
        id: 7,
        src: test_ref("panorama"),
        position: (-320.0, 48.5),
        size: (960.0, 540.0),
        native_size: (3840, 2160),
        z_index: 0,
        label: "panorama.jpg".to_string(),
    };
    insta::assert_json_snapshot!("placed_image_downscaled", object);
}

// ============================================================================
// Viewport Serialization Tests
// ============================================================================

#[test]
fn snapshot_viewport_default() {
    insta::assert_json_snapshot!("viewport_default", Viewport::default());
}

#[test]
fn snapshot_viewport_panned_and_zoomed() {
    let viewport = Viewport::new(150.0, -75.5, 2.5);
    insta::assert_json_snapshot!("viewport_panned_and_zoomed", viewport);
}

// ============================================================================
// SceneSnapshot Serialization Tests
// ============================================================================

#[test]
fn snapshot_scene_snapshot_empty() {
    insta::assert_json_snapshot!("scene_snapshot_empty", SceneSnapshot::default());
}

#[test]
fn snapshot_scene_snapshot_with_objects() {
    let snapshot = SceneSnapshot {
        viewport: Viewport::new(40.0, 25.0, 1.5),
        objects: vec![
            PlacedImage {
                id: 1,
                src: test_ref("backdrop"),
                position: (0.0, 0.0),
                size: (400.0, 300.0),
                native_size: (800, 600),
                z_index: 0,
                label: "background".to_string(),
            },
            PlacedImage {
                id: 2,
                src: test_ref("figure"),
                position: (120.0, 80.0),
                size: (200.0, 200.0),
                native_size: (512, 512),
                z_index: 1,
                label: "figure".to_string(),
            },
        ],
    };
    insta::assert_json_snapshot!("scene_snapshot_with_objects", snapshot);
}

// ============================================================================
// Offset and Enum Variant Tests
// ============================================================================

#[test]
fn snapshot_pixel_offsets() {
    let offsets = PixelOffsets {
        top: 0,
        right: 20,
        bottom: 40,
        left: 20,
    };
    insta::assert_json_snapshot!("pixel_offsets", offsets);
}

#[test]
fn snapshot_corner_variants() {
    let variants = vec![
        ("top_left", Corner::TopLeft),
        ("top_right", Corner::TopRight),
        ("bottom_left", Corner::BottomLeft),
        ("bottom_right", Corner::BottomRight),
    ];
    for (name, corner) in variants {
        insta::assert_json_snapshot!(format!("corner_{}", name), corner);
    }
}

#[test]
fn snapshot_edge_variants() {
    let variants = vec![
        ("top", Edge::Top),
        ("right", Edge::Right),
        ("bottom", Edge::Bottom),
        ("left", Edge::Left),
    ];
    for (name, edge) in variants {
        insta::assert_json_snapshot!(format!("edge_{}", name), edge);
    }
}

// ============================================================================
// String Output Snapshot Tests
// ============================================================================

#[test]
fn snapshot_notice_levels() {
    let levels = [
        ("success", NoticeLevel::Success),
        ("info", NoticeLevel::Info),
        ("warning", NoticeLevel::Warning),
        ("error", NoticeLevel::Error),
    ];

    let output: String = levels
        .iter()
        .map(|(name, level)| {
            format!(
                "{}: {} ({}s)",
                name,
                level.icon(),
                level.default_duration().as_secs()
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    insta::assert_snapshot!("notice_levels", output);
}
