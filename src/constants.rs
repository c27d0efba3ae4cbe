//! Engine-wide constants.
//!
//! Centralizes magic numbers and interaction tuning values to make the
//! codebase more maintainable and self-documenting.

// ============================================================================
// Zoom & Pan
// ============================================================================

/// Minimum zoom level
pub const MIN_ZOOM: f64 = 0.1;

/// Maximum zoom level
pub const MAX_ZOOM: f64 = 5.0;

/// Default zoom level
pub const DEFAULT_ZOOM: f64 = 1.0;

/// Zoom step for scroll wheel
pub const ZOOM_STEP: f64 = 0.1;

// ============================================================================
// Object Defaults
// ============================================================================

/// Minimum object size (world units) for resize operations
pub const MIN_OBJECT_SIZE: f64 = 50.0;

/// Fraction of the visible world extent an imported image may occupy
pub const IMPORT_FIT_FRACTION: f64 = 0.8;

/// Offset applied when an import would land exactly on an existing object
pub const IMPORT_STAGGER: f64 = 24.0;

/// Fallback size for imports whose dimensions cannot be read
pub const DEFAULT_IMPORT_SIZE: (f64, f64) = (800.0, 600.0);

// ============================================================================
// Input Handling
// ============================================================================

/// Size of the resize corner area in screen pixels (at zoom 1.0)
pub const RESIZE_CORNER_SIZE: f64 = 30.0;

/// Extra tolerance outside the object bounds for corner hits, in screen pixels
pub const RESIZE_CORNER_TOLERANCE: f64 = 5.0;

/// Size of an outpaint handle's hit area in screen pixels (at zoom 1.0)
pub const OUTPAINT_HANDLE_SIZE: f64 = 24.0;

/// Minimum hit area size in screen pixels so hit targets stay usable when
/// zoomed far out
pub const MIN_HIT_AREA: f64 = 8.0;

/// Line-to-pixel factor for scroll wheels that report line deltas
pub const SCROLL_LINE_HEIGHT: f64 = 20.0;

// ============================================================================
// Outpaint & Smart Guides
// ============================================================================

/// Offsets below this magnitude are not considered for guide matching
pub const GUIDE_MIN_OFFSET: f64 = 1.0;

/// Offset difference below this reads as an exact match
pub const GUIDE_EXACT_EPSILON: f64 = 1.0;

/// Offset difference at or below this triggers a near guide and a snap
pub const GUIDE_SNAP_DISTANCE: f64 = 5.0;

// ============================================================================
// Animation & Timing
// ============================================================================

/// How long smart guides linger after a drag ends, in milliseconds
pub const GUIDE_FADE_MS: u64 = 600;

/// Default lifetime of an info notice in milliseconds
pub const NOTICE_LINGER_MS: u64 = 3_000;

// ============================================================================
// Viewport Culling
// ============================================================================

/// Margin in pixels around the viewport for culling (prevents pop-in at edges)
pub const CULLING_MARGIN: f64 = 50.0;

/// Surface size assumed until the host reports a real one, in pixels
pub const DEFAULT_VIEW_SIZE: (f64, f64) = (1280.0, 800.0);

// ============================================================================
// Background Work
// ============================================================================

/// Worker threads for collaborator calls
pub const DEFAULT_BACKGROUND_WORKERS: usize = 2;
