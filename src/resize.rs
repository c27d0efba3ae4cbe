//! Aspect-locked corner resize math.
//!
//! Resizing always measures from the gesture start, never incrementally:
//! the new rectangle is a pure function of the start geometry and the
//! pointer's total world-space travel, so jittery pointer streams cannot
//! accumulate rounding drift and the aspect ratio stays exact.

use crate::constants::MIN_OBJECT_SIZE;
use crate::types::Corner;

/// Resolve a corner drag into a new rectangle.
///
/// `world_delta` is the pointer's total travel since the gesture started,
/// already divided by zoom. The dominant axis drives the resize: whichever
/// of the width delta or the aspect-scaled height delta is larger in
/// magnitude wins, and the other dimension follows from the start aspect
/// ratio. Width never drops below [`MIN_OBJECT_SIZE`] (the height floor
/// follows from the aspect ratio). The corner opposite the dragged one
/// stays fixed.
///
/// Returns `(origin, size)` in world coordinates.
pub fn resize_aspect_locked(
    start_origin: (f64, f64),
    start_size: (f64, f64),
    corner: Corner,
    world_delta: (f64, f64),
) -> ((f64, f64), (f64, f64)) {
    let (start_w, start_h) = start_size;
    let aspect = start_w / start_h;

    // Outward-positive extent deltas for this corner.
    let (sign_x, sign_y) = corner.to_signs();
    let extent_dx = world_delta.0 * sign_x;
    let extent_dy = world_delta.1 * sign_y;

    // Dominant axis drives; express the height delta in width units so the
    // comparison is fair for non-square objects.
    let height_as_width = extent_dy * aspect;
    let driver = if extent_dx.abs() >= height_as_width.abs() {
        extent_dx
    } else {
        height_as_width
    };

    let driver_ratio = driver / start_w;
    let new_w = (start_w * (1.0 + driver_ratio)).max(MIN_OBJECT_SIZE);
    let new_h = new_w / aspect;

    // Anchor the opposite corner where it was at gesture start.
    let anchor = anchor_position(start_origin, start_size, corner);
    let origin = match corner {
        Corner::TopLeft => (anchor.0 - new_w, anchor.1 - new_h),
        Corner::TopRight => (anchor.0, anchor.1 - new_h),
        Corner::BottomLeft => (anchor.0 - new_w, anchor.1),
        Corner::BottomRight => anchor,
    };

    (origin, (new_w, new_h))
}

/// World position of the corner opposite the dragged one.
fn anchor_position(origin: (f64, f64), size: (f64, f64), dragged: Corner) -> (f64, f64) {
    let (x, y) = origin;
    let (w, h) = size;
    match dragged.opposite() {
        Corner::TopLeft => (x, y),
        Corner::TopRight => (x + w, y),
        Corner::BottomLeft => (x, y + h),
        Corner::BottomRight => (x + w, y + h),
    }
}
