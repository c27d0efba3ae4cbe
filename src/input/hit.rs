//! Pointer-target classification.
//!
//! Every pointer-down resolves to exactly one target before any state
//! changes, in priority order: outpaint handles (only while a session is
//! active), then resize corners of selected objects, then object bodies
//! (topmost by z), then empty canvas. Handle and corner hit boxes live in
//! screen space and scale with zoom, the same way they are drawn.

use crate::app::Artboard;
use crate::constants::{
    MIN_HIT_AREA, OUTPAINT_HANDLE_SIZE, RESIZE_CORNER_SIZE, RESIZE_CORNER_TOLERANCE,
};
use crate::profile_scope;
use crate::types::Corner;

/// What a pointer position lands on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HitTarget {
    /// A handle of the active outpaint session.
    OutpaintHandle(crate::outpaint::OutpaintHandle),
    /// A resize corner of a selected object.
    ResizeCorner { object_id: u64, corner: Corner },
    /// An object's body; carries the topmost id under the pointer.
    ObjectBody(u64),
    /// Nothing.
    Empty,
}

impl Artboard {
    /// Resolve a screen-space pointer position to a hit target.
    pub fn classify_pointer_target(&self, screen: (f64, f64)) -> HitTarget {
        profile_scope!("classify_pointer_target");
        let zoom = self.viewport.zoom;

        // Outpaint handles cover everything else while a session runs.
        if let Some(session) = &self.outpaint {
            if let Some(object) = self.scene.get(session.target) {
                let half = (OUTPAINT_HANDLE_SIZE * zoom).max(MIN_HIT_AREA) / 2.0;
                for (handle, world) in session.handle_positions(object) {
                    let pos = self.viewport.world_to_screen(world);
                    if (screen.0 - pos.0).abs() <= half && (screen.1 - pos.1).abs() <= half {
                        return HitTarget::OutpaintHandle(handle);
                    }
                }
            }
        }

        // Resize corners of selected objects, primary first. The outpaint
        // target shows expansion handles instead of resize corners.
        let corner_size = RESIZE_CORNER_SIZE * zoom;
        for &id in self.selection.ids().iter().rev() {
            if self.outpaint.as_ref().is_some_and(|s| s.target == id) {
                continue;
            }
            let Some(object) = self.scene.get(id) else {
                continue;
            };
            for &corner in Corner::all() {
                let pos = self
                    .viewport
                    .world_to_screen(object.corner_position(corner));
                if corner_box_hit(
                    screen,
                    pos,
                    corner.to_signs(),
                    corner_size,
                    RESIZE_CORNER_TOLERANCE,
                ) {
                    return HitTarget::ResizeCorner {
                        object_id: id,
                        corner,
                    };
                }
            }
        }

        // Object bodies, topmost z wins.
        let world = self.viewport.screen_to_world(screen);
        if let Some(id) = self.scene.topmost_at(world) {
            return HitTarget::ObjectBody(id);
        }

        HitTarget::Empty
    }
}

/// Whether `screen` falls inside a corner's hit box: `size` pixels inward
/// from the corner plus `tolerance` pixels outward, per axis. The corner's
/// outward signs orient the box.
fn corner_box_hit(
    screen: (f64, f64),
    corner: (f64, f64),
    signs: (f64, f64),
    size: f64,
    tolerance: f64,
) -> bool {
    let in_axis = |value: f64, center: f64, sign: f64| {
        if sign > 0.0 {
            value >= center - size && value <= center + tolerance
        } else {
            value >= center - tolerance && value <= center + size
        }
    };
    in_axis(screen.0, corner.0, signs.0) && in_axis(screen.1, corner.1, signs.1)
}
