//! Viewport state and coordinate conversion.
//!
//! The viewport maps an infinite world plane onto the host's screen through
//! a pan offset and a zoom factor:
//!
//! `screen = world * zoom + pan`
//!
//! Zoom operations keep the world point under the cursor fixed, so zooming
//! feels anchored to the pointer rather than the origin. All math is f64;
//! conversions are exact enough that a screen->world->screen round trip
//! stays well inside a millionth of a pixel.

use crate::constants::{DEFAULT_ZOOM, MAX_ZOOM, MIN_ZOOM};
use serde::{Deserialize, Serialize};

/// Pan/zoom camera over the world plane.
///
/// Updates are whole-value: every mutation recomputes the full (pan, zoom)
/// pair before returning, so observers never see a half-applied state.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Screen-space x offset of the world origin
    pub pan_x: f64,
    /// Screen-space y offset of the world origin
    pub pan_y: f64,
    /// Scale factor, clamped to [MIN_ZOOM, MAX_ZOOM]
    pub zoom: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            pan_x: 0.0,
            pan_y: 0.0,
            zoom: DEFAULT_ZOOM,
        }
    }
}

impl Viewport {
    pub fn new(pan_x: f64, pan_y: f64, zoom: f64) -> Self {
        Self {
            pan_x,
            pan_y,
            zoom: zoom.clamp(MIN_ZOOM, MAX_ZOOM),
        }
    }

    /// Convert a world position to screen coordinates.
    #[inline]
    pub fn world_to_screen(&self, world: (f64, f64)) -> (f64, f64) {
        (
            world.0 * self.zoom + self.pan_x,
            world.1 * self.zoom + self.pan_y,
        )
    }

    /// Convert a screen position to world coordinates.
    #[inline]
    pub fn screen_to_world(&self, screen: (f64, f64)) -> (f64, f64) {
        (
            (screen.0 - self.pan_x) / self.zoom,
            (screen.1 - self.pan_y) / self.zoom,
        )
    }

    /// Convert a screen-space delta to world units.
    #[inline]
    pub fn delta_screen_to_world(&self, delta: (f64, f64)) -> (f64, f64) {
        (delta.0 / self.zoom, delta.1 / self.zoom)
    }

    /// Translate the view by a raw screen-space delta.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.pan_x += dx;
        self.pan_y += dy;
    }

    /// Adjust zoom by an additive delta, keeping the world point under
    /// `cursor` (screen coordinates) stationary on screen.
    ///
    /// The delta is applied before clamping, so repeated steps at a zoom
    /// bound are no-ops instead of accumulating.
    pub fn zoom_at(&mut self, cursor: (f64, f64), delta: f64) -> bool {
        self.set_zoom_anchored(self.zoom + delta, cursor)
    }

    /// Adjust zoom by a multiplicative factor around `cursor`. Returns true
    /// if the viewport changed.
    pub fn zoom_around(&mut self, factor: f64, cursor: (f64, f64)) -> bool {
        self.set_zoom_anchored(self.zoom * factor, cursor)
    }

    /// Reset to 1.0 zoom, keeping `cursor` anchored.
    pub fn zoom_reset(&mut self, cursor: (f64, f64)) -> bool {
        self.set_zoom_anchored(DEFAULT_ZOOM, cursor)
    }

    fn set_zoom_anchored(&mut self, target: f64, cursor: (f64, f64)) -> bool {
        let new_zoom = target.clamp(MIN_ZOOM, MAX_ZOOM);
        if (new_zoom - self.zoom).abs() < f64::EPSILON {
            return false;
        }
        // Anchor: world point under the cursor must map back to the cursor
        // after the zoom change.
        let anchor = self.screen_to_world(cursor);
        self.zoom = new_zoom;
        self.pan_x = cursor.0 - anchor.0 * new_zoom;
        self.pan_y = cursor.1 - anchor.1 * new_zoom;
        true
    }

    /// World-space rectangle currently visible in a viewport of the given
    /// pixel size, as (min_x, min_y, max_x, max_y).
    pub fn visible_world_rect(&self, viewport_size: (f64, f64)) -> (f64, f64, f64, f64) {
        let (min_x, min_y) = self.screen_to_world((0.0, 0.0));
        let (max_x, max_y) = self.screen_to_world(viewport_size);
        (min_x, min_y, max_x, max_y)
    }
}
