//! Scroll-wheel handling - pan by default, zoom with the gate modifier held.

use crate::app::Artboard;
use crate::constants::{SCROLL_LINE_HEIGHT, ZOOM_STEP};
use crate::input::modifiers::Modifiers;

/// Scroll input as delivered by the host, preserving the device's unit.
///
/// Trackpads and high-resolution wheels report pixels; classic wheels
/// report lines. The two need different zoom sensitivities and line
/// deltas scale by [`SCROLL_LINE_HEIGHT`] when panning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollDelta {
    Pixels(f64, f64),
    Lines(f64, f64),
}

impl Artboard {
    pub fn on_scroll(&mut self, pos: (f64, f64), delta: ScrollDelta, modifiers: Modifiers) {
        self.modifiers = modifiers;

        // Zoom with Command (platform) or Control key
        if self.modifiers.zoom_gate() {
            let zoom_factor = match delta {
                ScrollDelta::Pixels(_, dy) => 1.0 - dy / 500.0,
                ScrollDelta::Lines(_, dy) => 1.0 - dy / 50.0,
            };

            if (zoom_factor - 1.0).abs() > 0.001 {
                self.viewport.zoom_around(zoom_factor, pos);
            }
            return;
        }

        // Default: canvas panning
        match delta {
            ScrollDelta::Pixels(dx, dy) => {
                self.viewport.pan_by(dx, dy);
            }
            ScrollDelta::Lines(dx, dy) => {
                self.viewport
                    .pan_by(dx * SCROLL_LINE_HEIGHT, dy * SCROLL_LINE_HEIGHT);
            }
        }
    }

    /// Step the zoom in one notch, keeping the world point under `cursor`
    /// fixed on screen. Returns true if the zoom actually changed.
    pub fn zoom_in(&mut self, cursor: (f64, f64)) -> bool {
        self.viewport.zoom_at(cursor, ZOOM_STEP)
    }

    /// Step the zoom out one notch around `cursor`.
    pub fn zoom_out(&mut self, cursor: (f64, f64)) -> bool {
        self.viewport.zoom_at(cursor, -ZOOM_STEP)
    }

    /// Snap back to 100% zoom around `cursor`.
    pub fn zoom_reset(&mut self, cursor: (f64, f64)) -> bool {
        self.viewport.zoom_reset(cursor)
    }
}
