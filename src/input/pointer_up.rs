//! Pointer-up handling - finalize the active gesture.

use tracing::debug;

use crate::app::Artboard;
use crate::input::modifiers::Modifiers;

impl Artboard {
    /// Finalize whatever gesture is in flight and return to Idle.
    ///
    /// Moves and resizes keep the spatial index in sync on every pointer
    /// move, so there is nothing to flush here. Outpaint drags latch their
    /// offsets into the session and start the guide fade timer. A staged
    /// export the host never claimed is silently abandoned.
    pub fn on_pointer_up(&mut self, _pos: (f64, f64), modifiers: Modifiers) {
        self.modifiers = modifiers;

        if self.input_state.is_outpaint_dragging() {
            if let Some(session) = self.outpaint.as_mut() {
                session.end_drag();
            }
            debug!("outpaint handle drag finished");
        } else if let Some(id) = self.input_state.export_staged_id() {
            debug!(object = id, "staged export abandoned");
        }

        self.input_state.reset();
    }
}
