//! Pointer-down handling - gesture disambiguation.
//!
//! One press arms exactly one gesture. The hit classifier decides what was
//! pressed; this module decides what that press means, in priority order:
//!
//! 1. outpaint handle        -> OutpaintDragging
//! 2. outpaint target's body -> selection only, no drag
//! 3. resize corner          -> Resizing
//! 4. object body            -> ExportDragStaged (alternate modifier)
//!                              or selection rules + MovingSelection
//! 5. empty canvas           -> PanningCanvas, selection cleared unless
//!                              additive, outpaint session ends

use tracing::debug;

use crate::app::Artboard;
use crate::input::hit::HitTarget;
use crate::input::modifiers::Modifiers;
use crate::profile_scope;

impl Artboard {
    pub fn on_pointer_down(&mut self, pos: (f64, f64), modifiers: Modifiers) {
        profile_scope!("on_pointer_down");
        self.modifiers = modifiers;

        match self.classify_pointer_target(pos) {
            HitTarget::OutpaintHandle(handle) => {
                let Some(session) = self.outpaint.as_mut() else {
                    return;
                };
                session.begin_drag();
                let baseline = session.offsets;
                self.input_state.start_outpaint_drag(handle, pos, baseline);
                debug!(?handle, "outpaint handle drag started");
            }
            HitTarget::ResizeCorner { object_id, corner } => {
                let Some(object) = self.scene.get(object_id) else {
                    return;
                };
                self.input_state.start_resizing(
                    object_id,
                    corner,
                    object.position,
                    object.size,
                    pos,
                );
                debug!(object = object_id, ?corner, "resize started");
            }
            HitTarget::ObjectBody(id) => self.pointer_down_on_body(id, pos),
            HitTarget::Empty => {
                // An empty press ends the outpaint session and, without the
                // additive modifier, drops the selection before panning.
                if self.outpaint.is_some() {
                    self.cancel_outpaint();
                }
                if !self.modifiers.additive() {
                    self.selection.clear();
                }
                self.input_state.start_panning(pos);
            }
        }
    }

    fn pointer_down_on_body(&mut self, id: u64, pos: (f64, f64)) {
        // The outpaint target's body only re-selects; free move is
        // suppressed so a stray drag cannot dislodge the expansion setup.
        if self.outpaint.as_ref().is_some_and(|s| s.target == id) {
            self.apply_selection_click(id);
            self.queue_promotion();
            return;
        }

        // The alternate modifier stages an export drag instead of a move;
        // the host claims it through take_staged_export when its drag
        // protocol engages.
        if self.modifiers.alternate_drag() {
            self.input_state.stage_export_drag(id, pos);
            debug!(object = id, "export drag staged");
            return;
        }

        self.apply_selection_click(id);
        if self.selection.contains(id) {
            self.input_state.start_moving(id, pos);
            // A drag is now in progress: promotion applies synchronously.
            self.promote_now();
        }
    }

    /// Selection rules for a body click: additive toggles membership,
    /// clicking an already-selected member keeps the group, anything else
    /// replaces the selection.
    fn apply_selection_click(&mut self, id: u64) {
        if self.modifiers.additive() {
            self.selection.toggle(id);
        } else if !self.selection.contains(id) {
            self.selection.replace(id);
        }
    }
}
