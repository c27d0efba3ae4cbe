//! Pointer-move handling - drives whichever gesture is armed.
//!
//! ## Performance Notes
//!
//! Pointer move fires very frequently during drags (60+ times per second).
//! Key optimizations:
//! - Early exit when no gesture is active
//! - One state-machine read per move, no hit testing
//! - Batched position updates for group moves
//!
//! Enable profiling with `cargo build --features profiling` to see timing.

use crate::app::Artboard;
use crate::input::modifiers::Modifiers;
use crate::profile_scope;
use crate::resize::resize_aspect_locked;

impl Artboard {
    pub fn on_pointer_move(&mut self, pos: (f64, f64), modifiers: Modifiers) {
        profile_scope!("on_pointer_move");

        self.modifiers = modifiers;
        if self.input_state.is_idle() {
            return;
        }

        // Handle corner resizing
        if let Some((object_id, corner, start_origin, start_size, start_pos)) =
            self.input_state.resize_params()
        {
            profile_scope!("object_resize");

            let zoom = self.viewport.zoom;
            let world_delta = (
                (pos.0 - start_pos.0) / zoom,
                (pos.1 - start_pos.1) / zoom,
            );
            let (new_origin, new_size) =
                resize_aspect_locked(start_origin, start_size, corner, world_delta);

            if let Some(object) = self.scene.get_mut(object_id) {
                object.position = new_origin;
                object.size = new_size;
            }
            self.scene.sync_object(object_id);
        } else if let Some((handle, start_pos, baseline)) = self.input_state.outpaint_params() {
            // Handle outpaint handle dragging
            profile_scope!("outpaint_drag");

            let zoom = self.viewport.zoom;
            let world_delta = (
                (pos.0 - start_pos.0) / zoom,
                (pos.1 - start_pos.1) / zoom,
            );
            // Linked mode follows the live modifier, so holding or releasing
            // it mid-drag takes effect on the very next move.
            let linked = self.modifiers.linked_expansion();
            if let Some(session) = self.outpaint.as_mut() {
                session.drag_handle(handle, &baseline, world_delta, linked);
            }
        } else if self.input_state.is_moving_selection() {
            // Handle selection dragging (group move)
            profile_scope!("selection_move");

            if let Some(last_pos) = self.input_state.last_pointer_pos() {
                let world_delta = self
                    .viewport
                    .delta_screen_to_world((pos.0 - last_pos.0, pos.1 - last_pos.1));
                let ids: Vec<u64> = self.selection.ids().to_vec();
                self.scene.translate_objects(&ids, world_delta);
                self.input_state.update_last_pointer_pos(pos);
            }
        } else if self.input_state.is_panning() {
            // Handle canvas panning (raw screen delta, zoom-independent)
            if let Some(last_pos) = self.input_state.last_pointer_pos() {
                self.viewport
                    .pan_by(pos.0 - last_pos.0, pos.1 - last_pos.1);
                self.input_state.update_last_pointer_pos(pos);
            }
        }
    }
}
