//! Input state machine - unified state management for all pointer gestures.
//!
//! A single explicit state machine instead of scattered boolean flags makes
//! impossible states unrepresentable: a pointer-down can only ever arm one
//! gesture, and pointer-up returns to Idle from anywhere.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> OutpaintDragging     (pointer down on an outpaint handle)
//! Idle -> Resizing             (pointer down on a resize corner of a selected object)
//! Idle -> ExportDragStaged     (pointer down on an object with the export modifier)
//! Idle -> MovingSelection      (pointer down on an object body)
//! Idle -> PanningCanvas        (pointer down on empty canvas)
//!
//! Any -> Idle                  (pointer up - finalizes the gesture)
//! ```

use crate::outpaint::{ExpansionOffsets, OutpaintHandle};
use crate::types::Corner;

/// Unified input state for all pointer interactions.
#[derive(Debug, Clone)]
pub enum InputState {
    /// No active gesture
    Idle,

    /// Dragging empty canvas to pan the viewport
    PanningCanvas {
        /// Last pointer position (screen) for incremental deltas
        last_pos: (f64, f64),
    },

    /// Dragging the whole selection by its primary object
    MovingSelection {
        /// The object under the cursor when the drag started
        primary_id: u64,
        /// Last pointer position (screen); the baseline resets every move
        last_pos: (f64, f64),
    },

    /// Dragging a corner of the primary selected object
    Resizing {
        object_id: u64,
        corner: Corner,
        /// Object origin (world) at gesture start; the opposite corner
        /// stays anchored relative to this
        start_origin: (f64, f64),
        /// Object size at gesture start; deltas measure from here
        start_size: (f64, f64),
        /// Pointer position (screen) at gesture start
        start_pos: (f64, f64),
    },

    /// Dragging an outpaint handle of the session target
    OutpaintDragging {
        handle: OutpaintHandle,
        /// Pointer position (screen) at gesture start
        start_pos: (f64, f64),
        /// Session offsets at gesture start; deltas apply on top of these
        baseline: ExpansionOffsets,
    },

    /// An export drag was staged on an object; no scene mutation until the
    /// host confirms a drop target on release
    ExportDragStaged {
        object_id: u64,
        start_pos: (f64, f64),
    },
}

impl Default for InputState {
    fn default() -> Self {
        Self::Idle
    }
}

impl InputState {
    /// Returns true if the state is Idle
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Returns true if any pointer-captured gesture is active
    pub fn is_dragging(&self) -> bool {
        !self.is_idle()
    }

    /// Returns true if currently panning the canvas
    pub fn is_panning(&self) -> bool {
        matches!(self, Self::PanningCanvas { .. })
    }

    /// Returns true if currently moving the selection
    pub fn is_moving_selection(&self) -> bool {
        matches!(self, Self::MovingSelection { .. })
    }

    /// Returns true if currently resizing an object
    pub fn is_resizing(&self) -> bool {
        matches!(self, Self::Resizing { .. })
    }

    /// Returns true if currently dragging an outpaint handle
    pub fn is_outpaint_dragging(&self) -> bool {
        matches!(self, Self::OutpaintDragging { .. })
    }

    /// Returns true if an export drag is staged
    pub fn is_export_staged(&self) -> bool {
        matches!(self, Self::ExportDragStaged { .. })
    }

    /// Get the object id driving a move, if moving
    pub fn moving_primary_id(&self) -> Option<u64> {
        match self {
            Self::MovingSelection { primary_id, .. } => Some(*primary_id),
            _ => None,
        }
    }

    /// Get the object id being resized, if resizing
    pub fn resizing_object_id(&self) -> Option<u64> {
        match self {
            Self::Resizing { object_id, .. } => Some(*object_id),
            _ => None,
        }
    }

    /// Get the staged export object id, if staged
    pub fn export_staged_id(&self) -> Option<u64> {
        match self {
            Self::ExportDragStaged { object_id, .. } => Some(*object_id),
            _ => None,
        }
    }

    /// Full resize gesture context: (object, corner, start origin, start size,
    /// start pointer position)
    pub fn resize_params(&self) -> Option<(u64, Corner, (f64, f64), (f64, f64), (f64, f64))> {
        match self {
            Self::Resizing {
                object_id,
                corner,
                start_origin,
                start_size,
                start_pos,
            } => Some((*object_id, *corner, *start_origin, *start_size, *start_pos)),
            _ => None,
        }
    }

    /// Full outpaint drag context: (handle, start pointer position, baseline offsets)
    pub fn outpaint_params(&self) -> Option<(OutpaintHandle, (f64, f64), ExpansionOffsets)> {
        match self {
            Self::OutpaintDragging {
                handle,
                start_pos,
                baseline,
            } => Some((*handle, *start_pos, *baseline)),
            _ => None,
        }
    }

    /// Last pointer position for incremental gestures (pan, move)
    pub fn last_pointer_pos(&self) -> Option<(f64, f64)> {
        match self {
            Self::PanningCanvas { last_pos } => Some(*last_pos),
            Self::MovingSelection { last_pos, .. } => Some(*last_pos),
            _ => None,
        }
    }

    /// Advance the incremental baseline after applying a delta
    pub fn update_last_pointer_pos(&mut self, pos: (f64, f64)) {
        match self {
            Self::PanningCanvas { last_pos } => *last_pos = pos,
            Self::MovingSelection { last_pos, .. } => *last_pos = pos,
            _ => {}
        }
    }

    /// Reset to Idle state
    pub fn reset(&mut self) {
        *self = Self::Idle;
    }

    /// Start panning the canvas
    pub fn start_panning(&mut self, last_pos: (f64, f64)) {
        *self = Self::PanningCanvas { last_pos };
    }

    /// Start moving the selection
    pub fn start_moving(&mut self, primary_id: u64, last_pos: (f64, f64)) {
        *self = Self::MovingSelection {
            primary_id,
            last_pos,
        };
    }

    /// Start resizing an object from one of its corners
    pub fn start_resizing(
        &mut self,
        object_id: u64,
        corner: Corner,
        start_origin: (f64, f64),
        start_size: (f64, f64),
        start_pos: (f64, f64),
    ) {
        *self = Self::Resizing {
            object_id,
            corner,
            start_origin,
            start_size,
            start_pos,
        };
    }

    /// Start dragging an outpaint handle
    pub fn start_outpaint_drag(
        &mut self,
        handle: OutpaintHandle,
        start_pos: (f64, f64),
        baseline: ExpansionOffsets,
    ) {
        *self = Self::OutpaintDragging {
            handle,
            start_pos,
            baseline,
        };
    }

    /// Stage an export drag on an object
    pub fn stage_export_drag(&mut self, object_id: u64, start_pos: (f64, f64)) {
        *self = Self::ExportDragStaged {
            object_id,
            start_pos,
        };
    }
}
