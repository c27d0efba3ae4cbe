//! Outpaint session control - begin, cancel, commit.
//!
//! A session lives on one target object. Handle drags grow the pending
//! expansion; commit hands the accumulated per-edge offsets to the
//! compositor and rewrites the target in place. Compositing runs
//! synchronously: the result must land before the pointer interacts with
//! the reshaped object, and the compositor itself does no model calls.

use tracing::{debug, info, warn};

use crate::app::Artboard;
use crate::error::{CanvasError, CanvasResult};
use crate::notifications::Notice;
use crate::outpaint::OutpaintSession;

impl Artboard {
    /// Enter outpaint mode on an object, making it the sole selection.
    /// Returns false for unknown ids. A session already in progress moves
    /// to the new target, dropping its pending offsets.
    pub fn begin_outpaint(&mut self, id: u64) -> bool {
        if !self.scene.contains(id) {
            return false;
        }
        self.selection.replace(id);
        self.queue_promotion();
        self.outpaint = Some(OutpaintSession::new(id));
        debug!(object = id, "outpaint session started");
        true
    }

    /// Drop the session without touching the target.
    pub fn cancel_outpaint(&mut self) {
        if self.outpaint.take().is_some() {
            debug!("outpaint session cancelled");
        }
    }

    /// Commit the session: composite the expansion and rewrite the target
    /// in place.
    ///
    /// On success the target keeps its id but its image handle, native
    /// size, and world rect all grow to the expanded bounds, and the
    /// session ends. A session whose offsets round to zero pixels ends
    /// without calling the compositor. On compositing failure the session
    /// stays open so the user can retry or cancel.
    pub fn commit_outpaint(&mut self) -> CanvasResult<u64> {
        let Some(session) = self.outpaint.as_ref() else {
            return Err(CanvasError::NoOutpaintSession);
        };
        let target = session.target;
        let world = session.offsets;

        let Some(object) = self.scene.get(target) else {
            // The target left the scene under us; nothing to commit onto.
            self.outpaint = None;
            return Err(CanvasError::MissingObject(target));
        };
        let pixels = session.pixel_offsets(object);
        let src = object.src.clone();
        let native = object.native_size;

        if pixels.is_zero() {
            self.outpaint = None;
            debug!(object = target, "outpaint commit with no expansion");
            return Ok(target);
        }

        match self.compositor.composite(&src, native, pixels) {
            Ok(composited) => {
                if let Some(object) = self.scene.get_mut(target) {
                    object.src = composited.image;
                    object.native_size = composited.size;
                    object.position.0 -= world.left;
                    object.position.1 -= world.top;
                    object.size.0 += world.left + world.right;
                    object.size.1 += world.top + world.bottom;
                }
                self.scene.sync_object(target);
                self.outpaint = None;
                info!(
                    object = target,
                    width = composited.size.0,
                    height = composited.size.1,
                    "outpaint committed"
                );
                self.notices.push(Notice::success("Outpaint committed"));
                Ok(target)
            }
            Err(e) => {
                let message = format!("{e:#}");
                warn!(object = target, error = %message, "outpaint compositing failed");
                self.notices
                    .push(Notice::error(format!("Outpaint failed: {message}")));
                Err(CanvasError::Compositing(message))
            }
        }
    }
}
