//! Object management - import, export, delete, duplicate.

use tracing::debug;

use crate::app::Artboard;
use crate::constants::{DEFAULT_IMPORT_SIZE, IMPORT_STAGGER};
use crate::scene::fit_import_size;
use crate::types::ImageRef;

/// What an export drag hands to the host once a drop target confirms.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportPayload {
    pub id: u64,
    pub src: ImageRef,
    pub label: String,
}

impl Artboard {
    /// Place an imported image and select it. Returns the new object's id.
    ///
    /// The image lands centered on `drop_point` (world coordinates), or on
    /// the view center when the host has no drop position. World size fits
    /// the image inside the visible area without ever upscaling; repeated
    /// imports to an occupied spot stagger diagonally so nothing stacks
    /// exactly on top of an earlier drop.
    pub fn import_image(
        &mut self,
        src: ImageRef,
        native_size: (u32, u32),
        label: impl Into<String>,
        drop_point: Option<(f64, f64)>,
    ) -> u64 {
        let (min_x, min_y, max_x, max_y) = self.visible_world_rect();
        let size = if native_size.0 == 0 || native_size.1 == 0 {
            DEFAULT_IMPORT_SIZE
        } else {
            fit_import_size(native_size, (max_x - min_x, max_y - min_y))
        };

        let center = drop_point.unwrap_or_else(|| self.view_center_world());
        let mut position = (center.0 - size.0 / 2.0, center.1 - size.1 / 2.0);
        while self.scene.occupied_at(position) {
            position.0 += IMPORT_STAGGER;
            position.1 += IMPORT_STAGGER;
        }

        let id = self
            .scene
            .add_object(src, position, size, native_size, label);
        // New objects mint on top of the z-order, so selecting needs no
        // promotion pass.
        self.selection.replace(id);
        debug!(object = id, ?position, "image imported");
        id
    }

    /// Remove an object. Drops it from the selection and, if it is the
    /// outpaint target, ends that session. Returns false for unknown ids.
    pub fn delete_object(&mut self, id: u64) -> bool {
        if self.scene.remove(id).is_none() {
            return false;
        }
        self.selection.remove(id);
        if self.outpaint.as_ref().is_some_and(|s| s.target == id) {
            self.cancel_outpaint();
        }
        debug!(object = id, "object deleted");
        true
    }

    /// Delete every selected object. Returns how many were removed.
    pub fn delete_selected(&mut self) -> usize {
        let ids: Vec<u64> = self.selection.ids().to_vec();
        ids.into_iter().filter(|&id| self.delete_object(id)).count()
    }

    /// Clone an object with a small stagger and select the clone.
    pub fn duplicate_object(&mut self, id: u64) -> Option<u64> {
        let new_id = self.scene.duplicate(id)?;
        self.selection.replace(new_id);
        debug!(source = id, object = new_id, "object duplicated");
        Some(new_id)
    }

    /// Export data for one object, if it exists.
    pub fn export_payload(&self, id: u64) -> Option<ExportPayload> {
        let object = self.scene.get(id)?;
        Some(ExportPayload {
            id,
            src: object.src.clone(),
            label: object.label.clone(),
        })
    }

    /// Object staged for an export drag, if any.
    pub fn staged_export(&self) -> Option<u64> {
        self.input_state.export_staged_id()
    }

    /// Claim the staged export drag. The host calls this when its drag
    /// protocol confirms a drop target; the stage is consumed either way.
    pub fn take_staged_export(&mut self) -> Option<ExportPayload> {
        let id = self.input_state.export_staged_id()?;
        self.input_state.reset();
        self.export_payload(id)
    }
}
