//! Scene store: the ordered collection of placed image objects.
//!
//! The scene owns object identity (ids minted from a monotonic counter and
//! never reused), z-index assignment, and the spatial index that accelerates
//! hit testing. All mutations that move or resize objects go through the
//! scene so the index stays in sync.

use crate::constants::{CULLING_MARGIN, IMPORT_FIT_FRACTION, IMPORT_STAGGER};
use crate::spatial_index::SpatialIndex;
use crate::types::{ImageRef, PlacedImage};

/// Ordered store of placed objects plus the scene-wide counters.
pub struct Scene {
    /// Objects in creation order. Paint order comes from `z_index`.
    pub objects: Vec<PlacedImage>,
    /// Next id to mint. Monotonic, never reused within a scene.
    pub next_object_id: u64,
    /// Next z-index handed to a freshly added object.
    next_z: i32,
    spatial: SpatialIndex,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
            next_object_id: 1,
            next_z: 0,
            spatial: SpatialIndex::new(),
        }
    }

    /// Rebuild a scene from restored objects, e.g. after loading a snapshot.
    /// Counters resume above the highest restored id and z.
    pub fn from_objects(objects: Vec<PlacedImage>) -> Self {
        let next_object_id = objects.iter().map(|o| o.id + 1).max().unwrap_or(1);
        let next_z = objects.iter().map(|o| o.z_index + 1).max().unwrap_or(0);
        let spatial = SpatialIndex::from_objects(
            objects.iter().map(|o| (o.id, o.position, o.size)),
        );
        Self {
            objects,
            next_object_id,
            next_z,
            spatial,
        }
    }

    /// Add a new object on top of everything else. Returns its id.
    pub fn add_object(
        &mut self,
        src: ImageRef,
        position: (f64, f64),
        size: (f64, f64),
        native_size: (u32, u32),
        label: impl Into<String>,
    ) -> u64 {
        let id = self.next_object_id;
        self.next_object_id += 1;
        let z_index = self.next_z;
        self.next_z += 1;

        self.spatial.insert(id, position, size);
        self.objects.push(PlacedImage {
            id,
            src,
            position,
            size,
            native_size,
            z_index,
            label: label.into(),
        });
        id
    }

    pub fn get(&self, id: u64) -> Option<&PlacedImage> {
        self.objects.iter().find(|o| o.id == id)
    }

    pub fn get_mut(&mut self, id: u64) -> Option<&mut PlacedImage> {
        self.objects.iter_mut().find(|o| o.id == id)
    }

    pub fn contains(&self, id: u64) -> bool {
        self.objects.iter().any(|o| o.id == id)
    }

    /// Remove an object. Returns it, or None if the id is unknown.
    pub fn remove(&mut self, id: u64) -> Option<PlacedImage> {
        let idx = self.objects.iter().position(|o| o.id == id)?;
        self.spatial.remove(id);
        Some(self.objects.remove(idx))
    }

    /// Clone an object with a small positional stagger, placed on top.
    /// Returns the new id, or None if the source id is unknown.
    pub fn duplicate(&mut self, id: u64) -> Option<u64> {
        let source = self.get(id)?.clone();
        let position = (
            source.position.0 + IMPORT_STAGGER,
            source.position.1 + IMPORT_STAGGER,
        );
        Some(self.add_object(
            source.src,
            position,
            source.size,
            source.native_size,
            source.label,
        ))
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Re-sync an object's spatial entry after its position or size changed.
    pub fn sync_object(&mut self, id: u64) {
        if let Some(obj) = self.objects.iter().find(|o| o.id == id) {
            self.spatial.update(id, obj.position, obj.size);
        }
    }

    /// Move every listed object by a world-space delta. Unknown ids are
    /// skipped.
    pub fn translate_objects(&mut self, ids: &[u64], delta: (f64, f64)) {
        for obj in self.objects.iter_mut().filter(|o| ids.contains(&o.id)) {
            obj.position.0 += delta.0;
            obj.position.1 += delta.1;
            self.spatial.update(obj.id, obj.position, obj.size);
        }
    }

    /// Topmost object under a world point, by z-index.
    pub fn topmost_at(&self, point: (f64, f64)) -> Option<u64> {
        self.spatial
            .query_point(point.0, point.1)
            .into_iter()
            .filter_map(|id| self.get(id))
            .max_by_key(|o| o.z_index)
            .map(|o| o.id)
    }

    /// Objects the host should draw for a visible world rect, in paint order
    /// (lowest z first). Includes a culling margin against edge pop-in.
    pub fn visible_objects(&self, rect: (f64, f64, f64, f64)) -> Vec<&PlacedImage> {
        let ids = self.spatial.query_visible(rect, CULLING_MARGIN);
        let mut out: Vec<&PlacedImage> = self
            .objects
            .iter()
            .filter(|o| ids.contains(&o.id))
            .collect();
        out.sort_by_key(|o| o.z_index);
        out
    }

    /// Highest z-index currently in the scene.
    pub fn max_z(&self) -> Option<i32> {
        self.objects.iter().map(|o| o.z_index).max()
    }

    /// Assign fresh z-indices. Unknown ids are skipped; `next_z` moves past
    /// the highest assigned value.
    pub fn assign_z_indices(&mut self, assignments: &[(u64, i32)]) {
        for &(id, z) in assignments {
            if let Some(obj) = self.objects.iter_mut().find(|o| o.id == id) {
                obj.z_index = z;
                self.next_z = self.next_z.max(z + 1);
            }
        }
    }

    /// Whether any object's top-left sits (within a pixel) on `candidate`.
    pub fn occupied_at(&self, candidate: (f64, f64)) -> bool {
        self.objects.iter().any(|o| {
            (o.position.0 - candidate.0).abs() < 1.0 && (o.position.1 - candidate.1).abs() < 1.0
        })
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

/// World size for an imported image: native dimensions scaled down (never
/// up) to fit within a fraction of the visible world extent, aspect kept.
pub fn fit_import_size(native_size: (u32, u32), visible_extent: (f64, f64)) -> (f64, f64) {
    let (w, h) = (native_size.0 as f64, native_size.1 as f64);
    let max_w = visible_extent.0 * IMPORT_FIT_FRACTION;
    let max_h = visible_extent.1 * IMPORT_FIT_FRACTION;
    let scale = (max_w / w).min(max_h / h).min(1.0);
    (w * scale, h * scale)
}
