//! R-tree acceleration for world-space queries.
//!
//! Hit testing and render culling both ask "which objects are here" at
//! pointer-event rate, so the scene keeps this index alongside its object
//! list instead of scanning it. Point and region queries run in O(log n).

use std::collections::HashMap;

use rstar::primitives::{GeomWithData, Rectangle};
use rstar::{AABB, RTree};

/// An object's world-space rectangle tagged with its id.
type IndexedRect = GeomWithData<Rectangle<[f64; 2]>, u64>;

fn corners(position: (f64, f64), size: (f64, f64)) -> ([f64; 2], [f64; 2]) {
    (
        [position.0, position.1],
        [position.0 + size.0, position.1 + size.1],
    )
}

/// Spatial index over placed objects.
///
/// The tree holds the geometry; `bounds` remembers each object's last
/// indexed rectangle so it can be located again on removal and update.
#[derive(Default)]
pub struct SpatialIndex {
    tree: RTree<IndexedRect>,
    bounds: HashMap<u64, ([f64; 2], [f64; 2])>,
}

impl SpatialIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bulk-load an index from (id, position, size) triples.
    pub fn from_objects<I>(objects: I) -> Self
    where
        I: Iterator<Item = (u64, (f64, f64), (f64, f64))>,
    {
        let mut bounds = HashMap::new();
        let rects: Vec<IndexedRect> = objects
            .map(|(id, position, size)| {
                let (lower, upper) = corners(position, size);
                bounds.insert(id, (lower, upper));
                GeomWithData::new(Rectangle::from_corners(lower, upper), id)
            })
            .collect();

        Self {
            tree: RTree::bulk_load(rects),
            bounds,
        }
    }

    /// Index an object's rectangle, replacing any previous entry for the
    /// same id.
    pub fn insert(&mut self, object_id: u64, position: (f64, f64), size: (f64, f64)) {
        self.remove(object_id);

        let (lower, upper) = corners(position, size);
        self.bounds.insert(object_id, (lower, upper));
        self.tree
            .insert(GeomWithData::new(Rectangle::from_corners(lower, upper), object_id));
    }

    /// Drop an object from the index. Returns false if it was never
    /// indexed.
    pub fn remove(&mut self, object_id: u64) -> bool {
        let Some((lower, upper)) = self.bounds.remove(&object_id) else {
            return false;
        };
        let rect = GeomWithData::new(Rectangle::from_corners(lower, upper), object_id);
        self.tree.remove(&rect).is_some()
    }

    /// Re-index an object after it moved or resized.
    pub fn update(&mut self, object_id: u64, position: (f64, f64), size: (f64, f64)) {
        self.insert(object_id, position, size);
    }

    /// Ids of all objects whose rectangle contains the world point.
    /// Boundary points count as inside.
    pub fn query_point(&self, x: f64, y: f64) -> Vec<u64> {
        self.tree
            .locate_all_at_point(&[x, y])
            .map(|rect| rect.data)
            .collect()
    }

    /// Ids of all objects intersecting a rectangular world region.
    pub fn query_rect(&self, min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Vec<u64> {
        let region = AABB::from_corners([min_x, min_y], [max_x, max_y]);
        self.tree
            .locate_in_envelope_intersecting(&region)
            .map(|rect| rect.data)
            .collect()
    }

    /// Ids intersecting a visible world rect grown by a margin, for render
    /// culling without edge pop-in.
    pub fn query_visible(&self, rect: (f64, f64, f64, f64), margin: f64) -> Vec<u64> {
        let (min_x, min_y, max_x, max_y) = rect;
        self.query_rect(min_x - margin, min_y - margin, max_x + margin, max_y + margin)
    }

    pub fn len(&self) -> usize {
        self.bounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bounds.is_empty()
    }
}
