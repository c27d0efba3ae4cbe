//! Selection management and the z-order promotion invariant.
//!
//! Selection is an ordered set: membership order is insertion order, and the
//! most recently added id is the *primary* object. Promotion lifts every
//! selected object above every unselected one while preserving that order,
//! so the primary always paints on top.

use crate::scene::Scene;

/// Cap on how many objects may be selected at once.
///
/// The interaction rules are written against the ordered-set abstraction,
/// so dropping to `Single` changes nothing but the cardinality.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SelectionLimit {
    Single,
    #[default]
    Unbounded,
}

/// Ordered selection set over scene object ids.
pub struct SelectionManager {
    ids: Vec<u64>,
    limit: SelectionLimit,
}

impl SelectionManager {
    pub fn new() -> Self {
        Self::with_limit(SelectionLimit::default())
    }

    pub fn with_limit(limit: SelectionLimit) -> Self {
        Self {
            ids: Vec::new(),
            limit,
        }
    }

    /// Selected ids in insertion order. Last is primary.
    pub fn ids(&self) -> &[u64] {
        &self.ids
    }

    /// The most recently selected id, if any.
    pub fn primary(&self) -> Option<u64> {
        self.ids.last().copied()
    }

    pub fn contains(&self, id: u64) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Additive toggle: absent ids join at the end (becoming primary),
    /// present ids leave. Under `SelectionLimit::Single` joining replaces
    /// the whole set.
    pub fn toggle(&mut self, id: u64) {
        if let Some(idx) = self.ids.iter().position(|&i| i == id) {
            self.ids.remove(idx);
        } else {
            self.push(id);
        }
    }

    /// Make `id` the sole selection.
    pub fn replace(&mut self, id: u64) {
        self.ids.clear();
        self.ids.push(id);
    }

    /// Drop one id from the selection, keeping the rest in order.
    pub fn remove(&mut self, id: u64) {
        self.ids.retain(|&i| i != id);
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Drop ids the scene no longer holds.
    pub fn retain_known(&mut self, scene: &Scene) {
        self.ids.retain(|&id| scene.contains(id));
    }

    fn push(&mut self, id: u64) {
        if self.limit == SelectionLimit::Single {
            self.ids.clear();
        }
        self.ids.push(id);
    }

    /// Whether the z-order invariant already holds: selected z strictly
    /// increase in insertion order and all sit above every unselected z.
    pub fn z_order_satisfied(&self, scene: &Scene) -> bool {
        if self.ids.is_empty() {
            return true;
        }
        let max_unselected = scene
            .objects
            .iter()
            .filter(|o| !self.contains(o.id))
            .map(|o| o.z_index)
            .max();

        let mut prev = max_unselected;
        for &id in &self.ids {
            let Some(z) = scene.get(id).map(|o| o.z_index) else {
                return false;
            };
            if let Some(p) = prev {
                if z <= p {
                    return false;
                }
            }
            prev = Some(z);
        }
        true
    }

    /// Lift every selected object above every unselected one, selected
    /// relative order = insertion order, primary on top. Idempotent:
    /// returns false without touching the scene when already satisfied.
    pub fn promote_selected(&mut self, scene: &mut Scene) -> bool {
        self.retain_known(scene);
        if self.z_order_satisfied(scene) {
            return false;
        }

        let base = scene
            .objects
            .iter()
            .filter(|o| !self.contains(o.id))
            .map(|o| o.z_index)
            .max()
            .unwrap_or(-1);

        let assignments: Vec<(u64, i32)> = self
            .ids
            .iter()
            .enumerate()
            .map(|(i, &id)| (id, base + 1 + i as i32))
            .collect();
        scene.assign_z_indices(&assignments);
        true
    }
}

impl Default for SelectionManager {
    fn default() -> Self {
        Self::new()
    }
}
