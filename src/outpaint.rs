//! Outpaint tool: per-edge canvas expansion with magnetic alignment guides.
//!
//! An outpaint session targets one object and accumulates four edge offsets
//! in the object's own world units (unscaled by zoom). Eight handles sit on
//! the *expanded* boundary: four edges, four corners. Dragging a handle
//! outward grows the corresponding offsets; a linked modifier mirrors the
//! growth to the opposite edge (or all four edges from a corner).
//!
//! While dragging, edges whose offsets land near another edge's offset snap
//! to it and report a smart guide, so users can line up symmetric
//! expansions without pixel counting. Offsets convert to native pixels only
//! at commit time, using the object's native-resolution-to-world ratio per
//! axis.

use crate::constants::{
    GUIDE_EXACT_EPSILON, GUIDE_FADE_MS, GUIDE_MIN_OFFSET, GUIDE_SNAP_DISTANCE,
};
use crate::types::{Corner, Edge, PixelOffsets, PlacedImage};
use std::time::{Duration, Instant};

// ============================================================================
// Offsets
// ============================================================================

/// Per-edge expansion distances in the target object's world units.
/// Never negative.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ExpansionOffsets {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl ExpansionOffsets {
    pub fn get(&self, edge: Edge) -> f64 {
        match edge {
            Edge::Top => self.top,
            Edge::Right => self.right,
            Edge::Bottom => self.bottom,
            Edge::Left => self.left,
        }
    }

    /// Set one edge's offset, clamped to non-negative.
    pub fn set(&mut self, edge: Edge, value: f64) {
        let value = value.max(0.0);
        match edge {
            Edge::Top => self.top = value,
            Edge::Right => self.right = value,
            Edge::Bottom => self.bottom = value,
            Edge::Left => self.left = value,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.top == 0.0 && self.right == 0.0 && self.bottom == 0.0 && self.left == 0.0
    }
}

// ============================================================================
// Handles & Guides
// ============================================================================

/// One of the eight drag handles on the expanded boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutpaintHandle {
    Edge(Edge),
    Corner(Corner),
}

impl OutpaintHandle {
    pub fn all() -> [OutpaintHandle; 8] {
        [
            OutpaintHandle::Corner(Corner::TopLeft),
            OutpaintHandle::Corner(Corner::TopRight),
            OutpaintHandle::Corner(Corner::BottomLeft),
            OutpaintHandle::Corner(Corner::BottomRight),
            OutpaintHandle::Edge(Edge::Top),
            OutpaintHandle::Edge(Edge::Right),
            OutpaintHandle::Edge(Edge::Bottom),
            OutpaintHandle::Edge(Edge::Left),
        ]
    }
}

/// How closely two edge offsets agree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuideKind {
    /// Offsets agree to within a world unit
    Exact,
    /// Offsets are close enough to snap
    Near,
}

/// An alignment hint between two edges with similar offsets.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SmartGuide {
    pub kind: GuideKind,
    /// (dragged edge, matched edge)
    pub edges: (Edge, Edge),
    /// The matched edge's offset value
    pub value: f64,
}

// ============================================================================
// Session
// ============================================================================

/// Live state of one outpaint interaction. Exists from tool activation on a
/// target until commit or cancel; offsets reset to zero at both ends.
#[derive(Clone, Debug)]
pub struct OutpaintSession {
    /// Id of the object being expanded
    pub target: u64,
    /// Current per-edge expansion
    pub offsets: ExpansionOffsets,
    /// Guides produced by the most recent drag update
    pub guides: Vec<SmartGuide>,
    /// When set, guides clear once this deadline passes
    pub guide_fade_deadline: Option<Instant>,
}

impl OutpaintSession {
    pub fn new(target: u64) -> Self {
        Self {
            target,
            offsets: ExpansionOffsets::default(),
            guides: Vec::new(),
            guide_fade_deadline: None,
        }
    }

    /// A new handle drag begins: stale guides vanish immediately.
    pub fn begin_drag(&mut self) {
        self.guides.clear();
        self.guide_fade_deadline = None;
    }

    /// The handle drag ended: guides linger briefly, then fade.
    pub fn end_drag(&mut self) {
        if !self.guides.is_empty() {
            self.guide_fade_deadline = Some(Instant::now() + Duration::from_millis(GUIDE_FADE_MS));
        }
    }

    /// Clear guides whose fade deadline has passed. Returns true if the
    /// guide list changed.
    pub fn expire_stale_guides(&mut self) -> bool {
        match self.guide_fade_deadline {
            Some(deadline) if Instant::now() >= deadline => {
                self.guides.clear();
                self.guide_fade_deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Apply a handle drag. `world_delta` is the pointer's total world-space
    /// travel since the drag started and `baseline` the offsets at that
    /// moment, so reprocessing each pointer-move stays lossless.
    pub fn drag_handle(
        &mut self,
        handle: OutpaintHandle,
        baseline: &ExpansionOffsets,
        world_delta: (f64, f64),
        linked: bool,
    ) {
        match handle {
            OutpaintHandle::Edge(edge) => {
                let (sx, sy) = edge.outward_sign();
                let outward = world_delta.0 * sx + world_delta.1 * sy;
                self.drag_edge(edge, baseline, outward, linked);
            }
            OutpaintHandle::Corner(corner) => {
                self.drag_corner(corner, baseline, world_delta, linked);
            }
        }
    }

    /// Edge drag: outward pointer travel grows the edge's offset from its
    /// baseline, floored at zero. Linked mode mirrors the same growth onto
    /// the opposite edge.
    pub fn drag_edge(
        &mut self,
        edge: Edge,
        baseline: &ExpansionOffsets,
        outward_delta: f64,
        linked: bool,
    ) {
        self.offsets.set(edge, baseline.get(edge) + outward_delta);
        let mut changed = vec![edge];
        if linked {
            let opposite = edge.opposite();
            self.offsets
                .set(opposite, baseline.get(opposite) + outward_delta);
            changed.push(opposite);
        }
        self.refresh_guides(&changed);
    }

    /// Corner drag: grows both adjacent edges by min(|dx|, |dy|), positive
    /// only when both components point outward, negative when both point
    /// inward, zero for ambiguous diagonals. Linked mode applies the signed
    /// magnitude to all four edges.
    pub fn drag_corner(
        &mut self,
        corner: Corner,
        baseline: &ExpansionOffsets,
        world_delta: (f64, f64),
        linked: bool,
    ) {
        let (sign_x, sign_y) = corner.to_signs();
        let outward_x = world_delta.0 * sign_x;
        let outward_y = world_delta.1 * sign_y;

        let magnitude = world_delta.0.abs().min(world_delta.1.abs());
        let sign = if outward_x > 0.0 && outward_y > 0.0 {
            1.0
        } else if outward_x < 0.0 && outward_y < 0.0 {
            -1.0
        } else {
            0.0
        };
        let growth = sign * magnitude;

        let changed: Vec<Edge> = if linked {
            Edge::all().to_vec()
        } else {
            let (a, b) = corner.edges();
            vec![a, b]
        };
        for &edge in &changed {
            self.offsets.set(edge, baseline.get(edge) + growth);
        }
        self.refresh_guides(&changed);
    }

    /// Snap changed edges to nearby edge offsets, then rebuild the guide
    /// list from the final values. Deterministic: edges are processed in a
    /// fixed order and each snaps to its nearest candidate.
    fn refresh_guides(&mut self, changed: &[Edge]) {
        for &edge in changed {
            let value = self.offsets.get(edge);
            if value < GUIDE_MIN_OFFSET {
                continue;
            }
            let mut nearest: Option<(f64, f64)> = None;
            for &other in Edge::all() {
                if other == edge {
                    continue;
                }
                let candidate = self.offsets.get(other);
                if candidate < GUIDE_MIN_OFFSET {
                    continue;
                }
                let diff = (value - candidate).abs();
                if diff >= GUIDE_EXACT_EPSILON
                    && diff <= GUIDE_SNAP_DISTANCE
                    && nearest.is_none_or(|(d, _)| diff < d)
                {
                    nearest = Some((diff, candidate));
                }
            }
            if let Some((_, target)) = nearest {
                self.offsets.set(edge, target);
            }
        }

        self.guides.clear();
        self.guide_fade_deadline = None;
        let mut seen: Vec<(u8, u8)> = Vec::new();
        for &edge in changed {
            let value = self.offsets.get(edge);
            if value < GUIDE_MIN_OFFSET {
                continue;
            }
            for &other in Edge::all() {
                if other == edge {
                    continue;
                }
                let candidate = self.offsets.get(other);
                if candidate < GUIDE_MIN_OFFSET {
                    continue;
                }
                let key = pair_key(edge, other);
                if seen.contains(&key) {
                    continue;
                }
                let diff = (value - candidate).abs();
                let kind = if diff < GUIDE_EXACT_EPSILON {
                    GuideKind::Exact
                } else if diff <= GUIDE_SNAP_DISTANCE {
                    GuideKind::Near
                } else {
                    continue;
                };
                seen.push(key);
                self.guides.push(SmartGuide {
                    kind,
                    edges: (edge, other),
                    value: candidate,
                });
            }
        }
    }

    /// The target's rectangle grown by the current offsets, as
    /// ((x, y), (w, h)) in world coordinates.
    pub fn expanded_rect(&self, object: &PlacedImage) -> ((f64, f64), (f64, f64)) {
        (
            (
                object.position.0 - self.offsets.left,
                object.position.1 - self.offsets.top,
            ),
            (
                object.size.0 + self.offsets.left + self.offsets.right,
                object.size.1 + self.offsets.top + self.offsets.bottom,
            ),
        )
    }

    /// World positions of the eight handles on the expanded boundary.
    pub fn handle_positions(&self, object: &PlacedImage) -> Vec<(OutpaintHandle, (f64, f64))> {
        let ((x, y), (w, h)) = self.expanded_rect(object);
        vec![
            (OutpaintHandle::Corner(Corner::TopLeft), (x, y)),
            (OutpaintHandle::Corner(Corner::TopRight), (x + w, y)),
            (OutpaintHandle::Corner(Corner::BottomLeft), (x, y + h)),
            (OutpaintHandle::Corner(Corner::BottomRight), (x + w, y + h)),
            (OutpaintHandle::Edge(Edge::Top), (x + w / 2.0, y)),
            (OutpaintHandle::Edge(Edge::Right), (x + w, y + h / 2.0)),
            (OutpaintHandle::Edge(Edge::Bottom), (x + w / 2.0, y + h)),
            (OutpaintHandle::Edge(Edge::Left), (x, y + h / 2.0)),
        ]
    }

    /// Convert the world-unit offsets to native image pixels using the
    /// target's resolution-to-world ratio, per axis, rounded to whole
    /// pixels.
    pub fn pixel_offsets(&self, object: &PlacedImage) -> PixelOffsets {
        let ratio_x = object.native_size.0 as f64 / object.size.0;
        let ratio_y = object.native_size.1 as f64 / object.size.1;
        PixelOffsets {
            top: (self.offsets.top * ratio_y).round() as u32,
            right: (self.offsets.right * ratio_x).round() as u32,
            bottom: (self.offsets.bottom * ratio_y).round() as u32,
            left: (self.offsets.left * ratio_x).round() as u32,
        }
    }
}

fn pair_key(a: Edge, b: Edge) -> (u8, u8) {
    let (a, b) = (a as u8, b as u8);
    if a <= b { (a, b) } else { (b, a) }
}
