//! Core types for the artboard composition surface.
//!
//! This module defines the fundamental data structures used throughout the
//! engine: placed image objects, opaque image handles, and the edge/corner
//! geometry enums shared by the resize and outpaint tools.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Image Handles
// ============================================================================

/// Opaque handle to image pixel data held outside the engine.
///
/// The engine never touches pixels directly. Collaborators (generation,
/// compositing, export) resolve a ref to actual data when they need it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageRef(String);

impl ImageRef {
    /// Mint a fresh handle for newly produced image data.
    pub fn mint() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ImageRef {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ImageRef {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Placed Objects
// ============================================================================

/// An image object placed on the composition surface.
///
/// Position and size are in world coordinates. `native_size` is the pixel
/// dimensions of the underlying image data; the world `size` is how large
/// the object is drawn, independent of its resolution.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlacedImage {
    /// Unique identifier, minted by the scene and never reused
    pub id: u64,
    /// Handle to the image data this object displays
    pub src: ImageRef,
    /// Top-left corner in world coordinates (x, y)
    pub position: (f64, f64),
    /// Size in world units (width, height), always positive
    pub size: (f64, f64),
    /// Pixel dimensions of the underlying image data
    pub native_size: (u32, u32),
    /// Paint order; higher draws on top. Not necessarily contiguous.
    pub z_index: i32,
    /// Human-readable label shown by the host
    pub label: String,
}

impl PlacedImage {
    /// Bottom-right corner in world coordinates.
    pub fn max_corner(&self) -> (f64, f64) {
        (self.position.0 + self.size.0, self.position.1 + self.size.1)
    }

    /// World position of one of the four corners.
    pub fn corner_position(&self, corner: Corner) -> (f64, f64) {
        let (max_x, max_y) = self.max_corner();
        match corner {
            Corner::TopLeft => self.position,
            Corner::TopRight => (max_x, self.position.1),
            Corner::BottomLeft => (self.position.0, max_y),
            Corner::BottomRight => (max_x, max_y),
        }
    }
}

// ============================================================================
// Edge & Corner Geometry
// ============================================================================

/// One of the four corners of an object's rectangle.
///
/// World coordinates grow rightward and downward, so "bottom" is +y.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    /// Sign multipliers for pointer motion at this corner: +1 where moving
    /// in the positive axis direction grows the rectangle.
    pub fn to_signs(self) -> (f64, f64) {
        match self {
            Corner::TopLeft => (-1.0, -1.0),
            Corner::TopRight => (1.0, -1.0),
            Corner::BottomLeft => (-1.0, 1.0),
            Corner::BottomRight => (1.0, 1.0),
        }
    }

    /// The diagonally opposite corner (the resize anchor).
    pub fn opposite(self) -> Self {
        match self {
            Corner::TopLeft => Corner::BottomRight,
            Corner::TopRight => Corner::BottomLeft,
            Corner::BottomLeft => Corner::TopRight,
            Corner::BottomRight => Corner::TopLeft,
        }
    }

    /// The two edges that meet at this corner.
    pub fn edges(self) -> (Edge, Edge) {
        match self {
            Corner::TopLeft => (Edge::Top, Edge::Left),
            Corner::TopRight => (Edge::Top, Edge::Right),
            Corner::BottomLeft => (Edge::Bottom, Edge::Left),
            Corner::BottomRight => (Edge::Bottom, Edge::Right),
        }
    }

    pub fn all() -> &'static [Corner] {
        &[
            Corner::TopLeft,
            Corner::TopRight,
            Corner::BottomLeft,
            Corner::BottomRight,
        ]
    }
}

/// One of the four edges of an object's rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

impl Edge {
    /// Unit vector pointing outward from the rectangle through this edge.
    pub fn outward_sign(self) -> (f64, f64) {
        match self {
            Edge::Top => (0.0, -1.0),
            Edge::Right => (1.0, 0.0),
            Edge::Bottom => (0.0, 1.0),
            Edge::Left => (-1.0, 0.0),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Edge::Top => Edge::Bottom,
            Edge::Right => Edge::Left,
            Edge::Bottom => Edge::Top,
            Edge::Left => Edge::Right,
        }
    }

    pub fn all() -> &'static [Edge] {
        &[Edge::Top, Edge::Right, Edge::Bottom, Edge::Left]
    }
}

// ============================================================================
// Pixel Offsets
// ============================================================================

/// Per-edge expansion in native image pixels, as handed to the compositor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelOffsets {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl PixelOffsets {
    pub fn is_zero(&self) -> bool {
        self.top == 0 && self.right == 0 && self.bottom == 0 && self.left == 0
    }

    /// Total pixels added along each axis: (left + right, top + bottom).
    pub fn added(&self) -> (u32, u32) {
        (self.left + self.right, self.top + self.bottom)
    }
}
