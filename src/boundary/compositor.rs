//! Outpaint compositing boundary.
//!
//! Committing an outpaint session replaces the target's image with a larger
//! one. The engine computes the pixel offsets and hands them to a
//! compositor; what actually paints the pixels is the host's business. The
//! in-crate [`NeutralFillCompositor`] produces a neutral-filled canvas of
//! the expanded size so the flow works end to end without a remote service.

use std::collections::HashMap;

use anyhow::bail;
use image::{Rgba, RgbaImage};
use parking_lot::Mutex;

use crate::types::{ImageRef, PixelOffsets};

/// The result of compositing: a handle to the expanded image, its pixel
/// dimensions, and where the original's top-left corner sits inside it.
#[derive(Debug, Clone)]
pub struct CompositedImage {
    pub image: ImageRef,
    pub size: (u32, u32),
    /// `(left, top)` pixel offset of the original image inside the canvas.
    pub origin: (u32, u32),
}

/// Merges a source image onto a larger canvas grown by per-edge offsets.
///
/// The expanded dimensions are always
/// `(native_w + left + right, native_h + top + bottom)` and the original
/// lands at `(left, top)`.
pub trait OutpaintCompositor: Send + Sync {
    fn composite(
        &self,
        source: &ImageRef,
        native_size: (u32, u32),
        offsets: PixelOffsets,
    ) -> anyhow::Result<CompositedImage>;
}

/// Default compositor: allocates the expanded RGBA canvas with a uniform
/// neutral fill and keeps it available for the host to fetch. It cannot
/// resolve the source handle to pixels, so painting the original at
/// [`CompositedImage::origin`] is left to the host when it uploads or
/// persists the canvas.
pub struct NeutralFillCompositor {
    fill: Rgba<u8>,
    produced: Mutex<HashMap<ImageRef, RgbaImage>>,
}

impl NeutralFillCompositor {
    pub fn new() -> Self {
        Self::with_fill([127, 127, 127, 255])
    }

    pub fn with_fill(rgba: [u8; 4]) -> Self {
        Self {
            fill: Rgba(rgba),
            produced: Mutex::new(HashMap::new()),
        }
    }

    /// Take ownership of a canvas produced by an earlier composite call.
    pub fn take_canvas(&self, image: &ImageRef) -> Option<RgbaImage> {
        self.produced.lock().remove(image)
    }
}

impl Default for NeutralFillCompositor {
    fn default() -> Self {
        Self::new()
    }
}

impl OutpaintCompositor for NeutralFillCompositor {
    fn composite(
        &self,
        _source: &ImageRef,
        native_size: (u32, u32),
        offsets: PixelOffsets,
    ) -> anyhow::Result<CompositedImage> {
        let (native_w, native_h) = native_size;
        if native_w == 0 || native_h == 0 {
            bail!("source image has no pixels ({native_w}x{native_h})");
        }

        let (added_w, added_h) = offsets.added();
        let size = (native_w + added_w, native_h + added_h);
        let canvas = RgbaImage::from_pixel(size.0, size.1, self.fill);

        let image = ImageRef::mint();
        self.produced.lock().insert(image.clone(), canvas);

        Ok(CompositedImage {
            image,
            size,
            origin: (offsets.left, offsets.top),
        })
    }
}
