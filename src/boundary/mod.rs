//! External collaborator boundaries.
//!
//! Everything the engine cannot do by itself lives behind a trait here:
//! producing image pixels (generation), merging pixels onto a larger canvas
//! (compositing), and persisting scene snapshots. The engine talks to
//! collaborators in terms of [`ImageRef`] handles and native pixel
//! dimensions; it never decodes or owns pixel data for placed objects.
//!
//! [`ImageRef`]: crate::types::ImageRef

pub mod compositor;
pub mod persist;

use serde::{Deserialize, Serialize};

use crate::types::ImageRef;

pub use compositor::{CompositedImage, NeutralFillCompositor, OutpaintCompositor};
pub use persist::{JsonSnapshotStore, SceneSnapshot, SnapshotStore};

// ============================================================================
// Image Generation
// ============================================================================

/// A request handed to the image-generation collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Free-form prompt text.
    pub prompt: String,
    /// References to images the generator may condition on.
    pub sources: Vec<ImageRef>,
    /// Requested output resolution in pixels, when the caller cares.
    pub size_hint: Option<(u32, u32)>,
    /// Requested aspect ratio (width / height), when the caller cares.
    pub aspect_hint: Option<f64>,
}

impl GenerationRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            sources: Vec::new(),
            size_hint: None,
            aspect_hint: None,
        }
    }

    pub fn with_source(mut self, source: ImageRef) -> Self {
        self.sources.push(source);
        self
    }

    pub fn with_size_hint(mut self, size: (u32, u32)) -> Self {
        self.size_hint = Some(size);
        self
    }

    pub fn with_aspect_hint(mut self, aspect: f64) -> Self {
        self.aspect_hint = Some(aspect);
        self
    }

    /// Short form of the prompt for notices and task names.
    pub(crate) fn short_label(&self) -> String {
        const MAX: usize = 40;
        if self.prompt.chars().count() <= MAX {
            self.prompt.clone()
        } else {
            let truncated: String = self.prompt.chars().take(MAX).collect();
            format!("{truncated}…")
        }
    }
}

/// A finished generation: a handle to the new image plus its resolution.
#[derive(Debug, Clone)]
pub struct GeneratedImage {
    pub image: ImageRef,
    pub native_size: (u32, u32),
}

/// Produces new images from prompts. Implementations typically call a
/// remote service; they run on background workers and must be shareable
/// across threads.
pub trait ImageGenerator: Send + Sync {
    fn generate(&self, request: &GenerationRequest) -> anyhow::Result<GeneratedImage>;
}
