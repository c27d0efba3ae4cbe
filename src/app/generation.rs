//! Asynchronous image generation - dispatch and completion handling.
//!
//! Generation runs on the background executor so a slow model call never
//! stalls the interaction thread. Workers park finished results in the
//! completion queue; the frame tick drains it and mutates the scene on the
//! interaction thread, where all scene mutation happens.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, warn};

use crate::app::Artboard;
use crate::background::TaskResult;
use crate::boundary::{GeneratedImage, GenerationRequest};
use crate::error::CanvasError;
use crate::notifications::Notice;

/// A finished background task waiting to be applied on the interaction
/// thread.
pub(crate) enum Completion {
    Generated {
        label: String,
        result: TaskResult<GeneratedImage>,
    },
}

/// Shared between workers (push) and the frame tick (drain).
pub(crate) type CompletionQueue = Arc<Mutex<Vec<Completion>>>;

impl Artboard {
    /// Queue an image generation request.
    ///
    /// Returns immediately; the scene stays untouched until the result
    /// lands through a later frame tick. Without a configured generator
    /// this degrades to an error notice.
    pub fn request_generation(&mut self, request: GenerationRequest) {
        let Some(generator) = self.generator.clone() else {
            self.notices
                .push(Notice::error("No image generator is configured"));
            return;
        };

        let label = request.short_label();
        debug!(request = %label, "generation queued");

        let completions = Arc::clone(&self.completions);
        let task_label = label.clone();
        self.background.spawn(
            "image_generation",
            move || generator.generate(&request).map_err(|e| format!("{e:#}")),
            move |result| {
                completions.lock().push(Completion::Generated {
                    label: task_label,
                    result,
                });
            },
        );
    }

    /// Drain the completion queue, placing successes and surfacing
    /// failures. Returns true if anything was applied.
    pub(crate) fn apply_completions(&mut self) -> bool {
        let completed: Vec<Completion> = std::mem::take(&mut *self.completions.lock());
        if completed.is_empty() {
            return false;
        }

        for completion in completed {
            match completion {
                Completion::Generated { label, result } => match result {
                    Ok(generated) => {
                        let center = self.view_center_world();
                        let id = self.import_image(
                            generated.image,
                            generated.native_size,
                            label,
                            Some(center),
                        );
                        debug!(object = id, "generated image placed");
                        self.notices.push(Notice::success("Image generated"));
                    }
                    Err(message) => {
                        let error = CanvasError::Generation(message);
                        warn!(request = %label, %error, "generation failed");
                        self.notices.push(Notice::error(error.to_string()));
                    }
                },
            }
        }
        true
    }
}
