//! Engine state - the Artboard struct definition.

use std::sync::Arc;

use crate::app::generation::CompletionQueue;
use crate::background::BackgroundExecutor;
use crate::boundary::{ImageGenerator, OutpaintCompositor};
use crate::input::{InputState, Modifiers};
use crate::notifications::NoticeLog;
use crate::outpaint::OutpaintSession;
use crate::perf::PerfMonitor;
use crate::scene::Scene;
use crate::selection::SelectionManager;
use crate::types::PlacedImage;
use crate::viewport::Viewport;

/// The composition surface engine.
///
/// One value owns everything the surface needs between events: camera,
/// scene, selection, the active gesture, and the handles to background
/// collaborators. Hosts feed it pointer/key/scroll events plus a frame
/// tick, and read back whatever they render.
///
/// All mutation happens on the host's interaction thread; background
/// workers only ever touch the completion queue.
pub struct Artboard {
    /// Pan/zoom camera.
    pub viewport: Viewport,
    /// Placed objects plus their spatial index.
    pub scene: Scene,
    /// Ordered multi-selection.
    pub selection: SelectionManager,
    /// The active pointer gesture.
    pub input_state: InputState,
    /// Modifier keys as of the last key or pointer event.
    pub modifiers: Modifiers,
    /// Active outpaint session, if any.
    pub outpaint: Option<OutpaintSession>,
    /// User-facing notices.
    pub notices: NoticeLog,
    /// Frame-tick and operation timing.
    pub perf: PerfMonitor,

    pub(crate) background: BackgroundExecutor,
    pub(crate) completions: CompletionQueue,
    pub(crate) generator: Option<Arc<dyn ImageGenerator>>,
    pub(crate) compositor: Arc<dyn OutpaintCompositor>,
    /// Selection z-promotion waiting for the next frame tick.
    pub(crate) pending_promotion: bool,
    /// Surface size in pixels, reported by the host.
    pub(crate) view_size: (f64, f64),
}

impl Artboard {
    /// Surface size in pixels as last reported by the host.
    pub fn view_size(&self) -> (f64, f64) {
        self.view_size
    }

    /// Tell the engine how large the surface is. Import fitting and
    /// visibility culling depend on it.
    pub fn set_view_size(&mut self, width: f64, height: f64) {
        self.view_size = (width.max(1.0), height.max(1.0));
    }

    /// World-space rect currently on screen, as (min_x, min_y, max_x, max_y).
    pub fn visible_world_rect(&self) -> (f64, f64, f64, f64) {
        self.viewport.visible_world_rect(self.view_size)
    }

    /// World point at the center of the view.
    pub fn view_center_world(&self) -> (f64, f64) {
        self.viewport
            .screen_to_world((self.view_size.0 / 2.0, self.view_size.1 / 2.0))
    }

    /// Objects on screen (with a culling margin), bottom-most first, ready
    /// for a painter's-algorithm render pass.
    pub fn visible_objects(&self) -> Vec<&PlacedImage> {
        self.scene.visible_objects(self.visible_world_rect())
    }
}
