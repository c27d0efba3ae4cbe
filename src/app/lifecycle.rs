//! Engine lifecycle - construction, the frame tick, and persistence.

use std::sync::Arc;

use tracing::{debug, info};

use crate::app::Artboard;
use crate::app::generation::CompletionQueue;
use crate::background::BackgroundExecutor;
use crate::boundary::compositor::NeutralFillCompositor;
use crate::boundary::persist::{SceneSnapshot, SnapshotStore};
use crate::boundary::{ImageGenerator, OutpaintCompositor};
use crate::constants::DEFAULT_VIEW_SIZE;
use crate::error::CanvasResult;
use crate::input::{InputState, Modifiers};
use crate::notifications::NoticeLog;
use crate::perf::PerfMonitor;
use crate::scene::Scene;
use crate::selection::{SelectionLimit, SelectionManager};
use crate::viewport::Viewport;

impl Artboard {
    pub fn new() -> Self {
        Self {
            viewport: Viewport::default(),
            scene: Scene::new(),
            selection: SelectionManager::new(),
            input_state: InputState::default(),
            modifiers: Modifiers::default(),
            outpaint: None,
            notices: NoticeLog::new(),
            perf: PerfMonitor::new(),
            background: BackgroundExecutor::with_default_workers(),
            completions: CompletionQueue::default(),
            generator: None,
            compositor: Arc::new(NeutralFillCompositor::new()),
            pending_promotion: false,
            view_size: DEFAULT_VIEW_SIZE,
        }
    }

    /// An engine that caps how many objects may be selected at once.
    pub fn with_limit(limit: SelectionLimit) -> Self {
        Self {
            selection: SelectionManager::with_limit(limit),
            ..Self::new()
        }
    }

    /// Install the image generation backend.
    pub fn set_generator(&mut self, generator: Arc<dyn ImageGenerator>) {
        self.generator = Some(generator);
    }

    /// Replace the outpaint compositor (defaults to neutral fill).
    pub fn set_compositor(&mut self, compositor: Arc<dyn OutpaintCompositor>) {
        self.compositor = compositor;
    }

    /// Per-frame housekeeping. Hosts call this once per render tick.
    ///
    /// Drains finished background work, applies any deferred z-promotion,
    /// expires stale smart guides, and prunes timed-out notices. Returns
    /// true if any of it changed observable state, i.e. the host should
    /// redraw.
    pub fn on_frame(&mut self) -> bool {
        self.perf.begin_frame();
        let mut changed = false;

        self.background.process_results();
        if self.apply_completions() {
            changed = true;
        }

        if self.pending_promotion {
            self.pending_promotion = false;
            if self.selection.promote_selected(&mut self.scene) {
                changed = true;
            }
        }

        if let Some(session) = self.outpaint.as_mut() {
            if session.expire_stale_guides() {
                changed = true;
            }
        }

        if self.notices.prune_expired() {
            changed = true;
        }

        self.perf.end_frame();
        changed
    }

    /// Abort whatever gesture is in flight, e.g. on window focus loss.
    ///
    /// An interrupted outpaint drag keeps the offsets it had already
    /// applied, exactly as a pointer-up would; the session itself stays
    /// open.
    pub fn cancel_interactions(&mut self) {
        if self.input_state.is_outpaint_dragging() {
            if let Some(session) = self.outpaint.as_mut() {
                session.end_drag();
            }
        }
        if self.input_state.is_dragging() {
            debug!("in-flight gesture cancelled");
        }
        self.input_state.reset();
    }

    /// Lift the selection above everything else at the next frame tick.
    pub(crate) fn queue_promotion(&mut self) {
        self.pending_promotion = true;
    }

    /// Lift the selection right now. Used when a drag starts on a selected
    /// object, so the moved group is already on top while it moves.
    pub(crate) fn promote_now(&mut self) {
        self.pending_promotion = false;
        self.selection.promote_selected(&mut self.scene);
    }

    /// Durable state: viewport and objects. Selection, gestures, and any
    /// outpaint session are transient and excluded.
    pub fn snapshot(&self) -> SceneSnapshot {
        SceneSnapshot {
            viewport: self.viewport,
            objects: self.scene.objects.clone(),
        }
    }

    /// Replace the live scene with a snapshot, resetting transient state.
    pub fn restore(&mut self, snapshot: SceneSnapshot) {
        // Route the viewport through its constructor so an out-of-range
        // zoom in a hand-edited file re-clamps.
        self.viewport = Viewport::new(
            snapshot.viewport.pan_x,
            snapshot.viewport.pan_y,
            snapshot.viewport.zoom,
        );
        self.scene = Scene::from_objects(snapshot.objects);
        self.selection.clear();
        self.input_state.reset();
        self.outpaint = None;
        self.pending_promotion = false;
        info!(objects = self.scene.len(), "scene restored");
    }

    pub fn save_to(&self, store: &dyn SnapshotStore) -> CanvasResult<()> {
        store.save(&self.snapshot())
    }

    pub fn load_from(&mut self, store: &dyn SnapshotStore) -> CanvasResult<()> {
        let snapshot = store.load()?;
        self.restore(snapshot);
        Ok(())
    }
}

impl Default for Artboard {
    fn default() -> Self {
        Self::new()
    }
}
