//! Artboard - an interactive 2D composition surface engine.
//!
//! The engine owns a pannable/zoomable viewport onto an infinite world
//! plane, a scene of placed image objects, ordered multi-selection with
//! z-promotion, and the pointer gesture state machine driving moves,
//! resizes, pans, and outpaint expansion. Hosts own the window, the
//! renderer, and the drag-and-drop protocol; they feed events in, tick
//! [`Artboard::on_frame`] once per render pass, and draw whatever
//! [`Artboard::visible_objects`] returns.
//!
//! ## Modules
//!
//! - `viewport` - Pan/zoom camera and world<->screen conversion
//! - `scene` - Placed objects, ids, z-order, spatial index
//! - `selection` - Ordered multi-selection and z-promotion
//! - `input` - Pointer gesture state machine and event handlers
//! - `outpaint` - Expansion sessions, handles, smart guides
//! - `resize` - Aspect-locked corner resize math
//! - `boundary` - Host collaborator traits: generation, compositing, persistence
//! - `app` - The engine facade tying it all together

pub mod app;
pub mod background;
pub mod boundary;
pub mod constants;
pub mod error;
pub mod input;
pub mod logging;
pub mod notifications;
pub mod outpaint;
pub mod perf;
pub mod resize;
pub mod scene;
pub mod selection;
pub mod spatial_index;
pub mod types;
pub mod viewport;

pub use app::{Artboard, ExportPayload};
pub use error::{CanvasError, CanvasResult};
