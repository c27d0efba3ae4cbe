//! Application module - the Artboard engine state and logic.
//!
//! This module is organized into several submodules:
//! - `state` - The Artboard struct definition and view accessors
//! - `lifecycle` - Construction, the frame tick, and persistence
//! - `objects` - Import, export, delete, duplicate
//! - `generation` - Async image generation dispatch and completions
//! - `outpaint_commit` - Outpaint session begin/cancel/commit

mod generation;
mod lifecycle;
mod objects;
mod outpaint_commit;
mod state;

pub use objects::ExportPayload;
pub use state::Artboard;
