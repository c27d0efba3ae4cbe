//! Pointer and scroll input handling for the composition surface.
//!
//! This module implements all pointer interaction logic for the artboard,
//! including hit classification, selection, dragging, resizing, outpaint
//! handle drags, panning, and zooming.
//!
//! ## Architecture
//!
//! The input system uses an explicit state machine (`InputState`) to track
//! the current interaction mode. This replaces scattered boolean flags and
//! makes impossible states unrepresentable.
//!
//! ## Modules
//!
//! - `state` - Input state machine enum and helper methods
//! - `hit` - Pointer target classification (handles, corners, bodies)
//! - `modifiers` - Host-independent modifier snapshot and its gesture roles
//! - `pointer_down` - Pointer down handling (selection, gesture arming)
//! - `pointer_move` - Pointer move handling (drag, resize, pan operations)
//! - `pointer_up` - Pointer up handling (finalize operations)
//! - `scroll` - Scroll-wheel panning and gated zooming

pub mod hit;
pub mod modifiers;
mod pointer_down;
mod pointer_move;
mod pointer_up;
mod scroll;
mod state;

pub use hit::HitTarget;
pub use modifiers::Modifiers;
pub use scroll::ScrollDelta;
pub use state::InputState;
