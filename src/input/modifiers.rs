//! Modifier key snapshot shared by every input handler.
//!
//! Modifier-dependent behavior reads one value that both key events and
//! pointer events refresh, instead of each handler tracking its own keys.
//! Raw keys map to interaction roles here so the gesture code never
//! mentions key names.

/// Keyboard modifier keys held during an event.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    /// Shift key is held.
    pub shift: bool,
    /// Ctrl key is held.
    pub ctrl: bool,
    /// Alt / Option key is held.
    pub alt: bool,
    /// Meta / Command key is held.
    pub meta: bool,
}

impl Modifiers {
    /// Additive selection: clicking toggles membership instead of replacing
    /// the selection.
    pub fn additive(self) -> bool {
        self.shift
    }

    /// Alternate drag: pressing on an object body stages an export drag
    /// instead of a move.
    pub fn alternate_drag(self) -> bool {
        self.alt
    }

    /// Linked expansion: outpaint edge growth mirrors to the opposite edge
    /// (all four edges from a corner).
    pub fn linked_expansion(self) -> bool {
        self.alt
    }

    /// Scroll gesture zooms instead of panning.
    pub fn zoom_gate(self) -> bool {
        self.ctrl || self.meta
    }

    /// Convenience constructor for the additive-selection modifier.
    pub fn shift_held() -> Self {
        Self {
            shift: true,
            ..Self::default()
        }
    }

    /// Convenience constructor for the alternate-drag / linked modifier.
    pub fn alt_held() -> Self {
        Self {
            alt: true,
            ..Self::default()
        }
    }
}
