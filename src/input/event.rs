/// Platform-agnostic pointer events.
///
/// The host window layer translates its native mouse events into these and
/// feeds them to a [`PointerInputHandler`](crate::camera::PointerInputHandler).
/// Coordinates are in physical pixels with `y` growing downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// A pointer button went down.
    ///
    /// Carries the modifier state at press time; the interaction mode for
    /// the whole drag gesture is selected from this snapshot, so changing
    /// modifiers mid-drag has no effect until the next press.
    ButtonPressed {
        /// Which button went down.
        button: PointerButton,
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels (downward).
        y: f32,
        /// Modifier keys held at press time.
        modifiers: Modifiers,
    },
    /// A pointer button was released.
    ButtonReleased {
        /// Which button was released.
        button: PointerButton,
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels (downward).
        y: f32,
    },
    /// The pointer moved to an absolute position.
    Moved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels (downward).
        y: f32,
    },
}

/// Platform-agnostic pointer button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Primary (left) button.
    Primary,
    /// Secondary (right) button; drives all camera drag gestures.
    Secondary,
    /// Middle button (wheel click).
    Middle,
}

/// Modifier-key snapshot accompanying a button press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    /// Shift key held (selects the pan gesture).
    pub shift: bool,
    /// Control key held (selects the zoom gesture).
    pub ctrl: bool,
}

impl Modifiers {
    /// No modifiers held.
    pub const NONE: Self = Self {
        shift: false,
        ctrl: false,
    };
}
