//! Discrete viewer commands produced by key-binding lookups and executed
//! by the viewer.

use serde::{Deserialize, Serialize};

/// Discrete viewer actions.
///
/// Produced by key-binding lookups and executed by
/// [`Viewer::execute`](crate::viewer::Viewer::execute). All variants are
/// parameterless toggles or requests; parameterized camera motion comes
/// from the pointer gesture path instead.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ViewerCommand {
    /// Toggle the element wireframe overlay.
    ToggleElements,
    /// Toggle the mesh-rectangle wireframe overlay.
    ToggleRectangles,
    /// Toggle the blinking-element highlight pass.
    ToggleBlinkElements,
    /// Toggle the blinking-rectangle highlight pass.
    ToggleBlinkRectangles,
    /// Toggle the opaque boundary shell (suspends blinking while on).
    ToggleShell,
    /// Toggle turntable auto-rotation.
    ToggleAutoRotate,
    /// Ask the host application to quit. The library never exits the
    /// process itself.
    Quit,
}
