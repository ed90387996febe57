use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Which passes the host should draw this frame.
pub struct DisplayOptions {
    /// Element wireframe overlay.
    pub draw_elements: bool,
    /// Mesh-rectangle wireframe overlay.
    pub draw_rectangles: bool,
    /// Blinking translucent element faces.
    pub blink_elements: bool,
    /// Blinking translucent mesh rectangles.
    pub blink_rectangles: bool,
    /// Opaque boundary shell instead of the blink passes.
    pub draw_shell: bool,
    /// Turntable auto-rotation.
    pub auto_rotate: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            draw_elements: false,
            draw_rectangles: true,
            blink_elements: true,
            blink_rectangles: false,
            draw_shell: false,
            auto_rotate: true,
        }
    }
}
