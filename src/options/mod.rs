//! Centralized viewer options with TOML preset support.
//!
//! All tweakable settings (camera sensitivities, blink animation
//! parameters, display toggles, keybindings) are consolidated here and
//! serialize to/from TOML. Camera pose is deliberately not part of the
//! preset surface; only tuning parameters persist.

mod blink;
mod camera;
mod display;
mod keybindings;

use std::path::Path;

pub use blink::BlinkOptions;
pub use camera::CameraOptions;
pub use display::DisplayOptions;
pub use keybindings::KeybindingOptions;
use serde::{Deserialize, Serialize};

use crate::error::ViewError;

/// Top-level options container. All sub-structs use `#[serde(default)]`
/// so partial TOML files (e.g. only overriding `[blink]`) work correctly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Options {
    /// Camera projection and drag sensitivity parameters.
    pub camera: CameraOptions,
    /// Blinking-highlight animation parameters.
    pub blink: BlinkOptions,
    /// Draw-pass toggles.
    pub display: DisplayOptions,
    /// Keyboard binding options.
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, ViewError> {
        let content = std::fs::read_to_string(path).map_err(ViewError::Io)?;
        let mut opts: Self = toml::from_str(&content)
            .map_err(|e| ViewError::OptionsParse(e.to_string()))?;
        // The reverse key map is #[serde(skip)] and must be rebuilt.
        opts.keybindings.rebuild_reverse_map();
        Ok(opts)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), ViewError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ViewError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ViewError::Io)?;
        }
        std::fs::write(path, content).map_err(ViewError::Io)
    }
}
