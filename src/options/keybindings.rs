use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::command::ViewerCommand;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Configurable keyboard bindings mapping commands to key codes.
///
/// Key strings use the `winit::keyboard::KeyCode` debug format:
/// `"KeyE"`, `"Digit1"`, `"Escape"`, etc.
pub struct KeybindingOptions {
    /// Maps command → key string (e.g. `ToggleElements` → `"KeyE"`).
    pub bindings: HashMap<ViewerCommand, String>,
    /// Reverse lookup cache (key string → command). Rebuilt on load.
    #[serde(skip)]
    key_to_command: HashMap<String, ViewerCommand>,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        let bindings = HashMap::from([
            (ViewerCommand::ToggleElements, "KeyE".into()),
            (ViewerCommand::ToggleRectangles, "KeyR".into()),
            (ViewerCommand::ToggleBlinkElements, "Digit1".into()),
            (ViewerCommand::ToggleBlinkRectangles, "Digit2".into()),
            (ViewerCommand::ToggleShell, "Digit3".into()),
            (ViewerCommand::ToggleAutoRotate, "KeyS".into()),
            (ViewerCommand::Quit, "KeyQ".into()),
        ]);

        let mut opts = Self {
            bindings,
            key_to_command: HashMap::new(),
        };
        opts.rebuild_reverse_map();
        opts
    }
}

impl KeybindingOptions {
    /// Rebuild the reverse lookup map (key string → command).
    pub fn rebuild_reverse_map(&mut self) {
        self.key_to_command.clear();
        for (command, key) in &self.bindings {
            let _ = self.key_to_command.insert(key.clone(), *command);
        }
    }

    /// Look up the command bound to a key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<ViewerCommand> {
        self.key_to_command.get(key).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bindings_resolve() {
        let opts = KeybindingOptions::default();
        assert_eq!(opts.lookup("KeyE"), Some(ViewerCommand::ToggleElements));
        assert_eq!(opts.lookup("KeyQ"), Some(ViewerCommand::Quit));
        assert_eq!(opts.lookup("KeyZ"), None);
    }

    #[test]
    fn reverse_map_survives_deserialization() {
        let opts = KeybindingOptions::default();
        let toml_str = toml::to_string(&opts).unwrap();
        let mut parsed: KeybindingOptions = toml::from_str(&toml_str).unwrap();
        // The cache is #[serde(skip)]; a fresh parse must rebuild it.
        parsed.rebuild_reverse_map();
        assert_eq!(
            parsed.lookup("Digit3"),
            Some(ViewerCommand::ToggleShell)
        );
    }
}
