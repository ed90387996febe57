use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Blinking-highlight animation parameters.
pub struct BlinkOptions {
    /// How many new elements (and rectangles) start blinking per second.
    pub spawns_per_sec: f32,
    /// Seconds a highlight lives, fading in and back out.
    pub life_length: f32,
    /// Width parameter of the Gaussian alpha envelope; smaller is a
    /// sharper blink.
    pub fade_sigma: f32,
    /// Alpha at the edges of a highlight's life (and of everything idle).
    pub min_alpha: f32,
    /// Alpha at the peak of a highlight's life.
    pub max_alpha: f32,
}

impl Default for BlinkOptions {
    fn default() -> Self {
        Self {
            spawns_per_sec: 20.0,
            life_length: 4.0,
            fade_sigma: 0.2,
            min_alpha: 0.0,
            max_alpha: 1.0,
        }
    }
}
