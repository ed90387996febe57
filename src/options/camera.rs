use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Camera projection and drag sensitivity parameters.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Azimuth change per horizontal drag pixel.
    pub orbit_speed_horizontal: f32,
    /// Polar-angle change per vertical drag pixel.
    pub orbit_speed_vertical: f32,
    /// Radius change per vertical drag pixel, multiplied by the current
    /// radius.
    pub zoom_speed: f32,
    /// Look-at displacement per drag pixel, multiplied by the current
    /// radius.
    pub pan_speed: f32,
}

impl Default for CameraOptions {
    // sensitivities set by trial and error
    fn default() -> Self {
        Self {
            fovy: 60.0,
            orbit_speed_horizontal: 0.006,
            orbit_speed_vertical: 0.006,
            zoom_speed: 0.005,
            pan_speed: 0.0014,
        }
    }
}
