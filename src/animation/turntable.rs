use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, TAU};

use crate::camera::OrbitCamera;

/// Scripted camera path: constant azimuth spin with a sinusoidal polar
/// bob, keeping the mesh slowly tumbling while nobody drags.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Turntable {
    /// Azimuth revolutions per second.
    pub spin_rate: f32,
    /// Angular frequency of the polar bob, in radians per second.
    pub bob_rate: f32,
    /// Orbit distance the path holds.
    pub distance: f32,
}

impl Default for Turntable {
    fn default() -> Self {
        Self {
            spin_rate: 0.08,
            bob_rate: 0.8,
            distance: 2.0,
        }
    }
}

impl Turntable {
    /// Pose `(radius, polar, azimuth)` at `t` seconds.
    ///
    /// The polar angle swings ±45° around the equator, so the path never
    /// reaches a pole; the azimuth is pre-wrapped into `[0, 2π)` since
    /// [`OrbitCamera::set_pose`] applies no normalization of its own.
    #[must_use]
    pub fn pose_at(&self, t: f32) -> (f32, f32, f32) {
        let azimuth = (t * self.spin_rate * TAU).rem_euclid(TAU);
        let polar = (t * self.bob_rate).sin() * FRAC_PI_4 + FRAC_PI_2;
        (self.distance, polar, azimuth)
    }

    /// Drive the camera to the pose for `t` seconds.
    pub fn apply(&self, camera: &mut OrbitCamera, t: f32) {
        let (radius, polar, azimuth) = self.pose_at(t);
        camera.set_pose(radius, polar, azimuth);
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::PI;

    use super::*;

    #[test]
    fn pose_stays_in_normalized_ranges() {
        let path = Turntable::default();
        for i in 0..200 {
            let (r, polar, azimuth) = path.pose_at(i as f32 * 0.37);
            assert_eq!(r, 2.0);
            assert!(polar >= FRAC_PI_4 && polar <= 3.0 * FRAC_PI_4);
            assert!(azimuth >= 0.0 && azimuth < TAU);
        }
    }

    #[test]
    fn spin_completes_a_revolution() {
        let path = Turntable {
            spin_rate: 0.5,
            bob_rate: 0.0,
            distance: 3.0,
        };
        let (_, _, a0) = path.pose_at(0.0);
        let (_, polar, a1) = path.pose_at(1.0);
        assert!(a0.abs() < 1e-6);
        // Half a revolution after one second at 0.5 rev/s.
        assert!((a1 - PI).abs() < 1e-5);
        // No bob: the path stays on the equator.
        assert!((polar - FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn apply_moves_the_camera() {
        let path = Turntable::default();
        let mut cam = OrbitCamera::new();
        path.apply(&mut cam, 3.0);
        let (r, polar, azimuth) = path.pose_at(3.0);
        assert_eq!(cam.radius(), r);
        assert_eq!(cam.polar(), polar);
        assert_eq!(cam.azimuth(), azimuth);
    }
}
