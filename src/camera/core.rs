use std::f32::consts::{FRAC_PI_4, PI, TAU};

use glam::{Mat4, Vec3};

/// Smallest allowed orbit radius. Stops the eye from passing through the
/// look-at point, which would invert the view.
const MIN_RADIUS: f32 = 1e-3;

/// Below this squared length the forward vector is treated as parallel to
/// the pole axis when deriving the pan basis.
const DEGENERATE_CROSS: f32 = 1e-12;

/// Orbit camera in z-up spherical coordinates around a movable look-at
/// point.
///
/// The camera is fully described by `(radius, polar, azimuth)` plus the
/// look-at anchor; the eye position is derived and recomputed by every
/// mutator, never assigned independently. The polar angle is measured from
/// the +z axis and kept in `[0, π]`; the azimuth lives in the xy-plane and
/// is kept in `[0, 2π)`. Driving the polar angle past a pole reflects it
/// back, rotates the azimuth by π, and flips the up vector, so the camera
/// passes smoothly "over the top" instead of gimbal-locking.
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    radius: f32,
    polar: f32,
    azimuth: f32,
    look_at: Vec3,
    /// Derived; see [`Self::recompute_eye`].
    eye: Vec3,
    upside_down: bool,
    viewport_width: u32,
    viewport_height: u32,
    /// Characteristic scene size; sets near/far planes.
    scale: f32,
    /// Vertical field of view in degrees.
    fovy: f32,
}

impl Default for OrbitCamera {
    /// Camera 15 length units from the origin, looking at it from a
    /// three-quarter angle.
    fn default() -> Self {
        let mut cam = Self {
            radius: 15.0,
            polar: FRAC_PI_4,
            azimuth: FRAC_PI_4,
            look_at: Vec3::ZERO,
            eye: Vec3::ZERO,
            upside_down: false,
            viewport_width: 1000,
            viewport_height: 700,
            scale: 10.0,
            fovy: 60.0,
        };
        cam.recompute_eye();
        cam
    }
}

impl OrbitCamera {
    /// Create a camera with the default pose.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply signed deltas to the three spherical parameters and normalize.
    ///
    /// The radius is clamped to a small positive epsilon. When the camera
    /// is upside-down both angular deltas are negated first, so pointer
    /// gestures keep tracking the visual rotation direction after a pole
    /// flip. A polar angle pushed past π (or below 0) is reflected back
    /// into range, the azimuth advances by π, and the up vector flips.
    pub fn orbit(&mut self, d_radius: f32, d_polar: f32, d_azimuth: f32) {
        self.radius += d_radius;
        if self.radius < 0.0 {
            self.radius = MIN_RADIUS;
        }

        let (d_polar, d_azimuth) = if self.upside_down {
            (-d_polar, -d_azimuth)
        } else {
            (d_polar, d_azimuth)
        };
        self.polar += d_polar;
        self.azimuth += d_azimuth;

        // Fold the polar angle into [0, 2π) first; a remainder in (π, 2π)
        // means an odd number of pole crossings, which reflects back into
        // [0, π], advances the azimuth by π, and flips the up vector.
        // Whole 2π laps cross both poles and cancel.
        self.polar = self.polar.rem_euclid(TAU);
        if self.polar > PI {
            self.polar = TAU - self.polar;
            self.azimuth += PI;
            self.upside_down = !self.upside_down;
        }
        self.azimuth = self.azimuth.rem_euclid(TAU);

        self.recompute_eye();
    }

    /// Absolute set of the spherical parameters.
    ///
    /// No normalization is applied; the caller is responsible for passing
    /// in-range angles.
    pub fn set_pose(&mut self, radius: f32, polar: f32, azimuth: f32) {
        self.radius = radius;
        self.polar = polar;
        self.azimuth = azimuth;
        self.recompute_eye();
    }

    /// Move the look-at anchor. The eye follows at the current offset.
    pub fn set_look_at(&mut self, look_at: Vec3) {
        self.look_at = look_at;
        self.recompute_eye();
    }

    /// Move the look-at point (and with it the eye) within the view plane.
    ///
    /// The pan basis is rebuilt each call from the current forward vector
    /// and the (possibly flipped) up reference, so panning stays aligned
    /// with the screen axes at any orbit angle and mirrors correctly when
    /// upside-down. When the camera looks straight along the pole axis the
    /// cross product degenerates; the lateral axis then falls back to its
    /// azimuth-derived limit so the operation stays total.
    pub fn pan(&mut self, d_u: f32, d_v: f32) {
        let forward = self.look_at - self.eye;
        let ref_up = if self.upside_down { Vec3::NEG_Z } else { Vec3::Z };

        let cross = ref_up.cross(forward);
        let right = if cross.length_squared() > DEGENERATE_CROSS {
            cross.normalize()
        } else {
            let limit =
                Vec3::new(self.azimuth.sin(), -self.azimuth.cos(), 0.0);
            if self.upside_down { -limit } else { limit }
        };
        let up = right.cross(forward).normalize();

        self.look_at += d_u * right + d_v * up;
        self.recompute_eye();
    }

    /// Record the viewport size; only the aspect ratio is consumed.
    pub fn handle_resize(&mut self, width: u32, height: u32) {
        self.viewport_width = width.max(1);
        self.viewport_height = height.max(1);
    }

    /// Set the characteristic scene size.
    ///
    /// Near and far planes derive from it (`scale/1000` and `scale·10`),
    /// keeping depth precision usable across widely different mesh sizes.
    pub fn set_scale(&mut self, scale: f32) {
        self.scale = scale;
    }

    /// Set the vertical field of view in degrees.
    pub fn set_fovy(&mut self, fovy: f32) {
        self.fovy = fovy;
    }

    /// View transform placing the eye at its derived position, looking at
    /// the anchor, with the up vector flipped while upside-down. The flip
    /// is what makes a pole crossing visually seamless.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        let up = if self.upside_down { Vec3::NEG_Z } else { Vec3::Z };
        Mat4::look_at_rh(self.eye, self.look_at, up)
    }

    /// Perspective projection for the current viewport and scene scale.
    #[must_use]
    pub fn projection_matrix(&self) -> Mat4 {
        let aspect =
            self.viewport_width as f32 / self.viewport_height as f32;
        Mat4::perspective_rh(
            self.fovy.to_radians(),
            aspect,
            self.scale / 1000.0,
            self.scale * 10.0,
        )
    }

    /// Current eye position in world space.
    #[must_use]
    pub fn eye(&self) -> Vec3 {
        self.eye
    }

    /// Current look-at anchor.
    #[must_use]
    pub fn look_at(&self) -> Vec3 {
        self.look_at
    }

    /// Distance from the look-at point to the eye.
    #[must_use]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Polar angle from the +z axis, in `[0, π]`.
    #[must_use]
    pub fn polar(&self) -> f32 {
        self.polar
    }

    /// Azimuth angle in the xy-plane, in `[0, 2π)`.
    #[must_use]
    pub fn azimuth(&self) -> f32 {
        self.azimuth
    }

    /// Whether the up vector is currently flipped by a pole crossing.
    #[must_use]
    pub fn is_upside_down(&self) -> bool {
        self.upside_down
    }

    /// Characteristic scene size.
    #[must_use]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Vertical field of view in degrees.
    #[must_use]
    pub fn fovy(&self) -> f32 {
        self.fovy
    }

    /// Spherical-to-Cartesian conversion of the current parameters, offset
    /// by the look-at point. Every mutator ends here.
    fn recompute_eye(&mut self) {
        let (sin_a, cos_a) = self.azimuth.sin_cos();
        let (sin_p, cos_p) = self.polar.sin_cos();
        self.eye = self.look_at
            + self.radius * Vec3::new(cos_a * sin_p, sin_a * sin_p, cos_p);
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use super::*;

    const EPS: f32 = 1e-5;

    fn expected_eye(cam: &OrbitCamera) -> Vec3 {
        cam.look_at()
            + cam.radius()
                * Vec3::new(
                    cam.azimuth().cos() * cam.polar().sin(),
                    cam.azimuth().sin() * cam.polar().sin(),
                    cam.polar().cos(),
                )
    }

    #[test]
    fn angles_stay_in_range_after_arbitrary_orbits() {
        let mut cam = OrbitCamera::new();
        let deltas = [
            (0.5, 1.7, -4.2),
            (-30.0, -9.1, 13.0),
            (2.0, 6.9, -0.3),
            (0.0, -2.8, 7.7),
        ];
        for (dr, dp, da) in deltas {
            cam.orbit(dr, dp, da);
            assert!(cam.polar() >= 0.0 && cam.polar() <= PI);
            assert!(cam.azimuth() >= 0.0 && cam.azimuth() < TAU);
            assert!(cam.radius() > 0.0);
        }
    }

    #[test]
    fn radius_clamps_instead_of_going_negative() {
        let mut cam = OrbitCamera::new();
        cam.orbit(-100.0, 0.0, 0.0);
        assert!(cam.radius() > 0.0);
        cam.orbit(-1.0, 0.0, 0.0);
        assert!(cam.radius() > 0.0);
    }

    #[test]
    fn polar_boundary_then_crossing() {
        let mut cam = OrbitCamera::new();
        cam.set_pose(15.0, FRAC_PI_2, FRAC_PI_4);

        // Drive the polar angle exactly onto the boundary: no flip yet.
        cam.orbit(0.0, FRAC_PI_2, 0.0);
        assert!(!cam.is_upside_down());
        assert!((cam.polar() - PI).abs() < EPS);
        assert!((cam.azimuth() - FRAC_PI_4).abs() < EPS);

        // One more step crosses the pole: reflect, flip, azimuth + π.
        cam.orbit(0.0, 0.1, 0.0);
        assert!(cam.is_upside_down());
        assert!((cam.polar() - (PI - 0.1)).abs() < EPS);
        assert!((cam.azimuth() - (FRAC_PI_4 + PI)).abs() < EPS);
    }

    #[test]
    fn crossing_back_restores_up() {
        let mut cam = OrbitCamera::new();
        cam.set_pose(10.0, 0.05, 1.0);

        // Cross the north pole (polar below 0): reflection, flip.
        cam.orbit(0.0, -0.2, 0.0);
        assert!(cam.is_upside_down());
        assert!((cam.polar() - 0.15).abs() < EPS);
        assert!((cam.azimuth() - (1.0 + PI)).abs() < EPS);

        // While upside-down, deltas are negated: +0.3 drives the polar
        // angle back down through 0 and restores the original up.
        cam.orbit(0.0, 0.3, 0.0);
        assert!(!cam.is_upside_down());
        assert!((cam.polar() - 0.15).abs() < EPS);
        assert!((cam.azimuth() - 1.0).abs() < EPS);
    }

    #[test]
    fn eye_matches_spherical_formula_after_every_mutator() {
        let mut cam = OrbitCamera::new();
        assert!(cam.eye().distance(expected_eye(&cam)) < EPS);

        cam.orbit(3.0, 0.7, -2.1);
        assert!(cam.eye().distance(expected_eye(&cam)) < EPS);

        cam.set_pose(4.0, 1.2, 5.9);
        assert!(cam.eye().distance(expected_eye(&cam)) < EPS);

        cam.set_look_at(Vec3::new(1.0, -2.0, 0.5));
        assert!(cam.eye().distance(expected_eye(&cam)) < EPS);

        cam.pan(0.4, -0.8);
        assert!(cam.eye().distance(expected_eye(&cam)) < EPS);
    }

    #[test]
    fn pan_identity_leaves_look_at_unchanged() {
        let mut cam = OrbitCamera::new();
        cam.set_look_at(Vec3::new(0.5, 0.5, 0.5));
        let before = cam.look_at();
        cam.pan(0.0, 0.0);
        assert!(cam.look_at().distance(before) < EPS);
    }

    #[test]
    fn pan_moves_look_at_in_view_plane() {
        let mut cam = OrbitCamera::new();
        cam.set_pose(10.0, FRAC_PI_2, 0.0);
        let forward = (cam.look_at() - cam.eye()).normalize();
        cam.pan(1.0, 2.0);
        // The anchor moved, and the displacement is orthogonal to forward.
        let moved = cam.look_at();
        assert!(moved.length() > 0.5);
        assert!(moved.dot(forward).abs() < 1e-3);
    }

    #[test]
    fn pan_at_pole_is_finite() {
        let mut cam = OrbitCamera::new();
        // Looking straight down the pole axis: the cross product with the
        // up reference vanishes and the azimuth fallback kicks in.
        cam.set_pose(5.0, 0.0, 1.3);
        cam.pan(1.0, 1.0);
        assert!(cam.look_at().is_finite());
        assert!(cam.eye().is_finite());
    }

    #[test]
    fn view_matrix_maps_look_at_to_view_axis() {
        let cam = OrbitCamera::new();
        let view = cam.view_matrix();
        let p = view.transform_point3(cam.look_at());
        // The look-at point sits on the -z view axis at distance radius.
        assert!(p.x.abs() < EPS && p.y.abs() < EPS);
        assert!((p.z + cam.radius()).abs() < 1e-3);
    }

    #[test]
    fn projection_planes_follow_scale() {
        let mut cam = OrbitCamera::new();
        cam.set_scale(100.0);
        let proj = cam.projection_matrix();
        // Probe the depth mapping: points at the near/far distances land on
        // the [0, 1] depth range bounds (wgpu/Vulkan convention in glam).
        let near = proj.project_point3(Vec3::new(0.0, 0.0, -0.1));
        let far = proj.project_point3(Vec3::new(0.0, 0.0, -1000.0));
        assert!(near.z.abs() < 1e-3);
        assert!((far.z - 1.0).abs() < 1e-3);
    }
}
