use glam::{Vec2, Vec3};

use super::core::OrbitCamera;
use crate::input::{Modifiers, PointerButton, PointerEvent};
use crate::options::CameraOptions;

/// Padding factor applied on top of the exact bounding-sphere fit distance.
const FIT_PADDING: f32 = 1.5;

/// Capability interface for anything that steers a camera from pointer
/// input.
///
/// [`CameraController`] is the default drag-gesture implementation;
/// alternate schemes (touch, scripted paths) implement the same trait
/// instead of subclassing anything.
pub trait PointerInputHandler {
    /// Feed one pointer event. Returns `true` if the camera was moved.
    fn handle_pointer(
        &mut self,
        camera: &mut OrbitCamera,
        event: PointerEvent,
    ) -> bool;
}

/// Which gesture a drag performs. Chosen from the modifier snapshot at
/// button-press time and fixed for the whole drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DragMode {
    Orbit,
    Pan,
    Zoom,
}

impl DragMode {
    fn from_modifiers(modifiers: Modifiers) -> Self {
        if modifiers.ctrl {
            Self::Zoom
        } else if modifiers.shift {
            Self::Pan
        } else {
            Self::Orbit
        }
    }
}

/// Default pointer-driven camera controller.
///
/// A secondary-button drag orbits the camera; with ctrl held at press it
/// zooms (vertical drag, scaled by the current radius so zooming feels
/// uniform at any distance), with shift it pans (scaled by the radius for
/// the same reason). Sensitivities come from [`CameraOptions`].
#[derive(Debug, Clone)]
pub struct CameraController {
    drag: Option<DragMode>,
    last_pos: Vec2,
    opts: CameraOptions,
}

impl CameraController {
    /// Create a controller with the given sensitivity options.
    #[must_use]
    pub fn new(opts: CameraOptions) -> Self {
        Self {
            drag: None,
            last_pos: Vec2::ZERO,
            opts,
        }
    }

    /// Whether a drag gesture is currently active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    fn apply_drag(
        &self,
        camera: &mut OrbitCamera,
        mode: DragMode,
        delta: Vec2,
    ) {
        match mode {
            DragMode::Orbit => camera.orbit(
                0.0,
                -self.opts.orbit_speed_vertical * delta.y,
                -self.opts.orbit_speed_horizontal * delta.x,
            ),
            DragMode::Zoom => camera.orbit(
                self.opts.zoom_speed * camera.radius() * delta.y,
                0.0,
                0.0,
            ),
            DragMode::Pan => {
                let speed = self.opts.pan_speed * camera.radius();
                camera.pan(speed * delta.x, -speed * delta.y);
            }
        }
    }
}

impl PointerInputHandler for CameraController {
    fn handle_pointer(
        &mut self,
        camera: &mut OrbitCamera,
        event: PointerEvent,
    ) -> bool {
        match event {
            PointerEvent::ButtonPressed {
                button,
                x,
                y,
                modifiers,
            } => {
                if button == PointerButton::Secondary {
                    self.drag = Some(DragMode::from_modifiers(modifiers));
                }
                self.last_pos = Vec2::new(x, y);
                false
            }
            PointerEvent::ButtonReleased { button, x, y } => {
                if button == PointerButton::Secondary {
                    self.drag = None;
                }
                self.last_pos = Vec2::new(x, y);
                false
            }
            PointerEvent::Moved { x, y } => {
                let pos = Vec2::new(x, y);
                let delta = pos - self.last_pos;
                self.last_pos = pos;
                if let Some(mode) = self.drag {
                    self.apply_drag(camera, mode, delta);
                    true
                } else {
                    false
                }
            }
        }
    }
}

/// Aim the camera at a bounding sphere, keeping the current orbit angles.
///
/// Centers the look-at on `center`, sets the scene scale to the sphere
/// diameter, and backs the eye off far enough that the whole sphere fits
/// the vertical field of view, with some padding.
pub fn fit_camera(camera: &mut OrbitCamera, center: Vec3, radius: f32) {
    camera.set_look_at(center);
    let radius = radius.max(f32::EPSILON);
    camera.set_scale(radius * 2.0);
    let fovy_rad = camera.fovy().to_radians();
    let fit_distance = radius / (fovy_rad / 2.0).tan();
    camera.set_pose(
        fit_distance * FIT_PADDING,
        camera.polar(),
        camera.azimuth(),
    );
}
