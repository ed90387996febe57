//! The viewer context: one struct owning every piece of per-session
//! state that the original-style design would scatter across globals.
//!
//! Per frame the host calls [`Viewer::advance`] and then issues its draw
//! calls from the accessors; the phases inside `advance` run strictly in
//! order (camera path → blink update → depth sort → draw-list rebuild),
//! so a draw call never observes state mid-mutation.

use glam::{Mat4, Vec3};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::animation::{Blink, Turntable};
use crate::camera::{
    fit_camera, CameraController, OrbitCamera, PointerInputHandler,
};
use crate::command::ViewerCommand;
use crate::error::ViewError;
use crate::input::PointerEvent;
use crate::options::Options;
use crate::render::{rebuild_index_list, sort_back_to_front};
use crate::scene::{ElementBuffers, RectBuffers, VolumeMesh};
use crate::util::FrameTiming;

/// Interactive viewer state for one LR-spline volume.
pub struct Viewer {
    camera: OrbitCamera,
    controller: CameraController,
    elements: ElementBuffers,
    rects: RectBuffers,
    blink: Blink,
    turntable: Turntable,
    options: Options,
    timing: FrameTiming,
    element_draw: Vec<u32>,
    rect_draw: Vec<u32>,
    rng: StdRng,
}

impl Viewer {
    /// Build a viewer for the given mesh.
    ///
    /// Constructs all draw buffers, fits the camera to the parametric
    /// domain, and starts with nothing blinking.
    ///
    /// # Errors
    ///
    /// [`ViewError::EmptyMesh`] if the mesh has neither elements nor
    /// mesh rectangles.
    pub fn new(mesh: &VolumeMesh, options: Options) -> Result<Self, ViewError> {
        Self::with_rng(mesh, options, StdRng::from_os_rng())
    }

    /// Like [`Viewer::new`] but with a caller-supplied random generator,
    /// for deterministic colors and blink spawns.
    pub fn with_rng(
        mesh: &VolumeMesh,
        options: Options,
        mut rng: StdRng,
    ) -> Result<Self, ViewError> {
        if mesh.is_empty() {
            return Err(ViewError::EmptyMesh);
        }

        let min_alpha = options.blink.min_alpha;
        let elements = ElementBuffers::build(mesh, min_alpha, &mut rng);
        let rects = RectBuffers::build(mesh, min_alpha, &mut rng);
        info!(
            "built buffers for {} elements, {} mesh rectangles",
            elements.count(),
            rects.count()
        );

        let mut camera = OrbitCamera::new();
        camera.set_fovy(options.camera.fovy);
        fit_camera(&mut camera, mesh.center(), mesh.bounding_radius());
        let turntable = Turntable {
            distance: camera.radius(),
            ..Turntable::default()
        };

        let blink =
            Blink::new(options.blink.clone(), elements.count(), rects.count());
        let controller = CameraController::new(options.camera.clone());

        Ok(Self {
            camera,
            controller,
            elements,
            rects,
            blink,
            turntable,
            options,
            timing: FrameTiming::new(),
            element_draw: Vec::new(),
            rect_draw: Vec::new(),
            rng,
        })
    }

    /// Feed one pointer event to the camera controller. Returns `true`
    /// if the camera moved. While auto-rotation is on, manual input
    /// competes with the turntable rather than disabling it.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> bool {
        self.controller.handle_pointer(&mut self.camera, event)
    }

    /// Look up the command bound to `key`, execute it, and return it so
    /// the host can react (notably to [`ViewerCommand::Quit`]).
    pub fn handle_key(&mut self, key: &str) -> Option<ViewerCommand> {
        let cmd = self.options.keybindings.lookup(key)?;
        self.execute(cmd);
        Some(cmd)
    }

    /// Execute a viewer command.
    pub fn execute(&mut self, cmd: ViewerCommand) {
        let d = &mut self.options.display;
        match cmd {
            ViewerCommand::ToggleElements => {
                d.draw_elements = !d.draw_elements;
                info!("drawing elements: {}", d.draw_elements);
            }
            ViewerCommand::ToggleRectangles => {
                d.draw_rectangles = !d.draw_rectangles;
                info!("drawing mesh rectangles: {}", d.draw_rectangles);
            }
            ViewerCommand::ToggleBlinkElements => {
                d.blink_elements = !d.blink_elements;
                info!("blinking elements: {}", d.blink_elements);
            }
            ViewerCommand::ToggleBlinkRectangles => {
                d.blink_rectangles = !d.blink_rectangles;
                info!("blinking mesh rectangles: {}", d.blink_rectangles);
            }
            ViewerCommand::ToggleShell => {
                d.draw_shell = !d.draw_shell;
                info!("drawing solid shell: {}", d.draw_shell);
            }
            ViewerCommand::ToggleAutoRotate => {
                d.auto_rotate = !d.auto_rotate;
                info!("auto rotating: {}", d.auto_rotate);
            }
            ViewerCommand::Quit => {
                // The host owns the event loop; nothing to do here.
                info!("quit requested");
            }
        }
    }

    /// Advance the frame to `t` seconds since viewer start.
    ///
    /// Runs the update phases strictly in order: turntable (if enabled),
    /// blink spawn/expiry/alpha, back-to-front sort, draw-list rebuild.
    /// The blink phases are suspended while the solid shell is shown;
    /// active highlights then expire naturally on resume.
    pub fn advance(&mut self, t: f32) {
        if self.options.display.auto_rotate {
            self.turntable.apply(&mut self.camera, t);
        }

        if !self.options.display.draw_shell {
            self.blink.advance(
                t,
                &mut self.rng,
                &mut self.elements,
                &mut self.rects,
            );

            let eye = self.camera.eye();
            sort_back_to_front(
                self.blink.element_quads_mut(),
                self.elements.coords(),
                eye,
            );
            sort_back_to_front(
                self.blink.rect_quads_mut(),
                self.rects.coords(),
                eye,
            );
            rebuild_index_list(
                &mut self.element_draw,
                self.blink.element_quads(),
            );
            rebuild_index_list(&mut self.rect_draw, self.blink.rect_quads());
        }

        self.timing.end_frame();
    }

    /// Forward a viewport resize to the camera.
    pub fn handle_resize(&mut self, width: u32, height: u32) {
        self.camera.handle_resize(width, height);
    }

    /// Override the scene scale the camera's near/far planes derive from.
    /// Construction fits it to the mesh; hosts embedding the viewer in a
    /// larger scene can widen it here.
    pub fn set_scale(&mut self, scale: f32) {
        self.camera.set_scale(scale);
    }

    /// Current view transform.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        self.camera.view_matrix()
    }

    /// Current projection transform.
    #[must_use]
    pub fn projection_matrix(&self) -> Mat4 {
        self.camera.projection_matrix()
    }

    /// Current eye position.
    #[must_use]
    pub fn eye(&self) -> Vec3 {
        self.camera.eye()
    }

    /// The camera, for pose queries.
    #[must_use]
    pub fn camera(&self) -> &OrbitCamera {
        &self.camera
    }

    /// Current options (display toggles gate the host's draw passes).
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Element draw buffers.
    #[must_use]
    pub fn elements(&self) -> &ElementBuffers {
        &self.elements
    }

    /// Mesh-rectangle draw buffers.
    #[must_use]
    pub fn rects(&self) -> &RectBuffers {
        &self.rects
    }

    /// Back-to-front index list for the blinking element faces,
    /// rebuilt by the last [`Viewer::advance`].
    #[must_use]
    pub fn blink_element_indices(&self) -> &[u32] {
        &self.element_draw
    }

    /// Back-to-front index list for the blinking rectangles.
    #[must_use]
    pub fn blink_rect_indices(&self) -> &[u32] {
        &self.rect_draw
    }

    /// Smoothed frames per second.
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.timing.fps()
    }
}

impl std::fmt::Debug for Viewer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Viewer")
            .field("elements", &self.elements.count())
            .field("rects", &self.rects.count())
            .field("blink", &self.blink)
            .field("options", &self.options.display)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::scene::mesh::test_mesh::two_element_mesh;

    fn viewer() -> Viewer {
        Viewer::with_rng(
            &two_element_mesh(),
            Options::default(),
            StdRng::seed_from_u64(11),
        )
        .unwrap()
    }

    #[test]
    fn empty_mesh_is_rejected() {
        let result = Viewer::new(&VolumeMesh::default(), Options::default());
        assert!(matches!(result, Err(ViewError::EmptyMesh)));
    }

    #[test]
    fn construction_fits_the_camera() {
        let v = viewer();
        assert_eq!(v.camera().look_at(), Vec3::splat(0.5));
        // Backed off far enough that the bounding sphere fits the fovy.
        assert!(v.camera().radius() > two_element_mesh().bounding_radius());
    }

    #[test]
    fn advance_produces_sorted_draw_lists() {
        let mut v = viewer();
        assert!(v.blink_element_indices().is_empty());

        // Default rate is 20 spawns/s; at t = 1s everything lights up.
        v.advance(1.0);
        let indices = v.blink_element_indices();
        // Whole elements only: 6 faces × 4 corners each.
        assert!(!indices.is_empty());
        assert_eq!(indices.len() % 24, 0);
        assert_eq!(v.blink_rect_indices().len() % 4, 0);
    }

    #[test]
    fn auto_rotation_drives_the_pose() {
        let mut v = viewer();
        assert!(v.options().display.auto_rotate);
        v.advance(2.0);
        let a2 = v.camera().azimuth();
        v.advance(3.0);
        assert_ne!(v.camera().azimuth(), a2);
    }

    #[test]
    fn toggles_flip_display_state() {
        let mut v = viewer();
        assert!(!v.options().display.draw_elements);
        v.execute(ViewerCommand::ToggleElements);
        assert!(v.options().display.draw_elements);
        v.execute(ViewerCommand::ToggleElements);
        assert!(!v.options().display.draw_elements);
    }

    #[test]
    fn key_bindings_execute_and_report() {
        let mut v = viewer();
        assert_eq!(v.handle_key("KeyQ"), Some(ViewerCommand::Quit));
        assert_eq!(v.handle_key("KeyS"), Some(ViewerCommand::ToggleAutoRotate));
        assert!(!v.options().display.auto_rotate);
        assert_eq!(v.handle_key("F35"), None);
    }

    #[test]
    fn shell_mode_suspends_blinking() {
        let mut v = viewer();
        v.execute(ViewerCommand::ToggleShell);
        v.advance(1.0);
        assert!(v.blink_element_indices().is_empty());
        assert!(!v.elements().shell().is_empty());

        // Turning the shell back off resumes the blink phases.
        v.execute(ViewerCommand::ToggleShell);
        v.advance(2.0);
        assert!(!v.blink_element_indices().is_empty());
    }

    #[test]
    fn pointer_drag_reaches_the_camera() {
        let mut v = viewer();
        v.execute(ViewerCommand::ToggleAutoRotate);
        let a0 = v.camera().azimuth();
        let _ = v.handle_pointer(PointerEvent::ButtonPressed {
            button: crate::input::PointerButton::Secondary,
            x: 10.0,
            y: 10.0,
            modifiers: crate::input::Modifiers::NONE,
        });
        assert!(v.handle_pointer(PointerEvent::Moved { x: 60.0, y: 10.0 }));
        assert_ne!(v.camera().azimuth(), a0);
    }
}
