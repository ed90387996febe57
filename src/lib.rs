// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Interactive 3D viewer core for LR-spline volume meshes.
//!
//! Lrview turns an in-memory description of an LR-spline volume's
//! parametric structure into draw-ready buffers, steers an orbit camera
//! from pointer input, and animates a blinking highlight over random
//! elements and mesh rectangles, the classic way to inspect where local
//! refinement has split the mesh.
//!
//! # Key entry points
//!
//! - [`viewer::Viewer`] - owns all per-session state and runs the
//!   per-frame update phases
//! - [`camera::OrbitCamera`] - spherical orbit camera with pole-crossing
//!   support
//! - [`scene::VolumeMesh`] - the in-memory mesh description the host
//!   provides
//! - [`options::Options`] - runtime configuration (camera sensitivities,
//!   blink parameters, display toggles) with TOML presets
//!
//! # Architecture
//!
//! The crate is deliberately free of any windowing or GPU dependency: the
//! host owns the window, the GL/GPU surface, the clock, and the draw
//! calls. Once per frame it feeds elapsed time to
//! [`Viewer::advance`](viewer::Viewer::advance), which moves the camera
//! path, updates highlight alphas in place, depth-sorts the translucent
//! quads back-to-front (the alpha passes draw with depth testing off),
//! and rebuilds the flat index lists the host then draws.

pub mod animation;
pub mod camera;
pub mod command;
pub mod error;
pub mod input;
pub mod options;
pub mod render;
pub mod scene;
pub mod util;
pub mod viewer;
