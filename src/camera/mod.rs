//! Camera system for viewing the mesh.
//!
//! Provides a spherical-coordinate orbit camera with pole-crossing
//! support, screen-aligned panning, and a pointer-driven controller.

/// Drag-gesture controller and the pointer-input capability trait.
pub mod controller;
/// Core orbit camera state and transform production.
pub mod core;

pub use self::controller::{
    fit_camera, CameraController, PointerInputHandler,
};
pub use self::core::OrbitCamera;
