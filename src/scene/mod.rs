//! Mesh description and draw-buffer construction.
//!
//! [`VolumeMesh`] is the in-memory input contract with the host's spline
//! library; [`buffers`] turns it into the flat vertex/index buffers the
//! host uploads and draws.

/// Element and rectangle draw buffers.
pub mod buffers;
/// In-memory mesh description types.
pub mod mesh;

pub use buffers::{
    element_face_corners, rect_face_corners, ElementBuffers, RectBuffers,
};
pub use mesh::{Axis, ElementBox, MeshRect, VolumeMesh};
