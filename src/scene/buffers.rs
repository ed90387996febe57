//! Draw-buffer construction for elements and mesh rectangles.
//!
//! The layouts here are the contract with the host's indexed draw calls:
//! elements get three full copies of their 8 corners, one per cardinal
//! normal direction, so each face can be lit by normals orthogonal to it;
//! rectangles get 4 corners with a single normal direction. Highlight
//! alpha is animated in place through [`ElementBuffers::set_alpha`] /
//! [`RectBuffers::set_alpha`].

use glam::Vec3;
use rand::Rng;

use super::mesh::{Axis, ElementBox, MeshRect, VolumeMesh};

/// Edges of an element box, as corner-index pairs into one corner set.
const ELEMENT_EDGES: [(u32, u32); 12] = [
    // bottom rectangle
    (0, 1),
    (0, 2),
    (1, 3),
    (2, 3),
    // top rectangle
    (4, 5),
    (4, 6),
    (5, 7),
    (6, 7),
    // verticals
    (0, 4),
    (1, 5),
    (2, 6),
    (3, 7),
];

/// The 8 corners of an element box.
///
/// Corner `j` takes the max coordinate on x when bit 0 of `j` is set, on
/// y for bit 1, on z for bit 2.
fn element_corners(el: &ElementBox) -> [Vec3; 8] {
    let mut corners = [Vec3::ZERO; 8];
    for (j, corner) in corners.iter_mut().enumerate() {
        *corner = Vec3::new(
            if j & 1 == 0 { el.min.x } else { el.max.x },
            if j & 2 == 0 { el.min.y } else { el.max.y },
            if j & 4 == 0 { el.min.z } else { el.max.z },
        );
    }
    corners
}

/// Corner indices of element `element`'s six faces, in the order bottom,
/// top, right, left, front, back.
///
/// The z-orthogonal faces index into corner-set 0, the x-orthogonal ones
/// into set 1, the y-orthogonal ones into set 2, so the normals fetched
/// alongside each face point along its axis.
#[must_use]
pub fn element_face_corners(
    element: u32,
    element_count: u32,
) -> [[u32; 4]; 6] {
    let base = element * 8;
    let s = element_count * 8;
    [
        [base, base + 1, base + 3, base + 2],
        [base + 4, base + 5, base + 7, base + 6],
        [base + 1 + s, base + 3 + s, base + 7 + s, base + 5 + s],
        [base + s, base + 2 + s, base + 6 + s, base + 4 + s],
        [
            base + 2 * s,
            base + 1 + 2 * s,
            base + 5 + 2 * s,
            base + 4 + 2 * s,
        ],
        [
            base + 2 + 2 * s,
            base + 3 + 2 * s,
            base + 7 + 2 * s,
            base + 6 + 2 * s,
        ],
    ]
}

/// Corner indices of mesh rectangle `rect`.
#[must_use]
pub fn rect_face_corners(rect: u32) -> [u32; 4] {
    let base = rect * 4;
    [base, base + 1, base + 2, base + 3]
}

/// Vertex and index buffers for all elements of a volume.
#[derive(Debug, Clone)]
pub struct ElementBuffers {
    pub(crate) coords: Vec<Vec3>,
    pub(crate) normals: Vec<Vec3>,
    pub(crate) colors: Vec<[f32; 4]>,
    pub(crate) lines: Vec<u32>,
    pub(crate) faces: Vec<u32>,
    pub(crate) shell: Vec<u32>,
    count: u32,
}

impl ElementBuffers {
    /// Build the element buffers, giving every element a random color
    /// whose alpha starts at `min_alpha`.
    pub fn build<R: Rng>(
        mesh: &VolumeMesh,
        min_alpha: f32,
        rng: &mut R,
    ) -> Self {
        let n = mesh.elements.len();
        let count = n as u32;
        let set_size = n * 8;

        let mut coords = Vec::with_capacity(3 * set_size);
        let mut normals = Vec::with_capacity(3 * set_size);
        let mut colors = Vec::with_capacity(3 * set_size);

        // One random color per element, shared by all three corner sets.
        let element_colors: Vec<[f32; 4]> = (0..n)
            .map(|_| {
                [
                    rng.random::<f32>(),
                    rng.random::<f32>(),
                    rng.random::<f32>(),
                    min_alpha,
                ]
            })
            .collect();

        // Normals point into the element: +axis on the min side of the
        // set's direction, -axis on the max side.
        for (set, (axis, bit)) in
            [(Axis::Z, 4_usize), (Axis::X, 1), (Axis::Y, 2)]
                .into_iter()
                .enumerate()
        {
            for (el, color) in mesh.elements.iter().zip(&element_colors) {
                coords.extend_from_slice(&element_corners(el));
                for j in 0..8_usize {
                    normals.push(if j & bit == 0 {
                        axis.unit()
                    } else {
                        -axis.unit()
                    });
                    colors.push(*color);
                }
            }
            debug_assert_eq!(coords.len(), (set + 1) * set_size);
        }

        let mut lines = Vec::with_capacity(n * 24);
        let mut faces = Vec::with_capacity(n * 24);
        let mut shell = Vec::new();
        for (i, el) in mesh.elements.iter().enumerate() {
            let base = (i * 8) as u32;
            for (a, b) in ELEMENT_EDGES {
                lines.push(base + a);
                lines.push(base + b);
            }

            let face_corners = element_face_corners(i as u32, count);
            for corners in &face_corners {
                faces.extend_from_slice(corners);
            }

            // Faces on the parametric domain boundary form the opaque
            // shell. Order: bottom, top, right, left, front, back.
            let [bottom, top, right, left, front, back] = face_corners;
            if el.min.x == mesh.start.x {
                shell.extend_from_slice(&left);
            }
            if el.min.y == mesh.start.y {
                shell.extend_from_slice(&front);
            }
            if el.min.z == mesh.start.z {
                shell.extend_from_slice(&bottom);
            }
            if el.max.x == mesh.end.x {
                shell.extend_from_slice(&right);
            }
            if el.max.y == mesh.end.y {
                shell.extend_from_slice(&back);
            }
            if el.max.z == mesh.end.z {
                shell.extend_from_slice(&top);
            }
        }

        Self {
            coords,
            normals,
            colors,
            lines,
            faces,
            shell,
            count,
        }
    }

    /// Number of elements.
    #[must_use]
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Corner coordinates (all three normal-set copies).
    #[must_use]
    pub fn coords(&self) -> &[Vec3] {
        &self.coords
    }

    /// Coordinates as a flat `x y z` float slice for vertex upload.
    #[must_use]
    pub fn coords_flat(&self) -> &[f32] {
        bytemuck::cast_slice(&self.coords)
    }

    /// Normals as a flat float slice.
    #[must_use]
    pub fn normals_flat(&self) -> &[f32] {
        bytemuck::cast_slice(&self.normals)
    }

    /// RGBA colors as a flat float slice.
    #[must_use]
    pub fn colors_flat(&self) -> &[f32] {
        bytemuck::cast_slice(&self.colors)
    }

    /// Wireframe line indices (12 edges per element).
    #[must_use]
    pub fn lines(&self) -> &[u32] {
        &self.lines
    }

    /// Face indices (6 quads per element).
    #[must_use]
    pub fn faces(&self) -> &[u32] {
        &self.faces
    }

    /// Face indices of the opaque boundary shell.
    #[must_use]
    pub fn shell(&self) -> &[u32] {
        &self.shell
    }

    /// Set the alpha of one vertex; used by the blink animation.
    pub fn set_alpha(&mut self, vertex: u32, alpha: f32) {
        self.colors[vertex as usize][3] = alpha;
    }
}

/// Vertex and index buffers for all mesh rectangles of a volume.
#[derive(Debug, Clone)]
pub struct RectBuffers {
    pub(crate) coords: Vec<Vec3>,
    pub(crate) normals: Vec<Vec3>,
    pub(crate) colors: Vec<[f32; 4]>,
    pub(crate) lines: Vec<u32>,
    pub(crate) faces: Vec<u32>,
    count: u32,
}

impl RectBuffers {
    /// Build the rectangle buffers, giving every rectangle a random color
    /// whose alpha starts at `min_alpha`.
    pub fn build<R: Rng>(
        mesh: &VolumeMesh,
        min_alpha: f32,
        rng: &mut R,
    ) -> Self {
        let n = mesh.rectangles.len();
        let mut coords = Vec::with_capacity(n * 4);
        let mut normals = Vec::with_capacity(n * 4);
        let mut colors = Vec::with_capacity(n * 4);
        let mut lines = Vec::with_capacity(n * 8);
        let mut faces = Vec::with_capacity(n * 4);

        for (i, rect) in mesh.rectangles.iter().enumerate() {
            coords.extend_from_slice(&rect_corners(rect));
            let color = [
                rng.random::<f32>(),
                rng.random::<f32>(),
                rng.random::<f32>(),
                min_alpha,
            ];
            for _ in 0..4 {
                normals.push(rect.normal_axis.unit());
                colors.push(color);
            }

            let base = (i * 4) as u32;
            for (a, b) in [(0, 1), (1, 2), (2, 3), (3, 0)] {
                lines.push(base + a);
                lines.push(base + b);
            }
            faces.extend_from_slice(&rect_face_corners(i as u32));
        }

        Self {
            coords,
            normals,
            colors,
            lines,
            faces,
            count: n as u32,
        }
    }

    /// Number of rectangles.
    #[must_use]
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Corner coordinates (4 per rectangle).
    #[must_use]
    pub fn coords(&self) -> &[Vec3] {
        &self.coords
    }

    /// Coordinates as a flat `x y z` float slice for vertex upload.
    #[must_use]
    pub fn coords_flat(&self) -> &[f32] {
        bytemuck::cast_slice(&self.coords)
    }

    /// Normals as a flat float slice.
    #[must_use]
    pub fn normals_flat(&self) -> &[f32] {
        bytemuck::cast_slice(&self.normals)
    }

    /// RGBA colors as a flat float slice.
    #[must_use]
    pub fn colors_flat(&self) -> &[f32] {
        bytemuck::cast_slice(&self.colors)
    }

    /// Outline line indices (4 edges per rectangle).
    #[must_use]
    pub fn lines(&self) -> &[u32] {
        &self.lines
    }

    /// Face indices (1 quad per rectangle).
    #[must_use]
    pub fn faces(&self) -> &[u32] {
        &self.faces
    }

    /// Set the alpha of one vertex; used by the blink animation.
    pub fn set_alpha(&mut self, vertex: u32, alpha: f32) {
        self.colors[vertex as usize][3] = alpha;
    }
}

/// The 4 corners of a mesh rectangle, wound consistently per axis.
fn rect_corners(rect: &MeshRect) -> [Vec3; 4] {
    let (lo, hi) = (rect.start, rect.stop);
    match rect.normal_axis {
        Axis::X => [
            Vec3::new(lo.x, lo.y, lo.z),
            Vec3::new(lo.x, hi.y, lo.z),
            Vec3::new(lo.x, hi.y, hi.z),
            Vec3::new(lo.x, lo.y, hi.z),
        ],
        Axis::Y => [
            Vec3::new(lo.x, lo.y, lo.z),
            Vec3::new(hi.x, lo.y, lo.z),
            Vec3::new(hi.x, lo.y, hi.z),
            Vec3::new(lo.x, lo.y, hi.z),
        ],
        Axis::Z => [
            Vec3::new(lo.x, lo.y, lo.z),
            Vec3::new(hi.x, lo.y, lo.z),
            Vec3::new(hi.x, hi.y, lo.z),
            Vec3::new(lo.x, hi.y, lo.z),
        ],
    }
}
