use glam::Vec3;

/// A parametric-space axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// First parametric direction.
    X,
    /// Second parametric direction.
    Y,
    /// Third parametric direction.
    Z,
}

impl Axis {
    /// Unit vector along the axis.
    #[must_use]
    pub fn unit(self) -> Vec3 {
        match self {
            Self::X => Vec3::X,
            Self::Y => Vec3::Y,
            Self::Z => Vec3::Z,
        }
    }
}

/// One element of the volume: an axis-aligned box in parameter space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementBox {
    /// Lower parametric corner.
    pub min: Vec3,
    /// Upper parametric corner.
    pub max: Vec3,
}

/// A mesh rectangle: an axis-aligned rectangle spanning `start`..`stop`,
/// degenerate along (and therefore orthogonal to) `normal_axis`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshRect {
    /// Lower corner; equal to `stop` along `normal_axis`.
    pub start: Vec3,
    /// Upper corner.
    pub stop: Vec3,
    /// The constant parametric direction.
    pub normal_axis: Axis,
}

/// In-memory description of an LR-spline volume's parametric structure.
///
/// The host builds this from its spline library; this crate never parses
/// mesh files. `start`/`end` bound the parametric domain and decide which
/// element faces belong to the opaque boundary shell.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VolumeMesh {
    /// All elements of the volume.
    pub elements: Vec<ElementBox>,
    /// All mesh rectangles of the volume.
    pub rectangles: Vec<MeshRect>,
    /// Lower corner of the parametric domain.
    pub start: Vec3,
    /// Upper corner of the parametric domain.
    pub end: Vec3,
}

impl VolumeMesh {
    /// Whether there is nothing to show.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty() && self.rectangles.is_empty()
    }

    /// Center of the parametric domain.
    #[must_use]
    pub fn center(&self) -> Vec3 {
        (self.start + self.end) * 0.5
    }

    /// Radius of the sphere bounding the parametric domain.
    #[must_use]
    pub fn bounding_radius(&self) -> f32 {
        (self.end - self.start).length() * 0.5
    }
}

#[cfg(test)]
pub(crate) mod test_mesh {
    use super::*;

    /// A 2×1×1-element unit-ish volume with one interior rectangle,
    /// shared by the scene/animation/viewer tests.
    pub(crate) fn two_element_mesh() -> VolumeMesh {
        VolumeMesh {
            elements: vec![
                ElementBox {
                    min: Vec3::new(0.0, 0.0, 0.0),
                    max: Vec3::new(0.5, 1.0, 1.0),
                },
                ElementBox {
                    min: Vec3::new(0.5, 0.0, 0.0),
                    max: Vec3::new(1.0, 1.0, 1.0),
                },
            ],
            rectangles: vec![MeshRect {
                start: Vec3::new(0.5, 0.0, 0.0),
                stop: Vec3::new(0.5, 1.0, 1.0),
                normal_axis: Axis::X,
            }],
            start: Vec3::ZERO,
            end: Vec3::ONE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_mesh::two_element_mesh;
    use super::*;

    #[test]
    fn bounds_of_unit_domain() {
        let mesh = two_element_mesh();
        assert!(!mesh.is_empty());
        assert_eq!(mesh.center(), Vec3::splat(0.5));
        assert!((mesh.bounding_radius() - 3.0_f32.sqrt() / 2.0).abs() < 1e-6);
    }

    #[test]
    fn default_mesh_is_empty() {
        assert!(VolumeMesh::default().is_empty());
    }
}
