//! Back-to-front ordering of translucent quads.
//!
//! The blink passes draw alpha-blended faces with depth testing disabled,
//! so compositing order is the only thing keeping them correct: farther
//! quads must be drawn first (painter's algorithm). Ordering is an
//! approximation by farthest corner; true mutual intersections are not
//! resolved, which is acceptable for the small highlighted subset.

use glam::Vec3;

/// A translucent quad awaiting depth-ordered drawing.
///
/// Holds only corner indices into a caller-owned coordinate buffer plus
/// the animation metadata of the highlight that spawned it; the buffer
/// and camera are passed into [`sort_back_to_front`] instead of being
/// referenced from the quad. The buffer must not be reindexed while quads
/// point into it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quad {
    /// Four corner indices into the owning coordinate buffer.
    pub corners: [u32; 4],
    /// Index of the element or rectangle this quad highlights.
    pub source: u32,
    /// Midpoint of the highlight's life, in seconds since viewer start.
    pub mid_time: f32,
}

impl Quad {
    /// Create a quad over the given corner indices.
    #[must_use]
    pub fn new(corners: [u32; 4], source: u32, mid_time: f32) -> Self {
        Self {
            corners,
            source,
            mid_time,
        }
    }

    /// Squared distance from `eye` to the quad's farthest corner.
    ///
    /// The farthest corner (not the centroid) is the representative
    /// depth: it is the conservative choice for quads whose corners span
    /// a wide depth range.
    #[must_use]
    pub fn depth_key(&self, coords: &[Vec3], eye: Vec3) -> f32 {
        self.corners
            .iter()
            .map(|&i| coords[i as usize].distance_squared(eye))
            .fold(f32::NEG_INFINITY, f32::max)
    }
}

/// Sort quads so the one with the farthest corner draws first.
///
/// Depth keys are computed once per quad up front and the quads permuted
/// by key, rather than recomputing distances inside the comparator. Ties
/// resolve by `f32` total order, which is arbitrary but harmless.
/// The ordering depends on the *current* eye and buffer contents only;
/// re-sort every frame.
pub fn sort_back_to_front(quads: &mut [Quad], coords: &[Vec3], eye: Vec3) {
    let mut keyed: Vec<(f32, Quad)> = quads
        .iter()
        .map(|q| (q.depth_key(coords, eye), *q))
        .collect();
    keyed.sort_unstable_by(|a, b| b.0.total_cmp(&a.0));
    for (slot, (_, q)) in quads.iter_mut().zip(keyed) {
        *slot = q;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quad(first_corner: u32, source: u32) -> Quad {
        Quad::new(
            [
                first_corner,
                first_corner + 1,
                first_corner + 2,
                first_corner + 3,
            ],
            source,
            0.0,
        )
    }

    /// Quad A's corners sit at squared distances {1, 2, 3, 4} from the
    /// origin, quad B's at {0.5, 0.5, 0.5, 0.5}.
    fn two_band_coords() -> Vec<Vec3> {
        let mut coords: Vec<Vec3> = [1.0_f32, 2.0, 3.0, 4.0]
            .iter()
            .map(|d2| Vec3::new(d2.sqrt(), 0.0, 0.0))
            .collect();
        coords.extend(
            std::iter::repeat(Vec3::new(0.5_f32.sqrt(), 0.0, 0.0)).take(4),
        );
        coords
    }

    #[test]
    fn farther_max_corner_sorts_first() {
        let coords = two_band_coords();
        let a = quad(0, 0);
        let b = quad(4, 1);
        assert_eq!(a.depth_key(&coords, Vec3::ZERO), 4.0);
        assert_eq!(b.depth_key(&coords, Vec3::ZERO), 0.5);

        let mut quads = [a, b];
        sort_back_to_front(&mut quads, &coords, Vec3::ZERO);
        assert_eq!(quads, [a, b]);

        let mut quads = [b, a];
        sort_back_to_front(&mut quads, &coords, Vec3::ZERO);
        assert_eq!(quads, [a, b]);
    }

    #[test]
    fn sorting_is_idempotent() {
        let coords: Vec<Vec3> = (0..12)
            .map(|i| Vec3::new((i * 7 % 5) as f32, (i % 3) as f32, i as f32))
            .collect();
        let mut quads = [quad(0, 0), quad(4, 1), quad(8, 2)];
        let eye = Vec3::new(1.0, -2.0, 0.5);

        sort_back_to_front(&mut quads, &coords, eye);
        let once = quads;
        sort_back_to_front(&mut quads, &coords, eye);
        assert_eq!(quads, once);
    }

    #[test]
    fn strictly_farther_quad_always_sorts_first() {
        // Every corner of the far quad is strictly beyond every corner of
        // the near quad.
        let mut coords: Vec<Vec3> =
            (0..4).map(|i| Vec3::new(10.0 + i as f32, 0.0, 0.0)).collect();
        coords.extend((0..4).map(|i| Vec3::new(1.0 + 0.1 * i as f32, 0.0, 0.0)));

        let far = quad(0, 0);
        let near = quad(4, 1);
        let mut quads = [near, far];
        sort_back_to_front(&mut quads, &coords, Vec3::ZERO);
        assert_eq!(quads, [far, near]);
    }

    #[test]
    fn ordering_follows_the_camera() {
        // Two quads on opposite sides of the origin swap order when the
        // eye moves from one side to the other.
        let mut coords: Vec<Vec3> =
            (0..4).map(|i| Vec3::new(5.0, i as f32, 0.0)).collect();
        coords.extend((0..4).map(|i| Vec3::new(-5.0, i as f32, 0.0)));
        let plus = quad(0, 0);
        let minus = quad(4, 1);

        let mut quads = [plus, minus];
        sort_back_to_front(&mut quads, &coords, Vec3::new(4.0, 0.0, 0.0));
        assert_eq!(quads, [minus, plus]);

        sort_back_to_front(&mut quads, &coords, Vec3::new(-4.0, 0.0, 0.0));
        assert_eq!(quads, [plus, minus]);
    }
}
