//! Blinking-highlight lifecycle.
//!
//! Random elements and mesh rectangles fade in and back out over a fixed
//! lifetime. Each highlight is a set of translucent quads plus a Gaussian
//! alpha envelope centered on the midpoint of its life; the envelope is
//! written straight into the color buffers every frame. Designed for
//! minimal allocations during the update loop.

use rand::Rng;

use crate::options::BlinkOptions;
use crate::render::Quad;
use crate::scene::{
    element_face_corners, rect_face_corners, ElementBuffers, RectBuffers,
};

/// Gaussian alpha envelope at `dt` seconds from the highlight midpoint.
fn envelope(opts: &BlinkOptions, dt: f32) -> f32 {
    (-dt * dt / opts.fade_sigma).exp() * (opts.max_alpha - opts.min_alpha)
        + opts.min_alpha
}

/// Tracks all currently blinking elements and rectangles.
pub struct Blink {
    opts: BlinkOptions,
    element_quads: Vec<Quad>,
    rect_quads: Vec<Quad>,
    showing_elements: Vec<bool>,
    showing_rectangles: Vec<bool>,
    last_spawn: f32,
}

impl Blink {
    /// Create an idle blink state for the given primitive counts.
    #[must_use]
    pub fn new(
        opts: BlinkOptions,
        element_count: u32,
        rect_count: u32,
    ) -> Self {
        Self {
            opts,
            element_quads: Vec::new(),
            rect_quads: Vec::new(),
            showing_elements: vec![false; element_count as usize],
            showing_rectangles: vec![false; rect_count as usize],
            last_spawn: 0.0,
        }
    }

    /// Advance the animation to `t` seconds.
    ///
    /// Spawns new highlights at the configured rate, expires highlights
    /// past the end of their life, and writes the current envelope alpha
    /// into the element and rectangle color buffers.
    pub fn advance<R: Rng>(
        &mut self,
        t: f32,
        rng: &mut R,
        elements: &mut ElementBuffers,
        rects: &mut RectBuffers,
    ) {
        self.spawn(t, rng);

        let opts = &self.opts;
        update_set(
            &mut self.element_quads,
            &mut self.showing_elements,
            opts,
            t,
            |v, a| elements.set_alpha(v, a),
        );
        update_set(
            &mut self.rect_quads,
            &mut self.showing_rectangles,
            opts,
            t,
            |v, a| rects.set_alpha(v, a),
        );
    }

    /// Pick random primitives to start blinking, at most
    /// `spawns_per_sec` of each kind per second on average. A primitive
    /// already blinking is left alone.
    fn spawn<R: Rng>(&mut self, t: f32, rng: &mut R) {
        let n = ((t - self.last_spawn) * self.opts.spawns_per_sec).floor();
        if n <= 0.0 {
            return;
        }
        let mid_time = t + self.opts.life_length / 2.0;

        let element_count = self.showing_elements.len() as u32;
        for _ in 0..n as u32 {
            if element_count == 0 {
                break;
            }
            let j = rng.random_range(0..element_count);
            if !self.showing_elements[j as usize] {
                self.showing_elements[j as usize] = true;
                for corners in element_face_corners(j, element_count) {
                    self.element_quads.push(Quad::new(corners, j, mid_time));
                }
            }
        }

        let rect_count = self.showing_rectangles.len() as u32;
        for _ in 0..n as u32 {
            if rect_count == 0 {
                break;
            }
            let j = rng.random_range(0..rect_count);
            if !self.showing_rectangles[j as usize] {
                self.showing_rectangles[j as usize] = true;
                self.rect_quads
                    .push(Quad::new(rect_face_corners(j), j, mid_time));
            }
        }

        self.last_spawn = t;
    }

    /// Quads of the currently blinking elements.
    #[must_use]
    pub fn element_quads(&self) -> &[Quad] {
        &self.element_quads
    }

    /// Mutable access for the per-frame depth sort.
    pub fn element_quads_mut(&mut self) -> &mut [Quad] {
        &mut self.element_quads
    }

    /// Quads of the currently blinking rectangles.
    #[must_use]
    pub fn rect_quads(&self) -> &[Quad] {
        &self.rect_quads
    }

    /// Mutable access for the per-frame depth sort.
    pub fn rect_quads_mut(&mut self) -> &mut [Quad] {
        &mut self.rect_quads
    }

    /// Whether nothing is currently blinking.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.element_quads.is_empty() && self.rect_quads.is_empty()
    }
}

impl std::fmt::Debug for Blink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Blink")
            .field("element_quads", &self.element_quads.len())
            .field("rect_quads", &self.rect_quads.len())
            .field("last_spawn", &self.last_spawn)
            .finish()
    }
}

/// Expire finished highlights and write envelope alphas for the rest.
fn update_set<F: FnMut(u32, f32)>(
    quads: &mut Vec<Quad>,
    showing: &mut [bool],
    opts: &BlinkOptions,
    t: f32,
    mut set_alpha: F,
) {
    let half_life = opts.life_length / 2.0;
    quads.retain(|q| {
        let alive = (q.mid_time - t).abs() <= half_life;
        if !alive {
            showing[q.source as usize] = false;
            for &c in &q.corners {
                set_alpha(c, opts.min_alpha);
            }
        }
        alive
    });
    for q in quads.iter() {
        let alpha = envelope(opts, t - q.mid_time);
        for &c in &q.corners {
            set_alpha(c, alpha);
        }
    }
}
