//! Distance constraints linking consecutive rope vertices.

use crate::float::Float;
use crate::vector::Vector2;
use crate::vertex::Vertex;
use rand::Rng;

/// Distance substituted for a link whose endpoints coincide exactly.
pub const DEGENERATE_DISTANCE: f32 = 1e-3;

/// Span of the random direction used to split coincident endpoints.
pub const JITTER_SCALE: f32 = 1e-3;

/// Inextensible link between two vertices, stored as indices into the
/// rope's vertex arena.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Constraint<F: Float> {
    pub a: usize,
    pub b: usize,
    pub rest_length: F,
}

/// What a single relaxation step did to a constraint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Relaxation {
    /// Both endpoints pinned; nothing moved.
    Skipped,
    /// Endpoints pulled toward the rest length.
    Corrected,
    /// Endpoints coincided and were split along a random direction.
    Jittered,
}

impl<F: Float> Constraint<F> {
    pub fn new(a: usize, b: usize, rest_length: F) -> Self {
        Constraint { a, b, rest_length }
    }

    /// Current distance between the two endpoints.
    pub fn current_length(&self, vertices: &[Vertex<F>]) -> F {
        vertices[self.a].pos.distance_to(vertices[self.b].pos)
    }

    /// Ratio of current distance to rest length. 1.0 means unstretched.
    pub fn stretch(&self, vertices: &[Vertex<F>]) -> F {
        self.current_length(vertices) / self.rest_length
    }

    /// Pull the endpoints toward `rest_length`.
    ///
    /// Free endpoints share the correction equally. When one endpoint is
    /// pinned the other takes the whole correction. Coincident endpoints
    /// are separated along a tiny direction drawn from `rng`.
    pub fn solve<R: Rng>(&self, vertices: &mut [Vertex<F>], rng: &mut R) -> Relaxation {
        let a = vertices[self.a];
        let b = vertices[self.b];
        if a.pinned && b.pinned {
            return Relaxation::Skipped;
        }

        let mut outcome = Relaxation::Corrected;
        let mut delta = b.pos - a.pos;
        let mut dist = delta.length();
        if dist == F::zero() {
            dist = F::from_f32(DEGENERATE_DISTANCE);
            delta = jitter(rng);
            outcome = Relaxation::Jittered;
        }

        let fraction = (self.rest_length - dist) / dist / F::two();
        let offset = delta * fraction;

        if a.pinned {
            vertices[self.b].pos += offset * F::two();
        } else if b.pinned {
            vertices[self.a].pos -= offset * F::two();
        } else {
            vertices[self.a].pos -= offset;
            vertices[self.b].pos += offset;
        }
        outcome
    }
}

fn jitter<F: Float, R: Rng>(rng: &mut R) -> Vector2<F> {
    let x = (rng.random::<f32>() - 0.5) * JITTER_SCALE;
    let y = (rng.random::<f32>() - 0.5) * JITTER_SCALE;
    Vector2::new(F::from_f32(x), F::from_f32(y))
}
