//! Rope vertices with Verlet (implicit velocity) state.

use crate::float::Float;
use crate::vector::Vector2;

/// A point mass on the rope. Velocity is implicit: `pos - prev_pos`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vertex<F: Float> {
    pub pos: Vector2<F>,
    pub prev_pos: Vector2<F>,
    pub pinned: bool,
}

impl<F: Float> Vertex<F> {
    pub fn new(pos: Vector2<F>) -> Self {
        Vertex { pos, prev_pos: pos, pinned: false }
    }

    /// Advance one tick: carry the implicit velocity forward (scaled by
    /// `damping`) and add `gravity` to y. Pinned vertices do not move.
    pub fn integrate(&mut self, gravity: F, damping: F) {
        if self.pinned {
            return;
        }
        let velocity = self.velocity() * damping;
        self.prev_pos = self.pos;
        self.pos += velocity;
        self.pos.y += gravity;
    }

    pub fn velocity(&self) -> Vector2<F> {
        self.pos - self.prev_pos
    }

    /// Pin in place, discarding any implicit velocity.
    pub fn pin(&mut self) {
        self.pinned = true;
        self.prev_pos = self.pos;
    }

    /// Release, starting from rest.
    pub fn unpin(&mut self) {
        self.pinned = false;
        self.prev_pos = self.pos;
    }

    /// Teleport to `pos`, remembering where the vertex was so the jump
    /// reads as velocity on the next integration.
    pub fn move_to(&mut self, pos: Vector2<F>) {
        self.prev_pos = self.pos;
        self.pos = pos;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integrate_keeps_momentum_and_falls() {
        let mut v = Vertex::new(Vector2::new(0.0f32, 0.0));
        v.prev_pos = Vector2::new(-1.0, 0.0);
        v.integrate(0.5, 1.0);
        assert_eq!(v.pos, Vector2::new(1.0, 0.5));
        assert_eq!(v.prev_pos, Vector2::new(0.0, 0.0));
    }

    #[test]
    fn damping_scales_velocity() {
        let mut v = Vertex::new(Vector2::new(0.0f32, 0.0));
        v.prev_pos = Vector2::new(-2.0, 0.0);
        v.integrate(0.0, 0.5);
        assert_eq!(v.pos, Vector2::new(1.0, 0.0));
    }

    #[test]
    fn pinned_vertex_stays_fixed() {
        let mut v = Vertex::new(Vector2::new(5.0f32, 5.0));
        v.prev_pos = Vector2::new(0.0, 0.0);
        v.pin();
        v.integrate(1000.0, 1.0);
        assert_eq!(v.pos, Vector2::new(5.0, 5.0));
        assert_eq!(v.velocity(), Vector2::zero());
    }

    #[test]
    fn move_to_records_previous() {
        let mut v = Vertex::new(Vector2::new(1.0f32, 1.0));
        v.move_to(Vector2::new(4.0, 5.0));
        assert_eq!(v.prev_pos, Vector2::new(1.0, 1.0));
        assert_eq!(v.velocity(), Vector2::new(3.0, 4.0));
    }
}
