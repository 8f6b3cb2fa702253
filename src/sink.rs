//! Rendering boundary: the rope hands draw commands to a caller-owned sink.

use crate::collider::Collider;
use crate::float::Float;
use crate::vector::Vector2;

/// Receives geometry to draw once per frame.
///
/// The sink performs no simulation logic. Implement it over whatever
/// graphics backend the host uses.
pub trait RenderSink<F: Float> {
    /// A link between two consecutive vertices.
    fn draw_link(&mut self, a: Vector2<F>, b: Vector2<F>);

    /// A single vertex.
    fn draw_vertex(&mut self, position: Vector2<F>);

    /// A static obstacle.
    fn draw_collider(&mut self, _collider: &Collider<F>) {}
}
