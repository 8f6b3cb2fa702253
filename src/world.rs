//! Ordered collection of static colliders shared by one or more ropes.

use crate::collider::Collider;
use crate::float::Float;
use crate::sink::RenderSink;
use alloc::vec::Vec as AllocVec;

/// Read-only set of obstacles, queried in insertion order.
///
/// Colliders are validated when they are built, so a `World` only ever
/// holds shapes whose surface projection lands on their own boundary.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct World<F: Float> {
    colliders: AllocVec<Collider<F>>,
}

impl<F: Float> World<F> {
    pub fn new() -> Self {
        World { colliders: AllocVec::new() }
    }

    pub fn with_collider(mut self, collider: impl Into<Collider<F>>) -> Self {
        self.push(collider);
        self
    }

    pub fn push(&mut self, collider: impl Into<Collider<F>>) {
        self.colliders.push(collider.into());
    }

    pub fn colliders(&self) -> &[Collider<F>] {
        &self.colliders
    }

    pub fn len(&self) -> usize {
        self.colliders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colliders.is_empty()
    }

    pub fn draw<S: RenderSink<F>>(&self, sink: &mut S) {
        for c in &self.colliders {
            sink.draw_collider(c);
        }
    }
}

impl<F: Float> FromIterator<Collider<F>> for World<F> {
    fn from_iter<I: IntoIterator<Item = Collider<F>>>(iter: I) -> Self {
        World { colliders: iter.into_iter().collect() }
    }
}
