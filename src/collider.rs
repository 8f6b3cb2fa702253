//! Static obstacles the rope collides with: circles and axis-aligned boxes.

use crate::error::PhysicsError;
use crate::float::Float;
use crate::vector::Vector2;

/// A static obstacle queried by the rope during relaxation.
///
/// The shape set is closed; every variant answers the same two queries:
/// [`contains`](Collider::contains) and
/// [`closest_surface_point`](Collider::closest_surface_point).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Collider<F: Float> {
    Circle(Circle<F>),
    Aabb(Aabb<F>),
}

/// Solid disc.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle<F: Float> {
    center: Vector2<F>,
    radius: F,
}

/// Axis-aligned box described by its center and half extents.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb<F: Float> {
    center: Vector2<F>,
    half_width: F,
    half_height: F,
}

impl<F: Float> Collider<F> {
    pub fn circle(center: Vector2<F>, radius: F) -> Result<Self, PhysicsError> {
        Circle::new(center, radius).map(Collider::Circle)
    }

    pub fn aabb(center: Vector2<F>, half_width: F, half_height: F) -> Result<Self, PhysicsError> {
        Aabb::new(center, half_width, half_height).map(Collider::Aabb)
    }

    pub fn contains(&self, point: Vector2<F>) -> bool {
        match self {
            Collider::Circle(c) => c.contains(point),
            Collider::Aabb(b) => b.contains(point),
        }
    }

    pub fn closest_surface_point(&self, point: Vector2<F>) -> Vector2<F> {
        match self {
            Collider::Circle(c) => c.closest_surface_point(point),
            Collider::Aabb(b) => b.closest_surface_point(point),
        }
    }

    pub fn center(&self) -> Vector2<F> {
        match self {
            Collider::Circle(c) => c.center,
            Collider::Aabb(b) => b.center,
        }
    }
}

impl<F: Float> From<Circle<F>> for Collider<F> {
    fn from(c: Circle<F>) -> Self {
        Collider::Circle(c)
    }
}

impl<F: Float> From<Aabb<F>> for Collider<F> {
    fn from(b: Aabb<F>) -> Self {
        Collider::Aabb(b)
    }
}

impl<F: Float> Circle<F> {
    pub fn new(center: Vector2<F>, radius: F) -> Result<Self, PhysicsError> {
        if !center.is_finite() {
            return Err(PhysicsError::InvalidCenter);
        }
        if !radius.is_finite() || radius <= F::zero() {
            return Err(PhysicsError::InvalidRadius);
        }
        Ok(Circle { center, radius })
    }

    pub fn center(&self) -> Vector2<F> { self.center }
    pub fn radius(&self) -> F { self.radius }

    pub fn contains(&self, point: Vector2<F>) -> bool {
        self.center.distance_to(point) <= self.radius
    }

    /// Project `point` onto the circle along the line through the center.
    ///
    /// A point exactly at the center has no direction to follow; it is sent
    /// to `center - (0, radius)`, the top of the circle in y-down screen space.
    pub fn closest_surface_point(&self, point: Vector2<F>) -> Vector2<F> {
        let separation = self.center - point;
        let offset = if separation.length_sq() > F::zero() {
            separation.with_magnitude(self.radius)
        } else {
            Vector2::new(F::zero(), self.radius)
        };
        self.center - offset
    }
}

impl<F: Float> Aabb<F> {
    pub fn new(center: Vector2<F>, half_width: F, half_height: F) -> Result<Self, PhysicsError> {
        if !center.is_finite() {
            return Err(PhysicsError::InvalidCenter);
        }
        let valid = |h: F| h.is_finite() && h > F::zero();
        if !valid(half_width) || !valid(half_height) {
            return Err(PhysicsError::InvalidExtents);
        }
        Ok(Aabb { center, half_width, half_height })
    }

    /// Build from full width and height.
    pub fn from_size(center: Vector2<F>, size: Vector2<F>) -> Result<Self, PhysicsError> {
        Self::new(center, size.x * F::half(), size.y * F::half())
    }

    pub fn center(&self) -> Vector2<F> { self.center }
    pub fn half_width(&self) -> F { self.half_width }
    pub fn half_height(&self) -> F { self.half_height }

    pub fn left(&self) -> F { self.center.x - self.half_width }
    pub fn right(&self) -> F { self.center.x + self.half_width }
    pub fn top(&self) -> F { self.center.y - self.half_height }
    pub fn bottom(&self) -> F { self.center.y + self.half_height }

    pub fn contains(&self, point: Vector2<F>) -> bool {
        point.x >= self.left()
            && point.x <= self.right()
            && point.y >= self.top()
            && point.y <= self.bottom()
    }

    /// Closest point on the box outline, resolved x-first.
    ///
    /// Outside the horizontal extent, x snaps to the near side edge and y is
    /// clamped into the vertical extent. Inside it, x is kept and y snaps to
    /// the top or bottom edge, whichever lies on the same side of the center.
    pub fn closest_surface_point(&self, point: Vector2<F>) -> Vector2<F> {
        let mut closest = point;
        if point.x < self.left() || point.x > self.right() {
            closest.x = point.x.clamp(self.left(), self.right());
            closest.y = point.y.clamp(self.top(), self.bottom());
        } else if point.y < self.center.y {
            closest.y = self.top();
        } else {
            closest.y = self.bottom();
        }
        closest
    }
}
