//! Error types for rope construction and configuration.

use thiserror::Error;

/// Errors raised when a rope, world or collider is configured with
/// parameters it cannot simulate.
///
/// Numerical degeneracy during a tick (coincident vertices, a query at a
/// circle's center) is resolved inside the solver and never shows up here.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PhysicsError {
    /// A rope needs at least one vertex.
    #[error("rope needs at least 1 segment, got {0}")]
    InvalidSegmentCount(usize),
    /// Segment rest length must be positive and finite.
    #[error("segment length must be positive and finite")]
    InvalidSegmentLength,
    /// At least one relaxation pass per tick.
    #[error("iteration count must be at least 1, got {0}")]
    InvalidIterations(usize),
    /// Gravity must be finite.
    #[error("gravity must be finite")]
    InvalidGravity,
    /// Damping must be finite and in [0, 1].
    #[error("damping must be in [0, 1]")]
    InvalidDamping,
    /// Spawn point must have finite coordinates.
    #[error("spawn position must be finite")]
    InvalidSpawn,
    /// Circle radius must be positive and finite.
    #[error("circle radius must be positive and finite")]
    InvalidRadius,
    /// Box half extents must be positive and finite.
    #[error("box extents must be positive and finite")]
    InvalidExtents,
    /// Collider center must have finite coordinates.
    #[error("collider center must be finite")]
    InvalidCenter,
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use std::string::ToString;

    #[test]
    fn error_messages() {
        assert_eq!(
            PhysicsError::InvalidSegmentCount(0).to_string(),
            "rope needs at least 1 segment, got 0"
        );
        assert_eq!(
            PhysicsError::InvalidIterations(0).to_string(),
            "iteration count must be at least 1, got 0"
        );
    }
}
