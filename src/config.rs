//! Construction parameters for a rope.

use crate::error::PhysicsError;
use crate::float::Float;
use crate::rope::Rope;
use crate::vector::Vector2;
use crate::world::World;
use serde::{Deserialize, Serialize};

/// Seed used for the degenerate-link jitter source unless overridden.
pub const DEFAULT_JITTER_SEED: u64 = 0x5EED_0F7E_7E;

/// Everything needed to build a [`Rope`].
///
/// `segments` and `segment_length` are fixed for the lifetime of a rope;
/// changing them means building a new one. The remaining fields can also be
/// adjusted on a live rope.
///
/// # Builder Pattern
/// ```
/// use tether::{RopeConfig, Vector2};
///
/// let config: RopeConfig<f32> = RopeConfig::new()
///     .with_segments(30)
///     .with_segment_length(5.0)
///     .with_spawn(Vector2::new(200.0, 50.0))
///     .with_iterations(20)
///     .with_gravity(0.5);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RopeConfig<F: Float> {
    /// Number of vertices. The rope has one fewer constraint. Default: 20.
    pub segments: usize,
    /// Rest length of every constraint. Default: 4.0.
    pub segment_length: F,
    /// Where every vertex starts. Default: (100, 100).
    pub spawn: Vector2<F>,
    /// Relaxation passes per tick; more is stiffer. Default: 10.
    pub iterations: usize,
    /// Added to each free vertex's y every tick. Default: 1.0.
    pub gravity: F,
    /// Implicit velocity multiplier in [0, 1]. 1.0 = no damping. Default: 1.0.
    pub damping: F,
    /// Seed for the jitter that separates coincident vertices.
    pub jitter_seed: u64,
}

impl<F: Float> RopeConfig<F> {
    /// Create a new config with default values.
    pub fn new() -> Self {
        RopeConfig {
            segments: 20,
            segment_length: F::from_f32(4.0),
            spawn: Vector2::new(F::from_f32(100.0), F::from_f32(100.0)),
            iterations: 10,
            gravity: F::one(),
            damping: F::one(),
            jitter_seed: DEFAULT_JITTER_SEED,
        }
    }

    pub fn with_segments(mut self, segments: usize) -> Self {
        self.segments = segments;
        self
    }

    pub fn with_segment_length(mut self, segment_length: F) -> Self {
        self.segment_length = segment_length;
        self
    }

    pub fn with_spawn(mut self, spawn: Vector2<F>) -> Self {
        self.spawn = spawn;
        self
    }

    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_gravity(mut self, gravity: F) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_damping(mut self, damping: F) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_jitter_seed(mut self, seed: u64) -> Self {
        self.jitter_seed = seed;
        self
    }

    /// Check every parameter, reporting the first one that is out of range.
    pub fn validate(&self) -> Result<(), PhysicsError> {
        if self.segments < 1 {
            return Err(PhysicsError::InvalidSegmentCount(self.segments));
        }
        if !self.segment_length.is_finite() || self.segment_length <= F::zero() {
            return Err(PhysicsError::InvalidSegmentLength);
        }
        if !self.spawn.is_finite() {
            return Err(PhysicsError::InvalidSpawn);
        }
        validate_iterations(self.iterations)?;
        validate_gravity(self.gravity)?;
        validate_damping(self.damping)?;
        Ok(())
    }

    /// Build a fresh rope against `world`.
    pub fn build(self, world: &World<F>) -> Result<Rope<'_, F>, PhysicsError> {
        Rope::new(self, world)
    }
}

impl<F: Float> Default for RopeConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn validate_iterations(iterations: usize) -> Result<(), PhysicsError> {
    if iterations < 1 {
        return Err(PhysicsError::InvalidIterations(iterations));
    }
    Ok(())
}

pub(crate) fn validate_gravity<F: Float>(gravity: F) -> Result<(), PhysicsError> {
    if !gravity.is_finite() {
        return Err(PhysicsError::InvalidGravity);
    }
    Ok(())
}

pub(crate) fn validate_damping<F: Float>(damping: F) -> Result<(), PhysicsError> {
    if !damping.is_finite() || damping < F::zero() || damping > F::one() {
        return Err(PhysicsError::InvalidDamping);
    }
    Ok(())
}
