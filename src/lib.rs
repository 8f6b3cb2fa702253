//! Verlet rope simulation for games and interactive toys.
//!
//! `tether` simulates a chain of point masses joined by inextensible links.
//! One end follows an anchor (typically the pointer); the rest falls under
//! gravity and wraps around static obstacles, solved with position-based
//! dynamics: Verlet integration followed by a fixed number of relaxation
//! passes.
//!
//! # Features
//!
//! - **Verlet integration**: Implicit velocity from current and previous position
//! - **Iterative relaxation**: More passes make a stiffer, less stretchy rope
//! - **Colliders**: Circles and axis-aligned boxes, shared read-only via `World`
//! - **Diagnostics**: Total length and min/max stretch for convergence checks
//! - **Deterministic**: Degenerate-link jitter comes from a seeded PCG stream
//! - **Observable**: Monitor ticks via the `TickObserver` trait
//! - **`no_std` compatible**: Works in embedded and WASM environments
//!
//! ```
//! use tether::{Collider, Rope, RopeConfig, Vector2, World};
//!
//! let world = World::new()
//!     .with_collider(Collider::circle(Vector2::new(100.0f32, 160.0), 30.0).unwrap());
//! let mut rope = Rope::new(RopeConfig::new(), &world).unwrap();
//! for _ in 0..120 {
//!     rope.update(Vector2::new(100.0, 100.0));
//! }
//! assert!(rope.max_stretch() >= rope.min_stretch());
//! ```

#![no_std]

extern crate alloc;

pub mod float;
pub mod vector;
pub mod vertex;
pub mod constraint;
pub mod collider;
pub mod world;
pub mod rope;
pub mod diagnostics;
pub mod observer;
pub mod sink;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vector::Vector2;
pub use vertex::Vertex;
pub use constraint::{Constraint, Relaxation};
pub use collider::{Aabb, Circle, Collider};
pub use world::World;
pub use rope::Rope;
pub use diagnostics::Stretch;
pub use observer::{NoOpTickObserver, TickObserver, TickStats};
pub use sink::RenderSink;
pub use config::RopeConfig;
pub use error::PhysicsError;
