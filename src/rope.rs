//! Verlet rope held at one end, relaxed against distance constraints and
//! static colliders.

use crate::config::{self, RopeConfig};
use crate::constraint::{Constraint, Relaxation};
use crate::error::PhysicsError;
use crate::float::Float;
use crate::observer::{NoOpTickObserver, TickObserver};
use crate::sink::RenderSink;
use crate::vector::Vector2;
use crate::vertex::Vertex;
use crate::world::World;
use alloc::vec::Vec as AllocVec;
use rand::SeedableRng;
use rand_pcg::Pcg32;

/// A rope of `segments` vertices joined by `segments - 1` distance
/// constraints, dragged by vertex 0.
///
/// The rope borrows its [`World`]; several ropes may share one.
pub struct Rope<'w, F: Float> {
    vertices: AllocVec<Vertex<F>>,
    constraints: AllocVec<Constraint<F>>,
    config: RopeConfig<F>,
    world: &'w World<F>,
    rng: Pcg32,
}

impl<'w, F: Float> Rope<'w, F> {
    /// Build a rope with every vertex at `config.spawn`.
    pub fn new(config: RopeConfig<F>, world: &'w World<F>) -> Result<Self, PhysicsError> {
        config.validate()?;

        let mut vertices = AllocVec::with_capacity(config.segments);
        for _ in 0..config.segments {
            vertices.push(Vertex::new(config.spawn));
        }

        let mut constraints = AllocVec::with_capacity(config.segments - 1);
        for i in 0..config.segments - 1 {
            constraints.push(Constraint::new(i, i + 1, config.segment_length));
        }

        log::debug!(
            "built rope: {} vertices, segment length {}, {} iterations, gravity {}, {} colliders",
            vertices.len(),
            config.segment_length,
            config.iterations,
            config.gravity,
            world.len(),
        );

        Ok(Rope {
            vertices,
            constraints,
            rng: Pcg32::seed_from_u64(config.jitter_seed),
            config,
            world,
        })
    }

    /// Build a replacement rope from `config` against the same world.
    ///
    /// The pinned-down state of the last vertex carries over; everything
    /// else starts fresh at `config.spawn`.
    pub fn rebuild(&self, config: RopeConfig<F>) -> Result<Rope<'w, F>, PhysicsError> {
        let mut rope = Rope::new(config, self.world)?;
        if self.is_pinned_down() {
            rope.set_pinned_down_state(true);
        }
        Ok(rope)
    }

    /// Advance one tick with vertex 0 held at `anchor`.
    pub fn update(&mut self, anchor: Vector2<F>) {
        self.update_with_observer(anchor, &mut NoOpTickObserver);
    }

    pub fn update_with_observer<O: TickObserver>(&mut self, anchor: Vector2<F>, observer: &mut O) {
        if let Some(head) = self.vertices.first_mut() {
            head.move_to(anchor);
        }
        observer.on_anchor();

        let gravity = self.config.gravity;
        let damping = self.config.damping;
        for v in self.vertices.iter_mut().skip(1) {
            v.integrate(gravity, damping);
        }
        observer.on_integrate();

        for i in 0..self.config.iterations {
            self.resolve_collisions(observer);

            for (ci, c) in self.constraints.iter().enumerate() {
                if c.solve(&mut self.vertices, &mut self.rng) == Relaxation::Jittered {
                    log::trace!("constraint {} had coincident endpoints, jittered", ci);
                    observer.on_jitter(ci);
                }
            }
            observer.on_relaxation_pass(i);
        }

        if let (Some(head), Some(tail)) = (self.vertices.first(), self.vertices.last()) {
            log::trace!(
                "tick done: head ({}, {}), tail ({}, {}), {} passes",
                head.pos.x,
                head.pos.y,
                tail.pos.x,
                tail.pos.y,
                self.config.iterations,
            );
        }
        observer.on_tick_complete();
    }

    fn resolve_collisions<O: TickObserver>(&mut self, observer: &mut O) {
        let world = self.world;
        if world.is_empty() {
            return;
        }
        for i in 0..self.vertices.len() {
            if is_anchored(&self.vertices, i) {
                continue;
            }
            for (ci, collider) in world.colliders().iter().enumerate() {
                let pos = self.vertices[i].pos;
                if collider.contains(pos) {
                    self.vertices[i].pos = collider.closest_surface_point(pos);
                    observer.on_collision(i, ci);
                }
            }
        }
    }

    pub fn set_gravity(&mut self, gravity: F) -> Result<(), PhysicsError> {
        config::validate_gravity(gravity)?;
        log::debug!("gravity {} -> {}", self.config.gravity, gravity);
        self.config.gravity = gravity;
        Ok(())
    }

    /// Set the number of relaxation passes per tick. More passes make the
    /// rope stiffer.
    pub fn set_stiffness(&mut self, iterations: usize) -> Result<(), PhysicsError> {
        config::validate_iterations(iterations)?;
        log::debug!("iterations {} -> {}", self.config.iterations, iterations);
        self.config.iterations = iterations;
        Ok(())
    }

    pub fn set_damping(&mut self, damping: F) -> Result<(), PhysicsError> {
        config::validate_damping(damping)?;
        log::debug!("damping {} -> {}", self.config.damping, damping);
        self.config.damping = damping;
        Ok(())
    }

    /// Pin or release the free end of the rope where it currently is.
    ///
    /// On a single-vertex rope the last vertex is also vertex 0, which keeps
    /// following the anchor regardless.
    pub fn set_pinned_down_state(&mut self, pinned: bool) {
        let Some(tail) = self.vertices.last_mut() else {
            return;
        };
        if tail.pinned == pinned {
            return;
        }
        if pinned {
            tail.pin();
        } else {
            tail.unpin();
        }
        log::debug!("tail pinned: {}", pinned);
    }

    pub fn is_pinned_down(&self) -> bool {
        self.vertices.last().is_some_and(|v| v.pinned)
    }

    /// Emit every link, then every vertex.
    pub fn draw<S: RenderSink<F>>(&self, sink: &mut S) {
        for (a, b) in self.links() {
            sink.draw_link(a, b);
        }
        for v in &self.vertices {
            sink.draw_vertex(v.pos);
        }
    }

    pub fn positions(&self) -> AllocVec<Vector2<F>> {
        self.vertices.iter().map(|v| v.pos).collect()
    }

    /// Endpoint positions of every constraint, in creation order.
    pub fn links(&self) -> impl Iterator<Item = (Vector2<F>, Vector2<F>)> + '_ {
        let vertices = &self.vertices;
        self.constraints
            .iter()
            .map(move |c| (vertices[c.a].pos, vertices[c.b].pos))
    }

    pub fn vertices(&self) -> &[Vertex<F>] {
        &self.vertices
    }

    pub fn constraints(&self) -> &[Constraint<F>] {
        &self.constraints
    }

    pub fn vertex(&self, index: usize) -> Option<&Vertex<F>> {
        self.vertices.get(index)
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn segment_count(&self) -> usize {
        self.constraints.len()
    }

    pub fn config(&self) -> &RopeConfig<F> {
        &self.config
    }

    pub fn world(&self) -> &'w World<F> {
        self.world
    }
}

/// A pinned vertex whose neighbours along the chain are all pinned too is
/// held entirely in place and skips collision projection.
fn is_anchored<F: Float>(vertices: &[Vertex<F>], i: usize) -> bool {
    let prev_pinned = i == 0 || vertices[i - 1].pinned;
    let next_pinned = i + 1 >= vertices.len() || vertices[i + 1].pinned;
    vertices[i].pinned && prev_pinned && next_pinned
}
