//! Drives a rope with a scripted pointer over a few obstacles and logs what a
//! renderer would draw.
//!
//! ```sh
//! RUST_LOG=debug cargo run --example headless
//! ```

use tether::{
    Aabb, Circle, Collider, RenderSink, Rope, RopeConfig, TickStats, Vector2, World,
};

/// Length of the scripted run, at one tick per frame.
const TICKS: usize = 600;

/// Stand-in for a graphics backend: counts draw calls and logs the last frame.
#[derive(Default)]
struct LogSink {
    links: usize,
    vertices: usize,
    colliders: usize,
}

impl RenderSink<f32> for LogSink {
    fn draw_link(&mut self, a: Vector2<f32>, b: Vector2<f32>) {
        self.links += 1;
        log::trace!("link ({:.1}, {:.1}) -> ({:.1}, {:.1})", a.x, a.y, b.x, b.y);
    }

    fn draw_vertex(&mut self, position: Vector2<f32>) {
        self.vertices += 1;
        log::trace!("vertex ({:.1}, {:.1})", position.x, position.y);
    }

    fn draw_collider(&mut self, collider: &Collider<f32>) {
        self.colliders += 1;
        log::trace!("collider at {:?}", collider.center());
    }
}

/// Pointer that sweeps above the obstacles. Holding it down pins the tail.
fn pointer(tick: usize) -> (Vector2<f32>, bool) {
    let t = tick as f32 / 60.0;
    (Vector2::new(200.0 + 120.0 * (t * 0.8).sin(), 80.0), tick > TICKS / 2)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let world = World::new()
        .with_collider(Circle::new(Vector2::new(160.0, 220.0), 40.0)?)
        .with_collider(Aabb::from_size(Vector2::new(280.0, 240.0), Vector2::new(80.0, 30.0))?);

    let mut rope = Rope::new(RopeConfig::new().with_spawn(Vector2::new(200.0, 80.0)), &world)?;
    let mut stats = TickStats::default();

    for tick in 0..TICKS {
        let (position, pressed) = pointer(tick);
        if pressed != rope.is_pinned_down() {
            rope.set_pinned_down_state(pressed);
        }
        rope.update_with_observer(position, &mut stats);

        if tick % 120 == 0 {
            log::info!(
                "tick {:>4}: length {:.2}, stretch [{:.3}, {:.3}]",
                tick,
                rope.total_length(),
                rope.min_stretch(),
                rope.max_stretch(),
            );
        }
    }

    // A UI slider moving the segment count would swap in a rebuilt rope.
    let config = rope.config().clone().with_segments(30).with_segment_length(3.0);
    rope = rope.rebuild(config)?;
    rope.set_stiffness(25)?;
    for tick in 0..120 {
        rope.update_with_observer(pointer(tick).0, &mut stats);
    }

    let mut sink = LogSink::default();
    world.draw(&mut sink);
    rope.draw(&mut sink);

    log::info!(
        "{} ticks, {} relaxation passes, {} collisions, {} jitters",
        stats.ticks,
        stats.relaxation_passes,
        stats.collisions,
        stats.jitters,
    );
    log::info!(
        "last frame: {} links, {} vertices, {} colliders",
        sink.links,
        sink.vertices,
        sink.colliders,
    );
    Ok(())
}
