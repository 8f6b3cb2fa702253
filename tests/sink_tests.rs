use tether::{Collider, RenderSink, Rope, RopeConfig, Vector2, World};

#[derive(Debug, PartialEq)]
enum Cmd {
    Link(Vector2<f32>, Vector2<f32>),
    Vertex(Vector2<f32>),
    Collider,
}

#[derive(Default)]
struct Recorder {
    cmds: Vec<Cmd>,
}

impl RenderSink<f32> for Recorder {
    fn draw_link(&mut self, a: Vector2<f32>, b: Vector2<f32>) {
        self.cmds.push(Cmd::Link(a, b));
    }

    fn draw_vertex(&mut self, position: Vector2<f32>) {
        self.cmds.push(Cmd::Vertex(position));
    }

    fn draw_collider(&mut self, _collider: &Collider<f32>) {
        self.cmds.push(Cmd::Collider);
    }
}

#[test]
fn links_are_drawn_before_vertices() {
    let world = World::new();
    let mut rope = Rope::new(RopeConfig::new().with_segments(4), &world).unwrap();
    for _ in 0..10 {
        rope.update(Vector2::new(100.0, 100.0));
    }

    let mut sink = Recorder::default();
    rope.draw(&mut sink);

    assert_eq!(sink.cmds.len(), 3 + 4);
    assert!(sink.cmds[..3].iter().all(|c| matches!(c, Cmd::Link(..))));
    assert!(sink.cmds[3..].iter().all(|c| matches!(c, Cmd::Vertex(_))));

    let v = rope.vertices();
    assert_eq!(sink.cmds[0], Cmd::Link(v[0].pos, v[1].pos));
    assert_eq!(sink.cmds[2], Cmd::Link(v[2].pos, v[3].pos));
    assert_eq!(sink.cmds[6], Cmd::Vertex(v[3].pos));
}

#[test]
fn world_draws_each_collider() {
    let world = World::new()
        .with_collider(Collider::circle(Vector2::new(0.0, 0.0), 1.0).unwrap())
        .with_collider(Collider::aabb(Vector2::new(5.0, 0.0), 1.0, 2.0).unwrap());
    let mut sink = Recorder::default();
    world.draw(&mut sink);
    assert_eq!(sink.cmds, vec![Cmd::Collider, Cmd::Collider]);
}
