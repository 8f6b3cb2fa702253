//! Benchmarks for tether rope simulation.

use criterion::{criterion_group, criterion_main, Criterion};
use tether::*;

fn bench_free_rope(c: &mut Criterion) {
    c.bench_function("rope_50_segments_60_ticks", |b| {
        let world = World::new();
        b.iter(|| {
            let config = RopeConfig::<f32>::new().with_segments(50).with_iterations(10);
            let mut rope = Rope::new(config, &world).unwrap();
            for i in 0..60 {
                rope.update(Vector2::new(100.0 + i as f32, 100.0));
            }
            rope.positions()
        });
    });
}

fn bench_rope_with_colliders(c: &mut Criterion) {
    c.bench_function("rope_50_segments_8_colliders_60_ticks", |b| {
        let world: World<f32> = (0..8)
            .map(|i| {
                let x = 40.0 + 30.0 * i as f32;
                if i % 2 == 0 {
                    Collider::circle(Vector2::new(x, 180.0), 12.0).unwrap()
                } else {
                    Collider::aabb(Vector2::new(x, 200.0), 10.0, 6.0).unwrap()
                }
            })
            .collect();
        b.iter(|| {
            let config = RopeConfig::new().with_segments(50).with_iterations(10);
            let mut rope = Rope::new(config, &world).unwrap();
            for i in 0..60 {
                rope.update(Vector2::new(60.0 + 2.0 * i as f32, 100.0));
            }
            rope.positions()
        });
    });
}

fn bench_stiff_rope(c: &mut Criterion) {
    c.bench_function("rope_20_segments_100_iterations_60_ticks", |b| {
        let world = World::new();
        b.iter(|| {
            let config = RopeConfig::<f32>::new().with_iterations(100);
            let mut rope = Rope::new(config, &world).unwrap();
            for _ in 0..60 {
                rope.update(Vector2::new(100.0, 100.0));
            }
            rope.max_stretch()
        });
    });
}

criterion_group!(benches, bench_free_rope, bench_rope_with_colliders, bench_stiff_rope);
criterion_main!(benches);
