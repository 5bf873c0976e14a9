use criterion::{black_box, criterion_group, criterion_main, Criterion};
use quadtree::bounds::Bounds;
use quadtree::object::{handle, MovingRect, ObjectHandle};
use quadtree::quadtree::{Config, QuadTree};
use rand::prelude::*;
use std::time::Duration;

const WORLD: Bounds = Bounds {
    x: 0.0,
    y: 0.0,
    width: 1000.0,
    height: 1000.0,
};

fn random_rect<R: Rng>(rng: &mut R, vx: f32, vy: f32) -> ObjectHandle {
    let width = rng.gen_range(1.0..10.0);
    let height = rng.gen_range(1.0..10.0);
    handle(MovingRect::with_velocity(
        rng.gen_range(0.0..(WORLD.width - width)),
        rng.gen_range(0.0..(WORLD.height - height)),
        width,
        height,
        vx,
        vy,
    ))
}

fn populated_tree(count: usize, moving: bool) -> QuadTree {
    let mut rng = rand::thread_rng();
    let mut tree = QuadTree::new(WORLD, Config::default()).unwrap();
    for _ in 0..count {
        let (vx, vy) = if moving {
            (rng.gen_range(-5.0..5.0), rng.gen_range(-5.0..5.0))
        } else {
            (0.0, 0.0)
        };
        tree.insert(random_rect(&mut rng, vx, vy));
    }
    tree
}

fn insert_benchmark(c: &mut Criterion) {
    let mut rng = rand::thread_rng();
    let mut tree = QuadTree::new(WORLD, Config::default()).unwrap();

    c.bench_function("quadtree_insert", |b| {
        b.iter(|| {
            tree.insert(black_box(random_rect(&mut rng, 0.0, 0.0)));
        })
    });
}

fn update_benchmark(c: &mut Criterion) {
    let mut tree = populated_tree(1000, true);
    tree.build();

    c.bench_function("quadtree_update", |b| {
        b.iter(|| {
            tree.update(black_box(Duration::from_millis(16)));
        })
    });
}

fn intersections_benchmark(c: &mut Criterion) {
    let mut tree = populated_tree(1000, false);
    tree.build();

    c.bench_function("quadtree_intersections", |b| {
        b.iter(|| {
            black_box(tree.intersections());
        })
    });
}

fn intersected_objects_benchmark(c: &mut Criterion) {
    let mut rng = rand::thread_rng();
    let mut tree = populated_tree(1000, false);
    let target = random_rect(&mut rng, 0.0, 0.0);
    tree.insert(target.clone());
    tree.build();

    c.bench_function("quadtree_intersected_objects", |b| {
        b.iter(|| {
            black_box(tree.intersected_objects(black_box(&target)));
        })
    });
}

criterion_group!(
    benches,
    insert_benchmark,
    update_benchmark,
    intersections_benchmark,
    intersected_objects_benchmark
);
criterion_main!(benches);
