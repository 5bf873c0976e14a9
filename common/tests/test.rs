use common::bounds::{distance, intersect, Bounds};
use common::object::{bounds_of, MovingRect, PhysicalObject};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

#[test]
fn test_accessors() {
    let bounds = Bounds::new(1.0, 2.0, 3.0, 4.0);
    assert_eq!(bounds.left(), 1.0);
    assert_eq!(bounds.right(), 4.0);
    assert_eq!(bounds.top(), 2.0);
    assert_eq!(bounds.bottom(), 6.0);
}

#[test]
fn test_contains_border_counts() {
    let bounds = Bounds::new(0.0, 0.0, 2.0, 2.0);
    assert!(bounds.contains(&MovingRect::new(0.0, 0.0, 1.0, 1.0)));
    assert!(bounds.contains(&MovingRect::new(1.0, 1.0, 1.0, 1.0)));
    assert!(bounds.contains(&MovingRect::new(0.0, 0.0, 2.0, 2.0)));
    assert!(!bounds.contains(&MovingRect::new(1.5, 0.0, 1.0, 1.0)));
    assert!(!bounds.contains(&MovingRect::new(-0.5, 0.0, 1.0, 1.0)));
}

#[test]
fn test_quadrant_split() {
    let bounds = Bounds::new(1.0, 1.0, 4.0, 2.0);
    assert_eq!(bounds.quadrant(0), Bounds::new(1.0, 1.0, 2.0, 1.0));
    assert_eq!(bounds.quadrant(1), Bounds::new(3.0, 1.0, 2.0, 1.0));
    assert_eq!(bounds.quadrant(2), Bounds::new(1.0, 2.0, 2.0, 1.0));
    assert_eq!(bounds.quadrant(3), Bounds::new(3.0, 2.0, 2.0, 1.0));
}

#[test]
fn test_touching_edges_do_not_intersect() {
    let one = MovingRect::new(0.0, 0.0, 1.0, 1.0);
    let right = MovingRect::new(1.0, 0.0, 1.0, 1.0);
    let below = MovingRect::new(0.0, 1.0, 1.0, 1.0);
    let corner = MovingRect::new(1.0, 1.0, 1.0, 1.0);
    assert!(!intersect(&one, &right));
    assert!(!intersect(&one, &below));
    assert!(!intersect(&one, &corner));
}

#[test]
fn test_overlapping_boxes_intersect() {
    let one = MovingRect::new(0.0, 0.0, 2.0, 2.0);
    let another = MovingRect::new(1.0, 1.0, 2.0, 2.0);
    assert!(intersect(&one, &another));
    assert!(intersect(&another, &one));
}

#[test]
fn test_coincident_axis_short_circuit() {
    // same x: only the vertical axis decides
    let one = MovingRect::new(0.0, 0.0, 1.0, 2.0);
    let tall = MovingRect::new(0.0, 1.0, 5.0, 2.0);
    assert!(intersect(&one, &tall));
    let far = MovingRect::new(0.0, 3.0, 5.0, 2.0);
    assert!(!intersect(&one, &far));

    // same y: only the horizontal axis decides
    let wide = MovingRect::new(0.5, 0.0, 1.0, 9.0);
    assert!(intersect(&one, &wide));
}

#[test]
fn test_distance() {
    let origin = MovingRect::new(0.0, 0.0, 1.0, 1.0);
    assert_eq!(distance(&origin, &MovingRect::new(0.0, 5.0, 1.0, 1.0)), 5.0);
    assert_eq!(distance(&origin, &MovingRect::new(3.0, 0.0, 1.0, 1.0)), 3.0);
    assert_eq!(distance(&origin, &MovingRect::new(3.0, 4.0, 1.0, 1.0)), 5.0);
}

#[test]
fn test_intersect_is_symmetric() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..200 {
        let one = MovingRect::new(
            rng.gen_range(0.0..10.0),
            rng.gen_range(0.0..10.0),
            rng.gen_range(0.0..4.0),
            rng.gen_range(0.0..4.0),
        );
        let another = MovingRect::new(
            rng.gen_range(0.0..10.0),
            rng.gen_range(0.0..10.0),
            rng.gen_range(0.0..4.0),
            rng.gen_range(0.0..4.0),
        );
        assert_eq!(intersect(&one, &another), intersect(&another, &one));
    }
}

#[test]
fn test_moving_rect_update() {
    let mut rect = MovingRect::with_velocity(0.0, 0.0, 1.0, 1.0, 2.0, -1.0);
    assert!(rect.update(Duration::from_secs(1)));
    assert_eq!(bounds_of(&rect), Bounds::new(2.0, -1.0, 1.0, 1.0));

    let mut still = MovingRect::new(0.0, 0.0, 1.0, 1.0);
    assert!(!still.update(Duration::from_secs(1)));
}
