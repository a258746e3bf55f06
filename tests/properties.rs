use std::f64::consts::TAU;

use collide2d::{Shape, Vec2};
use proptest::prelude::*;

prop_compose! {
    fn arb_circle()(
        x in -100.0..100.0f64,
        y in -100.0..100.0f64,
        r in 1.0..60.0f64,
    ) -> Shape {
        Shape::circle(Vec2::new(x, y), r).unwrap()
    }
}

prop_compose! {
    fn arb_segment()(
        x in -100.0..100.0f64,
        y in -100.0..100.0f64,
        angle in 0.0..TAU,
        length in 1.0..100.0f64,
    ) -> Shape {
        let start = Vec2::new(x, y);
        let end = start + Vec2::new(angle.cos(), angle.sin()) * length;
        Shape::segment(start, end).unwrap()
    }
}

prop_compose! {
    fn arb_polygon()(
        x in -100.0..100.0f64,
        y in -100.0..100.0f64,
        radius in 5.0..60.0f64,
        sides in 3usize..8,
        rotation in 0.0..TAU,
    ) -> Shape {
        let center = Vec2::new(x, y);
        let points = (0..sides)
            .map(|k| {
                let angle = rotation + k as f64 * TAU / sides as f64;
                center + Vec2::new(angle.cos(), angle.sin()) * radius
            })
            .collect();
        Shape::polygon(points).unwrap()
    }
}

fn arb_shape() -> impl Strategy<Value = Shape> {
    prop_oneof![arb_circle(), arb_segment(), arb_polygon()]
}

/// The six ordered pairs of different kinds.
fn arb_mixed_pair() -> impl Strategy<Value = (Shape, Shape)> {
    prop_oneof![
        (arb_circle(), arb_segment()),
        (arb_circle(), arb_polygon()),
        (arb_segment(), arb_circle()),
        (arb_segment(), arb_polygon()),
        (arb_polygon(), arb_circle()),
        (arb_polygon(), arb_segment()),
    ]
}

fn arb_same_kind_pair() -> impl Strategy<Value = (Shape, Shape)> {
    prop_oneof![
        (arb_circle(), arb_circle()),
        (arb_segment(), arb_segment()),
        (arb_polygon(), arb_polygon()),
    ]
}

proptest! {
    /// Overlap does not depend on argument order.
    #[test]
    fn overlap_is_symmetric(a in arb_shape(), b in arb_shape()) {
        prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
    }

    /// Swapping the operands of a mixed pair negates the collision record.
    #[test]
    fn mixed_pairs_negate((a, b) in arb_mixed_pair()) {
        prop_assert_eq!(a.collision(&b), -b.collision(&a));
        prop_assert_eq!(a.displacement(&b), -b.displacement(&a));
    }

    /// Same-kind pairs obey the same law, whatever order they are asked in.
    #[test]
    fn same_kind_pairs_negate((a, b) in arb_same_kind_pair(), dx in -40.0..40.0f64, dy in -40.0..40.0f64) {
        // Pull B next to A so the displacement is usually non-zero.
        let b = b.translated(a.center() - b.center() + Vec2::new(dx, dy)).unwrap();
        prop_assert_eq!(a.collision(&b), -b.collision(&a));
        prop_assert_eq!(a.displacement(&b), -b.displacement(&a));
        prop_assert_eq!(a.intersects(&b), b.intersects(&a));
    }

    /// Boundary crossings are only reported for overlapping shapes.
    #[test]
    fn intersections_imply_overlap(a in arb_shape(), b in arb_shape()) {
        if !a.intersects(&b).is_empty() {
            prop_assert!(a.overlaps(&b));
        }
    }

    /// Moving B by the displacement leaves the shapes apart.
    #[test]
    fn displacement_separates(
        a in arb_shape(),
        b in arb_shape(),
        dx in -40.0..40.0f64,
        dy in -40.0..40.0f64,
    ) {
        // Pull B next to A so most cases actually overlap.
        let b = b.translated(a.center() - b.center() + Vec2::new(dx, dy)).unwrap();
        if !a.overlaps(&b) {
            return Ok(());
        }
        let d = a.displacement(&b);
        let moved = b.translated(d).unwrap();
        prop_assert!(!a.overlaps(&moved), "{:?} still overlaps {:?} after {:?}", a, moved, d);
    }

    /// The displacement is zero exactly when the shapes are apart.
    #[test]
    fn zero_displacement_iff_apart(a in arb_shape(), b in arb_shape()) {
        let d = a.displacement(&b);
        prop_assert_eq!(d == Vec2::ZERO, !a.overlaps(&b));
        prop_assert_eq!(a.collision(&b).overlaps(), a.overlaps(&b));
    }

    /// is_inside mirrors contains.
    #[test]
    fn is_inside_mirrors_contains(a in arb_shape(), b in arb_shape()) {
        prop_assert_eq!(a.is_inside(&b), b.contains(&a));
    }

    /// A shape that contains another also overlaps it.
    #[test]
    fn containment_implies_overlap(a in arb_shape(), b in arb_shape(), scale in 0.05..0.5f64) {
        // Shrink B onto A's center so containment comes up.
        let mut b = b.translated(a.center() - b.center()).unwrap();
        b.scale(scale).unwrap();
        if a.contains(&b) {
            prop_assert!(a.overlaps(&b));
            prop_assert!(b.is_inside(&a));
        }
    }

    /// Rotating a full turn in steps returns the vertices to where they started.
    #[test]
    fn full_turn_restores_points(shape in arb_shape(), steps in 1usize..8) {
        let mut turned = shape.clone();
        for _ in 0..steps {
            turned.rotate(360.0 / steps as f64).unwrap();
        }
        for (p, q) in shape.points().iter().zip(turned.points()) {
            prop_assert!(p.approx_eq(*q, 1e-6), "{:?} vs {:?}", p, q);
        }
    }
}
