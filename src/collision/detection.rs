//! Pairwise dispatch over [`Shape`].
//!
//! Each ordered pair of shapes has one authoritative implementation and the
//! reverse order is answered by swapping the operands and negating the result.
//! Across kinds the authoritative orders are segment/circle, segment/polygon
//! and polygon/circle. Within a kind the operand that sorts first (by center,
//! then vertices, then radius) is authoritative, so both orders share one
//! computation.

use std::cmp::Ordering;

use log::trace;

use super::manifold::Collision;
use crate::math::Vec2;
use crate::shapes::Shape;

fn cmp_points(p: Vec2, q: Vec2) -> Ordering {
    p.x.total_cmp(&q.x).then_with(|| p.y.total_cmp(&q.y))
}

/// Total order on shapes of one kind: center, then vertices, then radius.
fn geometry_order(a: &Shape, b: &Shape) -> Ordering {
    cmp_points(a.center(), b.center())
        .then_with(|| {
            a.points()
                .iter()
                .zip(b.points())
                .map(|(&p, &q)| cmp_points(p, q))
                .find(|o| o.is_ne())
                .unwrap_or(Ordering::Equal)
        })
        .then_with(|| a.point_count().cmp(&b.point_count()))
        .then_with(|| {
            let ra = a.radius().unwrap_or(0.0);
            let rb = b.radius().unwrap_or(0.0);
            ra.total_cmp(&rb)
        })
}

fn is_authoritative(a: &Shape, b: &Shape) -> bool {
    match (a, b) {
        (Shape::Circle(_), Shape::Segment(_))
        | (Shape::Circle(_), Shape::Polygon(_))
        | (Shape::Polygon(_), Shape::Segment(_)) => false,
        (Shape::Circle(_), Shape::Circle(_))
        | (Shape::Segment(_), Shape::Segment(_))
        | (Shape::Polygon(_), Shape::Polygon(_)) => geometry_order(a, b) != Ordering::Greater,
        _ => true,
    }
}

/// Whether `a` fully encloses `b`.
pub fn contains(a: &Shape, b: &Shape) -> bool {
    match (a, b) {
        (Shape::Circle(x), Shape::Circle(y)) => x.contains_circle(y),
        (Shape::Circle(x), Shape::Segment(y)) => x.contains_segment(y),
        (Shape::Circle(x), Shape::Polygon(y)) => x.contains_polygon(y),
        (Shape::Segment(x), Shape::Circle(y)) => x.contains_circle(y),
        (Shape::Segment(x), Shape::Segment(y)) => x.contains_segment(y),
        (Shape::Segment(x), Shape::Polygon(y)) => x.contains_polygon(y),
        (Shape::Polygon(x), Shape::Circle(y)) => x.contains_circle(y),
        (Shape::Polygon(x), Shape::Segment(y)) => x.contains_segment(y),
        (Shape::Polygon(x), Shape::Polygon(y)) => x.contains_polygon(y),
    }
}

/// Whether `b` fully encloses `a`.
pub fn is_inside(a: &Shape, b: &Shape) -> bool {
    contains(b, a)
}

pub fn overlaps(a: &Shape, b: &Shape) -> bool {
    if !is_authoritative(a, b) {
        return overlaps(b, a);
    }
    match (a, b) {
        (Shape::Circle(x), Shape::Circle(y)) => x.overlaps_circle(y),
        (Shape::Segment(x), Shape::Segment(y)) => x.overlaps_segment(y),
        (Shape::Polygon(x), Shape::Polygon(y)) => x.overlaps_polygon(y),
        (Shape::Segment(x), Shape::Circle(y)) => x.overlaps_circle(y),
        (Shape::Segment(x), Shape::Polygon(y)) => x.overlaps_polygon(y),
        (Shape::Polygon(x), Shape::Circle(y)) => x.overlaps_circle(y),
        (Shape::Circle(x), Shape::Segment(y)) => y.overlaps_circle(x),
        (Shape::Circle(x), Shape::Polygon(y)) => y.overlaps_circle(x),
        (Shape::Polygon(x), Shape::Segment(y)) => y.overlaps_polygon(x),
    }
}

/// Boundary crossings, without duplicates. The set does not depend on the order.
pub fn intersects(a: &Shape, b: &Shape) -> Vec<Vec2> {
    if !is_authoritative(a, b) {
        return intersects(b, a);
    }
    match (a, b) {
        (Shape::Circle(x), Shape::Circle(y)) => x.intersects_circle(y),
        (Shape::Segment(x), Shape::Segment(y)) => x.intersects_segment(y),
        (Shape::Polygon(x), Shape::Polygon(y)) => x.intersects_polygon(y),
        (Shape::Segment(x), Shape::Circle(y)) => x.intersects_circle(y),
        (Shape::Segment(x), Shape::Polygon(y)) => x.intersects_polygon(y),
        (Shape::Polygon(x), Shape::Circle(y)) => x.intersects_circle(y),
        (Shape::Circle(x), Shape::Segment(y)) => y.intersects_circle(x),
        (Shape::Circle(x), Shape::Polygon(y)) => y.intersects_circle(x),
        (Shape::Polygon(x), Shape::Segment(y)) => y.intersects_polygon(x),
    }
}

/// Minimum translation for `b` away from `a`, `None` when they are apart.
pub fn mtv(a: &Shape, b: &Shape) -> Option<Vec2> {
    if !is_authoritative(a, b) {
        return mtv(b, a).map(|d| -d);
    }
    match (a, b) {
        (Shape::Circle(x), Shape::Circle(y)) => x.mtv_circle(y),
        (Shape::Segment(x), Shape::Segment(y)) => x.mtv_segment(y),
        (Shape::Polygon(x), Shape::Polygon(y)) => x.mtv_polygon(y),
        (Shape::Segment(x), Shape::Circle(y)) => x.mtv_circle(y),
        (Shape::Segment(x), Shape::Polygon(y)) => x.mtv_polygon(y),
        (Shape::Polygon(x), Shape::Circle(y)) => x.mtv_circle(y),
        (Shape::Circle(x), Shape::Segment(y)) => y.mtv_circle(x).map(|d| -d),
        (Shape::Circle(x), Shape::Polygon(y)) => y.mtv_circle(x).map(|d| -d),
        (Shape::Polygon(x), Shape::Segment(y)) => y.mtv_polygon(x).map(|d| -d),
    }
}

/// Vector to add to `b` to separate it from `a`; zero when they are apart.
pub fn displacement(a: &Shape, b: &Shape) -> Vec2 {
    mtv(a, b).unwrap_or(Vec2::ZERO)
}

/// Runs every pair query at once.
///
/// Disjoint bounding boxes short-circuit to [`Collision::default`].
pub fn collide(a: &Shape, b: &Shape) -> Collision {
    if !is_authoritative(a, b) {
        return -collide(b, a);
    }
    trace!("collide {} with {}", a.kind(), b.kind());

    if !a.bounds().overlaps(&b.bounds()) {
        trace!("bounding boxes apart");
        return Collision::default();
    }
    match mtv(a, b) {
        Some(displacement) => Collision::new(
            true,
            intersects(a, b),
            contains(a, b),
            contains(b, a),
            displacement,
        ),
        None => Collision::default(),
    }
}
