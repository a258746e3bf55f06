pub mod projection;
pub mod transform;
pub mod vec2;

pub use projection::Projection;
pub use transform::Transformation;
pub use vec2::{Axis, Vec2};

/// General tolerance for collinearity, parallelism, tangency and point equality.
pub const EPSILON: f64 = 1e-9;

/// Components smaller than this make a segment count as vertical or horizontal.
pub const AXIS_ALIGNED_EPSILON: f64 = 1e-12;

/// Extra distance added to every non-zero displacement, so that moving a shape
/// by its displacement leaves it strictly apart from the other one.
pub const SEPARATION_MARGIN: f64 = 1.0;

/// Equality of two scalars within [`EPSILON`]. Equal infinities compare equal.
pub fn approx_eq(a: f64, b: f64) -> bool {
    a == b || (a - b).abs() <= EPSILON
}

/// Removes points that lie within [`EPSILON`] of an earlier point, keeping order.
pub(crate) fn dedup_points(points: &mut Vec<Vec2>) {
    let mut unique: Vec<Vec2> = Vec::with_capacity(points.len());
    for p in points.drain(..) {
        if !unique.iter().any(|u| u.distance_squared(p) <= EPSILON) {
            unique.push(p);
        }
    }
    *points = unique;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approx_eq() {
        assert!(approx_eq(1.0, 1.0 + 1e-12));
        assert!(!approx_eq(1.0, 1.001));
        assert!(approx_eq(f64::INFINITY, f64::INFINITY));
        assert!(!approx_eq(f64::INFINITY, 1.0));
    }

    #[test]
    fn test_dedup_points() {
        let mut points = vec![
            Vec2::new(50.0, 0.0),
            Vec2::new(-50.0, 0.0),
            Vec2::new(50.0 + 1e-12, 0.0),
            Vec2::new(0.0, 50.0),
            Vec2::new(-50.0, 1e-13),
        ];
        dedup_points(&mut points);
        assert_eq!(
            points,
            vec![Vec2::new(50.0, 0.0), Vec2::new(-50.0, 0.0), Vec2::new(0.0, 50.0)]
        );
    }
}
