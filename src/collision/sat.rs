use log::trace;

use crate::math::{Axis, Projection, Vec2, SEPARATION_MARGIN};

/// Anything that casts a shadow on an axis.
pub trait Project {
    fn project(&self, axis: Axis) -> Projection;
}

/// Finds the minimum translation that moves `moving` clear of `fixed`.
///
/// Both shapes are projected on every candidate axis. If any axis separates
/// them the shapes are apart and `None` is returned. Otherwise the axis with
/// the smallest absolute overlap wins (the first one on a tie), and the result
/// is that axis scaled by the signed overlap plus [`SEPARATION_MARGIN`]. The
/// sign comes straight from [`Projection::overlap`].
///
/// Axes must be unit length.
pub fn calc_displacement<A, B>(axes: &[Axis], fixed: &A, moving: &B) -> Option<Vec2>
where
    A: Project + ?Sized,
    B: Project + ?Sized,
{
    let mut best: Option<(Axis, f64)> = None;

    for &axis in axes {
        let fixed_proj = fixed.project(axis);
        let moving_proj = moving.project(axis);

        if !moving_proj.overlaps(&fixed_proj) {
            trace!(
                "separating axis {:?}: {:?} vs {:?}",
                axis,
                fixed_proj,
                moving_proj
            );
            return None;
        }

        let overlap = moving_proj.overlap(&fixed_proj);
        match best {
            Some((_, min)) if overlap.abs() >= min.abs() => {}
            _ => best = Some((axis, overlap)),
        }
    }

    let (axis, overlap) = best?;
    trace!("minimum overlap {} on axis {:?}", overlap, axis);
    // copysign keeps the direction of a zero overlap from touching shapes.
    Some(axis * (overlap + SEPARATION_MARGIN.copysign(overlap)))
}

/// Like [`calc_displacement`], with the zero vector for shapes that are apart.
pub fn displacement<A, B>(axes: &[Axis], fixed: &A, moving: &B) -> Vec2
where
    A: Project + ?Sized,
    B: Project + ?Sized,
{
    calc_displacement(axes, fixed, moving).unwrap_or(Vec2::ZERO)
}

/// True when no candidate axis separates the shapes.
pub fn sat_overlaps<A, B>(axes: &[Axis], a: &A, b: &B) -> bool
where
    A: Project + ?Sized,
    B: Project + ?Sized,
{
    !axes.is_empty()
        && axes
            .iter()
            .all(|&axis| a.project(axis).overlaps(&b.project(axis)))
}

#[cfg(test)]
mod tests {
    use super::*;
    const EPSILON: f64 = 1e-9;

    /// An axis-aligned box, enough to drive the engine without real shapes.
    struct Rect {
        min: Vec2,
        max: Vec2,
    }

    impl Project for Rect {
        fn project(&self, axis: Axis) -> Projection {
            let corners = [
                self.min,
                Vec2::new(self.max.x, self.min.y),
                self.max,
                Vec2::new(self.min.x, self.max.y),
            ];
            let dots = corners.map(|c| c.dot(axis));
            Projection::new(
                dots.iter().copied().fold(f64::INFINITY, f64::min),
                dots.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            )
        }
    }

    fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> Rect {
        Rect {
            min: Vec2::new(x0, y0),
            max: Vec2::new(x1, y1),
        }
    }

    const AXES: [Axis; 2] = [Vec2::X, Vec2::Y];

    #[test]
    fn test_calc_displacement_separated() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        let b = rect(20.0, 0.0, 30.0, 10.0);
        assert!(calc_displacement(&AXES, &a, &b).is_none());
        assert_eq!(displacement(&AXES, &a, &b), Vec2::ZERO);
        assert!(!sat_overlaps(&AXES, &a, &b));
    }

    #[test]
    fn test_calc_displacement_picks_minimum_axis() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        // 2 deep along x, 8 deep along y.
        let b = rect(8.0, 2.0, 18.0, 12.0);
        let d = calc_displacement(&AXES, &a, &b).unwrap();
        assert!(d.approx_eq(Vec2::new(3.0, 0.0), EPSILON));
        assert!(sat_overlaps(&AXES, &a, &b));
    }

    #[test]
    fn test_calc_displacement_sign_follows_side() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        let b = rect(-8.0, 1.0, 2.0, 9.0);
        let d = calc_displacement(&AXES, &a, &b).unwrap();
        assert!(d.approx_eq(Vec2::new(-3.0, 0.0), EPSILON));
    }

    #[test]
    fn test_calc_displacement_touching_gets_margin() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        let b = rect(10.0, 0.0, 20.0, 10.0);
        let d = calc_displacement(&AXES, &a, &b).unwrap();
        assert!(d.approx_eq(Vec2::new(SEPARATION_MARGIN, 0.0), EPSILON));

        let left = rect(-10.0, 0.0, 0.0, 10.0);
        let d = calc_displacement(&AXES, &a, &left).unwrap();
        assert!(d.approx_eq(Vec2::new(-SEPARATION_MARGIN, 0.0), EPSILON));
    }

    #[test]
    fn test_calc_displacement_tie_keeps_first_axis() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        let b = rect(5.0, 5.0, 15.0, 15.0);
        let d = calc_displacement(&AXES, &a, &b).unwrap();
        assert!(d.approx_eq(Vec2::new(6.0, 0.0), EPSILON));
    }

    #[test]
    fn test_calc_displacement_no_axes() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        assert!(calc_displacement(&[], &a, &a).is_none());
        assert!(!sat_overlaps(&[], &a, &a));
    }

    #[test]
    fn test_displacement_separates() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        let b = rect(7.0, 4.0, 12.0, 20.0);
        let d = calc_displacement(&AXES, &a, &b).unwrap();
        let moved = rect(b.min.x + d.x, b.min.y + d.y, b.max.x + d.x, b.max.y + d.y);
        assert!(!sat_overlaps(&AXES, &a, &moved));
    }
}
