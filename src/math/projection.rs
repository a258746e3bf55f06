#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The `[min, max]` shadow a shape casts on an axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Projection {
    pub min: f64,
    pub max: f64,
}

impl Projection {
    /// Creates a projection, swapping the bounds if they arrive reversed.
    pub fn new(min: f64, max: f64) -> Self {
        Projection {
            min: min.min(max),
            max: min.max(max),
        }
    }

    /// Whether the two intervals share at least one point. Touching counts.
    pub fn overlaps(&self, other: &Projection) -> bool {
        !(self.min > other.max || other.min > self.max)
    }

    /// Signed distance `self` must travel along the axis to leave `other`.
    ///
    /// The magnitude is the smaller of the two push-out distances; a positive
    /// sign means pushing towards `+axis`. Only meaningful when the intervals
    /// overlap. Equal push-outs resolve to the negative direction.
    pub fn overlap(&self, other: &Projection) -> f64 {
        let forward = other.max - self.min;
        let backward = self.max - other.min;

        if backward > forward {
            forward
        } else {
            -backward
        }
    }

    /// Whether `other` lies entirely within this interval.
    pub fn contains(&self, other: &Projection) -> bool {
        self.min <= other.min && other.max <= self.max
    }

    pub fn length(&self) -> f64 {
        self.max - self.min
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_projection_new_orders_bounds() {
        let p = Projection::new(87.0, 9.0);
        assert_eq!(p.min, 9.0);
        assert_eq!(p.max, 87.0);
        assert!((p.length() - 78.0).abs() < EPSILON);
    }

    #[test]
    fn test_projection_overlaps() {
        let a = Projection::new(3.0, 4.0);
        let b = Projection::new(-3.0, 4.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));

        let c = Projection::new(-4.0, -3.0);
        assert!(!a.overlaps(&c));
        assert!(!c.overlaps(&a));
    }

    #[test]
    fn test_projection_touching_overlaps() {
        let a = Projection::new(0.0, 1.0);
        let b = Projection::new(1.0, 2.0);
        assert!(a.overlaps(&b));
        assert!(a.overlap(&b).abs() < EPSILON);
    }

    #[test]
    fn test_projection_overlap_contained() {
        // [3,4] inside [-3,4]: leaving to the right costs 1, to the left 7.
        let a = Projection::new(3.0, 4.0);
        let b = Projection::new(-3.0, 4.0);
        assert!((a.overlap(&b) - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_projection_overlap_sign() {
        let fixed = Projection::new(0.0, 10.0);

        // Sitting on the right end: pushed further right.
        let right = Projection::new(8.0, 12.0);
        assert!((right.overlap(&fixed) - 2.0).abs() < EPSILON);

        // Sitting on the left end: pushed further left.
        let left = Projection::new(-3.0, 1.0);
        assert!((left.overlap(&fixed) - -1.0).abs() < EPSILON);

        // Roles swapped: the sign flips, the magnitude stays.
        assert!((fixed.overlap(&right) - -2.0).abs() < EPSILON);
        assert!((fixed.overlap(&left) - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_projection_overlap_tie_goes_negative() {
        let a = Projection::new(-1.0, 1.0);
        let b = Projection::new(-1.0, 1.0);
        assert!((a.overlap(&b) - -2.0).abs() < EPSILON);
    }

    #[test]
    fn test_projection_contains() {
        let outer = Projection::new(0.0, 10.0);
        assert!(outer.contains(&Projection::new(2.0, 3.0)));
        assert!(!outer.contains(&Projection::new(9.0, 11.0)));
    }
}
