use crate::math::vec2::Vec2;

/// An Axis-Aligned Bounding Box defined by its minimum and maximum corner points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AABB {
    pub min: Vec2,
    pub max: Vec2,
}

impl AABB {
    /// Creates a new AABB, ordering the corners component-wise.
    pub fn new(min: Vec2, max: Vec2) -> Self {
        AABB {
            min: Vec2::new(min.x.min(max.x), min.y.min(max.y)),
            max: Vec2::new(min.x.max(max.x), min.y.max(max.y)),
        }
    }

    /// Checks if this AABB overlaps with another AABB. Touching boxes overlap.
    pub fn overlaps(&self, other: &AABB) -> bool {
        let x_overlap = self.max.x >= other.min.x && self.min.x <= other.max.x;
        let y_overlap = self.max.y >= other.min.y && self.min.y <= other.max.y;
        x_overlap && y_overlap
    }

    pub fn contains_point(&self, point: Vec2) -> bool {
        (self.min.x..=self.max.x).contains(&point.x) && (self.min.y..=self.max.y).contains(&point.y)
    }

    /// Merges another AABB into this one, expanding this AABB to contain both.
    pub fn merge(&mut self, other: &AABB) {
        self.min.x = self.min.x.min(other.min.x);
        self.min.y = self.min.y.min(other.min.y);
        self.max.x = self.max.x.max(other.max.x);
        self.max.y = self.max.y.max(other.max.y);
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) / 2.0
    }

    /// Creates an AABB that encompasses a set of points.
    pub fn from_points(points: &[Vec2]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let (min, max) = rest.iter().fold((*first, *first), |(min, max), p| {
            (
                Vec2::new(min.x.min(p.x), min.y.min(p.y)),
                Vec2::new(max.x.max(p.x), max.y.max(p.y)),
            )
        });
        Some(AABB { min, max })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_aabb_new_orders_corners() {
        let b = AABB::new(Vec2::new(5.0, -1.0), Vec2::new(1.0, 3.0));
        assert_eq!(b.min, Vec2::new(1.0, -1.0));
        assert_eq!(b.max, Vec2::new(5.0, 3.0));
        assert!((b.width() - 4.0).abs() < EPSILON);
        assert!((b.height() - 4.0).abs() < EPSILON);
        assert_eq!(b.center(), Vec2::new(3.0, 1.0));
    }

    #[test]
    fn test_aabb_overlaps() {
        let a = AABB::new(Vec2::ZERO, Vec2::new(10.0, 10.0));
        let b = AABB::new(Vec2::new(5.0, 5.0), Vec2::new(15.0, 15.0));
        let touching = AABB::new(Vec2::new(10.0, 0.0), Vec2::new(20.0, 10.0));
        let apart = AABB::new(Vec2::new(11.0, 0.0), Vec2::new(20.0, 10.0));
        assert!(a.overlaps(&b));
        assert!(a.overlaps(&touching));
        assert!(!a.overlaps(&apart));
    }

    #[test]
    fn test_aabb_merge() {
        let mut a = AABB::new(Vec2::ZERO, Vec2::new(1.0, 1.0));
        a.merge(&AABB::new(Vec2::new(-2.0, 0.5), Vec2::new(0.5, 4.0)));
        assert_eq!(a.min, Vec2::new(-2.0, 0.0));
        assert_eq!(a.max, Vec2::new(1.0, 4.0));
    }

    #[test]
    fn test_aabb_from_points() {
        assert!(AABB::from_points(&[]).is_none());
        let b = AABB::from_points(&[
            Vec2::new(1.0, 2.0),
            Vec2::new(-3.0, 7.0),
            Vec2::new(4.0, -1.0),
        ])
        .unwrap();
        assert_eq!(b.min, Vec2::new(-3.0, -1.0));
        assert_eq!(b.max, Vec2::new(4.0, 7.0));
        assert!(b.contains_point(Vec2::new(0.0, 0.0)));
        assert!(b.contains_point(Vec2::new(4.0, 7.0)));
        assert!(!b.contains_point(Vec2::new(4.1, 0.0)));
    }
}
